use std::io::stdout;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame, Terminal,
};

use crate::{
    service::data_manager::{DataManager, DataRetrievalResult},
    ui::{views::*, Controller, RenderContext},
};

use super::ReplError;

type ViewFactory = fn(&Controller) -> Box<dyn RenderableView>;

enum AppState {
    EnteringSummoner { buffer: String, error: Option<String> },
    Menu,
    ViewingOutput(Box<dyn RenderableView>),
}

struct MenuEntry {
    description: &'static str,
    factory: Option<ViewFactory>,
}

struct App {
    menu_entries: Vec<MenuEntry>,
    selected: usize,
    should_quit: bool,
    should_refresh: bool,
    state: AppState,
    scroll_offset: u16,
}

impl App {
    fn new() -> Self {
        let menu_entries = App::get_menu_entries();
        let selected = menu_entries.iter().position(|e| e.factory.is_some()).unwrap_or(0);
        Self {
            menu_entries,
            selected,
            should_quit: false,
            should_refresh: false,
            state: AppState::EnteringSummoner {
                buffer: String::new(),
                error: None,
            },
            scroll_offset: 0,
        }
    }

    fn is_in_menu(&self) -> bool {
        matches!(self.state, AppState::Menu)
    }

    fn next(&mut self) {
        match &self.state {
            AppState::Menu => {
                if self.menu_entries.is_empty() {
                    return;
                }
                let len = self.menu_entries.len();
                let mut i = self.selected;
                loop {
                    i = (i + 1) % len;
                    if self.menu_entries[i].factory.is_some() {
                        self.selected = i;
                        break;
                    }
                    if i == self.selected {
                        break; // no selectable entries
                    }
                }
            }
            AppState::ViewingOutput(_) => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
            }
            AppState::EnteringSummoner { .. } => {}
        }
    }

    fn previous(&mut self) {
        match &self.state {
            AppState::Menu => {
                if self.menu_entries.is_empty() {
                    return;
                }
                let len = self.menu_entries.len();
                let mut i = self.selected;
                loop {
                    i = if i == 0 { len - 1 } else { i - 1 };
                    if self.menu_entries[i].factory.is_some() {
                        self.selected = i;
                        break;
                    }
                    if i == self.selected {
                        break; // no selectable entries
                    }
                }
            }
            AppState::ViewingOutput(_) => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
            AppState::EnteringSummoner { .. } => {}
        }
    }

    fn page_down(&mut self, amount: u16) {
        if !self.is_in_menu() {
            self.scroll_offset = self.scroll_offset.saturating_add(amount);
        }
    }

    fn page_up(&mut self, amount: u16) {
        if !self.is_in_menu() {
            self.scroll_offset = self.scroll_offset.saturating_sub(amount);
        }
    }

    fn render_summoner_input(&self, frame: &mut Frame, area: Rect, buffer: &str, error: Option<&str>) {
        let mut lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::raw("  Summoner name: "),
                Span::styled(format!("{}_", buffer), Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::raw(""),
            Line::raw("  Press Enter to load the dashboard for this summoner."),
        ];
        if let Some(error) = error {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::raw("  [!] "),
                Span::styled(error.to_string(), Style::default().fg(Color::Red)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title("Summoner Lookup (Enter to submit, Esc to cancel)")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        );
        frame.render_widget(paragraph, area);
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        // Split the provided area into a main list area and a small footer area
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        // Build list items; headers (factory == None) are styled and non-selectable.
        let mut items: Vec<ListItem> = Vec::with_capacity(self.menu_entries.len());
        for (i, entry) in self.menu_entries.iter().enumerate() {
            if entry.factory.is_none() {
                // Group header - cyan bold
                items.push(
                    ListItem::new(format!("━━ {} ━━", entry.description))
                        .style(Style::default().fg(Color::LightCyan).add_modifier(Modifier::BOLD)),
                );
            } else {
                // Regular menu item - subtle indicator for selected item
                let prefix = if i == self.selected { "  ► " } else { "    " };
                items.push(ListItem::new(format!("{}{}", prefix, entry.description)));
            }
        }

        let mut list_state = ListState::default();
        // Ensure selected points to a selectable entry (it should already), but guard anyway
        let sel = if self
            .menu_entries
            .get(self.selected)
            .map(|e| e.factory.is_some())
            .unwrap_or(false)
        {
            Some(self.selected)
        } else {
            // find first selectable
            self.menu_entries.iter().position(|e| e.factory.is_some())
        };
        list_state.select(sel);

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .padding(ratatui::widgets::Padding::uniform(1))
                    .title("Commands (↑/↓ to navigate, Enter to select)")
                    .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            )
            .highlight_style(Style::default().bg(Color::White).fg(Color::Black))
            .highlight_symbol("");

        // Render the selectable menu in the top chunk
        frame.render_stateful_widget(list, chunks[0], &mut list_state);

        // Render the footer with subtle instructions
        let footer = Paragraph::new("Switch summoner: (s)    Refresh data: (r)    Quit: (q)")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::NONE));
        frame.render_widget(footer, chunks[1]);
    }

    /// A failed refresh drops back to the summoner prompt with the error shown
    /// instead of tearing down the whole dashboard.
    fn apply_refresh_result(&mut self, result: DataRetrievalResult<()>) {
        if let Err(err) = result {
            self.state = AppState::EnteringSummoner {
                buffer: String::new(),
                error: Some(format!("{}", err)),
            };
        }
    }

    fn handle_summoner_key(&mut self, code: KeyCode, manager: &mut DataManager) {
        match code {
            KeyCode::Enter => {
                let name = match &self.state {
                    AppState::EnteringSummoner { buffer, .. } => buffer.trim().to_string(),
                    _ => return,
                };
                if name.is_empty() {
                    return;
                }
                match manager.load_summoner(&name) {
                    Ok(()) => self.state = AppState::Menu,
                    Err(err) => {
                        if let AppState::EnteringSummoner { error, .. } = &mut self.state {
                            *error = Some(format!("{}", err));
                        }
                    }
                }
            }
            KeyCode::Esc => {
                // Without a loaded summoner there is nothing to go back to
                if manager.get_summoner().is_ok() {
                    self.state = AppState::Menu;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Backspace => {
                if let AppState::EnteringSummoner { buffer, .. } = &mut self.state {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) => {
                if let AppState::EnteringSummoner { buffer, .. } = &mut self.state {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
        manager: &mut DataManager,
    ) -> Result<(), ReplError> {
        loop {
            loop {
                let header = match manager.get_summoner() {
                    Ok(summoner) => format!(" Welcome, {}!", summoner.name),
                    Err(_) => " Enter a summoner name to get started".to_string(),
                };

                terminal.draw(|f| {
                    let chunks = Layout::default()
                        .direction(Direction::Vertical)
                        .constraints([Constraint::Length(3), Constraint::Min(0)])
                        .split(f.size());

                    // Title with subtle welcome message
                    let title = Paragraph::new(header.as_str())
                        .style(Style::default().add_modifier(Modifier::BOLD))
                        .block(
                            Block::default()
                                .borders(Borders::ALL)
                                .border_style(Style::default().fg(Color::Cyan))
                                .title("Riftgold - LoL Match Dashboard")
                                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                        );
                    f.render_widget(title, chunks[0]);

                    // Render current state
                    match &self.state {
                        AppState::EnteringSummoner { buffer, error } => {
                            self.render_summoner_input(f, chunks[1], buffer, error.as_deref());
                        }
                        AppState::Menu => {
                            self.render_menu(f, chunks[1]);
                        }
                        AppState::ViewingOutput(view) => {
                            let block = Block::default()
                                .borders(ratatui::widgets::Borders::ALL)
                                .padding(ratatui::widgets::Padding::horizontal(1))
                                .title(format!(
                                    "{} (↑/↓ or PgUp/PgDown to scroll, Esc/q to return)",
                                    view.title()
                                ))
                                .title_style(
                                    Style::default()
                                        .fg(Color::Cyan)
                                        .add_modifier(ratatui::style::Modifier::BOLD),
                                )
                                .border_style(Style::default().fg(Color::Cyan));

                            let rc = RenderContext {
                                frame: f,
                                area: chunks[1],
                                scroll_offset: self.scroll_offset,
                                block,
                            };
                            let _ = view.render(rc);
                        }
                    }
                })?;

                if event::poll(std::time::Duration::from_millis(100))? {
                    if let Event::Key(key) = event::read()? {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }

                        if matches!(self.state, AppState::EnteringSummoner { .. }) {
                            self.handle_summoner_key(key.code, manager);
                            if self.should_quit {
                                break;
                            }
                            continue;
                        }

                        if let AppState::ViewingOutput(view) = &mut self.state {
                            if view.on_key(key.code) {
                                continue;
                            }
                        }

                        match key.code {
                            KeyCode::Char('q') if self.is_in_menu() => {
                                self.should_quit = true;
                                break;
                            }
                            KeyCode::Char('r') if self.is_in_menu() => {
                                self.should_refresh = true;
                                break;
                            }
                            KeyCode::Char('s') if self.is_in_menu() => {
                                self.state = AppState::EnteringSummoner {
                                    buffer: String::new(),
                                    error: None,
                                };
                            }
                            KeyCode::Up => self.previous(),
                            KeyCode::Down => self.next(),
                            KeyCode::PageUp => self.page_up(10),
                            KeyCode::PageDown => self.page_down(10),
                            KeyCode::Esc | KeyCode::Char('q') if !self.is_in_menu() => {
                                self.state = AppState::Menu;
                                self.scroll_offset = 0;
                            }
                            KeyCode::Enter if self.is_in_menu() => {
                                if let Some(factory) = self.menu_entries[self.selected].factory {
                                    let ctrl = Controller { manager };
                                    let view = factory(&ctrl);

                                    terminal.clear()?;
                                    self.state = AppState::ViewingOutput(view);
                                    self.scroll_offset = 0;
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }

            if self.should_refresh {
                self.should_refresh = false;
                let result = manager.refresh();
                self.apply_refresh_result(result);
            }
        }
    }

    fn get_menu_entries() -> Vec<MenuEntry> {
        macro_rules! menu_entry {
            (group: $desc:expr) => {
                MenuEntry {
                    description: $desc,
                    factory: None,
                }
            };
            (item: $desc:expr, $view:ty) => {
                MenuEntry {
                    description: $desc,
                    factory: Some(|ctrl| Box::new(<$view>::new(ctrl))),
                }
            };
        }

        vec![
            // Summoner
            menu_entry!(group: "Summoner"),
            menu_entry!(item: "Summoner Info", SummonerInfoView),
            menu_entry!(item: "Recent Matches", RecentMatchesView),
            // Latest match
            menu_entry!(group: "Latest Match"),
            menu_entry!(item: "Gold Differential Chart", GoldDiffChartView),
            menu_entry!(item: "Kill Events", KillEventsView),
        ]
    }
}

pub fn run(mut manager: DataManager) -> Result<(), ReplError> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal, &mut manager);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    result
}
