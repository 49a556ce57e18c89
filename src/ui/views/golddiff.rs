use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use crate::{
    model::tables::GoldDiffRow,
    ui::{Controller, RenderContext, ViewResult},
};

use super::RenderableView;

// ============================================================================
// Gold Differential Chart View
// ============================================================================

/// Two-series chart of each team's gold lead over game time. The elapsed-time
/// cap acts as the slider of the original dashboard: arrow keys move it and
/// every move re-filters and redraws the whole chart.
pub struct GoldDiffChartView {
    rows: Vec<GoldDiffRow>,
    minute_cap: i64,
    max_minute: i64,
    error: Option<String>,
}

impl GoldDiffChartView {
    pub fn new(controller: &Controller) -> Self {
        match controller.manager.get_gold_differential() {
            Ok(rows) => {
                let max_minute = rows.last().map_or(0, |row| row.timestamp);
                Self {
                    rows,
                    minute_cap: max_minute,
                    max_minute,
                    error: None,
                }
            }
            Err(e) => Self {
                rows: Vec::new(),
                minute_cap: 0,
                max_minute: 0,
                error: Some(format!("{}", e)),
            },
        }
    }
}

impl RenderableView for GoldDiffChartView {
    fn title(&self) -> &str {
        "Gold Differential"
    }

    fn on_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Left => {
                self.minute_cap = (self.minute_cap - 1).max(0);
                true
            }
            KeyCode::Right => {
                self.minute_cap = (self.minute_cap + 1).min(self.max_minute);
                true
            }
            _ => false,
        }
    }

    fn render(&self, rc: RenderContext) -> ViewResult {
        if let Some(error) = &self.error {
            rc.error(error);
            return Ok(());
        }

        // Filtered on every redraw so the cap behaves like a slider
        let visible: Vec<&GoldDiffRow> = self.rows.iter().filter(|row| row.timestamp <= self.minute_cap).collect();

        let blue: Vec<(f64, f64)> = visible
            .iter()
            .map(|row| (row.timestamp as f64, row.team100_gold_diff as f64))
            .collect();
        let red: Vec<(f64, f64)> = visible
            .iter()
            .map(|row| (row.timestamp as f64, row.team200_gold_diff as f64))
            .collect();

        let max_lead = visible
            .iter()
            .map(|row| row.team100_gold_diff.max(row.team200_gold_diff))
            .max()
            .unwrap_or(0)
            .max(1);

        let datasets = vec![
            Dataset::default()
                .name("Blue team")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&blue),
            Dataset::default()
                .name("Red team")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&red),
        ];

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(rc.area);

        let x_max = self.max_minute.max(1) as f64;
        let chart = Chart::new(datasets)
            .block(rc.block)
            .x_axis(
                Axis::default()
                    .title("Time (mins)")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, x_max])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format!("{}", self.max_minute / 2)),
                        Span::raw(format!("{}", self.max_minute)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title("Gold")
                    .style(Style::default().fg(Color::DarkGray))
                    .bounds([0.0, max_lead as f64])
                    .labels(vec![
                        Span::raw("0"),
                        Span::raw(format!("{}", max_lead / 2)),
                        Span::raw(format!("{}", max_lead)),
                    ]),
            );
        rc.frame.render_widget(chart, chunks[0]);

        let footer = Paragraph::new(format!(
            "Elapsed game time: {} / {} min  (←/→ to adjust)",
            self.minute_cap, self.max_minute
        ))
        .style(Style::default().fg(Color::DarkGray));
        rc.frame.render_widget(footer, chunks[1]);

        Ok(())
    }
}
