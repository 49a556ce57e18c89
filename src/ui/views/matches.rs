use crate::{
    impl_text_view, styled_line, styled_span,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Recent Matches View
// ============================================================================

const RECENT_MATCH_COUNT: usize = 5;

fn recent_matches_view(ctrl: &Controller) -> TextCreationResult {
    let matches = ctrl.manager.get_match_list()?;

    let mut lines = vec![
        styled_line!(),
        styled_line!(LIST [
            styled_span!("{:<20}", "Timestamp"; Yellow Bold),
            styled_span!("{:<14}", "Role"; Yellow Bold),
            styled_span!("{:<12}", "Lane"; Yellow Bold),
            styled_span!("{:<10}", "Queue"; Yellow Bold),
            styled_span!("Champion"; Yellow Bold),
        ]),
    ];

    for entry in matches.iter().take(RECENT_MATCH_COUNT) {
        lines.push(styled_line!(
            "{:<20}{:<14}{:<12}{:<10}{}",
            entry.timestamp.format("%d.%m.%Y %H:%M"),
            entry.role,
            entry.lane,
            entry.queue,
            entry.champion_id
        ));
    }

    if matches.is_empty() {
        lines.push(styled_line!("No matches on record!"; Red));
    }

    Ok(lines)
}

impl_text_view!(RecentMatchesView, recent_matches_view, "Recent Matches");
