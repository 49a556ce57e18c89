use crate::{
    impl_text_view, styled_line,
    service::transform::MILLIS_PER_MINUTE,
    ui::{Controller, TextCreationResult},
};

// ============================================================================
// Kill Events View
// ============================================================================

fn kill_events_view(ctrl: &Controller) -> TextCreationResult {
    let events = ctrl.manager.get_event_rows()?;

    let mut lines = vec![styled_line!(), styled_line!("Champion kills in the latest match:"; Cyan)];
    lines.push(styled_line!());

    let mut any = false;
    for row in events.iter().filter(|e| e.kind == "CHAMPION_KILL") {
        any = true;
        let killer = row.killer_id.map_or("?".to_string(), |id| id.to_string());
        let victim = row.victim_id.map_or("?".to_string(), |id| id.to_string());
        lines.push(styled_line!(
            "[{:>3} min] participant {} killed participant {} at ({}, {})",
            row.timestamp_ms / MILLIS_PER_MINUTE,
            killer,
            victim,
            row.position_x,
            row.position_y
        ));
    }

    if !any {
        lines.push(styled_line!("No kills recorded. A peaceful game!"; Red));
    }

    Ok(lines)
}

impl_text_view!(KillEventsView, kill_events_view, "Kill Events");
