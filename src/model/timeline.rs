use super::ids::ParticipantId;

#[derive(Debug)]
pub struct Timeline {
    pub frames: Vec<Frame>,
}

/// Periodic timeline snapshot, roughly one per game minute.
#[derive(Debug)]
pub struct Frame {
    pub timestamp_ms: i64,
    pub participant_frames: Vec<ParticipantFrame>,
    pub events: Vec<Event>,
}

#[derive(Debug)]
pub struct ParticipantFrame {
    pub participant_id: ParticipantId,
    pub position: Position,
    pub current_gold: i32,
    pub total_gold: i32,
    pub level: u8,
    pub xp: i32,
    pub minions_killed: u16,
    pub jungle_minions_killed: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

/// In-frame occurrence (kill, ward, building, item, ...). Most fields only
/// apply to some event kinds, hence the options.
#[derive(Debug)]
pub struct Event {
    pub kind: String,
    pub timestamp_ms: i64,
    pub participant_id: Option<ParticipantId>,
    pub killer_id: Option<ParticipantId>,
    pub victim_id: Option<ParticipantId>,
    pub item_id: Option<i32>,
    pub skill_slot: Option<u8>,
    pub ward_type: Option<String>,
    pub monster_type: Option<String>,
    pub building_type: Option<String>,
    pub position: Option<Position>,
}
