use std::fmt::Display;

use super::{
    ids::{AccountId, ChampionId, MatchId, ParticipantId},
    matches::TeamId,
};

/// One row per participant of a match, stats block flattened into columns and
/// joined with the identity record's player block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantRow {
    pub game_id: MatchId,
    pub participant_id: ParticipantId,
    pub champion_id: ChampionId,
    pub team_id: TeamId,
    pub win: bool,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub gold_earned: u32,
    pub total_minions_killed: u16,
    pub champ_level: u8,
    pub vision_score: u16,
    pub summoner_name: String,
    pub account_id: AccountId,
}

/// One row per (frame, participant). Timestamps are whole game minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRow {
    pub timestamp: i64,
    pub participant_id: ParticipantId,
    pub x: i64,
    pub y: i64,
    pub current_gold: i32,
    pub total_gold: i32,
    pub level: u8,
    pub xp: i32,
    pub minions_killed: u16,
    pub jungle_minions_killed: u16,
    pub team_id: TeamId,
}

/// Decomposed event position coordinate. Events without a structured position
/// keep the literal "none" rendering of the original tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCoord {
    Known(i64),
    Unknown,
}

impl Display for EventCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCoord::Known(value) => write!(f, "{}", value),
            EventCoord::Unknown => write!(f, "none"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
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
    pub position_x: EventCoord,
    pub position_y: EventCoord,
}

/// Per-minute team gold summary. The two clipped columns hold each team's
/// positive lead, at most one of them non-zero per timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct GoldDiffRow {
    pub timestamp: i64,
    pub team100_gold: i64,
    pub team200_gold: i64,
    pub gold_diff: i64,
    pub team100_gold_diff: i64,
    pub team200_gold_diff: i64,
}
