use std::fmt::Display;

use chrono::{DateTime, Utc};

use super::ids::{AccountId, ChampionId, MatchId, ParticipantId};

/// The two sides of a match. Rendered as the numeric ids the API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamId {
    Blue,
    Red,
}

impl TeamId {
    pub fn id(&self) -> u16 {
        match self {
            TeamId::Blue => 100,
            TeamId::Red => 200,
        }
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Debug, Clone)]
pub struct MatchListEntry {
    pub match_id: MatchId,
    pub champion_id: ChampionId,
    pub queue: u16,
    pub timestamp: DateTime<Utc>,
    pub role: String,
    pub lane: String,
}

#[derive(Debug)]
pub struct MatchDetail {
    pub game_id: MatchId,
    pub participants: Vec<Participant>,
    pub identities: Vec<ParticipantIdentity>,
}

#[derive(Debug)]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub champion_id: ChampionId,
    pub team_id: TeamId,
    pub stats: ParticipantStats,
}

#[derive(Debug)]
pub struct ParticipantStats {
    pub win: bool,
    pub kills: u16,
    pub deaths: u16,
    pub assists: u16,
    pub gold_earned: u32,
    pub total_minions_killed: u16,
    pub champ_level: u8,
    pub vision_score: u16,
}

#[derive(Debug)]
pub struct ParticipantIdentity {
    pub participant_id: ParticipantId,
    pub player: Player,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub account_id: AccountId,
    pub summoner_name: String,
}
