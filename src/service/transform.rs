use std::{collections::HashMap, fmt};

use crate::model::{
    ids::ParticipantId,
    matches::{MatchDetail, Participant, TeamId},
    tables::{EventCoord, EventRow, FrameRow, ParticipantRow},
    timeline::Timeline,
};

/// Every match has 2 teams of 5 players.
pub const ROSTER_SIZE: usize = 10;

pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Flattens the nested stats block of each participant into one row and joins
/// it on participant id with the matching identity record. All rows share the
/// match's game id.
pub fn flatten_participants(detail: &MatchDetail) -> Result<Vec<ParticipantRow>, TransformError> {
    if detail.participants.len() != ROSTER_SIZE || detail.identities.len() != ROSTER_SIZE {
        return Err(TransformError::RosterSize(
            detail.participants.len(),
            detail.identities.len(),
        ));
    }

    let identities: HashMap<_, _> = detail.identities.iter().map(|i| (i.participant_id, i)).collect();

    let mut participants: Vec<&Participant> = detail.participants.iter().collect();
    participants.sort_by_key(|p| p.participant_id);

    let mut rows = Vec::with_capacity(ROSTER_SIZE);
    for participant in participants {
        let identity = identities
            .get(&participant.participant_id)
            .ok_or(TransformError::JoinMismatch(participant.participant_id))?;

        rows.push(ParticipantRow {
            game_id: detail.game_id,
            participant_id: participant.participant_id,
            champion_id: participant.champion_id,
            team_id: participant.team_id,
            win: participant.stats.win,
            kills: participant.stats.kills,
            deaths: participant.stats.deaths,
            assists: participant.stats.assists,
            gold_earned: participant.stats.gold_earned,
            total_minions_killed: participant.stats.total_minions_killed,
            champ_level: participant.stats.champ_level,
            vision_score: participant.stats.vision_score,
            summoner_name: identity.player.summoner_name.clone(),
            account_id: identity.player.account_id.clone(),
        });
    }

    Ok(rows)
}

/// One row per participant per frame, joined with the participant table on
/// participant id to attach the team. Frame timestamps are converted from
/// milliseconds to whole minutes (truncating), the display unit of all charts.
pub fn flatten_frames(timeline: &Timeline, participants: &[ParticipantRow]) -> Result<Vec<FrameRow>, TransformError> {
    let teams: HashMap<ParticipantId, TeamId> = participants.iter().map(|p| (p.participant_id, p.team_id)).collect();

    let mut rows = Vec::new();
    for frame in &timeline.frames {
        let minute = frame.timestamp_ms / MILLIS_PER_MINUTE;
        for pf in &frame.participant_frames {
            let team_id = *teams
                .get(&pf.participant_id)
                .ok_or(TransformError::JoinMismatch(pf.participant_id))?;

            rows.push(FrameRow {
                timestamp: minute,
                participant_id: pf.participant_id,
                x: pf.position.x,
                y: pf.position.y,
                current_gold: pf.current_gold,
                total_gold: pf.total_gold,
                level: pf.level,
                xp: pf.xp,
                minions_killed: pf.minions_killed,
                jungle_minions_killed: pf.jungle_minions_killed,
                team_id,
            });
        }
    }

    Ok(rows)
}

/// Concatenates all frames' events into one table, decomposing the position
/// field into two scalar columns with the "none" sentinel when absent.
pub fn flatten_events(timeline: &Timeline) -> Vec<EventRow> {
    let mut rows = Vec::new();
    for frame in &timeline.frames {
        for event in &frame.events {
            let (position_x, position_y) = match &event.position {
                Some(pos) => (EventCoord::Known(pos.x), EventCoord::Known(pos.y)),
                None => (EventCoord::Unknown, EventCoord::Unknown),
            };

            rows.push(EventRow {
                kind: event.kind.clone(),
                timestamp_ms: event.timestamp_ms,
                participant_id: event.participant_id,
                killer_id: event.killer_id,
                victim_id: event.victim_id,
                item_id: event.item_id,
                skill_slot: event.skill_slot,
                ward_type: event.ward_type.clone(),
                monster_type: event.monster_type.clone(),
                building_type: event.building_type.clone(),
                position_x,
                position_y,
            });
        }
    }
    rows
}

#[derive(Debug)]
pub enum TransformError {
    RosterSize(usize, usize),
    JoinMismatch(ParticipantId),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::RosterSize(participants, identities) => write!(
                f,
                "Expected {} participants and identities, got {} and {}",
                ROSTER_SIZE, participants, identities
            ),
            TransformError::JoinMismatch(participant_id) => {
                write!(f, "No join partner for participant {}", participant_id)
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::model::{
        matches::{MatchDetail, Participant, ParticipantIdentity, ParticipantStats, Player},
        timeline::{Event, Frame, ParticipantFrame, Position, Timeline},
    };

    use super::*;

    fn participant(id: u8, team_id: TeamId) -> Participant {
        Participant {
            participant_id: id.into(),
            champion_id: (id as i32 * 10).into(),
            team_id,
            stats: ParticipantStats {
                win: team_id == TeamId::Blue,
                kills: u16::from(id),
                deaths: 2,
                assists: 5,
                gold_earned: 10_000 + u32::from(id),
                total_minions_killed: 150,
                champ_level: 15,
                vision_score: 20,
            },
        }
    }

    fn identity(id: u8) -> ParticipantIdentity {
        ParticipantIdentity {
            participant_id: id.into(),
            player: Player {
                account_id: format!("acc-{}", id).into(),
                summoner_name: format!("Player {}", id),
            },
        }
    }

    pub(crate) fn full_match_detail() -> MatchDetail {
        let participants = (1..=10u8)
            .map(|id| participant(id, if id <= 5 { TeamId::Blue } else { TeamId::Red }))
            .collect();
        let identities = (1..=10u8).map(identity).collect();
        MatchDetail {
            game_id: 4242u64.into(),
            participants,
            identities,
        }
    }

    fn participant_frame(id: u8, total_gold: i32) -> ParticipantFrame {
        ParticipantFrame {
            participant_id: id.into(),
            position: Position {
                x: i64::from(id) * 100,
                y: i64::from(id) * 200,
            },
            current_gold: total_gold / 2,
            total_gold,
            level: 3,
            xp: 900,
            minions_killed: 20,
            jungle_minions_killed: 4,
        }
    }

    fn kill_event(timestamp_ms: i64, position: Option<Position>) -> Event {
        Event {
            kind: "CHAMPION_KILL".to_string(),
            timestamp_ms,
            participant_id: None,
            killer_id: Some(1.into()),
            victim_id: Some(6.into()),
            item_id: None,
            skill_slot: None,
            ward_type: None,
            monster_type: None,
            building_type: None,
            position,
        }
    }

    pub(crate) fn frame(timestamp_ms: i64, gold_per_blue: i32, gold_per_red: i32) -> Frame {
        let participant_frames = (1..=10u8)
            .map(|id| participant_frame(id, if id <= 5 { gold_per_blue } else { gold_per_red }))
            .collect();
        Frame {
            timestamp_ms,
            participant_frames,
            events: Vec::new(),
        }
    }

    #[test]
    fn participants_flatten_to_exactly_ten_rows() {
        let rows = flatten_participants(&full_match_detail()).unwrap();

        assert_eq!(rows.len(), 10);
        assert_eq!(rows.iter().filter(|r| r.team_id == TeamId::Blue).count(), 5);
        assert_eq!(rows.iter().filter(|r| r.team_id == TeamId::Red).count(), 5);
        assert!(rows.iter().all(|r| r.game_id == 4242u64.into()));
        assert_eq!(rows[0].summoner_name, "Player 1");
        assert_eq!(rows[9].participant_id, 10.into());
    }

    #[test]
    fn participants_reject_short_roster() {
        let mut detail = full_match_detail();
        detail.participants.pop();

        assert!(matches!(
            flatten_participants(&detail),
            Err(TransformError::RosterSize(9, 10))
        ));
    }

    #[test]
    fn participants_reject_missing_identity() {
        let mut detail = full_match_detail();
        detail.identities[3] = identity(42);

        assert!(matches!(
            flatten_participants(&detail),
            Err(TransformError::JoinMismatch(id)) if id == 4.into()
        ));
    }

    #[test]
    fn frame_timestamps_truncate_to_minutes() {
        let timeline = Timeline {
            frames: vec![frame(0, 500, 500), frame(125_000, 2_000, 1_800)],
        };
        let participants = flatten_participants(&full_match_detail()).unwrap();

        let rows = flatten_frames(&timeline, &participants).unwrap();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].timestamp, 0);
        assert_eq!(rows[10].timestamp, 2);
    }

    #[test]
    fn frames_join_team_on_participant_id() {
        let timeline = Timeline {
            frames: vec![frame(60_000, 1_000, 900)],
        };
        let participants = flatten_participants(&full_match_detail()).unwrap();

        let rows = flatten_frames(&timeline, &participants).unwrap();
        let row = rows.iter().find(|r| r.participant_id == 7.into()).unwrap();
        assert_eq!(row.team_id, TeamId::Red);
        assert_eq!(row.total_gold, 900);
    }

    #[test]
    fn frames_with_unknown_participant_fail_the_join() {
        let mut timeline = Timeline {
            frames: vec![frame(0, 500, 500)],
        };
        timeline.frames[0].participant_frames.push(participant_frame(11, 500));
        let participants = flatten_participants(&full_match_detail()).unwrap();

        assert!(matches!(
            flatten_frames(&timeline, &participants),
            Err(TransformError::JoinMismatch(id)) if id == 11.into()
        ));
    }

    #[test]
    fn event_positions_decompose_with_none_sentinel() {
        let mut first = frame(0, 500, 500);
        first.events = vec![
            kill_event(10_000, Some(Position { x: 10, y: 20 })),
            kill_event(20_000, None),
        ];
        let timeline = Timeline { frames: vec![first] };

        let rows = flatten_events(&timeline);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position_x, EventCoord::Known(10));
        assert_eq!(rows[0].position_y, EventCoord::Known(20));
        assert_eq!(rows[1].position_x, EventCoord::Unknown);
        assert_eq!(rows[1].position_x.to_string(), "none");
        assert_eq!(rows[1].position_y.to_string(), "none");
    }

    #[test]
    fn flattening_is_deterministic() {
        let detail = full_match_detail();
        let timeline = Timeline {
            frames: vec![frame(0, 500, 500), frame(60_000, 1_500, 1_400)],
        };

        let participants_a = flatten_participants(&detail).unwrap();
        let participants_b = flatten_participants(&detail).unwrap();
        assert_eq!(participants_a, participants_b);

        let frames_a = flatten_frames(&timeline, &participants_a).unwrap();
        let frames_b = flatten_frames(&timeline, &participants_b).unwrap();
        assert_eq!(frames_a, frames_b);
    }
}
