use json::{object::Object, JsonValue};

use crate::model::timeline::{Event, Frame, ParticipantFrame, Position, Timeline};

use super::ParsingError;

pub fn parse_timeline(json: &JsonValue) -> Result<Timeline, ParsingError> {
    if let JsonValue::Object(obj) = json {
        if let JsonValue::Array(array) = &obj["frames"] {
            let mut frames = Vec::with_capacity(array.len());
            for entry in array {
                if let JsonValue::Object(frame_obj) = entry {
                    frames.push(parse_frame_obj(frame_obj)?);
                } else {
                    return Err(ParsingError::InvalidType("frame".into()));
                }
            }
            return Ok(Timeline { frames });
        }
        return Err(ParsingError::InvalidType("frames".into()));
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_frame_obj(obj: &Object) -> Result<Frame, ParsingError> {
    let timestamp = obj["timestamp"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("timestamp".into()))?;

    // participantFrames is an object keyed by stringified participant id, so
    // upstream ordering is arbitrary. Sort by id for stable tables.
    let mut participant_frames = Vec::new();
    match &obj["participantFrames"] {
        JsonValue::Object(pf_map) => {
            for (_, pf_json) in pf_map.iter() {
                match pf_json {
                    JsonValue::Object(pf_obj) => participant_frames.push(parse_participant_frame(pf_obj)?),
                    _ => return Err(ParsingError::InvalidType("participantFrame".into())),
                }
            }
        }
        _ => return Err(ParsingError::InvalidType("participantFrames".into())),
    }
    participant_frames.sort_by_key(|pf| pf.participant_id);

    let mut events = Vec::new();
    match &obj["events"] {
        JsonValue::Array(array) => {
            for entry in array {
                match entry {
                    JsonValue::Object(event_obj) => events.push(parse_event_obj(event_obj)?),
                    _ => return Err(ParsingError::InvalidType("event".into())),
                }
            }
        }
        _ => return Err(ParsingError::InvalidType("events".into())),
    }

    Ok(Frame {
        timestamp_ms: timestamp,
        participant_frames,
        events,
    })
}

fn parse_participant_frame(obj: &Object) -> Result<ParticipantFrame, ParsingError> {
    let participant_id = obj["participantId"]
        .as_u8()
        .ok_or(ParsingError::InvalidType("participantId".into()))?;
    let position = parse_position(&obj["position"]).ok_or(ParsingError::InvalidType("position".into()))?;
    let current_gold = obj["currentGold"]
        .as_i32()
        .ok_or(ParsingError::InvalidType("currentGold".into()))?;
    let total_gold = obj["totalGold"]
        .as_i32()
        .ok_or(ParsingError::InvalidType("totalGold".into()))?;
    let level = obj["level"].as_u8().ok_or(ParsingError::InvalidType("level".into()))?;
    let xp = obj["xp"].as_i32().ok_or(ParsingError::InvalidType("xp".into()))?;
    let minions_killed = obj["minionsKilled"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("minionsKilled".into()))?;
    let jungle_minions_killed = obj["jungleMinionsKilled"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("jungleMinionsKilled".into()))?;

    Ok(ParticipantFrame {
        participant_id: participant_id.into(),
        position,
        current_gold,
        total_gold,
        level,
        xp,
        minions_killed,
        jungle_minions_killed,
    })
}

// Events carry positions only for some kinds, and occasionally as junk values.
// Anything that is not an object with numeric x/y counts as absent.
fn parse_position(json: &JsonValue) -> Option<Position> {
    match json {
        JsonValue::Object(obj) => {
            let x = obj["x"].as_i64()?;
            let y = obj["y"].as_i64()?;
            Some(Position { x, y })
        }
        _ => None,
    }
}

fn parse_event_obj(obj: &Object) -> Result<Event, ParsingError> {
    let kind = obj["type"].as_str().ok_or(ParsingError::InvalidType("type".into()))?;
    let timestamp = obj["timestamp"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("timestamp".into()))?;

    Ok(Event {
        kind: kind.to_string(),
        timestamp_ms: timestamp,
        participant_id: obj["participantId"].as_u8().map(Into::into),
        killer_id: obj["killerId"].as_u8().map(Into::into),
        victim_id: obj["victimId"].as_u8().map(Into::into),
        item_id: obj["itemId"].as_i32(),
        skill_slot: obj["skillSlot"].as_u8(),
        ward_type: obj["wardType"].as_str().map(str::to_string),
        monster_type: obj["monsterType"].as_str().map(str::to_string),
        building_type: obj["buildingType"].as_str().map(str::to_string),
        position: parse_position(&obj["position"]),
    })
}

#[cfg(test)]
mod tests {
    use json::{array, object};

    use crate::{model::tables::EventCoord, service::transform::flatten_events};

    use super::*;

    fn frame_json(timestamp: i64) -> JsonValue {
        object! {
            timestamp: timestamp,
            participantFrames: object! {
                "2": object! {
                    participantId: 2,
                    position: object! { x: 400, y: 500 },
                    currentGold: 150,
                    totalGold: 650,
                    level: 2,
                    xp: 420,
                    minionsKilled: 9,
                    jungleMinionsKilled: 0,
                },
                "1": object! {
                    participantId: 1,
                    position: object! { x: 100, y: 200 },
                    currentGold: 100,
                    totalGold: 600,
                    level: 2,
                    xp: 400,
                    minionsKilled: 12,
                    jungleMinionsKilled: 0,
                },
            },
            events: array![
                object! {
                    "type": "CHAMPION_KILL",
                    timestamp: timestamp + 1_000,
                    killerId: 1,
                    victimId: 2,
                    position: object! { x: 10, y: 20 },
                },
                object! {
                    "type": "SKILL_LEVEL_UP",
                    timestamp: timestamp + 2_000,
                    participantId: 1,
                    skillSlot: 1,
                },
            ],
        }
    }

    #[test]
    fn frames_are_sorted_by_participant_id() {
        let json = object! { frames: array![frame_json(60_000)] };
        let timeline = parse_timeline(&json).unwrap();

        let ids: Vec<_> = timeline.frames[0]
            .participant_frames
            .iter()
            .map(|pf| pf.participant_id)
            .collect();
        assert_eq!(ids, vec![1.into(), 2.into()]);
    }

    #[test]
    fn event_position_requires_structured_value() {
        let json = object! { frames: array![frame_json(0)] };
        let timeline = parse_timeline(&json).unwrap();

        let events = &timeline.frames[0].events;
        assert_eq!(events[0].position, Some(Position { x: 10, y: 20 }));
        assert_eq!(events[1].position, None);
    }

    #[test]
    fn junk_event_position_is_treated_as_absent() {
        let mut frame = frame_json(0);
        frame["events"]
            .push(object! {
                "type": "CHAMPION_KILL",
                timestamp: 5_000,
                killerId: 3,
                victimId: 8,
                position: "somewhere",
            })
            .unwrap();
        let json = object! { frames: array![frame] };
        let timeline = parse_timeline(&json).unwrap();

        let event = timeline.frames[0].events.last().unwrap();
        assert_eq!(event.position, None);

        let rows = flatten_events(&timeline);
        let row = rows.last().unwrap();
        assert_eq!(row.position_x, EventCoord::Unknown);
        assert_eq!(row.position_x.to_string(), "none");
        assert_eq!(row.position_y.to_string(), "none");
    }

    #[test]
    fn timeline_requires_frames_array() {
        let json = object! { frameInterval: 60_000 };
        assert!(parse_timeline(&json).is_err());
    }
}
