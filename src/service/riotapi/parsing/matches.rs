use chrono::{TimeZone, Utc};
use json::{object::Object, JsonValue};

use crate::model::matches::{
    MatchDetail, MatchListEntry, Participant, ParticipantIdentity, ParticipantStats, Player, TeamId,
};

use super::ParsingError;

pub fn parse_match_list(json: &JsonValue) -> Result<Vec<MatchListEntry>, ParsingError> {
    if let JsonValue::Object(obj) = json {
        if let JsonValue::Array(array) = &obj["matches"] {
            let mut entries = Vec::with_capacity(array.len());
            for entry in array {
                if let JsonValue::Object(entry_obj) = entry {
                    entries.push(parse_match_entry(entry_obj)?);
                } else {
                    return Err(ParsingError::InvalidType("match entry".into()));
                }
            }
            return Ok(entries);
        }
        return Err(ParsingError::InvalidType("matches".into()));
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_match_entry(obj: &Object) -> Result<MatchListEntry, ParsingError> {
    let game_id = obj["gameId"].as_u64().ok_or(ParsingError::InvalidType("gameId".into()))?;
    let champion = obj["champion"]
        .as_i32()
        .ok_or(ParsingError::InvalidType("champion".into()))?;
    let queue = obj["queue"].as_u16().ok_or(ParsingError::InvalidType("queue".into()))?;
    let timestamp = obj["timestamp"]
        .as_i64()
        .ok_or(ParsingError::InvalidType("timestamp".into()))?;
    let role = obj["role"].as_str().ok_or(ParsingError::InvalidType("role".into()))?;
    let lane = obj["lane"].as_str().ok_or(ParsingError::InvalidType("lane".into()))?;

    Ok(MatchListEntry {
        match_id: game_id.into(),
        champion_id: champion.into(),
        queue,
        timestamp: Utc
            .timestamp_millis_opt(timestamp)
            .single()
            .ok_or(ParsingError::InvalidType("timestamp".into()))?,
        role: role.to_string(),
        lane: lane.to_string(),
    })
}

pub fn parse_match_detail(json: &JsonValue) -> Result<MatchDetail, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let game_id = obj["gameId"].as_u64().ok_or(ParsingError::InvalidType("gameId".into()))?;
        let participants = parse_participants(&obj["participants"])?;
        let identities = parse_identities(&obj["participantIdentities"])?;

        return Ok(MatchDetail {
            game_id: game_id.into(),
            participants,
            identities,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}

fn parse_participants(json: &JsonValue) -> Result<Vec<Participant>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut participants = Vec::with_capacity(array.len());
        for entry in array {
            if let JsonValue::Object(obj) = entry {
                participants.push(parse_participant_obj(obj)?);
            } else {
                return Err(ParsingError::InvalidType("participant".into()));
            }
        }
        return Ok(participants);
    }

    Err(ParsingError::InvalidType("participants".into()))
}

fn parse_participant_obj(obj: &Object) -> Result<Participant, ParsingError> {
    let participant_id = obj["participantId"]
        .as_u8()
        .ok_or(ParsingError::InvalidType("participantId".into()))?;
    let champion_id = obj["championId"]
        .as_i32()
        .ok_or(ParsingError::InvalidType("championId".into()))?;
    let team_id = parse_team_id(&obj["teamId"])?;
    let stats = match &obj["stats"] {
        JsonValue::Object(stats_obj) => parse_participant_stats(stats_obj)?,
        _ => return Err(ParsingError::InvalidType("stats".into())),
    };

    Ok(Participant {
        participant_id: participant_id.into(),
        champion_id: champion_id.into(),
        team_id,
        stats,
    })
}

pub fn parse_team_id(json: &JsonValue) -> Result<TeamId, ParsingError> {
    match json.as_u16() {
        Some(100) => Ok(TeamId::Blue),
        Some(200) => Ok(TeamId::Red),
        _ => Err(ParsingError::InvalidType("teamId".into())),
    }
}

fn parse_participant_stats(obj: &Object) -> Result<ParticipantStats, ParsingError> {
    let win = obj["win"].as_bool().ok_or(ParsingError::InvalidType("win".into()))?;
    let kills = obj["kills"].as_u16().ok_or(ParsingError::InvalidType("kills".into()))?;
    let deaths = obj["deaths"].as_u16().ok_or(ParsingError::InvalidType("deaths".into()))?;
    let assists = obj["assists"].as_u16().ok_or(ParsingError::InvalidType("assists".into()))?;
    let gold_earned = obj["goldEarned"]
        .as_u32()
        .ok_or(ParsingError::InvalidType("goldEarned".into()))?;
    let total_minions_killed = obj["totalMinionsKilled"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("totalMinionsKilled".into()))?;
    let champ_level = obj["champLevel"]
        .as_u8()
        .ok_or(ParsingError::InvalidType("champLevel".into()))?;
    let vision_score = obj["visionScore"]
        .as_u16()
        .ok_or(ParsingError::InvalidType("visionScore".into()))?;

    Ok(ParticipantStats {
        win,
        kills,
        deaths,
        assists,
        gold_earned,
        total_minions_killed,
        champ_level,
        vision_score,
    })
}

fn parse_identities(json: &JsonValue) -> Result<Vec<ParticipantIdentity>, ParsingError> {
    if let JsonValue::Array(array) = json {
        let mut identities = Vec::with_capacity(array.len());
        for entry in array {
            if let JsonValue::Object(obj) = entry {
                identities.push(parse_identity_obj(obj)?);
            } else {
                return Err(ParsingError::InvalidType("participant identity".into()));
            }
        }
        return Ok(identities);
    }

    Err(ParsingError::InvalidType("participantIdentities".into()))
}

fn parse_identity_obj(obj: &Object) -> Result<ParticipantIdentity, ParsingError> {
    let participant_id = obj["participantId"]
        .as_u8()
        .ok_or(ParsingError::InvalidType("participantId".into()))?;

    match &obj["player"] {
        JsonValue::Object(player_obj) => {
            let account_id = player_obj["accountId"]
                .as_str()
                .ok_or(ParsingError::InvalidType("accountId".into()))?;
            let summoner_name = player_obj["summonerName"]
                .as_str()
                .ok_or(ParsingError::InvalidType("summonerName".into()))?;

            Ok(ParticipantIdentity {
                participant_id: participant_id.into(),
                player: Player {
                    account_id: account_id.into(),
                    summoner_name: summoner_name.to_string(),
                },
            })
        }
        _ => Err(ParsingError::InvalidType("player".into())),
    }
}

#[cfg(test)]
mod tests {
    use json::{array, object};

    use super::*;

    #[test]
    fn match_list_reads_matches_array() {
        let json = object! {
            matches: array![
                object! {
                    gameId: 4_242_424_242u64,
                    champion: 64,
                    queue: 420,
                    timestamp: 1_580_000_000_000i64,
                    role: "SOLO",
                    lane: "MID",
                },
            ],
            startIndex: 0,
            endIndex: 1,
            totalGames: 1,
        };

        let entries = parse_match_list(&json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].match_id, 4_242_424_242u64.into());
        assert_eq!(entries[0].role, "SOLO");
    }

    #[test]
    fn match_list_requires_matches_key() {
        let json = object! { startIndex: 0 };
        assert!(parse_match_list(&json).is_err());
    }

    #[test]
    fn team_id_is_a_closed_domain() {
        assert_eq!(parse_team_id(&100.into()).unwrap(), TeamId::Blue);
        assert_eq!(parse_team_id(&200.into()).unwrap(), TeamId::Red);
        assert!(parse_team_id(&300.into()).is_err());
        assert!(parse_team_id(&JsonValue::Null).is_err());
    }

    #[test]
    fn match_detail_joins_stats_and_identity_shapes() {
        let json = object! {
            gameId: 77u64,
            participants: array![object! {
                participantId: 1,
                championId: 64,
                teamId: 100,
                stats: object! {
                    participantId: 1,
                    win: true,
                    kills: 7,
                    deaths: 2,
                    assists: 9,
                    goldEarned: 13_450,
                    totalMinionsKilled: 183,
                    champLevel: 16,
                    visionScore: 21,
                },
            }],
            participantIdentities: array![object! {
                participantId: 1,
                player: object! {
                    accountId: "acc-1",
                    summonerName: "Player One",
                },
            }],
        };

        let detail = parse_match_detail(&json).unwrap();
        assert_eq!(detail.game_id, 77u64.into());
        assert_eq!(detail.participants.len(), 1);
        assert_eq!(detail.participants[0].stats.kills, 7);
        assert_eq!(detail.identities[0].player.summoner_name, "Player One");
    }
}
