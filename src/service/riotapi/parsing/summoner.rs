use json::JsonValue;

use crate::model::summoner::Summoner;

use super::ParsingError;

pub fn parse_summoner(json: &JsonValue) -> Result<Summoner, ParsingError> {
    if let JsonValue::Object(obj) = json {
        let account_id = obj["accountId"]
            .as_str()
            .ok_or(ParsingError::InvalidType("accountId".into()))?;
        let puuid = obj["puuid"].as_str().ok_or(ParsingError::InvalidType("puuid".into()))?;
        let name = obj["name"].as_str().ok_or(ParsingError::InvalidType("name".into()))?;
        let level = obj["summonerLevel"]
            .as_u16()
            .ok_or(ParsingError::InvalidType("summonerLevel".into()))?;
        let profile_icon_id = obj["profileIconId"]
            .as_i32()
            .ok_or(ParsingError::InvalidType("profileIconId".into()))?;

        return Ok(Summoner {
            account_id: account_id.into(),
            puuid: puuid.to_string(),
            name: name.to_string(),
            level,
            profile_icon_id,
        });
    }

    Err(ParsingError::InvalidType("root".into()))
}
