use std::fmt;

use json::JsonValue;
use reqwest::blocking::Client;

use crate::model::ids::{AccountId, MatchId};

pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(region: &str, api_key: &str) -> Result<Self, ClientInitError> {
        // Region becomes a hostname component, keep it strictly alphanumeric
        if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ClientInitError::InvalidRegion(region.to_string()));
        }

        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: format!("https://{}.api.riotgames.com", region),
            api_key: api_key.to_string(),
        })
    }

    pub fn request(&self, request_type: ClientRequestType) -> Result<JsonValue, RequestError> {
        let url = match &request_type {
            ClientRequestType::SummonerByName(name) => {
                format!("{}/lol/summoner/v4/summoners/by-name/{}", self.base_url, name)
            }
            ClientRequestType::MatchListByAccount(account_id) => {
                format!("{}/lol/match/v4/matchlists/by-account/{}", self.base_url, account_id)
            }
            ClientRequestType::MatchById(match_id) => {
                format!("{}/lol/match/v4/matches/{}", self.base_url, match_id)
            }
            ClientRequestType::TimelineByMatch(match_id) => {
                format!("{}/lol/match/v4/timelines/by-match/{}", self.base_url, match_id)
            }
        };

        // Send request
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()?;
        if !response.status().is_success() {
            return Err(RequestError::InvalidResponse(request_type, response.status().as_u16()));
        }

        // Return json
        let text = response.text()?;
        let json = json::parse(text.as_str())?;
        Ok(json)
    }
}

#[derive(Debug, Clone)]
pub enum ClientRequestType {
    SummonerByName(String),
    MatchListByAccount(AccountId),
    MatchById(MatchId),
    TimelineByMatch(MatchId),
}

impl fmt::Display for ClientRequestType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientRequestType::SummonerByName(name) => write!(f, "summoner '{}'", name),
            ClientRequestType::MatchListByAccount(account_id) => write!(f, "match list of account '{}'", account_id),
            ClientRequestType::MatchById(match_id) => write!(f, "match {}", match_id),
            ClientRequestType::TimelineByMatch(match_id) => write!(f, "timeline of match {}", match_id),
        }
    }
}

#[derive(Debug)]
pub enum ClientInitError {
    InvalidRegion(String),
    ClientError(reqwest::Error),
}

impl fmt::Display for ClientInitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ClientInitError::InvalidRegion(region) => write!(f, "Invalid region '{}'", region),
            ClientInitError::ClientError(err) => write!(f, "Client error: {}", err),
        }
    }
}

impl From<reqwest::Error> for ClientInitError {
    fn from(error: reqwest::Error) -> Self {
        Self::ClientError(error)
    }
}

#[derive(Debug)]
pub enum RequestError {
    ClientFailed(reqwest::Error),
    InvalidResponse(ClientRequestType, u16),
    ParsingFailed(json::Error),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::ClientFailed(err) => write!(f, "Client error: {}", err),
            RequestError::InvalidResponse(req_type, status) => {
                write!(f, "The server returned HTTP {} for {}", status, req_type)
            }
            RequestError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(error: reqwest::Error) -> Self {
        RequestError::ClientFailed(error)
    }
}

impl From<json::Error> for RequestError {
    fn from(error: json::Error) -> Self {
        RequestError::ParsingFailed(error)
    }
}
