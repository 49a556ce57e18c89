use std::fmt;

use once_cell::sync::OnceCell;

use crate::model::{
    ids::MatchId,
    matches::{MatchDetail, MatchListEntry},
    summoner::Summoner,
    tables::{EventRow, FrameRow, GoldDiffRow, ParticipantRow},
    timeline::Timeline,
};

use super::{
    aggregate,
    riotapi::{
        client::{ApiClient, ClientRequestType, RequestError},
        parsing::{
            matches::{parse_match_detail, parse_match_list},
            summoner::parse_summoner,
            timeline::parse_timeline,
            ParsingError,
        },
    },
    transform::{self, TransformError},
};

/// Session state of one dashboard user. Raw API responses are fetched once
/// per loaded summoner and kept in memory; the derived tables are recomputed
/// from them on every access.
pub struct DataManager {
    client: ApiClient,
    summoner: OnceCell<Summoner>,
    match_list_cache: OnceCell<Vec<MatchListEntry>>,
    match_detail_cache: OnceCell<MatchDetail>,
    timeline_cache: OnceCell<Timeline>,
}

impl DataManager {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            summoner: OnceCell::new(),
            match_list_cache: OnceCell::new(),
            match_detail_cache: OnceCell::new(),
            timeline_cache: OnceCell::new(),
        }
    }

    /// Loads a new summoner and drops everything cached for the previous one.
    pub fn load_summoner(&mut self, name: &str) -> DataRetrievalResult<()> {
        let summoner_json = self.client.request(ClientRequestType::SummonerByName(name.to_string()))?;
        let summoner = parse_summoner(&summoner_json)?;

        self.summoner = OnceCell::from(summoner);
        self.match_list_cache = OnceCell::new();
        self.match_detail_cache = OnceCell::new();
        self.timeline_cache = OnceCell::new();
        Ok(())
    }

    pub fn refresh(&mut self) -> DataRetrievalResult<()> {
        match self.summoner.get() {
            Some(summoner) => {
                let name = summoner.name.clone();
                self.load_summoner(&name)
            }
            None => Ok(()),
        }
    }

    pub fn get_summoner(&self) -> DataRetrievalResult<&Summoner> {
        self.summoner.get().ok_or(DataRetrievalError::SummonerNotLoaded)
    }

    pub fn get_match_list(&self) -> DataRetrievalResult<&Vec<MatchListEntry>> {
        self.match_list_cache.get_or_try_init(|| {
            let summoner = self.get_summoner()?;
            let list_json = self
                .client
                .request(ClientRequestType::MatchListByAccount(summoner.account_id.clone()))?;
            Ok(parse_match_list(&list_json)?)
        })
    }

    /// Full record of the summoner's most recent match.
    pub fn get_latest_match(&self) -> DataRetrievalResult<&MatchDetail> {
        self.match_detail_cache.get_or_try_init(|| {
            let match_id = self.latest_match_id()?;
            let detail_json = self.client.request(ClientRequestType::MatchById(match_id))?;
            Ok(parse_match_detail(&detail_json)?)
        })
    }

    pub fn get_latest_timeline(&self) -> DataRetrievalResult<&Timeline> {
        self.timeline_cache.get_or_try_init(|| {
            let match_id = self.latest_match_id()?;
            let timeline_json = self.client.request(ClientRequestType::TimelineByMatch(match_id))?;
            Ok(parse_timeline(&timeline_json)?)
        })
    }

    fn latest_match_id(&self) -> DataRetrievalResult<MatchId> {
        let matches = self.get_match_list()?;
        matches
            .first()
            .map(|entry| entry.match_id)
            .ok_or(DataRetrievalError::NoMatchesFound)
    }

    pub fn get_participant_rows(&self) -> DataRetrievalResult<Vec<ParticipantRow>> {
        let detail = self.get_latest_match()?;
        Ok(transform::flatten_participants(detail)?)
    }

    pub fn get_frame_rows(&self) -> DataRetrievalResult<Vec<FrameRow>> {
        let participants = self.get_participant_rows()?;
        let timeline = self.get_latest_timeline()?;
        Ok(transform::flatten_frames(timeline, &participants)?)
    }

    pub fn get_event_rows(&self) -> DataRetrievalResult<Vec<EventRow>> {
        let timeline = self.get_latest_timeline()?;
        Ok(transform::flatten_events(timeline))
    }

    pub fn get_gold_differential(&self) -> DataRetrievalResult<Vec<GoldDiffRow>> {
        let frames = self.get_frame_rows()?;
        Ok(aggregate::gold_differential(&frames))
    }
}

pub type DataRetrievalResult<T> = Result<T, DataRetrievalError>;

#[derive(Debug)]
pub enum DataRetrievalError {
    SummonerNotLoaded,
    NoMatchesFound,
    ClientFailed(RequestError),
    ParsingFailed(ParsingError),
    TransformFailed(TransformError),
}

impl fmt::Display for DataRetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataRetrievalError::SummonerNotLoaded => write!(f, "No summoner loaded yet."),
            DataRetrievalError::NoMatchesFound => write!(f, "The match list of this summoner is empty."),
            DataRetrievalError::ClientFailed(err) => write!(f, "Client error: {}", err),
            DataRetrievalError::ParsingFailed(err) => write!(f, "Parsing error: {}", err),
            DataRetrievalError::TransformFailed(err) => write!(f, "Transform error: {}", err),
        }
    }
}

impl From<RequestError> for DataRetrievalError {
    fn from(error: RequestError) -> Self {
        Self::ClientFailed(error)
    }
}

impl From<ParsingError> for DataRetrievalError {
    fn from(error: ParsingError) -> Self {
        Self::ParsingFailed(error)
    }
}

impl From<TransformError> for DataRetrievalError {
    fn from(error: TransformError) -> Self {
        Self::TransformFailed(error)
    }
}
