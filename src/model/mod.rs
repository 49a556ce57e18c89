pub mod ids;
pub mod matches;
pub mod summoner;
pub mod tables;
pub mod timeline;
