pub mod aggregate;
pub mod data_manager;
pub mod riotapi;
pub mod transform;
