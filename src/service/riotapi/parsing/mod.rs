use std::fmt;

pub mod matches;
pub mod summoner;
pub mod timeline;

#[derive(Debug)]
pub enum ParsingError {
    InvalidType(String),
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParsingError::InvalidType(field) => write!(f, "Unexpected json value for '{}'", field),
        }
    }
}
