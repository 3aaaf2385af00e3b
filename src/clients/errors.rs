use rspotify::{ClientError, model::IdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Spotify error: {0}")]
    SpotifyError(#[from] ClientError),

    #[error("Invalid Spotify identifier: {0}")]
    InvalidId(#[from] IdError),

    #[error("Not enough {kind} to sample from: requested {requested}, available {available}")]
    InsufficientCandidates {
        kind: &'static str,
        requested: usize,
        available: usize,
    },

    #[error("Artist seed count {count} is outside of 1..={budget}")]
    InvalidSeedCount { count: usize, budget: usize },

    #[error("Interrupted before the playlist was refreshed")]
    Cancelled,
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
