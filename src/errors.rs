use std::result::Result as StdResult;

use subfolio_config::ConfigError;
use subfolio_connect::RecordError;
use thiserror::Error;

/// Unified error type across the preference and record-mapping layers.
#[derive(Error, Debug)]
pub enum SubfolioError {
    #[error("Record mapping failed: {0}")]
    Record(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, SubfolioError>;

impl From<RecordError> for SubfolioError {
    fn from(err: RecordError) -> Self {
        SubfolioError::Record(err.to_string())
    }
}

impl From<ConfigError> for SubfolioError {
    fn from(err: ConfigError) -> Self {
        SubfolioError::Config(err.to_string())
    }
}

impl From<std::io::Error> for SubfolioError {
    fn from(err: std::io::Error) -> Self {
        SubfolioError::Config(err.to_string())
    }
}
