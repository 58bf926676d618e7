//! Error types for the Yahoo Fantasy Basketball CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, YahooError>;

#[derive(Error, Debug)]
pub enum YahooError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Authorization failed: {message}")]
    Auth { message: String },

    #[error("Yahoo API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response shape: {message}")]
    Parse { message: String },

    #[error("{var} environment variable not set")]
    MissingCredential { var: String },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse league ID: {0}")]
    InvalidLeagueId(#[from] std::num::ParseIntError),

    #[error("Unknown stat category: {category}")]
    InvalidStatCategory { category: String },
}

#[cfg(test)]
mod tests;
