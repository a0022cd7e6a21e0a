//! Error types for the SPL leaderboard CLI

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SplError>;

#[derive(Error, Debug)]
pub enum SplError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Live data request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Season data contained no players")]
    NoData,

    #[error("Invalid leaderboard category: {category}")]
    InvalidCategory { category: String },

    #[error("Invalid ranking kind: {kind}")]
    InvalidRankingKind { kind: String },

    #[error("Invalid sort field: {sort}")]
    InvalidSort { sort: String },

    #[error("Tournament not found: {name}")]
    TournamentNotFound { name: String },

    #[error("Match not found: {id}")]
    MatchNotFound { id: String },
}
