use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The selector you are trying to scrape for is missing. Selector: {0}")]
    ParseMissingSelector(String),

    #[error("Row {row} has no cell at index {index}")]
    MissingCell { row: usize, index: usize },
    #[error("Episode '{episode}' spans {declared} rows but only {found} were left in the table")]
    SpanExhausted {
        episode: String,
        declared: usize,
        found: usize,
    },
    #[error("Row {row} has an invalid rowspan: '{value}'")]
    InvalidRowSpan { row: usize, value: String },

    #[error("No cached document at {0}, run with --refresh to download it")]
    MissingCache(PathBuf),

    #[error("Regex Error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
