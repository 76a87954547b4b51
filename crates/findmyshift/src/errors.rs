use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Any non-200 answer; `body` is the raw response text.
    #[error("{status} {body}")]
    Http { status: u16, body: String },

    #[error("Error in the request: {0}")]
    Request(String),

    #[error("Error parsing json: {0}")]
    Json(String),

    #[error("Failed to parse url")]
    UrlParsing,

    #[error("Shift window starting {from} cannot span {days} days")]
    WindowOutOfRange { from: NaiveDate, days: u32 },
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value.to_string())
    }
}
