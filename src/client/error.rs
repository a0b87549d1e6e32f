use thiserror::Error;

use crate::models::ResultField;

/// Failures talking to the brainstorming backend
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response is missing required field `{0}`")]
    MissingField(ResultField),

    #[error("question must not be empty")]
    EmptyQuestion,
}
