use reqwest::{Response, StatusCode};
use serde_json::Value;
use thiserror::Error;

/// Every failure a transfer run can end with.
///
/// Only [`TransferError::Conflict`] is ever retried, and only while adding an
/// item to the destination playlist. Everything else aborts the run.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("invalid Spotify playlist URL: {0}")]
    Parse(String),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("giving up after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    #[error("service responded with {status}: {message}")]
    Service { status: StatusCode, message: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TransferError {
    /// Maps a non-success HTTP status onto the error taxonomy.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => TransferError::Authentication(message),
            StatusCode::NOT_FOUND => TransferError::NotFound(message),
            StatusCode::CONFLICT => TransferError::Conflict(message),
            _ => TransferError::Service { status, message },
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, TransferError::Conflict(_))
    }
}

/// Passes successful responses through and turns everything else into a
/// classified [`TransferError`], using the API's error message when the body
/// has one.
pub async fn ensure_success(response: Response) -> Result<Response, TransferError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(TransferError::from_status(status, error_message(&body)))
}

/// Both Spotify and Google wrap errors as `{"error": {"message": ...}}`;
/// the OAuth token endpoints use `{"error": ..., "error_description": ...}`.
pub fn error_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return body.trim().to_string();
    };

    if let Some(message) = json["error"]["message"].as_str() {
        return message.to_string();
    }
    if let Some(description) = json["error_description"].as_str() {
        return description.to_string();
    }
    if let Some(error) = json["error"].as_str() {
        return error.to_string();
    }

    body.trim().to_string()
}
