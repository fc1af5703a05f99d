// Error types for the folio application.
// Covers GitHub API errors, email dispatch, content loading, and IO.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Transport-level failure: connectivity, DNS, or the 10s client timeout.
    #[error("connection failed")]
    Connection(#[source] reqwest::Error),

    #[error("rate limited, retry later")]
    RateLimited,

    #[error("account not found")]
    AccountNotFound,

    #[error("fetch failed: HTTP {0}")]
    FetchFailed(reqwest::StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_visible_messages() {
        assert_eq!(
            FolioError::RateLimited.to_string(),
            "rate limited, retry later"
        );
        assert_eq!(FolioError::AccountNotFound.to_string(), "account not found");
        assert_eq!(
            FolioError::FetchFailed(reqwest::StatusCode::INTERNAL_SERVER_ERROR).to_string(),
            "fetch failed: HTTP 500 Internal Server Error"
        );
    }
}
