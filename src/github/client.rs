// GitHub API HTTP client.
// Handles authentication headers, timeouts, and response status mapping.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{FolioError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Outbound requests give up after this long. Expiry surfaces as a
/// connection failure, same as any other transport fault.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
}

impl GitHubClient {
    /// Create a new client. The bearer token is optional and only raises
    /// rate limits; unauthenticated access works for public listings.
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio-tui"));

        if let Some(token) = token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| FolioError::Other(e.to_string()))?,
            );
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FolioError::Connection)?;

        Ok(Self { client })
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", GITHUB_API_BASE, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(FolioError::Connection)?;

        match status_error(response.status()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }
}

/// Map a non-success status to the error surfaced to the UI.
/// 403 from this endpoint means the unauthenticated rate limit was hit.
fn status_error(status: StatusCode) -> Option<FolioError> {
    if status.is_success() {
        return None;
    }
    Some(match status {
        StatusCode::FORBIDDEN => FolioError::RateLimited,
        StatusCode::NOT_FOUND => FolioError::AccountNotFound,
        status => FolioError::FetchFailed(status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass_through() {
        assert!(status_error(StatusCode::OK).is_none());
        assert!(status_error(StatusCode::NO_CONTENT).is_none());
    }

    #[test]
    fn test_rate_limit_mapping() {
        let err = status_error(StatusCode::FORBIDDEN).unwrap();
        assert!(matches!(err, FolioError::RateLimited));
        assert_eq!(err.to_string(), "rate limited, retry later");
    }

    #[test]
    fn test_not_found_mapping() {
        let err = status_error(StatusCode::NOT_FOUND).unwrap();
        assert!(matches!(err, FolioError::AccountNotFound));
        assert_eq!(err.to_string(), "account not found");
    }

    #[test]
    fn test_generic_status_mapping() {
        let err = status_error(StatusCode::BAD_GATEWAY).unwrap();
        assert!(matches!(
            err,
            FolioError::FetchFailed(StatusCode::BAD_GATEWAY)
        ));
    }
}
