//! Maps GitHub API error responses to user-facing error kinds.

use anyhow::Result;
use reqwest::{Response, StatusCode};

/// Errors distinguished for user-facing reporting. Everything else
/// (server errors, transport failures) propagates as a plain reqwest error.
#[derive(Debug)]
pub enum ApiError {
    /// Rate limit exceeded (HTTP 403 with the rate limit spent, or 429)
    RateLimitExceeded(String),
    /// Authentication failed (HTTP 401)
    AuthenticationFailed(String),
    /// Resource not found (HTTP 404)
    NotFound(String),
    /// Forbidden access (HTTP 403 non-rate-limit)
    Forbidden(String),
    /// Other client errors
    ClientError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RateLimitExceeded(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Try again later or set GITHUB_TOKEN environment variable.",
                    msg
                )
            }
            ApiError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            ApiError::NotFound(msg) => {
                write!(f, "Not found: {}", msg)
            }
            ApiError::Forbidden(msg) => {
                write!(f, "Access forbidden: {}. You may need authentication.", msg)
            }
            ApiError::ClientError(msg) => {
                write!(f, "Request error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Whether an error chain carries an HTTP 404 from the API.
    /// Callers use this to render a concise domain message.
    pub fn is_not_found(error: &anyhow::Error) -> bool {
        matches!(error.downcast_ref::<ApiError>(), Some(ApiError::NotFound(_)))
    }
}

/// Classifies an API response into an [`ApiError`] without consuming it.
/// Returns `None` for success and for server errors.
pub fn classify_response(response: &Response) -> Option<ApiError> {
    match response.status() {
        StatusCode::UNAUTHORIZED => Some(ApiError::AuthenticationFailed(
            "Invalid or missing authentication token".to_string(),
        )),
        StatusCode::FORBIDDEN => {
            // GitHub signals primary rate limiting as 403 with the
            // x-ratelimit-remaining quota spent
            let rate_limited = response
                .headers()
                .get("x-ratelimit-remaining")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == "0");

            if rate_limited {
                Some(ApiError::RateLimitExceeded(
                    "GitHub API rate limit exceeded".to_string(),
                ))
            } else {
                Some(ApiError::Forbidden(
                    "Access to this resource is forbidden".to_string(),
                ))
            }
        }
        StatusCode::TOO_MANY_REQUESTS => Some(ApiError::RateLimitExceeded(
            "Too many requests".to_string(),
        )),
        StatusCode::NOT_FOUND => Some(ApiError::NotFound(
            "The requested resource was not found".to_string(),
        )),
        s if s.is_client_error() => {
            Some(ApiError::ClientError(format!("HTTP {} error", s.as_u16())))
        }
        _ => None,
    }
}

/// Checks a response's status, substituting a typed [`ApiError`] where it
/// is classifiable. Server errors surface as plain reqwest status errors.
pub fn check_response(response: Response) -> Result<Response> {
    if let Some(api_error) = classify_response(&response) {
        return Err(api_error.into());
    }

    Ok(response.error_for_status()?)
}
