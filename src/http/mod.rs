//! HTTP status classification for GitHub API responses.

mod error;

pub use error::{ApiError, check_response, classify_response};
