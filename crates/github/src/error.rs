//! Transport-level errors for the GitHub adapter.

use board::BoardError;
use thiserror::Error;

/// Errors raised while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The request could not be sent or the response body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("{method} {url} returned {status}: {body}")]
    Status {
        /// Request method.
        method: &'static str,
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, as text.
        body: String,
    },

    /// The GraphQL response carried an `errors` array.
    #[error("GraphQL query failed: {}", .messages.join("; "))]
    GraphQl {
        /// Every error message, in response order.
        messages: Vec<String>,
        /// `true` if any error was of type `NOT_FOUND`.
        not_found: bool,
    },

    /// A field the adapter relies on was absent from an otherwise successful response.
    #[error("response is missing '{0}'")]
    MissingField(&'static str),

    /// The token cannot be sent as an HTTP header value.
    #[error("the access token contains characters that are not valid in an HTTP header")]
    InvalidToken,
}

impl From<GithubError> for BoardError {
    fn from(err: GithubError) -> Self {
        BoardError::api_with_source(err.to_string(), err)
    }
}
