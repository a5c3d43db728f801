//! Error type shared by every layer of the placement step.
//!
//! [`BoardError`] covers every condition that fails a run. Outcomes that end a
//! run *successfully* without creating a card (a card already exists, or the
//! column count does not match the URL count) are not errors; they are
//! reported through `placement::Outcome` instead.
//!
//! Infrastructure crates keep their own transport error types and convert them
//! into [`BoardError::Api`] at the port boundary, chaining the original error
//! as the source.

use thiserror::Error;

use crate::ColumnName;

/// Boxed error used as the source of an [`BoardError::Api`] failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that fail a placement run. Every variant maps to a non-zero exit.
#[derive(Debug, Error)]
pub enum BoardError {
    /// The runtime configuration is invalid (e.g. no project URL given).
    ///
    /// Produced at load time; no API call is made with an invalid config.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// A project URL does not have the shape of an org or repository board URL.
    #[error("Invalid project URL '{url}': {reason}")]
    InvalidProjectUrl {
        /// The URL as it was supplied.
        url: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The triggering event payload could not be read or carries no issue.
    #[error("Invalid event payload: {message}")]
    InvalidEvent {
        /// Description of the payload problem.
        message: String,
    },

    /// The API answered, but the organization, repository, or project in the
    /// URL does not exist (or the token cannot see it).
    #[error("Project not found: {url}")]
    ProjectNotFound {
        /// URL of the board that could not be found.
        url: String,
    },

    /// The board has no column with the requested name and no card for the issue.
    #[error("Unable to find a columnId for the column {column}, with Url:{url}")]
    ColumnNotFound {
        /// The column name that was looked for.
        column: ColumnName,
        /// URL of the board that was searched.
        url: String,
    },

    /// A network, HTTP, or GraphQL failure talking to the API.
    ///
    /// Never retried.
    #[error("GitHub API failure: {message}")]
    Api {
        /// Human-readable description of the failure.
        message: String,
        /// The transport error that caused it, if any.
        #[source]
        source: Option<BoxError>,
    },
}

impl BoardError {
    /// Creates a [`BoardError::Configuration`].
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a [`BoardError::InvalidProjectUrl`].
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidProjectUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`BoardError::InvalidEvent`].
    pub fn invalid_event(message: impl Into<String>) -> Self {
        Self::InvalidEvent {
            message: message.into(),
        }
    }

    /// Creates a [`BoardError::Api`] without an underlying source.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`BoardError::Api`] chaining `source`.
    pub fn api_with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Api {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}
