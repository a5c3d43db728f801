//! GitHub infrastructure adapter.
//!
//! Implements the [`board::ProjectBoard`] trait against the GitHub API:
//!
//! - board contents are read with one GraphQL query per board (organization-
//!   or repository-scoped), plus follow-up queries for columns holding more
//!   than one page of cards;
//! - cards are created through the REST projects endpoint.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules. All transport
//! details (authentication headers, endpoints, pagination, response decoding)
//! are handled here; the [`board`] crate never sees them. Failures are
//! reported as [`GithubError`] internally and converted to
//! [`board::BoardError::Api`] at the trait boundary.
//!
//! There is no retry or back-off: every request is attempted once, bounded by
//! the configured timeout.

mod client;
mod error;
mod queries;
mod wire;

pub use client::{GithubBoard, GithubConfig, DEFAULT_API_URL, DEFAULT_GRAPHQL_URL};
pub use error::GithubError;
