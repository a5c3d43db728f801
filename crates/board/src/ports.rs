//! Port traits implemented by the infrastructure crates.
//!
//! The orchestrator only ever talks to these traits. `github` implements
//! [`ProjectBoard`] over the GitHub API and `listener` implements
//! [`EventSource`] over the workflow event file; tests substitute in-memory
//! fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{BoardError, BoardSnapshot, CardId, ColumnId, IssueId, IssueNumber, ProjectReference};

/// The issue that triggered the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueEvent {
    /// Issue database id; becomes the card's content id.
    pub id: IssueId,
    /// Issue number, for logging.
    pub number: IssueNumber,
}

/// Read and write access to project boards.
#[async_trait]
pub trait ProjectBoard: Send + Sync {
    /// Reads every column of `project` together with all of its cards.
    ///
    /// Returns [`BoardError::ProjectNotFound`] when the owner or the project
    /// does not exist.
    async fn fetch_board(&self, project: &ProjectReference) -> Result<BoardSnapshot, BoardError>;

    /// Creates an issue card for `issue` in `column` and returns the new card's id.
    ///
    /// Not idempotent: calling this twice creates two cards.
    async fn create_card(&self, column: ColumnId, issue: IssueId) -> Result<CardId, BoardError>;
}

/// Supplies the triggering issue.
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Returns the issue the current event is about.
    async fn issue_event(&self) -> Result<IssueEvent, BoardError>;
}
