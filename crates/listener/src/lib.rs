//! Trigger event source.
//!
//! Implements the [`board::EventSource`] trait over the JSON payload a workflow
//! runner writes for the triggering event (the file named by
//! `GITHUB_EVENT_PATH`). Only the `issue` object is read; every other field of
//! the payload is ignored.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** File access and payload deserialization live here. The
//! [`board`] crate sees only [`board::EventSource`] and [`board::IssueEvent`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use board::{BoardError, EventSource, IssueEvent, IssueId, IssueNumber};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct EventPayload {
    issue: Option<IssuePayload>,
}

#[derive(Debug, Deserialize)]
struct IssuePayload {
    id: u64,
    number: u64,
}

/// Reads the triggering issue from a workflow event payload file.
#[derive(Debug, Clone)]
pub struct WorkflowEventFile {
    path: PathBuf,
}

impl WorkflowEventFile {
    /// Creates a source for the payload at `path`. The file is read lazily.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the payload file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Extracts the issue from a payload document.
    pub fn parse(payload: &str) -> Result<IssueEvent, BoardError> {
        let payload: EventPayload = serde_json::from_str(payload)
            .map_err(|e| BoardError::invalid_event(format!("payload is not valid JSON: {e}")))?;
        let issue = payload
            .issue
            .ok_or_else(|| BoardError::invalid_event("payload has no 'issue' object; is the workflow triggered by an issue event?"))?;

        Ok(IssueEvent {
            id: IssueId::new(issue.id),
            number: IssueNumber::new(issue.number),
        })
    }
}

#[async_trait]
impl EventSource for WorkflowEventFile {
    async fn issue_event(&self) -> Result<IssueEvent, BoardError> {
        debug!(path = %self.path.display(), "reading event payload");
        let payload = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            BoardError::invalid_event(format!("cannot read {}: {e}", self.path.display()))
        })?;
        Self::parse(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_issue_event() {
        let event = WorkflowEventFile::parse(
            r#"{
                "action": "opened",
                "issue": { "id": 42, "number": 7, "title": "Broken build", "labels": [] },
                "repository": { "full_name": "owner/repo" }
            }"#,
        )
        .unwrap();
        assert_eq!(event.id, IssueId::new(42));
        assert_eq!(event.number, IssueNumber::new(7));
    }

    #[test]
    fn test_parse_rejects_payload_without_issue() {
        let err = WorkflowEventFile::parse(r#"{ "action": "push", "ref": "refs/heads/main" }"#)
            .unwrap_err();
        assert!(matches!(err, BoardError::InvalidEvent { .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = WorkflowEventFile::parse("{ not json").unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }
}
