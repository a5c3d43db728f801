//! In-memory fakes of the port traits.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use board::{
    BoardError, BoardSnapshot, Card, CardId, Column, ColumnId, EventSource, IssueEvent, IssueId,
    IssueNumber, ProjectBoard, ProjectReference,
};

pub const ISSUE: IssueEvent = IssueEvent {
    id: IssueId::new(42),
    number: IssueNumber::new(7),
};

/// Board fake keyed by project URL. Records every call.
#[derive(Default)]
pub struct FakeBoard {
    boards: HashMap<String, BoardSnapshot>,
    fetched: Mutex<Vec<String>>,
    created: Mutex<Vec<(ColumnId, IssueId)>>,
    next_card: u64,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self {
            next_card: 9000,
            ..Self::default()
        }
    }

    pub fn with_board(mut self, url: &str, columns: Vec<Column>) -> Self {
        self.boards.insert(
            url.to_string(),
            BoardSnapshot {
                title: format!("board at {url}"),
                columns,
            },
        );
        self
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<(ColumnId, IssueId)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectBoard for FakeBoard {
    async fn fetch_board(&self, project: &ProjectReference) -> Result<BoardSnapshot, BoardError> {
        self.fetched.lock().unwrap().push(project.url().to_string());
        self.boards
            .get(project.url())
            .cloned()
            .ok_or_else(|| BoardError::ProjectNotFound {
                url: project.url().to_string(),
            })
    }

    async fn create_card(&self, column: ColumnId, issue: IssueId) -> Result<CardId, BoardError> {
        let mut created = self.created.lock().unwrap();
        created.push((column, issue));
        Ok(CardId::new(self.next_card + created.len() as u64))
    }
}

/// Event source that always returns the same issue, or fails.
pub struct FakeEvents(pub Option<IssueEvent>);

#[async_trait]
impl EventSource for FakeEvents {
    async fn issue_event(&self) -> Result<IssueEvent, BoardError> {
        self.0
            .ok_or_else(|| BoardError::invalid_event("event payload has no issue"))
    }
}

pub fn column(id: u64, name: &str, cards: &[(u64, Option<u64>)]) -> Column {
    Column {
        id: ColumnId::new(id),
        name: name.to_string(),
        cards: cards
            .iter()
            .map(|&(card, content)| Card {
                id: CardId::new(card),
                content: content.map(IssueId::new),
            })
            .collect(),
    }
}
