//! Response shapes of the GraphQL queries and REST calls.

use board::{Card, CardId, IssueId};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OrgBoardData {
    pub organization: Option<ProjectOwner>,
}

#[derive(Debug, Deserialize)]
pub struct RepoBoardData {
    pub repository: Option<ProjectOwner>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectOwner {
    pub project: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub name: String,
    pub columns: Nodes<ColumnNode>,
}

#[derive(Debug, Deserialize)]
pub struct Nodes<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnNode {
    pub id: String,
    pub database_id: u64,
    pub name: String,
    pub cards: CardPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    pub page_info: PageInfo,
    #[serde(default)]
    pub nodes: Vec<CardNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardNode {
    pub database_id: u64,
    pub content: Option<CardContent>,
}

/// Content narrowed to `Issue`; other content types decode with no id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardContent {
    pub database_id: Option<u64>,
}

impl From<CardNode> for Card {
    fn from(node: CardNode) -> Self {
        Card {
            id: CardId::new(node.database_id),
            content: node
                .content
                .and_then(|content| content.database_id)
                .map(IssueId::new),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ColumnCardsData {
    pub node: Option<ColumnCards>,
}

#[derive(Debug, Deserialize)]
pub struct ColumnCards {
    pub cards: CardPage,
}

/// Body of a successful `POST /projects/columns/{id}/cards`.
#[derive(Debug, Deserialize)]
pub struct CreatedCard {
    pub id: u64,
}
