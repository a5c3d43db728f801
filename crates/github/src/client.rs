//! [`GithubBoard`]: the [`ProjectBoard`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use board::{
    BoardError, BoardSnapshot, Card, CardId, Column, ColumnId, IssueId, ProjectBoard,
    ProjectReference, ProjectScope,
};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info, instrument};

use crate::queries::{with_fragments, COLUMN_CARDS_QUERY, ORG_BOARD_QUERY, REPO_BOARD_QUERY};
use crate::wire::{
    CardNode, CardPage, ColumnCardsData, ColumnNode, CreatedCard, GraphQlResponse, OrgBoardData,
    ProjectOwner, RepoBoardData,
};
use crate::GithubError;

/// REST base URL of github.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GraphQL endpoint of github.com.
pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const USER_AGENT: &str = concat!("issue-to-project/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GithubBoard`].
#[derive(Clone)]
pub struct GithubConfig {
    /// Bearer token sent with every request.
    pub token: String,
    /// REST base URL, without a trailing slash.
    pub api_url: String,
    /// GraphQL endpoint.
    pub graphql_url: String,
    /// Upper bound on each request, connect to last byte.
    pub timeout: Duration,
}

impl GithubConfig {
    /// Settings for github.com with a 30 second timeout.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            graphql_url: DEFAULT_GRAPHQL_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Overrides the REST base URL (GitHub Enterprise Server, tests).
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the GraphQL endpoint.
    pub fn with_graphql_url(mut self, url: impl Into<String>) -> Self {
        self.graphql_url = url.into();
        self
    }

    /// Overrides the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl std::fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("graphql_url", &self.graphql_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Reads and writes project boards through the GitHub API.
#[derive(Debug, Clone)]
pub struct GithubBoard {
    http: reqwest::Client,
    api_url: String,
    graphql_url: String,
}

impl GithubBoard {
    /// Builds the HTTP client. No request is sent until the board is used.
    pub fn new(config: GithubConfig) -> Result<Self, GithubError> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| GithubError::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(AUTHORIZATION, authorization);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url,
            graphql_url: config.graphql_url,
        })
    }

    async fn graphql<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, GithubError> {
        let response = self
            .http
            .post(&self.graphql_url)
            .json(&json!({ "query": with_fragments(query), "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                method: "POST",
                url: self.graphql_url.clone(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: GraphQlResponse<T> = response.json().await?;
        if !body.errors.is_empty() {
            let not_found = body
                .errors
                .iter()
                .any(|e| e.kind.as_deref() == Some("NOT_FOUND"));
            return Err(GithubError::GraphQl {
                messages: body.errors.into_iter().map(|e| e.message).collect(),
                not_found,
            });
        }
        body.data.ok_or(GithubError::MissingField("data"))
    }

    async fn query_owner(&self, project: &ProjectReference) -> Result<Option<ProjectOwner>, GithubError> {
        let number = project.number().as_u64();
        match project.scope() {
            ProjectScope::Organization { login } => {
                info!(org = %login, number, "This project is configured at the org level");
                let data: OrgBoardData = self
                    .graphql(ORG_BOARD_QUERY, json!({ "login": login.as_str(), "number": number }))
                    .await?;
                Ok(data.organization)
            }
            ProjectScope::Repository { owner, name } => {
                info!(owner = %owner, repo = %name, number, "This project is configured at the repo level");
                let data: RepoBoardData = self
                    .graphql(
                        REPO_BOARD_QUERY,
                        json!({ "owner": owner.as_str(), "name": name.as_str(), "number": number }),
                    )
                    .await?;
                Ok(data.repository)
            }
        }
    }

    /// Collects every card of a column, following card pages past the first.
    async fn all_cards(&self, column_id: &str, column_name: &str, first_page: CardPage) -> Result<Vec<CardNode>, GithubError> {
        let mut cards = first_page.nodes;
        let mut page_info = first_page.page_info;

        while page_info.has_next_page {
            let after = page_info
                .end_cursor
                .ok_or(GithubError::MissingField("pageInfo.endCursor"))?;
            debug!(column = column_name, after = %after, "fetching next page of cards");

            let data: ColumnCardsData = self
                .graphql(COLUMN_CARDS_QUERY, json!({ "column": column_id, "after": after }))
                .await?;
            let page = data.node.ok_or(GithubError::MissingField("node"))?.cards;

            cards.extend(page.nodes);
            page_info = page.page_info;
        }
        Ok(cards)
    }
}

#[async_trait]
impl ProjectBoard for GithubBoard {
    #[instrument(skip_all, fields(project = %project))]
    async fn fetch_board(&self, project: &ProjectReference) -> Result<BoardSnapshot, BoardError> {
        let owner = match self.query_owner(project).await {
            Ok(owner) => owner,
            Err(GithubError::GraphQl { not_found: true, messages }) => {
                debug!(?messages, "owner not found");
                return Err(BoardError::ProjectNotFound {
                    url: project.url().to_string(),
                });
            }
            Err(err) => return Err(err.into()),
        };
        let node = owner
            .and_then(|owner| owner.project)
            .ok_or_else(|| BoardError::ProjectNotFound {
                url: project.url().to_string(),
            })?;

        let mut columns = Vec::with_capacity(node.columns.nodes.len());
        for ColumnNode {
            id,
            database_id,
            name,
            cards,
        } in node.columns.nodes
        {
            let cards = self.all_cards(&id, &name, cards).await?;
            columns.push(Column {
                id: ColumnId::new(database_id),
                name,
                cards: cards.into_iter().map(Card::from).collect(),
            });
        }

        Ok(BoardSnapshot {
            title: node.name,
            columns,
        })
    }

    #[instrument(skip_all, fields(column = %column, issue = %issue))]
    async fn create_card(&self, column: ColumnId, issue: IssueId) -> Result<CardId, BoardError> {
        let url = format!("{}/projects/columns/{}/cards", self.api_url, column);
        let response = self
            .http
            .post(&url)
            .json(&json!({ "content_id": issue.as_u64(), "content_type": "Issue" }))
            .send()
            .await
            .map_err(GithubError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                method: "POST",
                url,
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }
            .into());
        }

        let created: CreatedCard = response.json().await.map_err(GithubError::from)?;
        info!(card_id = created.id, "created card");
        Ok(CardId::new(created.id))
    }
}
