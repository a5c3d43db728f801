//! Placement orchestration.
//!
//! [`CardPlacer`] drives one run: it pairs every project URL with its column,
//! asks the [`ProjectBoard`] for the board contents, and then either reports an
//! existing card, creates a new one, or fails because the column is missing.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** The placer sequences calls between the resolver in
//! the [`board`] crate and the infrastructure traits. It contains no transport
//! details of its own.
//!
//! ## Iteration
//!
//! By default the run stops at the outcome of the first project
//! ([`IterationMode::FirstOutcome`]); later URLs are never visited.
//! [`IterationMode::EveryProject`] visits every URL in order and still stops
//! at the first error.

use std::sync::Arc;

use board::{
    BoardError, CardId, ColumnId, CountMismatch, EventSource, IssueEvent, IssueId, ProjectBoard,
    ProjectTarget, TargetPlan,
};
use tracing::{info, instrument};

/// How many of the configured projects a run visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IterationMode {
    /// Stop after the first project, whatever its outcome.
    #[default]
    FirstOutcome,
    /// Visit every project in input order.
    EveryProject,
}

/// A successful end to the processing of one project (or of the whole run,
/// for [`Outcome::NoAction`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The inputs could not be paired; no board was touched.
    NoAction(CountMismatch),
    /// The issue already has a card on the board.
    CardExists {
        /// URL of the board.
        project: String,
        /// The existing card.
        card_id: CardId,
        /// Column holding the existing card.
        column_name: String,
    },
    /// A new card was created.
    CardCreated {
        /// URL of the board.
        project: String,
        /// Column the card was created in.
        column_id: ColumnId,
        /// Issue the card references.
        issue_id: IssueId,
        /// Id of the new card.
        card_id: CardId,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::NoAction(mismatch) => write!(f, "{mismatch}"),
            Outcome::CardExists {
                card_id,
                column_name,
                ..
            } => write!(
                f,
                "No action being taken. A card already exists in the project for the issue. Column:{column_name}, cardId:{card_id}."
            ),
            Outcome::CardCreated {
                column_id,
                issue_id,
                ..
            } => write!(
                f,
                "Successfully created a new card in column #{column_id} for an issue with the corresponding id:{issue_id} !"
            ),
        }
    }
}

/// Every outcome of one run, in the order the projects were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// One entry per visited project, or a single [`Outcome::NoAction`].
    pub outcomes: Vec<Outcome>,
}

impl Report {
    /// Number of cards this run created.
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::CardCreated { .. }))
            .count()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, outcome) in self.outcomes.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{outcome}")?;
        }
        Ok(())
    }
}

/// Runs the placement step against a [`ProjectBoard`].
pub struct CardPlacer {
    board: Arc<dyn ProjectBoard>,
    mode: IterationMode,
}

impl CardPlacer {
    /// Creates a placer over `board`.
    pub fn new(board: Arc<dyn ProjectBoard>, mode: IterationMode) -> Self {
        Self { board, mode }
    }

    /// Runs the whole step for `plan`.
    ///
    /// The event is only read once the inputs have been paired successfully,
    /// so a count mismatch ends the run without touching the event or the API.
    pub async fn run(&self, plan: TargetPlan, events: &dyn EventSource) -> Result<Report, BoardError> {
        let targets = match plan {
            TargetPlan::CountMismatch(mismatch) => {
                info!(urls = mismatch.urls, columns = mismatch.columns, "column count does not match project count");
                return Ok(Report {
                    outcomes: vec![Outcome::NoAction(mismatch)],
                });
            }
            TargetPlan::Ready(targets) => targets,
        };

        let issue = events.issue_event().await?;
        info!(issue_id = %issue.id, "Action triggered by issue #{}", issue.number);

        let mut outcomes = Vec::new();
        for target in &targets {
            outcomes.push(self.place(target, issue).await?);
            if self.mode == IterationMode::FirstOutcome {
                break;
            }
        }
        Ok(Report { outcomes })
    }

    /// Processes a single project: report an existing card, create a new
    /// one, or fail with [`BoardError::ColumnNotFound`].
    #[instrument(skip_all, fields(project = %target.project, column = %target.column))]
    pub async fn place(&self, target: &ProjectTarget, issue: IssueEvent) -> Result<Outcome, BoardError> {
        let snapshot = self.board.fetch_board(&target.project).await?;
        info!(title = %snapshot.title, columns = snapshot.columns.len(), "fetched project board");

        let lookup = snapshot.resolve(&target.column, issue.id);

        if let Some(existing) = lookup.existing_card {
            info!(card_id = %existing.card_id, current_column = %existing.column_name, "card already exists for issue");
            return Ok(Outcome::CardExists {
                project: target.project.url().to_string(),
                card_id: existing.card_id,
                column_name: existing.column_name,
            });
        }

        let Some(column_id) = lookup.column_id else {
            return Err(BoardError::ColumnNotFound {
                column: target.column.clone(),
                url: target.project.url().to_string(),
            });
        };

        info!(
            column_id = %column_id,
            "Attempting to create a card in column {column_id}, for an issue with the corresponding id #{}",
            issue.id
        );
        let card_id = self.board.create_card(column_id, issue.id).await?;

        Ok(Outcome::CardCreated {
            project: target.project.url().to_string(),
            column_id,
            issue_id: issue.id,
            card_id,
        })
    }
}
