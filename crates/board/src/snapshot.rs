//! Board contents as read from the API, and the column/card resolver.
//!
//! A [`BoardSnapshot`] is fetched fresh for every run and thrown away
//! afterwards. [`BoardSnapshot::resolve`] answers the two questions the
//! orchestrator needs: which column should receive the card, and is the issue
//! already on the board somewhere.

use serde::{Deserialize, Serialize};

use crate::{CardId, ColumnId, ColumnName, IssueId};

/// A card on a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card database id.
    pub id: CardId,
    /// Database id of the linked issue.
    ///
    /// `None` for notes and for content that is not an issue.
    pub content: Option<IssueId>,
}

/// A board column and every card in it, in board order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column database id.
    pub id: ColumnId,
    /// Column name as shown on the board.
    pub name: String,
    /// Cards in the column.
    pub cards: Vec<Card>,
}

/// All columns of one board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board title, for logging.
    pub title: String,
    /// Columns in board order.
    pub columns: Vec<Column>,
}

/// A card that already references the triggering issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingCard {
    /// The card's id.
    pub card_id: CardId,
    /// Name of the column currently holding the card.
    pub column_name: String,
}

/// What [`BoardSnapshot::resolve`] found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLookup {
    /// Id of the column whose name matched, if any.
    pub column_id: Option<ColumnId>,
    /// A card for the issue anywhere on the board, if any.
    pub existing_card: Option<ExistingCard>,
}

impl BoardSnapshot {
    /// Finds the target column and any existing card for `issue`.
    ///
    /// The card search covers every column, not only `target`. If several
    /// columns share the target name, or several cards reference the issue,
    /// the last one in board order is reported.
    pub fn resolve(&self, target: &ColumnName, issue: IssueId) -> ColumnLookup {
        self.columns
            .iter()
            .fold(ColumnLookup::default(), |found, column| {
                let column_id = if column.name == target.as_str() {
                    Some(column.id)
                } else {
                    found.column_id
                };
                let existing_card = column
                    .cards
                    .iter()
                    .rev()
                    .find(|card| card.content == Some(issue))
                    .map(|card| ExistingCard {
                        card_id: card.id,
                        column_name: column.name.clone(),
                    })
                    .or(found.existing_card);

                ColumnLookup {
                    column_id,
                    existing_card,
                }
            })
    }
}
