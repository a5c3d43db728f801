//! Core domain for placing issue cards on project boards.
//!
//! This crate contains every domain concept, newtype identifier, the input and
//! URL parsers, the column/card resolver, and the port traits the
//! infrastructure crates implement. It has no I/O dependencies; it defines
//! *what* is needed and the infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`ColumnId`, `IssueId`, `ColumnName`, etc.) |
//! | [`project`] | [`ProjectReference`] and board URL parsing |
//! | [`input`] | Pairing project URLs with column names |
//! | [`snapshot`] | Board contents and the column/card resolver |
//! | [`ports`] | [`ProjectBoard`] and [`EventSource`] traits |
//! | [`errors`] | [`BoardError`] |

pub mod errors;
pub mod identifiers;
pub mod input;
pub mod ports;
pub mod project;
pub mod snapshot;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{BoardError, BoxError};
pub use identifiers::{
    CardId, ColumnId, ColumnName, IssueId, IssueNumber, Login, ProjectNumber, RepoName, RunId,
};
pub use input::{plan_targets, split_list, CountMismatch, ProjectTarget, TargetPlan};
pub use ports::{EventSource, IssueEvent, ProjectBoard};
pub use project::{ProjectReference, ProjectScope};
pub use snapshot::{BoardSnapshot, Card, Column, ColumnLookup, ExistingCard};
