//! Action input parsing: pairs project URLs with the column to place the card in.

use crate::{BoardError, ColumnName, ProjectReference};

/// One board to visit, together with the column the card should land in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTarget {
    /// The board.
    pub project: ProjectReference,
    /// The column on that board.
    pub column: ColumnName,
}

/// The column list neither has one entry nor one entry per project URL.
///
/// Not an error: the run ends successfully without touching any board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// Number of project URLs supplied.
    pub urls: usize,
    /// Number of column names supplied.
    pub columns: usize,
}

impl std::fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "No action being taken. The number of column items must either be 1 or match the number of items in the project-url input parameter"
        )
    }
}

/// Result of pairing the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetPlan {
    /// Every URL paired with a column, in input order.
    Ready(Vec<ProjectTarget>),
    /// The counts do not line up; nothing should be done.
    CountMismatch(CountMismatch),
}

/// Splits a comma-separated input into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Pairs the delimited `project_urls` with the delimited `column_names`.
///
/// A single column name is broadcast to every URL; otherwise the lists are
/// paired by position. The count check runs before any URL is parsed, so a
/// mismatch never reports a URL error.
pub fn plan_targets(project_urls: &str, column_names: &str) -> Result<TargetPlan, BoardError> {
    let urls = split_list(project_urls);
    let columns = split_list(column_names);

    if columns.len() != 1 && columns.len() != urls.len() {
        return Ok(TargetPlan::CountMismatch(CountMismatch {
            urls: urls.len(),
            columns: columns.len(),
        }));
    }
    if urls.is_empty() {
        return Err(BoardError::configuration("no project URL was supplied"));
    }

    let targets = urls
        .iter()
        .enumerate()
        .map(|(index, url)| {
            let project = ProjectReference::parse(url)?;
            let name = if columns.len() == 1 {
                columns[0]
            } else {
                columns[index]
            };
            let column = ColumnName::new(name)
                .ok_or_else(|| BoardError::configuration("column name is empty"))?;
            Ok(ProjectTarget { project, column })
        })
        .collect::<Result<Vec<_>, BoardError>>()?;

    Ok(TargetPlan::Ready(targets))
}
