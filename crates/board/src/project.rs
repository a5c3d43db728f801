//! Project board references and URL parsing.
//!
//! Board URLs come in two shapes:
//!
//! ```text
//! https://github.com/orgs/<org>/projects/<number>
//! https://github.com/<owner>/<repo>/projects/<number>
//! ```
//!
//! Split on `/`, the third segment is either the literal `orgs` (organization
//! scope) or the repository owner, and the project number is always the sixth
//! segment. Anything else is rejected here rather than producing a query with
//! missing variables.

use serde::{Deserialize, Serialize};

use crate::{BoardError, Login, ProjectNumber, RepoName};

const SHAPE_HINT: &str =
    "expected https://<host>/orgs/<org>/projects/<number> or https://<host>/<owner>/<repo>/projects/<number>";

/// Who owns a project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum ProjectScope {
    /// Board owned by an organization.
    Organization {
        /// Organization login.
        login: Login,
    },
    /// Board owned by a single repository.
    Repository {
        /// Repository owner login.
        owner: Login,
        /// Repository name.
        name: RepoName,
    },
}

/// A parsed project board URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReference {
    url: String,
    scope: ProjectScope,
    number: ProjectNumber,
}

impl ProjectReference {
    /// Parses a board URL into its scope, owner, and project number.
    ///
    /// A query string, fragment, trailing slash, or trailing path segments
    /// after the project number (e.g. `/views/1`) are ignored.
    pub fn parse(url: &str) -> Result<Self, BoardError> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').collect();

        if segments.len() < 7 || !segments[0].ends_with(':') || !segments[1].is_empty() {
            return Err(BoardError::invalid_url(url, SHAPE_HINT));
        }
        if segments[5] != "projects" {
            return Err(BoardError::invalid_url(
                url,
                format!("expected 'projects' before the project number, found '{}'", segments[5]),
            ));
        }

        let number = match segments[6].parse::<u64>() {
            Ok(n) if n > 0 => ProjectNumber::new(n),
            _ => {
                return Err(BoardError::invalid_url(
                    url,
                    format!("project number '{}' is not a positive integer", segments[6]),
                ))
            }
        };

        let missing = |what: &str| BoardError::invalid_url(url, format!("{what} is empty"));
        let scope = if segments[3] == "orgs" {
            ProjectScope::Organization {
                login: Login::new(segments[4]).ok_or_else(|| missing("organization login"))?,
            }
        } else {
            ProjectScope::Repository {
                owner: Login::new(segments[3]).ok_or_else(|| missing("repository owner"))?,
                name: RepoName::new(segments[4]).ok_or_else(|| missing("repository name"))?,
            }
        };

        Ok(Self {
            url: url.to_string(),
            scope,
            number,
        })
    }

    /// The URL exactly as it was supplied.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Who owns the board.
    pub fn scope(&self) -> &ProjectScope {
        &self.scope
    }

    /// The board's project number.
    pub fn number(&self) -> ProjectNumber {
        self.number
    }
}

impl std::fmt::Display for ProjectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_org_url() {
        let project = ProjectReference::parse("https://github.com/orgs/ACME/projects/5").unwrap();
        assert_eq!(
            project.scope(),
            &ProjectScope::Organization {
                login: Login::new("ACME").unwrap()
            }
        );
        assert_eq!(project.number(), ProjectNumber::new(5));
        assert_eq!(project.url(), "https://github.com/orgs/ACME/projects/5");
    }

    #[test]
    fn test_parse_repo_url() {
        let project = ProjectReference::parse("https://github.com/owner/repo/projects/3").unwrap();
        assert_eq!(
            project.scope(),
            &ProjectScope::Repository {
                owner: Login::new("owner").unwrap(),
                name: RepoName::new("repo").unwrap(),
            }
        );
        assert_eq!(project.number(), ProjectNumber::new(3));
    }

    #[test]
    fn test_parse_tolerates_trailing_segments_and_query() {
        let project =
            ProjectReference::parse("https://github.example.com/orgs/ACME/projects/12/views/1?layout=board")
                .unwrap();
        assert_eq!(project.number(), ProjectNumber::new(12));

        let project = ProjectReference::parse("https://github.com/owner/repo/projects/3/").unwrap();
        assert_eq!(project.number(), ProjectNumber::new(3));
    }

    #[test]
    fn test_parse_rejects_short_url() {
        let err = ProjectReference::parse("https://github.com/orgs/ACME").unwrap_err();
        assert!(matches!(err, BoardError::InvalidProjectUrl { .. }));
    }

    #[test]
    fn test_parse_rejects_url_without_scheme() {
        let err = ProjectReference::parse("github.com/orgs/ACME/projects/5/x/y").unwrap_err();
        assert!(matches!(err, BoardError::InvalidProjectUrl { .. }));
    }

    #[test]
    fn test_parse_rejects_non_project_path() {
        let err = ProjectReference::parse("https://github.com/owner/repo/issues/3").unwrap_err();
        match err {
            BoardError::InvalidProjectUrl { url, reason } => {
                assert_eq!(url, "https://github.com/owner/repo/issues/3");
                assert!(reason.contains("'issues'"), "reason was: {reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_project_number() {
        for url in [
            "https://github.com/orgs/ACME/projects/five",
            "https://github.com/orgs/ACME/projects/0",
            "https://github.com/orgs/ACME/projects/-1",
        ] {
            let err = ProjectReference::parse(url).unwrap_err();
            assert!(matches!(err, BoardError::InvalidProjectUrl { .. }), "{url}");
        }
    }

    #[test]
    fn test_parse_rejects_empty_owner() {
        let err = ProjectReference::parse("https://github.com//repo/projects/3").unwrap_err();
        match err {
            BoardError::InvalidProjectUrl { reason, .. } => {
                assert_eq!(reason, "repository owner is empty")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
