//! GraphQL documents.
//!
//! Both board queries select the same column shape so that one set of wire
//! types decodes either response. Card content is narrowed to `Issue`; cards
//! for pull requests and notes come back without a content `databaseId`.

/// Board owned by an organization. Variables: `login`, `number`.
pub const ORG_BOARD_QUERY: &str = r#"
query ($login: String!, $number: Int!) {
  organization(login: $login) {
    project(number: $number) {
      name
      columns(first: 100) {
        nodes {
          ...ColumnWithCards
        }
      }
    }
  }
}
"#;

/// Board owned by a repository. Variables: `owner`, `name`, `number`.
pub const REPO_BOARD_QUERY: &str = r#"
query ($owner: String!, $name: String!, $number: Int!) {
  repository(owner: $owner, name: $name) {
    project(number: $number) {
      name
      columns(first: 100) {
        nodes {
          ...ColumnWithCards
        }
      }
    }
  }
}
"#;

/// Next page of cards of one column. Variables: `column`, `after`.
pub const COLUMN_CARDS_QUERY: &str = r#"
query ($column: ID!, $after: String!) {
  node(id: $column) {
    ... on ProjectColumn {
      cards(first: 100, after: $after) {
        ...CardPage
      }
    }
  }
}
"#;

const COLUMN_FRAGMENT: &str = r#"
fragment ColumnWithCards on ProjectColumn {
  id
  databaseId
  name
  cards(first: 100) {
    ...CardPage
  }
}
"#;

const CARD_PAGE_FRAGMENT: &str = r#"
fragment CardPage on ProjectCardConnection {
  pageInfo {
    hasNextPage
    endCursor
  }
  nodes {
    databaseId
    content {
      ... on Issue {
        databaseId
        number
      }
    }
  }
}
"#;

/// Appends the fragments `query` refers to.
pub fn with_fragments(query: &str) -> String {
    let mut document = String::from(query);
    if query.contains("...ColumnWithCards") {
        document.push_str(COLUMN_FRAGMENT);
    }
    document.push_str(CARD_PAGE_FRAGMENT);
    document
}
