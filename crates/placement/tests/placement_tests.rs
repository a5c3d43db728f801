//! Behaviour of a full placement run against in-memory boards.

mod common;

use std::sync::Arc;

use board::{plan_targets, BoardError, CardId, ColumnId, IssueId, TargetPlan};
use common::{column, FakeBoard, FakeEvents, ISSUE};
use placement::{CardPlacer, IterationMode, Outcome};

const ORG_URL: &str = "https://github.com/orgs/ACME/projects/5";
const REPO_URL: &str = "https://github.com/owner/repo/projects/3";

fn placer(board: &Arc<FakeBoard>, mode: IterationMode) -> CardPlacer {
    CardPlacer::new(board.clone(), mode)
}

fn plan(urls: &str, columns: &str) -> TargetPlan {
    plan_targets(urls, columns).unwrap()
}

#[tokio::test]
async fn test_creates_card_in_target_column() {
    let board = Arc::new(FakeBoard::new().with_board(ORG_URL, vec![column(100, "Done", &[])]));

    let report = placer(&board, IterationMode::FirstOutcome)
        .run(plan(ORG_URL, "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap();

    assert_eq!(board.created(), vec![(ColumnId::new(100), IssueId::new(42))]);
    assert_eq!(report.created(), 1);
    let message = report.to_string();
    assert_eq!(
        message,
        "Successfully created a new card in column #100 for an issue with the corresponding id:42 !"
    );
    assert!(message.contains("100") && message.contains("42"));
}

#[tokio::test]
async fn test_existing_card_suppresses_creation() {
    let board = Arc::new(FakeBoard::new().with_board(
        ORG_URL,
        vec![
            column(99, "In progress", &[(7, Some(42))]),
            column(100, "Done", &[]),
        ],
    ));

    let report = placer(&board, IterationMode::FirstOutcome)
        .run(plan(ORG_URL, "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap();

    assert!(board.created().is_empty());
    assert_eq!(
        report.outcomes,
        vec![Outcome::CardExists {
            project: ORG_URL.to_string(),
            card_id: CardId::new(7),
            column_name: "In progress".to_string(),
        }]
    );
    assert_eq!(
        report.to_string(),
        "No action being taken. A card already exists in the project for the issue. Column:In progress, cardId:7."
    );
}

#[tokio::test]
async fn test_existing_card_wins_even_when_column_is_missing() {
    let board = Arc::new(
        FakeBoard::new().with_board(ORG_URL, vec![column(99, "Backlog", &[(7, Some(42))])]),
    );

    let report = placer(&board, IterationMode::FirstOutcome)
        .run(plan(ORG_URL, "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap();

    assert!(matches!(report.outcomes[0], Outcome::CardExists { .. }));
    assert!(board.created().is_empty());
}

#[tokio::test]
async fn test_missing_column_is_fatal() {
    let board = Arc::new(FakeBoard::new().with_board(
        ORG_URL,
        vec![column(99, "To do", &[(1, None), (2, Some(41))])],
    ));

    let err = placer(&board, IterationMode::FirstOutcome)
        .run(plan(ORG_URL, "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap_err();

    assert!(board.created().is_empty());
    match &err {
        BoardError::ColumnNotFound { column, url } => {
            assert_eq!(column.as_str(), "Done");
            assert_eq!(url, ORG_URL);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Unable to find a columnId for the column Done"));
}

#[tokio::test]
async fn test_count_mismatch_takes_no_action() {
    let board = Arc::new(FakeBoard::new());

    let report = placer(&board, IterationMode::EveryProject)
        .run(plan(&format!("{ORG_URL}, {REPO_URL}, {ORG_URL}"), "A, B"), &FakeEvents(None))
        .await
        .unwrap();

    assert!(matches!(report.outcomes.as_slice(), [Outcome::NoAction(_)]));
    assert!(report.to_string().starts_with("No action being taken."));
    assert!(board.fetched().is_empty());
    assert!(board.created().is_empty());
}

#[tokio::test]
async fn test_first_outcome_mode_stops_after_first_project() {
    let board = Arc::new(
        FakeBoard::new()
            .with_board(ORG_URL, vec![column(100, "Done", &[])])
            .with_board(REPO_URL, vec![column(200, "Done", &[])]),
    );

    let report = placer(&board, IterationMode::FirstOutcome)
        .run(plan(&format!("{ORG_URL}, {REPO_URL}"), "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap();

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(board.fetched(), vec![ORG_URL.to_string()]);
    assert_eq!(board.created(), vec![(ColumnId::new(100), IssueId::new(42))]);
}

#[tokio::test]
async fn test_every_project_mode_visits_each_board() {
    let board = Arc::new(
        FakeBoard::new()
            .with_board(ORG_URL, vec![column(100, "Triage", &[])])
            .with_board(REPO_URL, vec![column(200, "Backlog", &[(5, Some(42))])]),
    );

    let report = placer(&board, IterationMode::EveryProject)
        .run(
            plan(&format!("{ORG_URL}, {REPO_URL}"), "Triage, Backlog"),
            &FakeEvents(Some(ISSUE)),
        )
        .await
        .unwrap();

    assert_eq!(board.fetched(), vec![ORG_URL.to_string(), REPO_URL.to_string()]);
    assert_eq!(board.created(), vec![(ColumnId::new(100), IssueId::new(42))]);
    assert!(matches!(report.outcomes[0], Outcome::CardCreated { .. }));
    assert!(matches!(report.outcomes[1], Outcome::CardExists { .. }));
    assert_eq!(report.to_string().lines().count(), 2);
}

#[tokio::test]
async fn test_every_project_mode_stops_at_first_error() {
    let board = Arc::new(
        FakeBoard::new()
            .with_board(ORG_URL, vec![column(100, "Other", &[])])
            .with_board(REPO_URL, vec![column(200, "Done", &[])]),
    );

    let err = placer(&board, IterationMode::EveryProject)
        .run(plan(&format!("{ORG_URL}, {REPO_URL}"), "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap_err();

    assert!(matches!(err, BoardError::ColumnNotFound { .. }));
    assert_eq!(board.fetched(), vec![ORG_URL.to_string()]);
    assert!(board.created().is_empty());
}

#[tokio::test]
async fn test_board_errors_propagate() {
    let board = Arc::new(FakeBoard::new());

    let err = placer(&board, IterationMode::FirstOutcome)
        .run(plan(REPO_URL, "Done"), &FakeEvents(Some(ISSUE)))
        .await
        .unwrap_err();

    assert!(matches!(err, BoardError::ProjectNotFound { .. }));
}

#[tokio::test]
async fn test_event_errors_propagate_before_any_api_call() {
    let board = Arc::new(FakeBoard::new().with_board(ORG_URL, vec![column(100, "Done", &[])]));

    let err = placer(&board, IterationMode::FirstOutcome)
        .run(plan(ORG_URL, "Done"), &FakeEvents(None))
        .await
        .unwrap_err();

    assert!(matches!(err, BoardError::InvalidEvent { .. }));
    assert!(board.fetched().is_empty());
}
