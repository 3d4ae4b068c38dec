//! Functional tests driving the router in-process, one request per
//! case, covering both form-encoded and JSON bodies.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

const VALID_PUZZLE: &str =
    "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
const VALID_SOLUTION: &str =
    "135762984946381257728459613694517832812936745357824196473298561581673429269145378";
const SAMPLE_PUZZLE: &str =
    "..9..5.1.85.4....2432......1...69.83.9.....6.62.71...9......1945....4.37.4.3..6..";

async fn post(uri: &str, content_type: &str, body: String) -> Value {
    let response = sudoku_api::router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(CONTENT_TYPE, content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_form(uri: &str, body: impl Into<String>) -> Value {
    post(uri, "application/x-www-form-urlencoded", body.into()).await
}

async fn post_json(uri: &str, body: Value) -> Value {
    post(uri, "application/json", body.to_string()).await
}

mod solve {
    use super::*;

    #[tokio::test]
    async fn solves_a_valid_puzzle() {
        let body = post_form("/api/solve", format!("puzzle={VALID_PUZZLE}")).await;
        assert_eq!(body, json!({ "solution": VALID_SOLUTION }));
    }

    #[tokio::test]
    async fn rejects_a_missing_puzzle_field() {
        let body = post_form("/api/solve", "notPuzzle=notPuzzle").await;
        assert_eq!(body, json!({ "error": "Required field missing" }));
    }

    #[tokio::test]
    async fn rejects_invalid_characters() {
        let body = post_form("/api/solve", format!("puzzle={}", "a".repeat(81))).await;
        assert_eq!(body, json!({ "error": "Invalid characters in puzzle" }));
    }

    #[tokio::test]
    async fn rejects_an_incorrect_length() {
        let body = post_form("/api/solve", format!("puzzle={}", "1".repeat(88))).await;
        assert_eq!(
            body,
            json!({ "error": "Expected puzzle to be 81 characters long" })
        );
    }

    #[tokio::test]
    async fn rejects_an_unsolvable_puzzle() {
        let contradictory = VALID_PUZZLE.replacen('1', "5", 1);
        let body = post_form("/api/solve", format!("puzzle={contradictory}")).await;
        assert_eq!(body, json!({ "error": "Puzzle cannot be solved" }));
    }

    #[tokio::test]
    async fn accepts_json_bodies() {
        let body = post_json("/api/solve", json!({ "puzzle": VALID_PUZZLE })).await;
        assert_eq!(body, json!({ "solution": VALID_SOLUTION }));

        let body = post_json("/api/solve", json!({ "notPuzzle": "notPuzzle" })).await;
        assert_eq!(body, json!({ "error": "Required field missing" }));
    }
}

mod check {
    use super::*;

    async fn check_form(puzzle: &str, coordinate: &str, value: &str) -> Value {
        post_form(
            "/api/check",
            format!("puzzle={puzzle}&coordinate={coordinate}&value={value}"),
        )
        .await
    }

    #[tokio::test]
    async fn accepts_a_valid_placement() {
        let body = check_form(SAMPLE_PUZZLE, "A5", "2").await;
        assert_eq!(body, json!({ "valid": true }));
    }

    #[tokio::test]
    async fn reports_a_single_conflict() {
        let body = check_form(SAMPLE_PUZZLE, "A5", "9").await;
        assert_eq!(body, json!({ "valid": false, "conflict": ["row"] }));
    }

    #[tokio::test]
    async fn reports_multiple_conflicts() {
        let body = check_form(SAMPLE_PUZZLE, "A5", "1").await;
        assert_eq!(body, json!({ "valid": false, "conflict": ["row", "column"] }));
    }

    #[tokio::test]
    async fn reports_all_conflicts() {
        let body = check_form(SAMPLE_PUZZLE, "A2", "5").await;
        assert_eq!(
            body,
            json!({ "valid": false, "conflict": ["row", "column", "region"] })
        );
    }

    #[tokio::test]
    async fn rejects_missing_fields() {
        let body = post_form(
            "/api/check",
            format!("notPuzzle={SAMPLE_PUZZLE}&coordinate=A2&value=5"),
        )
        .await;
        assert_eq!(body, json!({ "error": "Required field(s) missing" }));
    }

    #[tokio::test]
    async fn a_present_but_empty_field_reaches_the_engine() {
        // Presence is checked explicitly, not by truthiness: an empty
        // puzzle string is present, so the engine's format error wins
        // over the missing-field error.
        let body = post_form("/api/check", "puzzle=&coordinate=A2&value=5").await;
        assert_eq!(
            body,
            json!({ "error": "Expected puzzle to be 81 characters long" })
        );
    }

    #[tokio::test]
    async fn rejects_invalid_characters() {
        let invalid = SAMPLE_PUZZLE.replacen('1', "q", 1);
        let body = check_form(&invalid, "A2", "5").await;
        assert_eq!(body, json!({ "error": "Invalid characters in puzzle" }));
    }

    #[tokio::test]
    async fn rejects_an_incorrect_length() {
        let body = check_form(&"1".repeat(20), "A2", "5").await;
        assert_eq!(
            body,
            json!({ "error": "Expected puzzle to be 81 characters long" })
        );
    }

    #[tokio::test]
    async fn rejects_an_invalid_coordinate() {
        let body = check_form(SAMPLE_PUZZLE, "ZQ", "5").await;
        assert_eq!(body, json!({ "error": "Invalid coordinate" }));
    }

    #[tokio::test]
    async fn rejects_an_invalid_value() {
        let body = check_form(SAMPLE_PUZZLE, "A5", "q").await;
        assert_eq!(body, json!({ "error": "Invalid value" }));
    }

    #[tokio::test]
    async fn accepts_json_bodies() {
        let body = post_json(
            "/api/check",
            json!({ "puzzle": SAMPLE_PUZZLE, "coordinate": "A5", "value": "2" }),
        )
        .await;
        assert_eq!(body, json!({ "valid": true }));

        let body = post_json(
            "/api/check",
            json!({ "puzzle": SAMPLE_PUZZLE, "coordinate": "A5" }),
        )
        .await;
        assert_eq!(body, json!({ "error": "Required field(s) missing" }));
    }
}
