use axum::{
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sudoku_engine::Solver;

use crate::extract::FormOrJson;

/// Body of `POST /api/solve`. Fields are optional so that absence is
/// an explicit state the handler checks, rather than a deserialization
/// failure or a truthiness coercion.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub puzzle: Option<String>,
}

/// Body of `POST /api/check`.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub puzzle: Option<String>,
    pub coordinate: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
struct SolveResponse {
    solution: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(message: impl Into<String>) -> Response {
    Json(ErrorResponse {
        error: message.into(),
    })
    .into_response()
}

/// Build the API router. Stateless, so tests can construct one per
/// request.
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/check", post(check))
}

async fn solve(FormOrJson(request): FormOrJson<SolveRequest>) -> Response {
    let Some(puzzle) = request.puzzle else {
        return error_response("Required field missing");
    };

    match Solver::new().solve(&puzzle) {
        Ok(solution) => Json(SolveResponse { solution }).into_response(),
        Err(err) => {
            log::debug!("solve rejected: {err}");
            error_response(err.to_string())
        }
    }
}

async fn check(FormOrJson(request): FormOrJson<CheckRequest>) -> Response {
    let (Some(puzzle), Some(coordinate), Some(value)) =
        (request.puzzle, request.coordinate, request.value)
    else {
        return error_response("Required field(s) missing");
    };

    match Solver::new().check_placement(&puzzle, &coordinate, &value) {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            log::debug!("check rejected: {err}");
            error_response(err.to_string())
        }
    }
}
