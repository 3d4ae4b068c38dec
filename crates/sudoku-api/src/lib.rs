//! Thin HTTP shim over [`sudoku_engine`].
//!
//! Two POST endpoints, `/api/solve` and `/api/check`, accepting either
//! form-encoded or JSON bodies. The shim owns only missing-field
//! detection and response serialization; every other decision lives in
//! the engine. Errors are JSON payloads on a `200 OK`, never HTTP
//! error statuses — callers match on the `error` message text.

mod extract;
mod routes;

pub use extract::FormOrJson;
pub use routes::router;
