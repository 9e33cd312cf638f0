//! Resource mount points. Students, teachers and courses are wired into
//! the router but carry no endpoints yet.

pub mod courses;
pub mod students;
pub mod teachers;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub(crate) async fn not_implemented() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "error": "Not implemented" })),
    )
}
