use axum::{routing::any, Router};

use crate::routes::not_implemented;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/students", any(not_implemented))
}
