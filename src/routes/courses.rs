use axum::{routing::any, Router};

use crate::routes::not_implemented;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/courses", any(not_implemented))
}
