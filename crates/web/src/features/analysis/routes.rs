use axum::{Router, routing::post};

use super::handlers::analyze_rounds;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_rounds))
}
