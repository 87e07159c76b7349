use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::weekly_metrics::use_cases::record_week::inbound::http as record_week_http;
use crate::modules::weekly_metrics::use_cases::view_dashboard::inbound::http as view_dashboard_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(view_dashboard_http::dashboard))
        .route("/weeks", get(view_dashboard_http::weeks))
        .route("/record-week", post(record_week_http::handle))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
