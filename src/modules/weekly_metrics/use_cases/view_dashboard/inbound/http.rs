use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::weekly_metrics::core::dashboard::HistoryRow;
use crate::shell::state::AppState;

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.borrow().clone())
}

/// History rows, latest week first. Empty while the dashboard is loading.
pub async fn weeks(State(state): State<AppState>) -> impl IntoResponse {
    let history: Vec<HistoryRow> = state
        .dashboard
        .borrow()
        .dashboard()
        .map(|dashboard| dashboard.history.clone())
        .unwrap_or_default();
    Json(history)
}
