use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::json;

use crate::modules::weekly_metrics::use_cases::record_week::command::RecordWeek;
use crate::modules::weekly_metrics::use_cases::record_week::handler::ApplicationError;
use crate::shared::infrastructure::remote_store::StoreError;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordWeekResponse {
    pub week_start_date: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordWeek>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.record_week_handler.handle(command).await {
        Ok(week_start_date) => (
            StatusCode::CREATED,
            Json(RecordWeekResponse {
                week_start_date: week_start_date.format("%Y-%m-%d").to_string(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Domain(e)) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e @ ApplicationError::Unauthenticated) => {
            error_response(StatusCode::UNAUTHORIZED, e.to_string())
        }
        Err(ApplicationError::Store(StoreError::NotConfigured)) => error_response(
            StatusCode::SERVICE_UNAVAILABLE,
            "Database not configured. Cannot add data.",
        ),
        Err(ApplicationError::Store(_)) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to add data. Please try again.",
        ),
    }
}
