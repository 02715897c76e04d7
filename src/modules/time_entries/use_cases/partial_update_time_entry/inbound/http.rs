use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::adapters::inbound::problem;
use crate::modules::time_entries::core::validation::TimeEntryPayload;
use crate::shell::state::AppState;

/// Accepts `application/json` and `application/merge-patch+json` bodies.
pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<TimeEntryPayload>, JsonRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(p) => p,
        Err(rejection) => return problem::from_path_rejection(&state.alerts, rejection),
    };
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rejection) => return problem::from_json_rejection(&state.alerts, rejection),
    };

    match state
        .partial_update_handler
        .handle(id, payload.into_patch())
        .await
    {
        Ok(merged) => (
            StatusCode::OK,
            state.alerts.update(&id.to_string()),
            Json(merged),
        )
            .into_response(),
        Err(err) => problem::from_application_error(&state.alerts, err),
    }
}
