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
    let time_entry = match payload.into_time_entry() {
        Ok(time_entry) => time_entry,
        Err(err) => return problem::from_application_error(&state.alerts, err.into()),
    };

    match state.update_handler.handle(id, time_entry).await {
        Ok(updated) => (
            StatusCode::OK,
            state.alerts.update(&id.to_string()),
            Json(updated),
        )
            .into_response(),
        Err(err) => problem::from_application_error(&state.alerts, err),
    }
}
