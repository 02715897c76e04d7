use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::adapters::inbound::problem;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(id) = match path {
        Ok(p) => p,
        Err(rejection) => return problem::from_path_rejection(&state.alerts, rejection),
    };

    match state.delete_handler.handle(id).await {
        Ok(()) => (StatusCode::NO_CONTENT, state.alerts.deletion(&id.to_string())).into_response(),
        Err(err) => problem::from_application_error(&state.alerts, err),
    }
}
