use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
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

    match state.get_handler.handle(id).await {
        Ok(time_entry) => Json(time_entry).into_response(),
        Err(err) => problem::from_application_error(&state.alerts, err),
    }
}
