use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::modules::time_entries::adapters::inbound::problem;
use crate::modules::time_entries::core::validation::TimeEntryPayload;
use crate::shell::http::API_PREFIX;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<TimeEntryPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rejection) => return problem::from_json_rejection(&state.alerts, rejection),
    };
    let time_entry = match payload.into_time_entry() {
        Ok(time_entry) => time_entry,
        Err(err) => return problem::from_application_error(&state.alerts, err.into()),
    };

    match state.create_handler.handle(time_entry).await {
        Ok(created) => {
            let mut headers = state.alerts.creation(&created.id.to_string());
            let location = format!("{API_PREFIX}/time-entries/{}", created.id);
            if let Ok(location) = HeaderValue::from_str(&location) {
                headers.insert(LOCATION, location);
            }
            (StatusCode::CREATED, headers, Json(created.time_entry)).into_response()
        }
        Err(err) => problem::from_application_error(&state.alerts, err),
    }
}
