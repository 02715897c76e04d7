use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_entries::adapters::inbound::problem;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTimeEntriesParams {
    pub user_id: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    params: Result<Query<ListTimeEntriesParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => return problem::from_query_rejection(&state.alerts, rejection),
    };

    match state.list_handler.handle(params.user_id).await {
        Ok(entries) => Json(entries).into_response(),
        Err(err) => problem::from_application_error(&state.alerts, err),
    }
}
