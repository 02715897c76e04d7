use axum::{
    Router,
    routing::get,
};

use crate::modules::time_entries::use_cases::create_time_entry::inbound::http as create_http;
use crate::modules::time_entries::use_cases::delete_time_entry::inbound::http as delete_http;
use crate::modules::time_entries::use_cases::get_time_entry::inbound::http as get_http;
use crate::modules::time_entries::use_cases::list_time_entries::inbound::http as list_http;
use crate::modules::time_entries::use_cases::partial_update_time_entry::inbound::http as partial_update_http;
use crate::modules::time_entries::use_cases::update_time_entry::inbound::http as update_http;
use crate::shell::state::AppState;

pub const API_PREFIX: &str = "/api";

pub fn router(state: AppState) -> Router {
    let time_entries = Router::new()
        .route(
            "/time-entries",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/time-entries/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .patch(partial_update_http::handle)
                .delete(delete_http::handle),
        );

    Router::new()
        .nest(API_PREFIX, time_entries)
        .with_state(state)
}
