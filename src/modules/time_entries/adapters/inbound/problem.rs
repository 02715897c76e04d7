// Maps use case errors and extractor rejections to problem responses.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::Response;

use crate::modules::time_entries::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::http::{EntityAlerts, FieldError, Problem};

pub fn from_application_error(alerts: &EntityAlerts, error: ApplicationError) -> Response {
    let entity_name = alerts.entity_name();
    let problem = match error {
        ApplicationError::InvalidRequest { message, error_key } => {
            tracing::warn!(error_key, "{message}");
            Problem::new(StatusCode::BAD_REQUEST, message, entity_name, error_key)
        }
        ApplicationError::NotFound(id) => {
            tracing::debug!(id, "time entry not found");
            Problem::new(StatusCode::NOT_FOUND, "Not Found", entity_name, "notfound")
        }
        ApplicationError::Validation(err) => {
            tracing::warn!(%err, "rejecting invalid time entry");
            let field_errors = err
                .missing_fields
                .iter()
                .map(|field| FieldError {
                    object_name: entity_name.to_string(),
                    field: (*field).to_string(),
                    message: "NotNull".to_string(),
                })
                .collect();
            Problem::new(
                StatusCode::BAD_REQUEST,
                "Method argument not valid",
                entity_name,
                "validation",
            )
            .with_field_errors(field_errors)
        }
        ApplicationError::Repository(err) => {
            tracing::error!(%err, "time entry repository failure");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                entity_name,
                "http.500",
            )
        }
    };
    problem.into_response_with(alerts)
}

pub fn from_json_rejection(alerts: &EntityAlerts, rejection: JsonRejection) -> Response {
    match rejection {
        JsonRejection::MissingJsonContentType(rejection) => rejected(
            alerts,
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "http.415",
            rejection.body_text(),
        ),
        rejection => rejected(
            alerts,
            StatusCode::BAD_REQUEST,
            "http.400",
            rejection.body_text(),
        ),
    }
}

pub fn from_path_rejection(alerts: &EntityAlerts, rejection: PathRejection) -> Response {
    rejected(
        alerts,
        StatusCode::BAD_REQUEST,
        "http.400",
        rejection.body_text(),
    )
}

pub fn from_query_rejection(alerts: &EntityAlerts, rejection: QueryRejection) -> Response {
    rejected(
        alerts,
        StatusCode::BAD_REQUEST,
        "http.400",
        rejection.body_text(),
    )
}

fn rejected(alerts: &EntityAlerts, status: StatusCode, error_key: &str, detail: String) -> Response {
    tracing::warn!(%status, %detail, "rejecting malformed request");
    Problem::new(status, detail, alerts.entity_name(), error_key).into_response_with(alerts)
}
