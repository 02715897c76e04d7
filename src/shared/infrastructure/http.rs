// HTTP helpers shared by every resource.
//
// - `EntityAlerts` builds the `X-{app}-alert`, `X-{app}-error` and
//   `X-{app}-params` headers the client uses to show notifications.
// - `Problem` is the `application/problem+json` body of every error response.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub const PROBLEM_JSON: &str = "application/problem+json";
pub const PROBLEM_BASE_URL: &str = "https://www.jhipster.tech/problem";
pub const PROBLEM_WITH_MESSAGE: &str = "https://www.jhipster.tech/problem/problem-with-message";
pub const CONSTRAINT_VIOLATION: &str = "https://www.jhipster.tech/problem/constraint-violation";

#[derive(Debug, Clone)]
pub struct EntityAlerts {
    application_name: String,
    entity_name: &'static str,
}

impl EntityAlerts {
    pub fn new(application_name: impl Into<String>, entity_name: &'static str) -> Self {
        Self {
            application_name: application_name.into(),
            entity_name,
        }
    }

    pub fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    pub fn creation(&self, id: &str) -> HeaderMap {
        self.alert("created", id)
    }

    pub fn update(&self, id: &str) -> HeaderMap {
        self.alert("updated", id)
    }

    pub fn deletion(&self, id: &str) -> HeaderMap {
        self.alert("deleted", id)
    }

    pub fn failure(&self, error_key: &str) -> HeaderMap {
        self.headers(&[
            ("error", format!("error.{error_key}")),
            ("params", self.entity_name.to_string()),
        ])
    }

    fn alert(&self, action: &str, id: &str) -> HeaderMap {
        self.headers(&[
            (
                "alert",
                format!("{}.{}.{action}", self.application_name, self.entity_name),
            ),
            ("params", id.to_string()),
        ])
    }

    // Headers whose name or value cannot be encoded are skipped.
    fn headers(&self, entries: &[(&str, String)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (suffix, value) in entries {
            let name = format!("x-{}-{suffix}", self.application_name);
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        headers
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub object_name: String,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub message: String,
    pub entity_name: String,
    pub error_key: String,
    pub params: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

impl Problem {
    pub fn new(
        status: StatusCode,
        title: impl Into<String>,
        entity_name: &str,
        error_key: &str,
    ) -> Self {
        Self {
            problem_type: PROBLEM_WITH_MESSAGE.to_string(),
            title: title.into(),
            status: status.as_u16(),
            message: format!("error.{error_key}"),
            entity_name: entity_name.to_string(),
            error_key: error_key.to_string(),
            params: entity_name.to_string(),
            field_errors: Vec::new(),
        }
    }

    pub fn with_field_errors(mut self, field_errors: Vec<FieldError>) -> Self {
        self.problem_type = CONSTRAINT_VIOLATION.to_string();
        self.field_errors = field_errors;
        self
    }

    pub fn into_response_with(self, alerts: &EntityAlerts) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let headers = alerts.failure(&self.error_key);
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(%err, "failed to serialize problem");
                return (status, headers).into_response();
            }
        };
        let mut response = (status, headers, body).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(PROBLEM_JSON));
        response
    }
}
