// End to end tests of the time entry REST resource, through the full router
// and the in memory repository.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use std::sync::Arc;
use tower::ServiceExt;

use crate::modules::time_entries::adapters::outbound::repository_in_memory::InMemoryTimeEntryRepository;
use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::shell::http::router;
use crate::tests::fixtures::http::{json_of, json_request, patch_json, post_json, put_json};
use crate::tests::fixtures::state::make_test_state;
use crate::tests::fixtures::time_entries::{
    DEFAULT_MINUTES_WORKED, DEFAULT_TASK_NAME, TimeEntryBuilder, UPDATED_MINUTES_WORKED,
    UPDATED_TASK_NAME, default_date, updated_date,
};

const ENTITY_API_URL: &str = "/api/time-entries";

fn entity_url(id: i64) -> String {
    format!("{ENTITY_API_URL}/{id}")
}

fn setup() -> (Router, Arc<InMemoryTimeEntryRepository>) {
    let (state, repository) = make_test_state();
    (router(state), repository)
}

fn body_of(entry: &TimeEntry) -> String {
    serde_json::to_string(entry).unwrap()
}

async fn last_stored(repository: &InMemoryTimeEntryRepository) -> TimeEntry {
    repository.list().await.unwrap().pop().unwrap()
}

#[tokio::test]
async fn create_time_entry() {
    let (app, repository) = setup();
    let size_before = repository.len().await;
    let entry = TimeEntryBuilder::new().build();

    let response = app
        .oneshot(post_json(ENTITY_API_URL, &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(repository.len().await, size_before + 1);
    let stored = last_stored(&repository).await;
    assert_eq!(stored.date, default_date());
    assert_eq!(stored.minutes_worked, DEFAULT_MINUTES_WORKED);
    assert_eq!(stored.task_name, DEFAULT_TASK_NAME);
}

#[tokio::test]
async fn create_then_get_returns_the_same_fields() {
    let (app, _) = setup();
    let entry = TimeEntryBuilder::new().user(4).build();

    let created = app
        .clone()
        .oneshot(post_json(ENTITY_API_URL, &body_of(&entry)))
        .await
        .unwrap();
    let created: TimeEntry = serde_json::from_value(json_of(created).await).unwrap();
    let id = created.id.unwrap();

    let response = app
        .oneshot(Request::get(entity_url(id)).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let loaded: TimeEntry = serde_json::from_value(json_of(response).await).unwrap();
    assert_eq!(loaded, created);
    assert!(loaded.same_fields(&entry));
}

#[tokio::test]
async fn create_time_entry_with_existing_id() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1).build();

    let response = app
        .oneshot(post_json(ENTITY_API_URL, &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn check_required_fields() {
    for field in ["date", "minutesWorked", "taskName"] {
        let (app, repository) = setup();
        let mut body = serde_json::to_value(TimeEntryBuilder::new().build()).unwrap();
        body[field] = serde_json::Value::Null;

        let response = app
            .oneshot(post_json(ENTITY_API_URL, &body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "field {field}");
        assert!(repository.is_empty().await, "field {field}");
    }
}

#[tokio::test]
async fn get_all_time_entries() {
    let (app, repository) = setup();
    let stored = repository
        .put(TimeEntryBuilder::new().build())
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::get(format!("{ENTITY_API_URL}?sort=id,desc"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    let entries = json.as_array().unwrap();
    assert!(entries.iter().any(|entry| {
        entry["id"] == stored.id.unwrap()
            && entry["date"] == "1970-01-01"
            && entry["minutesWorked"] == DEFAULT_MINUTES_WORKED
            && entry["taskName"] == DEFAULT_TASK_NAME
    }));
}

#[tokio::test]
async fn get_non_existing_time_entry() {
    let (app, _) = setup();

    let response = app
        .oneshot(Request::get(entity_url(i64::MAX)).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn put_existing_time_entry() {
    let (app, repository) = setup();
    let stored = repository
        .put(TimeEntryBuilder::new().build())
        .await
        .unwrap();
    let id = stored.id.unwrap();
    let size_before = repository.len().await;
    let updated = TimeEntryBuilder::updated().id(id).build();

    let response = app
        .oneshot(put_json(&entity_url(id), &body_of(&updated)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(repository.len().await, size_before);
    let loaded = last_stored(&repository).await;
    assert_eq!(loaded.date, updated_date());
    assert_eq!(loaded.minutes_worked, UPDATED_MINUTES_WORKED);
    assert_eq!(loaded.task_name, UPDATED_TASK_NAME);
}

#[tokio::test]
async fn put_non_existing_time_entry() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1000).build();

    let response = app
        .oneshot(put_json(&entity_url(1000), &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn put_with_id_mismatch_time_entry() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1000).build();

    let response = app
        .oneshot(put_json(&entity_url(1001), &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn put_with_missing_id_path_param_time_entry() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1000).build();

    let response = app
        .oneshot(json_request(Method::PUT, ENTITY_API_URL, &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn partial_update_time_entry_with_patch() {
    let (app, repository) = setup();
    let id = repository
        .put(TimeEntryBuilder::new().build())
        .await
        .unwrap()
        .id
        .unwrap();
    let size_before = repository.len().await;
    let body = serde_json::json!({
        "id": id,
        "date": updated_date(),
        "taskName": UPDATED_TASK_NAME,
    });

    let response = app
        .oneshot(patch_json(&entity_url(id), &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(repository.len().await, size_before);
    let loaded = last_stored(&repository).await;
    assert_eq!(loaded.date, updated_date());
    assert_eq!(loaded.minutes_worked, DEFAULT_MINUTES_WORKED);
    assert_eq!(loaded.task_name, UPDATED_TASK_NAME);
}

#[tokio::test]
async fn partial_update_time_entry_with_explicit_nulls() {
    let (app, repository) = setup();
    let id = repository
        .put(TimeEntryBuilder::new().minutes_worked(5).build())
        .await
        .unwrap()
        .id
        .unwrap();
    let body = serde_json::json!({
        "id": id,
        "date": null,
        "minutesWorked": null,
        "taskName": UPDATED_TASK_NAME,
    });

    let response = app
        .oneshot(patch_json(&entity_url(id), &body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_of(response).await;
    assert_eq!(json["date"], "1970-01-01");
    assert_eq!(json["minutesWorked"], 5);
    assert_eq!(json["taskName"], UPDATED_TASK_NAME);
    let loaded = last_stored(&repository).await;
    assert_eq!(loaded.date, default_date());
    assert_eq!(loaded.minutes_worked, 5);
    assert_eq!(loaded.task_name, UPDATED_TASK_NAME);
}

#[tokio::test]
async fn create_time_entry_with_long_task_name() {
    let (app, repository) = setup();
    let task_name = "A".repeat(300);
    let entry = TimeEntryBuilder::new().task_name(&task_name).build();

    let response = app
        .oneshot(post_json(ENTITY_API_URL, &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(last_stored(&repository).await.task_name, task_name);
}

#[tokio::test]
async fn full_update_time_entry_with_patch() {
    let (app, repository) = setup();
    let id = repository
        .put(TimeEntryBuilder::new().build())
        .await
        .unwrap()
        .id
        .unwrap();
    let updated = TimeEntryBuilder::updated().id(id).build();

    let response = app
        .oneshot(patch_json(&entity_url(id), &body_of(&updated)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let loaded = last_stored(&repository).await;
    assert_eq!(loaded.date, updated_date());
    assert_eq!(loaded.minutes_worked, UPDATED_MINUTES_WORKED);
    assert_eq!(loaded.task_name, UPDATED_TASK_NAME);
}

#[tokio::test]
async fn patch_non_existing_time_entry() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1000).build();

    let response = app
        .oneshot(patch_json(&entity_url(1000), &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn patch_with_id_mismatch_time_entry() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1000).build();

    let response = app
        .oneshot(patch_json(&entity_url(1001), &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn patch_with_missing_id_path_param_time_entry() {
    let (app, repository) = setup();
    let entry = TimeEntryBuilder::new().id(1000).build();

    let response = app
        .oneshot(patch_json(ENTITY_API_URL, &body_of(&entry)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(repository.is_empty().await);
}

#[tokio::test]
async fn delete_time_entry() {
    let (app, repository) = setup();
    let id = repository
        .put(TimeEntryBuilder::new().build())
        .await
        .unwrap()
        .id
        .unwrap();
    let size_before = repository.len().await;

    let response = app
        .clone()
        .oneshot(Request::delete(entity_url(id)).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(repository.len().await, size_before - 1);

    let response = app
        .oneshot(Request::get(entity_url(id)).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
