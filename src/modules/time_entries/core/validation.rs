// Field presence checks for inbound time entry payloads.
//
// Every field of the payload is optional on the wire. A full write (create,
// update) needs date, minutesWorked and taskName; a merge-patch takes
// whatever is present.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::modules::time_entries::core::time_entry::{TimeEntry, TimeEntryPatch, UserRef};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required fields: {}", .missing_fields.join(", "))]
pub struct ValidationError {
    pub missing_fields: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdError {
    #[error("body carries no id")]
    Missing,
    #[error("body id {body_id} does not match path id {path_id}")]
    Mismatch { path_id: i64, body_id: i64 },
}

/// Guard of full and partial updates: the body must carry the id of the path
/// it was sent to.
pub fn ensure_matching_id(path_id: i64, body_id: Option<i64>) -> Result<(), IdError> {
    match body_id {
        None => Err(IdError::Missing),
        Some(body_id) if body_id != path_id => Err(IdError::Mismatch { path_id, body_id }),
        Some(_) => Ok(()),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryPayload {
    pub id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub minutes_worked: Option<i32>,
    pub task_name: Option<String>,
    pub user: Option<UserRef>,
}

impl TimeEntryPayload {
    pub fn into_time_entry(self) -> Result<TimeEntry, ValidationError> {
        let mut missing_fields = Vec::new();
        if self.date.is_none() {
            missing_fields.push("date");
        }
        if self.minutes_worked.is_none() {
            missing_fields.push("minutesWorked");
        }
        if self.task_name.is_none() {
            missing_fields.push("taskName");
        }

        match (self.date, self.minutes_worked, self.task_name) {
            (Some(date), Some(minutes_worked), Some(task_name)) => Ok(TimeEntry {
                id: self.id,
                date,
                minutes_worked,
                task_name,
                user: self.user,
            }),
            _ => Err(ValidationError { missing_fields }),
        }
    }

    pub fn into_patch(self) -> TimeEntryPatch {
        TimeEntryPatch {
            id: self.id,
            date: self.date,
            minutes_worked: self.minutes_worked,
            task_name: self.task_name,
        }
    }
}
