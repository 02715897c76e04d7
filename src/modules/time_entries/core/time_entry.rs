use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference to the user owning a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
}

/// A registered amount of work on a task for one calendar day.
///
/// `id` is assigned by the repository on first save; a `None` id marks the
/// entry as transient. Equality is identity based: two entries are equal only
/// when both are persisted and share the same id, which is why `Eq` is not
/// implemented (a transient entry is not equal to itself).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: Option<i64>,
    pub date: NaiveDate,
    pub minutes_worked: i32,
    pub task_name: String,
    pub user: Option<UserRef>,
}

impl TimeEntry {
    pub fn new(date: NaiveDate, minutes_worked: i32, task_name: impl Into<String>) -> Self {
        Self {
            id: None,
            date,
            minutes_worked,
            task_name: task_name.into(),
            user: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_user(mut self, user_id: i64) -> Self {
        self.user = Some(UserRef { id: user_id });
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Compares the stored values, ignoring identity.
    pub fn same_fields(&self, other: &TimeEntry) -> bool {
        self.date == other.date
            && self.minutes_worked == other.minutes_worked
            && self.task_name == other.task_name
            && self.user == other.user
    }
}

impl PartialEq for TimeEntry {
    fn eq(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(left), Some(right)) if left == right)
    }
}

/// Merge-patch of a stored time entry. Only the fields that are `Some`
/// overwrite the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeEntryPatch {
    pub id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub minutes_worked: Option<i32>,
    pub task_name: Option<String>,
}

impl TimeEntryPatch {
    pub fn apply_to(self, existing: &mut TimeEntry) {
        if let Some(date) = self.date {
            existing.date = date;
        }
        if let Some(minutes_worked) = self.minutes_worked {
            existing.minutes_worked = minutes_worked;
        }
        if let Some(task_name) = self.task_name {
            existing.task_name = task_name;
        }
    }
}
