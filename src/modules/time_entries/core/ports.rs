// Ports define what the core needs from the outside world, without implementing it.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - The in memory repository covers handler tests and local development.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::time_entries::core::time_entry::TimeEntry;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("time entry {0} does not exist")]
    Missing(i64),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Storage of time entries. Every call is atomic on its own.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// All entries, ordered by id.
    async fn list(&self) -> Result<Vec<TimeEntry>, RepositoryError>;

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<TimeEntry>, RepositoryError>;

    async fn get(&self, id: i64) -> Result<Option<TimeEntry>, RepositoryError>;

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Inserts a transient entry with a fresh id, or overwrites the stored
    /// entry with the same id. Overwriting an id that is not stored fails with
    /// [`RepositoryError::Missing`].
    async fn put(&self, time_entry: TimeEntry) -> Result<TimeEntry, RepositoryError>;

    /// Removes the entry if present. Absent ids are not an error.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
