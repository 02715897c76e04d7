use crate::modules::time_entries::core::ports::{RepositoryError, TimeEntryRepository};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CreatedTimeEntry {
    pub id: i64,
    pub time_entry: TimeEntry,
}

pub struct CreateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> CreateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, time_entry: TimeEntry) -> Result<CreatedTimeEntry, ApplicationError> {
        tracing::debug!(?time_entry, "request to save TimeEntry");
        if time_entry.is_persisted() {
            tracing::warn!(id = ?time_entry.id, "a new time entry cannot already have an id");
            return Err(ApplicationError::id_exists());
        }

        let stored = self.repository.put(time_entry).await?;
        let id = stored.id.ok_or_else(|| {
            ApplicationError::Repository(RepositoryError::Backend(
                "no id assigned to the stored time entry".into(),
            ))
        })?;
        Ok(CreatedTimeEntry {
            id,
            time_entry: stored,
        })
    }
}
