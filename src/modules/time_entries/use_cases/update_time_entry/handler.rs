use crate::modules::time_entries::core::ports::{RepositoryError, TimeEntryRepository};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::core::validation::ensure_matching_id;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;

/// Full overwrite of a stored time entry.
pub struct UpdateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> UpdateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: i64, time_entry: TimeEntry) -> Result<TimeEntry, ApplicationError> {
        tracing::debug!(id, ?time_entry, "request to update TimeEntry");
        ensure_matching_id(id, time_entry.id)?;

        if !self.repository.exists(id).await? {
            tracing::warn!(id, "cannot update unknown time entry");
            return Err(ApplicationError::id_not_found());
        }

        self.repository.put(time_entry).await.map_err(|err| match err {
            RepositoryError::Missing(_) => ApplicationError::id_not_found(),
            err => err.into(),
        })
    }
}
