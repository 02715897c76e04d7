use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;

/// Removes a time entry. Unlike update and patch, there is no existence
/// check: deleting an unknown id succeeds.
pub struct DeleteTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> DeleteTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: i64) -> Result<(), ApplicationError> {
        tracing::debug!(id, "request to delete TimeEntry");
        self.repository.delete(id).await?;
        Ok(())
    }
}
