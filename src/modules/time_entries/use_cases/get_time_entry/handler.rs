use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct GetTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> GetTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: i64) -> Result<TimeEntry, ApplicationError> {
        tracing::debug!(id, "request to get TimeEntry");
        self.repository
            .get(id)
            .await?
            .ok_or(ApplicationError::NotFound(id))
    }
}
