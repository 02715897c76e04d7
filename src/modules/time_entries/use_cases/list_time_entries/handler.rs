use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;

pub struct ListTimeEntriesHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ListTimeEntriesHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    /// Every stored entry, or only those owned by `user_id` when given.
    pub async fn handle(&self, user_id: Option<i64>) -> Result<Vec<TimeEntry>, ApplicationError> {
        tracing::debug!(?user_id, "request to get all TimeEntries");
        let entries = match user_id {
            Some(user_id) => self.repository.list_by_user(user_id).await?,
            None => self.repository.list().await?,
        };
        Ok(entries)
    }
}
