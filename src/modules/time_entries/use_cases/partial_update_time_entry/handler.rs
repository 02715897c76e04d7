use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::core::time_entry::{TimeEntry, TimeEntryPatch};
use crate::modules::time_entries::core::validation::ensure_matching_id;
use crate::modules::time_entries::use_cases::errors::ApplicationError;
use std::sync::Arc;

/// Merge-patch of a stored time entry: fields left out of the patch keep
/// their stored values.
pub struct PartialUpdateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    repository: Arc<TRepository>,
}

impl<TRepository> PartialUpdateTimeEntryHandler<TRepository>
where
    TRepository: TimeEntryRepository + ?Sized,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, id: i64, patch: TimeEntryPatch) -> Result<TimeEntry, ApplicationError> {
        tracing::debug!(id, ?patch, "request to partially update TimeEntry");
        ensure_matching_id(id, patch.id)?;

        let Some(mut existing) = self.repository.get(id).await? else {
            tracing::warn!(id, "cannot patch unknown time entry");
            return Err(ApplicationError::NotFound(id));
        };

        patch.apply_to(&mut existing);
        Ok(self.repository.put(existing).await?)
    }
}
