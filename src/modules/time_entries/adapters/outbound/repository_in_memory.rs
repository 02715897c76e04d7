// In memory implementation of the TimeEntryRepository port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store time entries in a map ordered by id.
// - Assign ids from a sequence that never hands out the same id twice.

use crate::modules::time_entries::core::ports::{RepositoryError, TimeEntryRepository};
use crate::modules::time_entries::core::time_entry::TimeEntry;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Rows {
    entries: BTreeMap<i64, TimeEntry>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryTimeEntryRepository {
    rows: RwLock<Rows>,
    is_offline: bool,
}

impl InMemoryTimeEntryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Time entry repository offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl TimeEntryRepository for InMemoryTimeEntryRepository {
    async fn list(&self) -> Result<Vec<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.entries.values().cloned().collect())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .entries
            .values()
            .filter(|entry| entry.user.is_some_and(|user| user.id == user_id))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TimeEntry>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.entries.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.entries.contains_key(&id))
    }

    async fn put(&self, mut time_entry: TimeEntry) -> Result<TimeEntry, RepositoryError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let id = match time_entry.id {
            Some(id) if guard.entries.contains_key(&id) => id,
            Some(id) => return Err(RepositoryError::Missing(id)),
            None => {
                guard.last_id += 1;
                guard.last_id
            }
        };
        time_entry.id = Some(id);
        guard.entries.insert(id, time_entry.clone());
        Ok(time_entry)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        self.ensure_online()?;
        self.rows.write().await.entries.remove(&id);
        Ok(())
    }
}
