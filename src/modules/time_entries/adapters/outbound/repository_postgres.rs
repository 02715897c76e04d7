// PostgreSQL implementation of the TimeEntryRepository port.
//
// Each method runs a single statement, so every call commits or fails as a
// whole. Concurrent overwrites of the same row are last-write-wins.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::modules::time_entries::core::ports::{RepositoryError, TimeEntryRepository};
use crate::modules::time_entries::core::time_entry::{TimeEntry, UserRef};

const COLUMNS: &str = "id, date, minutes_worked, task_name, user_id";

#[derive(Debug, sqlx::FromRow)]
struct TimeEntryRow {
    id: i64,
    date: NaiveDate,
    minutes_worked: i32,
    task_name: String,
    user_id: Option<i64>,
}

impl From<TimeEntryRow> for TimeEntry {
    fn from(row: TimeEntryRow) -> Self {
        TimeEntry {
            id: Some(row.id),
            date: row.date,
            minutes_worked: row.minutes_worked,
            task_name: row.task_name,
            user: row.user_id.map(|id| UserRef { id }),
        }
    }
}

fn backend(context: &str, err: sqlx::Error) -> RepositoryError {
    RepositoryError::Backend(format!("{context}: {err}"))
}

pub struct PostgresTimeEntryRepository {
    pool: PgPool,
}

impl PostgresTimeEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(url)
            .await
            .map_err(|e| backend("failed to create pool", e))?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| RepositoryError::Backend(format!("failed to run migrations: {e}")))
    }

    async fn insert(&self, time_entry: TimeEntry) -> Result<TimeEntry, RepositoryError> {
        let row = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "INSERT INTO time_entry (date, minutes_worked, task_name, user_id) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(time_entry.date)
        .bind(time_entry.minutes_worked)
        .bind(&time_entry.task_name)
        .bind(time_entry.user.map(|user| user.id))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| backend("failed to insert time entry", e))?;
        Ok(row.into())
    }

    async fn update(&self, id: i64, time_entry: TimeEntry) -> Result<TimeEntry, RepositoryError> {
        let row = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "UPDATE time_entry SET date = $1, minutes_worked = $2, task_name = $3, user_id = $4 \
             WHERE id = $5 RETURNING {COLUMNS}"
        ))
        .bind(time_entry.date)
        .bind(time_entry.minutes_worked)
        .bind(&time_entry.task_name)
        .bind(time_entry.user.map(|user| user.id))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| backend("failed to update time entry", e))?;
        row.map(Into::into).ok_or(RepositoryError::Missing(id))
    }
}

#[async_trait]
impl TimeEntryRepository for PostgresTimeEntryRepository {
    async fn list(&self) -> Result<Vec<TimeEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "SELECT {COLUMNS} FROM time_entry ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| backend("failed to list time entries", e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<TimeEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "SELECT {COLUMNS} FROM time_entry WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| backend("failed to list time entries by user", e))?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<TimeEntry>, RepositoryError> {
        let row = sqlx::query_as::<_, TimeEntryRow>(&format!(
            "SELECT {COLUMNS} FROM time_entry WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| backend("failed to get time entry", e))?;
        Ok(row.map(Into::into))
    }

    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM time_entry WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| backend("failed to check time entry", e))
    }

    async fn put(&self, time_entry: TimeEntry) -> Result<TimeEntry, RepositoryError> {
        match time_entry.id {
            Some(id) => self.update(id, time_entry).await,
            None => self.insert(time_entry).await,
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM time_entry WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| backend("failed to delete time entry", e))?;
        Ok(())
    }
}
