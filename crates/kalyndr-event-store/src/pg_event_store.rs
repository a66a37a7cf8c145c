//! `PostgreSQL` implementation of the `EventStore` trait.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use kalyndr_core::error::DomainError;
use kalyndr_core::event::CalendarEvent;
use kalyndr_core::store::EventStore;

use crate::schema;

/// Database row for a calendar event. Kept private so the domain type
/// stays free of sqlx.
#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    title: Option<String>,
    description: Option<String>,
    event_date: Option<String>,
    time: Option<String>,
    category: Option<String>,
    user_id: Option<String>,
}

impl From<EventRow> for CalendarEvent {
    fn from(row: EventRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            event_date: row.event_date,
            time: row.time,
            category: row.category,
            user_id: row.user_id,
        }
    }
}

const COLUMNS: &str = "id, title, description, event_date, time, category, user_id";

/// PostgreSQL-backed event store, parameterized by table name.
///
/// The Cal and Kalyndr deployments run the same store against different
/// tables; nothing else distinguishes them.
#[derive(Debug, Clone)]
pub struct PgEventStore {
    pool: PgPool,
    table: String,
}

impl PgEventStore {
    /// Creates a new `PgEventStore` over `table`.
    ///
    /// # Errors
    ///
    /// Returns an error when `table` is not a plain lowercase SQL
    /// identifier (`[a-z_][a-z0-9_]*`). The name is spliced into query
    /// text rather than bound, so anything else is rejected up front.
    pub fn new(pool: PgPool, table: &str) -> Result<Self, DomainError> {
        if !is_valid_table_name(table) {
            return Err(DomainError::Infrastructure(format!(
                "invalid table name: {table:?}"
            )));
        }
        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }

    /// Creates the backing table and index if they do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` when the DDL cannot be
    /// applied.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let sql = schema::create_table_sql(&self.table);
        sqlx::raw_sql(&sql)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        tracing::debug!(table = %self.table, "event table schema ensured");
        Ok(())
    }

    async fn insert(&self, event: CalendarEvent) -> Result<CalendarEvent, DomainError> {
        let sql = format!(
            "INSERT INTO {table} (title, description, event_date, time, category, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}",
            table = self.table,
        );
        let row: EventRow = sqlx::query_as(&sql)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.event_date)
            .bind(&event.time)
            .bind(&event.category)
            .bind(&event.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(infra)?;
        Ok(row.into())
    }

    async fn upsert(&self, event: CalendarEvent) -> Result<CalendarEvent, DomainError> {
        let sql = format!(
            "INSERT INTO {table} (id, title, description, event_date, time, category, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 title = EXCLUDED.title, \
                 description = EXCLUDED.description, \
                 event_date = EXCLUDED.event_date, \
                 time = EXCLUDED.time, \
                 category = EXCLUDED.category, \
                 user_id = EXCLUDED.user_id \
             RETURNING {COLUMNS}",
            table = self.table,
        );
        let row: EventRow = sqlx::query_as(&sql)
            .bind(event.id)
            .bind(&event.title)
            .bind(&event.description)
            .bind(&event.event_date)
            .bind(&event.time)
            .bind(&event.category)
            .bind(&event.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(infra)?;
        Ok(row.into())
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn find_all(&self) -> Result<Vec<CalendarEvent>, DomainError> {
        let sql = format!("SELECT {COLUMNS} FROM {table}", table = self.table);
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<CalendarEvent>, DomainError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {table} WHERE id = $1",
            table = self.table,
        );
        let row: Option<EventRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infra)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<CalendarEvent>, DomainError> {
        let sql = format!(
            "SELECT {COLUMNS} FROM {table} WHERE user_id = $1",
            table = self.table,
        );
        let rows: Vec<EventRow> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, event: CalendarEvent) -> Result<CalendarEvent, DomainError> {
        if event.is_new() {
            self.insert(event).await
        } else {
            self.upsert(event).await
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let sql = format!("DELETE FROM {table} WHERE id = $1", table = self.table);
        sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(infra)?;
        Ok(())
    }
}

fn infra(err: sqlx::Error) -> DomainError {
    DomainError::Infrastructure(err.to_string())
}

fn is_valid_table_name(table: &str) -> bool {
    let mut chars = table.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_table_names() {
        for table in ["cal_event_details", "kalyndr_event_details", "_t", "events2"] {
            assert!(is_valid_table_name(table), "{table}");
        }
    }

    #[test]
    fn test_unsafe_table_names_rejected() {
        for table in ["", "1events", "Events", "cal-events", "events; DROP TABLE x", "a b"] {
            assert!(!is_valid_table_name(table), "{table:?}");
        }
    }

    #[tokio::test]
    async fn test_new_rejects_unsafe_table_name() {
        let pool = PgPool::connect_lazy("postgres://localhost/test").unwrap();
        let result = PgEventStore::new(pool, "events; DROP TABLE x");
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }
}
