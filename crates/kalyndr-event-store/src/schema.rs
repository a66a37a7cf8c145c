//! Event table schema.

/// Returns the SQL that creates the event table and its user-id index.
///
/// The caller must pass a table name already accepted by
/// [`crate::pg_event_store::PgEventStore::new`]; the name is spliced into
/// the statement text, not bound.
#[must_use]
pub fn create_table_sql(table: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    id          BIGSERIAL PRIMARY KEY,
    title       TEXT,
    description TEXT,
    event_date  TEXT,
    time        TEXT,
    category    TEXT,
    user_id     TEXT
);

CREATE INDEX IF NOT EXISTS idx_{table}_user_id
    ON {table} (user_id);
"#
    )
}
