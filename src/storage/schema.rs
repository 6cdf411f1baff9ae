//! Database schema definitions
//!
//! A single table models the document store: schema-less JSON bodies
//! grouped by collection name.

/// SQL schema for the document store
pub const SCHEMA_SQL: &str = r#"
-- Schema-less documents, one row per inserted record
CREATE TABLE IF NOT EXISTS documents (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    collection TEXT NOT NULL,
    body TEXT NOT NULL,
    inserted_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection);
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
