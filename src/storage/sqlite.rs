//! SQLite document store implementation
//!
//! Provides the SQLite-backed implementation of the DocumentSink trait.
//! Records are serialized to JSON and stored as schema-less document
//! bodies under the configured collection name.

use crate::extract::ProductRecord;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{DocumentSink, StorageError, StorageResult};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;

/// SQLite-backed document sink
pub struct SqliteSink {
    conn: Connection,
    collection: String,
}

impl SqliteSink {
    /// Opens (or creates) the database and prepares the schema
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    /// * `collection` - Collection name all inserts are tagged with
    pub fn new(path: &Path, collection: &str) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self {
            conn,
            collection: collection.to_string(),
        })
    }

    /// Creates an in-memory sink (for testing)
    #[cfg(test)]
    pub fn new_in_memory(collection: &str) -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self {
            conn,
            collection: collection.to_string(),
        })
    }

    /// Loads every document body in the configured collection, oldest first
    pub fn load_all(&self) -> StorageResult<Vec<ProductRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT body FROM documents WHERE collection = ?1 ORDER BY id")?;

        let rows = stmt.query_map(params![self.collection], |row| row.get::<_, String>(0))?;

        let mut records = Vec::new();
        for body in rows {
            let body = body?;
            let record = serde_json::from_str(&body)
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            records.push(record);
        }

        Ok(records)
    }
}

impl DocumentSink for SqliteSink {
    fn insert(&mut self, record: &ProductRecord) -> StorageResult<()> {
        let body = serde_json::to_string(record)?;
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO documents (collection, body, inserted_at) VALUES (?1, ?2, ?3)",
            params![self.collection, body, now],
        )?;
        Ok(())
    }

    fn count(&self) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![self.collection],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}
