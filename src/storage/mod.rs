//! Document store layer
//!
//! Defines the sink trait the crawl writes through plus the SQLite-backed
//! implementation. Persistence failures are isolated per record: a failed
//! insert is logged and never aborts the rest of the batch.

mod schema;
mod sqlite;
mod traits;

pub use schema::initialize_schema;
pub use sqlite::SqliteSink;
pub use traits::{DocumentSink, StorageError, StorageResult};

use crate::extract::ProductRecord;

/// Persists a batch of records, isolating failures per record
///
/// Each record is traced, then inserted. A failed insert is logged at warn
/// level and the remaining records are still attempted; the failure never
/// propagates to the caller.
pub fn persist_records<S: DocumentSink + ?Sized>(sink: &mut S, records: &[ProductRecord]) {
    for record in records {
        tracing::debug!("Extracted record: {:?}", record);
        match sink.insert(record) {
            Ok(()) => tracing::info!("Stored record: {}", record.title),
            Err(e) => tracing::warn!("Failed to store record '{}': {}", record.title, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that fails on a chosen record index
    struct FlakySink {
        inserted: Vec<ProductRecord>,
        fail_on: usize,
        calls: usize,
    }

    impl DocumentSink for FlakySink {
        fn insert(&mut self, record: &ProductRecord) -> StorageResult<()> {
            let index = self.calls;
            self.calls += 1;
            if index == self.fail_on {
                return Err(StorageError::Database("disk full".to_string()));
            }
            self.inserted.push(record.clone());
            Ok(())
        }

        fn count(&self) -> StorageResult<u64> {
            Ok(self.inserted.len() as u64)
        }
    }

    fn record(title: &str) -> ProductRecord {
        ProductRecord {
            image: String::new(),
            price: "¥1".to_string(),
            deal: "10".to_string(),
            title: title.to_string(),
            shop: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let mut sink = FlakySink {
            inserted: Vec::new(),
            fail_on: 1,
            calls: 0,
        };
        let records = vec![record("a"), record("b"), record("c")];

        persist_records(&mut sink, &records);

        assert_eq!(sink.calls, 3);
        assert_eq!(sink.inserted.len(), 2);
        assert_eq!(sink.inserted[0].title, "a");
        assert_eq!(sink.inserted[1].title, "c");
    }

    #[test]
    fn test_all_records_stored_on_success() {
        let mut sink = FlakySink {
            inserted: Vec::new(),
            fail_on: usize::MAX,
            calls: 0,
        };
        let records = vec![record("a"), record("b")];

        persist_records(&mut sink, &records);

        assert_eq!(sink.inserted.len(), 2);
    }
}
