//! Store Module
//!
//! The coordinating type that routes operations to shards.
//!
//! ## Responsibilities
//! - Create the store directory and empty bucket files on open
//! - Route insert/delete appends to the right bucket via the hash router
//! - Answer queries by replaying one bucket and folding its records
//!
//! ## Concurrency Model
//!
//! Single-threaded and synchronous: every operation runs to completion
//! before the next is accepted, and each one opens its bucket file, does its
//! work, and releases the handle before returning. There is no shared open
//! handle and no lock. Concurrent writers from independent processes are
//! out of scope and have no defined behavior.

use std::collections::BTreeSet;
use std::fs::{self, File, OpenOptions};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::command::Command;
use crate::config::Config;
use crate::error::Result;
use crate::log::{append_record, Operation, Record, RecordReader};
use crate::router::{shard_file_name, shard_id};

/// A hash-sharded append-only key-value store.
///
/// Values live in `shard_count` bucket files under the data directory.
/// Writes append one record; reads replay one bucket front to back and fold
/// inserts and deletes into the live value set. There is no index and no
/// compaction, so a read costs O(bucket length) — the price paid for
/// overwrite-free, append-only writes.
pub struct Store {
    /// Store configuration
    config: Config,
}

impl Store {
    /// Open or create a store with the given config.
    ///
    /// On startup:
    /// 1. Validate the shard count (nonzero power of two)
    /// 2. Create the data directory if it doesn't exist
    /// 3. Create every bucket file empty if absent
    ///
    /// Any failure here is fatal to the store: no recovery is attempted.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        fs::create_dir_all(&config.data_dir)?;

        for id in 0..config.shard_count {
            let path = config.data_dir.join(shard_file_name(id));
            // append-create and drop: touches the file without writing
            OpenOptions::new().append(true).create(true).open(&path)?;
        }

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            shards = config.shard_count,
            "store opened"
        );

        Ok(Self { config })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        let mut config = Config::default();
        config.data_dir = path.to_path_buf();
        Self::open(config)
    }

    /// Execute a command
    ///
    /// Routes commands to the appropriate handler. Insert and delete yield
    /// `None`; find yields the live value set, or `None` for "no value".
    pub fn execute(&self, command: &Command) -> Result<Option<Vec<i32>>> {
        match command {
            Command::Insert { key, value } => {
                self.insert(key.as_bytes(), *value)?;
                Ok(None)
            }
            Command::Delete { key, value } => {
                self.delete(key.as_bytes(), *value)?;
                Ok(None)
            }
            Command::Find { key } => self.find(key.as_bytes()),
        }
    }

    /// Append an Insert record for `(key, value)`.
    ///
    /// Appending is unconditional: inserting a value already live for the
    /// key writes a record anyway, and the read-side fold makes it
    /// idempotent on the value set.
    pub fn insert(&self, key: &[u8], value: i32) -> Result<()> {
        self.append(Record::insert(key, value))
    }

    /// Append a Delete record for `(key, value)`.
    ///
    /// Like insert, this always appends; deleting a value that was never
    /// inserted is a no-op at read time.
    pub fn delete(&self, key: &[u8], value: i32) -> Result<()> {
        self.append(Record::delete(key, value))
    }

    /// Look up the live value set for a key.
    ///
    /// Replays the key's bucket front to back and folds matching records.
    /// Returns `None` for "no value" — an empty fold result and a key with
    /// no history are indistinguishable. Values come back ascending and
    /// deduplicated.
    pub fn find(&self, key: &[u8]) -> Result<Option<Vec<i32>>> {
        let path = self.shard_path_for(key);

        // A bucket that can't be opened for reading is a valid empty state:
        // a shard with no writes yet looks the same as a missing file.
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "bucket unreadable, treating as no value"
                );
                return Ok(None);
            }
        };

        let reader = RecordReader::new(BufReader::new(file));
        let live = fold_live_values(reader, key)?;

        if live.is_empty() {
            Ok(None)
        } else {
            Ok(Some(live.into_iter().collect()))
        }
    }

    /// Encode and append one record to its bucket
    fn append(&self, record: Record) -> Result<()> {
        let path = self.shard_path_for(&record.key);
        append_record(&path, &record)
    }

    /// Bucket file path for a key
    fn shard_path_for(&self, key: &[u8]) -> PathBuf {
        let id = shard_id(key, self.config.shard_count);
        self.config.data_dir.join(shard_file_name(id))
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Fold a shard's records for `target_key` into the live value set.
///
/// Records are applied in file order: Insert adds the value, Delete removes
/// it if present, and unknown operations are skipped. Only byte-for-byte
/// key matches participate. The `BTreeSet` gives the ascending,
/// deduplicated order the query contract requires.
pub fn fold_live_values<R: std::io::Read>(
    reader: RecordReader<R>,
    target_key: &[u8],
) -> Result<BTreeSet<i32>> {
    let mut live = BTreeSet::new();

    for record in reader.records() {
        let record = record?;
        if record.key != target_key {
            continue;
        }

        match record.operation {
            Operation::Insert => {
                live.insert(record.value);
            }
            Operation::Delete => {
                live.remove(&record.value);
            }
            Operation::Unknown(tag) => {
                tracing::trace!(tag, "ignoring record with unknown operation");
            }
        }
    }

    Ok(live)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn log_bytes(records: &[Record]) -> Vec<u8> {
        let mut bytes = Vec::new();
        for record in records {
            bytes.extend_from_slice(&record.encode().unwrap());
        }
        bytes
    }

    fn fold(records: &[Record], key: &[u8]) -> Vec<i32> {
        let reader = RecordReader::new(Cursor::new(log_bytes(records)));
        fold_live_values(reader, key)
            .unwrap()
            .into_iter()
            .collect()
    }

    #[test]
    fn fold_applies_inserts_and_deletes_in_order() {
        let records = [
            Record::insert("a", 10),
            Record::insert("a", 20),
            Record::delete("a", 10),
            Record::insert("a", 10),
        ];
        assert_eq!(fold(&records, b"a"), vec![10, 20]);
    }

    #[test]
    fn fold_filters_by_exact_key_bytes() {
        let records = [
            Record::insert("a", 1),
            Record::insert("ab", 2),
            Record::insert("A", 3),
        ];
        assert_eq!(fold(&records, b"a"), vec![1]);
    }

    #[test]
    fn fold_ignores_delete_of_absent_value() {
        let records = [Record::delete("a", 5), Record::insert("a", 7)];
        assert_eq!(fold(&records, b"a"), vec![7]);
    }

    #[test]
    fn fold_skips_unknown_operations() {
        let records = [
            Record::insert("a", 1),
            Record {
                operation: Operation::Unknown(9),
                key: b"a".to_vec(),
                value: 1,
            },
        ];
        // the unknown op neither inserts nor deletes
        assert_eq!(fold(&records, b"a"), vec![1]);
    }

    #[test]
    fn fold_result_is_sorted_and_deduplicated() {
        let records = [
            Record::insert("a", 30),
            Record::insert("a", -10),
            Record::insert("a", 30),
            Record::insert("a", 0),
        ];
        assert_eq!(fold(&records, b"a"), vec![-10, 0, 30]);
    }
}
