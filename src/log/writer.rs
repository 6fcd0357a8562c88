//! Log Writer
//!
//! Appends single records to a bucket file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use super::Record;

/// Append one encoded record to the bucket file at `path`.
///
/// The file is opened in append-create mode, written with a single
/// `write_all`, and the handle is released before returning — there is no
/// persistent handle across calls, and existing bytes are never touched.
/// If the open fails, nothing is written at all: encoding only matters
/// after a successful open, so a failed operation leaves the log unchanged.
pub fn append_record(path: &Path, record: &Record) -> Result<()> {
    let mut file = OpenOptions::new().append(true).create(true).open(path)?;

    let bytes = record.encode()?;
    file.write_all(&bytes)?;

    tracing::trace!(
        path = %path.display(),
        op = ?record.operation,
        len = bytes.len(),
        "appended record"
    );
    Ok(())
}
