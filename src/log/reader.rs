//! Log Reader
//!
//! Replays records from a shard's byte stream in file order.

use std::io::Read;

use crate::error::Result;
use super::record::{Operation, Record, HEADER_SIZE};

/// Reads records sequentially from any byte stream.
///
/// Generic over [`Read`] so the decode path is testable against an
/// in-memory `Cursor` as well as a bucket file on disk.
pub struct RecordReader<R> {
    inner: R,
}

impl<R: Read> RecordReader<R> {
    /// Wrap a readable stream positioned at the start of a shard's log
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read the next record from the stream.
    ///
    /// Returns `Ok(None)` at end of stream. A truncated trailing record —
    /// a short header, or fewer key bytes than the header promised — is
    /// treated identically to end of stream: scanning stops and the partial
    /// bytes are left in place. Since the log is append-only, a truncated
    /// tail can only be an interrupted final append, never mid-file damage.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        let mut header = [0u8; HEADER_SIZE];
        match read_full(&mut self.inner, &mut header)? {
            0 => return Ok(None),
            n if n < HEADER_SIZE => {
                tracing::debug!(got = n, "truncated header at end of log, stopping scan");
                return Ok(None);
            }
            _ => {}
        }

        let operation = Operation::from_tag(header[0]);
        let key_len = header[1] as usize;
        let value = i32::from_le_bytes([header[2], header[3], header[4], header[5]]);

        let mut key = vec![0u8; key_len];
        let got = read_full(&mut self.inner, &mut key)?;
        if got < key_len {
            tracing::debug!(
                expected = key_len,
                got,
                "truncated key at end of log, stopping scan"
            );
            return Ok(None);
        }

        Ok(Some(Record {
            operation,
            key,
            value,
        }))
    }

    /// Iterate over all records up to end of stream
    pub fn records(self) -> Records<R> {
        Records { reader: self }
    }
}

/// Iterator over a stream's records
pub struct Records<R> {
    reader: RecordReader<R>,
}

impl<R: Read> Iterator for Records<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_record().transpose()
    }
}

/// Fill `buf` as far as the stream allows, returning the bytes read.
///
/// Unlike `read_exact`, a short read is reported by count rather than as an
/// error, so the caller can apply the truncation-is-EOF policy.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
