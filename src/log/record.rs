//! Record definitions and codec
//!
//! A record is the atomic unit of the log: one operation, one key, one
//! 32-bit value. Once appended it is immutable and never overwritten.

use bytes::{Buf, BufMut};

use crate::error::{Result, ShardKvError};

/// Fixed header size: op tag (1) + key length (1) + value (4)
pub const HEADER_SIZE: usize = 6;

/// Maximum key length: the length field is a single byte.
///
/// The original deployment used keys up to 64 bytes by convention, but the
/// format itself allows anything the length byte can express, and that is
/// the contract enforced here.
pub const MAX_KEY_LEN: usize = 255;

/// Operations that can be logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add a value to the key's live set
    Insert,

    /// Remove a value from the key's live set
    Delete,

    /// Unrecognized tag, carried through verbatim.
    ///
    /// Decoding never fails on an unknown tag; the read-side fold ignores
    /// these records, so old readers skip records written by newer formats.
    Unknown(u8),
}

impl Operation {
    /// Wire tag for this operation
    pub fn tag(self) -> u8 {
        match self {
            Operation::Insert => 0,
            Operation::Delete => 1,
            Operation::Unknown(tag) => tag,
        }
    }

    /// Decode a wire tag. Total: unknown tags are passed through.
    pub fn from_tag(tag: u8) -> Self {
        match tag {
            0 => Operation::Insert,
            1 => Operation::Delete,
            other => Operation::Unknown(other),
        }
    }
}

/// A single log record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The operation to apply
    pub operation: Operation,

    /// Raw key bytes, 0–255 long
    pub key: Vec<u8>,

    /// The value, stored as little-endian two's-complement
    pub value: i32,
}

impl Record {
    /// Build an Insert record
    pub fn insert(key: impl Into<Vec<u8>>, value: i32) -> Self {
        Self {
            operation: Operation::Insert,
            key: key.into(),
            value,
        }
    }

    /// Build a Delete record
    pub fn delete(key: impl Into<Vec<u8>>, value: i32) -> Self {
        Self {
            operation: Operation::Delete,
            key: key.into(),
            value,
        }
    }

    /// Total encoded size in bytes
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.key.len()
    }

    /// Encode this record to its wire representation.
    ///
    /// Layout: op tag (1) + key length (1) + value LE (4) + key bytes.
    /// Fails only if the key does not fit the one-byte length field.
    pub fn encode(&self) -> Result<Vec<u8>> {
        if self.key.len() > MAX_KEY_LEN {
            return Err(ShardKvError::KeyTooLong {
                len: self.key.len(),
            });
        }

        let mut buf = Vec::with_capacity(self.encoded_len());
        buf.put_u8(self.operation.tag());
        buf.put_u8(self.key.len() as u8);
        buf.put_i32_le(self.value);
        buf.put_slice(&self.key);
        Ok(buf)
    }

    /// Decode one record from the front of a byte slice.
    ///
    /// Returns the record and the number of bytes consumed. Expects the
    /// slice to hold at least one complete record; stream-oriented decoding
    /// with truncation handling lives in [`RecordReader`](super::RecordReader).
    pub fn decode(bytes: &[u8]) -> Option<(Self, usize)> {
        if bytes.len() < HEADER_SIZE {
            return None;
        }

        let mut buf = bytes;
        let operation = Operation::from_tag(buf.get_u8());
        let key_len = buf.get_u8() as usize;
        let value = buf.get_i32_le();

        if buf.len() < key_len {
            return None;
        }

        let key = buf[..key_len].to_vec();
        Some((
            Record {
                operation,
                key,
                value,
            },
            HEADER_SIZE + key_len,
        ))
    }
}
