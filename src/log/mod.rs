//! Append-only log module
//!
//! Defines the binary record format for bucket files and the primitives
//! that operate on a single shard's byte stream.
//!
//! ## Responsibilities
//! - Encode and decode individual records
//! - Append one record to a bucket file (scoped handle, append-only)
//! - Replay a bucket's records in file order
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────┐
//! │ Record 1                                │
//! │ ┌────────┬─────────┬─────────┬────────┐ │
//! │ │ Op (1) │ KLen(1) │ Val (4) │  Key   │ │
//! │ └────────┴─────────┴─────────┴────────┘ │
//! ├─────────────────────────────────────────┤
//! │ Record 2                                │
//! │ ┌────────┬─────────┬─────────┬────────┐ │
//! │ │ Op (1) │ KLen(1) │ Val (4) │  Key   │ │
//! │ └────────┴─────────┴─────────┴────────┘ │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Records are packed back-to-back: no file header, no padding, no
//! checksums. The value is a little-endian two's-complement i32.

mod record;
mod reader;
mod writer;

pub use record::{Operation, Record, HEADER_SIZE, MAX_KEY_LEN};
pub use reader::{RecordReader, Records};
pub use writer::append_record;
