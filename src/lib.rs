//! # ShardKV
//!
//! A minimal persistent key-value store with:
//! - Append-only binary log files (records are never overwritten)
//! - Hash-based sharding across a fixed set of bucket files
//! - Read-time reconstruction: queries replay a bucket's full history
//! - Single-threaded, synchronous, scoped file handles per operation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Command Surface                          │
//! │              (insert / delete / find)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Sharding Router                            │
//! │         key ──FNV-1a──▶ shard id ──▶ bucket file             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Log Writer │          │  Log Reader │
//!   │  (Append)   │          │  (Replay)   │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │
//!          ▼                        ▼
//!   bucket_<id>.dat          fold ──▶ live value set
//! ```
//!
//! There is no in-memory index and no compaction: a `find` is a full linear
//! scan of one shard, folding inserts and deletes in log order.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod router;
pub mod log;
pub mod command;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, ShardKvError};
pub use config::Config;
pub use command::Command;
pub use log::{Operation, Record};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of ShardKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
