//! Command definitions
//!
//! The three request shapes the store serves, plus a parser for the textual
//! command stream consumed by the CLI driver.

use crate::error::{Result, ShardKvError};

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a value to a key's live set
    Insert { key: String, value: i32 },

    /// Remove a value from a key's live set
    Delete { key: String, value: i32 },

    /// Look up the live value set for a key
    Find { key: String },
}

impl Command {
    /// Parse one textual command line.
    ///
    /// Accepted forms, whitespace-separated:
    /// - `insert <key> <value>`
    /// - `delete <key> <value>`
    /// - `find <key>`
    pub fn parse(line: &str) -> Result<Command> {
        let mut parts = line.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| ShardKvError::Command("empty command line".to_string()))?;

        let command = match verb {
            "insert" => Command::Insert {
                key: required(&mut parts, "insert", "key")?.to_string(),
                value: int_arg(&mut parts, "insert")?,
            },
            "delete" => Command::Delete {
                key: required(&mut parts, "delete", "key")?.to_string(),
                value: int_arg(&mut parts, "delete")?,
            },
            "find" => Command::Find {
                key: required(&mut parts, "find", "key")?.to_string(),
            },
            other => {
                return Err(ShardKvError::Command(format!(
                    "unknown command: {:?}",
                    other
                )))
            }
        };

        if let Some(extra) = parts.next() {
            return Err(ShardKvError::Command(format!(
                "trailing argument after {} command: {:?}",
                verb, extra
            )));
        }

        Ok(command)
    }
}

fn required<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    verb: &str,
    what: &str,
) -> Result<&'a str> {
    parts
        .next()
        .ok_or_else(|| ShardKvError::Command(format!("{} command: missing {}", verb, what)))
}

fn int_arg<'a>(parts: &mut impl Iterator<Item = &'a str>, verb: &str) -> Result<i32> {
    let raw = required(parts, verb, "value")?;
    raw.parse().map_err(|_| {
        ShardKvError::Command(format!("{} command: bad value {:?} (want i32)", verb, raw))
    })
}
