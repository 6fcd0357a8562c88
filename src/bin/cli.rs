//! ShardKV CLI
//!
//! Command-line interface for the store. With a subcommand it runs one
//! operation and exits; without one it reads commands line-by-line from
//! stdin (`insert <key> <value>` / `delete <key> <value>` / `find <key>`)
//! until end of input.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use shardkv::{Command, Config, Result, Store};

/// ShardKV CLI
#[derive(Parser, Debug)]
#[command(name = "shardkv")]
#[command(about = "Minimal persistent key-value store over hash-sharded append-only logs")]
#[command(version)]
struct Args {
    /// Data directory for bucket files
    #[arg(short, long, default_value = "./shardkv_data")]
    data_dir: String,

    /// Number of shards (must be a power of two)
    #[arg(short, long, default_value = "8")]
    shards: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a value to a key's live set
    Insert {
        /// The key to insert under
        key: String,

        /// The value to insert
        value: i32,
    },

    /// Remove a value from a key's live set
    Delete {
        /// The key to delete from
        key: String,

        /// The value to delete
        value: i32,
    },

    /// Print a key's live values, ascending, or `null` if none
    Find {
        /// The key to look up
        key: String,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,shardkv=info"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .shard_count(args.shards)
        .build();

    let store = match Store::open(config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match args.command {
        Some(command) => run_one(&store, command.into()),
        None => run_stdin(&store),
    };

    if let Err(e) = result {
        tracing::error!("Operation failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Insert { key, value } => Command::Insert { key, value },
            Commands::Delete { key, value } => Command::Delete { key, value },
            Commands::Find { key } => Command::Find { key },
        }
    }
}

/// Execute one command, printing find results
fn run_one(store: &Store, command: Command) -> Result<()> {
    let outcome = store.execute(&command)?;
    if let Command::Find { .. } = command {
        print_find(outcome)?;
    }
    Ok(())
}

/// Read commands from stdin until EOF.
///
/// Lines that fail to parse are skipped with a warning rather than
/// aborting the stream.
fn run_stdin(store: &Store) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                tracing::warn!("skipping line {:?}: {}", line, e);
                continue;
            }
        };

        run_one(store, command)?;
    }
    Ok(())
}

/// `null` for no value, else space-separated ascending values
fn print_find(values: Option<Vec<i32>>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match values {
        None => writeln!(out, "null")?,
        Some(values) => {
            let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            writeln!(out, "{}", rendered.join(" "))?;
        }
    }
    Ok(())
}
