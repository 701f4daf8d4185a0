//! Logging setup on top of `env_logger`.
//!
//! `RUST_LOG` controls the filter (default `info`). The interactive game owns
//! the terminal, so it only logs when a log file is configured; the trace
//! tool logs to stderr because stdout carries its JSON output.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or("info"))
}

/// Send log records to `path`, truncating it.
pub fn init_file(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    builder()
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}

/// Send log records to stderr.
pub fn init_stderr() -> Result<()> {
    builder()
        .target(Target::Stderr)
        .try_init()
        .context("logger already initialized")?;
    Ok(())
}
