use crate::error::{WalkError, WalkResult};
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Prefix of every deletion log line
pub const LOG_PREFIX: &str = "FILE DELETED ON: ";

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Append-only record of deleted paths
pub struct DeletionLog<W: Write> {
    sink: W,
}

impl<W: Write> DeletionLog<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn record(&mut self, path: &Path) -> WalkResult<()> {
        self.record_at(path, Local::now())
    }

    pub fn record_at(&mut self, path: &Path, at: DateTime<Local>) -> WalkResult<()> {
        writeln!(
            self.sink,
            "{LOG_PREFIX}{} {}",
            at.format(TIMESTAMP_FORMAT),
            path.display()
        )
        .map_err(WalkError::Output)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// Log the deletion, then remove the file.
///
/// The log line is written first, so it survives a failed removal.
pub fn delete_file<W: Write>(path: &Path, log: &mut DeletionLog<W>) -> WalkResult<()> {
    log.record(path)?;
    fs::remove_file(path).map_err(|e| WalkError::io("remove", path, e))?;
    tracing::info!(path = %path.display(), "deleted");
    Ok(())
}
