//! Single-threaded walk over the configured root.
//!
//! Every entry is visited depth-first in file-name order, under its
//! lexically cleaned path (`./a.log` is handled as `a.log`). Entries that pass
//! the [`filter`] are dispatched according to the run's [`Plan`]; the first
//! error from the walk or from an action stops the run. The summary is
//! written in every case, with the count reached so far.

pub mod clean;
pub mod filter;
pub mod plan;

use crate::actions::{DeletionLog, archive_file, delete_file, list_file};
use crate::config::Settings;
use crate::error::WalkResult;
use crate::report;
use ignore::WalkBuilder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

pub use clean::clean_path;
pub use filter::{EntryInfo, should_skip};
pub use plan::{Plan, Terminal};

/// Outcome of visiting one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// A directory; the walk descends into it but no action runs
    SkipDir,
    /// Filtered out by size or extension
    Skip,
    Match,
}

/// Result of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub matched: u64,
    pub terminal: Terminal,
    /// The summary was phrased as a deletion
    pub delete_mode: bool,
}

/// Traversal context: run parameters, sinks, and the match counter.
pub struct Walker<'a, O: Write + ?Sized, L: Write> {
    settings: &'a Settings,
    plan: Plan<'a>,
    out: &'a mut O,
    deletion_log: DeletionLog<L>,
    matched: u64,
}

impl<'a, O: Write + ?Sized, L: Write> Walker<'a, O, L> {
    pub fn new(settings: &'a Settings, out: &'a mut O, deletion_log: L) -> Self {
        Self {
            settings,
            plan: Plan::from_settings(settings),
            out,
            deletion_log: DeletionLog::new(deletion_log),
            matched: 0,
        }
    }

    /// Walk the tree, then write the summary.
    ///
    /// A walk error takes precedence over a failure to write the summary.
    pub fn run(mut self) -> WalkResult<Summary> {
        let walked = self.walk();
        self.finish(walked)
    }

    /// Write the summary for the entries counted so far, then return the
    /// walk's outcome.
    pub fn finish(self, walked: WalkResult<()>) -> WalkResult<Summary> {
        if let Err(e) = &walked {
            warn!(error = %e, matched = self.matched, "walk aborted");
        }

        let summary = Summary {
            matched: self.matched,
            terminal: self.plan.terminal,
            delete_mode: self.plan.delete_mode,
        };
        let reported = report::write_summary(self.out, summary.matched, summary.delete_mode);

        walked?;
        reported?;
        Ok(summary)
    }

    fn walk(&mut self) -> WalkResult<()> {
        let mut builder = WalkBuilder::new(&self.settings.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        if let Some(skip) = self.archive_inside_root() {
            debug!(dir = %skip.display(), "not descending into archive destination");
            builder.filter_entry(move |entry| !entry.path().starts_with(&skip));
        }

        for result in builder.build() {
            let entry = result?;
            let info = EntryInfo::from(&entry.metadata()?);
            self.visit(&clean_path(entry.path()), info)?;
        }

        Ok(())
    }

    /// Classify one entry and run the planned actions on a match.
    pub fn visit(&mut self, path: &Path, info: EntryInfo) -> WalkResult<Visit> {
        let visit = classify(path, self.settings, info);
        if visit != Visit::Match {
            trace!(path = %path.display(), ?visit, "skipped");
            return Ok(visit);
        }
        debug!(path = %path.display(), size = info.len, "matched");

        if let Some(dest) = self.plan.archive {
            archive_file(path, &self.settings.root, dest)?;
        }

        self.matched += 1;
        match self.plan.terminal {
            Terminal::List => list_file(path, &mut *self.out)?,
            Terminal::Delete => delete_file(path, &mut self.deletion_log)?,
        }

        Ok(Visit::Match)
    }

    pub fn matched(&self) -> u64 {
        self.matched
    }

    /// Walk-relative form of the archive destination when it lies strictly
    /// inside the root.
    fn archive_inside_root(&self) -> Option<PathBuf> {
        let dest = self.plan.archive?;
        let root = fs::canonicalize(&self.settings.root).ok()?;
        let dest = fs::canonicalize(dest).ok()?;
        let relative = dest.strip_prefix(&root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        Some(self.settings.root.join(relative))
    }
}

/// Apply the entry predicate with the run's filters.
pub fn classify(path: &Path, settings: &Settings, info: EntryInfo) -> Visit {
    if info.is_dir {
        Visit::SkipDir
    } else if should_skip(path, &settings.ext, settings.size, info) {
        Visit::Skip
    } else {
        Visit::Match
    }
}

/// Run one pass over `settings.root`, writing listings and the summary to
/// `out` and deletion records to `deletion_log`.
pub fn run<O, L>(settings: &Settings, out: &mut O, deletion_log: L) -> WalkResult<Summary>
where
    O: Write + ?Sized,
    L: Write,
{
    Walker::new(settings, out, deletion_log).run()
}
