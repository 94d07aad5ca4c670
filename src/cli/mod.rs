//! Command-line interface for treesweep
//!
//! Flags are folded into the layered configuration as the highest-priority
//! layer, then a single walk runs over the configured root.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod output;

pub use output::Output;

use crate::config::{Overrides, Settings};
use crate::walk::{self, Summary};

/// Find files by extension and size, then list, delete or archive them
#[derive(Parser, Debug)]
#[command(name = "treesweep", author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to start search
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// File extension to filter on, including the dot (e.g. .log)
    #[arg(long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Minimum file size in bytes
    #[arg(long, value_name = "BYTES")]
    pub size: Option<u64>,

    /// List files only, even if --del or --archive are given
    #[arg(long)]
    pub ls: bool,

    /// Delete matched files
    #[arg(long)]
    pub del: bool,

    /// File to append deletion records to (stdout when not given)
    #[arg(long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Directory to write gzip copies of matched files to
    #[arg(long, value_name = "DIR")]
    pub archive: Option<PathBuf>,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress diagnostics
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Flags that were actually given, as a configuration layer.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            root: self.root.clone(),
            ext: self.ext.clone(),
            size: self.size,
            list: self.ls.then_some(true),
            delete: self.del.then_some(true),
            log: self.log.clone(),
            archive: self.archive.clone(),
        }
    }

    pub fn run(self) -> Result<Summary> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.verbose > 0, self.quiet);

        let settings = Settings::load(self.config.as_deref(), &self.overrides())?;

        if settings.list && (settings.delete || settings.archive_dir().is_some()) {
            output.warning("--ls given: files are only listed, not archived or deleted");
        }

        let deletion_log: Box<dyn Write> = match settings.log_file() {
            Some(path) => {
                output.verbose(&format!("Appending deletions to {}", path.display()));
                Box::new(open_deletion_log(path)?)
            }
            None => Box::new(io::stdout()),
        };

        let mut stdout = io::stdout();
        let summary = walk::run(&settings, &mut stdout, deletion_log)?;
        Ok(summary)
    }
}

/// Open the deletion log for appending, creating it if needed.
fn open_deletion_log(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options
        .open(path)
        .with_context(|| format!("Failed to open deletion log {}", path.display()))
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // Keep the walker crate quiet unless everything was asked for
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info,ignore=warn"),
            2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries the listing and summary
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from([
            "treesweep", "--root", "testdata", "--ext", ".log", "--size", "10", "--del",
            "--archive", "backup", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        let overrides = cli.overrides();
        assert_eq!(overrides.root, Some(PathBuf::from("testdata")));
        assert_eq!(overrides.ext.as_deref(), Some(".log"));
        assert_eq!(overrides.size, Some(10));
        assert_eq!(overrides.delete, Some(true));
        assert_eq!(overrides.list, None);
        assert_eq!(overrides.archive, Some(PathBuf::from("backup")));
    }

    #[test]
    fn test_unset_flags_leave_config_alone() {
        let cli = Cli::try_parse_from(["treesweep"]).unwrap();
        let overrides = cli.overrides();
        assert!(overrides.root.is_none());
        assert!(overrides.list.is_none());
        assert!(overrides.delete.is_none());
    }

    #[test]
    fn test_rejects_negative_size() {
        assert!(Cli::try_parse_from(["treesweep", "--size", "-1"]).is_err());
    }

    #[test]
    fn test_deletion_log_appends() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("deleted.log");

        writeln!(open_deletion_log(&path).unwrap(), "first").unwrap();
        writeln!(open_deletion_log(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
