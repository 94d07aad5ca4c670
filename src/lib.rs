//! # treesweep - find, list, delete or archive files in a directory tree
//!
//! A single synchronous pass over one tree. Every non-directory entry that
//! passes the extension and minimum-size filter is listed, deleted, or
//! gzip-compressed into a destination tree that mirrors the source layout.
//!
//! ## Quick Start
//!
//! ```bash
//! # List every .log file of at least 1 KiB
//! treesweep --root /var/log --ext .log --size 1024
//!
//! # Archive them, then delete the originals
//! treesweep --root /var/log --ext .log --archive /backup --del --log deleted.txt
//! ```

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod walk;

pub use cli::{Cli, Output};
pub use config::Settings;
pub use error::WalkError;
pub use walk::{Summary, run};

/// Result type alias for treesweep operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
