//! Which actions run for a matched entry, and in what order.
//!
//! Precedence: an explicit list request wins outright; otherwise an archive
//! destination archives first, then the entry is deleted if deletion was
//! requested or listed if not.

use crate::config::Settings;
use std::path::Path;

/// The action that counts the entry and ends its dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    List,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan<'a> {
    /// Archive destination, run before the terminal action
    pub archive: Option<&'a Path>,
    pub terminal: Terminal,
    /// Deletion was requested; selects the summary verb
    pub delete_mode: bool,
}

impl<'a> Plan<'a> {
    pub fn from_settings(settings: &'a Settings) -> Self {
        if settings.list {
            return Self {
                archive: None,
                terminal: Terminal::List,
                delete_mode: settings.delete,
            };
        }

        let terminal = if settings.delete {
            Terminal::Delete
        } else {
            Terminal::List
        };

        Self {
            archive: settings.archive_dir(),
            terminal,
            delete_mode: settings.delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn settings(list: bool, delete: bool, archive: Option<&str>) -> Settings {
        Settings {
            list,
            delete,
            archive: archive.map(PathBuf::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_list() {
        let s = settings(false, false, None);
        let plan = Plan::from_settings(&s);
        assert_eq!(plan.archive, None);
        assert_eq!(plan.terminal, Terminal::List);
        assert!(!plan.delete_mode);
    }

    #[test]
    fn test_list_wins_over_everything() {
        let s = settings(true, true, Some("backup"));
        let plan = Plan::from_settings(&s);
        assert_eq!(plan.archive, None);
        assert_eq!(plan.terminal, Terminal::List);
        // Still reported as a deletion run
        assert!(plan.delete_mode);
    }

    #[test]
    fn test_archive_then_delete() {
        let s = settings(false, true, Some("backup"));
        let plan = Plan::from_settings(&s);
        assert_eq!(plan.archive, Some(Path::new("backup")));
        assert_eq!(plan.terminal, Terminal::Delete);
    }

    #[test]
    fn test_archive_then_list() {
        let s = settings(false, false, Some("backup"));
        let plan = Plan::from_settings(&s);
        assert_eq!(plan.archive, Some(Path::new("backup")));
        assert_eq!(plan.terminal, Terminal::List);
    }

    #[test]
    fn test_delete_only() {
        let s = settings(false, true, Some(""));
        let plan = Plan::from_settings(&s);
        assert_eq!(plan.archive, None);
        assert_eq!(plan.terminal, Terminal::Delete);
    }
}
