//! Entry predicate deciding which walk entries reach an action.

use std::fs::Metadata;
use std::path::Path;

/// The parts of an entry's metadata the predicate looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    pub is_dir: bool,
    pub len: u64,
}

impl EntryInfo {
    pub fn file(len: u64) -> Self {
        Self { is_dir: false, len }
    }

    pub fn dir() -> Self {
        Self { is_dir: true, len: 0 }
    }
}

impl From<&Metadata> for EntryInfo {
    fn from(meta: &Metadata) -> Self {
        Self {
            is_dir: meta.is_dir(),
            len: meta.len(),
        }
    }
}

/// Suffix of the base name starting at its last `.`, or `""` when there is none.
///
/// Unlike [`Path::extension`], a leading dot counts: `.bashrc` yields `.bashrc`.
pub fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    let name = name.to_string_lossy();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_string(),
        None => String::new(),
    }
}

/// Returns true when the entry must not be handed to an action.
///
/// Rules, first match wins: directories, entries smaller than `min_size`,
/// and entries whose extension differs from a non-empty `ext` are skipped.
/// The extension compare is exact and case-sensitive.
pub fn should_skip(path: &Path, ext: &str, min_size: u64, info: EntryInfo) -> bool {
    if info.is_dir || info.len < min_size {
        return true;
    }

    !ext.is_empty() && extension_of(path) != ext
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directories_always_skipped() {
        let dir = Path::new("testdata/dir2");
        assert!(should_skip(dir, "", 0, EntryInfo::dir()));
        assert!(should_skip(dir, ".log", 0, EntryInfo::dir()));
        // A directory named like a match is still skipped
        assert!(should_skip(Path::new("logs.log"), ".log", 0, EntryInfo::dir()));
    }

    #[test]
    fn test_filter_cases() {
        let file = Path::new("testdata/dir.log");
        let info = EntryInfo::file(13);

        let cases = [
            ("no extension filter", "", 0, false),
            ("extension match", ".log", 0, false),
            ("extension mismatch", ".sh", 0, true),
            ("extension and size match", ".log", 10, false),
            ("size equal to threshold passes", ".log", 13, false),
            ("size below threshold", ".log", 20, true),
        ];

        for (name, ext, min_size, expected) in cases {
            assert_eq!(
                should_skip(file, ext, min_size, info),
                expected,
                "case: {name}"
            );
        }
    }

    #[test]
    fn test_extension_is_case_sensitive() {
        let info = EntryInfo::file(1);
        assert!(should_skip(Path::new("a/LOUD.LOG"), ".log", 0, info));
        assert!(!should_skip(Path::new("a/LOUD.LOG"), ".LOG", 0, info));
        // The leading dot is part of the filter
        assert!(should_skip(Path::new("a/b.log"), "log", 0, info));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("dir/file.tar.gz")), ".gz");
        assert_eq!(extension_of(Path::new("dir/.bashrc")), ".bashrc");
        assert_eq!(extension_of(Path::new("dir/Makefile")), "");
        assert_eq!(extension_of(Path::new("dir.d/Makefile")), "");
        assert_eq!(extension_of(Path::new("trailing.")), ".");
    }
}
