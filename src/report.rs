//! Run summary printed after the walk.

use crate::error::{WalkError, WalkResult};
use std::io::Write;

/// `"<N> file found"`, `"<N> files deleted"`, ...
pub fn summary_line(count: u64, delete_mode: bool) -> String {
    let noun = if count == 1 { "file" } else { "files" };
    let verb = if delete_mode { "deleted" } else { "found" };
    format!("{count} {noun} {verb}")
}

/// A blank line followed by the summary sentence.
pub fn write_summary<W: Write + ?Sized>(
    out: &mut W,
    count: u64,
    delete_mode: bool,
) -> WalkResult<()> {
    writeln!(out)
        .and_then(|_| writeln!(out, "{}", summary_line(count, delete_mode)))
        .map_err(WalkError::Output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralization() {
        assert_eq!(summary_line(0, false), "0 files found");
        assert_eq!(summary_line(1, false), "1 file found");
        assert_eq!(summary_line(2, false), "2 files found");
        assert_eq!(summary_line(1, true), "1 file deleted");
        assert_eq!(summary_line(10, true), "10 files deleted");
    }

    #[test]
    fn test_write_summary_leads_with_blank_line() {
        let mut out = Vec::new();
        write_summary(&mut out, 0, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n0 files found\n");
    }
}
