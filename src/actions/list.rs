use crate::error::{WalkError, WalkResult};
use std::io::Write;
use std::path::Path;

/// Write the matched path on its own line.
pub fn list_file<W: Write + ?Sized>(path: &Path, out: &mut W) -> WalkResult<()> {
    writeln!(out, "{}", path.display()).map_err(WalkError::Output)
}
