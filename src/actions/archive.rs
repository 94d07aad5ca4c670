//! Gzip copies of matched files under a destination tree that mirrors the
//! source layout relative to the walk root.

use crate::error::{WalkError, WalkResult};
use crate::walk::clean_path;
use flate2::{Compression, GzBuilder};
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

/// Suffix appended to the source base name
pub const ARCHIVE_SUFFIX: &str = ".gz";

/// `dest / <dir of path relative to root> / <base name>.gz`
///
/// Both `path` and `root` are compared in cleaned form, so `./a/b.log`
/// under root `.` maps to `dest/a/b.log.gz`.
pub fn archive_target(path: &Path, root: &Path, dest: &Path) -> WalkResult<PathBuf> {
    let outside = || WalkError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };

    let name = path.file_name().ok_or_else(outside)?;
    let parent = clean_path(path.parent().unwrap_or_else(|| Path::new("")));
    let clean_root = clean_path(root);
    let current = Path::new(".");

    let relative = if clean_root == current {
        parent.as_path()
    } else {
        parent.strip_prefix(&clean_root).map_err(|_| outside())?
    };
    let relative = if relative == current {
        Path::new("")
    } else {
        relative
    };

    let mut file_name = name.to_os_string();
    file_name.push(ARCHIVE_SUFFIX);

    Ok(dest.join(relative).join(file_name))
}

/// Compress `path` into its archive target and return the target path.
///
/// The destination must already exist as a directory; intermediate
/// directories below it are created as needed. An existing target is
/// truncated.
pub fn archive_file(path: &Path, root: &Path, dest: &Path) -> WalkResult<PathBuf> {
    let meta = fs::metadata(dest).map_err(|e| WalkError::io("stat", dest, e))?;
    if !meta.is_dir() {
        return Err(WalkError::NotADirectory(dest.to_path_buf()));
    }

    let target = archive_target(path, root, dest)?;
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir).map_err(|e| WalkError::io("mkdir", dir, e))?;
    }

    let mut input = File::open(path).map_err(|e| WalkError::io("open", path, e))?;
    let output = File::create(&target).map_err(|e| WalkError::io("create", &target, e))?;

    // Raw bytes, so non-UTF-8 names survive into the header
    let name = path
        .file_name()
        .map(|n| n.as_encoded_bytes().to_vec())
        .unwrap_or_default();

    let mut encoder = GzBuilder::new()
        .filename(name)
        .write(BufWriter::new(output), Compression::default());

    io::copy(&mut input, &mut encoder).map_err(|e| WalkError::io("compress", path, e))?;

    let writer = encoder
        .finish()
        .map_err(|e| WalkError::io("write", &target, e))?;
    writer
        .into_inner()
        .map_err(|e| WalkError::io("write", &target, e.into_error()))?;

    tracing::info!(
        path = %path.display(),
        target = %target.display(),
        "archived"
    );
    Ok(target)
}
