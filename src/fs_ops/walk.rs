//! Source tree enumeration.
//! Walks the whole tree up front and returns every regular file, so traversal
//! problems are reported before any copy starts.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::errors::SortError;

use super::hints::describe_io_error;
use super::source::SourceFile;

/// Collect every regular file under `root` (recursively).
///
/// - `root` must exist and be a directory; checked before walking (`SourceNotFound`).
/// - Directories are descended into but not returned.
/// - Links are not followed. A symlink whose target is a regular file is returned
///   (its content is what gets copied); symlinks to directories are neither returned nor walked.
/// - FIFOs, sockets and devices are skipped.
/// - Unreadable subdirectories are logged at warn level and skipped.
/// - Paths are absolute; order is unspecified.
pub fn enumerate_files(root: &Path) -> Result<Vec<SourceFile>, SortError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Err(SortError::SourceNotFound(root.to_path_buf())),
    }
    let root: PathBuf = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    let mut files = Vec::new();
    let mut walk_errors = 0usize;
    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                walk_errors += 1;
                let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                match e.io_error() {
                    Some(ioe) => warn!("{}", describe_io_error("read directory entry", &path, ioe)),
                    None => warn!(path = %path.display(), error = %e, "skipping unreadable entry"),
                }
                continue;
            }
        };

        let ftype = entry.file_type();
        if ftype.is_file() {
            files.push(SourceFile::new(entry.into_path()));
        } else if ftype.is_symlink() {
            if entry.path().is_file() {
                files.push(SourceFile::new(entry.into_path()));
            } else {
                debug!(path = %entry.path().display(), "skipping symlink that is not a regular file");
            }
        }
    }

    debug!(root = %root.display(), files = files.len(), walk_errors, "enumerated source tree");
    Ok(files)
}
