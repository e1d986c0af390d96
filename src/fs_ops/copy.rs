//! Copy primitive.
//! - `CopyPrimitive` is the seam between the copier and the filesystem: given a source
//!   and a destination path, duplicate the content or fail with an io::Error.
//! - `StdCopy` is the default: `std::fs::copy` (content + permission bits) into a temp
//!   file next to the destination, then a rename onto the final name, then optional
//!   timestamp/xattr preservation.
//!
//! A copy that fails partway removes its temp file, so the bucket never holds a
//! truncated file under a real name. The rename replaces an existing file: a name picked
//! by `resolve_target` that another worker also picked is overwritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::metadata::{preserve_metadata, preserve_xattrs};

static TEMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Hidden, per-process unique temp path inside `dir`.
fn unique_temp_path(dir: &Path) -> PathBuf {
    let pid = std::process::id();
    let seq = TEMP_SEQ.fetch_add(1, Ordering::Relaxed);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    dir.join(format!(".ext_sorter.{pid}.{seq}.{nanos}.tmp"))
}

/// Duplicate the file at `src` into `dst`. Returns the number of bytes copied.
pub trait CopyPrimitive: Sync {
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<u64>;
}

/// Default copy primitive backed by `std::fs::copy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdCopy {
    /// Also carry over atime/mtime (and xattrs when the feature is on).
    pub preserve_metadata: bool,
}

impl StdCopy {
    pub fn new(preserve_metadata: bool) -> Self {
        Self { preserve_metadata }
    }
}

impl CopyPrimitive for StdCopy {
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<u64> {
        let src_meta = if self.preserve_metadata {
            Some(fs::metadata(src)?)
        } else {
            None
        };

        let dir = dst.parent().unwrap_or_else(|| Path::new("."));
        let tmp = unique_temp_path(dir);
        let bytes = match fs::copy(src, &tmp) {
            Ok(n) => n,
            Err(e) => {
                let _ = fs::remove_file(&tmp);
                return Err(e);
            }
        };
        if let Err(e) = fs::rename(&tmp, dst) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        if let Some(meta) = src_meta {
            preserve_metadata(dst, &meta);
            preserve_xattrs(src, dst);
        }
        Ok(bytes)
    }
}

impl<F> CopyPrimitive for F
where
    F: Fn(&Path, &Path) -> io::Result<u64> + Sync,
{
    fn copy(&self, src: &Path, dst: &Path) -> io::Result<u64> {
        self(src, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn std_copy_duplicates_content() {
        let td = tempdir().unwrap();
        let src = td.path().join("a.txt");
        let dst = td.path().join("b.txt");
        fs::write(&src, b"hello world").unwrap();

        let n = StdCopy::default().copy(&src, &dst).unwrap();
        assert_eq!(n, 11);
        assert_eq!(fs::read(&dst).unwrap(), b"hello world");
        assert!(src.exists(), "source must be left in place");
    }

    #[test]
    fn std_copy_missing_source_is_not_found() {
        let td = tempdir().unwrap();
        let err = StdCopy::default()
            .copy(&td.path().join("missing"), &td.path().join("out"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!td.path().join("out").exists());
        assert_eq!(fs::read_dir(td.path()).unwrap().count(), 0, "no temp file left behind");
    }

    #[test]
    fn preserve_metadata_stats_source_before_writing() {
        let td = tempdir().unwrap();
        let err = StdCopy::new(true)
            .copy(&td.path().join("missing"), &td.path().join("out"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read_dir(td.path()).unwrap().count(), 0);
    }

    #[test]
    fn existing_target_is_replaced_without_leftovers() {
        let td = tempdir().unwrap();
        let src = td.path().join("new.txt");
        let dst = td.path().join("taken.txt");
        fs::write(&src, b"fresh").unwrap();
        fs::write(&dst, b"stale content").unwrap();

        StdCopy::default().copy(&src, &dst).unwrap();
        assert_eq!(fs::read(&dst).unwrap(), b"fresh");
        assert_eq!(fs::read_dir(td.path()).unwrap().count(), 2);
    }

    #[test]
    fn preserve_metadata_keeps_mtime() {
        use filetime::{set_file_mtime, FileTime};
        let td = tempdir().unwrap();
        let src = td.path().join("old.log");
        let dst = td.path().join("copy.log");
        fs::write(&src, b"x").unwrap();
        let then = FileTime::from_unix_time(1_000_000_000, 0);
        set_file_mtime(&src, then).unwrap();

        StdCopy::new(true).copy(&src, &dst).unwrap();
        let got = FileTime::from_last_modification_time(&fs::metadata(&dst).unwrap());
        assert_eq!(got.unix_seconds(), then.unix_seconds());
    }

    #[test]
    fn closures_are_copy_primitives() {
        let td = tempdir().unwrap();
        let failing = |_: &Path, _: &Path| -> io::Result<u64> { Err(io::Error::other("nope")) };
        assert!(failing.copy(td.path(), td.path()).is_err());
    }
}
