//! I/O error hints.
//!
//! Maps raw OS codes (or the io::ErrorKind when no code is present) to a short,
//! actionable hint so error records say what to check before a manual retry.
//!
//! Usage:
//!   error!(error = %e, hint = io_hint(&e).unwrap_or(""), "...");
//!   warn!("{}", describe_io_error("read directory", dir, &e));

use std::io;
use std::path::Path;

/// Platform-aware hint for an I/O error, if one applies.
pub fn io_hint(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => Some("permission denied; check ownership and read/write permissions"),
                libc::ENOENT => Some("path not found; it may have been removed during the run"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EDQUOT => Some("disk quota exceeded"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
                libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
                libc::EMFILE => Some("process file descriptor limit reached; lower --workers or raise limits"),
                libc::ENFILE => Some("system-wide file table overflow; reduce open files"),
                libc::ENOTDIR => Some("a path component is not a directory"),
                libc::EISDIR => Some("target is a directory"),
                libc::EBUSY => Some("resource busy; ensure no other process is writing"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),
                2 | 3 => Some("path not found; it may have been removed during the run"),
                32 => Some("sharing violation; file is in use"),
                112 => Some("insufficient disk space"),
                19 => Some("write protected / read-only media"),
                206 => Some("filename or path too long (MAX_PATH exceeded)"),
                4 => Some("too many open files; lower --workers"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        let _ = code;
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => Some("permission denied; check ownership and read/write permissions"),
        io::ErrorKind::NotFound => Some("path not found; it may have been removed during the run"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        io::ErrorKind::StorageFull => Some("insufficient space on device"),
        io::ErrorKind::ReadOnlyFilesystem => Some("read-only filesystem; cannot write here"),
        _ => None,
    }
}

/// "op 'path': error; hint [os code: N]" for warnings that have no typed error.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = io_hint(e) {
        msg.push_str("; ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}
