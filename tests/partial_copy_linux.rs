#![cfg(target_os = "linux")]
//! A copy that dies partway (file size limit hit mid-write) must not leave a truncated
//! file under the real name, and a rerun must place the file under its original name.
//! Kept in its own test binary because RLIMIT_FSIZE is process-wide.

use std::fs;
use tempfile::tempdir;

use ext_sorter::{Config, SortError, sort_tree};

const LIMIT: u64 = 64 * 1024;

fn set_fsize_limit(soft: libc::rlim_t, hard: libc::rlim_t) {
    let lim = libc::rlimit {
        rlim_cur: soft,
        rlim_max: hard,
    };
    let rc = unsafe { libc::setrlimit(libc::RLIMIT_FSIZE, &lim) };
    assert_eq!(rc, 0, "setrlimit failed");
}

#[test]
fn failed_copy_leaves_no_partial_file() {
    let td = tempdir().expect("tempdir");
    let src = td.path().join("src");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    let payload = vec![7u8; 256 * 1024];
    fs::write(src.join("big.bin"), &payload).unwrap();

    let mut saved = libc::rlimit {
        rlim_cur: 0,
        rlim_max: 0,
    };
    assert_eq!(unsafe { libc::getrlimit(libc::RLIMIT_FSIZE, &mut saved) }, 0);

    // Writes past the limit fail with EFBIG instead of killing the process.
    unsafe {
        libc::signal(libc::SIGXFSZ, libc::SIG_IGN);
    }
    set_fsize_limit(LIMIT, saved.rlim_max);
    let first = sort_tree(&Config::new(&src, &out));
    set_fsize_limit(saved.rlim_cur, saved.rlim_max);
    unsafe {
        libc::signal(libc::SIGXFSZ, libc::SIG_DFL);
    }

    let first = first.expect("run completes");
    assert_eq!(first.copied, 0);
    assert_eq!(first.failures.len(), 1);
    assert!(matches!(first.failures[0].error, SortError::Copy { .. }));

    let bucket = out.join("bin");
    assert!(!bucket.join("big.bin").exists(), "truncated copy left behind");
    let leftovers: Vec<_> = fs::read_dir(&bucket).unwrap().collect();
    assert!(leftovers.is_empty(), "leftover files: {leftovers:?}");

    let second = sort_tree(&Config::new(&src, &out)).expect("rerun completes");
    assert_eq!(second.copied, 1);
    assert_eq!(fs::read(bucket.join("big.bin")).unwrap(), payload);
    assert!(!bucket.join("big_1.bin").exists());
}
