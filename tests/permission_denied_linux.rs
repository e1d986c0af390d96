#![cfg(target_os = "linux")]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

use ext_sorter::{Config, SortError, sort_tree};

/// One unreadable file among three: the other two are copied and only that file fails.
#[test]
fn unreadable_file_fails_alone() {
    // root bypasses permission checks and the test would not behave as expected.
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().expect("tempdir");
    let src = td.path().join("src");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("one.txt"), b"1").unwrap();
    fs::write(src.join("two.md"), b"2").unwrap();
    let locked = src.join("locked.txt");
    fs::write(&locked, b"secret").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let summary = sort_tree(&Config::new(&src, &out)).expect("run completes");

    // Restore permissions so tempdir cleanup can remove the file.
    let _ = fs::set_permissions(&locked, fs::Permissions::from_mode(0o644));

    assert_eq!(summary.copied, 2);
    assert_eq!(summary.failures.len(), 1);
    let failure = &summary.failures[0];
    assert!(failure.source.ends_with("locked.txt"));
    assert!(matches!(failure.error, SortError::Copy { .. }));
    let msg = failure.error.to_string().to_ascii_lowercase();
    assert!(msg.contains("permission denied"), "unexpected error: {msg}");

    assert!(out.join("txt/one.txt").exists());
    assert!(out.join("md/two.md").exists());
    // Nothing but the good copy in the shared bucket.
    assert_eq!(fs::read_dir(out.join("txt")).unwrap().count(), 1);
}

/// A read-only output root makes bucket creation fail for every file, without aborting the run.
#[test]
fn readonly_output_fails_each_file() {
    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().expect("tempdir");
    let src = td.path().join("src");
    let out = td.path().join("out");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&out).unwrap();
    fs::write(src.join("a.txt"), b"a").unwrap();
    fs::write(src.join("b.bin"), b"b").unwrap();
    fs::set_permissions(&out, fs::Permissions::from_mode(0o555)).unwrap();

    let summary = sort_tree(&Config::new(&src, &out)).expect("run completes");
    let _ = fs::set_permissions(&out, fs::Permissions::from_mode(0o755));

    assert_eq!(summary.copied, 0);
    assert_eq!(summary.failures.len(), 2);
    assert!(
        summary
            .failures
            .iter()
            .all(|f| matches!(f.error, SortError::BucketCreation { .. }))
    );
}
