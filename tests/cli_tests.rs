use clap::Parser;
use ext_sorter::cli::Args;
use ext_sorter::config::types::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn two_positionals_are_source_and_output() {
    let args = Args::parse_from(["ext_sorter", "/tmp/in", "/tmp/out"]);
    assert_eq!(args.source, Some(PathBuf::from("/tmp/in")));
    assert_eq!(args.output, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn positionals_required_without_print_config() {
    assert!(Args::try_parse_from(["ext_sorter", "/tmp/in"]).is_err());
    assert!(Args::try_parse_from(["ext_sorter"]).is_err());
    assert!(Args::try_parse_from(["ext_sorter", "--print-config"]).is_ok());
}

#[test]
fn zero_workers_rejected() {
    assert!(Args::try_parse_from(["ext_sorter", "-j", "0", "a", "b"]).is_err());
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["ext_sorter", "--debug", "--log-level", "quiet", "a", "b"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["ext_sorter", "--log-level", "info", "a", "b"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["ext_sorter", "a", "b"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "ext_sorter",
        "--log-level",
        "quiet",
        "--workers",
        "3",
        "--max-collisions",
        "7",
        "--dry-run",
        "--preserve-metadata",
        "--log-file",
        "/var/tmp/sort.log",
        "/in",
        "/out",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.source, PathBuf::from("/in"));
    assert_eq!(cfg.output, PathBuf::from("/out"));
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(cfg.workers, Some(3));
    assert_eq!(cfg.max_collisions, 7);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/tmp/sort.log")));
    assert!(cfg.dry_run);
    assert!(cfg.preserve_metadata);
}

#[test]
fn unset_flags_keep_config_values() {
    let args = Args::parse_from(["ext_sorter", "/in", "/out"]);
    let mut cfg = Config::default();
    cfg.workers = Some(5);
    cfg.preserve_metadata = true;
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.workers, Some(5));
    assert!(cfg.preserve_metadata);
}
