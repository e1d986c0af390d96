//! User-facing terminal messages, separate from the tracing log stream.
//! Colors are enabled only when the stream is a TTY.

use owo_colors::OwoColorize;

use crate::fs_ops::RunSummary;

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// One-line end-of-run summary, e.g. `done: 12 copied, 1 failed (13 found)`.
pub fn summary_line(summary: &RunSummary) -> String {
    let mut parts = Vec::new();
    if summary.planned > 0 {
        parts.push(format!("{} planned", summary.planned));
    }
    parts.push(format!("{} copied", summary.copied));
    if summary.failed() > 0 {
        parts.push(format!("{} failed", summary.failed()));
    }
    if summary.skipped > 0 {
        parts.push(format!("{} skipped", summary.skipped));
    }
    format!("{} ({} found)", parts.join(", "), summary.discovered)
}

pub fn print_summary(summary: &RunSummary) {
    let line = summary_line(summary);
    let clean = summary.failed() == 0 && summary.skipped == 0;
    if stdout_tty() {
        if clean {
            println!("{} {}", "done:".green().bold(), line);
        } else {
            println!("{} {}", "done:".yellow().bold(), line);
        }
    } else {
        println!("done: {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_omits_zero_counters() {
        let s = RunSummary {
            discovered: 3,
            copied: 3,
            ..Default::default()
        };
        assert_eq!(summary_line(&s), "3 copied (3 found)");
    }

    #[test]
    fn summary_line_mentions_skips_and_plans() {
        let s = RunSummary {
            discovered: 5,
            planned: 4,
            skipped: 1,
            ..Default::default()
        };
        assert_eq!(summary_line(&s), "4 planned, 0 copied, 1 skipped (5 found)");
    }
}
