//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the interrupt handler,
//! validates the source and output roots, runs the sort and maps the result to an exit code.

use anyhow::Result;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, error, warn};

use ext_sorter::cli::Args;
use ext_sorter::config::{CONFIG_ENV, load_config_from_xml};
use ext_sorter::output as out;
use ext_sorter::{Config, default_config_path, shutdown, sort_tree};

use crate::logging::init_tracing;

/// Source missing, output unusable, bad config or logging setup failure.
pub const EXIT_FATAL: u8 = 1;
/// The run completed but at least one file was not copied.
pub const EXIT_PARTIAL: u8 = 2;
/// Interrupted before every file was attempted.
pub const EXIT_INTERRUPTED: u8 = 130;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    if args.print_config {
        print_config_location();
        return Ok(ExitCode::SUCCESS);
    }

    // defaults < XML < CLI
    let mut cfg = Config::default();
    if let Some(settings) = load_config_from_xml()? {
        settings.apply_to(&mut cfg);
    }
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Guard needs to be dropped on SIGINT to flush logs
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        let installed = ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; finishing in-flight copies and skipping the rest...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        });
        if let Err(e) = installed {
            warn!(error = %e, "could not install interrupt handler; Ctrl-C will stop the run abruptly");
        }
    }

    debug!(?cfg, "starting ext_sorter");

    let result = (|| -> Result<ExitCode> {
        if let Err(e) = cfg.validate() {
            error!(
                code = e.code(),
                kind = e.kind(),
                source = %cfg.source.display(),
                output = %cfg.output.display(),
                error = %e,
                "Cannot start run"
            );
            return Err(e.into());
        }

        let summary = sort_tree(&cfg)?;
        out::print_summary(&summary);

        if summary.failed() > 0 {
            Ok(ExitCode::from(EXIT_PARTIAL))
        } else if summary.skipped > 0 {
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        } else {
            Ok(ExitCode::SUCCESS)
        }
    })();

    // Ensure logs are flushed before exit
    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    result
}

fn print_config_location() {
    if let Ok(cfg_env) = std::env::var(CONFIG_ENV) {
        out::print_info(&format!("Using {CONFIG_ENV} (explicit):\n  {cfg_env}"));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("Default ext_sorter config path:\n  {}", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file there; built-in defaults are used.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}
