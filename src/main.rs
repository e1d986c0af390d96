use ext_sorter::cli;
use ext_sorter::output as out;
use std::process::ExitCode;

mod app;
mod logging;

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(code) => code,
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            ExitCode::from(app::EXIT_FATAL)
        }
    }
}
