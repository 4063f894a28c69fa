//! phonedeck binary entry point.

use std::process::ExitCode;

use phonedeck::ui::output;

fn main() -> ExitCode {
    match phonedeck::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
