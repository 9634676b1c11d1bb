use std::process::ExitCode;

use itgraph::ui::output;

fn main() -> ExitCode {
    match itgraph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
