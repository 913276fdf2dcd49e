use std::process::ExitCode;

fn main() -> ExitCode {
    match tasklist_core::run(std::env::args_os().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        // The alert already told the user what failed.
        Err(err) if tasklist_core::already_alerted(&err) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
