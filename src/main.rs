use std::process::ExitCode;

fn main() -> ExitCode {
    match pulsecheck::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pulsecheck: {}", err);
            ExitCode::FAILURE
        }
    }
}
