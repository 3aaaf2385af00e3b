use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
