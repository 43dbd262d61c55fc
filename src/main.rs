use dotenv::dotenv;
use hourledger::commands::Cli;
use hourledger::libs::messages::macros::init_tracing;
use hourledger::msg_error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv();
    init_tracing();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
