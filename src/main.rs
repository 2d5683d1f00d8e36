use std::process::ExitCode;

use otlpinf::cli::{self, Commands};
use otlpinf::lifecycle::startup;
use otlpinf::StatusServer;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    match cli.command {
        Commands::Run(args) => match startup::run(args.into(), StatusServer::new).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                // Later failures were already logged before the guard flushed.
                if e.before_logger() {
                    eprintln!("Error: {e}");
                }
                ExitCode::FAILURE
            }
        },
    }
}
