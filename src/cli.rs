//! Command Line Interface (CLI) arguments.

use clap::{Args, Parser, Subcommand};

use crate::config::FlagOverrides;

/// OpenTelemetry Infinity
#[derive(Debug, Parser)]
#[command(name = "otlpinf", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run otlpinf
    Run(RunArgs),
}

/// Flags of the `run` subcommand.
///
/// Host and port stay `None` unless given, so the environment can fill them.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Enable verbose (debug level) output
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Define REST Host [default: localhost]
    #[arg(short = 'a', long = "server_host", value_name = "HOST")]
    pub server_host: Option<String>,

    /// Define REST Port [default: 10222]
    #[arg(short = 'p', long = "server_port", value_name = "PORT")]
    pub server_port: Option<u64>,
}

impl From<RunArgs> for FlagOverrides {
    fn from(args: RunArgs) -> Self {
        Self {
            debug: args.debug,
            server_host: args.server_host,
            server_port: args.server_port,
        }
    }
}

/// Returns parsed command line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
