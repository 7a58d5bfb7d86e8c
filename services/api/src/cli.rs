use crate::estimate::{run_estimate, run_features, EstimateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use psc_hours::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PSC Hours Estimator",
    about = "Estimate professional services implementation hours for event projects",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Estimate hours for a set of feature flags and print the report
    Estimate(EstimateArgs),
    /// List the recognized feature flag keys
    Features,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Features => {
            run_features();
            Ok(())
        }
    }
}
