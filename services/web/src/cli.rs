use crate::estimate::{run_estimate, run_locations, EstimateArgs, LocationsArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use price_estimator::config::AssetConfig;
use price_estimator::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "House Price Estimator",
    about = "Serve the price estimation form or run one-off estimates from the command line",
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
    /// Validate one submission and print the estimated price
    Estimate(EstimateArgs),
    /// List the locations accepted by the form
    Locations(LocationsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) assets: AssetArgs,
}

/// Overrides for the reference dataset and model artifact locations.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct AssetArgs {
    /// Reference dataset CSV with a `location` column
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
    /// Trained model artifact (JSON)
    #[arg(long)]
    pub(crate) model: Option<PathBuf>,
}

impl AssetArgs {
    pub(crate) fn apply(self, assets: &mut AssetConfig) {
        if let Some(dataset) = self.dataset {
            assets.dataset_path = dataset;
        }
        if let Some(model) = self.model {
            assets.model_path = model;
        }
    }
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Estimate(args) => run_estimate(args),
        Command::Locations(args) => run_locations(args),
    }
}
