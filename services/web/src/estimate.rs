use crate::cli::AssetArgs;
use crate::infra::load_known_locations;
use clap::Args;
use price_estimator::config::AppConfig;
use price_estimator::error::AppError;
use price_estimator::model::RidgeModel;
use price_estimator::prediction::{Estimate, PredictionService, RawSubmission};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Location exactly as listed by the `locations` command
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Bedroom-hall-kitchen count
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) bhk: String,
    /// Number of bathrooms
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) bath: String,
    /// Total floor area in square feet
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub(crate) total_sqft: String,
    #[command(flatten)]
    pub(crate) assets: AssetArgs,
}

#[derive(Args, Debug)]
pub(crate) struct LocationsArgs {
    /// Reference dataset CSV with a `location` column
    #[arg(long)]
    pub(crate) dataset: Option<std::path::PathBuf>,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        location,
        bhk,
        bath,
        total_sqft,
        assets: overrides,
    } = args;

    let mut config = AppConfig::load()?;
    overrides.apply(&mut config.assets);

    let locations = load_known_locations(&config.assets.dataset_path)?;
    let model = RidgeModel::from_path(&config.assets.model_path)?;
    let service = PredictionService::with_model(locations, model);

    let estimate = service.predict(RawSubmission {
        location,
        bhk,
        bath,
        total_sqft,
    })?;

    println!("{}", describe_estimate(&estimate));
    Ok(())
}

pub(crate) fn run_locations(args: LocationsArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(dataset) = args.dataset {
        config.assets.dataset_path = dataset;
    }

    let locations = load_known_locations(&config.assets.dataset_path)?;
    for location in locations.as_slice() {
        println!("{location}");
    }
    Ok(())
}

fn describe_estimate(estimate: &Estimate) -> String {
    let record = &estimate.record;
    format!(
        "Estimated price for {} ({} BHK, {} bath, {} sqft): {:.2}",
        record.location, record.bhk, record.bath, record.total_sqft, estimate.price
    )
}
