use metrics_exporter_prometheus::PrometheusHandle;
use price_estimator::config::AssetConfig;
use price_estimator::dataset::{KnownLocations, ReferenceDataset};
use price_estimator::error::AppError;
use price_estimator::model::RidgeModel;
use price_estimator::prediction::PredictionService;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) model_loaded: bool,
}

/// Reads the reference dataset and derives the location vocabulary.
pub(crate) fn load_known_locations(path: &Path) -> Result<KnownLocations, AppError> {
    let dataset = ReferenceDataset::from_path(path)?;
    let locations = dataset.known_locations()?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        locations = locations.len(),
        "reference dataset loaded"
    );
    Ok(locations)
}

/// Builds the shared prediction service.
///
/// A dataset failure aborts startup. A model failure only disables predictions.
pub(crate) fn load_prediction_service(
    assets: &AssetConfig,
) -> Result<PredictionService<RidgeModel>, AppError> {
    let locations = load_known_locations(&assets.dataset_path)?;

    let model = match RidgeModel::from_path(&assets.model_path) {
        Ok(model) => {
            info!(path = %assets.model_path.display(), "model loaded");
            Some(Arc::new(model))
        }
        Err(err) => {
            warn!(
                path = %assets.model_path.display(),
                error = %err,
                "model failed to load; serving form without predictions"
            );
            None
        }
    };

    Ok(PredictionService::new(locations, model))
}
