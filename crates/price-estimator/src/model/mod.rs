//! Trained ridge regression artifact.
//!
//! The artifact is a JSON export of a fitted linear pipeline: one-hot encoded
//! `location` followed by optionally standardized numeric features.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::prediction::{FeatureRecord, ModelError, Predictor};

pub const NUMERIC_FEATURES: [&str; 3] = ["total_sqft", "bath", "bhk"];

/// Error raised while deserializing or validating a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Per-feature standardization parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaling {
    pub mean: f64,
    pub scale: f64,
}

/// Linear model over `total_sqft`, `bath`, `bhk`, and a location offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RidgeModel {
    pub intercept: f64,
    pub coefficients: BTreeMap<String, f64>,
    #[serde(default)]
    pub locations: BTreeMap<String, f64>,
    #[serde(default)]
    pub scaler: BTreeMap<String, FeatureScaling>,
}

impl RidgeModel {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelLoadError> {
        let model: RidgeModel = serde_json::from_reader(reader)?;
        model.validate()?;
        debug!(
            coefficients = model.coefficients.len(),
            locations = model.locations.len(),
            "model artifact parsed"
        );
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if !self.intercept.is_finite() {
            return Err(ModelLoadError::Invalid("intercept is not finite".to_string()));
        }

        for name in self.coefficients.keys() {
            if !NUMERIC_FEATURES.contains(&name.as_str()) {
                return Err(ModelLoadError::Invalid(format!(
                    "unsupported feature '{name}'"
                )));
            }
        }

        let mut weights = self.coefficients.iter().chain(self.locations.iter());
        if let Some((name, _)) = weights.find(|(_, weight)| !weight.is_finite()) {
            return Err(ModelLoadError::Invalid(format!(
                "weight for '{name}' is not finite"
            )));
        }

        for (name, scaling) in &self.scaler {
            if !scaling.mean.is_finite() || !scaling.scale.is_finite() || scaling.scale == 0.0 {
                return Err(ModelLoadError::Invalid(format!(
                    "scaler for '{name}' must have a finite mean and non-zero scale"
                )));
            }
        }

        Ok(())
    }

    fn estimate(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        let mut total = self.intercept;

        for (feature, value) in record.numeric_features() {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteFeature { feature, value });
            }
            let Some(weight) = self.coefficients.get(feature) else {
                continue;
            };
            let value = match self.scaler.get(feature) {
                Some(scaling) => (value - scaling.mean) / scaling.scale,
                None => value,
            };
            total += weight * value;
        }

        // Locations unseen during fitting encode to an all-zero one-hot vector.
        total += self.locations.get(&record.location).copied().unwrap_or(0.0);

        Ok(total)
    }
}

impl Predictor for RidgeModel {
    fn predict(&self, rows: &[FeatureRecord]) -> Result<Vec<f64>, ModelError> {
        rows.iter().map(|record| self.estimate(record)).collect()
    }
}
