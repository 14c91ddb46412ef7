use std::slice;
use std::sync::Arc;

use tracing::debug;

use crate::dataset::KnownLocations;

use super::domain::{round_price, Estimate, FormEcho, RawSubmission};
use super::predictor::{ModelError, Predictor};
use super::validation::{join_messages, validate_submission, FieldError};

/// Service composing field validation, the location vocabulary, and the predictor.
///
/// Both collaborators are fixed at construction and never mutated, so a single
/// instance is shared across requests behind an `Arc`.
pub struct PredictionService<P> {
    locations: Arc<KnownLocations>,
    model: Option<Arc<P>>,
}

impl<P> PredictionService<P>
where
    P: Predictor + 'static,
{
    pub fn new(locations: KnownLocations, model: Option<Arc<P>>) -> Self {
        Self {
            locations: Arc::new(locations),
            model,
        }
    }

    pub fn with_model(locations: KnownLocations, model: P) -> Self {
        Self::new(locations, Some(Arc::new(model)))
    }

    /// Degraded service used when the model artifact could not be loaded.
    pub fn without_model(locations: KnownLocations) -> Self {
        Self::new(locations, None)
    }

    pub fn locations(&self) -> &KnownLocations {
        &self.locations
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Drive one form submission from raw fields to a rounded estimate.
    pub fn predict(&self, submission: RawSubmission) -> Result<Estimate, PredictionError> {
        let model = self.model.as_ref().ok_or(PredictionError::ModelNotLoaded)?;

        let submission = submission.trimmed();
        let checked = validate_submission(&submission).map_err(|errors| {
            PredictionError::Validation {
                errors,
                echo: FormEcho::from_raw(&submission),
            }
        })?;

        if !self.locations.contains(&checked.location) {
            return Err(PredictionError::UnknownLocation(checked.location));
        }

        let record = checked.into_record();
        debug!(
            location = %record.location,
            bhk = record.bhk,
            bath = record.bath,
            total_sqft = record.total_sqft,
            "validated feature record"
        );

        let outputs = model
            .predict(slice::from_ref(&record))
            .map_err(PredictionError::PredictionFailed)?;
        let raw = outputs
            .first()
            .copied()
            .ok_or(PredictionError::PredictionFailed(ModelError::EmptyOutput))?;
        if !raw.is_finite() {
            return Err(PredictionError::PredictionFailed(
                ModelError::NonFiniteOutput,
            ));
        }

        Ok(Estimate {
            price: round_price(raw),
            record,
        })
    }
}

/// Reasons a submission ends without an estimate. Each renders as the message shown on the form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictionError {
    #[error("Model is not loaded properly.")]
    ModelNotLoaded,
    #[error("{}", join_messages(.errors))]
    Validation {
        errors: Vec<FieldError>,
        echo: FormEcho,
    },
    #[error("Location '{0}' is not available in our database.")]
    UnknownLocation(String),
    #[error("Prediction error: {0}")]
    PredictionFailed(ModelError),
}
