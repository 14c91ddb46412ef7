use crate::dataset::KnownLocations;

use super::domain::{Estimate, FormEcho};
use super::service::PredictionError;

/// Everything the form page needs to render one response.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView<'a> {
    pub locations: &'a [String],
    pub model_loaded: bool,
    pub error: Option<String>,
    pub selected: FormEcho,
    pub prediction: Option<f64>,
    pub show_clear_button: bool,
}

impl<'a> FormView<'a> {
    pub fn blank(locations: &'a KnownLocations, model_loaded: bool) -> Self {
        Self {
            locations: locations.as_slice(),
            model_loaded,
            error: None,
            selected: FormEcho::default(),
            prediction: None,
            show_clear_button: false,
        }
    }

    pub fn from_outcome(
        locations: &'a KnownLocations,
        model_loaded: bool,
        outcome: &Result<Estimate, PredictionError>,
    ) -> Self {
        let mut view = Self::blank(locations, model_loaded);

        match outcome {
            Ok(estimate) => {
                view.prediction = Some(estimate.price);
                view.selected = estimate.echo();
                view.show_clear_button = true;
            }
            Err(error) => {
                view.error = Some(error.to_string());
                // Only per-field rejections re-populate the inputs.
                if let PredictionError::Validation { echo, .. } = error {
                    view.selected = echo.clone();
                }
            }
        }

        view
    }
}
