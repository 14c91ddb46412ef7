//! Form submission pipeline: field validation, location check, inference, and rendering.

pub mod domain;
pub mod page;
pub mod predictor;
pub mod router;
pub mod service;
pub mod validation;
pub mod view;

#[cfg(test)]
mod tests;

pub use domain::{Estimate, FeatureRecord, FormEcho, RawSubmission, LOCATION_PLACEHOLDER};
pub use page::render_form;
pub use predictor::{ModelError, Predictor};
pub use router::prediction_router;
pub use service::{PredictionError, PredictionService};
pub use validation::{validate_location, validate_positive, Field, FieldError};
pub use view::FormView;
