use super::domain::FeatureRecord;

/// Inference abstraction so the orchestrator can be exercised without a trained artifact.
pub trait Predictor: Send + Sync {
    /// Returns one estimate per input row, in row order.
    fn predict(&self, rows: &[FeatureRecord]) -> Result<Vec<f64>, ModelError>;
}

/// Failure raised while running inference.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("feature '{feature}' is not finite ({value})")]
    NonFiniteFeature { feature: &'static str, value: f64 },
    #[error("model returned no predictions")]
    EmptyOutput,
    #[error("model produced a non-finite estimate")]
    NonFiniteOutput,
    #[error("{0}")]
    Backend(String),
}
