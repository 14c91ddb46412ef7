use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::response::Response;

use crate::dataset::KnownLocations;
use crate::prediction::domain::{FeatureRecord, RawSubmission};
use crate::prediction::predictor::{ModelError, Predictor};
use crate::prediction::{prediction_router, PredictionService};

pub(super) fn known_locations() -> KnownLocations {
    KnownLocations::new([
        "Whitefield",
        "Electronic City Phase II",
        "Indira Nagar",
        "Hebbal",
    ])
}

pub(super) fn submission(location: &str, bhk: &str, bath: &str, total_sqft: &str) -> RawSubmission {
    RawSubmission {
        location: location.to_string(),
        bhk: bhk.to_string(),
        bath: bath.to_string(),
        total_sqft: total_sqft.to_string(),
    }
}

pub(super) fn valid_submission() -> RawSubmission {
    submission("Whitefield", "2", "2", "1200")
}

/// Returns a fixed estimate and counts how often it was asked.
#[derive(Default)]
pub(super) struct FixedPredictor {
    pub(super) value: f64,
    pub(super) calls: AtomicUsize,
}

impl FixedPredictor {
    pub(super) fn returning(value: f64) -> Self {
        Self {
            value,
            calls: AtomicUsize::new(0),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Predictor for FixedPredictor {
    fn predict(&self, rows: &[FeatureRecord]) -> Result<Vec<f64>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(rows.iter().map(|_| self.value).collect())
    }
}

pub(super) struct FailingPredictor;

impl Predictor for FailingPredictor {
    fn predict(&self, _rows: &[FeatureRecord]) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::Backend("feature mismatch: expected 244 columns".to_string()))
    }
}

pub(super) struct SilentPredictor;

impl Predictor for SilentPredictor {
    fn predict(&self, _rows: &[FeatureRecord]) -> Result<Vec<f64>, ModelError> {
        Ok(Vec::new())
    }
}

pub(super) fn service_with(value: f64) -> (Arc<PredictionService<FixedPredictor>>, Arc<FixedPredictor>) {
    let predictor = Arc::new(FixedPredictor::returning(value));
    let service = PredictionService::new(known_locations(), Some(predictor.clone()));
    (Arc::new(service), predictor)
}

pub(super) fn router_with(value: f64) -> axum::Router {
    let (service, _) = service_with(value);
    prediction_router(service)
}

pub(super) fn degraded_router() -> axum::Router {
    prediction_router(Arc::new(
        PredictionService::<FixedPredictor>::without_model(known_locations()),
    ))
}

pub(super) fn form_request(body: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/predict")
        .header(
            axum::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}

pub(super) async fn read_html_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 html")
}
