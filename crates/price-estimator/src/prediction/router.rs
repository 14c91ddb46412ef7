use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use tracing::{debug, info, warn};

use super::domain::RawSubmission;
use super::page::render_form;
use super::predictor::Predictor;
use super::service::{PredictionError, PredictionService};
use super::view::FormView;

/// Router builder exposing the estimation form.
pub fn prediction_router<P>(service: Arc<PredictionService<P>>) -> Router
where
    P: Predictor + 'static,
{
    Router::new()
        .route("/", get(index_handler::<P>))
        .route("/predict", post(predict_handler::<P>))
        .route("/clear", get(clear_handler))
        .with_state(service)
}

pub(crate) async fn index_handler<P>(State(service): State<Arc<PredictionService<P>>>) -> Html<String>
where
    P: Predictor + 'static,
{
    let view = FormView::blank(service.locations(), service.model_loaded());
    Html(render_form(&view))
}

pub(crate) async fn predict_handler<P>(
    State(service): State<Arc<PredictionService<P>>>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Html<String>
where
    P: Predictor + 'static,
{
    // Undecodable bodies count as an empty submission.
    let pairs = match form {
        Ok(Form(pairs)) => pairs,
        Err(rejection) => {
            debug!(%rejection, "form body not decoded; treating as empty");
            Vec::new()
        }
    };
    let submission = RawSubmission::from_pairs(pairs);

    debug!(
        location = %submission.location,
        bhk = %submission.bhk,
        bath = %submission.bath,
        total_sqft = %submission.total_sqft,
        "prediction requested"
    );

    let outcome = service.predict(submission);
    match &outcome {
        Ok(estimate) => info!(
            location = %estimate.record.location,
            price = estimate.price,
            "prediction served"
        ),
        Err(error @ PredictionError::PredictionFailed(_)) => {
            warn!(%error, "prediction failed")
        }
        Err(PredictionError::ModelNotLoaded) => warn!("prediction rejected: model not loaded"),
        Err(error) => debug!(%error, "submission rejected"),
    }

    let view = FormView::from_outcome(service.locations(), service.model_loaded(), &outcome);
    Html(render_form(&view))
}

pub(crate) async fn clear_handler() -> Redirect {
    Redirect::to("/")
}
