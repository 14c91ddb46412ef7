use super::common::*;
use crate::dataset::KnownLocations;
use crate::prediction::{
    Field, FieldError, FormEcho, ModelError, PredictionError, PredictionService, RawSubmission,
    LOCATION_PLACEHOLDER,
};

#[test]
fn predict_returns_rounded_absolute_estimate() {
    let (service, predictor) = service_with(-87.456);

    let estimate = service.predict(valid_submission()).expect("valid submission");

    assert_eq!(estimate.price, 87.46);
    assert_eq!(estimate.record.location, "Whitefield");
    assert_eq!(estimate.record.bhk, 2.0);
    assert_eq!(estimate.record.bath, 2.0);
    assert_eq!(estimate.record.total_sqft, 1200.0);
    assert_eq!(predictor.calls(), 1);
}

#[test]
fn predict_trims_fields_before_validation() {
    let (service, _) = service_with(50.0);
    let estimate = service
        .predict(submission("  Whitefield  ", " 2 ", "2\n", "\t1200"))
        .expect("whitespace tolerated");
    assert_eq!(estimate.record.location, "Whitefield");
    assert_eq!(estimate.echo().total_sqft, "1200");
}

#[test]
fn validation_failures_echo_raw_entries_and_skip_inference() {
    let (service, predictor) = service_with(10.0);

    let err = service
        .predict(submission(LOCATION_PLACEHOLDER, "-1", "abc", "900"))
        .expect_err("invalid submission");

    match &err {
        PredictionError::Validation { errors, echo } => {
            assert_eq!(
                errors,
                &vec![
                    FieldError::EmptyField(Field::Location),
                    FieldError::NonPositive(Field::Bhk),
                    FieldError::NotANumber(Field::Bath),
                ]
            );
            assert_eq!(
                echo,
                &FormEcho {
                    location: String::new(),
                    bhk: "-1".to_string(),
                    bath: "abc".to_string(),
                    total_sqft: "900".to_string(),
                }
            );
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Please select a valid location. BHK must be greater than 0. \
         Please enter a valid number for bathrooms."
    );
    assert_eq!(predictor.calls(), 0);
}

#[test]
fn missing_fields_are_treated_as_blank() {
    let (service, _) = service_with(10.0);
    let err = service
        .predict(RawSubmission::default())
        .expect_err("empty submission");
    assert!(matches!(err, PredictionError::Validation { ref errors, .. } if errors.len() == 4));
}

#[test]
fn unknown_location_is_reported_by_name() {
    let (service, predictor) = service_with(10.0);
    let err = service
        .predict(submission("Atlantis", "2", "2", "1000"))
        .expect_err("unknown location");

    assert_eq!(err, PredictionError::UnknownLocation("Atlantis".to_string()));
    assert_eq!(
        err.to_string(),
        "Location 'Atlantis' is not available in our database."
    );
    assert_eq!(predictor.calls(), 0);
}

#[test]
fn field_errors_take_precedence_over_unknown_location() {
    let (service, _) = service_with(10.0);
    let err = service
        .predict(submission("Atlantis", "", "2", "1000"))
        .expect_err("blank bhk");
    assert!(matches!(err, PredictionError::Validation { .. }));
}

#[test]
fn missing_model_rejects_even_valid_input() {
    let service = PredictionService::<FixedPredictor>::without_model(known_locations());
    assert!(!service.model_loaded());
    assert_eq!(
        service.predict(valid_submission()),
        Err(PredictionError::ModelNotLoaded)
    );
    assert_eq!(
        PredictionError::ModelNotLoaded.to_string(),
        "Model is not loaded properly."
    );
}

#[test]
fn predictor_failures_are_wrapped() {
    let service = PredictionService::with_model(known_locations(), FailingPredictor);
    let err = service
        .predict(valid_submission())
        .expect_err("backend failure");
    assert_eq!(
        err.to_string(),
        "Prediction error: feature mismatch: expected 244 columns"
    );
}

#[test]
fn empty_and_non_finite_outputs_are_failures() {
    let silent = PredictionService::with_model(known_locations(), SilentPredictor);
    assert_eq!(
        silent.predict(valid_submission()),
        Err(PredictionError::PredictionFailed(ModelError::EmptyOutput))
    );

    let (nan, _) = service_with(f64::NAN);
    assert_eq!(
        nan.predict(valid_submission()),
        Err(PredictionError::PredictionFailed(ModelError::NonFiniteOutput))
    );
}

#[test]
fn repeated_submissions_are_identical() {
    let (service, predictor) = service_with(64.129);
    let first = service.predict(valid_submission());
    let second = service.predict(valid_submission());
    assert_eq!(first, second);
    assert_eq!(predictor.calls(), 2);
}

#[test]
fn empty_vocabulary_rejects_every_location() {
    let service = PredictionService::with_model(
        KnownLocations::default(),
        FixedPredictor::returning(1.0),
    );
    assert!(matches!(
        service.predict(valid_submission()),
        Err(PredictionError::UnknownLocation(_))
    ));
}
