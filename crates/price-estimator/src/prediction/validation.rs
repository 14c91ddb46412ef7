use super::domain::{FeatureRecord, RawSubmission, LOCATION_PLACEHOLDER};

/// Form inputs in the order they are validated and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Location,
    Bhk,
    Bath,
    TotalSqft,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Location, Field::Bhk, Field::Bath, Field::TotalSqft];

    pub fn name(self) -> &'static str {
        match self {
            Field::Location => "location",
            Field::Bhk => "bhk",
            Field::Bath => "bath",
            Field::TotalSqft => "total_sqft",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Field::Location => "Please select a valid location.",
            Field::Bhk => "Please enter BHK.",
            Field::Bath => "Please enter number of bathrooms.",
            Field::TotalSqft => "Please enter total square feet.",
        }
    }

    fn invalid_message(self) -> &'static str {
        match self {
            Field::Location => "Please select a valid location.",
            Field::Bhk => "Please enter a valid number for BHK.",
            Field::Bath => "Please enter a valid number for bathrooms.",
            Field::TotalSqft => "Please enter a valid number for square feet.",
        }
    }

    fn non_positive_message(self) -> &'static str {
        match self {
            Field::Location => "Please select a valid location.",
            Field::Bhk => "BHK must be greater than 0.",
            Field::Bath => "Number of bathrooms must be greater than 0.",
            Field::TotalSqft => "Square feet must be greater than 0.",
        }
    }
}

/// Single-field rejection, rendered with the user-facing message for that field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{}", .0.empty_message())]
    EmptyField(Field),
    #[error("{}", .0.invalid_message())]
    NotANumber(Field),
    #[error("{}", .0.non_positive_message())]
    NonPositive(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::EmptyField(field)
            | FieldError::NotANumber(field)
            | FieldError::NonPositive(field) => *field,
        }
    }
}

/// Accepts any non-blank location other than the dropdown placeholder.
///
/// Membership in the known vocabulary is checked separately, once every field has passed.
pub fn validate_location(raw: &str) -> Result<&str, FieldError> {
    if raw.is_empty() || raw == LOCATION_PLACEHOLDER {
        return Err(FieldError::EmptyField(Field::Location));
    }
    Ok(raw)
}

pub fn validate_positive(field: Field, raw: &str) -> Result<f64, FieldError> {
    if raw.is_empty() {
        return Err(FieldError::EmptyField(field));
    }

    let value = parse_number(raw).ok_or(FieldError::NotANumber(field))?;
    if !value.is_finite() {
        return Err(FieldError::NotANumber(field));
    }
    if value <= 0.0 {
        return Err(FieldError::NonPositive(field));
    }

    Ok(value)
}

/// Parses a decimal number, allowing single underscores between digits as digit separators.
fn parse_number(raw: &str) -> Option<f64> {
    if !raw.contains('_') {
        return raw.parse().ok();
    }

    let bytes = raw.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(idx, byte)| {
        *byte != b'_'
            || (idx > 0
                && bytes[idx - 1].is_ascii_digit()
                && bytes.get(idx + 1).is_some_and(u8::is_ascii_digit))
    });
    if !separators_ok {
        return None;
    }

    raw.replace('_', "").parse().ok()
}

/// Every field accepted, location not yet checked against the vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CheckedFields {
    pub(crate) location: String,
    pub(crate) bhk: f64,
    pub(crate) bath: f64,
    pub(crate) total_sqft: f64,
}

impl CheckedFields {
    pub(crate) fn into_record(self) -> FeatureRecord {
        FeatureRecord {
            location: self.location,
            bhk: self.bhk,
            bath: self.bath,
            total_sqft: self.total_sqft,
        }
    }
}

/// Validates all four fields, collecting every failure in field order.
pub(crate) fn validate_submission(raw: &RawSubmission) -> Result<CheckedFields, Vec<FieldError>> {
    let location = validate_location(&raw.location);
    let bhk = validate_positive(Field::Bhk, &raw.bhk);
    let bath = validate_positive(Field::Bath, &raw.bath);
    let total_sqft = validate_positive(Field::TotalSqft, &raw.total_sqft);

    match (location, bhk, bath, total_sqft) {
        (Ok(location), Ok(bhk), Ok(bath), Ok(total_sqft)) => Ok(CheckedFields {
            location: location.to_string(),
            bhk,
            bath,
            total_sqft,
        }),
        (location, bhk, bath, total_sqft) => {
            let errors = [
                location.err(),
                bhk.err(),
                bath.err(),
                total_sqft.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            Err(errors)
        }
    }
}

/// Joins messages with a single space, preserving order.
pub fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
