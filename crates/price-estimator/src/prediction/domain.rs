/// Label of the unselected option in the location dropdown.
pub const LOCATION_PLACEHOLDER: &str = "Choose a location...";

/// Untrusted form fields exactly as submitted; absent keys are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    pub location: String,
    pub bhk: String,
    pub bath: String,
    pub total_sqft: String,
}

impl RawSubmission {
    /// Builds a submission from decoded form pairs. The first value of a repeated key wins
    /// and unrecognised keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut seen = [false; 4];
        let mut submission = Self::default();
        for (key, value) in pairs {
            let (slot, target) = match key.as_ref() {
                "location" => (0, &mut submission.location),
                "bhk" => (1, &mut submission.bhk),
                "bath" => (2, &mut submission.bath),
                "total_sqft" => (3, &mut submission.total_sqft),
                _ => continue,
            };
            if !seen[slot] {
                seen[slot] = true;
                *target = value.into();
            }
        }
        submission
    }

    pub fn trimmed(self) -> Self {
        Self {
            location: trim_owned(self.location),
            bhk: trim_owned(self.bhk),
            bath: trim_owned(self.bath),
            total_sqft: trim_owned(self.total_sqft),
        }
    }
}

fn trim_owned(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

/// Fixed-shape model input, built only once every field and the location have been accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub location: String,
    pub bhk: f64,
    pub bath: f64,
    pub total_sqft: f64,
}

impl FeatureRecord {
    pub(crate) fn numeric_features(&self) -> [(&'static str, f64); 3] {
        [
            ("total_sqft", self.total_sqft),
            ("bath", self.bath),
            ("bhk", self.bhk),
        ]
    }
}

/// Field values written back into the form when it is redisplayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEcho {
    pub location: String,
    pub bhk: String,
    pub bath: String,
    pub total_sqft: String,
}

impl FormEcho {
    pub fn from_raw(raw: &RawSubmission) -> Self {
        let location = if raw.location == LOCATION_PLACEHOLDER {
            String::new()
        } else {
            raw.location.clone()
        };

        Self {
            location,
            bhk: raw.bhk.clone(),
            bath: raw.bath.clone(),
            total_sqft: raw.total_sqft.clone(),
        }
    }

    pub fn from_record(record: &FeatureRecord) -> Self {
        Self {
            location: record.location.clone(),
            bhk: record.bhk.to_string(),
            bath: record.bath.to_string(),
            total_sqft: record.total_sqft.to_string(),
        }
    }
}

/// Successful prediction: the rounded price and the record it was computed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub price: f64,
    pub record: FeatureRecord,
}

impl Estimate {
    pub fn echo(&self) -> FormEcho {
        FormEcho::from_record(&self.record)
    }
}

/// Absolute value rounded to two decimal places.
pub fn round_price(raw: f64) -> f64 {
    (raw.abs() * 100.0).round() / 100.0
}
