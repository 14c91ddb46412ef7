//! Reference dataset backing the location vocabulary.
//!
//! The dataset is a CSV export with a header row. Only the `location` column is
//! required; any other columns are retained so callers can inspect them.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

pub const LOCATION_COLUMN: &str = "location";

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(String),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Io(err) => write!(f, "failed to read reference dataset: {}", err),
            DatasetError::Csv(err) => write!(f, "invalid reference dataset CSV: {}", err),
            DatasetError::MissingColumn(column) => {
                write!(f, "reference dataset has no '{}' column", column)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(err) => Some(err),
            DatasetError::Csv(err) => Some(err),
            DatasetError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// In-memory copy of the reference table.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    headers: csv::StringRecord,
    rows: Vec<csv::StringRecord>,
}

impl ReferenceDataset {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if column_index(&headers, LOCATION_COLUMN).is_none() {
            return Err(DatasetError::MissingColumn(LOCATION_COLUMN.to_string()));
        }

        let rows = csv_reader.records().collect::<Result<Vec<_>, _>>()?;
        Ok(Self { headers, rows })
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted, deduplicated non-blank values of `column`.
    pub fn distinct_values(&self, column: &str) -> Result<Vec<String>, DatasetError> {
        let index = column_index(&self.headers, column)
            .ok_or_else(|| DatasetError::MissingColumn(column.to_string()))?;

        let values: BTreeSet<&str> = self
            .rows
            .iter()
            .filter_map(|row| row.get(index))
            .filter(|value| !value.is_empty())
            .collect();

        Ok(values.into_iter().map(str::to_string).collect())
    }

    pub fn known_locations(&self) -> Result<KnownLocations, DatasetError> {
        self.distinct_values(LOCATION_COLUMN)
            .map(KnownLocations::from_sorted_unique)
    }
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|header| header == column)
}

/// Alphabetically sorted, deduplicated vocabulary of accepted locations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownLocations(Vec<String>);

impl KnownLocations {
    pub fn new<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = locations.into_iter().map(Into::into).collect();
        Self(set.into_iter().collect())
    }

    fn from_sorted_unique(locations: Vec<String>) -> Self {
        Self(locations)
    }

    pub fn contains(&self, location: &str) -> bool {
        self.0
            .binary_search_by(|candidate| candidate.as_str().cmp(location))
            .is_ok()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
