//! Dataset error types
//!
//! Defines all errors that can occur while loading or querying the demand dataset.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The dataset file is not present
    #[error("Dataset not found: {0:?}")]
    Missing(PathBuf),

    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid GeoJSON
    #[error("GeoJSON error: {0}")]
    GeoJson(String),

    /// The input is GeoJSON, but not a feature collection
    #[error("Expected a FeatureCollection, found {0}")]
    NotFeatureCollection(&'static str),

    /// Requested county does not exist in the dataset
    #[error("County not found: {0}")]
    CountyNotFound(String),

    /// Hour outside 0-23 or not a number
    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(String),

    /// Writing an export failed
    #[error("Export error: {0}")]
    Export(String),
}

impl From<geojson::Error> for DatasetError {
    fn from(err: geojson::Error) -> Self {
        DatasetError::GeoJson(err.to_string())
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(err: serde_json::Error) -> Self {
        DatasetError::GeoJson(err.to_string())
    }
}

impl From<csv::Error> for DatasetError {
    fn from(err: csv::Error) -> Self {
        DatasetError::Export(err.to_string())
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::CountyNotFound("Ohio County".to_string());
        assert_eq!(err.to_string(), "County not found: Ohio County");

        let err = DatasetError::InvalidHour("24".to_string());
        assert_eq!(err.to_string(), "Invalid hour: 24 (expected 0-23)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
