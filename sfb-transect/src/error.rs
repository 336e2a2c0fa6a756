/// Error types for loading and validating transect data
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while loading the dataset at startup.
#[derive(Error, Debug)]
pub enum LoadError {
    /// File extension is not one of the recognised dataset formats
    #[error("Unsupported format: {} (expected .csv, .csv.gz or .json)", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// File could not be opened or read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to parse JSON data
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A row carried a timestamp in no recognised layout
    #[error("Invalid timestamp {value:?} on data row {row}")]
    InvalidTimestamp { row: usize, value: String },
}

/// Rejected filter input. Raised before any filtering work is done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Sample size must lie in `[1, max]`
    #[error("Sample size {requested} is outside 1..={max}")]
    SampleSizeOutOfRange { requested: usize, max: usize },

    /// Sample seed must lie in `[0, max]`
    #[error("Sample seed {requested} is outside 0..={max}")]
    SampleSeedOutOfRange { requested: u64, max: u64 },

    /// Parameter key not present in the registry
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    /// Map tile style not recognised
    #[error("Unknown map style: {0}")]
    UnknownMapStyle(String),

    /// Station id not in the station enumeration
    #[error("Unknown station: {0}")]
    UnknownStation(String),

    /// Date selector is not a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Type alias for Results using LoadError
pub type Result<T> = std::result::Result<T, LoadError>;
