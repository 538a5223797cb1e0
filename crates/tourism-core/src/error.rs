use std::path::PathBuf;
use thiserror::Error;

/// A `REF_DATE` value that does not follow the `YYYY-MM[-DD]` contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid reference date {input:?}: {reason}")]
pub struct PeriodParseError {
    /// The offending date string, verbatim.
    pub input: String,
    /// What part of the contract it broke.
    pub reason: String,
}

impl PeriodParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// All errors produced by the tourism dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader failed at the stream level.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A reference date string did not satisfy the date contract.
    #[error(transparent)]
    PeriodParse(#[from] PeriodParseError),

    /// The filtered dataset failed validation.
    #[error("Invalid data format: {reason}")]
    InvalidDataset { reason: String },

    /// The monthly slice capacity cannot hold one record per region.
    #[error("Monthly slice capacity {capacity} is smaller than the region set ({regions})")]
    RegionCapacity { capacity: usize, regions: usize },

    /// The configured data path does not exist.
    #[error("Data path not found: {0}")]
    DataPathNotFound(PathBuf),

    /// No CSV files were found under the given directory.
    #[error("No CSV files found in {0}")]
    NoDataFiles(PathBuf),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
