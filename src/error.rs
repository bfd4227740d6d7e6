use thiserror::Error;

use crate::data::axis::Dimension;
use crate::data::record::Field;

/// Errors produced while loading data, reading configuration or rebinding axes.
#[derive(Error, Debug)]
pub enum ScatterError {
    #[error("Unknown field `{0}`")]
    InvalidField(String),

    #[error("Cannot bind `{field}` to the {dimension} axis: {reason}")]
    InvalidSelection {
        dimension: Dimension,
        field: Field,
        reason: SelectionRejection,
    },

    #[error("Cannot compute a domain over an empty dataset")]
    EmptyDataset,

    #[error("Padding multipliers must be finite, positive and low < high, got ({low}, {high})")]
    InvalidPadding { low: f64, high: f64 },

    #[error("Column `{field}` has no finite minimum and maximum")]
    NonFiniteDomain { field: Field },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported configuration file `{0}` (expected .yaml, .yml or .json)")]
    UnsupportedConfigFormat(String),
}

/// Why a rebind request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRejection {
    AlreadyActive,
    NotACandidate,
}

impl std::fmt::Display for SelectionRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionRejection::AlreadyActive => write!(f, "field is already active"),
            SelectionRejection::NotACandidate => write!(f, "field is not selectable on this axis"),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScatterError>;
