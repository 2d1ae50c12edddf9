// File: crates/tufte-core/src/error.rs
// Summary: Error types for input validation, binning, and style configuration.

use thiserror::Error;

/// Failures raised while turning caller input into plottable samples.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    #[error("could not convert {name} to a numeric array: {reason}")]
    Conversion { name: String, reason: String },
    #[error("{name} is empty")]
    Empty { name: String },
    #[error("{name} contains only NaN values")]
    AllMissing { name: String },
    #[error("{left} and {right} must have the same length ({left_len} != {right_len})")]
    LengthMismatch {
        left: String,
        right: String,
        left_len: usize,
        right_len: usize,
    },
    #[error("invalid bins: {0}")]
    InvalidBins(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color {0:?}: expected #RRGGBB, #RRGGBBAA or a basic color name")]
pub struct ColorError(pub String);

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse style: {0}")]
    Parse(#[from] toml::de::Error),
}
