use thiserror::Error;

/// Top-level error type for arcsnap.
#[derive(Debug, Error, PartialEq)]
pub enum ArcsnapError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
}

/// Contract violations detected while validating inputs.
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("arc count must be at least 1, got {num_arcs}")]
    ArcCount { num_arcs: u32 },

    #[error("arc index {index} is out of range for {num_arcs} arcs")]
    ArcIndex { index: u32, num_arcs: u32 },

    #[error("{parameter} is a zero-length vector")]
    ZeroVector { parameter: &'static str },

    #[error("{parameter} = {value} is not finite")]
    NonFinite { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`ArcsnapError`].
pub type Result<T> = std::result::Result<T, ArcsnapError>;
