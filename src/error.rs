use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between opening the record file
/// and saving the last chart. Line numbers start at 1.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("could not open {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("line {line}: could not read: {source}")]
    Read { line: usize, source: std::io::Error },
    #[error("line {line}: expected 3 values (wins ties losses), got {got}")]
    TokenCount { line: usize, got: usize },
    #[error("line {line}: could not parse {token:?} as integer: {source}")]
    ParseInt {
        line: usize,
        token: String,
        source: std::num::ParseIntError,
    },
    #[error("plotting failed: {0}")]
    Plot(String),
}

/// The plotters errors are generic over the backend,
/// keep only their message.
pub(crate) fn plot_err<E: std::fmt::Display>(e: E) -> RecordError {
    RecordError::Plot(e.to_string())
}
