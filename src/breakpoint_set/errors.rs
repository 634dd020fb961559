// gridpak/src/breakpoint_set/errors.rs

use crate::breakpoint::InvalidParameter;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreakpointSetError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    #[error("A breakpoint with min_width {0} already exists")]
    DuplicateKey(u32),
    #[error("No breakpoint at position {0}")]
    NoSuchBreakpoint(usize),
    #[error("No breakpoint with min_width {0}")]
    NoSuchMinWidth(u32),
    #[error("No breakpoint is currently selected")]
    NoCurrentBreakpoint,
}

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("File IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Record {0}: {1}")]
    InvalidRecord(usize, BreakpointSetError),
    #[error("Records mark {0} breakpoints as current, at most one is allowed")]
    MultipleCurrent(usize),
}
