// gridpak/src/breakpoint/errors.rs

use crate::constants::MAX_COLUMNS;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidParameter {
    #[error("Unitialized field on BreakpointBuilder: {0}")]
    UninitializedFieldError(String),
    #[error("Can't have more than {max} columns, but got {0}", max = MAX_COLUMNS)]
    TooManyColumns(u32),
    #[error("column_count must be >= 1")]
    ZeroColumns,
    #[error("{0} must be an integer, but got {1:?}")]
    NotAnInteger(&'static str, String),
    #[error("{0} must be >= 0, but got {1}")]
    Negative(&'static str, i64),
    #[error("{0} is too large: {1}")]
    OutOfRange(&'static str, i64),
    #[error("{0} must be 'px' or '%', but got {1:?}")]
    InvalidUnit(&'static str, String),
}
