// gridpak/src/breakpoint_set/mod.rs

mod breakpoint_set;
mod errors;
mod records;

pub use breakpoint_set::BreakpointSet;
pub use errors::{BreakpointSetError, RecordsError};
pub use records::BreakpointRecord;
