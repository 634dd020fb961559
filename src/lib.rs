use std::sync::Once;

static INIT: Once = Once::new();

pub fn _setup_pretty_env_logger_default() {
    INIT.call_once(|| {
        pretty_env_logger::init();
    });
}

pub use breakpoint::{Breakpoint, BreakpointBuilder, GridParams, InvalidParameter, ParamUpdate, RawParams, Unit};
pub use breakpoint_set::{BreakpointRecord, BreakpointSet, BreakpointSetError, RecordsError};
pub use session::{GridSession, ResizeOutcome};
pub mod breakpoint;
pub mod breakpoint_set;
pub mod constants;
pub mod session;
