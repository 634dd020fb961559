// gridpak/src/breakpoint/mod.rs

mod breakpoint;
mod breakpoint_builder;
mod errors;
mod params;

pub use breakpoint::Breakpoint;
pub use breakpoint_builder::BreakpointBuilder;
pub use errors::InvalidParameter;
pub use params::{parse_integer, GridParams, ParamUpdate, RawParams, Unit};
