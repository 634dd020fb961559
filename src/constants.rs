// gridpak/src/constants.rs

/// Largest column count a breakpoint may declare
pub const MAX_COLUMNS: u32 = 99;

/// Viewport widths snap to multiples of this many pixels while dragging
pub const SNAP: u32 = 20;

/// The simulated viewport never shrinks below this width
pub const MIN_VIEWPORT_WIDTH: u32 = 300;

/// Field names, shared by error messages and exported records
pub const MIN_WIDTH: &str = "min_width";
pub const COLUMN_COUNT: &str = "column_count";
pub const COLUMN_PADDING_WIDTH: &str = "column_padding_width";
pub const COLUMN_PADDING_UNIT: &str = "column_padding_unit";
pub const GUTTER_WIDTH: &str = "gutter_width";
pub const GUTTER_UNIT: &str = "gutter_unit";
pub const BASELINE_HEIGHT: &str = "baseline_height";
