// gridpak/src/breakpoint/breakpoint.rs

use super::errors::InvalidParameter;
use super::params::{GridParams, ParamUpdate, RawParams, Unit};
use log::{debug, trace};

/// One grid configuration, plus the state derived from it.
///
/// The stored parameters are always valid: every way of building or
/// editing a `Breakpoint` validates first and leaves the previous state in
/// place on failure. Bounds, position and the current flag are owned by the
/// enclosing `BreakpointSet`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    params: GridParams,
    column_width: i64,
    viewport_width: Option<u32>,
    lower_bound: u32,
    upper_bound: Option<u32>,
    position: usize,
    current: bool,
}

impl Breakpoint {
    pub fn new(params: GridParams) -> Result<Self, InvalidParameter> {
        params.validate()?;
        Ok(Self {
            params,
            column_width: 0,
            viewport_width: None,
            lower_bound: 0,
            upper_bound: None,
            position: 0,
            current: false,
        })
    }

    /// Build a breakpoint from untyped form input, filling absent fields
    /// from `GridParams::default()`
    pub fn from_raw(raw: &RawParams) -> Result<Self, InvalidParameter> {
        let update = raw.parse()?;
        Self::new(update.apply_to(&GridParams::default()))
    }

    pub fn params(&self) -> &GridParams {
        &self.params
    }

    pub fn min_width(&self) -> u32 {
        self.params.min_width
    }

    pub fn column_count(&self) -> u32 {
        self.params.column_count
    }

    pub fn column_padding_width(&self) -> u32 {
        self.params.column_padding_width
    }

    pub fn column_padding_unit(&self) -> Unit {
        self.params.column_padding_unit
    }

    pub fn gutter_width(&self) -> u32 {
        self.params.gutter_width
    }

    pub fn gutter_unit(&self) -> Unit {
        self.params.gutter_unit
    }

    pub fn baseline_height(&self) -> u32 {
        self.params.baseline_height
    }

    /// Column width from the last `update_column_width` call
    pub fn column_width(&self) -> i64 {
        self.column_width
    }

    /// Viewport width the cached column width was computed for
    pub fn viewport_width(&self) -> Option<u32> {
        self.viewport_width
    }

    pub fn lower_bound(&self) -> u32 {
        self.lower_bound
    }

    /// `None` means unbounded
    pub fn upper_bound(&self) -> Option<u32> {
        self.upper_bound
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_current(&self) -> bool {
        self.current
    }

    /// Whether `width` falls in the inclusive `[lower, upper]` range
    pub fn contains(&self, width: u32) -> bool {
        width >= self.lower_bound && self.upper_bound.map_or(true, |upper| width <= upper)
    }

    /// Effective gutter in pixels at `viewport_width`
    pub fn gutter_at(&self, viewport_width: u32) -> i64 {
        self.params
            .gutter_unit
            .resolve(self.params.gutter_width, viewport_width)
    }

    /// Effective padding on one side of a column in pixels at `viewport_width`
    pub fn padding_at(&self, viewport_width: u32) -> i64 {
        self.params
            .column_padding_unit
            .resolve(self.params.column_padding_width, viewport_width)
    }

    /// Usable width of one column at `viewport_width`, without caching it.
    ///
    /// Each step floors on its own; collapsing the expression changes the
    /// result once percentages are involved.
    pub fn column_width_at(&self, viewport_width: u32) -> i64 {
        let column_count = self.params.column_count as i64;
        let gutter = self.gutter_at(viewport_width);
        let padding = self.padding_at(viewport_width);
        let mut column_width = viewport_width as i64 / column_count - gutter - padding * 2;
        column_width += gutter / column_count;
        column_width
    }

    /// Recompute and cache the column width for `viewport_width`
    pub fn update_column_width(&mut self, viewport_width: u32) -> i64 {
        let column_width = self.column_width_at(viewport_width);
        trace!(
            "min_width {}: column width {} at viewport {}",
            self.params.min_width,
            column_width,
            viewport_width
        );
        self.column_width = column_width;
        self.viewport_width = Some(viewport_width);
        column_width
    }

    /// Apply a partial update. Nothing changes unless the whole result is
    /// valid. A cached column width is refreshed for the same viewport.
    pub fn set_parameters(&mut self, update: &ParamUpdate) -> Result<(), InvalidParameter> {
        let params = update.apply_to(&self.params);
        params.validate()?;
        debug!("Updating breakpoint {}: {:?}", self.params.min_width, update);
        self.params = params;
        if let Some(viewport_width) = self.viewport_width {
            self.update_column_width(viewport_width);
        }
        Ok(())
    }

    /// Parse untyped form input and apply it
    pub fn set_raw_parameters(&mut self, raw: &RawParams) -> Result<(), InvalidParameter> {
        let update = raw.parse()?;
        self.set_parameters(&update)
    }

    /// Form values that re-populate an editor with this breakpoint
    pub fn options(&self) -> RawParams {
        RawParams::from(&self.params)
    }

    pub(crate) fn set_bounds(&mut self, position: usize, lower_bound: u32, upper_bound: Option<u32>) {
        self.position = position;
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
    }

    pub(crate) fn set_current(&mut self, current: bool) {
        self.current = current;
    }

    pub(crate) fn restore_viewport(&mut self, viewport_width: Option<u32>) {
        match viewport_width {
            Some(viewport_width) => {
                self.update_column_width(viewport_width);
            }
            None => {
                self.column_width = 0;
                self.viewport_width = None;
            }
        }
    }
}
