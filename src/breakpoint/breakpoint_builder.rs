// gridpak/src/breakpoint/breakpoint_builder.rs

use super::breakpoint::Breakpoint;
use super::errors::InvalidParameter;
use super::params::{GridParams, Unit};
use log::debug;

/// Builder for typed breakpoints. `min_width` is required, every other
/// field falls back to `GridParams::default()`.
#[derive(Default)]
pub struct BreakpointBuilder {
    min_width: Option<u32>,
    column_count: Option<u32>,
    column_padding_width: Option<u32>,
    column_padding_unit: Option<Unit>,
    gutter_width: Option<u32>,
    gutter_unit: Option<Unit>,
    baseline_height: Option<u32>,
}

impl BreakpointBuilder {
    pub fn build(&self) -> Result<Breakpoint, InvalidParameter> {
        let min_width = self
            .min_width
            .ok_or_else(|| InvalidParameter::UninitializedFieldError("min_width".to_string()))?;
        let defaults = GridParams::default();
        let params = GridParams {
            min_width,
            column_count: self.column_count.unwrap_or(defaults.column_count),
            column_padding_width: self
                .column_padding_width
                .unwrap_or(defaults.column_padding_width),
            column_padding_unit: self
                .column_padding_unit
                .unwrap_or(defaults.column_padding_unit),
            gutter_width: self.gutter_width.unwrap_or(defaults.gutter_width),
            gutter_unit: self.gutter_unit.unwrap_or(defaults.gutter_unit),
            baseline_height: self.baseline_height.unwrap_or(defaults.baseline_height),
        };
        debug!("Building breakpoint {:?}", params);
        Breakpoint::new(params)
    }

    pub fn min_width(&mut self, min_width: u32) -> &mut Self {
        self.min_width = Some(min_width);
        self
    }
    pub fn column_count(&mut self, column_count: u32) -> &mut Self {
        self.column_count = Some(column_count);
        self
    }
    pub fn column_padding(&mut self, width: u32, unit: Unit) -> &mut Self {
        self.column_padding_width = Some(width);
        self.column_padding_unit = Some(unit);
        self
    }
    pub fn gutter(&mut self, width: u32, unit: Unit) -> &mut Self {
        self.gutter_width = Some(width);
        self.gutter_unit = Some(unit);
        self
    }
    pub fn baseline_height(&mut self, baseline_height: u32) -> &mut Self {
        self.baseline_height = Some(baseline_height);
        self
    }
}
