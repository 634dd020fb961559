//! Breakpoint parameters
//!
//! Typed grid parameters plus the boundary that turns untyped form input
//! (every value arrives as text) into them:
//! - `RawParams` holds optional text values exactly as a form posts them
//! - `RawParams::parse` validates them into a typed `ParamUpdate`
//! - `ParamUpdate::apply_to` overlays an update on a full `GridParams`

use super::errors::InvalidParameter;
use crate::constants::{
    BASELINE_HEIGHT, COLUMN_COUNT, COLUMN_PADDING_UNIT, COLUMN_PADDING_WIDTH, GUTTER_UNIT,
    GUTTER_WIDTH, MAX_COLUMNS, MIN_WIDTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a gutter or column padding width
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "px")]
    Pixels,
    #[serde(rename = "%")]
    Percent,
}

impl Unit {
    /// Parse a unit from form text, reporting failures against `field`
    pub fn parse(field: &'static str, value: &str) -> Result<Self, InvalidParameter> {
        match value {
            "px" | "pixels" => Ok(Unit::Pixels),
            "%" | "percent" => Ok(Unit::Percent),
            _ => Err(InvalidParameter::InvalidUnit(field, value.to_string())),
        }
    }

    /// Resolve a width in this unit to whole pixels for the given viewport.
    ///
    /// Percentages are taken of the viewport and floored, matching the
    /// order of operations `floor((viewport / 100) * value)`.
    pub fn resolve(&self, value: u32, viewport_width: u32) -> i64 {
        match self {
            Unit::Pixels => value as i64,
            Unit::Percent => ((viewport_width as f64 / 100.) * value as f64).floor() as i64,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Pixels => write!(f, "px"),
            Unit::Percent => write!(f, "%"),
        }
    }
}

/// The stored (non-derived) parameters of a breakpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridParams {
    /// Viewport width at which this breakpoint becomes eligible
    pub min_width: u32,
    pub column_count: u32,
    pub column_padding_width: u32,
    pub column_padding_unit: Unit,
    pub gutter_width: u32,
    pub gutter_unit: Unit,
    /// Cosmetic only, never part of the column width
    pub baseline_height: u32,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            min_width: 960,
            column_count: 16,
            column_padding_width: 10,
            column_padding_unit: Unit::Pixels,
            gutter_width: 8,
            gutter_unit: Unit::Pixels,
            baseline_height: 22,
        }
    }
}

impl GridParams {
    /// Range checks that the type system does not already enforce
    pub fn validate(&self) -> Result<(), InvalidParameter> {
        Self::validate_column_count(&self.column_count)
    }

    pub fn validate_column_count(column_count: &u32) -> Result<(), InvalidParameter> {
        if *column_count > MAX_COLUMNS {
            return Err(InvalidParameter::TooManyColumns(*column_count));
        }
        if *column_count == 0 {
            return Err(InvalidParameter::ZeroColumns);
        }
        Ok(())
    }
}

/// A partial, already typed parameter update. Absent fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamUpdate {
    pub min_width: Option<u32>,
    pub column_count: Option<u32>,
    pub column_padding_width: Option<u32>,
    pub column_padding_unit: Option<Unit>,
    pub gutter_width: Option<u32>,
    pub gutter_unit: Option<Unit>,
    pub baseline_height: Option<u32>,
}

impl ParamUpdate {
    /// Overlay this update on `params`. The result is not validated.
    pub fn apply_to(&self, params: &GridParams) -> GridParams {
        GridParams {
            min_width: self.min_width.unwrap_or(params.min_width),
            column_count: self.column_count.unwrap_or(params.column_count),
            column_padding_width: self
                .column_padding_width
                .unwrap_or(params.column_padding_width),
            column_padding_unit: self
                .column_padding_unit
                .unwrap_or(params.column_padding_unit),
            gutter_width: self.gutter_width.unwrap_or(params.gutter_width),
            gutter_unit: self.gutter_unit.unwrap_or(params.gutter_unit),
            baseline_height: self.baseline_height.unwrap_or(params.baseline_height),
        }
    }
}

impl From<GridParams> for ParamUpdate {
    fn from(params: GridParams) -> Self {
        Self {
            min_width: Some(params.min_width),
            column_count: Some(params.column_count),
            column_padding_width: Some(params.column_padding_width),
            column_padding_unit: Some(params.column_padding_unit),
            gutter_width: Some(params.gutter_width),
            gutter_unit: Some(params.gutter_unit),
            baseline_height: Some(params.baseline_height),
        }
    }
}

/// Untyped parameter values as they arrive from form inputs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawParams {
    pub min_width: Option<String>,
    pub column_count: Option<String>,
    pub column_padding_width: Option<String>,
    pub column_padding_unit: Option<String>,
    pub gutter_width: Option<String>,
    pub gutter_unit: Option<String>,
    pub baseline_height: Option<String>,
}

impl RawParams {
    /// Parse and validate every present field. Either all fields convert or
    /// the first failure is returned.
    pub fn parse(&self) -> Result<ParamUpdate, InvalidParameter> {
        let integer = |field, value: &Option<String>| {
            value
                .as_deref()
                .map(|value| parse_integer(field, value))
                .transpose()
        };
        let unit = |field, value: &Option<String>| {
            value
                .as_deref()
                .map(|value| Unit::parse(field, value))
                .transpose()
        };
        let update = ParamUpdate {
            min_width: integer(MIN_WIDTH, &self.min_width)?,
            column_count: integer(COLUMN_COUNT, &self.column_count)?,
            column_padding_width: integer(COLUMN_PADDING_WIDTH, &self.column_padding_width)?,
            column_padding_unit: unit(COLUMN_PADDING_UNIT, &self.column_padding_unit)?,
            gutter_width: integer(GUTTER_WIDTH, &self.gutter_width)?,
            gutter_unit: unit(GUTTER_UNIT, &self.gutter_unit)?,
            baseline_height: integer(BASELINE_HEIGHT, &self.baseline_height)?,
        };
        if let Some(column_count) = &update.column_count {
            GridParams::validate_column_count(column_count)?;
        }
        Ok(update)
    }
}

impl From<&GridParams> for RawParams {
    fn from(params: &GridParams) -> Self {
        Self {
            min_width: Some(params.min_width.to_string()),
            column_count: Some(params.column_count.to_string()),
            column_padding_width: Some(params.column_padding_width.to_string()),
            column_padding_unit: Some(params.column_padding_unit.to_string()),
            gutter_width: Some(params.gutter_width.to_string()),
            gutter_unit: Some(params.gutter_unit.to_string()),
            baseline_height: Some(params.baseline_height.to_string()),
        }
    }
}

/// Parse a non-negative integer from text.
///
/// The text must survive a round trip through integer parsing unchanged, so
/// `"07"`, `"+7"`, `" 7"` and `"7.0"` are all rejected.
pub fn parse_integer(field: &'static str, value: &str) -> Result<u32, InvalidParameter> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| InvalidParameter::NotAnInteger(field, value.to_string()))?;
    if parsed.to_string() != value {
        return Err(InvalidParameter::NotAnInteger(field, value.to_string()));
    }
    if parsed < 0 {
        return Err(InvalidParameter::Negative(field, parsed));
    }
    u32::try_from(parsed).map_err(|_| InvalidParameter::OutOfRange(field, parsed))
}
