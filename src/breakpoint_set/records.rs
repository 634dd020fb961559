// gridpak/src/breakpoint_set/records.rs

use super::breakpoint_set::BreakpointSet;
use super::errors::{BreakpointSetError, RecordsError};
use crate::breakpoint::{Breakpoint, GridParams, Unit};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Flat export of one breakpoint, stored and derived fields alike.
/// An unbounded `upper_bound` is `None`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointRecord {
    pub min_width: u32,
    pub column_count: u32,
    pub column_padding_width: u32,
    pub column_padding_unit: Unit,
    pub gutter_width: u32,
    pub gutter_unit: Unit,
    pub baseline_height: u32,
    #[serde(default)]
    pub column_width: i64,
    #[serde(default)]
    pub viewport_width: Option<u32>,
    #[serde(default)]
    pub lower_bound: u32,
    #[serde(default)]
    pub upper_bound: Option<u32>,
    #[serde(default)]
    pub position: usize,
    #[serde(default)]
    pub current: bool,
}

impl BreakpointRecord {
    pub fn params(&self) -> GridParams {
        GridParams {
            min_width: self.min_width,
            column_count: self.column_count,
            column_padding_width: self.column_padding_width,
            column_padding_unit: self.column_padding_unit,
            gutter_width: self.gutter_width,
            gutter_unit: self.gutter_unit,
            baseline_height: self.baseline_height,
        }
    }
}

impl From<&Breakpoint> for BreakpointRecord {
    fn from(breakpoint: &Breakpoint) -> Self {
        let params = breakpoint.params();
        Self {
            min_width: params.min_width,
            column_count: params.column_count,
            column_padding_width: params.column_padding_width,
            column_padding_unit: params.column_padding_unit,
            gutter_width: params.gutter_width,
            gutter_unit: params.gutter_unit,
            baseline_height: params.baseline_height,
            column_width: breakpoint.column_width(),
            viewport_width: breakpoint.viewport_width(),
            lower_bound: breakpoint.lower_bound(),
            upper_bound: breakpoint.upper_bound(),
            position: breakpoint.position(),
            current: breakpoint.is_current(),
        }
    }
}

impl BreakpointSet {
    pub fn to_records(&self) -> Vec<BreakpointRecord> {
        self.iter().map(BreakpointRecord::from).collect()
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, RecordsError> {
        let records = self.to_records();
        let json = if pretty {
            serde_json::to_string_pretty(&records)?
        } else {
            serde_json::to_string(&records)?
        };
        Ok(json)
    }

    pub fn write_json<W: Write>(&self, writer: W, pretty: bool) -> Result<(), RecordsError> {
        let records = self.to_records();
        if pretty {
            serde_json::to_writer_pretty(writer, &records)?;
        } else {
            serde_json::to_writer(writer, &records)?;
        }
        Ok(())
    }

    /// One header row, then one row per breakpoint. Unbounded upper bounds
    /// and missing viewport widths are empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), RecordsError> {
        let mut writer = csv::Writer::from_writer(writer);
        for record in self.to_records() {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Rebuild a set from exported records.
    ///
    /// Stored fields are validated and `min_width` must be unique. Bounds and
    /// positions are recomputed rather than trusted, cached column widths are
    /// recomputed for their recorded viewport width, and the record flagged
    /// current becomes current (the widest one when none is flagged).
    pub fn from_records(records: &[BreakpointRecord]) -> Result<Self, RecordsError> {
        let flagged: Vec<u32> = records
            .iter()
            .filter(|record| record.current)
            .map(|record| record.min_width)
            .collect();
        if flagged.len() > 1 {
            return Err(RecordsError::MultipleCurrent(flagged.len()));
        }
        let mut set = BreakpointSet::new();
        for (index, record) in records.iter().enumerate() {
            let mut breakpoint = Breakpoint::new(record.params())
                .map_err(|e| RecordsError::InvalidRecord(index, BreakpointSetError::from(e)))?;
            breakpoint.restore_viewport(record.viewport_width);
            set.add(breakpoint)
                .map_err(|e| RecordsError::InvalidRecord(index, e))?;
        }
        match flagged.first() {
            Some(&min_width) => {
                if let Some(position) = set.position_of(min_width) {
                    set.set_current(position)
                        .map_err(|e| RecordsError::InvalidRecord(position, e))?;
                }
            }
            None if !set.is_empty() => {
                warn!("No record is flagged current, selecting the widest breakpoint");
                let last = set.len() - 1;
                set.set_current(last)
                    .map_err(|e| RecordsError::InvalidRecord(last, e))?;
            }
            None => {}
        }
        debug!("Loaded {} breakpoints from records", set.len());
        Ok(set)
    }

    pub fn from_json<R: Read>(reader: R) -> Result<Self, RecordsError> {
        let records: Vec<BreakpointRecord> = serde_json::from_reader(reader)?;
        Self::from_records(&records)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, RecordsError> {
        let path = path.as_ref();
        info!("Reading breakpoints from {}", path.display());
        let file = File::open(path)?;
        Self::from_json(BufReader::new(file))
    }
}
