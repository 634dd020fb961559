//! Viewport session
//!
//! Owns a breakpoint set together with the simulated viewport width and
//! turns discrete edits (drag resizes, form edits, new and removed
//! breakpoints) into updates of the current breakpoint and its column
//! width. Every call runs to completion before the next one is accepted.

use crate::breakpoint::{Breakpoint, RawParams};
use crate::breakpoint_set::{BreakpointRecord, BreakpointSet, BreakpointSetError};
use crate::constants::{MIN_VIEWPORT_WIDTH, SNAP};
use log::{debug, info};

/// What a resize did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The snapped width matched the stored one, or there is no breakpoint
    /// to follow it
    Unchanged,
    /// Same breakpoint, new column width
    Resized { width: u32, column_width: i64 },
    /// The width crossed into another breakpoint's range
    Switched {
        width: u32,
        from: Option<usize>,
        to: usize,
        column_width: i64,
    },
}

/// Main session state
#[derive(Clone, Debug)]
pub struct GridSession {
    /// The breakpoints being designed
    grids: BreakpointSet,

    /// Current simulated viewport width (already snapped and clamped)
    viewport_width: u32,

    /// Widths snap to multiples of this (0 disables snapping)
    snap: u32,

    /// Lower clamp for the viewport width
    min_viewport_width: u32,
}

impl GridSession {
    /// Start a session at `viewport_width`. The breakpoint covering that
    /// width becomes current and its column width is computed.
    pub fn new(grids: BreakpointSet, viewport_width: u32) -> Self {
        Self::with_limits(grids, viewport_width, SNAP, MIN_VIEWPORT_WIDTH)
    }

    pub fn with_limits(
        grids: BreakpointSet,
        viewport_width: u32,
        snap: u32,
        min_viewport_width: u32,
    ) -> Self {
        let mut session = Self {
            grids,
            viewport_width: viewport_width.max(min_viewport_width),
            snap,
            min_viewport_width,
        };
        session.refresh();
        info!(
            "Session started at {}px with {} breakpoints",
            session.viewport_width,
            session.grids.len()
        );
        session
    }

    pub fn grids(&self) -> &BreakpointSet {
        &self.grids
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    pub fn current(&self) -> Option<&Breakpoint> {
        self.grids.current()
    }

    /// Snap and clamp a raw drag width the way the viewport widget does
    pub fn snap_width(&self, raw_width: u32) -> u32 {
        let width = raw_width.max(self.min_viewport_width);
        if self.snap == 0 {
            return width;
        }
        let snapped = width.saturating_add(self.snap / 2) / self.snap * self.snap;
        snapped.max(self.min_viewport_width)
    }

    /// Handle a drag of the viewport to `raw_width`
    pub fn resize(&mut self, raw_width: u32) -> ResizeOutcome {
        let width = self.snap_width(raw_width);
        if width == self.viewport_width {
            return ResizeOutcome::Unchanged;
        }
        self.viewport_width = width;
        let from = self.grids.current_position();
        let Some(column_width) = self.refresh() else {
            return ResizeOutcome::Unchanged;
        };
        match self.grids.current_position() {
            Some(to) if Some(to) != from => {
                debug!("Viewport {}px switched breakpoint {:?} -> {}", width, from, to);
                ResizeOutcome::Switched {
                    width,
                    from,
                    to,
                    column_width,
                }
            }
            _ => ResizeOutcome::Resized {
                width,
                column_width,
            },
        }
    }

    /// Apply a form edit to the current breakpoint and recompute its column
    /// width for the present viewport
    pub fn update_options(&mut self, raw: &RawParams) -> Result<&Breakpoint, BreakpointSetError> {
        let update = raw.parse()?;
        let position = self
            .grids
            .current_position()
            .ok_or(BreakpointSetError::NoCurrentBreakpoint)?;
        self.grids.set_parameters(position, &update)?;
        self.grids.update_column_width(self.viewport_width);
        self.grids
            .current()
            .ok_or(BreakpointSetError::NoCurrentBreakpoint)
    }

    /// Add a breakpoint from form input (missing fields take the model
    /// defaults). It becomes current. Returns its position.
    pub fn create_grid(&mut self, raw: &RawParams) -> Result<usize, BreakpointSetError> {
        let breakpoint = Breakpoint::from_raw(raw)?;
        let position = self.grids.add(breakpoint)?;
        self.grids.set_current(position)?;
        self.grids.update_column_width(self.viewport_width);
        info!("Created breakpoint at position {}", position);
        Ok(position)
    }

    /// Remove a breakpoint. When it was current, the breakpoint covering the
    /// viewport width takes over.
    pub fn remove(&mut self, position: usize) -> Result<Breakpoint, BreakpointSetError> {
        let removed = self.grids.remove(position)?;
        if self.grids.current().is_none() {
            self.refresh();
        }
        Ok(removed)
    }

    /// Form values for the current breakpoint
    pub fn options(&self) -> Option<RawParams> {
        self.grids.current().map(Breakpoint::options)
    }

    pub fn records(&self) -> Vec<BreakpointRecord> {
        self.grids.to_records()
    }

    fn refresh(&mut self) -> Option<i64> {
        self.grids.settle_current(self.viewport_width)?;
        self.grids.update_column_width(self.viewport_width)
    }
}
