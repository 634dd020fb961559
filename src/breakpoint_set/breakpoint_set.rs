//! Ordered breakpoint collection
//!
//! Members are kept sorted ascending by `min_width`, which is unique.
//! After every structural change the derived ranges are rebuilt so that:
//! - the first member starts at 0
//! - every other member starts at its own `min_width`
//! - every member but the last ends at the next member's `min_width`
//! - the last member is unbounded

use super::errors::BreakpointSetError;
use crate::breakpoint::{Breakpoint, BreakpointBuilder, ParamUpdate, Unit};
use log::{debug, trace};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    breakpoints: Vec<Breakpoint>,
    current: Option<usize>,
}

impl BreakpointSet {
    /// An empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The three stock breakpoints (100, 500 and 960 wide) with the widest
    /// one current
    pub fn with_default_seed() -> Result<Self, BreakpointSetError> {
        Self::from_breakpoints([
            BreakpointBuilder::default()
                .min_width(100)
                .column_count(4)
                .column_padding(5, Unit::Pixels)
                .gutter(8, Unit::Pixels)
                .baseline_height(22)
                .build()?,
            BreakpointBuilder::default()
                .min_width(500)
                .column_count(8)
                .column_padding(5, Unit::Pixels)
                .gutter(8, Unit::Pixels)
                .baseline_height(22)
                .build()?,
            BreakpointBuilder::default()
                .min_width(960)
                .column_count(16)
                .column_padding(10, Unit::Pixels)
                .gutter(8, Unit::Pixels)
                .baseline_height(22)
                .build()?,
        ])
    }

    /// Collect breakpoints in any order. The widest one becomes current.
    pub fn from_breakpoints<I>(breakpoints: I) -> Result<Self, BreakpointSetError>
    where
        I: IntoIterator<Item = Breakpoint>,
    {
        let mut set = Self::new();
        for breakpoint in breakpoints {
            set.add(breakpoint)?;
        }
        if !set.is_empty() {
            set.set_current(set.len() - 1)?;
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    /// Members in ascending `min_width` order
    pub fn iter(&self) -> std::slice::Iter<'_, Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Breakpoint> {
        self.breakpoints.get(position)
    }

    pub fn position_of(&self, min_width: u32) -> Option<usize> {
        self.breakpoints
            .binary_search_by_key(&min_width, |breakpoint| breakpoint.min_width())
            .ok()
    }

    pub fn current(&self) -> Option<&Breakpoint> {
        self.current.and_then(|position| self.breakpoints.get(position))
    }

    pub fn current_position(&self) -> Option<usize> {
        self.current
    }

    /// Make the member at `position` current
    pub fn set_current(&mut self, position: usize) -> Result<&Breakpoint, BreakpointSetError> {
        if position >= self.breakpoints.len() {
            return Err(BreakpointSetError::NoSuchBreakpoint(position));
        }
        self.move_current(position);
        Ok(&self.breakpoints[position])
    }

    /// Insert a breakpoint in order.
    ///
    /// While a current member is tracked (or the set is empty) the new
    /// breakpoint takes over as current. Returns its position.
    pub fn add(&mut self, breakpoint: Breakpoint) -> Result<usize, BreakpointSetError> {
        breakpoint.params().validate()?;
        let min_width = breakpoint.min_width();
        if self.position_of(min_width).is_some() {
            return Err(BreakpointSetError::DuplicateKey(min_width));
        }
        let position = self
            .breakpoints
            .partition_point(|existing| existing.min_width() < min_width);
        debug!("Adding breakpoint {} at position {}", min_width, position);
        let takes_current = self.current.is_some() || self.breakpoints.is_empty();
        self.breakpoints.insert(position, breakpoint);
        self.current = match self.current {
            _ if takes_current => Some(position),
            Some(current) if current >= position => Some(current + 1),
            current => current,
        };
        self.recompute_bounds();
        Ok(position)
    }

    /// Remove the member at `position`. Removing the current member leaves
    /// no member current until the caller picks one.
    pub fn remove(&mut self, position: usize) -> Result<Breakpoint, BreakpointSetError> {
        if position >= self.breakpoints.len() {
            return Err(BreakpointSetError::NoSuchBreakpoint(position));
        }
        let mut removed = self.breakpoints.remove(position);
        debug!(
            "Removed breakpoint {} from position {}",
            removed.min_width(),
            position
        );
        self.current = match self.current {
            Some(current) if current == position => None,
            Some(current) if current > position => Some(current - 1),
            current => current,
        };
        removed.set_current(false);
        self.recompute_bounds();
        Ok(removed)
    }

    pub fn remove_min_width(&mut self, min_width: u32) -> Result<Breakpoint, BreakpointSetError> {
        let position = self
            .position_of(min_width)
            .ok_or(BreakpointSetError::NoSuchMinWidth(min_width))?;
        self.remove(position)
    }

    /// Rebuild positions, ranges and current flags from the member order.
    /// Calling it again without a structural change is a no-op.
    pub fn recompute_bounds(&mut self) {
        let count = self.breakpoints.len();
        let next_min_widths: Vec<Option<u32>> = (0..count)
            .map(|position| {
                self.breakpoints
                    .get(position + 1)
                    .map(|next| next.min_width())
            })
            .collect();
        for (position, (breakpoint, upper_bound)) in self
            .breakpoints
            .iter_mut()
            .zip(next_min_widths)
            .enumerate()
        {
            let lower_bound = if position == 0 {
                0
            } else {
                breakpoint.min_width()
            };
            breakpoint.set_bounds(position, lower_bound, upper_bound);
            breakpoint.set_current(self.current == Some(position));
        }
        trace!("Recomputed bounds for {} breakpoints", count);
    }

    /// Step the current member at most one neighbor toward `width`.
    ///
    /// Below the current range moves to the previous member, above a bounded
    /// range moves to the next one. With nothing current, the member whose
    /// range covers `width` is selected directly.
    pub fn select_current(&mut self, width: u32) -> Option<&Breakpoint> {
        let Some(position) = self.current else {
            let position = self.position_for_width(width)?;
            self.move_current(position);
            return self.current();
        };
        let current = self.breakpoints.get(position)?;
        let next = if current.contains(width) {
            None
        } else if width < current.lower_bound() {
            position.checked_sub(1)
        } else {
            Some(position + 1).filter(|&next| next < self.breakpoints.len())
        };
        if let Some(next) = next {
            trace!("Width {} moves current from {} to {}", width, position, next);
            self.move_current(next);
        }
        self.current()
    }

    /// Repeat `select_current` until `width` lies in the current range, for
    /// widths that jump across several breakpoints at once
    pub fn settle_current(&mut self, width: u32) -> Option<&Breakpoint> {
        for _ in 0..=self.breakpoints.len() {
            let before = self.current;
            self.select_current(width);
            if self.current == before {
                break;
            }
        }
        self.current()
    }

    /// Position of the member whose range covers `width`. On a shared
    /// boundary the wider breakpoint wins.
    pub fn position_for_width(&self, width: u32) -> Option<usize> {
        self.breakpoints
            .partition_point(|breakpoint| breakpoint.lower_bound() <= width)
            .checked_sub(1)
    }

    /// Recompute the current member's column width
    pub fn update_column_width(&mut self, viewport_width: u32) -> Option<i64> {
        let position = self.current?;
        self.breakpoints
            .get_mut(position)
            .map(|breakpoint| breakpoint.update_column_width(viewport_width))
    }

    /// Edit the member at `position` in place.
    ///
    /// A changed `min_width` must stay unique; the set is re-sorted and its
    /// bounds rebuilt, and the edited member keeps its current flag.
    pub fn set_parameters(
        &mut self,
        position: usize,
        update: &ParamUpdate,
    ) -> Result<&Breakpoint, BreakpointSetError> {
        let breakpoint = self
            .breakpoints
            .get(position)
            .ok_or(BreakpointSetError::NoSuchBreakpoint(position))?;
        let old_min_width = breakpoint.min_width();
        let min_width_changed = update
            .min_width
            .is_some_and(|min_width| min_width != old_min_width);
        if let Some(min_width) = update.min_width.filter(|_| min_width_changed) {
            if self.position_of(min_width).is_some() {
                return Err(BreakpointSetError::DuplicateKey(min_width));
            }
        }
        self.breakpoints[position].set_parameters(update)?;
        if !min_width_changed {
            return Ok(&self.breakpoints[position]);
        }
        let new_min_width = self.breakpoints[position].min_width();
        self.breakpoints.sort_by_key(|breakpoint| breakpoint.min_width());
        self.current = self
            .breakpoints
            .iter()
            .position(|breakpoint| breakpoint.is_current());
        self.recompute_bounds();
        let position = self
            .position_of(new_min_width)
            .ok_or(BreakpointSetError::NoSuchMinWidth(new_min_width))?;
        Ok(&self.breakpoints[position])
    }

    fn move_current(&mut self, position: usize) {
        if let Some(previous) = self.current.and_then(|p| self.breakpoints.get_mut(p)) {
            previous.set_current(false);
        }
        if let Some(next) = self.breakpoints.get_mut(position) {
            next.set_current(true);
            self.current = Some(position);
        }
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = &'a Breakpoint;
    type IntoIter = std::slice::Iter<'a, Breakpoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::InvalidParameter;

    fn bp(min_width: u32) -> Breakpoint {
        BreakpointBuilder::default()
            .min_width(min_width)
            .build()
            .unwrap()
    }

    fn assert_bounds_contract(set: &BreakpointSet) {
        let count = set.len();
        for (i, breakpoint) in set.iter().enumerate() {
            assert_eq!(breakpoint.position(), i);
            if i == 0 {
                assert_eq!(breakpoint.lower_bound(), 0);
            } else {
                assert_eq!(breakpoint.lower_bound(), breakpoint.min_width());
                assert!(set.get(i - 1).unwrap().min_width() < breakpoint.min_width());
            }
            if i == count - 1 {
                assert_eq!(breakpoint.upper_bound(), None);
            } else {
                assert_eq!(
                    breakpoint.upper_bound(),
                    Some(set.get(i + 1).unwrap().min_width())
                );
            }
        }
        let current_flags = set.iter().filter(|b| b.is_current()).count();
        assert_eq!(current_flags, usize::from(set.current().is_some()));
    }

    fn min_widths(set: &BreakpointSet) -> Vec<u32> {
        set.iter().map(|b| b.min_width()).collect()
    }

    #[test]
    fn test_default_seed() {
        let set = BreakpointSet::with_default_seed().unwrap();
        assert_eq!(min_widths(&set), vec![100, 500, 960]);
        assert_eq!(set.current_position(), Some(2));
        assert!(set.get(2).unwrap().is_current());
        assert_eq!(set.get(0).unwrap().column_count(), 4);
        assert_eq!(set.get(1).unwrap().column_padding_width(), 5);
        assert_bounds_contract(&set);
    }

    #[test]
    fn test_single_member_bounds() {
        let mut set = BreakpointSet::new();
        set.add(bp(640)).unwrap();
        let only = set.get(0).unwrap();
        assert_eq!(only.lower_bound(), 0);
        assert_eq!(only.upper_bound(), None);
        assert_eq!(only.position(), 0);
        assert!(only.is_current());
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let mut ascending = BreakpointSet::new();
        for min_width in [100, 500, 960] {
            ascending.add(bp(min_width)).unwrap();
            assert_bounds_contract(&ascending);
        }
        let mut shuffled = BreakpointSet::new();
        for min_width in [960, 100, 500] {
            shuffled.add(bp(min_width)).unwrap();
            assert_bounds_contract(&shuffled);
        }
        assert_eq!(min_widths(&shuffled), vec![100, 500, 960]);
        let bounds = |set: &BreakpointSet| {
            set.iter()
                .map(|b| (b.lower_bound(), b.upper_bound(), b.position()))
                .collect::<Vec<_>>()
        };
        assert_eq!(bounds(&ascending), bounds(&shuffled));
        assert_eq!(
            bounds(&ascending),
            vec![(0, Some(500), 0), (500, Some(960), 1), (960, None, 2)]
        );
    }

    #[test]
    fn test_add_moves_current_to_new_breakpoint() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        let position = set.add(bp(300)).unwrap();
        assert_eq!(position, 1);
        assert_eq!(set.current_position(), Some(1));
        assert_eq!(set.current().unwrap().min_width(), 300);
        assert_bounds_contract(&set);
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        let before = set.clone();
        assert_eq!(set.add(bp(500)), Err(BreakpointSetError::DuplicateKey(500)));
        assert_eq!(set, before);
    }

    #[test]
    fn test_remove_middle_collapses_bounds() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        let removed = set.remove(1).unwrap();
        assert_eq!(removed.min_width(), 500);
        assert!(!removed.is_current());
        let first = set.get(0).unwrap();
        let last = set.get(1).unwrap();
        assert_eq!(first.upper_bound(), Some(960));
        assert_eq!(last.lower_bound(), 960);
        assert_eq!(last.position(), 1);
        assert_eq!(set.current_position(), Some(1));
        assert_bounds_contract(&set);
    }

    #[test]
    fn test_remove_current_clears_selection() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        set.remove_min_width(960).unwrap();
        assert_eq!(set.current(), None);
        assert_bounds_contract(&set);
        assert_eq!(set.get(1).unwrap().upper_bound(), None);

        // Adding while nothing is current leaves the selection to the caller
        set.add(bp(1200)).unwrap();
        assert_eq!(set.current(), None);

        assert_eq!(
            set.remove_min_width(960),
            Err(BreakpointSetError::NoSuchMinWidth(960))
        );
        assert_eq!(set.remove(7), Err(BreakpointSetError::NoSuchBreakpoint(7)));
    }

    #[test]
    fn test_remove_last_member() {
        let mut set = BreakpointSet::new();
        set.add(bp(100)).unwrap();
        set.remove(0).unwrap();
        assert!(set.is_empty());
        set.recompute_bounds();
        assert_eq!(set.select_current(500), None);
    }

    #[test]
    fn test_recompute_bounds_is_idempotent() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        set.add(bp(768)).unwrap();
        let once = set.clone();
        set.recompute_bounds();
        assert_eq!(set, once);
        set.recompute_bounds();
        assert_eq!(set, once);
    }

    #[test]
    fn test_select_current_single_step() {
        // Middle breakpoint covers 100..=960
        let mut set = BreakpointSet::from_breakpoints([bp(0), bp(100), bp(960)]).unwrap();
        set.set_current(1).unwrap();
        assert_eq!(set.select_current(50).unwrap().position(), 0);

        set.set_current(1).unwrap();
        assert_eq!(set.select_current(961).unwrap().position(), 2);

        set.set_current(1).unwrap();
        assert_eq!(set.select_current(960).unwrap().position(), 1);
        assert_eq!(set.select_current(100).unwrap().position(), 1);
        assert_bounds_contract(&set);
    }

    #[test]
    fn test_select_current_only_steps_once() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        set.set_current(0).unwrap();
        assert_eq!(set.select_current(2000).unwrap().min_width(), 500);
        assert_eq!(set.select_current(2000).unwrap().min_width(), 960);
        assert_eq!(set.select_current(2000).unwrap().min_width(), 960);
    }

    #[test]
    fn test_settle_current_crosses_several_breakpoints() {
        let mut set = BreakpointSet::from_breakpoints([bp(100), bp(500), bp(768), bp(960)]).unwrap();
        assert_eq!(set.settle_current(120).unwrap().min_width(), 100);
        assert_eq!(set.settle_current(1400).unwrap().min_width(), 960);
        assert_eq!(set.settle_current(800).unwrap().min_width(), 768);
        assert_bounds_contract(&set);
    }

    #[test]
    fn test_select_without_current_resolves_by_width() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        set.remove(2).unwrap();
        set.add(bp(960)).unwrap();
        assert_eq!(set.current(), None);
        assert_eq!(set.select_current(700).unwrap().min_width(), 500);
        assert_eq!(set.current_position(), Some(1));
    }

    #[test]
    fn test_position_for_width() {
        let set = BreakpointSet::with_default_seed().unwrap();
        assert_eq!(set.position_for_width(0), Some(0));
        assert_eq!(set.position_for_width(499), Some(0));
        assert_eq!(set.position_for_width(500), Some(1));
        assert_eq!(set.position_for_width(5000), Some(2));
        assert_eq!(BreakpointSet::new().position_for_width(10), None);

        let middle = set.get(1).unwrap();
        assert!(middle.contains(500));
        assert!(middle.contains(960));
        assert!(!middle.contains(499));
        assert!(set.get(2).unwrap().contains(u32::MAX));
    }

    #[test]
    fn test_update_column_width_of_current() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        assert_eq!(set.update_column_width(960), Some(32));
        assert_eq!(set.get(2).unwrap().column_width(), 32);
        assert_eq!(set.get(0).unwrap().viewport_width(), None);
    }

    #[test]
    fn test_set_parameters_resorts_on_min_width_change() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        let update = ParamUpdate {
            min_width: Some(50),
            ..Default::default()
        };
        let edited = set.set_parameters(2, &update).unwrap();
        assert_eq!(edited.position(), 0);
        assert!(edited.is_current());
        assert_eq!(min_widths(&set), vec![50, 100, 500]);
        assert_eq!(set.current_position(), Some(0));
        assert_bounds_contract(&set);
    }

    #[test]
    fn test_set_parameters_rejects_duplicate_and_invalid() {
        let mut set = BreakpointSet::with_default_seed().unwrap();
        let before = set.clone();
        let update = ParamUpdate {
            min_width: Some(100),
            ..Default::default()
        };
        assert_eq!(
            set.set_parameters(2, &update),
            Err(BreakpointSetError::DuplicateKey(100))
        );
        let update = ParamUpdate {
            column_count: Some(100),
            ..Default::default()
        };
        assert_eq!(
            set.set_parameters(0, &update),
            Err(BreakpointSetError::InvalidParameter(
                InvalidParameter::TooManyColumns(100)
            ))
        );
        assert_eq!(
            set.set_parameters(9, &update),
            Err(BreakpointSetError::NoSuchBreakpoint(9))
        );
        assert_eq!(set, before);

        // Re-stating the same min_width is not a collision
        let update = ParamUpdate {
            min_width: Some(960),
            column_count: Some(12),
            ..Default::default()
        };
        assert_eq!(set.set_parameters(2, &update).unwrap().column_count(), 12);
    }
}
