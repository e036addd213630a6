//! Legend derivation and mobile sheet visibility.
//!
//! Counts are recomputed from the room slice on every call so the legend
//! always reflects the rooms currently shown.

#[cfg(test)]
#[path = "legend_test.rs"]
mod legend_test;

use crate::room::{Room, RoomStatus};
use crate::style::{LegendDescriptor, legend_descriptors};

/// Number of rooms with `status`.
#[must_use]
pub fn count_status(rooms: &[Room], status: &RoomStatus) -> usize {
    rooms.iter().filter(|r| &r.status == status).count()
}

/// One legend row with its live count.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub descriptor: LegendDescriptor,
    pub count: usize,
}

/// Legend rows in display order with counts taken from `rooms`.
#[must_use]
pub fn legend_counts(rooms: &[Room]) -> Vec<LegendEntry> {
    legend_descriptors()
        .into_iter()
        .map(|descriptor| {
            let count = count_status(rooms, &descriptor.status);
            LegendEntry { descriptor, count }
        })
        .collect()
}

/// Outcome of toggling the legend sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendToggle {
    /// The caller owns the flag and must store this new value.
    External(bool),
    /// The sheet's own state was flipped.
    Internal(bool),
}

/// Open state for the narrow-screen legend bottom sheet.
///
/// When a shared flag is supplied it is authoritative; otherwise the sheet
/// tracks its own state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendSheet {
    internal_open: bool,
}

impl LegendSheet {
    #[must_use]
    pub fn is_open(&self, external: Option<bool>) -> bool {
        external.unwrap_or(self.internal_open)
    }

    pub fn toggle(&mut self, external: Option<bool>) -> LegendToggle {
        match external {
            Some(open) => LegendToggle::External(!open),
            None => {
                self.internal_open = !self.internal_open;
                LegendToggle::Internal(self.internal_open)
            }
        }
    }

    /// Close the sheet; returns the toggle the caller must apply.
    pub fn close(&mut self, external: Option<bool>) -> LegendToggle {
        match external {
            Some(_) => LegendToggle::External(false),
            None => {
                self.internal_open = false;
                LegendToggle::Internal(false)
            }
        }
    }
}
