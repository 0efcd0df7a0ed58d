//! Per-instance facet cache. Each slot is filled at most once and then
//! only read; the owning locale serializes access through one mutex.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::facets::{HourCycle, MeasurementSystem, NumberStyle, TemperatureUnit};
use crate::formatter::NumberFormatterHandle;
use crate::provider::{DelimiterKind, NameKind};

/// Tri-state cache slot. Distinguishes "never tried" from "tried and
/// there is legitimately no value", which a plain Option cannot.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Slot<T> {
    Unset,
    Absent,
    Present(T),
}

// Hand-written so the default does not demand T: Default.
impl<T> Default for Slot<T> {
    fn default() -> Self {
        Slot::Unset
    }
}

impl<T: Clone> Slot<T> {
    /// Reads the slot, computing and storing the terminal state on
    /// first use. Safe to call on an already-filled slot; `compute`
    /// only runs when the slot is `Unset`.
    pub fn get_or_fill(&mut self, compute: impl FnOnce() -> Option<T>) -> Option<T> {
        match self {
            Slot::Present(value) => Some(value.clone()),
            Slot::Absent => None,
            Slot::Unset => match compute() {
                Some(value) => {
                    *self = Slot::Present(value.clone());
                    Some(value)
                }
                None => {
                    *self = Slot::Absent;
                    None
                }
            },
        }
    }

    #[cfg(test)]
    pub fn is_computed(&self) -> bool {
        !matches!(self, Slot::Unset)
    }
}

#[derive(Debug, Default)]
pub(crate) struct FacetCache {
    pub calendar: Slot<String>,
    pub collation: Slot<String>,
    pub collator_identifier: Slot<String>,
    pub measurement: Slot<MeasurementSystem>,
    pub temperature: Slot<TemperatureUnit>,
    pub hour_cycle: Slot<HourCycle>,
    pub first_weekday: Slot<u32>,
    pub min_days_in_first_week: Slot<u32>,
    pub numbering_system: Slot<String>,
    pub available_numbering_systems: Slot<Vec<String>>,
    pub region: Slot<String>,
    pub exemplar_character_set: Slot<String>,
    pub windows_locale_code: Slot<u32>,
    /// Keyed display names; entry presence marks the computed state.
    pub display_names: FxHashMap<(NameKind, String), Option<String>>,
    pub delimiters: FxHashMap<DelimiterKind, Option<String>>,
    /// Formatter handles per numeric style. `None` records a failed
    /// creation so it is not retried.
    pub formatters: FxHashMap<NumberStyle, Option<NumberFormatterHandle>>,
}

impl FacetCache {
    /// Drops every formatter handle. Called exactly once, from the
    /// owning locale's teardown.
    pub fn release_formatters(&mut self) {
        if !self.formatters.is_empty() {
            trace!(count = self.formatters.len(), "releasing number formatter handles");
            self.formatters.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_fills_once_with_value() {
        let mut slot = Slot::Unset;
        let mut calls = 0;
        let first = slot.get_or_fill(|| {
            calls += 1;
            Some(7)
        });
        assert_eq!(first, Some(7));
        let second = slot.get_or_fill(|| {
            calls += 1;
            Some(9)
        });
        assert_eq!(second, Some(7));
        assert_eq!(calls, 1);
    }

    #[test]
    fn slot_records_absence() {
        let mut slot: Slot<u32> = Slot::Unset;
        let mut calls = 0;
        assert_eq!(
            slot.get_or_fill(|| {
                calls += 1;
                None
            }),
            None
        );
        assert_eq!(
            slot.get_or_fill(|| {
                calls += 1;
                Some(3)
            }),
            None
        );
        assert_eq!(calls, 1);
        assert!(slot.is_computed());
    }
}
