//! Per-facet preference resolution. Each facet's sources are listed in
//! precedence order and tried in sequence, short-circuiting on the
//! first hit; the hard fallback constant sits outside the list.

use tracing::trace;

use crate::components::Components;
use crate::facets::{HourCycle, MeasurementSystem, TemperatureUnit};
use crate::keywords;
use crate::preferences::Preferences;
use crate::provider::LocaleData;

pub(crate) const FALLBACK_CALENDAR: &str = "gregorian";
pub(crate) const FALLBACK_COLLATION: &str = "standard";
pub(crate) const FALLBACK_NUMBERING_SYSTEM: &str = "latn";
pub(crate) const FALLBACK_FIRST_WEEKDAY: u32 = 1; // Sunday
pub(crate) const FALLBACK_MIN_DAYS: u32 = 1;

/// Evaluates candidate sources in order, stopping at the first hit.
fn first_match<T, const N: usize>(sources: [&dyn Fn() -> Option<T>; N]) -> Option<T> {
    sources.into_iter().find_map(|source| source())
}

pub(crate) struct Resolver<'a> {
    pub identifier: &'a str,
    pub components: &'a Components,
    pub prefs: &'a Preferences,
    pub data: &'a dyn LocaleData,
}

impl Resolver<'_> {
    fn keyword(&self, key: &str) -> Option<String> {
        keywords::keyword_value(self.identifier, key)
    }

    pub fn calendar(&self) -> String {
        first_match([
            &|| self.keyword("calendar").filter(|v| v != "default"),
            &|| {
                self.data
                    .default_calendars(self.identifier)
                    .into_iter()
                    .next()
            },
        ])
        .unwrap_or_else(|| FALLBACK_CALENDAR.to_string())
    }

    pub fn collation(&self) -> String {
        self.keyword("collation")
            .filter(|v| v != "default")
            .unwrap_or_else(|| FALLBACK_COLLATION.to_string())
    }

    /// Identifier selecting the collator: the locale itself, with any
    /// preference-supplied order folded in as a keyword.
    pub fn collator_identifier(&self) -> String {
        if self.keyword("collation").is_some() {
            return self.identifier.to_string();
        }
        match &self.prefs.collation_order {
            Some(order) => keywords::with_keyword_value(self.identifier, "collation", order),
            None => self.identifier.to_string(),
        }
    }

    pub fn measurement_system(&self) -> MeasurementSystem {
        first_match([
            &|| self.keyword("measure").and_then(|v| MeasurementSystem::from_keyword(&v)),
            &|| self.prefs.measurement_system,
            &|| self.data.measurement_system(self.identifier),
        ])
        .unwrap_or(MeasurementSystem::Metric)
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        first_match([
            &|| self.prefs.temperature_unit,
            &|| {
                self.data
                    .uses_fahrenheit(self.identifier)
                    .then_some(TemperatureUnit::Fahrenheit)
            },
        ])
        .unwrap_or(TemperatureUnit::Celsius)
    }

    pub fn hour_cycle(&self) -> HourCycle {
        let resolved = first_match([
            &|| self.keyword("hours").and_then(|v| HourCycle::from_keyword(&v)),
            &|| self.prefs.hour_cycle,
            &|| {
                self.components
                    .keyword("hours")
                    .and_then(HourCycle::from_keyword)
            },
            &|| {
                // Probe the region alone, through a synthetic
                // undetermined-language identifier.
                let region = self.region()?;
                self.data.hour_cycle_for_region(&region)
            },
            &|| self.data.hour_cycle(self.identifier),
        ])
        .unwrap_or(HourCycle::H23);
        trace!(identifier = self.identifier, hour_cycle = resolved.as_str(), "resolved hour cycle");
        resolved
    }

    fn weekday_keyword_number(value: &str) -> Option<u32> {
        // 1-based, Sunday first.
        match value {
            "sun" => Some(1),
            "mon" => Some(2),
            "tue" => Some(3),
            "wed" => Some(4),
            "thu" => Some(5),
            "fri" => Some(6),
            "sat" => Some(7),
            _ => None,
        }
    }

    pub fn first_weekday(&self, calendar: &str) -> u32 {
        first_match([
            &|| self.keyword("fw").and_then(|v| Self::weekday_keyword_number(&v)),
            &|| self.prefs.first_weekday.get(calendar).copied().filter(|d| (1..=7).contains(d)),
            &|| self.data.first_weekday(self.identifier),
        ])
        .unwrap_or(FALLBACK_FIRST_WEEKDAY)
    }

    pub fn min_days_in_first_week(&self, calendar: &str) -> u32 {
        first_match([
            &|| {
                self.prefs
                    .min_days_in_first_week
                    .get(calendar)
                    .copied()
                    .filter(|d| (1..=7).contains(d))
            },
            &|| self.data.min_days_in_first_week(self.identifier),
        ])
        .unwrap_or(FALLBACK_MIN_DAYS)
    }

    pub fn numbering_system(&self) -> String {
        first_match([
            &|| {
                self.keyword("numbers")
                    .and_then(|_| self.data.resolve_numbering_system(self.identifier))
            },
            &|| self.data.default_numbering_system(self.identifier),
        ])
        .unwrap_or_else(|| FALLBACK_NUMBERING_SYSTEM.to_string())
    }

    /// Union of Latin, the resolved default, and the systems reached
    /// by probing the variant keywords.
    pub fn available_numbering_systems(&self) -> Vec<String> {
        let mut out: Vec<String> = vec![FALLBACK_NUMBERING_SYSTEM.to_string()];
        let add = |system: Option<String>, out: &mut Vec<String>| {
            if let Some(system) = system {
                if !out.contains(&system) {
                    out.push(system);
                }
            }
        };
        add(self.data.default_numbering_system(self.identifier), &mut out);
        for probe in ["default", "native", "traditional", "finance"] {
            let probed = keywords::with_keyword_value(self.identifier, "numbers", probe);
            add(self.data.resolve_numbering_system(&probed), &mut out);
        }
        out
    }

    /// Region facet. A subdivision-style `rg` keyword value wins; its
    /// first two characters are the containing region.
    pub fn region(&self) -> Option<String> {
        first_match([
            &|| {
                let rg = self.keyword("rg")?;
                if rg.len() >= 2 && rg.is_char_boundary(2) {
                    Some(rg[..2].to_ascii_uppercase())
                } else {
                    None
                }
            },
            &|| self.components.region_code().map(str::to_string),
        ])
    }
}
