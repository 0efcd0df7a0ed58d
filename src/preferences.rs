//! Caller-supplied preference overrides. The record is captured once at
//! construction time and read-only afterwards; resolvers never consult
//! ambient process state.

use rustc_hash::FxHashMap;

use crate::components::Components;
use crate::facets::{HourCycle, MeasurementSystem, TemperatureUnit};

#[derive(Debug, Clone, Default)]
pub struct Preferences {
    /// Preferred languages, most preferred first, as identifiers.
    pub languages: Vec<String>,
    /// Preferred locale identifier.
    pub locale: Option<String>,
    /// Country override applied when the preferred locale has no region.
    pub country: Option<String>,
    /// First weekday per calendar identifier, 1-based with 1 = Sunday.
    pub first_weekday: FxHashMap<String, u32>,
    /// Minimum days in the first week, per calendar identifier.
    pub min_days_in_first_week: FxHashMap<String, u32>,
    pub collation_order: Option<String>,
    pub measurement_system: Option<MeasurementSystem>,
    pub temperature_unit: Option<TemperatureUnit>,
    pub hour_cycle: Option<HourCycle>,
    /// Raw format-string and symbol overrides, passed through to the
    /// formatting layers untouched.
    pub format_overrides: FxHashMap<String, String>,
}

impl Preferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the process's reported locale preferences from the
    /// POSIX environment. This is the only ambient lookup in the crate
    /// and it happens exactly once, here.
    pub fn current() -> Self {
        let mut prefs = Preferences::default();

        if let Some(list) = std::env::var_os("LANGUAGE") {
            for entry in list.to_string_lossy().split(':') {
                if let Some(id) = posix_entry_to_identifier(entry) {
                    if !prefs.languages.contains(&id) {
                        prefs.languages.push(id);
                    }
                }
            }
        }

        prefs.locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var_os(var))
            .find_map(|value| posix_entry_to_identifier(&value.to_string_lossy()));

        if prefs.languages.is_empty() {
            if let Some(id) = &prefs.locale {
                prefs.languages.push(id.clone());
            }
        }

        prefs
    }

    /// Effective preferred-language list: explicit entries first, then
    /// the preferred locale itself.
    pub(crate) fn effective_languages(&self) -> Vec<String> {
        let mut out = self.languages.clone();
        if let Some(id) = &self.locale {
            if !out.contains(id) {
                out.push(id.clone());
            }
        }
        out
    }
}

// Strips the codeset and modifier from a POSIX locale entry
// ("en_US.UTF-8@euro" -> "en_US") and validates the remainder.
fn posix_entry_to_identifier(entry: &str) -> Option<String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }
    let end = entry
        .find(['.', '@'])
        .unwrap_or(entry.len());
    let bare = &entry[..end];
    Components::from_identifier(bare).map(|c| c.identifier())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posix_entries() {
        assert_eq!(posix_entry_to_identifier("en_US.UTF-8").as_deref(), Some("en_US"));
        assert_eq!(posix_entry_to_identifier("de_DE@euro").as_deref(), Some("de_DE"));
        assert_eq!(posix_entry_to_identifier("C").as_deref(), Some("en_US_POSIX"));
        assert_eq!(posix_entry_to_identifier(""), None);
    }

    #[test]
    fn effective_languages_appends_locale() {
        let prefs = Preferences {
            languages: vec!["fr_FR".to_string()],
            locale: Some("de_DE".to_string()),
            ..Default::default()
        };
        assert_eq!(prefs.effective_languages(), vec!["fr_FR", "de_DE"]);
    }
}
