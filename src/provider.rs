//! The locale data service seam. Everything the core consumes from the
//! underlying data tables goes through [`LocaleData`], so tests can
//! substitute instrumented probes and the production path can ride on
//! ICU4X (see [`crate::icu_data::IcuLocaleData`]).

use crate::facets::{HourCycle, MeasurementSystem, NumberStyle};
use crate::formatter::NumberFormatterHandle;

/// What kind of code a display-name lookup names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// A full locale identifier ("English (United Arab Emirates)").
    Identifier,
    Language,
    Script,
    Region,
    Variant,
    Calendar,
    Collation,
    Currency,
}

/// Outcome of a display-name lookup.
///
/// `Fallback` is the "default" sentinel: the service produced a name,
/// but from generic data rather than the requested display language.
/// The resolver treats it as a miss except on the sanctioned retry
/// from a full-identifier lookup down to a language-only lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOutcome {
    Missing,
    Fallback(String),
    Localized(String),
}

impl NameOutcome {
    pub fn localized(self) -> Option<String> {
        match self {
            NameOutcome::Localized(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelimiterKind {
    QuotationBegin,
    QuotationEnd,
    AlternateQuotationBegin,
    AlternateQuotationEnd,
}

/// Capabilities the core consumes from the locale data service.
///
/// Every method is best-effort: `None` or an empty list means the
/// service has nothing for that query, never that the query itself was
/// an error. Identifier arguments are ICU-style canonical strings
/// unless noted otherwise.
pub trait LocaleData: Send + Sync {
    /// Canonical-form conversion. `None` when the identifier cannot be
    /// canonicalized; callers fall back to the input unchanged.
    fn canonicalize(&self, identifier: &str) -> Option<String>;

    /// Likely-subtag maximization ("en" -> "en_Latn_US").
    fn maximize(&self, identifier: &str) -> Option<String>;

    /// Names the `kind` part embedded in `identifier`, localized for
    /// `display_language`. For `Currency` the identifier is the bare
    /// ISO 4217 code.
    fn display_name(&self, kind: NameKind, identifier: &str, display_language: &str)
    -> NameOutcome;

    /// Generic short-key to legacy-key mapping, consulted after the
    /// codec's fixed table.
    fn legacy_key(&self, short: &str) -> Option<String>;

    /// Preferred calendars for the identifier, most preferred first.
    fn default_calendars(&self, identifier: &str) -> Vec<String>;

    fn measurement_system(&self, identifier: &str) -> Option<MeasurementSystem>;

    /// Whether the locale's weather usage names Fahrenheit explicitly.
    fn uses_fahrenheit(&self, identifier: &str) -> bool;

    /// Default hour cycle for the full identifier.
    fn hour_cycle(&self, identifier: &str) -> Option<HourCycle>;

    /// Hour cycle implied by a region alone, probed through a
    /// synthetic undetermined-language identifier.
    fn hour_cycle_for_region(&self, region: &str) -> Option<HourCycle>;

    /// First weekday, 1-based with 1 = Sunday.
    fn first_weekday(&self, identifier: &str) -> Option<u32>;

    fn min_days_in_first_week(&self, identifier: &str) -> Option<u32>;

    /// Default numbering system for the identifier, ignoring any
    /// `numbers` keyword it carries.
    fn default_numbering_system(&self, identifier: &str) -> Option<String>;

    /// Resolves the numbering system the identifier asks for,
    /// honoring the `numbers` keyword including the variant keywords
    /// (default, native, traditional, finance).
    fn resolve_numbering_system(&self, identifier: &str) -> Option<String>;

    /// Numbering systems valid for a bare language, ordered; index 0
    /// is the default.
    fn valid_numbering_systems(&self, language: &str) -> Vec<String>;

    fn currency_for_region(&self, region: &str) -> Option<String>;

    /// Localized ISO 4217 currency name.
    fn currency_name(&self, code: &str, display_language: &str) -> NameOutcome;

    fn delimiter(&self, kind: DelimiterKind, identifier: &str) -> Option<String>;

    /// Identifiers the service has dedicated data for.
    fn available_identifiers(&self) -> Vec<String>;

    /// Creates a numeric formatter handle for the style, or `None`
    /// when the locale cannot back one.
    fn number_formatter(&self, style: NumberStyle, identifier: &str)
    -> Option<NumberFormatterHandle>;

    /// Windows LCID pass-through. Not derived locally.
    fn windows_locale_code(&self, identifier: &str) -> Option<u32>;

    /// Exemplar character set pass-through. Not derived locally.
    fn exemplar_character_set(&self, identifier: &str) -> Option<String>;
}
