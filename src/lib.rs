//! Locale facet resolution on top of the ICU4X data stack.
//!
//! A [`Locale`] is built from an identifier (plus optional
//! [`Preferences`] overrides) and lazily derives its facets: calendar,
//! collation, currency, numbering system, hour cycle, first weekday,
//! measurement and temperature units, delimiters, and display names
//! for codes. Each facet is computed at most once per instance and
//! cached.
//!
//! The companion algorithms canonicalize identifiers between their
//! string forms ([`identifier`]), codec keyword overrides
//! ([`keywords`]), and match an application's available localizations
//! against a user's language preferences ([`matcher`]).
//!
//! All locale data flows through the [`LocaleData`] trait;
//! [`IcuLocaleData`] is the ICU4X-backed production implementation.

mod cache;
pub mod components;
mod error;
pub mod facets;
pub mod formatter;
pub mod icu_data;
pub mod identifier;
pub mod keywords;
mod locale;
pub mod matcher;
mod names;
pub mod preferences;
pub mod provider;
mod resolver;

pub use components::Components;
pub use error::{Error, Result};
pub use facets::{HourCycle, MeasurementSystem, NumberStyle, TemperatureUnit};
pub use formatter::{NumberFormatterHandle, common_iso_currency_codes};
pub use icu_data::IcuLocaleData;
pub use identifier::{IdentifierForm, canonical_form, to_form};
pub use locale::Locale;
pub use matcher::{best_matching_identifier, preferred_localizations};
pub use preferences::Preferences;
pub use provider::{DelimiterKind, LocaleData, NameKind, NameOutcome};
