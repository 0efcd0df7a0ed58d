//! The locale object. Identifier and preferences are fixed for the
//! object's lifetime; every derived facet is computed lazily through
//! the per-instance cache and never recomputed afterwards.

use std::fmt;
use std::sync::Arc;

use fixed_decimal::Decimal;
use parking_lot::Mutex;
use tinystr::TinyAsciiStr;

use crate::cache::{FacetCache, Slot};
use crate::components::Components;
use crate::error::{Error, Result};
use crate::facets::{HourCycle, MeasurementSystem, NumberStyle, TemperatureUnit};
use crate::formatter::NumberFormatterHandle;
use crate::identifier::{self, IdentifierForm};
use crate::keywords;
use crate::names;
use crate::preferences::Preferences;
use crate::provider::{DelimiterKind, LocaleData, NameKind};
use crate::resolver::{self, Resolver};

const DEFAULT_IDENTIFIER: &str = "en_US";

pub struct Locale {
    identifier: String,
    components: Components,
    preferences: Preferences,
    data: Arc<dyn LocaleData>,
    cache: Mutex<FacetCache>,
}

impl Locale {
    /// Builds a locale from an identifier in any accepted form. The
    /// identifier is canonicalized before storage; an identifier that
    /// does not decompose at all is rejected.
    pub fn new(identifier: &str, data: Arc<dyn LocaleData>) -> Result<Self> {
        Self::with_preferences(identifier, Preferences::default(), data)
    }

    pub fn with_preferences(
        identifier: &str,
        preferences: Preferences,
        data: Arc<dyn LocaleData>,
    ) -> Result<Self> {
        let canonical = identifier::canonical_form(identifier, &*data);
        let components = Components::from_identifier(&canonical)
            .ok_or_else(|| Error::InvalidIdentifier(identifier.to_string()))?;
        Ok(Locale {
            identifier: components.identifier(),
            components,
            preferences,
            data,
            cache: Mutex::new(FacetCache::default()),
        })
    }

    pub fn from_components(
        components: &Components,
        preferences: Preferences,
        data: Arc<dyn LocaleData>,
    ) -> Result<Self> {
        Self::with_preferences(&components.identifier(), preferences, data)
    }

    /// The current locale: preferences captured from the process
    /// environment, resolved to a concrete identifier.
    pub fn current(data: Arc<dyn LocaleData>) -> Self {
        Self::current_with_preferences(Preferences::current(), data)
    }

    /// Like [`Locale::current`] but with an explicit preferences
    /// record, for hosts that manage their own preference storage.
    pub fn current_with_preferences(preferences: Preferences, data: Arc<dyn LocaleData>) -> Self {
        let chosen = preferences
            .locale
            .clone()
            .or_else(|| preferences.languages.first().cloned())
            .unwrap_or_else(|| DEFAULT_IDENTIFIER.to_string());

        // The country override only fills a region the preferred
        // locale does not name itself.
        let chosen = match (&preferences.country, Components::from_identifier(&chosen)) {
            (Some(country), Some(mut comps)) if comps.region.is_none() => {
                comps.region = TinyAsciiStr::try_from_str(&country.to_ascii_uppercase()).ok();
                comps.identifier()
            }
            _ => chosen,
        };

        match Self::with_preferences(&chosen, preferences.clone(), Arc::clone(&data)) {
            Ok(locale) => locale,
            Err(_) => {
                let mut components = Components::new("en");
                components.region = TinyAsciiStr::try_from_str("US").ok();
                Locale {
                    identifier: components.identifier(),
                    components,
                    preferences,
                    data,
                    cache: Mutex::new(FacetCache::default()),
                }
            }
        }
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver {
            identifier: &self.identifier,
            components: &self.components,
            prefs: &self.preferences,
            data: &*self.data,
        }
    }

    fn cached<T: Clone>(
        &self,
        pick: impl FnOnce(&mut FacetCache) -> &mut Slot<T>,
        compute: impl FnOnce() -> Option<T>,
    ) -> Option<T> {
        let mut cache = self.cache.lock();
        pick(&mut cache).get_or_fill(compute)
    }

    /// Canonical identifier the locale was built from.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn identifier_in_form(&self, form: IdentifierForm) -> Option<String> {
        identifier::to_form(&self.identifier, form, &*self.data)
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn language_code(&self) -> &str {
        self.components.language_code()
    }

    pub fn script_code(&self) -> Option<&str> {
        self.components.script_code()
    }

    pub fn variant_code(&self) -> Option<&str> {
        self.components.variant_code()
    }

    /// Keyword value embedded in the identifier, by short or legacy
    /// key name.
    pub fn keyword_value(&self, key: &str) -> Option<String> {
        keywords::keyword_value(&self.identifier, key)
    }

    /// Region facet. A subdivision-style `rg` keyword override wins
    /// over the identifier's own region subtag; absent when neither
    /// names one.
    pub fn region_code(&self) -> Option<String> {
        self.cached(|c| &mut c.region, || self.resolver().region())
    }

    pub fn calendar_identifier(&self) -> String {
        self.cached(|c| &mut c.calendar, || Some(self.resolver().calendar()))
            .unwrap_or_else(|| resolver::FALLBACK_CALENDAR.to_string())
    }

    pub fn collation_order(&self) -> String {
        self.cached(|c| &mut c.collation, || Some(self.resolver().collation()))
            .unwrap_or_else(|| resolver::FALLBACK_COLLATION.to_string())
    }

    pub fn collator_identifier(&self) -> String {
        self.cached(
            |c| &mut c.collator_identifier,
            || Some(self.resolver().collator_identifier()),
        )
        .unwrap_or_else(|| self.identifier.clone())
    }

    pub fn measurement_system(&self) -> MeasurementSystem {
        self.cached(
            |c| &mut c.measurement,
            || Some(self.resolver().measurement_system()),
        )
        .unwrap_or(MeasurementSystem::Metric)
    }

    pub fn temperature_unit(&self) -> TemperatureUnit {
        self.cached(
            |c| &mut c.temperature,
            || Some(self.resolver().temperature_unit()),
        )
        .unwrap_or(TemperatureUnit::Celsius)
    }

    pub fn hour_cycle(&self) -> HourCycle {
        self.cached(|c| &mut c.hour_cycle, || Some(self.resolver().hour_cycle()))
            .unwrap_or(HourCycle::H23)
    }

    /// First weekday for the resolved calendar, 1-based, 1 = Sunday.
    pub fn first_weekday(&self) -> u32 {
        let calendar = self.calendar_identifier();
        self.cached(
            |c| &mut c.first_weekday,
            || Some(self.resolver().first_weekday(&calendar)),
        )
        .unwrap_or(resolver::FALLBACK_FIRST_WEEKDAY)
    }

    pub fn min_days_in_first_week(&self) -> u32 {
        let calendar = self.calendar_identifier();
        self.cached(
            |c| &mut c.min_days_in_first_week,
            || Some(self.resolver().min_days_in_first_week(&calendar)),
        )
        .unwrap_or(resolver::FALLBACK_MIN_DAYS)
    }

    pub fn numbering_system(&self) -> String {
        self.cached(
            |c| &mut c.numbering_system,
            || Some(self.resolver().numbering_system()),
        )
        .unwrap_or_else(|| resolver::FALLBACK_NUMBERING_SYSTEM.to_string())
    }

    /// Every numbering system usable with this locale. Always contains
    /// the Latin system and the locale's own default.
    pub fn available_numbering_systems(&self) -> Vec<String> {
        self.cached(
            |c| &mut c.available_numbering_systems,
            || Some(self.resolver().available_numbering_systems()),
        )
        .unwrap_or_else(|| vec![resolver::FALLBACK_NUMBERING_SYSTEM.to_string()])
    }

    /// Localized display name for a code of the given kind, resolved
    /// against this locale first and the preferred-language list after
    /// it.
    pub fn display_name(&self, kind: NameKind, code: &str) -> Option<String> {
        let key = (kind, code.to_string());
        {
            let cache = self.cache.lock();
            if let Some(cached) = cache.display_names.get(&key) {
                return cached.clone();
            }
        }
        // Computed outside the lock; a racing computation settles on
        // the same value and the first insert wins.
        let name = names::resolve_display_name(
            kind,
            code,
            &self.identifier,
            &self.preferences,
            &*self.data,
        );
        let mut cache = self.cache.lock();
        cache.display_names.entry(key).or_insert(name).clone()
    }

    pub fn delimiter(&self, kind: DelimiterKind) -> Option<String> {
        {
            let cache = self.cache.lock();
            if let Some(cached) = cache.delimiters.get(&kind) {
                return cached.clone();
            }
        }
        let value = self.data.delimiter(kind, &self.identifier);
        let mut cache = self.cache.lock();
        cache.delimiters.entry(kind).or_insert(value).clone()
    }

    pub fn exemplar_character_set(&self) -> Option<String> {
        self.cached(
            |c| &mut c.exemplar_character_set,
            || self.data.exemplar_character_set(&self.identifier),
        )
    }

    pub fn windows_locale_code(&self) -> Option<u32> {
        self.cached(
            |c| &mut c.windows_locale_code,
            || self.data.windows_locale_code(&self.identifier),
        )
    }

    fn with_number_formatter<R>(
        &self,
        style: NumberStyle,
        f: impl FnOnce(&NumberFormatterHandle) -> R,
    ) -> Option<R> {
        let mut cache = self.cache.lock();
        let entry = cache
            .formatters
            .entry(style)
            .or_insert_with(|| self.data.number_formatter(style, &self.identifier));
        entry.as_ref().map(f)
    }

    /// ISO 4217 code of the locale's currency, derived through the
    /// currency-style formatter handle. Absent when no handle can be
    /// created or no currency is known for the region.
    pub fn currency_code(&self) -> Option<String> {
        self.with_number_formatter(NumberStyle::Currency, |handle| {
            handle.currency_code().map(str::to_string)
        })
        .flatten()
    }

    pub fn currency_symbol(&self) -> Option<String> {
        self.with_number_formatter(NumberStyle::Currency, |handle| {
            handle.currency_symbol().map(str::to_string)
        })
        .flatten()
    }

    /// Formats a decimal value in the given style, using the cached
    /// formatter handle for that style.
    pub fn format_number(&self, style: NumberStyle, value: &Decimal) -> Option<String> {
        self.with_number_formatter(style, |handle| handle.format(value))
    }

    /// Identifiers the data service has dedicated data for.
    pub fn available_identifiers(data: &dyn LocaleData) -> Vec<String> {
        data.available_identifiers()
    }
}

impl Drop for Locale {
    fn drop(&mut self) {
        // Handles are owned by exactly this instance; release them on
        // every exit path.
        self.cache.get_mut().release_formatters();
    }
}

impl fmt::Debug for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Locale")
            .field("identifier", &self.identifier)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Locale {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}
