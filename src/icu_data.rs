//! ICU4X-backed implementation of the [`LocaleData`] service.
//!
//! Canonicalization, likely subtags, display names, week data, and
//! decimal formatting ride on the `icu` compiled data. The remaining
//! lookups (calendar preference, measurement, weather usage, numbering
//! tables, currency regions) are CLDR-derived tables, which is how the
//! upstream data service answers them as well.

use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::experimental::displaynames::{
    DisplayNamesOptions, LocaleDisplayNamesFormatter, RegionDisplayNames, ScriptDisplayNames,
};
use icu::locale::extensions::unicode::Key;
use icu::locale::{Locale as IcuLocale, LocaleCanonicalizer, LocaleExpander};
use icu_calendar::types::Weekday;
use icu_calendar::week::WeekInformation;
use tracing::trace;

use crate::components::Components;
use crate::facets::{HourCycle, MeasurementSystem, NumberStyle};
use crate::formatter::{self, NumberFormatterHandle};
use crate::keywords;
use crate::provider::{DelimiterKind, LocaleData, NameKind, NameOutcome};

/// The production data service.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuLocaleData;

impl IcuLocaleData {
    pub fn new() -> Self {
        IcuLocaleData
    }
}

fn parse_icu(identifier: &str) -> Option<(Components, IcuLocale)> {
    let comps = Components::from_identifier(identifier)?;
    let locale: IcuLocale = comps.bcp47_identifier().parse().ok()?;
    Some((comps, locale))
}

// Maps an ICU4X locale back to the decomposed legacy-keyword view.
fn locale_to_components(locale: &IcuLocale) -> Components {
    let mut comps = Components::new(&locale.id.language.to_string());
    if let Some(script) = locale.id.script {
        comps.script = tinystr::TinyAsciiStr::try_from_str(&script.to_string()).ok();
    }
    if let Some(region) = locale.id.region {
        comps.region = tinystr::TinyAsciiStr::try_from_str(&region.to_string()).ok();
    }
    if !locale.id.variants.is_empty() {
        let parts: Vec<String> = locale
            .id
            .variants
            .iter()
            .map(|v| v.to_string().to_ascii_uppercase())
            .collect();
        comps.variant = Some(parts.join("_"));
    }
    for (short, legacy) in keywords::known_keys() {
        let Ok(key) = short.parse::<Key>() else {
            continue;
        };
        if let Some(value) = locale.extensions.unicode.keywords.get(&key) {
            let value = value.to_string();
            // A bare boolean keyword round-trips as an empty value.
            let value = if value.is_empty() {
                "true".to_string()
            } else {
                keywords::legacy_value(legacy, &value)
            };
            comps.keywords.insert(legacy.to_string(), value);
        }
    }
    comps
}

fn region_of(comps: &Components) -> Option<String> {
    if let Some(rg) = comps.keyword("rg") {
        if rg.len() >= 2 && rg.is_char_boundary(2) {
            return Some(rg[..2].to_ascii_uppercase());
        }
    }
    comps.region_code().map(str::to_string)
}

fn weekday_number(wd: Weekday) -> u32 {
    // 1-based, Sunday first, matching the service convention.
    match wd {
        Weekday::Sunday => 1,
        Weekday::Monday => 2,
        Weekday::Tuesday => 3,
        Weekday::Wednesday => 4,
        Weekday::Thursday => 5,
        Weekday::Friday => 6,
        Weekday::Saturday => 7,
    }
}

const KNOWN_NUMBERING_SYSTEMS: &[&str] = &[
    "adlm", "ahom", "arab", "arabext", "armn", "bali", "beng", "bhks", "cakm", "cham", "deva",
    "diak", "ethi", "fullwide", "geor", "gong", "gonm", "grek", "gujr", "guru", "hanidec",
    "hansfin", "hantfin", "hebr", "hmng", "hmnp", "java", "jpan", "jpanfin", "kali", "khmr",
    "knda", "lana", "lanatham", "laoo", "latn", "lepc", "limb", "mlym", "modi", "mong", "mroo",
    "mtei", "mymr", "mymrshan", "mymrtlng", "newa", "nkoo", "olck", "orya", "osma", "rohg",
    "saur", "shrd", "sind", "sinh", "sora", "sund", "takr", "talu", "taml", "tamldec", "telu",
    "thai", "tibt", "tirh", "tnsa", "vaii", "wara", "wcho",
];

fn native_numbering_system(language: &str) -> Option<&'static str> {
    match language {
        "ar" => Some("arab"),
        "fa" | "ps" | "ur" => Some("arabext"),
        "hi" | "mr" | "ne" => Some("deva"),
        "bn" | "as" => Some("beng"),
        "pa" => Some("guru"),
        "gu" => Some("gujr"),
        "or" => Some("orya"),
        "ta" => Some("tamldec"),
        "te" => Some("telu"),
        "kn" => Some("knda"),
        "ml" => Some("mlym"),
        "th" => Some("thai"),
        "lo" => Some("laoo"),
        "my" => Some("mymr"),
        "km" => Some("khmr"),
        "bo" | "dz" => Some("tibt"),
        _ => None,
    }
}

fn traditional_numbering_system(language: &str) -> Option<&'static str> {
    match language {
        "zh" => Some("hanidec"),
        "ja" => Some("jpan"),
        "ta" => Some("taml"),
        "he" => Some("hebr"),
        "hy" => Some("armn"),
        "ka" => Some("geor"),
        "el" => Some("grek"),
        "am" | "ti" => Some("ethi"),
        _ => None,
    }
}

fn finance_numbering_system(language: &str) -> Option<&'static str> {
    match language {
        "zh" => Some("hansfin"),
        "ja" => Some("jpanfin"),
        _ => None,
    }
}

const H12_REGIONS: &[&str] = &[
    "US", "CA", "AU", "NZ", "PH", "IN", "EG", "SA", "CO", "PK", "MY",
];

const EUROZONE: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU", "LV",
    "MT", "NL", "PT", "SI", "SK",
];

fn calendar_display_name(value: &str) -> Option<&'static str> {
    match value {
        "gregorian" => Some("Gregorian Calendar"),
        "buddhist" => Some("Buddhist Calendar"),
        "chinese" => Some("Chinese Calendar"),
        "coptic" => Some("Coptic Calendar"),
        "dangi" => Some("Dangi Calendar"),
        "ethiopic" => Some("Ethiopic Calendar"),
        "ethiopic-amete-alem" => Some("Ethiopic Amete Alem Calendar"),
        "hebrew" => Some("Hebrew Calendar"),
        "indian" => Some("Indian National Calendar"),
        "islamic" => Some("Islamic Calendar"),
        "islamic-civil" => Some("Islamic Calendar (tabular, civil epoch)"),
        "islamic-umalqura" => Some("Islamic Calendar (Umm al-Qura)"),
        "iso8601" => Some("ISO-8601 Calendar"),
        "japanese" => Some("Japanese Calendar"),
        "persian" => Some("Persian Calendar"),
        "roc" => Some("Minguo Calendar"),
        _ => None,
    }
}

fn collation_display_name(value: &str) -> Option<&'static str> {
    match value {
        "standard" => Some("Standard Sort Order"),
        "search" => Some("General-Purpose Search"),
        "phonebook" => Some("Phonebook Sort Order"),
        "pinyin" => Some("Pinyin Sort Order"),
        "stroke" => Some("Stroke Sort Order"),
        "traditional" => Some("Traditional Sort Order"),
        "dictionary" => Some("Dictionary Sort Order"),
        "phonetic" => Some("Phonetic Sort Order"),
        _ => None,
    }
}

fn variant_display_name(value: &str) -> Option<&'static str> {
    match value {
        "posix" => Some("Computer"),
        "valencia" => Some("Valencian"),
        "fonipa" => Some("IPA Phonetics"),
        "1901" => Some("Traditional German orthography"),
        "1996" => Some("German orthography of 1996"),
        _ => None,
    }
}

fn currency_display_name(code: &str) -> Option<&'static str> {
    match code.to_ascii_uppercase().as_str() {
        "USD" => Some("US Dollar"),
        "EUR" => Some("Euro"),
        "GBP" => Some("British Pound"),
        "JPY" => Some("Japanese Yen"),
        "CNY" => Some("Chinese Yuan"),
        "KRW" => Some("South Korean Won"),
        "INR" => Some("Indian Rupee"),
        "CAD" => Some("Canadian Dollar"),
        "AUD" => Some("Australian Dollar"),
        "NZD" => Some("New Zealand Dollar"),
        "CHF" => Some("Swiss Franc"),
        "MXN" => Some("Mexican Peso"),
        "BRL" => Some("Brazilian Real"),
        "RUB" => Some("Russian Ruble"),
        "HKD" => Some("Hong Kong Dollar"),
        "SGD" => Some("Singapore Dollar"),
        "TWD" => Some("New Taiwan Dollar"),
        "SEK" => Some("Swedish Krona"),
        "NOK" => Some("Norwegian Krone"),
        "DKK" => Some("Danish Krone"),
        "PLN" => Some("Polish Zloty"),
        "THB" => Some("Thai Baht"),
        "TRY" => Some("Turkish Lira"),
        "ILS" => Some("Israeli New Shekel"),
        "ZAR" => Some("South African Rand"),
        "AED" => Some("United Arab Emirates Dirham"),
        "SAR" => Some("Saudi Riyal"),
        "EGP" => Some("Egyptian Pound"),
        "IDR" => Some("Indonesian Rupiah"),
        "PHP" => Some("Philippine Peso"),
        "VND" => Some("Vietnamese Dong"),
        "UAH" => Some("Ukrainian Hryvnia"),
        "ARS" => Some("Argentine Peso"),
        "CLP" => Some("Chilean Peso"),
        "COP" => Some("Colombian Peso"),
        "PEN" => Some("Peruvian Sol"),
        "PKR" => Some("Pakistani Rupee"),
        "BDT" => Some("Bangladeshi Taka"),
        "KES" => Some("Kenyan Shilling"),
        "NGN" => Some("Nigerian Naira"),
        _ => None,
    }
}

// English-table lookups report Localized only when the display language
// is English; any other display language gets the generic name flagged
// as a fallback so the resolver can keep scanning.
fn table_outcome(name: Option<&'static str>, display_language: &str) -> NameOutcome {
    let Some(name) = name else {
        return NameOutcome::Missing;
    };
    let lang = Components::from_identifier(display_language)
        .map(|c| c.language)
        .unwrap_or_default();
    if lang == "en" {
        NameOutcome::Localized(name.to_string())
    } else {
        NameOutcome::Fallback(name.to_string())
    }
}

impl LocaleData for IcuLocaleData {
    fn canonicalize(&self, identifier: &str) -> Option<String> {
        let (_, mut locale) = parse_icu(identifier)?;
        let canonicalizer = LocaleCanonicalizer::new_extended();
        canonicalizer.canonicalize(&mut locale);
        Some(locale_to_components(&locale).identifier())
    }

    fn maximize(&self, identifier: &str) -> Option<String> {
        let (_, mut locale) = parse_icu(identifier)?;
        let expander = LocaleExpander::new_extended();
        expander.maximize(&mut locale.id);
        Some(locale_to_components(&locale).identifier())
    }

    fn display_name(
        &self,
        kind: NameKind,
        identifier: &str,
        display_language: &str,
    ) -> NameOutcome {
        let Some((_, display_locale)) = parse_icu(display_language) else {
            return NameOutcome::Missing;
        };
        let Some((comps, target)) = parse_icu(identifier) else {
            return NameOutcome::Missing;
        };

        match kind {
            NameKind::Identifier | NameKind::Language => {
                let opts = DisplayNamesOptions::default();
                let Ok(formatter) =
                    LocaleDisplayNamesFormatter::try_new((&display_locale).into(), opts)
                else {
                    return NameOutcome::Missing;
                };
                let subject: IcuLocale = if kind == NameKind::Language {
                    match comps.language.parse() {
                        Ok(locale) => locale,
                        Err(_) => return NameOutcome::Missing,
                    }
                } else {
                    target
                };
                let result = formatter.of(&subject).into_owned();
                // The formatter echoes the code back when it only had
                // generic data for it.
                if result.eq_ignore_ascii_case(&subject.to_string()) || result == "und" {
                    NameOutcome::Fallback(result)
                } else {
                    NameOutcome::Localized(result)
                }
            }
            NameKind::Region => {
                let Some(region) = comps.region_code() else {
                    return NameOutcome::Missing;
                };
                let opts = DisplayNamesOptions::default();
                let Ok(formatter) = RegionDisplayNames::try_new((&display_locale).into(), opts)
                else {
                    return NameOutcome::Missing;
                };
                match region.parse() {
                    Ok(region) => match formatter.of(region) {
                        Some(name) => NameOutcome::Localized(name.to_string()),
                        None => NameOutcome::Missing,
                    },
                    Err(_) => NameOutcome::Missing,
                }
            }
            NameKind::Script => {
                let Some(script) = comps.script_code() else {
                    return NameOutcome::Missing;
                };
                let opts = DisplayNamesOptions::default();
                let Ok(formatter) = ScriptDisplayNames::try_new((&display_locale).into(), opts)
                else {
                    return NameOutcome::Missing;
                };
                match script.parse() {
                    Ok(script) => match formatter.of(script) {
                        Some(name) => NameOutcome::Localized(name.to_string()),
                        None => NameOutcome::Missing,
                    },
                    Err(_) => NameOutcome::Missing,
                }
            }
            NameKind::Variant => {
                let Some(variant) = comps.variant_code() else {
                    return NameOutcome::Missing;
                };
                table_outcome(
                    variant_display_name(&variant.to_ascii_lowercase()),
                    display_language,
                )
            }
            NameKind::Calendar => table_outcome(
                comps.keyword("calendar").and_then(calendar_display_name),
                display_language,
            ),
            NameKind::Collation => table_outcome(
                comps.keyword("collation").and_then(collation_display_name),
                display_language,
            ),
            NameKind::Currency => self.currency_name(identifier, display_language),
        }
    }

    fn legacy_key(&self, short: &str) -> Option<String> {
        let legacy = match short {
            "kb" => "colbackwards",
            "kc" => "colcaselevel",
            "kh" => "colhiraganaquaternary",
            "kk" => "colnormalization",
            "kr" => "colreorder",
            "ks" => "colstrength",
            "vt" => "colvariabletop",
            "va" => "va",
            _ => return None,
        };
        Some(legacy.to_string())
    }

    fn default_calendars(&self, identifier: &str) -> Vec<String> {
        let Some(comps) = Components::from_identifier(identifier) else {
            return vec!["gregorian".to_string()];
        };
        let by_region = region_of(&comps).map(|region| match region.as_str() {
            "TH" => vec!["buddhist", "gregorian"],
            "JP" => vec!["gregorian", "japanese"],
            "TW" => vec!["gregorian", "roc", "chinese"],
            "SA" => vec!["islamic-umalqura", "gregorian", "islamic", "islamic-rgsa"],
            "IR" | "AF" => vec!["persian", "gregorian", "islamic", "islamic-civil"],
            "IL" => vec!["gregorian", "hebrew", "islamic", "islamic-civil"],
            "EG" | "DZ" | "JO" | "LB" | "MA" | "SY" | "TN" | "YE" | "AE" | "BH" | "KW" | "OM"
            | "QA" | "SD" | "LY" => vec!["gregorian", "coptic", "islamic", "islamic-civil"],
            "ET" => vec!["gregorian", "ethiopic", "ethiopic-amete-alem"],
            "CN" | "SG" | "HK" | "MO" => vec!["gregorian", "chinese"],
            "KR" => vec!["gregorian", "dangi"],
            "IN" => vec!["gregorian", "indian"],
            _ => vec!["gregorian"],
        });
        let list = by_region.unwrap_or_else(|| match comps.language.as_str() {
            "th" => vec!["buddhist", "gregorian"],
            "fa" => vec!["persian", "gregorian"],
            "am" | "ti" => vec!["gregorian", "ethiopic"],
            "he" => vec!["gregorian", "hebrew"],
            "ar" => vec!["gregorian", "islamic", "islamic-civil"],
            "ja" => vec!["gregorian", "japanese"],
            "zh" => vec!["gregorian", "chinese"],
            "ko" => vec!["gregorian", "dangi"],
            _ => vec!["gregorian"],
        });
        list.into_iter().map(str::to_string).collect()
    }

    fn measurement_system(&self, identifier: &str) -> Option<MeasurementSystem> {
        let comps = Components::from_identifier(identifier)?;
        let region = region_of(&comps)?;
        match region.as_str() {
            "US" | "LR" | "MM" => Some(MeasurementSystem::Us),
            "GB" => Some(MeasurementSystem::Uk),
            _ => Some(MeasurementSystem::Metric),
        }
    }

    fn uses_fahrenheit(&self, identifier: &str) -> bool {
        let Some(comps) = Components::from_identifier(identifier) else {
            return false;
        };
        match region_of(&comps).as_deref() {
            Some("US" | "BS" | "BZ" | "KY" | "PW" | "PR" | "GU" | "VI" | "AS" | "MP" | "FM"
            | "MH" | "LR") => true,
            _ => false,
        }
    }

    fn hour_cycle(&self, identifier: &str) -> Option<HourCycle> {
        let comps = Components::from_identifier(identifier)?;
        if let Some(region) = region_of(&comps) {
            return self.hour_cycle_for_region(&region);
        }
        match comps.language.as_str() {
            "en" | "ar" | "ko" | "hi" | "bn" => Some(HourCycle::H12),
            "ja" | "zh" | "de" | "fr" | "it" | "es" | "pt" | "ru" | "nl" | "sv" | "da" | "nb"
            | "fi" | "pl" | "cs" | "hu" | "ro" | "tr" | "uk" | "hr" | "sk" | "sl" | "bg" | "el"
            | "he" | "th" | "vi" | "id" | "ms" => Some(HourCycle::H23),
            _ => Some(HourCycle::H12),
        }
    }

    fn hour_cycle_for_region(&self, region: &str) -> Option<HourCycle> {
        let upper = region.to_ascii_uppercase();
        if upper.len() != 2 && upper.len() != 3 {
            return None;
        }
        if H12_REGIONS.contains(&upper.as_str()) {
            Some(HourCycle::H12)
        } else {
            Some(HourCycle::H23)
        }
    }

    fn first_weekday(&self, identifier: &str) -> Option<u32> {
        let (_, locale) = parse_icu(identifier)?;
        let info = WeekInformation::try_new((&locale).into()).ok()?;
        Some(weekday_number(info.first_weekday))
    }

    fn min_days_in_first_week(&self, identifier: &str) -> Option<u32> {
        let comps = Components::from_identifier(identifier)?;
        let region = region_of(&comps)?;
        // ISO-8601 week rules across most of Europe.
        let four = EUROZONE.contains(&region.as_str())
            || matches!(
                region.as_str(),
                "GB" | "CH" | "CZ" | "DK" | "SE" | "NO" | "IS" | "PL" | "HU" | "BG" | "RO" | "LI"
            );
        Some(if four { 4 } else { 1 })
    }

    fn default_numbering_system(&self, identifier: &str) -> Option<String> {
        let comps = Components::from_identifier(identifier)?;
        let region = region_of(&comps);
        let system = match comps.language.as_str() {
            "ar" => match region.as_deref() {
                Some("DZ" | "EH" | "LY" | "MA" | "TN") => "latn",
                _ => "arab",
            },
            "fa" | "ps" => "arabext",
            "bn" | "as" => "beng",
            "mr" | "ne" => "deva",
            "my" => "mymr",
            "km" => "khmr",
            "dz" => "tibt",
            _ => "latn",
        };
        Some(system.to_string())
    }

    fn resolve_numbering_system(&self, identifier: &str) -> Option<String> {
        let comps = Components::from_identifier(identifier)?;
        let language = comps.language.clone();
        let requested = comps.keyword("numbers").map(str::to_string);
        match requested.as_deref() {
            None | Some("default") => self.default_numbering_system(identifier),
            Some("native") => native_numbering_system(&language)
                .map(str::to_string)
                .or_else(|| self.default_numbering_system(identifier)),
            Some("traditional") => traditional_numbering_system(&language)
                .or_else(|| native_numbering_system(&language))
                .map(str::to_string)
                .or_else(|| self.default_numbering_system(identifier)),
            Some("finance") => finance_numbering_system(&language)
                .or_else(|| traditional_numbering_system(&language))
                .map(str::to_string)
                .or_else(|| self.default_numbering_system(identifier)),
            Some(concrete) => {
                if KNOWN_NUMBERING_SYSTEMS.contains(&concrete) {
                    Some(concrete.to_string())
                } else {
                    self.default_numbering_system(identifier)
                }
            }
        }
    }

    fn valid_numbering_systems(&self, language: &str) -> Vec<String> {
        let language = language.to_ascii_lowercase();
        let default = self
            .default_numbering_system(&language)
            .unwrap_or_else(|| "latn".to_string());
        let mut out = vec![default];
        for candidate in [
            native_numbering_system(&language),
            traditional_numbering_system(&language),
            finance_numbering_system(&language),
            Some("latn"),
        ]
        .into_iter()
        .flatten()
        {
            if !out.iter().any(|s| s == candidate) {
                out.push(candidate.to_string());
            }
        }
        out
    }

    fn currency_for_region(&self, region: &str) -> Option<String> {
        let upper = region.to_ascii_uppercase();
        if EUROZONE.contains(&upper.as_str()) {
            return Some("EUR".to_string());
        }
        let code = match upper.as_str() {
            "US" | "PR" | "GU" | "VI" | "AS" | "EC" | "SV" | "PA" => "USD",
            "CA" => "CAD",
            "GB" => "GBP",
            "AU" => "AUD",
            "NZ" => "NZD",
            "JP" => "JPY",
            "CN" => "CNY",
            "KR" => "KRW",
            "IN" => "INR",
            "RU" => "RUB",
            "BR" => "BRL",
            "MX" => "MXN",
            "CH" | "LI" => "CHF",
            "SE" => "SEK",
            "NO" => "NOK",
            "DK" => "DKK",
            "IS" => "ISK",
            "PL" => "PLN",
            "CZ" => "CZK",
            "HU" => "HUF",
            "TR" => "TRY",
            "IL" => "ILS",
            "SA" => "SAR",
            "AE" => "AED",
            "EG" => "EGP",
            "ZA" => "ZAR",
            "NG" => "NGN",
            "KE" => "KES",
            "TH" => "THB",
            "VN" => "VND",
            "PH" => "PHP",
            "ID" => "IDR",
            "MY" => "MYR",
            "SG" => "SGD",
            "HK" => "HKD",
            "TW" => "TWD",
            "AR" => "ARS",
            "CL" => "CLP",
            "CO" => "COP",
            "PE" => "PEN",
            "UA" => "UAH",
            "KZ" => "KZT",
            "PK" => "PKR",
            "BD" => "BDT",
            "IR" => "IRR",
            "IQ" => "IQD",
            _ => return None,
        };
        Some(code.to_string())
    }

    fn currency_name(&self, code: &str, display_language: &str) -> NameOutcome {
        if !formatter::is_well_formed_currency_code(code) {
            return NameOutcome::Missing;
        }
        table_outcome(currency_display_name(code), display_language)
    }

    fn delimiter(&self, kind: DelimiterKind, identifier: &str) -> Option<String> {
        let language = Components::from_identifier(identifier)?.language;
        let quads = match language.as_str() {
            "fr" => ("\u{AB}", "\u{BB}", "\u{2039}", "\u{203A}"),
            "de" | "cs" | "sk" | "sl" | "hr" | "bg" | "lt" | "et" => {
                ("\u{201E}", "\u{201C}", "\u{201A}", "\u{2018}")
            }
            "ru" | "uk" | "be" => ("\u{AB}", "\u{BB}", "\u{201E}", "\u{201C}"),
            "ja" | "yue" => ("\u{300C}", "\u{300D}", "\u{300E}", "\u{300F}"),
            _ => ("\u{201C}", "\u{201D}", "\u{2018}", "\u{2019}"),
        };
        let value = match kind {
            DelimiterKind::QuotationBegin => quads.0,
            DelimiterKind::QuotationEnd => quads.1,
            DelimiterKind::AlternateQuotationBegin => quads.2,
            DelimiterKind::AlternateQuotationEnd => quads.3,
        };
        Some(value.to_string())
    }

    fn available_identifiers(&self) -> Vec<String> {
        [
            "ar", "ar_AE", "ar_EG", "ar_SA", "bn", "cs", "da", "de", "de_AT", "de_CH", "de_DE",
            "el", "en", "en_AU", "en_CA", "en_GB", "en_IN", "en_US", "es", "es_419", "es_ES",
            "es_MX", "fa", "fi", "fr", "fr_CA", "fr_CH", "fr_FR", "he", "hi", "hu", "id", "it",
            "ja", "ja_JP", "ko", "ko_KR", "ms", "nb", "nl", "pl", "pt", "pt_BR", "pt_PT", "ro",
            "ru", "ru_RU", "sk", "sv", "th", "tr", "uk", "vi", "zh", "zh_Hans_CN", "zh_Hant_TW",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn number_formatter(
        &self,
        style: NumberStyle,
        identifier: &str,
    ) -> Option<NumberFormatterHandle> {
        let (comps, locale) = parse_icu(identifier)?;
        let prefs = DecimalFormatterPreferences::from(&locale);
        let mut opts = DecimalFormatterOptions::default();
        opts.grouping_strategy = Some(GroupingStrategy::Auto);
        let formatter = DecimalFormatter::try_new(prefs, opts)
            .or_else(|_| DecimalFormatter::try_new(Default::default(), opts))
            .ok()?;

        let (code, symbol) = if style == NumberStyle::Currency {
            let code = comps
                .keyword("currency")
                .filter(|c| formatter::is_well_formed_currency_code(c))
                .map(|c| c.to_ascii_uppercase())
                .or_else(|| region_of(&comps).and_then(|r| self.currency_for_region(&r)));
            let symbol = code.as_deref().map(formatter::currency_symbol);
            (code, symbol)
        } else {
            (None, None)
        };

        trace!(style = ?style, identifier, "created number formatter");
        Some(NumberFormatterHandle::new(style, formatter, code, symbol))
    }

    fn windows_locale_code(&self, identifier: &str) -> Option<u32> {
        let comps = Components::from_identifier(identifier)?;
        let region = region_of(&comps);
        let code = match (comps.language.as_str(), region.as_deref()) {
            ("en", Some("US") | None) => 0x0409,
            ("en", Some("GB")) => 0x0809,
            ("en", Some("AU")) => 0x0C09,
            ("en", Some("CA")) => 0x1009,
            ("de", _) => 0x0407,
            ("fr", Some("CA")) => 0x0C0C,
            ("fr", _) => 0x040C,
            ("es", Some("MX")) => 0x080A,
            ("es", _) => 0x0C0A,
            ("it", _) => 0x0410,
            ("ja", _) => 0x0411,
            ("ko", _) => 0x0412,
            ("nl", _) => 0x0413,
            ("pt", Some("BR")) => 0x0416,
            ("pt", _) => 0x0816,
            ("ru", _) => 0x0419,
            ("zh", Some("TW")) => 0x0404,
            ("zh", _) => 0x0804,
            _ => return None,
        };
        Some(code)
    }

    fn exemplar_character_set(&self, _identifier: &str) -> Option<String> {
        // Owned entirely by the upstream data tables; nothing local.
        None
    }
}
