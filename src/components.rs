//! Decomposed view of a locale identifier: language, script, region,
//! variant, and the keyword overrides. Convertible to and from the
//! string forms; round-trips are semantically stable after
//! canonicalization rather than byte-for-byte.

use rustc_hash::FxHashMap;
use tinystr::TinyAsciiStr;

use crate::keywords::{self, legacy_value, normalize_key, short_key, unicode_value};

pub const UNDETERMINED_LANGUAGE: &str = "und";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components {
    /// Lowercase language subtag, `und` when undetermined.
    pub language: String,
    /// Titlecase 4-letter script subtag.
    pub script: Option<TinyAsciiStr<4>>,
    /// Uppercase 2-letter or 3-digit region subtag.
    pub region: Option<TinyAsciiStr<3>>,
    /// Uppercase variant subtags joined by `_`.
    pub variant: Option<String>,
    /// Keyword overrides, keyed by legacy name (calendar, collation,
    /// currency, numbers, hours, measure, fw, rg, sd, timezone).
    pub keywords: FxHashMap<String, String>,
}

fn is_language_subtag(s: &str) -> bool {
    let len = s.len();
    ((2..=3).contains(&len) || (5..=8).contains(&len))
        && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_script_subtag(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_region_subtag(s: &str) -> bool {
    let len = s.len();
    (len == 2 && s.chars().all(|c| c.is_ascii_alphabetic()))
        || (len == 3 && s.chars().all(|c| c.is_ascii_digit()))
}

fn is_variant_subtag(s: &str) -> bool {
    let len = s.len();
    let alnum = s.chars().all(|c| c.is_ascii_alphanumeric());
    (len == 4 && alnum && s.chars().next().is_some_and(|c| c.is_ascii_digit()))
        || ((5..=8).contains(&len) && alnum)
}

fn titlecase(s: &str) -> String {
    s.char_indices()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

// Splits a BCP47-like tag into its base subtags and the -u- extension
// keywords. The -t- and -x- sections are dropped; the timezone keyword
// and private use have no bearing on facet resolution when supplied
// that way.
fn split_bcp47(tag: &str) -> (Vec<String>, FxHashMap<String, String>) {
    let lower = tag.to_ascii_lowercase();
    let tokens: Vec<&str> = lower.split('-').filter(|t| !t.is_empty()).collect();
    let mut base = Vec::new();
    let mut keywords = FxHashMap::default();
    let mut i = 0;
    while i < tokens.len() {
        let tok = tokens[i];
        if tok.len() == 1 {
            if tok == "u" {
                i += 1;
                while i < tokens.len() && tokens[i].len() > 1 {
                    let key = tokens[i];
                    if key.len() != 2 {
                        i += 1;
                        continue;
                    }
                    let mut parts = Vec::new();
                    i += 1;
                    while i < tokens.len() && tokens[i].len() > 2 {
                        parts.push(tokens[i]);
                        i += 1;
                    }
                    let legacy = normalize_key(key);
                    let value = if parts.is_empty() {
                        "true".to_string()
                    } else {
                        legacy_value(&legacy, &parts.join("-"))
                    };
                    keywords.insert(legacy, value);
                }
            } else if tok == "x" {
                // Private use runs to the end of the tag.
                break;
            } else {
                // Skip over another extension section (-t- and friends).
                i += 1;
                while i < tokens.len() && tokens[i].len() > 1 {
                    i += 1;
                }
            }
        } else {
            base.push(tok.to_string());
            i += 1;
        }
    }
    (base, keywords)
}

impl Components {
    pub fn new(language: &str) -> Self {
        Components {
            language: language.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    /// Parses either identifier form. Returns `None` when the language
    /// subtag is structurally invalid or a base subtag fits no slot.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return None;
        }

        // POSIX aliases canonicalize to the classic C locale.
        if trimmed.eq_ignore_ascii_case("c") || trimmed.eq_ignore_ascii_case("posix") {
            let mut comps = Components::new("en");
            comps.region = TinyAsciiStr::try_from_str("US").ok();
            comps.variant = Some("POSIX".to_string());
            return Some(comps);
        }

        let (base_str, mut keywords) = match trimmed.find('@') {
            Some(at) => {
                let mut map = FxHashMap::default();
                for pair in trimmed[at + 1..].split(';') {
                    let Some((k, v)) = pair.split_once('=') else {
                        continue;
                    };
                    let k = normalize_key(k.trim());
                    let v = v.trim().to_ascii_lowercase();
                    if k.is_empty() || !keywords::is_keyword_value(&v) {
                        continue;
                    }
                    map.insert(k, v);
                }
                (trimmed[..at].to_string(), map)
            }
            None => (trimmed.to_string(), FxHashMap::default()),
        };

        let (tokens, extension_keywords) = split_bcp47(&base_str.replace('_', "-"));
        for (k, v) in extension_keywords {
            keywords.entry(k).or_insert(v);
        }

        let mut comps = Components::default();
        let mut idx = 0;

        match tokens.first() {
            Some(first) if is_language_subtag(first) => {
                comps.language = if first == "root" {
                    UNDETERMINED_LANGUAGE.to_string()
                } else {
                    first.clone()
                };
                idx += 1;
            }
            _ => return None,
        }

        if idx < tokens.len() && is_script_subtag(&tokens[idx]) {
            comps.script = TinyAsciiStr::try_from_str(&titlecase(&tokens[idx])).ok();
            idx += 1;
        }

        if idx < tokens.len() && is_region_subtag(&tokens[idx]) {
            comps.region = TinyAsciiStr::try_from_str(&tokens[idx].to_ascii_uppercase()).ok();
            idx += 1;
        }

        let mut variants = Vec::new();
        while idx < tokens.len() {
            let tok = &tokens[idx];
            if !is_variant_subtag(tok) {
                return None;
            }
            let upper = tok.to_ascii_uppercase();
            if !variants.contains(&upper) {
                variants.push(upper);
            }
            idx += 1;
        }
        if !variants.is_empty() {
            comps.variant = Some(variants.join("_"));
        }

        comps.keywords = keywords;
        Some(comps)
    }

    /// Renders the ICU-style identifier: `ll_Ssss_RR_VARIANT@k=v;...`
    /// with keywords sorted by legacy name.
    pub fn identifier(&self) -> String {
        let mut out = self.language.clone();
        if let Some(script) = self.script {
            out.push('_');
            out.push_str(script.as_str());
        }
        if let Some(region) = self.region {
            out.push('_');
            out.push_str(region.as_str());
        }
        if let Some(variant) = &self.variant {
            out.push('_');
            out.push_str(variant);
        }
        if !self.keywords.is_empty() {
            let mut pairs: Vec<(&String, &String)> = self.keywords.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            let section: Vec<String> =
                pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
            out.push('@');
            out.push_str(&section.join(";"));
        }
        out
    }

    /// Renders the BCP47-like tag with keywords as a -u- extension.
    /// Keywords with no two-letter key are omitted; that matches the
    /// lossy nature of the tag form.
    pub fn bcp47_identifier(&self) -> String {
        let mut out = self.language.clone();
        if let Some(script) = self.script {
            out.push('-');
            out.push_str(script.as_str());
        }
        if let Some(region) = self.region {
            out.push('-');
            out.push_str(region.as_str());
        }
        if let Some(variant) = &self.variant {
            for part in variant.split('_') {
                out.push('-');
                out.push_str(&part.to_ascii_lowercase());
            }
        }
        let mut pairs: Vec<(&'static str, String)> = self
            .keywords
            .iter()
            .filter_map(|(k, v)| Some((short_key(k)?, unicode_value(k, v))))
            .collect();
        if !pairs.is_empty() {
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            out.push_str("-u");
            for (k, v) in pairs {
                out.push('-');
                out.push_str(k);
                if v != "true" {
                    out.push('-');
                    out.push_str(&v);
                }
            }
        }
        out
    }

    pub fn keyword(&self, key: &str) -> Option<&str> {
        self.keywords.get(&keywords::normalize_key(key)).map(String::as_str)
    }

    pub fn set_keyword(&mut self, key: &str, value: &str) {
        let v = value.to_ascii_lowercase();
        if !keywords::is_keyword_value(&v) {
            return;
        }
        self.keywords.insert(keywords::normalize_key(key), v);
    }

    pub fn language_code(&self) -> &str {
        &self.language
    }

    pub fn script_code(&self) -> Option<&str> {
        self.script.as_ref().map(TinyAsciiStr::as_str)
    }

    pub fn region_code(&self) -> Option<&str> {
        self.region.as_ref().map(TinyAsciiStr::as_str)
    }

    pub fn variant_code(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn is_undetermined(&self) -> bool {
        self.language == UNDETERMINED_LANGUAGE
    }

    /// True when nothing beyond the language subtag is present.
    pub fn is_bare_language(&self) -> bool {
        self.script.is_none() && self.region.is_none() && self.variant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_icu_form() {
        let c = Components::from_identifier("ar_AE@calendar=islamic-civil;numbers=arab").unwrap();
        assert_eq!(c.language, "ar");
        assert_eq!(c.region_code(), Some("AE"));
        assert_eq!(c.keyword("calendar"), Some("islamic-civil"));
        assert_eq!(c.keyword("nu"), Some("arab"));
    }

    #[test]
    fn parses_bcp47_form() {
        let c = Components::from_identifier("zh-Hant-TW-u-ca-roc-nu-hanidec").unwrap();
        assert_eq!(c.language, "zh");
        assert_eq!(c.script_code(), Some("Hant"));
        assert_eq!(c.region_code(), Some("TW"));
        assert_eq!(c.keyword("calendar"), Some("roc"));
        assert_eq!(c.keyword("numbers"), Some("hanidec"));
    }

    #[test]
    fn script_region_disambiguation() {
        // A 4-letter second subtag is a script, a 2-letter one a region.
        let c = Components::from_identifier("sr-Latn").unwrap();
        assert_eq!(c.script_code(), Some("Latn"));
        assert_eq!(c.region_code(), None);
        let c = Components::from_identifier("sr-RS").unwrap();
        assert_eq!(c.script_code(), None);
        assert_eq!(c.region_code(), Some("RS"));
    }

    #[test]
    fn case_normalization() {
        let c = Components::from_identifier("SR-latn-rs").unwrap();
        assert_eq!(c.identifier(), "sr_Latn_RS");
    }

    #[test]
    fn posix_aliases() {
        assert_eq!(Components::from_identifier("C").unwrap().identifier(), "en_US_POSIX");
        assert_eq!(
            Components::from_identifier("posix").unwrap().identifier(),
            "en_US_POSIX"
        );
        let c = Components::from_identifier("en_US_POSIX").unwrap();
        assert_eq!(c.variant_code(), Some("POSIX"));
    }

    #[test]
    fn root_maps_to_undetermined() {
        let c = Components::from_identifier("root").unwrap();
        assert!(c.is_undetermined());
        assert!(c.is_bare_language());
    }

    #[test]
    fn render_round_trip_semantics() {
        let c = Components::from_identifier("en-US-u-ca-gregory-hc-h23").unwrap();
        assert_eq!(c.identifier(), "en_US@calendar=gregorian;hours=h23");
        let back = Components::from_identifier(&c.identifier()).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn bcp47_render_maps_values() {
        let c = Components::from_identifier("en_US@calendar=gregorian").unwrap();
        assert_eq!(c.bcp47_identifier(), "en-US-u-ca-gregory");
    }

    #[test]
    fn rejects_junk() {
        assert!(Components::from_identifier("").is_none());
        assert!(Components::from_identifier("1234").is_none());
        assert!(Components::from_identifier("en-US-US").is_none());
    }
}
