//! Keyword codec: mapping between the two-letter UTS #35 extension keys
//! and the legacy keyword names used in ICU-style identifiers, plus
//! extraction and injection of `key=value` pairs on an identifier string.

use crate::provider::LocaleData;

/// Hard cap on a single keyword value, matching the capacity of the
/// fixed buffers the external format was designed around. Oversized
/// values read back as absent.
pub const KEYWORD_VALUE_CAPACITY: usize = 100;

// The hot keys, consulted before the data service's generic mapper.
const SHORT_TO_LEGACY: &[(&str, &str)] = &[
    ("ca", "calendar"),
    ("co", "collation"),
    ("cu", "currency"),
    ("nu", "numbers"),
    ("hc", "hours"),
    ("ms", "measure"),
    ("fw", "fw"),
    ("rg", "rg"),
    ("sd", "sd"),
    ("tz", "timezone"),
    ("kf", "colcasefirst"),
    ("kn", "colnumeric"),
];

/// The fixed short/legacy key pairs, for callers that need to walk
/// every facet keyword.
pub(crate) fn known_keys() -> impl Iterator<Item = (&'static str, &'static str)> {
    SHORT_TO_LEGACY.iter().copied()
}

/// Legacy keyword name for a short key. The fixed table covers the
/// common keys; anything else falls through to the data service.
pub fn legacy_key(short: &str, data: &dyn LocaleData) -> Option<String> {
    let lower = short.to_ascii_lowercase();
    for (s, l) in SHORT_TO_LEGACY {
        if *s == lower {
            return Some((*l).to_string());
        }
    }
    data.legacy_key(&lower)
}

/// Inverse of [`legacy_key`] for the fixed table only.
pub fn short_key(legacy: &str) -> Option<&'static str> {
    let lower = legacy.to_ascii_lowercase();
    SHORT_TO_LEGACY
        .iter()
        .find(|(_, l)| *l == lower)
        .map(|(s, _)| *s)
}

/// Normalizes a key of either form to the legacy name, without
/// consulting the data service.
pub(crate) fn normalize_key(key: &str) -> String {
    let lower = key.to_ascii_lowercase();
    for (s, l) in SHORT_TO_LEGACY {
        if *s == lower {
            return (*l).to_string();
        }
    }
    lower
}

/// Maps a UTS #35 extension value to the legacy value for a given
/// legacy key. Identity for everything outside the known tables.
pub(crate) fn legacy_value(legacy_key: &str, value: &str) -> String {
    let mapped = match legacy_key {
        "calendar" => match value {
            "gregory" => Some("gregorian"),
            "ethioaa" => Some("ethiopic-amete-alem"),
            "islamicc" => Some("islamic-civil"),
            _ => None,
        },
        "collation" => match value {
            "trad" => Some("traditional"),
            "phonebk" => Some("phonebook"),
            "dict" => Some("dictionary"),
            "gb2312" => Some("gb2312han"),
            _ => None,
        },
        _ => None,
    };
    mapped.map(str::to_string).unwrap_or_else(|| value.to_ascii_lowercase())
}

/// Maps a legacy value to the UTS #35 extension value for a given
/// legacy key. Identity outside the known tables.
pub(crate) fn unicode_value(legacy_key: &str, value: &str) -> String {
    let mapped = match legacy_key {
        "calendar" => match value {
            "gregorian" => Some("gregory"),
            "ethiopic-amete-alem" => Some("ethioaa"),
            "islamicc" => Some("islamic-civil"),
            _ => None,
        },
        "collation" => match value {
            "traditional" => Some("trad"),
            "phonebook" => Some("phonebk"),
            "dictionary" => Some("dict"),
            "gb2312han" => Some("gb2312"),
            _ => None,
        },
        "measure" => match value {
            "imperial" => Some("uksystem"),
            _ => None,
        },
        _ => None,
    };
    mapped.map(str::to_string).unwrap_or_else(|| value.to_ascii_lowercase())
}

fn split_keyword_section(identifier: &str) -> Option<(&str, &str)> {
    let at = identifier.find('@')?;
    Some((&identifier[..at], &identifier[at + 1..]))
}

/// Keyword values are ASCII: alphanumerics plus the separators the
/// external format allows (timezone values carry `/`).
pub(crate) fn is_keyword_value(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= KEYWORD_VALUE_CAPACITY
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/'))
}

/// Extracts the value for `key` (short or legacy form) from an
/// identifier string. Values longer than [`KEYWORD_VALUE_CAPACITY`]
/// read back as absent rather than erroring.
pub fn keyword_value(identifier: &str, key: &str) -> Option<String> {
    let legacy = normalize_key(key);
    let value = if let Some((_, section)) = split_keyword_section(identifier) {
        section.split(';').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            if k.trim().eq_ignore_ascii_case(&legacy) {
                Some(v.trim().to_ascii_lowercase())
            } else {
                None
            }
        })
    } else {
        // BCP47-like input carries keywords as a -u- extension.
        unicode_extension_value(identifier, &legacy)
    }?;
    if !is_keyword_value(&value) {
        return None;
    }
    Some(value)
}

// Scans the -u- extension of a BCP47-like tag for the short form of
// `legacy` and joins its multi-subtag value with '-'. Private-use
// sections are not searched.
fn unicode_extension_value(identifier: &str, legacy: &str) -> Option<String> {
    let short = short_key(legacy)?;
    let lower = identifier.to_ascii_lowercase();
    let search = match lower.find("-x-") {
        Some(x) => &lower[..x],
        None => &lower[..],
    };
    let u = search.find("-u-")?;
    let tokens: Vec<&str> = search[u + 3..].split('-').collect();
    let mut i = 0;
    while i < tokens.len() {
        let tok = tokens[i];
        if tok.len() == 1 {
            // A singleton starts another extension section.
            break;
        }
        if tok.len() == 2 {
            let mut parts = Vec::new();
            let mut j = i + 1;
            while j < tokens.len() && tokens[j].len() > 2 {
                parts.push(tokens[j]);
                j += 1;
            }
            if tok == short {
                if parts.is_empty() {
                    return Some("true".to_string());
                }
                return Some(legacy_value(legacy, &parts.join("-")));
            }
            i = j;
        } else {
            i += 1;
        }
    }
    None
}

/// Returns `identifier` with `key` set to `value`, preserving every
/// other keyword and keeping the section sorted by key. An oversized
/// value leaves the identifier unchanged.
pub fn with_keyword_value(identifier: &str, key: &str, value: &str) -> String {
    if !is_keyword_value(value) {
        return identifier.to_string();
    }
    let legacy = normalize_key(key);
    let value = value.to_ascii_lowercase();

    let (base, section) = match split_keyword_section(identifier) {
        Some((b, s)) => (b, s),
        None => (identifier, ""),
    };

    let mut pairs: Vec<(String, String)> = section
        .split(';')
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            let k = k.trim().to_ascii_lowercase();
            if k.is_empty() || k == legacy {
                None
            } else {
                Some((k, v.trim().to_ascii_lowercase()))
            }
        })
        .collect();
    pairs.push((legacy, value));
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    let section: Vec<String> = pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{}@{}", base, section.join(";"))
}

/// Removes `key` from the identifier's keyword section, dropping the
/// `@` section entirely when it was the last keyword.
pub fn without_keyword(identifier: &str, key: &str) -> String {
    let legacy = normalize_key(key);
    let Some((base, section)) = split_keyword_section(identifier) else {
        return identifier.to_string();
    };
    let pairs: Vec<&str> = section
        .split(';')
        .filter(|pair| {
            pair.split_once('=')
                .map(|(k, _)| !k.trim().eq_ignore_ascii_case(&legacy))
                .unwrap_or(false)
        })
        .collect();
    if pairs.is_empty() {
        base.to_string()
    } else {
        format!("{}@{}", base, pairs.join(";"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_table_hits() {
        assert_eq!(normalize_key("ca"), "calendar");
        assert_eq!(normalize_key("NU"), "numbers");
        assert_eq!(normalize_key("calendar"), "calendar");
        assert_eq!(short_key("hours"), Some("hc"));
    }

    #[test]
    fn value_extraction_icu_form() {
        let id = "ar_AE@calendar=islamic-civil;numbers=arab";
        assert_eq!(keyword_value(id, "calendar").as_deref(), Some("islamic-civil"));
        assert_eq!(keyword_value(id, "ca").as_deref(), Some("islamic-civil"));
        assert_eq!(keyword_value(id, "nu").as_deref(), Some("arab"));
        assert_eq!(keyword_value(id, "collation"), None);
    }

    #[test]
    fn value_extraction_bcp47_form() {
        let id = "ar-AE-u-ca-islamic-civil-nu-arab";
        assert_eq!(keyword_value(id, "calendar").as_deref(), Some("islamic-civil"));
        assert_eq!(keyword_value(id, "numbers").as_deref(), Some("arab"));
        // Short values map back to their legacy names.
        assert_eq!(
            keyword_value("en-u-ca-gregory", "calendar").as_deref(),
            Some("gregorian")
        );
    }

    #[test]
    fn injection_sorts_and_replaces() {
        let id = with_keyword_value("en_US@numbers=latn", "calendar", "japanese");
        assert_eq!(id, "en_US@calendar=japanese;numbers=latn");
        let id = with_keyword_value(&id, "calendar", "buddhist");
        assert_eq!(id, "en_US@calendar=buddhist;numbers=latn");
    }

    #[test]
    fn oversized_value_is_absent() {
        let big = "x".repeat(KEYWORD_VALUE_CAPACITY + 1);
        let id = format!("en_US@calendar={}", big);
        assert_eq!(keyword_value(&id, "calendar"), None);
        assert_eq!(with_keyword_value("en_US", "calendar", &big), "en_US");
    }

    #[test]
    fn removal_drops_empty_section() {
        assert_eq!(without_keyword("en_US@calendar=japanese", "ca"), "en_US");
        assert_eq!(
            without_keyword("en_US@calendar=japanese;numbers=latn", "numbers"),
            "en_US@calendar=japanese"
        );
    }
}
