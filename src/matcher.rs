//! Localization matching: picking the best available localization for
//! a user's preferred languages, then carrying a previously stored
//! locale identifier over to the winning language. Keyword overrides
//! that are locale-agnostic survive the substitution; ones invalid for
//! the new language are dropped.

use tinystr::TinyAsciiStr;
use tracing::debug;

use crate::components::Components;
use crate::identifier;
use crate::provider::LocaleData;

// Language plus likely script, the granularity localizations match at.
fn language_script_key(id: &str, data: &dyn LocaleData) -> Option<(String, String)> {
    let canonical = identifier::canonical_form(id, data);
    let maximized = data.maximize(&canonical)?;
    let comps = Components::from_identifier(&maximized)?;
    Some((
        comps.language.clone(),
        comps.script_code().unwrap_or("").to_string(),
    ))
}

/// Ordered intersection of the available localizations with the
/// preferred languages, in preference order.
pub fn preferred_localizations(
    available: &[&str],
    preferred_languages: &[&str],
    data: &dyn LocaleData,
) -> Vec<String> {
    let canonical_available: Vec<(String, Option<(String, String)>)> = available
        .iter()
        .map(|id| {
            let canonical = identifier::canonical_form(id, data);
            let key = language_script_key(&canonical, data);
            (canonical, key)
        })
        .collect();

    let mut out = Vec::new();
    for preferred in preferred_languages {
        let Some(wanted) = language_script_key(preferred, data) else {
            continue;
        };
        for (candidate, key) in &canonical_available {
            if key.as_ref() == Some(&wanted) && !out.contains(candidate) {
                out.push(candidate.clone());
            }
        }
    }
    out
}

/// Picks the best identifier for an app that ships `available`
/// localizations, given the user's `preferred_languages` and their
/// previously stored `preferred_locale` identifier.
///
/// When the stored identifier already speaks the winning localization's
/// language it is returned untouched, keyword overrides and all.
/// Otherwise the winner's language and script are overlaid onto the
/// stored identifier's maximized components and the result is
/// re-canonicalized.
pub fn best_matching_identifier(
    available: &[&str],
    preferred_languages: &[&str],
    preferred_locale: &str,
    data: &dyn LocaleData,
) -> Option<String> {
    let matches = preferred_localizations(available, preferred_languages, data);
    let winner = matches.first()?;
    debug!(winner = %winner, "matched localization");

    let preferred_canonical = identifier::canonical_form(preferred_locale, data);
    let winner_key = language_script_key(winner, data)?;
    if language_script_key(&preferred_canonical, data).as_ref() == Some(&winner_key) {
        return Some(preferred_canonical);
    }

    let maximized = data.maximize(&preferred_canonical)?;
    let mut comps = Components::from_identifier(&maximized)?;
    comps.language = winner_key.0.clone();
    comps.script = TinyAsciiStr::try_from_str(&winner_key.1).ok();

    // The numbering system survives only while valid for the new
    // language. The head of the validity list is the implicit default
    // and is omitted rather than written out.
    if let Some(numbers) = comps.keyword("numbers").map(str::to_string) {
        let valid = data.valid_numbering_systems(&comps.language);
        let explicit = valid.iter().skip(1).any(|v| *v == numbers);
        if !explicit {
            comps.keywords.remove("numbers");
        }
    }

    // Shed a script the new language/region pair already implies.
    if let (Some(script), Some(region)) = (
        comps.script_code().map(str::to_string),
        comps.region_code().map(str::to_string),
    ) {
        let probe = format!("{}_{}", comps.language, region);
        let implied = data
            .maximize(&probe)
            .and_then(|max| Components::from_identifier(&max))
            .and_then(|c| c.script_code().map(str::to_string));
        if implied.as_deref() == Some(script.as_str()) {
            comps.script = None;
        }
    }

    Some(identifier::canonical_form(&comps.identifier(), data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icu_data::IcuLocaleData;

    #[test]
    fn language_substitution_preserves_agnostic_keywords() {
        let data = IcuLocaleData::new();
        let best = best_matching_identifier(
            &["en", "fr", "de"],
            &["ar-AE", "en-AE"],
            "ar_AE@numbers=arab;calendar=islamic-civil",
            &data,
        );
        // Language replaced, calendar preserved, numbering system
        // dropped because arab digits are not valid for English.
        assert_eq!(best.as_deref(), Some("en_AE@calendar=islamic-civil"));
    }

    #[test]
    fn matching_language_returns_stored_identifier() {
        let data = IcuLocaleData::new();
        let best = best_matching_identifier(
            &["en", "fr"],
            &["en-US"],
            "en_US@calendar=japanese;numbers=arab",
            &data,
        );
        assert_eq!(best.as_deref(), Some("en_US@calendar=japanese;numbers=arab"));
    }

    #[test]
    fn no_overlap_fails() {
        let data = IcuLocaleData::new();
        assert_eq!(
            best_matching_identifier(&["de", "fr"], &["ja"], "ja_JP", &data),
            None
        );
    }

    #[test]
    fn preference_order_wins() {
        let data = IcuLocaleData::new();
        let matches = preferred_localizations(&["de", "fr", "en"], &["fr-FR", "en-US"], &data);
        assert_eq!(matches, vec!["fr", "en"]);
    }

    #[test]
    fn valid_numbering_system_survives() {
        let data = IcuLocaleData::new();
        // deva digits are explicitly valid (non-default) for Hindi, so
        // the keyword survives the move from English to Hindi.
        let best = best_matching_identifier(
            &["hi", "fr"],
            &["hi-IN"],
            "en_IN@numbers=deva",
            &data,
        );
        assert_eq!(best.as_deref(), Some("hi_IN@numbers=deva"));
    }
}
