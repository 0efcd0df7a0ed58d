//! Property-based invariant tests for identifier algebra.
//!
//! Verifies structural guarantees of canonicalization and the codec:
//!
//! 1. canonical_form is idempotent
//! 2. to_form(Canonical) applied twice is stable
//! 3. canonical_form never panics and never returns empty for
//!    non-empty input
//! 4. Components round-trip: parse -> render -> parse is identity
//! 5. Keyword injection is readable back through extraction
//! 6. The BCP47 rendering of structured components parses back to the
//!    same components
//! 7. measure=uksystem resolves to the UK system whatever the
//!    conflicting preferences say

use localekit::{
    Components, IcuLocaleData, IdentifierForm, Locale, MeasurementSystem, Preferences,
    canonical_form, keywords, to_form,
};
use proptest::prelude::*;
use std::sync::Arc;

// ── Strategies ───────────────────────────────────────────────────────

const LANGS: &[&str] = &[
    "en", "de", "fr", "ar", "zh", "th", "he", "pt", "ru", "ja", "hi", "und",
];
const SCRIPTS: &[&str] = &["Latn", "Arab", "Hans", "Hant", "Cyrl", "Deva"];
const REGIONS: &[&str] = &["US", "GB", "DE", "FR", "AE", "TH", "BR", "IN", "419"];
const CALENDARS: &[&str] = &["gregorian", "buddhist", "islamic-civil", "japanese", "hebrew"];
const NUMBERING: &[&str] = &["latn", "arab", "deva", "thai", "native", "default"];

prop_compose! {
    fn structured_identifier()(
        lang in prop::sample::select(LANGS),
        script in prop::option::of(prop::sample::select(SCRIPTS)),
        region in prop::option::of(prop::sample::select(REGIONS)),
        calendar in prop::option::of(prop::sample::select(CALENDARS)),
        numbers in prop::option::of(prop::sample::select(NUMBERING)),
    ) -> String {
        let mut id = lang.to_string();
        if let Some(s) = script {
            id.push('_');
            id.push_str(s);
        }
        if let Some(r) = region {
            id.push('_');
            id.push_str(r);
        }
        let mut pairs = Vec::new();
        if let Some(c) = calendar {
            pairs.push(format!("calendar={}", c));
        }
        if let Some(n) = numbers {
            pairs.push(format!("numbers={}", n));
        }
        if !pairs.is_empty() {
            id.push('@');
            id.push_str(&pairs.join(";"));
        }
        id
    }
}

// ═════════════════════════════════════════════════════════════════════
// 1. Canonicalization is idempotent
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn canonical_form_idempotent(id in structured_identifier()) {
        let data = IcuLocaleData::new();
        let once = canonical_form(&id, &data);
        let twice = canonical_form(&once, &data);
        prop_assert_eq!(once, twice);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 2. to_form(Canonical) is stable under repetition
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn to_canonical_form_stable(id in structured_identifier()) {
        let data = IcuLocaleData::new();
        let once = to_form(&id, IdentifierForm::Canonical, &data);
        prop_assume!(once.is_some());
        let once = once.unwrap();
        let twice = to_form(&once, IdentifierForm::Canonical, &data);
        prop_assert_eq!(Some(once), twice);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 3. Arbitrary input neither panics nor vanishes
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn canonical_form_total(id in "\\PC{1,40}") {
        let data = IcuLocaleData::new();
        let out = canonical_form(&id, &data);
        prop_assert!(!out.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════
// 4. Components round-trip
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn components_round_trip(id in structured_identifier()) {
        let comps = Components::from_identifier(&id).unwrap();
        let rendered = comps.identifier();
        let back = Components::from_identifier(&rendered).unwrap();
        prop_assert_eq!(comps, back);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 5. Keyword injection reads back
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn keyword_injection_reads_back(
        id in structured_identifier(),
        value in prop::sample::select(CALENDARS),
    ) {
        let with = keywords::with_keyword_value(&id, "calendar", value);
        let got = keywords::keyword_value(&with, "calendar");
        prop_assert_eq!(got.as_deref(), Some(value));
        // Other keywords survive the edit.
        if let Some(numbers) = keywords::keyword_value(&id, "numbers") {
            prop_assert_eq!(keywords::keyword_value(&with, "numbers"), Some(numbers));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════
// 6. BCP47 rendering parses back to the same components
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn bcp47_round_trip(id in structured_identifier()) {
        let comps = Components::from_identifier(&id).unwrap();
        let tag = comps.bcp47_identifier();
        let back = Components::from_identifier(&tag).unwrap();
        prop_assert_eq!(comps, back);
    }
}

// ═════════════════════════════════════════════════════════════════════
// 7. Measurement keyword beats every preference combination
// ═════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn uksystem_keyword_always_wins(
        pref in prop::option::of(prop::sample::select(vec![
            MeasurementSystem::Metric,
            MeasurementSystem::Us,
            MeasurementSystem::Uk,
        ])),
        region in prop::sample::select(REGIONS),
    ) {
        prop_assume!(region.chars().all(|c| c.is_ascii_alphabetic()));
        let data = Arc::new(IcuLocaleData::new());
        let id = format!("en_{}@measure=uksystem", region);
        let prefs = Preferences {
            measurement_system: pref,
            ..Default::default()
        };
        let locale = Locale::with_preferences(&id, prefs, data).unwrap();
        prop_assert_eq!(locale.measurement_system(), MeasurementSystem::Uk);
    }
}
