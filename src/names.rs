//! Display-name resolution. A name is looked up against a prioritized
//! list of display languages, and answers the data service flags as
//! generic fallbacks are rejected so a locale-agnostic name never
//! masquerades as a localized one.

use tracing::trace;

use crate::components::Components;
use crate::identifier;
use crate::preferences::Preferences;
use crate::provider::{LocaleData, NameKind, NameOutcome};

// The service names codes only in the context of a full identifier, so
// bare codes are wrapped in a throwaway one.
fn embedded_identifier(kind: NameKind, code: &str) -> Option<String> {
    match kind {
        NameKind::Identifier | NameKind::Language | NameKind::Currency => Some(code.to_string()),
        NameKind::Region => {
            let comps = Components::from_identifier(&format!("und_{}", code)).filter(|c| {
                c.region.is_some()
            })?;
            Some(comps.identifier())
        }
        NameKind::Script => {
            let comps = Components::from_identifier(&format!("und_{}", code)).filter(|c| {
                c.script.is_some()
            })?;
            Some(comps.identifier())
        }
        NameKind::Variant => {
            let comps = Components::from_identifier(&format!("und_{}", code)).filter(|c| {
                c.variant.is_some()
            })?;
            Some(comps.identifier())
        }
        NameKind::Calendar => Some(format!("und@calendar={}", code.to_ascii_lowercase())),
        NameKind::Collation => Some(format!("und@collation={}", code.to_ascii_lowercase())),
    }
}

/// Resolves the display name of `code` as seen from `identifier`,
/// falling back through the preferred-language list. Absent when every
/// candidate is exhausted.
pub(crate) fn resolve_display_name(
    kind: NameKind,
    code: &str,
    identifier: &str,
    prefs: &Preferences,
    data: &dyn LocaleData,
) -> Option<String> {
    let embedded = embedded_identifier(kind, code)?;

    let mut candidates = vec![identifier.to_string()];
    for language in prefs.effective_languages() {
        if !candidates.contains(&language) {
            candidates.push(language);
        }
    }

    for candidate in candidates {
        let display_language = identifier::canonical_form(&candidate, data);
        match data.display_name(kind, &embedded, &display_language) {
            NameOutcome::Localized(name) => return Some(name),
            NameOutcome::Fallback(_) if kind == NameKind::Identifier => {
                // Sanctioned retry: a generic full-identifier answer
                // may still have a genuinely localized language part.
                if let Some(language) = Components::from_identifier(code).map(|c| c.language) {
                    if let NameOutcome::Localized(name) =
                        data.display_name(NameKind::Language, &language, &display_language)
                    {
                        return Some(name);
                    }
                }
            }
            NameOutcome::Fallback(_) | NameOutcome::Missing => {
                trace!(
                    ?kind,
                    code,
                    display_language = %display_language,
                    "display name miss, trying next candidate"
                );
            }
        }
    }
    None
}
