//! Identifier form conversion. Canonicalization itself is owned by the
//! data service; these transforms are best-effort and never fatal, an
//! identifier the service cannot canonicalize passes through unchanged.

use crate::components::{Components, UNDETERMINED_LANGUAGE};
use crate::provider::LocaleData;

/// Target identifier forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierForm {
    /// ICU-style: `ll_Ssss_RR@key=value;...` with legacy keyword names.
    Canonical,
    /// BCP47-like tag: `ll-Ssss-RR-u-kk-value`. Lossy for keywords
    /// without a two-letter key.
    Bcp47,
    /// Canonical with the CLDR root spelling for a bare undetermined
    /// language.
    Cldr,
}

/// Canonical form of `identifier`, falling back to the input itself
/// when the data service cannot canonicalize it.
pub fn canonical_form(identifier: &str, data: &dyn LocaleData) -> String {
    data.canonicalize(identifier)
        .unwrap_or_else(|| identifier.to_string())
}

/// Converts `identifier` to the requested form. `None` when the
/// identifier does not decompose at all.
pub fn to_form(identifier: &str, form: IdentifierForm, data: &dyn LocaleData) -> Option<String> {
    let canonical = canonical_form(identifier, data);
    let comps = Components::from_identifier(&canonical)?;
    match form {
        IdentifierForm::Canonical => Some(comps.identifier()),
        IdentifierForm::Bcp47 => Some(comps.bcp47_identifier()),
        IdentifierForm::Cldr => {
            // Separator replacement applies to the subtag section only;
            // keyword values keep their dashes.
            let rendered = comps.identifier();
            let rendered = match rendered.split_once('@') {
                Some((base, section)) => {
                    format!("{}@{}", base.replace('-', "_"), section)
                }
                None => rendered.replace('-', "_"),
            };
            // Only a fully bare undetermined language becomes root;
            // any remaining subtag keeps the und spelling.
            if comps.is_undetermined() && comps.is_bare_language() {
                Some(rendered.replacen(UNDETERMINED_LANGUAGE, "root", 1))
            } else {
                Some(rendered)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icu_data::IcuLocaleData;

    #[test]
    fn canonical_is_best_effort() {
        let data = IcuLocaleData::new();
        // Junk passes through unchanged rather than erroring.
        assert_eq!(canonical_form("not a locale!", &data), "not a locale!");
        assert_eq!(canonical_form("EN-us", &data), "en_US");
    }

    #[test]
    fn cldr_form_root() {
        let data = IcuLocaleData::new();
        assert_eq!(to_form("und", IdentifierForm::Cldr, &data).as_deref(), Some("root"));
        // Subtags suppress the root spelling.
        assert_eq!(
            to_form("und_AE", IdentifierForm::Cldr, &data).as_deref(),
            Some("und_AE")
        );
        assert_eq!(
            to_form("und@calendar=gregorian", IdentifierForm::Cldr, &data).as_deref(),
            Some("root@calendar=gregorian")
        );
    }

    #[test]
    fn bcp47_form() {
        let data = IcuLocaleData::new();
        assert_eq!(
            to_form("ar_AE@calendar=islamic-civil;numbers=arab", IdentifierForm::Bcp47, &data)
                .as_deref(),
            Some("ar-AE-u-ca-islamic-civil-nu-arab")
        );
    }
}
