//! Bundled translation tables.
//!
//! One JSON asset per language is compiled into the binary. The assets hold
//! the `invoice` namespace (export dialog, address swap, email dialog, list
//! filters, status selector) that gets merged into the project's message
//! files.

use thiserror::Error;

use crate::language::Language;
use crate::tree::TranslationTree;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Bundled translations for '{language}' are not valid")]
    Decode {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
}

/// Raw embedded asset for `language`.
const fn asset(language: Language) -> &'static str {
    match language {
        Language::En => include_str!("../assets/translations/en.json"),
        Language::Es => include_str!("../assets/translations/es.json"),
        Language::Pt => include_str!("../assets/translations/pt.json"),
        Language::Pl => include_str!("../assets/translations/pl.json"),
        Language::Zh => include_str!("../assets/translations/zh.json"),
        Language::De => include_str!("../assets/translations/de.json"),
        Language::Fr => include_str!("../assets/translations/fr.json"),
    }
}

/// Decode the bundled patch tree for `language`.
pub fn patch_for(language: Language) -> Result<TranslationTree, CatalogError> {
    serde_json::from_str(asset(language))
        .map_err(|source| CatalogError::Decode { language, source })
}
