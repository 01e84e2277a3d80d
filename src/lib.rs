//! translation-merger
//!
//! Merges the bundled invoice translations into a project's per-language
//! JSON message files without dropping keys the project already has.

pub mod catalog;
pub mod config;
pub mod error;
pub mod language;
pub mod merge;
pub mod store;
pub mod tree;
pub mod updater;

#[cfg(test)]
mod test_utils;

use std::path::Path;

pub use error::Error;
pub use language::Language;
pub use updater::{
    LanguageOutcome,
    Updater,
};

use crate::store::TranslationStore;

/// Load the project settings under `root` and update every configured language.
pub fn run(root: &Path) -> Result<Vec<LanguageOutcome>, Error> {
    let settings = config::load_settings(root)?;
    let store = TranslationStore::new(settings.messages_path(root), settings.indent_width);
    let updater = Updater::new(store, settings.resolved_languages()?);

    tracing::debug!(
        "Updating {} language(s) in {:?}",
        updater.languages().len(),
        settings.messages_path(root)
    );

    Ok(updater.run()?)
}
