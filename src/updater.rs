//! Sequential read → merge → write over the message files.
//!
//! Languages are handled one at a time. The first failure stops the run;
//! files written for earlier languages stay as written.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{
    self,
    CatalogError,
};
use crate::language::Language;
use crate::merge::{
    MergeReport,
    merge,
};
use crate::store::{
    StoreError,
    TranslationStore,
};
use crate::tree::{
    TranslationTree,
    flatten_tree,
};

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result of updating one language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutcome {
    pub language: Language,
    pub path: PathBuf,
    pub report: MergeReport,
}

/// Applies the bundled translations to a [`TranslationStore`].
#[derive(Debug, Clone)]
pub struct Updater {
    store: TranslationStore,
    languages: Vec<Language>,
}

impl Updater {
    #[must_use]
    pub const fn new(store: TranslationStore, languages: Vec<Language>) -> Self {
        Self { store, languages }
    }

    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Update every configured language in order.
    pub fn run(&self) -> Result<Vec<LanguageOutcome>, UpdateError> {
        self.languages.iter().map(|&language| self.update_language(language)).collect()
    }

    /// Merge the bundled translations for `language` into its message file.
    pub fn update_language(&self, language: Language) -> Result<LanguageOutcome, UpdateError> {
        let mut existing = self.store.load(language)?;
        let patch = catalog::patch_for(language)?;
        self.merge_and_save(language, &mut existing, &patch)
    }

    /// Merge an arbitrary `patch` into the message file for `language`.
    pub fn apply(
        &self,
        language: Language,
        patch: &TranslationTree,
    ) -> Result<LanguageOutcome, UpdateError> {
        let mut existing = self.store.load(language)?;
        self.merge_and_save(language, &mut existing, patch)
    }

    /// Shared tail of [`Self::update_language`] and [`Self::apply`].
    fn merge_and_save(
        &self,
        language: Language,
        existing: &mut TranslationTree,
        patch: &TranslationTree,
    ) -> Result<LanguageOutcome, UpdateError> {
        let report = merge(existing, patch);
        if report.coerced > 0 {
            tracing::debug!(
                language = %language,
                coerced = report.coerced,
                "Existing values were replaced to match the shape of the new translations"
            );
        }

        self.store.save(language, existing)?;

        let file_path = self.store.path_for(language);
        tracing::info!(
            language = %language,
            inserted = report.inserted,
            updated = report.updated,
            keys = flatten_tree(existing, ".").len(),
            "Updated translations for {language}"
        );

        Ok(LanguageOutcome { language, path: file_path, report })
    }
}
