//! Reading and writing per-language message files.
//!
//! Files live at `<messages_dir>/<code>.json`. Each read or write opens the
//! file, does its work and drops the handle before returning.

use std::fs::File;
use std::io::{
    BufReader,
    BufWriter,
    Write,
};
use std::path::{
    Path,
    PathBuf,
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::language::Language;
use crate::tree::TranslationTree;

/// Default indentation of written files.
pub const DEFAULT_INDENT: usize = 2;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read translation file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse translation file {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize translation file {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write translation file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Message files of one project.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    messages_dir: PathBuf,
    indent: usize,
}

impl TranslationStore {
    #[must_use]
    pub fn new(messages_dir: impl Into<PathBuf>, indent: usize) -> Self {
        Self { messages_dir: messages_dir.into(), indent }
    }

    #[must_use]
    pub fn messages_dir(&self) -> &Path {
        &self.messages_dir
    }

    /// Path of the message file for `language`.
    #[must_use]
    pub fn path_for(&self, language: Language) -> PathBuf {
        self.messages_dir.join(format!("{}.json", language.code()))
    }

    pub fn load(&self, language: Language) -> Result<TranslationTree, StoreError> {
        read_tree(&self.path_for(language))
    }

    pub fn save(&self, language: Language, tree: &TranslationTree) -> Result<(), StoreError> {
        write_tree(&self.path_for(language), tree, self.indent)
    }
}

/// Decode the translation tree stored at `path`.
///
/// The root must be a JSON object.
pub fn read_tree(path: &Path) -> Result<TranslationTree, StoreError> {
    tracing::debug!("Reading translations from: {:?}", path);

    let file =
        File::open(path).map_err(|source| StoreError::Read { path: path.to_path_buf(), source })?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| StoreError::Decode { path: path.to_path_buf(), source })
}

/// Write `tree` to `path`, replacing any previous content.
///
/// # Arguments
/// * `path` - Message file to create or truncate
/// * `tree` - Tree to serialize, in its current key order
/// * `indent` - Spaces per nesting level
///
/// Non-ASCII text is written unescaped and no trailing newline is added.
pub fn write_tree(path: &Path, tree: &TranslationTree, indent: usize) -> Result<(), StoreError> {
    tracing::debug!("Writing translations to: {:?}", path);

    let file = File::create(path)
        .map_err(|source| StoreError::Write { path: path.to_path_buf(), source })?;
    let mut writer = BufWriter::new(file);

    let indent = " ".repeat(indent);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(indent.as_bytes()));
    tree.serialize(&mut serializer)
        .map_err(|source| StoreError::Encode { path: path.to_path_buf(), source })?;

    writer.flush().map_err(|source| StoreError::Write { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{
        tree,
        write_messages,
    };

    #[rstest]
    fn test_path_for_language() {
        let store = TranslationStore::new("src/i18n/messages", DEFAULT_INDENT);

        assert_eq!(store.path_for(Language::Zh), Path::new("src/i18n/messages/zh.json"));
        assert_eq!(store.messages_dir(), Path::new("src/i18n/messages"));
    }

    #[rstest]
    fn test_write_format_two_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("de.json");

        write_tree(&path, &tree(json!({ "a": { "b": "x" }, "empty": {} })), DEFAULT_INDENT)
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\n  \"a\": {\n    \"b\": \"x\"\n  },\n  \"empty\": {}\n}");
    }

    #[rstest]
    fn test_write_custom_indent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");

        write_tree(&path, &tree(json!({ "a": "x" })), 4).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n    \"a\": \"x\"\n}");
    }

    #[rstest]
    fn test_write_keeps_non_ascii_literal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("zh.json");

        write_tree(&path, &tree(json!({ "title": "导出发票", "pl": "Wyślij" })), 2).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("导出发票"));
        assert!(content.contains("Wyślij"));
        assert!(!content.contains("\\u"));
    }

    #[rstest]
    fn test_write_replaces_longer_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fr.json");
        fs::write(&path, "x".repeat(1024)).unwrap();

        write_tree(&path, &tree(json!({})), 2).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[googletest::test]
    fn test_load_save_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let original = json!({
            "invoice": { "title": "Rechnung", "count": 2, "tags": ["a", "b"], "none": null },
            "common": { "ok": "OK" }
        });
        write_messages(temp_dir.path(), Language::De, &original);
        let store = TranslationStore::new(temp_dir.path(), DEFAULT_INDENT);

        let loaded = store.load(Language::De).unwrap();
        store.save(Language::De, &loaded).unwrap();
        let reloaded = store.load(Language::De).unwrap();

        expect_that!(reloaded, eq(&loaded));
        expect_that!(serde_json::to_value(&reloaded).unwrap(), eq(&original));
    }

    #[rstest]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = TranslationStore::new(temp_dir.path(), DEFAULT_INDENT);

        let result = store.load(Language::Pt);

        assert!(matches!(result, Err(StoreError::Read { .. })), "{result:?}");
    }

    #[rstest]
    #[case("{ not json")]
    #[case("[\"array\", \"root\"]")]
    #[case("\"string root\"")]
    #[case("")]
    fn test_load_malformed_file(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("pl.json"), content).unwrap();
        let store = TranslationStore::new(temp_dir.path(), DEFAULT_INDENT);

        let result = store.load(Language::Pl);

        assert!(matches!(result, Err(StoreError::Decode { .. })), "{result:?}");
    }

    #[rstest]
    fn test_save_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let store = TranslationStore::new(temp_dir.path().join("missing"), DEFAULT_INDENT);

        let result = store.save(Language::Es, &tree(json!({})));

        assert!(matches!(result, Err(StoreError::Write { .. })), "{result:?}");
    }

    #[rstest]
    fn test_error_message_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = TranslationStore::new(temp_dir.path(), DEFAULT_INDENT);

        let message = store.load(Language::Fr).unwrap_err().to_string();

        assert!(message.starts_with("Failed to read translation file"));
        assert!(message.contains("fr.json"));
    }

    #[rstest]
    fn test_error_message_leaves_cause_to_source() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("de.json"), "{ broken").unwrap();
        let store = TranslationStore::new(temp_dir.path(), DEFAULT_INDENT);

        let error = store.load(Language::De).unwrap_err();

        let cause = std::error::Error::source(&error).unwrap().to_string();
        assert!(!error.to_string().contains(&cause), "{error}");
    }
}
