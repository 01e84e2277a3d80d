//! Shared helpers for unit tests.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use serde_json::Value;

use crate::language::Language;
use crate::tree::TranslationTree;

/// Build a [`TranslationTree`] from a `json!` literal.
pub(crate) fn tree(value: Value) -> TranslationTree {
    serde_json::from_value(value).unwrap()
}

/// Write `value` as `<dir>/<code>.json` and return the path.
pub(crate) fn write_messages(dir: &Path, language: Language, value: &Value) -> PathBuf {
    let path = dir.join(format!("{}.json", language.code()));
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

/// Read `<dir>/<code>.json` back as a JSON value.
pub(crate) fn read_messages(dir: &Path, language: Language) -> Value {
    let content = fs::read_to_string(dir.join(format!("{}.json", language.code()))).unwrap();
    serde_json::from_str(&content).unwrap()
}
