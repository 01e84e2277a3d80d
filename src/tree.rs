//! Translation tree model
//!
//! A translation file is a JSON object whose values are either localized
//! strings or nested objects. Key order is kept as read so that rewriting a
//! file does not reshuffle it.

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_json::Value;

/// Ordered mapping from key to node. The root of every translation file.
pub type TranslationTree = IndexMap<String, TranslationNode>;

/// A single value inside a [`TranslationTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// Localized text, possibly containing placeholders such as `{recipient}`.
    Leaf(String),
    /// Nested namespace.
    Branch(TranslationTree),
    /// Any other JSON value (number, bool, null, array) found in an existing
    /// file. Carried through untouched and treated as a leaf when merging.
    Opaque(Value),
}

impl TranslationNode {
    /// Returns the text if this node is a string leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_branch(&self) -> Option<&TranslationTree> {
        match self {
            Self::Branch(tree) => Some(tree),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_branch(&self) -> bool {
        matches!(self, Self::Branch(_))
    }
}

/// Flatten a tree into `separator`-joined key paths.
///
/// Opaque values are rendered as their JSON text.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use translation_merger::tree::{flatten_tree, TranslationTree};
///
/// let tree: TranslationTree = serde_json::from_value(json!({
///     "invoice": { "email": { "title": "Send Invoice Email" } }
/// })).unwrap();
///
/// let flattened = flatten_tree(&tree, ".");
/// assert_eq!(flattened.get("invoice.email.title").map(String::as_str), Some("Send Invoice Email"));
/// ```
#[must_use]
pub fn flatten_tree(tree: &TranslationTree, separator: &str) -> IndexMap<String, String> {
    let mut result = IndexMap::new();
    flatten_into(tree, separator, None, &mut result);
    result
}

/// Recursive worker for [`flatten_tree`].
fn flatten_into(
    tree: &TranslationTree,
    separator: &str,
    prefix: Option<&str>,
    result: &mut IndexMap<String, String>,
) {
    for (key, node) in tree {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
        match node {
            TranslationNode::Branch(child) => {
                flatten_into(child, separator, Some(&full_key), result);
            }
            TranslationNode::Leaf(text) => {
                result.insert(full_key, text.clone());
            }
            TranslationNode::Opaque(value) => {
                result.insert(full_key, value.to_string());
            }
        }
    }
}

/// Look up a node by a `separator`-joined key path.
#[must_use]
pub fn lookup<'a>(tree: &'a TranslationTree, key: &str, separator: &str) -> Option<&'a TranslationNode> {
    let mut parts = key.split(separator);
    let mut node = tree.get(parts.next()?)?;
    for part in parts {
        node = node.as_branch()?.get(part)?;
    }
    Some(node)
}
