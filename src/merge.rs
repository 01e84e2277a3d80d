//! Deep merge of a patch tree into an existing translation tree.
//!
//! The merge is additive: keys that only exist in the target survive at every
//! depth. When the two sides disagree on the shape of a key (string vs.
//! object) the patch wins and the previous value is dropped without a
//! warning. That silent coercion is a known sharp edge; it is counted in
//! [`MergeReport::coerced`] but never turned into an error.

use crate::tree::{
    TranslationNode,
    TranslationTree,
};

/// Counters describing what a merge did to the target tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Leaves added under keys that did not exist.
    pub inserted: usize,
    /// Existing values replaced by a different leaf.
    pub updated: usize,
    /// Existing leaves that already held the patch value.
    pub unchanged: usize,
    /// Objects created to host nested patch keys.
    pub branches_created: usize,
    /// Keys whose shape was forced to match the patch.
    pub coerced: usize,
}

impl MergeReport {
    /// Whether the merge modified the target at all.
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.inserted + self.updated + self.branches_created + self.coerced > 0
    }
}

/// Merge `patch` into `existing` in place.
///
/// For every key of `patch`, in order:
/// - an object value makes sure `existing[key]` is an object (replacing a
///   missing or non-object value with `{}`) and recurses into it;
/// - any other value overwrites `existing[key]`, whatever it held before.
///
/// Replaced keys keep their position; new keys are appended.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use translation_merger::merge::merge;
/// use translation_merger::tree::TranslationTree;
///
/// let mut existing: TranslationTree = serde_json::from_value(json!({
///     "email": { "subject": { "placeholder": "..." }, "title": "..." }
/// })).unwrap();
/// let patch: TranslationTree = serde_json::from_value(json!({
///     "email": { "subject": { "label": "Asunto" } }
/// })).unwrap();
///
/// let report = merge(&mut existing, &patch);
///
/// assert_eq!(report.inserted, 1);
/// assert_eq!(
///     serde_json::to_value(&existing).unwrap(),
///     json!({ "email": { "subject": { "placeholder": "...", "label": "Asunto" }, "title": "..." } })
/// );
/// ```
pub fn merge(existing: &mut TranslationTree, patch: &TranslationTree) -> MergeReport {
    let mut report = MergeReport::default();
    merge_level(existing, patch, None, &mut report);
    report
}

/// Merge one level of the tree, recursing into object values.
fn merge_level(
    existing: &mut TranslationTree,
    patch: &TranslationTree,
    prefix: Option<&str>,
    report: &mut MergeReport,
) {
    for (key, value) in patch {
        let full_key = prefix.map_or_else(|| key.clone(), |p| format!("{p}.{key}"));

        if let TranslationNode::Branch(sub_patch) = value {
            let slot = existing.entry(key.clone()).or_insert_with(|| {
                report.branches_created += 1;
                TranslationNode::Branch(TranslationTree::new())
            });

            if !slot.is_branch() {
                tracing::debug!(key = %full_key, "Replacing non-object value with an object");
                report.coerced += 1;
                report.branches_created += 1;
                *slot = TranslationNode::Branch(TranslationTree::new());
            }

            if let TranslationNode::Branch(sub_existing) = slot {
                merge_level(sub_existing, sub_patch, Some(&full_key), report);
            }
            continue;
        }

        match existing.insert(key.clone(), value.clone()) {
            None => report.inserted += 1,
            Some(TranslationNode::Branch(_)) => {
                tracing::debug!(key = %full_key, "Replacing object with a single value");
                report.coerced += 1;
                report.updated += 1;
            }
            Some(previous) if &previous == value => report.unchanged += 1,
            Some(_) => report.updated += 1,
        }
    }
}
