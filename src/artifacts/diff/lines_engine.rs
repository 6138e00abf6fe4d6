use crate::artifacts::diff::change::Change;
use crate::artifacts::diff::engine::{DiffEngine, normalize_newlines};
use similar::{ChangeTag, TextDiff};

/// Alternate engine backed by the `similar` line diff.
///
/// Produces the same record shape as [`MyersEngine`] but pairs only a single
/// `Delete` immediately followed by a single `Insert` into `Modify`, with no
/// run collection. Multi-line edits therefore group differently between the
/// two engines; treat them as non-interchangeable.
///
/// [`MyersEngine`]: crate::artifacts::diff::engine::MyersEngine
pub struct LinesEngine;

impl DiffEngine for LinesEngine {
    fn changes(&self, old_text: &str, new_text: &str) -> Vec<Change<String>> {
        let old_text = normalize_newlines(old_text);
        let new_text = normalize_newlines(new_text);

        if old_text == new_text {
            return vec![Change::Equal { value: old_text }];
        }

        let diff = TextDiff::from_lines(&old_text, &new_text);
        let flat = diff
            .iter_all_changes()
            .map(|change| {
                let value = change.value().trim_end_matches('\n').to_string();
                match change.tag() {
                    ChangeTag::Delete => Change::Delete { value },
                    ChangeTag::Insert => Change::Insert { value },
                    ChangeTag::Equal => Change::Equal { value },
                }
            })
            .collect();

        merge_adjacent_pairs(flat)
    }
}

fn merge_adjacent_pairs(changes: Vec<Change<String>>) -> Vec<Change<String>> {
    let mut merged = Vec::with_capacity(changes.len());
    let mut i = 0;

    while i < changes.len() {
        if let (Change::Delete { value: old_value }, Some(Change::Insert { value: new_value })) =
            (&changes[i], changes.get(i + 1))
        {
            merged.push(Change::Modify {
                old_value: old_value.clone(),
                new_value: new_value.clone(),
            });
            i += 2;
        } else {
            merged.push(changes[i].clone());
            i += 1;
        }
    }

    merged
}
