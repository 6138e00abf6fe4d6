use crate::DiffEngineKind;
use crate::artifacts::diff::change::Change;
use crate::artifacts::diff::classifier::merge_changes;
use crate::artifacts::diff::lines_engine::LinesEngine;
use crate::artifacts::diff::myers::{DiffAlgorithm, MyersDiff};

/// A line-diff engine producing the shared change-record shape.
///
/// Engines agree on record content but not on `Modify` grouping for
/// multi-line edits; see [`LinesEngine`].
pub trait DiffEngine {
    fn changes(&self, old_text: &str, new_text: &str) -> Vec<Change<String>>;
}

/// The from-scratch shortest-edit-script engine.
pub struct MyersEngine;

impl DiffEngine for MyersEngine {
    fn changes(&self, old_text: &str, new_text: &str) -> Vec<Change<String>> {
        compute_diff(old_text, new_text)
    }
}

pub fn engine_for(kind: DiffEngineKind) -> Box<dyn DiffEngine> {
    match kind {
        DiffEngineKind::Myers => Box::new(MyersEngine),
        DiffEngineKind::Lines => Box::new(LinesEngine),
    }
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Splits normalized text into lines. Empty text has zero lines, and the
/// empty line produced by a trailing terminator is dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = text.split('\n').map(str::to_string).collect::<Vec<_>>();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines
}

/// Computes the ordered change list between two texts.
///
/// Total over its domain: every input pair has a well-defined edit script,
/// so there is no error path. Byte-identical inputs short-circuit to a
/// single `Equal` record holding the entire unsplit text; every other path
/// produces line-granular records.
pub fn compute_diff(old_text: &str, new_text: &str) -> Vec<Change<String>> {
    if old_text == new_text {
        return vec![Change::Equal {
            value: old_text.to_string(),
        }];
    }

    let old_lines = split_lines(&normalize_newlines(old_text));
    let new_lines = split_lines(&normalize_newlines(new_text));

    let raw = MyersDiff::new(&old_lines, &new_lines)
        .diff()
        .into_iter()
        .map(Change::from)
        .collect();

    merge_changes(raw)
}

/// The minimal number of line insertions/deletions between two texts.
pub fn edit_distance(old_text: &str, new_text: &str) -> usize {
    if old_text == new_text {
        return 0;
    }

    let old_lines = split_lines(&normalize_newlines(old_text));
    let new_lines = split_lines(&normalize_newlines(new_text));

    MyersDiff::new(&old_lines, &new_lines).distance()
}
