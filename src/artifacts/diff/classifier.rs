use crate::artifacts::diff::change::Change;

/// Collapses runs of consecutive deletes followed by equal-length runs of
/// inserts into paired `Modify` records.
///
/// Pairing is positional and only happens when the two runs have exactly the
/// same length; a pair whose lines are textually identical demotes to
/// `Equal`. Runs of unequal length pass through untouched, as do `Equal`,
/// `Insert` without a pending delete run, and `Modify` (which makes the pass
/// a fixed point on its own output).
pub fn merge_changes<T: Eq + Clone>(changes: Vec<Change<T>>) -> Vec<Change<T>> {
    if changes.len() <= 1 {
        return changes;
    }

    let mut result = Vec::with_capacity(changes.len());
    let mut i = 0;

    while i < changes.len() {
        if !matches!(changes[i], Change::Delete { .. }) {
            result.push(changes[i].clone());
            i += 1;
            continue;
        }

        // Collect the maximal run of consecutive deletes starting at i.
        let mut delete_lines = Vec::new();
        let mut j = i;
        while let Some(Change::Delete { value }) = changes.get(j) {
            delete_lines.push(value.clone());
            j += 1;
        }

        // Then the maximal run of consecutive inserts right after it.
        let mut insert_lines = Vec::new();
        let mut k = j;
        while let Some(Change::Insert { value }) = changes.get(k) {
            insert_lines.push(value.clone());
            k += 1;
        }

        if !insert_lines.is_empty() && delete_lines.len() == insert_lines.len() {
            for (old_value, new_value) in delete_lines.into_iter().zip(insert_lines) {
                if old_value == new_value {
                    result.push(Change::Equal { value: old_value });
                } else {
                    result.push(Change::Modify {
                        old_value,
                        new_value,
                    });
                }
            }
        } else {
            result.extend(
                delete_lines
                    .into_iter()
                    .map(|value| Change::Delete { value }),
            );
            result.extend(
                insert_lines
                    .into_iter()
                    .map(|value| Change::Insert { value }),
            );
        }

        i = k;
    }

    result
}
