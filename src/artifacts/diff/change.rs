use serde::Serialize;
use std::fmt::Display;

/// A raw edit operation as produced by the backtrace, before the merge pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

/// A caller-facing change record.
///
/// Same shape as [`Edit`] plus `Modify`, which the classifier emits when a
/// deleted run and an inserted run of equal length pair up line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Change<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
    Modify { old_value: T, new_value: T },
}

impl<T> From<Edit<T>> for Change<T> {
    fn from(edit: Edit<T>) -> Self {
        match edit {
            Edit::Delete { value } => Change::Delete { value },
            Edit::Insert { value } => Change::Insert { value },
            Edit::Equal { value } => Change::Equal { value },
        }
    }
}

impl<T> Change<T>
where
    T: Clone + Into<String>,
{
    pub fn as_string(&self) -> String {
        match self {
            Change::Delete { value } => format!("-{}", value.clone().into()),
            Change::Insert { value } => format!("+{}", value.clone().into()),
            Change::Equal { value } => format!(" {}", value.clone().into()),
            Change::Modify {
                old_value,
                new_value,
            } => format!(
                "~{} => {}",
                old_value.clone().into(),
                new_value.clone().into()
            ),
        }
    }
}

impl<T> Display for Change<T>
where
    T: Clone + Into<String>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
