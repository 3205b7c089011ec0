//! First-wins collection of per-field failures.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::FieldPath;

/// Field-scoped failures collected during one validation pass.
///
/// The report holds at most one error per path: the first failure recorded
/// for a path wins and later ones for the same path are dropped. Iteration
/// is ordered by path. A report is built fresh per pass and replaced
/// wholesale by the next one; there is deliberately no merge operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport<E> {
    entries: BTreeMap<FieldPath, E>,
}

impl<E> FieldReport<E> {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records a failure for `path` unless one is already present.
    pub fn record(&mut self, path: FieldPath, error: E) {
        self.entries.entry(path).or_insert(error);
    }

    /// Returns the failure recorded for `path`, if any.
    #[must_use]
    pub fn get(&self, path: &FieldPath) -> Option<&E> {
        self.entries.get(path)
    }

    /// Number of failing paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pass recorded no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldPath, &E)> {
        self.entries.iter()
    }

    /// Failing paths in path order.
    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.entries.keys()
    }
}

impl<E> Default for FieldReport<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Display> fmt::Display for FieldReport<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (path, error)) in self.entries.iter().enumerate() {
            if position > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{path}: {error}")?;
        }
        Ok(())
    }
}

impl<E: fmt::Display + fmt::Debug> std::error::Error for FieldReport<E> {}

/// Serializes as a flat object of dotted path to rendered message, the
/// shape rendering collaborators consume.
impl<E: fmt::Display> Serialize for FieldReport<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, error) in &self.entries {
            map.serialize_entry(path, &error.to_string())?;
        }
        map.end()
    }
}
