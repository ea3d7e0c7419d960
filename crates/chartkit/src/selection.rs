//! Row selection shared between a chart and whoever drives the selection.

/// A set of selected row indices with a change counter.
///
/// Every mutation bumps [`Selection::version`], which charts compare against
/// the version they last built their highlighted points from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
    version: u64,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection of the given rows.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut selection = Self::new();
        selection.set_indices(indices);
        selection
    }

    /// Replaces the selected rows.
    pub fn set_indices(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.indices = indices.into_iter().collect();
        self.version += 1;
    }

    /// Adds one row.
    pub fn push(&mut self, index: usize) {
        self.indices.push(index);
        self.version += 1;
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.version += 1;
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Number of mutations so far.
    pub fn version(&self) -> u64 {
        self.version
    }
}
