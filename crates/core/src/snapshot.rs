/// An owned copy of the working sequence captured at one instant.
///
/// Snapshots are values, never views: mutating the sequence after a
/// snapshot is taken leaves the snapshot unchanged.
///
/// `focus` holds the indices the algorithm was comparing or writing when the
/// snapshot was recorded, so a visualizer can highlight them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    items: Vec<T>,
    focus: Vec<usize>,
}

/// Snapshots in chronological recording order.
pub type Trace<T> = Vec<Snapshot<T>>;

impl<T: Clone> Snapshot<T> {
    /// Captures a copy of `items` along with the indices in focus.
    pub fn capture(items: &[T], focus: &[usize]) -> Self {
        Self {
            items: items.to_vec(),
            focus: focus.to_vec(),
        }
    }
}

impl<T> Snapshot<T> {
    /// Returns the captured sequence.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the indices in focus when the snapshot was recorded.
    #[must_use]
    pub fn focus(&self) -> &[usize] {
        &self.focus
    }

    /// Consumes the snapshot, returning the captured sequence.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
