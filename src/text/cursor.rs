//! Cursor positions and the ordered cursor set.

/// A `(row, col)` position in a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cursor {
    /// Line number (0-indexed).
    pub row: usize,
    /// Column number (0-indexed), may lie past the end of the line.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Cursor {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// Ordered collection of distinct cursors.
///
/// Order is creation order, not position order. The set is never empty and
/// holds no duplicates after any public operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CursorSet {
    cursors: Vec<Cursor>,
}

impl Default for CursorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorSet {
    /// A single cursor at `(0, 0)`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursors: vec![Cursor::default()],
        }
    }

    /// Build a set from cursors in order, dropping later duplicates.
    /// An empty input gives the default single cursor.
    #[must_use]
    pub fn from_cursors<I, C>(cursors: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cursor>,
    {
        let mut set = Self {
            cursors: cursors.into_iter().map(Into::into).collect(),
        };
        if set.cursors.is_empty() {
            return Self::new();
        }
        set.normalize();
        set
    }

    /// Remove later duplicates, keeping first-seen order.
    pub fn normalize(&mut self) {
        let mut seen = Vec::with_capacity(self.cursors.len());
        self.cursors.retain(|cursor| {
            if seen.contains(cursor) {
                false
            } else {
                seen.push(*cursor);
                true
            }
        });
    }

    /// Replace every cursor with `transform(cursor)`, then normalize.
    pub fn map<F>(&mut self, transform: F)
    where
        F: FnMut(Cursor) -> Cursor,
    {
        self.cursors = self.cursors.iter().copied().map(transform).collect();
        self.normalize();
    }

    /// The current cursors in order, detached from the set.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Cursor> {
        self.cursors.clone()
    }

    /// Append the cursors of `other` not already present.
    pub fn union(&mut self, other: impl IntoIterator<Item = Cursor>) {
        self.cursors.extend(other);
        self.normalize();
    }

    /// Number of cursors (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Always false; a cursor set is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over cursors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cursor> {
        self.cursors.iter()
    }

    /// Cursors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Cursor] {
        &self.cursors
    }

    /// The first cursor, which the view follows.
    #[must_use]
    pub fn primary(&self) -> Cursor {
        self.cursors[0]
    }

    /// Check if `cursor` is in the set.
    #[must_use]
    pub fn contains(&self, cursor: Cursor) -> bool {
        self.cursors.contains(&cursor)
    }
}

impl<'a> IntoIterator for &'a CursorSet {
    type Item = &'a Cursor;
    type IntoIter = std::slice::Iter<'a, Cursor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_single_origin_cursor() {
        let set = CursorSet::new();
        assert_eq!(set.as_slice(), &[Cursor::new(0, 0)]);
        assert_eq!(set.primary(), Cursor::new(0, 0));
    }

    #[test]
    fn test_from_cursors_keeps_first_occurrence() {
        let set = CursorSet::from_cursors([(1, 0), (0, 0), (1, 0), (2, 2)]);
        assert_eq!(
            set.as_slice(),
            &[Cursor::new(1, 0), Cursor::new(0, 0), Cursor::new(2, 2)]
        );
    }

    #[test]
    fn test_from_empty_gives_default() {
        let set = CursorSet::from_cursors(Vec::<Cursor>::new());
        assert_eq!(set, CursorSet::new());
    }

    #[test]
    fn test_map_merges_collisions() {
        let mut set = CursorSet::from_cursors([(0, 1), (0, 2), (1, 5)]);
        set.map(|c| Cursor::new(c.row, 0));
        assert_eq!(set.as_slice(), &[Cursor::new(0, 0), Cursor::new(1, 0)]);
    }

    #[test]
    fn test_union_appends_new_positions() {
        let mut set = CursorSet::from_cursors([(1, 1)]);
        set.union([Cursor::new(0, 1), Cursor::new(1, 1)]);
        assert_eq!(set.as_slice(), &[Cursor::new(1, 1), Cursor::new(0, 1)]);
        assert!(set.contains(Cursor::new(0, 1)));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut set = CursorSet::from_cursors([(0, 0), (0, 1)]);
        let snapshot = set.snapshot();
        set.map(|c| Cursor::new(c.row, c.col + 1));
        assert_eq!(snapshot, vec![Cursor::new(0, 0), Cursor::new(0, 1)]);
        assert_eq!(set.len(), 2);
    }
}
