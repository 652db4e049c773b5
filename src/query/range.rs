//! Row-range normalization.

/// A window over the record set, passed explicitly to export calls.
///
/// Callers supply inclusive 1-based bounds; internally the range is an
/// offset plus a *count*:
///
/// - `offset = if start == 0 { 0 } else { start - 1 }`
/// - `len = if end == 0 { 0 } else { end - offset }`
///
/// The second bound becomes a count relative to the consumed offset, not an
/// absolute end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    offset: usize,
    len: usize,
}

impl RowRange {
    /// Build a range from inclusive 1-based bounds (`0` also addresses the
    /// first row). Returns `None` when `end < start`: a malformed range is
    /// discarded silently and no limiting applies.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        if end < start {
            return None;
        }
        let offset = if start == 0 { 0 } else { start - 1 };
        let len = if end == 0 { 0 } else { end - offset };
        Some(Self { offset, len })
    }

    /// The first `count` rows; equivalent to `RowRange::new(0, count)`.
    pub fn first(count: usize) -> Self {
        Self {
            offset: 0,
            len: count,
        }
    }

    /// Zero-based offset of the window.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Row count of the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for a zero-length window.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Apply the window to a slice, clamping at the end.
    pub(crate) fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = self.offset.min(rows.len());
        let end = (start + self.len).min(rows.len());
        &rows[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::RowRange;

    #[test]
    fn second_bound_becomes_a_count_not_an_end() {
        // 1-based [2, 5] covers rows 2..=5: offset 1, count 4.
        let r = RowRange::new(2, 5).unwrap();
        assert_eq!((r.offset(), r.len()), (1, 4));

        let rows: Vec<u32> = (1..=10).collect();
        assert_eq!(r.slice(&rows), &[2, 3, 4, 5]);
    }

    #[test]
    fn zero_start_is_the_first_row() {
        let r = RowRange::new(0, 3).unwrap();
        assert_eq!((r.offset(), r.len()), (0, 3));
        assert_eq!(RowRange::first(3), r);
    }

    #[test]
    fn zero_end_is_an_empty_window() {
        let r = RowRange::new(0, 0).unwrap();
        assert!(r.is_empty());
        let rows = [1, 2, 3];
        assert!(r.slice(&rows).is_empty());
    }

    #[test]
    fn inverted_bounds_discard_the_range() {
        assert_eq!(RowRange::new(5, 2), None);
    }

    #[test]
    fn slicing_clamps_past_the_end() {
        let r = RowRange::new(8, 20).unwrap();
        let rows = [1, 2, 3];
        assert!(r.slice(&rows).is_empty());

        let r = RowRange::new(2, 100).unwrap();
        assert_eq!(r.slice(&rows), &[2, 3]);
    }
}
