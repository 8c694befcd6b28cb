/// Vertical extent of one rendered row, in scroll-independent content
/// coordinates. `top` and `bottom` are both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub top: i32,
    pub bottom: i32,
}

/// Cache of per-row extents, written by the render pass on every draw and
/// read by the drag handler to turn a pointer position into a row index.
///
/// Indices with no recorded bounds (rows scrolled out of the viewport) are
/// simply skipped during lookup. The owner must call [`clear`](Self::clear)
/// whenever the list length changes; the next draw re-records everything.
#[derive(Debug, Default)]
pub struct RowBoundsMap {
    rows: Vec<Option<RowBounds>>,
}

impl RowBoundsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the bounds for a row. Idempotent; called once
    /// per visible row per draw.
    pub fn record(&mut self, index: usize, top: i32, bottom: i32) {
        if index >= self.rows.len() {
            self.rows.resize(index + 1, None);
        }
        self.rows[index] = Some(RowBounds { top, bottom });
    }

    /// Map a pointer Y position (viewport coordinates) to the first row
    /// whose scroll-adjusted bounds contain it. Overlapping rows resolve to
    /// the lowest index; a pointer above or below every row yields `None`.
    pub fn resolve_index(&self, pointer_y: i32, scroll_offset: i32) -> Option<usize> {
        self.rows.iter().enumerate().find_map(|(i, bounds)| {
            let b = (*bounds)?;
            let contains = pointer_y >= b.top - scroll_offset
                && pointer_y <= b.bottom - scroll_offset;
            contains.then_some(i)
        })
    }

    /// Invalidate every recorded row. Called when the list length changes.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|b| b.is_none())
    }
}
