use core::ops::Range;

/// Alignment used when scrolling an item into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Auto,
}

/// The current reading of one scroll axis.
///
/// `scroll_offset` is signed: hosts routinely report transiently negative offsets during
/// momentum/overscroll, and the calculators clamp those instead of rejecting them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_offset: i64,
    /// Visible span in the scroll axis.
    pub extent: u32,
}

impl Viewport {
    pub fn new(scroll_offset: i64, extent: u32) -> Self {
        Self {
            scroll_offset,
            extent,
        }
    }
}

/// The current reading of both axes of a scrollable grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridViewport {
    pub scroll_top: i64,
    pub scroll_left: i64,
    /// Visible width.
    pub width: u32,
    /// Visible height.
    pub height: u32,
}

impl GridViewport {
    pub fn new(scroll_top: i64, scroll_left: i64, width: u32, height: u32) -> Self {
        Self {
            scroll_top,
            scroll_left,
            width,
            height,
        }
    }
}

/// The contiguous index range that must be materialized.
///
/// Both ends are inclusive. An empty window (no items at all) is reported with
/// `item_count == 0`; in that case `start_index` and `end_index` are both `0` and carry no
/// meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_index: usize,
    pub end_index: usize, // inclusive
    pub item_count: usize,
}

impl Window {
    pub const fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            item_count: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Number of materialized indexes.
    pub fn len(&self) -> usize {
        self.indices().len()
    }

    /// The materialized indexes as a half-open range.
    ///
    /// A hand-built or deserialized window with `start_index > end_index` yields `0..0`.
    pub fn indices(&self) -> Range<usize> {
        if self.is_empty() || self.start_index > self.end_index {
            0..0
        } else {
            self.start_index..self.end_index.saturating_add(1)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::empty()
    }
}

/// One materialized item of a list or table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VirtualItem {
    pub index: usize,
    /// Absolute start offset in the scroll axis (includes any fixed header).
    pub offset: u64,
    /// Size in the scroll axis.
    pub extent: u32,
}

impl VirtualItem {
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.extent as u64)
    }
}

/// Row and column bounds of a grid window. All bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridWindow {
    pub start_row: usize,
    pub end_row: usize,
    pub start_col: usize,
    pub end_col: usize,
    pub columns_per_row: usize,
    pub rows_count: usize,
    pub item_count: usize,
}

impl GridWindow {
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    // `columns_per_row` is a public field; a zero from outside still decomposes as one column.
    fn columns(&self) -> usize {
        self.columns_per_row.max(1)
    }

    /// Calls `f` with every populated flat index inside the rectangle, in row-major order.
    ///
    /// Cells of a trailing partial row that fall past `item_count` are skipped.
    pub fn for_each_index(&self, mut f: impl FnMut(usize)) {
        if self.is_empty() {
            return;
        }
        for row in self.start_row..=self.end_row {
            let row_base = row.saturating_mul(self.columns());
            for col in self.start_col..=self.end_col {
                let index = row_base.saturating_add(col);
                if index >= self.item_count {
                    break;
                }
                f(index);
            }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        if self.is_empty() || index >= self.item_count {
            return false;
        }
        let row = index / self.columns();
        let col = index % self.columns();
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }
}

/// One materialized grid cell with its absolute position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub left: u64,
    pub top: u64,
    pub width: u32,
    pub height: u32,
}
