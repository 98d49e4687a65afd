use windowing::{Align, TableRow, VirtualList, VirtualTable, Window};

/// A single-axis windowed view that a [`crate::Controller`] can drive.
///
/// Offsets are in scroll coordinates: for a table that means the rows area, excluding the
/// sticky header.
pub trait ScrollTarget {
    fn scroll_offset(&self) -> i64;
    fn set_scroll_offset(&mut self, offset: i64);
    fn viewport_extent(&self) -> u32;
    fn set_viewport_extent(&mut self, extent: u32);
    fn clamp_scroll_offset(&self, offset: i64) -> i64;
    fn scroll_to_index_offset(&self, index: usize, align: Align) -> i64;
    fn window(&self) -> Window;
    /// Index of the item under `offset`, or `None` when empty.
    fn index_at_offset(&self, offset: i64) -> Option<usize>;
    /// Start of `index` in scroll coordinates.
    fn item_start(&self, index: usize) -> Option<u64>;
}

impl ScrollTarget for VirtualList {
    fn scroll_offset(&self) -> i64 {
        VirtualList::scroll_offset(self)
    }

    fn set_scroll_offset(&mut self, offset: i64) {
        VirtualList::set_scroll_offset(self, offset);
    }

    fn viewport_extent(&self) -> u32 {
        self.viewport().extent
    }

    fn set_viewport_extent(&mut self, extent: u32) {
        VirtualList::set_viewport_extent(self, extent);
    }

    fn clamp_scroll_offset(&self, offset: i64) -> i64 {
        VirtualList::clamp_scroll_offset(self, offset)
    }

    fn scroll_to_index_offset(&self, index: usize, align: Align) -> i64 {
        VirtualList::scroll_to_index_offset(self, index, align)
    }

    fn window(&self) -> Window {
        VirtualList::window(self)
    }

    fn index_at_offset(&self, offset: i64) -> Option<usize> {
        VirtualList::index_at_offset(self, offset)
    }

    fn item_start(&self, index: usize) -> Option<u64> {
        self.item_offset(index)
    }
}

impl<R: TableRow> ScrollTarget for VirtualTable<R> {
    fn scroll_offset(&self) -> i64 {
        VirtualTable::scroll_offset(self)
    }

    fn set_scroll_offset(&mut self, offset: i64) {
        VirtualTable::set_scroll_offset(self, offset);
    }

    fn viewport_extent(&self) -> u32 {
        self.viewport().extent
    }

    fn set_viewport_extent(&mut self, extent: u32) {
        self.set_container_height(extent);
    }

    fn clamp_scroll_offset(&self, offset: i64) -> i64 {
        VirtualTable::clamp_scroll_offset(self, offset)
    }

    fn scroll_to_index_offset(&self, index: usize, align: Align) -> i64 {
        VirtualTable::scroll_to_index_offset(self, index, align)
    }

    fn window(&self) -> Window {
        VirtualTable::window(self)
    }

    fn index_at_offset(&self, offset: i64) -> Option<usize> {
        windowing::index_at_offset(offset, self.config().row_height(), self.row_count())
    }

    fn item_start(&self, index: usize) -> Option<u64> {
        (index < self.row_count())
            .then(|| windowing::item_offset(index, self.config().row_height()))
    }
}
