//! A fixed-row-height table under a sticky header.
//!
//! Windowing is the 1D list math with two adjustments: the header height is subtracted
//! from the container before counting visible rows, and every row offset is shifted down
//! by the header height.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroU32;

use crate::column::{ColumnDef, ColumnLayout, SortState, TableRow, layout_columns};
use crate::notify::ChangeNotifier;
use crate::window::{self, align_offset};
use crate::{Align, ConfigError, TableConfig, Viewport, VirtualItem, Window};

/// Computes the row window for a table whose container includes a fixed header.
pub fn compute_table_window(
    scroll_offset: i64,
    container_height: u32,
    header_height: u32,
    row_height: NonZeroU32,
    row_count: usize,
    overscan: usize,
) -> Window {
    window::compute_window(
        scroll_offset,
        container_height.saturating_sub(header_height),
        row_height,
        row_count,
        overscan,
    )
}

/// Absolute offset of a row: below the header, `index * row_height`.
pub fn row_offset(index: usize, header_height: u32, row_height: NonZeroU32) -> u64 {
    (header_height as u64).saturating_add(window::item_offset(index, row_height))
}

fn validate_columns<R>(columns: &[ColumnDef<R>]) -> Result<(), ConfigError> {
    let mut seen = BTreeSet::new();
    for c in columns {
        if c.key.is_empty() {
            return Err(ConfigError::EmptyColumnKey);
        }
        if !seen.insert(c.key.as_str()) {
            return Err(ConfigError::DuplicateColumnKey(c.key.clone()));
        }
    }
    Ok(())
}

/// A virtualized table.
///
/// The viewport extent is the full container height, header included.
pub struct VirtualTable<R> {
    config: TableConfig,
    columns: Vec<ColumnDef<R>>,
    row_count: usize,
    viewport: Viewport,
    sort: Option<SortState>,
    notifier: ChangeNotifier<Window>,
}

impl<R> Clone for VirtualTable<R> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            columns: self.columns.clone(),
            row_count: self.row_count,
            viewport: self.viewport,
            sort: self.sort.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<R> fmt::Debug for VirtualTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualTable")
            .field("config", &self.config)
            .field("columns", &self.columns)
            .field("row_count", &self.row_count)
            .field("viewport", &self.viewport)
            .field("sort", &self.sort)
            .finish_non_exhaustive()
    }
}

impl<R: TableRow> VirtualTable<R> {
    /// Creates a table.
    ///
    /// Column keys must be non-empty and unique.
    pub fn new(
        config: TableConfig,
        columns: Vec<ColumnDef<R>>,
        row_count: usize,
    ) -> Result<Self, ConfigError> {
        validate_columns(&columns)?;
        wdebug!(
            row_count,
            columns = columns.len(),
            row_height = config.row_height().get(),
            header_height = config.header_height,
            "VirtualTable::new"
        );
        Ok(Self {
            config,
            columns,
            row_count,
            viewport: Viewport::default(),
            sort: None,
            notifier: ChangeNotifier::new(),
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TableConfig) {
        self.batch_update(|t| t.config = config);
    }

    pub fn columns(&self) -> &[ColumnDef<R>] {
        &self.columns
    }

    pub fn set_columns(&mut self, columns: Vec<ColumnDef<R>>) -> Result<(), ConfigError> {
        validate_columns(&columns)?;
        if let Some(sort) = &self.sort {
            if !columns.iter().any(|c| c.key == sort.key) {
                self.sort = None;
            }
        }
        self.columns = columns;
        Ok(())
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef<R>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn set_row_count(&mut self, row_count: usize) {
        self.batch_update(|t| t.row_count = row_count);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        wtrace!(
            scroll_offset = viewport.scroll_offset,
            extent = viewport.extent,
            "VirtualTable::set_viewport"
        );
        self.batch_update(|t| t.viewport = viewport);
    }

    pub fn set_container_height(&mut self, height: u32) {
        self.batch_update(|t| t.viewport.extent = height);
    }

    pub fn scroll_offset(&self) -> i64 {
        self.viewport.scroll_offset
    }

    pub fn set_scroll_offset(&mut self, offset: i64) {
        wtrace!(offset, "VirtualTable::set_scroll_offset");
        self.batch_update(|t| t.viewport.scroll_offset = offset);
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: i64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Window) + Send + Sync + 'static>) {
        self.notifier
            .set_callback(on_change.map(|f| Arc::new(f) as _));
    }

    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let before = self.window();
        self.notifier.begin(before);
        f(self);
        let after = self.window();
        self.notifier.end(after);
    }

    pub fn window(&self) -> Window {
        compute_table_window(
            self.viewport.scroll_offset,
            self.viewport.extent,
            self.config.header_height,
            self.config.row_height(),
            self.row_count,
            self.config.overscan,
        )
    }

    /// Height of the rows alone (`row_count * row_height`).
    pub fn rows_extent(&self) -> u64 {
        window::total_extent(self.row_count, self.config.row_height())
    }

    /// Spacer height: header plus every row.
    pub fn total_extent(&self) -> u64 {
        (self.config.header_height as u64).saturating_add(self.rows_extent())
    }

    pub fn row_offset(&self, index: usize) -> Option<u64> {
        (index < self.row_count)
            .then(|| row_offset(index, self.config.header_height, self.config.row_height()))
    }

    pub fn row(&self, index: usize) -> Option<VirtualItem> {
        let offset = self.row_offset(index)?;
        Some(VirtualItem {
            index,
            offset,
            extent: self.config.row_height().get(),
        })
    }

    pub fn for_each_virtual_row(&self, mut f: impl FnMut(VirtualItem)) {
        let header = self.config.header_height;
        let height = self.config.row_height();
        for index in self.window().indices() {
            f(VirtualItem {
                index,
                offset: row_offset(index, header, height),
                extent: height.get(),
            });
        }
    }

    /// Collects virtual rows into `out` (clears `out` first).
    pub fn collect_virtual_rows(&self, out: &mut Vec<VirtualItem>) {
        out.clear();
        self.for_each_virtual_row(|it| out.push(it));
    }

    pub fn layout_columns(&self, available_width: u32) -> Vec<ColumnLayout> {
        layout_columns(&self.columns, available_width)
    }

    /// Text for `row` under the column `key`, or `None` for an unknown column.
    pub fn cell_text(&self, key: &str, row: &R) -> Option<String> {
        self.column(key).map(|c| c.cell_text(row))
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Records the externally applied sort. Unknown or non-sortable columns are ignored.
    pub fn set_sort(&mut self, sort: Option<SortState>) {
        match &sort {
            Some(s) if !self.is_sortable(&s.key) => {
                wwarn!(key = s.key.as_str(), "VirtualTable::set_sort: column not sortable");
            }
            _ => self.sort = sort,
        }
    }

    /// Advances the sort for a header click and returns the new state.
    pub fn toggle_sort(&mut self, key: &str) -> Option<&SortState> {
        if self.is_sortable(key) {
            self.sort = SortState::toggled(self.sort.as_ref(), key);
        }
        self.sort.as_ref()
    }

    fn is_sortable(&self, key: &str) -> bool {
        self.column(key).is_some_and(|c| c.sortable)
    }

    /// Scroll offset range in which the rows stay under the header.
    pub fn max_scroll_offset(&self) -> i64 {
        let visible = self
            .viewport
            .extent
            .saturating_sub(self.config.header_height);
        window::max_scroll_offset(self.rows_extent(), visible)
    }

    pub fn clamp_scroll_offset(&self, offset: i64) -> i64 {
        offset.clamp(0, self.max_scroll_offset())
    }

    /// Returns the (clamped) offset that brings row `index` into view below the header.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> i64 {
        if self.row_count == 0 {
            return 0;
        }
        let index = index.min(self.row_count - 1);
        let height = self.config.row_height();
        let start = window::item_offset(index, height);
        align_offset(
            start,
            start.saturating_add(height.get() as u64),
            self.viewport.scroll_offset,
            self.viewport.extent.saturating_sub(self.config.header_height),
            self.max_scroll_offset(),
            align,
        )
    }

    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> i64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }
}
