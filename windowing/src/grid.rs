//! Two-axis windowing over a flat sequence laid out row-major in fixed-size cells.
//!
//! Rows and columns are windowed independently with the same math as the 1D list, then
//! recombined. A flat index decomposes as `row = index / columns_per_row`,
//! `col = index % columns_per_row`.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::notify::ChangeNotifier;
use crate::window;
use crate::{GridCell, GridConfig, GridViewport, GridWindow};

/// Computes the rectangular row/column window for a grid.
///
/// Cells of a trailing partial row are excluded when iterating the result (see
/// [`GridWindow::for_each_index`]).
pub fn compute_grid_window(
    config: &GridConfig,
    viewport: GridViewport,
    item_count: usize,
) -> GridWindow {
    let columns_per_row = config.columns_per_row();
    let rows_count = item_count.div_ceil(columns_per_row);

    if item_count == 0 {
        return GridWindow {
            start_row: 0,
            end_row: 0,
            start_col: 0,
            end_col: 0,
            columns_per_row,
            rows_count: 0,
            item_count: 0,
        };
    }

    let rows = window::compute_window(
        viewport.scroll_top,
        viewport.height,
        config.item_height(),
        rows_count,
        config.overscan_rows,
    );
    let cols = window::compute_window(
        viewport.scroll_left,
        viewport.width,
        config.item_width(),
        columns_per_row,
        config.overscan_cols,
    );

    GridWindow {
        start_row: rows.start_index,
        end_row: rows.end_index,
        start_col: cols.start_index,
        end_col: cols.end_index,
        columns_per_row,
        rows_count,
        item_count,
    }
}

/// A fixed-cell grid.
#[derive(Clone, Debug)]
pub struct VirtualGrid {
    config: GridConfig,
    item_count: usize,
    viewport: GridViewport,
    notifier: ChangeNotifier<GridWindow>,
}

impl VirtualGrid {
    pub fn new(config: GridConfig, item_count: usize) -> Self {
        wdebug!(
            item_count,
            item_width = config.item_width().get(),
            item_height = config.item_height().get(),
            container_width = config.container_width,
            "VirtualGrid::new"
        );
        config.warn_if_single_column();
        Self {
            config,
            item_count,
            viewport: GridViewport::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GridConfig) {
        config.warn_if_single_column();
        self.batch_update(|g| g.config = config);
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.batch_update(|g| g.item_count = item_count);
    }

    pub fn viewport(&self) -> GridViewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: GridViewport) {
        wtrace!(
            scroll_top = viewport.scroll_top,
            scroll_left = viewport.scroll_left,
            width = viewport.width,
            height = viewport.height,
            "VirtualGrid::set_viewport"
        );
        self.batch_update(|g| g.viewport = viewport);
    }

    /// Records a new scroll reading on both axes. The most recent call always wins.
    pub fn set_scroll(&mut self, scroll_top: i64, scroll_left: i64) {
        self.batch_update(|g| {
            g.viewport.scroll_top = scroll_top;
            g.viewport.scroll_left = scroll_left;
        });
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&GridWindow) + Send + Sync + 'static>,
    ) {
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

    pub fn window(&self) -> GridWindow {
        compute_grid_window(&self.config, self.viewport, self.item_count)
    }

    pub fn columns_per_row(&self) -> usize {
        self.config.columns_per_row()
    }

    pub fn rows_count(&self) -> usize {
        self.item_count.div_ceil(self.columns_per_row())
    }

    /// Spacer width: a full row of cells.
    pub fn total_width(&self) -> u64 {
        window::total_extent(self.columns_per_row(), self.config.item_width())
    }

    /// Spacer height: every row, including a trailing partial one.
    pub fn total_height(&self) -> u64 {
        window::total_extent(self.rows_count(), self.config.item_height())
    }

    /// Position of the cell at `index`, or `None` if out of bounds.
    pub fn cell(&self, index: usize) -> Option<GridCell> {
        (index < self.item_count).then(|| self.cell_unchecked(index, self.columns_per_row()))
    }

    fn cell_unchecked(&self, index: usize, columns_per_row: usize) -> GridCell {
        let row = index / columns_per_row;
        let col = index % columns_per_row;
        let width = self.config.item_width();
        let height = self.config.item_height();
        GridCell {
            index,
            row,
            col,
            left: window::item_offset(col, width),
            top: window::item_offset(row, height),
            width: width.get(),
            height: height.get(),
        }
    }

    pub fn for_each_visible_cell(&self, mut f: impl FnMut(GridCell)) {
        let w = self.window();
        w.for_each_index(|index| f(self.cell_unchecked(index, w.columns_per_row)));
    }

    /// Collects visible cells into `out` (clears `out` first).
    pub fn collect_visible_cells(&self, out: &mut Vec<GridCell>) {
        out.clear();
        self.for_each_visible_cell(|c| out.push(c));
    }
}
