//! Headless viewport windowing for fixed-extent lists, grids and tables.
//!
//! Given a scrollable region, an item count and a uniform item extent, the calculators in
//! this crate compute the minimal contiguous index range that must be materialized to cover
//! the visible area plus an overscan buffer, and the absolute offset of every materialized
//! item. Un-rendered items never affect layout: a spacer sized to the total extent keeps
//! scrollbar proportions correct.
//!
//! Three variants share the same math:
//! - [`compute_window`] / [`VirtualList`]: a linear list.
//! - [`compute_grid_window`] / [`VirtualGrid`]: a row-major grid, windowed per axis.
//! - [`compute_table_window`] / [`VirtualTable`]: a list of rows under a sticky header.
//!
//! Every computation is a pure O(1) function of the current viewport reading. A UI layer is
//! expected to provide:
//! - the viewport extent (and, for grids, the container width)
//! - the scroll offset on every scroll event
//! - the item count
//!
//! For scroll observation, smooth scrolling and anchoring, see the `windowing-adapter`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod column;
mod config;
mod error;
mod grid;
mod list;
mod notify;
mod table;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use column::{
    CellRenderer, ColumnDef, ColumnLayout, ColumnWidth, SortDirection, SortState, TableRow,
    layout_columns,
};
pub use config::{GridConfig, ListConfig, TableConfig};
pub use error::ConfigError;
pub use grid::{VirtualGrid, compute_grid_window};
pub use list::VirtualList;
pub use notify::OnWindowChange;
pub use table::{VirtualTable, compute_table_window, row_offset};
pub use types::{Align, GridCell, GridViewport, GridWindow, Viewport, VirtualItem, Window};
pub use window::{compute_window, index_at_offset, item_offset, max_scroll_offset, total_extent};
