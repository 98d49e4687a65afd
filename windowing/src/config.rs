use core::num::NonZeroU32;

use crate::ConfigError;

const DEFAULT_ITEM_EXTENT: NonZeroU32 = NonZeroU32::new(50).unwrap();
const DEFAULT_OVERSCAN: usize = 5;
const DEFAULT_GRID_ITEM_WIDTH: NonZeroU32 = NonZeroU32::new(200).unwrap();
const DEFAULT_GRID_ITEM_HEIGHT: NonZeroU32 = NonZeroU32::new(200).unwrap();
const DEFAULT_GRID_CONTAINER_WIDTH: u32 = 800;
const DEFAULT_GRID_OVERSCAN: usize = 2;
const DEFAULT_ROW_HEIGHT: NonZeroU32 = NonZeroU32::new(50).unwrap();
const DEFAULT_HEADER_HEIGHT: u32 = 50;

fn non_zero(value: u32, err: ConfigError) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(value).ok_or(err)
}

/// Configuration for a fixed-extent linear list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListConfig {
    item_extent: NonZeroU32,
    pub overscan: usize,
}

impl ListConfig {
    /// Creates a list configuration.
    ///
    /// Returns [`ConfigError::ZeroItemExtent`] when `item_extent == 0`.
    pub fn new(item_extent: u32, overscan: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            item_extent: non_zero(item_extent, ConfigError::ZeroItemExtent)?,
            overscan,
        })
    }

    pub fn item_extent(&self) -> NonZeroU32 {
        self.item_extent
    }

    pub fn with_item_extent(mut self, item_extent: u32) -> Result<Self, ConfigError> {
        self.item_extent = non_zero(item_extent, ConfigError::ZeroItemExtent)?;
        Ok(self)
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            item_extent: DEFAULT_ITEM_EXTENT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

/// Configuration for a fixed-cell grid.
///
/// `container_width` is the intrinsic width of the grid content, which decides how many
/// columns fit in a row. It is distinct from the visible viewport width because a grid may
/// scroll horizontally independent of the vertical viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    item_width: NonZeroU32,
    item_height: NonZeroU32,
    pub container_width: u32,
    pub overscan_rows: usize,
    pub overscan_cols: usize,
}

impl GridConfig {
    pub fn new(
        item_width: u32,
        item_height: u32,
        container_width: u32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            item_width: non_zero(item_width, ConfigError::ZeroItemWidth)?,
            item_height: non_zero(item_height, ConfigError::ZeroItemHeight)?,
            container_width,
            overscan_rows: DEFAULT_GRID_OVERSCAN,
            overscan_cols: DEFAULT_GRID_OVERSCAN,
        };
        config.warn_if_single_column();
        Ok(config)
    }

    pub fn item_width(&self) -> NonZeroU32 {
        self.item_width
    }

    pub fn item_height(&self) -> NonZeroU32 {
        self.item_height
    }

    pub fn with_container_width(mut self, container_width: u32) -> Self {
        self.container_width = container_width;
        self.warn_if_single_column();
        self
    }

    pub fn with_overscan(mut self, overscan_rows: usize, overscan_cols: usize) -> Self {
        self.overscan_rows = overscan_rows;
        self.overscan_cols = overscan_cols;
        self
    }

    /// Whether one cell is wider than the container, so rows fall back to a single column.
    pub fn is_single_column_fallback(&self) -> bool {
        self.container_width < self.item_width.get()
    }

    /// Number of columns in one row. Never zero.
    pub fn columns_per_row(&self) -> usize {
        (self.container_width / self.item_width.get()).max(1) as usize
    }

    // Called where the config is set, not per window computation.
    pub(crate) fn warn_if_single_column(&self) {
        if self.is_single_column_fallback() {
            wwarn!(
                container_width = self.container_width,
                item_width = self.item_width.get(),
                "GridConfig: item wider than container, using a single column"
            );
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_GRID_ITEM_WIDTH,
            item_height: DEFAULT_GRID_ITEM_HEIGHT,
            container_width: DEFAULT_GRID_CONTAINER_WIDTH,
            overscan_rows: DEFAULT_GRID_OVERSCAN,
            overscan_cols: DEFAULT_GRID_OVERSCAN,
        }
    }
}

/// Configuration for a table with a fixed (sticky) header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableConfig {
    row_height: NonZeroU32,
    pub header_height: u32,
    pub overscan: usize,
}

impl TableConfig {
    pub fn new(row_height: u32, header_height: u32, overscan: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            row_height: non_zero(row_height, ConfigError::ZeroRowHeight)?,
            header_height,
            overscan,
        })
    }

    pub fn row_height(&self) -> NonZeroU32 {
        self.row_height
    }

    pub fn with_header_height(mut self, header_height: u32) -> Self {
        self.header_height = header_height;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            header_height: DEFAULT_HEADER_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}
