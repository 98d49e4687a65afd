//! Column definitions for the tabular variant.
//!
//! Columns describe headers and horizontal layout only. The row sequence handed to a
//! [`crate::VirtualTable`] is already sorted and filtered by its owner; [`SortState`] merely
//! records which column the owner sorted by so headers can render an indicator.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// A row that can be rendered by key.
pub trait TableRow {
    /// Returns the raw text for the column identified by `key`.
    fn cell(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// Formats a whole row into the text of one cell.
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// How a column claims horizontal space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnWidth {
    /// Fixed width in logical pixels.
    Fixed(u32),
    /// Share of the remaining width, by weight.
    Flex(u32),
    /// Treated as `Flex(1)`.
    Auto,
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Flex(1)
    }
}

pub struct ColumnDef<R> {
    pub key: String,
    pub header: String,
    pub render: Option<CellRenderer<R>>,
    pub width: ColumnWidth,
    pub sortable: bool,
}

impl<R> ColumnDef<R> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            render: None,
            width: ColumnWidth::default(),
            sortable: false,
        }
    }

    pub fn fixed(mut self, width: u32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex(mut self, weight: u32) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    pub fn auto(mut self) -> Self {
        self.width = ColumnWidth::Auto;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn with_render(mut self, render: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }
}

impl<R: TableRow> ColumnDef<R> {
    /// Text for this column in `row`: the renderer if present, else the row's raw cell.
    pub fn cell_text(&self, row: &R) -> String {
        if let Some(render) = &self.render {
            return render(row);
        }
        row.cell(&self.key)
            .map(Cow::into_owned)
            .unwrap_or_default()
    }
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            render: self.render.clone(),
            width: self.width,
            sortable: self.sortable,
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("sortable", &self.sortable)
            .finish_non_exhaustive()
    }
}

/// Resolved horizontal placement of one column.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnLayout {
    pub key: String,
    pub x: u64,
    pub width: u32,
}

/// Lays out columns left to right within `available_width`.
///
/// Fixed columns take their width first. The remainder is split among flex columns by
/// weight; leftover pixels from integer division go to the last flex column. Fixed columns
/// that overflow `available_width` keep their width and flex columns collapse to `0`.
pub fn layout_columns<R>(columns: &[ColumnDef<R>], available_width: u32) -> Vec<ColumnLayout> {
    let weight = |w: ColumnWidth| match w {
        ColumnWidth::Fixed(_) => 0,
        ColumnWidth::Flex(n) => n as u64,
        ColumnWidth::Auto => 1,
    };

    let fixed: u64 = columns
        .iter()
        .map(|c| match c.width {
            ColumnWidth::Fixed(w) => w as u64,
            _ => 0,
        })
        .sum();
    let total_weight: u64 = columns.iter().map(|c| weight(c.width)).sum();
    let remaining = (available_width as u64).saturating_sub(fixed);
    let last_flex = columns.iter().rposition(|c| weight(c.width) > 0);

    let mut out = Vec::with_capacity(columns.len());
    let mut x = 0u64;
    let mut flex_used = 0u64;
    for (i, c) in columns.iter().enumerate() {
        let width = match c.width {
            ColumnWidth::Fixed(w) => w as u64,
            w if weight(w) == 0 => 0,
            _ if Some(i) == last_flex => remaining.saturating_sub(flex_used),
            w => {
                let share = remaining * weight(w) / total_weight;
                flex_used += share;
                share
            }
        };
        let width = u32::try_from(width).unwrap_or(u32::MAX);
        out.push(ColumnLayout {
            key: c.key.clone(),
            x,
            width,
        });
        x = x.saturating_add(width as u64);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// The column the row owner sorted by.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

impl SortState {
    /// Next state after a header click on `key`: none → ascending → descending → none.
    ///
    /// Clicking a different column starts over at ascending.
    pub fn toggled(current: Option<&Self>, key: &str) -> Option<Self> {
        match current {
            Some(s) if s.key == key => match s.direction {
                SortDirection::Ascending => Some(Self {
                    key: s.key.clone(),
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(Self {
                key: key.into(),
                direction: SortDirection::Ascending,
            }),
        }
    }
}
