use crate::*;

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

fn list(item_count: usize, item_extent: u32, overscan: usize) -> VirtualList {
    VirtualList::new(ListConfig::new(item_extent, overscan).unwrap(), item_count)
}

#[derive(Debug)]
struct Member {
    name: String,
    savings: u64,
}

impl TableRow for Member {
    fn cell(&self, key: &str) -> Option<Cow<'_, str>> {
        match key {
            "name" => Some(Cow::Borrowed(self.name.as_str())),
            "savings" => Some(Cow::Owned(format!("{}", self.savings))),
            _ => None,
        }
    }
}

fn members_table(row_count: usize) -> VirtualTable<Member> {
    let columns = vec![
        ColumnDef::new("name", "Name").flex(2).sortable(true),
        ColumnDef::new("savings", "Savings")
            .fixed(120)
            .sortable(true)
            .with_render(|m: &Member| format!("{} KES", m.savings)),
        ColumnDef::new("group", "Group"),
    ];
    VirtualTable::new(TableConfig::new(40, 60, 2).unwrap(), columns, row_count).unwrap()
}

#[test]
fn list_window_at_top() {
    let mut v = list(1000, 50, 5);
    v.set_viewport(Viewport::new(0, 400));
    let w = v.window();
    assert_eq!((w.start_index, w.end_index), (0, 13));
}

#[test]
fn list_window_mid_scroll() {
    let mut v = list(1000, 50, 5);
    v.set_viewport(Viewport::new(2500, 400));
    let w = v.window();
    assert_eq!((w.start_index, w.end_index), (45, 63));
}

#[test]
fn empty_list_renders_nothing() {
    let mut v = list(0, 50, 5);
    v.set_viewport(Viewport::new(0, 400));
    assert!(v.window().is_empty());
    assert_eq!(v.total_extent(), 0);
    let mut items = Vec::new();
    v.collect_virtual_items(&mut items);
    assert!(items.is_empty());
    assert_eq!(v.scroll_to_index_offset(10, Align::Start), 0);
}

#[test]
fn virtual_items_are_absolutely_positioned() {
    let mut v = list(100, 20, 1);
    v.set_viewport(Viewport::new(205, 60));

    let mut items = Vec::new();
    v.collect_virtual_items(&mut items);
    let first = items.first().unwrap().index;
    let last = items.last().unwrap().index;
    assert_eq!((first, last), (9, 14));
    for it in &items {
        assert_eq!(it.offset, it.index as u64 * 20);
        assert_eq!(it.extent, 20);
    }
    assert_eq!(v.total_extent(), 2000);
}

#[test]
fn item_lookup_is_bounds_checked() {
    let v = list(3, 10, 0);
    assert_eq!(v.item_offset(2), Some(20));
    assert_eq!(v.item_offset(3), None);
    assert_eq!(v.item(1).map(|it| it.end()), Some(20));
    assert_eq!(v.index_at_offset(25), Some(2));
}

#[test]
fn clamped_scroll_stays_in_content() {
    let mut v = list(10, 10, 0);
    v.set_viewport_extent(30);
    assert_eq!(v.max_scroll_offset(), 70);
    v.set_scroll_offset_clamped(500);
    assert_eq!(v.scroll_offset(), 70);
    v.set_scroll_offset_clamped(-15);
    assert_eq!(v.scroll_offset(), 0);
}

#[test]
fn unclamped_overscroll_is_tolerated() {
    let mut v = list(10, 10, 1);
    v.set_viewport(Viewport::new(-40, 30));
    assert_eq!(v.window().start_index, 0);
    v.set_scroll_offset(10_000);
    let w = v.window();
    assert!(w.start_index <= w.end_index);
    assert_eq!(w.end_index, 9);
}

#[test]
fn scroll_to_index_alignments() {
    let mut v = list(100, 10, 0);
    v.set_viewport(Viewport::new(0, 50));

    assert_eq!(v.scroll_to_index_offset(20, Align::Start), 200);
    assert_eq!(v.scroll_to_index_offset(20, Align::End), 160);
    assert_eq!(v.scroll_to_index_offset(20, Align::Center), 180);
    // Already visible: stays put.
    assert_eq!(v.scroll_to_index_offset(2, Align::Auto), 0);
    // Below the viewport: aligned to the end.
    assert_eq!(v.scroll_to_index_offset(20, Align::Auto), 160);
    // Clamped to the last page.
    assert_eq!(v.scroll_to_index_offset(99, Align::Start), 950);

    assert_eq!(v.scroll_to_index(50, Align::Start), 500);
    assert_eq!(v.scroll_offset(), 500);
    assert_eq!(v.scroll_to_index_offset(10, Align::Auto), 100);
}

#[test]
fn on_change_fires_only_when_window_moves() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut v = list(1000, 50, 0);
    v.set_viewport(Viewport::new(0, 400));
    v.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Window| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));

    // Within the same item: no change.
    v.set_scroll_offset(10);
    v.set_scroll_offset(49);
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    v.set_scroll_offset(50);
    assert_eq!(calls.load(Ordering::Relaxed), 1);

    v.set_item_count(1000);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn batch_update_coalesces_notifications() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut v = list(1000, 50, 0);
    v.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |w: &Window| seen.lock().unwrap().push(*w)
    }));

    v.batch_update(|v| {
        v.set_viewport_extent(400);
        v.set_scroll_offset(1000);
        v.batch_update(|v| v.set_scroll_offset(2500));
    });

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!((seen[0].start_index, seen[0].end_index), (50, 58));
}

#[test]
fn cloned_list_keeps_callback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut v = list(100, 10, 0);
    v.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &Window| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    let mut c = v.clone();
    c.set_scroll_offset(100);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn grid_scenario_four_columns_ten_items() {
    let config = GridConfig::new(200, 200, 800).unwrap().with_overscan(1, 1);
    let w = compute_grid_window(&config, GridViewport::new(0, 0, 800, 600), 10);
    assert_eq!(w.columns_per_row, 4);
    assert_eq!(w.rows_count, 3);
    assert_eq!((w.start_row, w.end_row), (0, 2));
    assert_eq!((w.start_col, w.end_col), (0, 3));

    let mut indexes = Vec::new();
    w.for_each_index(|i| indexes.push(i));
    assert_eq!(indexes, (0..10).collect::<Vec<_>>());
    assert!(!w.contains(10));
    assert!(!w.contains(11));
}

#[test]
fn grid_windows_each_axis_independently() {
    let config = GridConfig::new(100, 50, 2000).unwrap().with_overscan(0, 0);
    let mut grid = VirtualGrid::new(config, 2000);
    grid.set_viewport(GridViewport::new(500, 300, 250, 100));

    let w = grid.window();
    assert_eq!(grid.columns_per_row(), 20);
    assert_eq!((w.start_row, w.end_row), (10, 12));
    assert_eq!((w.start_col, w.end_col), (3, 6));

    let mut cells = Vec::new();
    grid.collect_visible_cells(&mut cells);
    assert_eq!(cells.len(), 3 * 4);
    let first = cells[0];
    assert_eq!((first.index, first.left, first.top), (203, 300, 500));
    assert_eq!(grid.total_width(), 2000);
    assert_eq!(grid.total_height(), 100 * 50);
}

#[test]
fn hand_built_windows_do_not_panic() {
    let inverted = Window {
        start_index: 5,
        end_index: 2,
        item_count: 10,
    };
    assert_eq!(inverted.len(), 0);
    assert_eq!(inverted.indices(), 0..0);
    assert!(!inverted.contains(3));

    let zero_columns = GridWindow {
        start_row: 0,
        end_row: 1,
        start_col: 0,
        end_col: 0,
        columns_per_row: 0,
        rows_count: 2,
        item_count: 2,
    };
    assert!(zero_columns.contains(0));
    assert!(zero_columns.contains(1));
    assert!(!zero_columns.contains(2));
    let mut seen = Vec::new();
    zero_columns.for_each_index(|i| seen.push(i));
    assert_eq!(seen, [0, 1]);
}

#[test]
fn grid_narrower_than_item_uses_single_column() {
    let config = GridConfig::new(500, 100, 300).unwrap();
    let grid = VirtualGrid::new(config, 3);
    assert_eq!(grid.columns_per_row(), 1);
    assert_eq!(grid.rows_count(), 3);
    assert_eq!(grid.cell(2).map(|c| (c.row, c.col, c.top)), Some((2, 0, 200)));
    assert_eq!(grid.cell(3), None);
}

#[test]
fn grid_scroll_updates_notify() {
    let calls = Arc::new(AtomicUsize::new(0));
    let config = GridConfig::new(100, 100, 400).unwrap().with_overscan(0, 0);
    let mut grid = VirtualGrid::new(config, 400);
    grid.set_viewport(GridViewport::new(0, 0, 400, 300));
    grid.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |_: &GridWindow| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    grid.set_scroll(99, 0);
    assert_eq!(calls.load(Ordering::Relaxed), 0);
    grid.set_scroll(100, 0);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn table_excludes_header_from_visible_rows() {
    let mut t = members_table(500);
    t.set_viewport(Viewport::new(0, 460));
    // (460 - 60) / 40 = 10 visible rows, plus overscan 2.
    let w = t.window();
    assert_eq!((w.start_index, w.end_index), (0, 12));

    t.set_scroll_offset(400);
    let w = t.window();
    assert_eq!((w.start_index, w.end_index), (8, 22));
}

#[test]
fn table_rows_start_below_header() {
    let mut t = members_table(500);
    t.set_viewport(Viewport::new(80, 460));
    let mut rows = Vec::new();
    t.collect_virtual_rows(&mut rows);
    for r in &rows {
        assert_eq!(r.offset, 60 + r.index as u64 * 40);
    }
    assert_eq!(t.row_offset(0), Some(60));
    assert_eq!(t.row_offset(500), None);
    assert_eq!(t.rows_extent(), 20_000);
    assert_eq!(t.total_extent(), 20_060);
}

#[test]
fn table_header_filling_container_leaves_no_visible_rows() {
    let mut t = members_table(100);
    t.set_viewport(Viewport::new(400, 60));

    // Row 10 sits at the top; zero visible rows, overscan 2 on each side.
    let w = t.window();
    assert_eq!((w.start_index, w.end_index), (8, 12));
    assert_eq!(t.max_scroll_offset(), t.rows_extent() as i64);
    assert_eq!(t.max_scroll_offset(), 4000);
    assert_eq!(t.total_extent(), 60 + 4000);

    // A header taller than the container behaves the same.
    t.set_container_height(40);
    assert_eq!(t.window(), w);
    assert_eq!(t.max_scroll_offset(), 4000);
}

#[test]
fn table_scroll_clamps_to_rows_area() {
    let mut t = members_table(20);
    t.set_container_height(460);
    // 800 of rows in a 400 tall body.
    assert_eq!(t.max_scroll_offset(), 400);
    assert_eq!(t.scroll_to_index_offset(19, Align::End), 400);
    assert_eq!(t.scroll_to_index_offset(5, Align::Start), 200);
    t.set_scroll_offset_clamped(9999);
    assert_eq!(t.scroll_offset(), 400);
}

#[test]
fn table_cells_and_columns() {
    let t = members_table(1);
    let m = Member {
        name: "Amina".into(),
        savings: 3200,
    };
    assert_eq!(t.cell_text("name", &m).as_deref(), Some("Amina"));
    assert_eq!(t.cell_text("savings", &m).as_deref(), Some("3200 KES"));
    assert_eq!(t.cell_text("group", &m).as_deref(), Some(""));
    assert_eq!(t.cell_text("missing", &m), None);

    let layout = t.layout_columns(420);
    let widths: Vec<_> = layout.iter().map(|c| c.width).collect();
    assert_eq!(widths, [200, 120, 100]);
}

#[test]
fn table_sort_state_is_recorded_not_applied() {
    let mut t = members_table(10);
    assert_eq!(
        t.toggle_sort("savings").map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
    assert_eq!(
        t.toggle_sort("savings").map(|s| s.direction),
        Some(SortDirection::Descending)
    );
    assert_eq!(t.toggle_sort("savings"), None);

    // Not sortable: ignored.
    t.toggle_sort("name");
    t.toggle_sort("group");
    assert_eq!(t.sort().map(|s| s.key.as_str()), Some("name"));

    t.set_sort(Some(SortState {
        key: "group".into(),
        direction: SortDirection::Descending,
    }));
    assert_eq!(t.sort().map(|s| s.key.as_str()), Some("name"));

    // Dropping the sorted column clears the sort.
    t.set_columns(vec![ColumnDef::new("savings", "Savings")]).unwrap();
    assert_eq!(t.sort(), None);
}

#[test]
fn table_rejects_bad_columns() {
    let dup = vec![
        ColumnDef::<Member>::new("name", "Name"),
        ColumnDef::<Member>::new("name", "Again"),
    ];
    assert_eq!(
        VirtualTable::new(TableConfig::default(), dup, 0).err(),
        Some(ConfigError::DuplicateColumnKey("name".into()))
    );

    let empty = vec![ColumnDef::<Member>::new("", "Blank")];
    assert_eq!(
        VirtualTable::new(TableConfig::default(), empty, 0).err(),
        Some(ConfigError::EmptyColumnKey)
    );
}

#[test]
fn config_errors_display() {
    assert_eq!(
        format!("{}", ConfigError::ZeroItemExtent),
        "item extent must be greater than zero"
    );
    assert_eq!(
        format!("{}", ConfigError::DuplicateColumnKey("id".into())),
        "duplicate table column key `id`"
    );
}

#[cfg(feature = "serde")]
#[test]
fn config_and_window_serde() {
    let config = ListConfig::new(32, 3).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    let back: ListConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);

    // Zero extents cannot sneak in through deserialization.
    assert!(serde_json::from_str::<ListConfig>(r#"{"item_extent":0,"overscan":1}"#).is_err());

    let w = compute_window(0, 400, config.item_extent(), 10, 1);
    let back: Window = serde_json::from_str(&serde_json::to_string(&w).unwrap()).unwrap();
    assert_eq!(back, w);

    let inverted: Window =
        serde_json::from_str(r#"{"start_index":5,"end_index":2,"item_count":10}"#).unwrap();
    assert_eq!(inverted.len(), 0);
}
