use crate::*;

use alloc::borrow::Cow;
use alloc::vec;

use windowing::{Align, ColumnDef, ListConfig, TableConfig, TableRow, VirtualList, VirtualTable};

struct Row;

impl TableRow for Row {
    fn cell(&self, _key: &str) -> Option<Cow<'_, str>> {
        None
    }
}

fn list(item_count: usize) -> VirtualList {
    let mut v = VirtualList::new(ListConfig::new(50, 5).unwrap(), item_count);
    v.set_viewport_extent(500);
    v
}

fn table(row_count: usize) -> VirtualTable<Row> {
    let config = TableConfig::new(40, 60, 2).unwrap();
    let mut t = VirtualTable::new(config, vec![ColumnDef::new("id", "Id")], row_count).unwrap();
    t.set_container_height(460);
    t
}

#[test]
fn observer_debounces_is_scrolling() {
    let mut o = ScrollObserver::new();
    assert!(!o.is_scrolling());
    assert_eq!(o.reset_delay_ms(), 150);

    assert!(o.on_scroll(100, 0));
    assert!(o.is_scrolling());
    assert_eq!(o.direction(), Some(ScrollDirection::Forward));

    assert!(o.on_scroll(40, 10));
    assert_eq!(o.direction(), Some(ScrollDirection::Backward));

    assert!(!o.tick(100));
    assert!(o.is_scrolling());

    assert!(o.tick(160));
    assert!(!o.is_scrolling());
    assert_eq!(o.direction(), None);
    assert_eq!(o.offset(), 40);

    assert!(!o.tick(400));
}

#[test]
fn observer_latest_reading_wins() {
    let mut o = ScrollObserver::new().with_reset_delay_ms(50);
    for off in [10, 20, 30] {
        o.on_scroll(off, 5);
    }
    assert_eq!(o.offset(), 30);

    // Same reading again: nothing changed, direction is kept.
    assert!(!o.on_scroll(30, 6));
    assert_eq!(o.direction(), Some(ScrollDirection::Forward));

    assert!(!o.tick(55));
    assert!(o.tick(56));
}

#[test]
fn tween_samples_and_retargets() {
    let t = Tween::new(0, 1000, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0);
    assert_eq!(t.sample(50), 500);
    assert_eq!(t.sample(100), 1000);
    assert_eq!(t.sample(500), 1000);
    assert!(!t.is_done(99));
    assert!(t.is_done(100));

    let mut t = Tween::new(0, 1000, 0, 100, Easing::SmoothStep);
    assert_eq!(t.sample(50), 500);
    t.retarget(50, 2000, 100);
    assert_eq!(t.from, 500);
    assert_eq!(t.start_ms, 50);
    assert_eq!(t.sample(150), 2000);

    let back = Tween::new(1000, 0, 0, 100, Easing::EaseInOutCubic);
    assert_eq!(back.sample(50), 500);

    // Zero duration finishes immediately.
    assert!(Tween::new(0, 10, 7, 0, Easing::Linear).is_done(8));
}

#[test]
fn controller_tween_drives_scroll_offset() {
    let mut c = Controller::new(list(1000));

    let to = c.start_tween_to_index(500, Align::Start, 0, 100, Easing::SmoothStep);
    assert_eq!(to, 25_000);
    assert!(c.is_animating());
    assert_eq!(c.tween().map(|t| t.to), Some(25_000));

    let mut last = 0i64;
    for now_ms in [0u64, 10, 20, 40, 80, 100, 120] {
        if let Some(off) = c.tick(now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.target().scroll_offset(), to);
    assert_eq!(c.observer().offset(), to);
    assert!(!c.is_scrolling());
}

#[test]
fn controller_tween_target_is_clamped() {
    let mut c = Controller::new(list(1000));
    let to = c.start_tween_to_offset(1_000_000, 0, 10, Easing::Linear);
    assert_eq!(to, 49_500);
    assert_eq!(c.tick(10), Some(49_500));
}

#[test]
fn user_scroll_cancels_tween() {
    let mut c = Controller::new(list(1000));
    c.start_tween_to_index(900, Align::Start, 0, 200, Easing::Linear);
    c.tick(20);

    c.on_scroll(300, 30);
    assert!(!c.is_animating());
    assert!(c.is_scrolling());
    assert_eq!(c.target().scroll_offset(), 300);
    assert_eq!(c.target().window().start_index, 1);

    // Without a tween, tick only debounces.
    assert_eq!(c.tick(100), None);
    assert!(c.is_scrolling());
    assert_eq!(c.tick(180), None);
    assert!(!c.is_scrolling());
}

#[test]
fn controller_jumps_are_not_user_scrolling() {
    let mut c = Controller::new(list(1000));
    assert_eq!(c.scroll_to_index(999, Align::End), 49_500);
    assert_eq!(c.observer().offset(), 49_500);
    assert!(!c.is_scrolling());

    assert_eq!(c.scroll_to_offset(-20), 0);
    assert_eq!(c.target().scroll_offset(), 0);

    c.on_viewport_extent(1000);
    assert_eq!(c.target().viewport().extent, 1000);
}

#[test]
fn anchor_preserves_list_position_across_prepend() {
    let mut v = list(100);
    v.set_scroll_offset(2525);

    let anchor = capture_first_visible_anchor(&v).unwrap();
    assert_eq!(
        anchor,
        ScrollAnchor {
            index: 50,
            offset_in_item: 25
        }
    );

    // Ten older records loaded above.
    v.set_item_count(110);
    assert!(apply_anchor(&mut v, &anchor, |i| Some(i + 10)));
    assert_eq!(v.scroll_offset(), 3025);
    assert_eq!(v.index_at_offset(v.scroll_offset()), Some(60));
}

#[test]
fn anchor_preserves_table_position_below_header() {
    let mut c = Controller::new(table(100));
    c.target_mut().set_scroll_offset(410);

    let anchor = c.capture_first_visible_anchor().unwrap();
    assert_eq!(anchor.index, 10);
    assert_eq!(anchor.offset_in_item, 10);

    c.target_mut().set_row_count(105);
    assert!(c.apply_anchor(&anchor, |i| Some(i + 5)));
    assert_eq!(c.target().scroll_offset(), 610);
    assert_eq!(c.observer().offset(), 610);
    assert_eq!(c.target().window().start_index, 13);
}

#[test]
fn anchor_rejects_missing_rows() {
    let mut v = list(100);
    v.set_scroll_offset(500);
    let anchor = capture_first_visible_anchor(&v).unwrap();

    assert!(!apply_anchor(&mut v, &anchor, |_| None));
    assert!(!apply_anchor(&mut v, &anchor, |_| Some(1000)));
    assert_eq!(v.scroll_offset(), 500);

    assert_eq!(capture_first_visible_anchor(&list(0)), None);
}

#[test]
fn store_round_trips_frame_state() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());

    let mut c = Controller::new(list(1000));
    c.on_scroll(1200, 0);
    c.save_state(&mut store, "inbox");
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.load("inbox"),
        Some(FrameState {
            viewport_extent: 500,
            scroll: ScrollState {
                offset: 1200,
                is_scrolling: true
            }
        })
    );

    let mut fresh = VirtualList::new(ListConfig::default(), 1000);
    fresh.set_viewport_extent(0);
    let mut restored = Controller::new(fresh);
    assert!(restored.restore_state(&store, "inbox", 10));
    assert_eq!(restored.target().viewport().extent, 500);
    assert_eq!(restored.target().scroll_offset(), 1200);
    assert!(restored.is_scrolling());

    // The reset timer restarts at restore time.
    restored.tick(100);
    assert!(restored.is_scrolling());
    restored.tick(160);
    assert!(!restored.is_scrolling());

    assert!(!restored.restore_state(&store, "archive", 0));
    assert!(store.remove("inbox").is_some());
    assert!(store.load("inbox").is_none());
}

#[test]
fn restore_clamps_to_current_content() {
    let mut store = MemoryStore::new();
    store.save(
        "short",
        FrameState {
            viewport_extent: 500,
            scroll: ScrollState {
                offset: 9000,
                is_scrolling: false,
            },
        },
    );

    let mut c = Controller::new(list(10));
    assert!(c.restore_state(&store, "short", 0));
    assert_eq!(c.target().scroll_offset(), 0);
    assert_eq!(c.frame_state().scroll.offset, 0);

    store.clear();
    assert!(store.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn frame_state_serializes() {
    let frame = FrameState {
        viewport_extent: 460,
        scroll: ScrollState {
            offset: 610,
            is_scrolling: false,
        },
    };
    let json = serde_json::to_string(&frame).unwrap();
    let back: FrameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, frame);

    let anchor = ScrollAnchor {
        index: 3,
        offset_in_item: 7,
    };
    let json = serde_json::to_string(&anchor).unwrap();
    assert_eq!(serde_json::from_str::<ScrollAnchor>(&json).unwrap(), anchor);
}
