use windowing::{ListConfig, VirtualList};
use windowing_adapter::Controller;

fn main() {
    // Example: loading older repayments above the ones on screen without the view jumping.
    //
    // 1) capture an anchor (index + offset into that item) before the data changes
    // 2) apply the data change (here: 20 rows prepended)
    // 3) apply the anchor with an old-index -> new-index mapping
    let mut list = VirtualList::new(ListConfig::new(50, 5).expect("non-zero row"), 200);
    list.set_viewport_extent(400);
    list.set_scroll_offset(1_730);
    let mut c = Controller::new(list);

    let anchor = c
        .capture_first_visible_anchor()
        .expect("list must not be empty");
    println!(
        "before prepend: off={} anchor={anchor:?}",
        c.target().scroll_offset()
    );

    c.target_mut().set_item_count(220);
    let ok = c.apply_anchor(&anchor, |i| Some(i + 20));

    println!(
        "after prepend: ok={ok} off={} window={:?}",
        c.target().scroll_offset(),
        c.target().window()
    );
}
