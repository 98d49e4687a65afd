// Example: a loan ledger of one million rows, scrolled to the middle.
use windowing::{Align, ListConfig, Viewport, VirtualList};

fn main() {
    let config = ListConfig::new(50, 5).expect("non-zero item extent");
    let mut list = VirtualList::new(config, 1_000_000);
    list.set_viewport(Viewport::new(2_500, 400));

    let mut items = Vec::new();
    list.collect_virtual_items(&mut items);
    println!("total_extent={}", list.total_extent());
    println!("window={:?}", list.window());
    println!("first={:?} last={:?}", items.first(), items.last());

    let off = list.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: offset={off} window={:?}", list.window());
}
