use windowing::{Align, ListConfig, VirtualList};
use windowing_adapter::{Controller, Easing};

fn main() {
    // Example: a statement view jumping to a far transaction with a smooth scroll.
    //
    // The host starts the tween, calls tick(now_ms) from its frame timer, writes the returned
    // offset into its real scroll container and renders the current window.
    let mut list = VirtualList::new(ListConfig::new(48, 4).expect("non-zero row"), 10_000);
    list.set_viewport_extent(480);
    let mut c = Controller::new(list);

    let target = c.start_tween_to_index(2_000, Align::Center, 0, 240, Easing::SmoothStep);
    println!("target_offset={target}");

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off} window={:?}", c.target().window());
        }
        now_ms += 16;
    }

    println!(
        "done: off={} window={:?}",
        c.target().scroll_offset(),
        c.target().window()
    );
}
