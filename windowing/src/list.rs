use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::notify::ChangeNotifier;
use crate::window::{self, align_offset};
use crate::{Align, ListConfig, Viewport, VirtualItem, Window};

/// A fixed-extent linear list.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any items, only their count.
/// - Your adapter drives it by providing the viewport extent and scroll offset.
/// - Every query recomputes a fresh window from the current reading; nothing is cached.
#[derive(Clone, Debug)]
pub struct VirtualList {
    config: ListConfig,
    item_count: usize,
    viewport: Viewport,
    notifier: ChangeNotifier<Window>,
}

impl VirtualList {
    pub fn new(config: ListConfig, item_count: usize) -> Self {
        wdebug!(
            item_count,
            item_extent = config.item_extent().get(),
            overscan = config.overscan,
            "VirtualList::new"
        );
        Self {
            config,
            item_count,
            viewport: Viewport::default(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ListConfig) {
        wdebug!(
            item_extent = config.item_extent().get(),
            overscan = config.overscan,
            "VirtualList::set_config"
        );
        self.batch_update(|l| l.config = config);
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.batch_update(|l| l.item_count = item_count);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        wtrace!(
            scroll_offset = viewport.scroll_offset,
            extent = viewport.extent,
            "VirtualList::set_viewport"
        );
        self.batch_update(|l| l.viewport = viewport);
    }

    pub fn set_viewport_extent(&mut self, extent: u32) {
        self.batch_update(|l| l.viewport.extent = extent);
    }

    pub fn scroll_offset(&self) -> i64 {
        self.viewport.scroll_offset
    }

    /// Records a new scroll reading. The most recent call always wins.
    pub fn set_scroll_offset(&mut self, offset: i64) {
        wtrace!(offset, "VirtualList::set_scroll_offset");
        self.batch_update(|l| l.viewport.scroll_offset = offset);
    }

    pub fn set_scroll_offset_clamped(&mut self, offset: i64) {
        let clamped = self.clamp_scroll_offset(offset);
        self.set_scroll_offset(clamped);
    }

    /// Registers a callback fired whenever the window changes.
    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Window) + Send + Sync + 'static>) {
        self.notifier
            .set_callback(on_change.map(|f| Arc::new(f) as _));
    }

    /// Batches multiple updates into a single change notification.
    ///
    /// On a typical frame an adapter updates the viewport extent and scroll offset together;
    /// the callback then sees only the final window.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let before = self.window();
        self.notifier.begin(before);
        f(self);
        let after = self.window();
        self.notifier.end(after);
    }

    pub fn window(&self) -> Window {
        self.window_for(self.viewport)
    }

    pub fn window_for(&self, viewport: Viewport) -> Window {
        window::compute_window(
            viewport.scroll_offset,
            viewport.extent,
            self.config.item_extent(),
            self.item_count,
            self.config.overscan,
        )
    }

    pub fn total_extent(&self) -> u64 {
        window::total_extent(self.item_count, self.config.item_extent())
    }

    pub fn item_offset(&self, index: usize) -> Option<u64> {
        (index < self.item_count).then(|| window::item_offset(index, self.config.item_extent()))
    }

    pub fn item(&self, index: usize) -> Option<VirtualItem> {
        let offset = self.item_offset(index)?;
        Some(VirtualItem {
            index,
            offset,
            extent: self.config.item_extent().get(),
        })
    }

    pub fn index_at_offset(&self, offset: i64) -> Option<usize> {
        window::index_at_offset(offset, self.config.item_extent(), self.item_count)
    }

    pub fn for_each_virtual_item(&self, mut f: impl FnMut(VirtualItem)) {
        let extent = self.config.item_extent();
        for index in self.window().indices() {
            f(VirtualItem {
                index,
                offset: window::item_offset(index, extent),
                extent: extent.get(),
            });
        }
    }

    /// Collects virtual items into `out` (clears `out` first).
    pub fn collect_virtual_items(&self, out: &mut Vec<VirtualItem>) {
        out.clear();
        self.for_each_virtual_item(|it| out.push(it));
    }

    pub fn max_scroll_offset(&self) -> i64 {
        window::max_scroll_offset(self.total_extent(), self.viewport.extent)
    }

    pub fn clamp_scroll_offset(&self, offset: i64) -> i64 {
        offset.clamp(0, self.max_scroll_offset())
    }

    /// Returns the (clamped) offset that brings `index` into view.
    pub fn scroll_to_index_offset(&self, index: usize, align: Align) -> i64 {
        if self.item_count == 0 {
            return 0;
        }
        let index = index.min(self.item_count - 1);
        let extent = self.config.item_extent();
        let start = window::item_offset(index, extent);
        align_offset(
            start,
            start.saturating_add(extent.get() as u64),
            self.viewport.scroll_offset,
            self.viewport.extent,
            self.max_scroll_offset(),
            align,
        )
    }

    /// Programmatically scrolls to an index. Returns the applied offset.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> i64 {
        let offset = self.scroll_to_index_offset(index, align);
        self.set_scroll_offset(offset);
        offset
    }
}
