use windowing::Align;

use crate::{
    Easing, FrameState, ScrollAnchor, ScrollObserver, ScrollTarget, Tween, ViewStateStore,
    apply_anchor, capture_first_visible_anchor,
};

/// Owns one windowed view and the scroll bookkeeping around it.
///
/// The host forwards its resize and scroll events (`on_viewport_extent`, `on_scroll`) and
/// calls `tick(now_ms)` from its frame timer. While a tween runs, `tick` returns the offset
/// the host should write back into its real scroll container.
#[derive(Clone, Debug)]
pub struct Controller<T> {
    target: T,
    observer: ScrollObserver,
    tween: Option<Tween>,
}

impl<T: ScrollTarget> Controller<T> {
    pub fn new(target: T) -> Self {
        Self::with_observer(target, ScrollObserver::new())
    }

    pub fn with_observer(target: T, mut observer: ScrollObserver) -> Self {
        observer.set_offset(target.scroll_offset());
        Self {
            target,
            observer,
            tween: None,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn observer(&self) -> &ScrollObserver {
        &self.observer
    }

    pub fn is_scrolling(&self) -> bool {
        self.observer.is_scrolling()
    }

    /// The running tween, if any.
    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            atrace!("tween cancelled");
        }
    }

    pub fn on_viewport_extent(&mut self, extent: u32) {
        self.target.set_viewport_extent(extent);
    }

    /// Feeds a scroll reading from the host (wheel, drag, keyboard).
    ///
    /// A user scroll wins over a running tween. The reading is applied unclamped; the
    /// window math already tolerates overscroll.
    pub fn on_scroll(&mut self, scroll_offset: i64, now_ms: u64) {
        self.cancel_animation();
        self.observer.on_scroll(scroll_offset, now_ms);
        self.target.set_scroll_offset(scroll_offset);
    }

    /// Steps the running tween and returns the offset it moved to.
    ///
    /// With no tween this only expires `is_scrolling` and returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        let Some(tween) = self.tween else {
            self.observer.tick(now_ms);
            return None;
        };

        let off = self.target.clamp_scroll_offset(tween.sample(now_ms));
        self.observer.on_scroll(off, now_ms);
        self.target.set_scroll_offset(off);

        if tween.is_done(now_ms) {
            atrace!(offset = off, "tween finished");
            self.tween = None;
            self.observer.stop();
        }

        Some(self.target.scroll_offset())
    }

    /// Jumps so that `index` sits at `align`. Returns the offset now in effect.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> i64 {
        let off = self.target.scroll_to_index_offset(index, align);
        self.jump_to(off)
    }

    /// Jumps to `offset`, clamped to the scrollable range.
    pub fn scroll_to_offset(&mut self, offset: i64) -> i64 {
        let off = self.target.clamp_scroll_offset(offset);
        self.jump_to(off)
    }

    fn jump_to(&mut self, offset: i64) -> i64 {
        self.cancel_animation();
        self.observer.set_offset(offset);
        self.target.set_scroll_offset(offset);
        offset
    }

    /// Animates towards `index` at `align`. Returns where the tween will land.
    pub fn start_tween_to_index(
        &mut self,
        index: usize,
        align: Align,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> i64 {
        let to = self.target.scroll_to_index_offset(index, align);
        self.start_tween_to_offset(to, now_ms, duration_ms, easing)
    }

    /// Animates from the current offset towards `offset`. Returns where the tween will land.
    pub fn start_tween_to_offset(
        &mut self,
        offset: i64,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> i64 {
        let to = self.target.clamp_scroll_offset(offset);
        let from = self.target.scroll_offset();
        adebug!(from, to, duration_ms, "start_tween_to_offset");
        self.tween = Some(Tween::new(from, to, now_ms, duration_ms, easing));
        to
    }

    pub fn capture_first_visible_anchor(&self) -> Option<ScrollAnchor> {
        capture_first_visible_anchor(&self.target)
    }

    /// Re-pins the view to `anchor` after a data change. Any running tween is dropped.
    pub fn apply_anchor(
        &mut self,
        anchor: &ScrollAnchor,
        remap: impl FnMut(usize) -> Option<usize>,
    ) -> bool {
        self.cancel_animation();
        let applied = apply_anchor(&mut self.target, anchor, remap);
        if applied {
            self.observer.set_offset(self.target.scroll_offset());
        }
        applied
    }

    /// Snapshot for [`Self::save_state`] or a host's own persistence.
    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport_extent: self.target.viewport_extent(),
            scroll: self.observer.state(),
        }
    }

    /// Re-applies a snapshot. The offset is clamped against the content as it is now.
    pub fn restore_frame_state(&mut self, frame: FrameState, now_ms: u64) {
        self.cancel_animation();
        self.target.set_viewport_extent(frame.viewport_extent);
        let mut scroll = frame.scroll;
        scroll.offset = self.target.clamp_scroll_offset(scroll.offset);
        self.observer.restore(scroll, now_ms);
        self.target.set_scroll_offset(scroll.offset);
    }

    pub fn save_state(&self, store: &mut impl ViewStateStore, key: &str) {
        store.save(key, self.frame_state());
    }

    /// Restores the state saved under `key`. Returns `false` if nothing was saved.
    pub fn restore_state(&mut self, store: &impl ViewStateStore, key: &str, now_ms: u64) -> bool {
        let Some(frame) = store.load(key) else {
            return false;
        };
        self.restore_frame_state(frame, now_ms);
        true
    }
}
