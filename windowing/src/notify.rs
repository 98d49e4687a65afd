use alloc::sync::Arc;
use core::fmt;

/// A callback fired when a recomputed window differs from the previous one.
pub type OnWindowChange<W> = Arc<dyn Fn(&W) + Send + Sync>;

/// Coalesces window-change notifications across nested batches.
///
/// The window is captured when the outermost batch opens and compared when it closes, so
/// the callback fires at most once per batch and only for an actual change.
pub(crate) struct ChangeNotifier<W> {
    callback: Option<OnWindowChange<W>>,
    depth: usize,
    before: Option<W>,
}

impl<W: Copy + PartialEq> ChangeNotifier<W> {
    pub(crate) fn new() -> Self {
        Self {
            callback: None,
            depth: 0,
            before: None,
        }
    }

    pub(crate) fn set_callback(&mut self, callback: Option<OnWindowChange<W>>) {
        self.callback = callback;
    }

    pub(crate) fn begin(&mut self, current: W) {
        if self.depth == 0 {
            self.before = Some(current);
        }
        self.depth = self.depth.saturating_add(1);
    }

    pub(crate) fn end(&mut self, current: W) {
        debug_assert!(self.depth > 0, "ChangeNotifier depth underflow");
        self.depth = self.depth.saturating_sub(1);
        if self.depth > 0 {
            return;
        }
        let Some(before) = self.before.take() else {
            return;
        };
        if before == current {
            return;
        }
        if let Some(cb) = &self.callback {
            cb(&current);
        }
    }
}

impl<W> Clone for ChangeNotifier<W> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            depth: 0,
            before: None,
        }
    }
}

impl<W> fmt::Debug for ChangeNotifier<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("has_callback", &self.callback.is_some())
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
