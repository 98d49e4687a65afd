use core::cmp;

use crate::ScrollState;

const DEFAULT_RESET_DELAY_MS: u64 = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Tracks the host's scroll readings for one axis.
///
/// Scroll events arrive on a single event queue, so state is overwritten rather than
/// merged: the most recent reading always wins. `is_scrolling` is set on every event and
/// cleared by [`Self::tick`] once no event has arrived for the reset delay.
#[derive(Clone, Debug)]
pub struct ScrollObserver {
    offset: i64,
    is_scrolling: bool,
    direction: Option<ScrollDirection>,
    last_event_ms: Option<u64>,
    reset_delay_ms: u64,
}

impl ScrollObserver {
    pub fn new() -> Self {
        Self {
            offset: 0,
            is_scrolling: false,
            direction: None,
            last_event_ms: None,
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }

    pub fn with_reset_delay_ms(mut self, delay_ms: u64) -> Self {
        self.reset_delay_ms = delay_ms;
        self
    }

    pub fn reset_delay_ms(&self) -> u64 {
        self.reset_delay_ms
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn direction(&self) -> Option<ScrollDirection> {
        self.direction
    }

    /// Records a scroll event. Returns `true` if the offset changed.
    pub fn on_scroll(&mut self, offset: i64, now_ms: u64) -> bool {
        atrace!(offset, now_ms, "ScrollObserver::on_scroll");
        self.last_event_ms = Some(now_ms);
        self.is_scrolling = true;
        let prev = self.offset;
        self.offset = offset;
        self.direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.direction,
        };
        offset != prev
    }

    /// Sets the offset without treating it as user scrolling (programmatic jumps).
    pub fn set_offset(&mut self, offset: i64) {
        self.offset = offset;
    }

    /// Clears `is_scrolling` once the reset delay has elapsed since the last event.
    ///
    /// Returns `true` when scrolling ended on this tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_scrolling {
            return false;
        }
        let Some(last) = self.last_event_ms else {
            return false;
        };
        if now_ms.saturating_sub(last) >= self.reset_delay_ms {
            self.stop();
            return true;
        }
        false
    }

    /// Ends the current scroll gesture immediately.
    pub fn stop(&mut self) {
        self.is_scrolling = false;
        self.direction = None;
        self.last_event_ms = None;
    }

    pub fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.offset,
            is_scrolling: self.is_scrolling,
        }
    }

    /// Restores a snapshot. A scrolling snapshot restarts the reset timer at `now_ms`.
    pub fn restore(&mut self, state: ScrollState, now_ms: u64) {
        self.offset = state.offset;
        self.direction = None;
        if state.is_scrolling {
            self.is_scrolling = true;
            self.last_event_ms = Some(now_ms);
        } else {
            self.stop();
        }
    }
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new()
    }
}
