//! The 1D windowing calculator.
//!
//! Everything here is a pure function of its inputs so it can be exercised without any
//! rendering environment.

use core::num::NonZeroU32;

use crate::{Align, Window};

fn to_usize(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

/// Computes the minimal contiguous window covering the viewport plus `overscan` items on
/// each side.
///
/// - `raw_start = floor(scroll_offset / item_extent)` (negative offsets read as `0`).
/// - `start_index = raw_start - overscan`, saturating at `0`.
/// - `visible_count = ceil(viewport_extent / item_extent)`.
/// - `end_index = min(item_count - 1, raw_start + visible_count + overscan)`.
///
/// `raw_start` is clamped to the last item, so an offset past the content still yields a
/// window that ends at the last item. Callers that do not allow overscroll should clamp the
/// offset themselves (see [`max_scroll_offset`]).
///
/// Returns [`Window::empty`] when `item_count == 0`.
pub fn compute_window(
    scroll_offset: i64,
    viewport_extent: u32,
    item_extent: NonZeroU32,
    item_count: usize,
    overscan: usize,
) -> Window {
    if item_count == 0 {
        return Window::empty();
    }

    let extent = item_extent.get() as u64;
    let last = item_count - 1;
    let offset = u64::try_from(scroll_offset).unwrap_or(0);

    let raw_start = to_usize(offset / extent).min(last);
    let visible_count = to_usize((viewport_extent as u64).div_ceil(extent));

    let start_index = raw_start.saturating_sub(overscan);
    let end_index = raw_start
        .saturating_add(visible_count)
        .saturating_add(overscan)
        .min(last);

    Window {
        start_index,
        end_index,
        item_count,
    }
}

/// Absolute offset of `index` in a fixed-extent strip.
pub fn item_offset(index: usize, item_extent: NonZeroU32) -> u64 {
    (index as u64).saturating_mul(item_extent.get() as u64)
}

/// Total scrollable extent of `item_count` fixed-extent items.
///
/// This is what the spacer reports to the host so scrollbar proportions reflect the whole
/// sequence regardless of how many items are materialized.
pub fn total_extent(item_count: usize, item_extent: NonZeroU32) -> u64 {
    (item_count as u64).saturating_mul(item_extent.get() as u64)
}

/// Index of the item covering `offset`, or `None` for an empty strip.
pub fn index_at_offset(offset: i64, item_extent: NonZeroU32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let offset = u64::try_from(offset).unwrap_or(0);
    Some(to_usize(offset / item_extent.get() as u64).min(item_count - 1))
}

/// Largest scroll offset that still fills the viewport with content.
pub fn max_scroll_offset(content_extent: u64, viewport_extent: u32) -> i64 {
    let max = content_extent.saturating_sub(viewport_extent as u64);
    i64::try_from(max).unwrap_or(i64::MAX)
}

/// Scroll offset that brings `[start, end)` into a viewport at `current` with the given
/// alignment, clamped to `[0, max]`.
pub(crate) fn align_offset(
    start: u64,
    end: u64,
    current: i64,
    viewport_extent: u32,
    max: i64,
    align: Align,
) -> i64 {
    let view = viewport_extent as u64;
    let cur = u64::try_from(current).unwrap_or(0);
    let target = match align {
        Align::Start => start,
        Align::End => end.saturating_sub(view),
        Align::Center => {
            let center = start.saturating_add(end.saturating_sub(start) / 2);
            center.saturating_sub(view / 2)
        }
        Align::Auto => {
            let cur_end = cur.saturating_add(view);
            if start >= cur && end <= cur_end {
                cur
            } else if start < cur {
                start
            } else {
                end.saturating_sub(view)
            }
        }
    };
    i64::try_from(target).unwrap_or(i64::MAX).clamp(0, max.max(0))
}
