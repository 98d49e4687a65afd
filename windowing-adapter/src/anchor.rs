use crate::ScrollTarget;

/// A scroll anchor that can be used to preserve visual position across data changes.
///
/// Typical use cases:
/// - loading older records above the current ones without content jumping
/// - any insert/remove above the viewport where the view should stay on the same item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAnchor {
    pub index: usize,
    /// Distance from the anchor item's start to the scroll offset.
    pub offset_in_item: u64,
}

/// Captures an anchor for the item at the top of the viewport.
///
/// Returns `None` if the target has no items.
pub fn capture_first_visible_anchor<T: ScrollTarget + ?Sized>(t: &T) -> Option<ScrollAnchor> {
    let offset = t.scroll_offset().max(0);
    let index = t.index_at_offset(offset)?;
    let start = t.item_start(index)?;
    Some(ScrollAnchor {
        index,
        offset_in_item: (offset as u64).saturating_sub(start),
    })
}

/// Applies a previously captured anchor by adjusting the scroll offset.
///
/// `remap` translates the anchor's old index into the current data set (for example
/// `|i| Some(i + inserted)` after a prepend). Returns `true` when the anchor was applied.
pub fn apply_anchor<T: ScrollTarget + ?Sized>(
    t: &mut T,
    anchor: &ScrollAnchor,
    mut remap: impl FnMut(usize) -> Option<usize>,
) -> bool {
    let Some(index) = remap(anchor.index) else {
        return false;
    };
    let Some(start) = t.item_start(index) else {
        awarn!(index, "apply_anchor: remapped index out of range");
        return false;
    };
    let target = i64::try_from(start.saturating_add(anchor.offset_in_item)).unwrap_or(i64::MAX);
    let clamped = t.clamp_scroll_offset(target);
    adebug!(index, target, clamped, "apply_anchor");
    t.set_scroll_offset(clamped);
    true
}
