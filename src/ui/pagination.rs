//! Windowed page-number strip.
//!
//! Long result sets cannot show every page number. The strip always shows the
//! first and last `margin` pages plus a `range`-wide window around the current
//! page, and replaces each run of hidden pages with a single gap marker.
//!
//! ```text
//! total = 20, current = 10:   ← 1 … 8 9 [10] 11 12 … 20 →
//! total = 20, current = 1:    ← [1] 2 3 4 5 … 20 →
//! ```

/// Pages in the sliding window around the current page.
pub const PAGE_RANGE_DISPLAYED: u32 = 5;

/// Pages always shown at each end of the strip.
pub const MARGIN_PAGES_DISPLAYED: u32 = 1;

/// One position in the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A selectable page number.
    Page(u32),
    /// A run of hidden pages.
    Gap,
}

/// Computes the page strip for `current` out of `total` pages.
///
/// `current` is clamped into `[1, total]`. An empty result set (`total == 0`)
/// has no strip. A gap that would hide exactly one page shows that page
/// instead, since the marker would take the same space.
///
/// # Example
///
/// ```
/// use zinema::ui::pagination::{page_window, PageSlot::{Gap, Page}};
///
/// assert_eq!(
///     page_window(10, 20, 5, 1),
///     vec![Page(1), Gap, Page(8), Page(9), Page(10), Page(11), Page(12), Gap, Page(20)]
/// );
/// ```
#[must_use]
pub fn page_window(current: u32, total: u32, range: u32, margin: u32) -> Vec<PageSlot> {
    if total == 0 {
        return vec![];
    }

    if total <= range + 2 * margin {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = current.clamp(1, total);
    let range = range.max(1);
    let mut start = current.saturating_sub(range / 2).max(1);
    let mut end = start + range - 1;
    if end > total {
        end = total;
        start = end + 1 - range;
    }

    let visible = |page: u32| page <= margin || page > total - margin || (start..=end).contains(&page);

    let mut slots: Vec<PageSlot> = Vec::new();
    for page in 1..=total {
        if visible(page) {
            slots.push(PageSlot::Page(page));
        } else if slots.last() != Some(&PageSlot::Gap) {
            slots.push(PageSlot::Gap);
        }
    }

    fill_single_page_gaps(&slots)
}

/// Replaces `Page(n), Gap, Page(n + 2)` with the hidden page itself.
fn fill_single_page_gaps(slots: &[PageSlot]) -> Vec<PageSlot> {
    let mut filled = Vec::with_capacity(slots.len());
    for (i, slot) in slots.iter().enumerate() {
        match (i.checked_sub(1).map(|p| slots[p]), slot, slots.get(i + 1)) {
            (Some(PageSlot::Page(before)), PageSlot::Gap, Some(PageSlot::Page(after)))
                if *after == before + 2 =>
            {
                filled.push(PageSlot::Page(before + 1));
            }
            _ => filled.push(*slot),
        }
    }
    filled
}
