//! Page strip component renderer.
//!
//! Draws the windowed page numbers computed by `ui::pagination` with previous
//! and next arrows, centered under the grid. The active page is drawn with the
//! page highlight colors and disabled arrows are dimmed.

use crate::ui::helpers::position_cursor;
use crate::ui::pagination::PageSlot;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PaginationInfo;

/// One drawable piece of the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Arrow { glyph: &'static str, enabled: bool },
    Page { number: u32, active: bool },
    Gap,
}

impl Segment {
    fn text(&self) -> String {
        match self {
            Self::Arrow { glyph, .. } => (*glyph).to_string(),
            Self::Page { number, active: true } => format!("[{number}]"),
            Self::Page { number, active: false } => number.to_string(),
            Self::Gap => "…".to_string(),
        }
    }
}

fn segments(info: &PaginationInfo) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(info.slots.len() + 2);
    segments.push(Segment::Arrow {
        glyph: "‹",
        enabled: info.has_previous,
    });
    segments.extend(info.slots.iter().map(|slot| match slot {
        PageSlot::Page(number) => Segment::Page {
            number: *number,
            active: *number == info.current,
        },
        PageSlot::Gap => Segment::Gap,
    }));
    segments.push(Segment::Arrow {
        glyph: "›",
        enabled: info.has_next,
    });
    segments
}

/// Plain-text form of the strip, e.g. `‹ 1 … 8 9 [10] 11 12 … 20 ›`.
fn strip_text(info: &PaginationInfo) -> String {
    segments(info)
        .iter()
        .map(Segment::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders the page strip at `row`. Returns the next available row.
pub fn render_pager(row: usize, info: &PaginationInfo, theme: &Theme, cols: usize) -> usize {
    let width = strip_text(info).chars().count();
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));

    for (i, segment) in segments(info).iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        match segment {
            Segment::Arrow { enabled: false, .. } | Segment::Gap => {
                print!("{}", Theme::fg(&theme.colors.text_dim));
            }
            Segment::Page { active: true, .. } => {
                print!("{}", Theme::bold());
                print!("{}", Theme::fg(&theme.colors.page_active_fg));
                print!("{}", Theme::bg(&theme.colors.page_active_bg));
            }
            Segment::Arrow { enabled: true, .. } | Segment::Page { active: false, .. } => {
                print!("{}", Theme::fg(&theme.colors.text_normal));
            }
        }
        print!("{}", segment.text());
        print!("{}", Theme::reset());
    }

    print!("{}", " ".repeat(cols.saturating_sub(padding + width)));
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pagination::page_window;

    fn info(current: u32, total: u32) -> PaginationInfo {
        PaginationInfo {
            current,
            total_pages: total,
            slots: page_window(current, total, 5, 1),
            has_previous: current > 1,
            has_next: current < total,
        }
    }

    #[test]
    fn strip_marks_the_active_page() {
        assert_eq!(strip_text(&info(10, 20)), "‹ 1 … 8 9 [10] 11 12 … 20 ›");
        assert_eq!(strip_text(&info(1, 5)), "‹ [1] 2 3 4 5 ›");
    }

    #[test]
    fn arrows_are_disabled_at_the_ends() {
        let first = segments(&info(1, 3));
        assert_eq!(first.first(), Some(&Segment::Arrow { glyph: "‹", enabled: false }));
        assert_eq!(first.last(), Some(&Segment::Arrow { glyph: "›", enabled: true }));

        let last = segments(&info(3, 3));
        assert_eq!(last.last(), Some(&Segment::Arrow { glyph: "›", enabled: false }));
    }
}
