//! Sliding-window pagination for the browse page.
use std::ops::RangeInclusive;

const WINDOW_RADIUS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub page: i64,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub previous: i64,
    pub previous_disabled: bool,
    pub pages: Vec<PageLink>,
    /// Ellipsis followed by a link to this page.
    pub last: Option<i64>,
    pub next: i64,
    pub next_disabled: bool,
}

/// Pages within `WINDOW_RADIUS` of `current_page`, clipped to `1..=total_pages`.
/// Empty when `current_page` lies far outside that range.
pub fn page_window(current_page: i64, total_pages: i64) -> RangeInclusive<i64> {
    let start = current_page.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current_page.saturating_add(WINDOW_RADIUS).min(total_pages);
    start..=end
}

pub fn paginate(current_page: i64, total_pages: i64) -> Pagination {
    let window = page_window(current_page, total_pages);
    let end = *window.end();
    let pages = window
        .map(|page| PageLink {
            page,
            active: page == current_page,
        })
        .collect();

    Pagination {
        previous: current_page.saturating_sub(1).max(1),
        previous_disabled: current_page <= 1,
        pages,
        last: (total_pages.saturating_sub(end) > WINDOW_RADIUS).then_some(total_pages),
        next: current_page.saturating_add(1).min(total_pages).max(1),
        next_disabled: current_page >= total_pages,
    }
}
