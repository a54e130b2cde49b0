//! Raw-mode pager state.
//!
//! The state only changes when a raw response arrives; `total_count` is
//! whatever the backend reported, never a local count.

use eco_core::{measurement::RawMeta, query::PageRequest};
use serde::Serialize;

/// Supported page sizes.
pub const PER_PAGE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

pub const DEFAULT_PER_PAGE: u32 = 20;

/// Number of numbered page buttons shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    /// 1-based.
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            total_count: 0,
        }
    }
}

impl PaginationState {
    pub fn is_supported_per_page(per_page: u32) -> bool {
        PER_PAGE_OPTIONS.contains(&per_page)
    }

    /// State after a raw response. `per_page` comes from the request that
    /// produced the response, not from the body.
    pub fn from_response(meta: &RawMeta, request: PageRequest) -> Self {
        Self {
            page: meta.page.max(1),
            per_page: request.per_page,
            total_count: meta.total_count,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        let pages = self.total_count.div_ceil(u64::from(self.per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// 1-based inclusive bounds of the items on this page, `None` when there
    /// are no items or the page is past the end.
    pub fn item_range(&self) -> Option<(u64, u64)> {
        let first = u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page) + 1;
        let last = (u64::from(self.page) * u64::from(self.per_page)).min(self.total_count);
        if self.total_count == 0 || first > last {
            return None;
        }
        Some((first, last))
    }

    pub fn page_window(&self, max_visible: u32) -> PageWindow {
        PageWindow::compute(self.page, self.total_pages(), max_visible)
    }
}

/// Which page buttons a pager shows around the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: u32,
    pub total_pages: u32,
    /// First numbered button of the window.
    pub start: u32,
    /// Last numbered button of the window. Less than `start` when there are
    /// no pages.
    pub end: u32,
    pub has_prev: bool,
    pub has_next: bool,
    /// A separate "1" button before the window.
    pub show_first: bool,
    pub leading_ellipsis: bool,
    pub trailing_ellipsis: bool,
    /// A separate last-page button after the window.
    pub show_last: bool,
}

impl PageWindow {
    /// Centre a window of `max_visible` buttons on `current`, sliding it
    /// back when it would run past the last page.
    pub fn compute(current: u32, total_pages: u32, max_visible: u32) -> Self {
        let max_visible = max_visible.max(1);
        let mut start = current.saturating_sub(max_visible / 2).max(1);
        let end = (start + max_visible - 1).min(total_pages);
        if end + 1 < start + max_visible {
            start = (end + 1).saturating_sub(max_visible).max(1);
        }
        Self {
            current,
            total_pages,
            start,
            end,
            has_prev: current > 1,
            has_next: current < total_pages,
            show_first: start > 1,
            leading_ellipsis: start > 2,
            trailing_ellipsis: end + 1 < total_pages,
            show_last: end < total_pages,
        }
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}
