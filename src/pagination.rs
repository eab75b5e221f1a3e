//! Client-side page bookkeeping.
//!
//! [`PageWindow`] mirrors the paging metadata last reported by the backend and
//! decides whether a requested page may be fetched or must be clamped locally.

use serde::Serialize;

use crate::domain::types::PageLimit;

/// Outcome of checking a requested page against the known bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCheck {
    /// The page is within bounds and may be requested from the backend.
    Fetch(u32),
    /// The page is out of bounds; the window moves to the contained page
    /// without touching the network.
    Clamp(u32),
}

/// Current page, fixed page size and the totals last reported by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    page: u32,
    limit: PageLimit,
    total_pages: u32,
    total: u64,
}

impl PageWindow {
    /// Window for a fresh session: page 1 of 1 with no known contacts.
    pub fn new(limit: PageLimit) -> Self {
        Self {
            page: 1,
            limit,
            total_pages: 1,
            total: 0,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> PageLimit {
        self.limit
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Validates `requested` against the last known number of pages.
    ///
    /// Page zero is floored to 1. Pages past the end are clamped only while the
    /// backend reports at least one page.
    pub fn check(&self, requested: u32) -> PageCheck {
        if requested == 0 {
            return PageCheck::Clamp(1);
        }
        if self.total_pages > 0 && requested > self.total_pages {
            return PageCheck::Clamp(self.total_pages);
        }
        PageCheck::Fetch(requested)
    }

    /// Moves the current page without refreshing the totals.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Records a successful list response for `page`.
    pub fn commit(&mut self, page: u32, total_pages: u32, total: u64) {
        self.page = page.max(1);
        self.total_pages = total_pages;
        self.total = total;
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page to show once the only contact of the current page is gone.
    pub fn page_after_emptied(&self) -> u32 {
        self.page.saturating_sub(1).max(1)
    }
}

/// Builds the list of page numbers to render in a pager.
///
/// `None` marks a gap between the edge pages and the pages around `current`.
/// Only [`page_links`] calls it, so the shell's page footer always shows the
/// first and last two pages plus two on either side of the current one.
fn get_pages(
    total_pages: u32,
    current_page: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Page links shown under the contact list, two pages on every side.
pub fn page_links(total_pages: u32, current_page: u32) -> Vec<Option<u32>> {
    get_pages(total_pages, current_page.max(1), 2, 2, 2, 2)
}
