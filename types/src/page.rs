use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::UserRecord;

pub const PAGE_SIZE: usize = 10;

/// Pagination arithmetic over a collection of `total` items.
///
/// Pages are 1-based; page 0 is treated as page 1. The visible slice is
/// clamped to the collection, so a page past the end is empty rather than
/// out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
    total: usize,
}

impl PageWindow {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn start(&self) -> usize {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .min(self.total)
    }

    pub fn end(&self) -> usize {
        (self.page - 1)
            .saturating_mul(self.page_size)
            .saturating_add(self.page_size)
            .min(self.total)
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }
}

/// One page of the filtered roster, plus the numbers for a
/// "showing X to Y of Z" footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPage {
    pub users: Vec<UserRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_results: usize,
    /// 1-based index of the first visible record, 0 when the page is empty.
    pub first_index: usize,
    pub last_index: usize,
}

impl RosterPage {
    pub(crate) fn new(window: PageWindow, users: Vec<UserRecord>) -> Self {
        let first_index = if users.is_empty() {
            0
        } else {
            window.start() + 1
        };

        Self {
            users,
            page: window.page(),
            total_pages: window.total_pages(),
            total_results: window.total(),
            first_index,
            last_index: window.end(),
        }
    }

    /// Pagination controls are only worth showing with more than one page.
    pub fn has_multiple_pages(&self) -> bool {
        self.total_pages > 1
    }
}
