// web_app/model/pagination.rs - Page arithmetic for the products table
//
// Pages are 1-indexed. The table never stores the current page: the caller
// owns it and re-supplies it on every render.

use std::ops::RangeInclusive;

/// The first page.
pub const FIRST_PAGE: u32 = 1;

/// Rows per page on the admin products page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Snapshot of the caller's pagination state, with boundary rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageControls {
    current: u32,
    total: u32,
}

impl Default for PageControls {
    fn default() -> Self {
        Self::new(FIRST_PAGE, FIRST_PAGE)
    }
}

impl PageControls {
    /// A zero page count is treated as a single page.
    pub fn new(current: u32, total: u32) -> Self {
        Self {
            current,
            total: total.max(FIRST_PAGE),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Clamp a requested page into `[1, total]`.
    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(FIRST_PAGE, self.total)
    }

    pub fn has_previous(&self) -> bool {
        self.current > FIRST_PAGE
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    /// Target of the "previous" control, `None` when it is disabled.
    pub fn previous(&self) -> Option<u32> {
        self.has_previous()
            .then(|| self.clamp(self.current.saturating_sub(1)))
    }

    /// Target of the "next" control, `None` when it is disabled.
    pub fn next(&self) -> Option<u32> {
        self.has_next()
            .then(|| self.clamp(self.current.saturating_add(1)))
    }

    pub fn pages(&self) -> RangeInclusive<u32> {
        FIRST_PAGE..=self.total
    }

    pub fn is_active(&self, page: u32) -> bool {
        page == self.current
    }

    /// Controls are shown only for a loaded, non-empty list spanning several pages.
    pub fn should_render(&self, loading: bool, item_count: usize) -> bool {
        !loading && item_count > 0 && self.total > FIRST_PAGE
    }
}

/// Number of pages needed for `item_count` rows; never less than one.
pub fn total_pages(item_count: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return FIRST_PAGE;
    }
    let pages = item_count.div_ceil(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX).max(FIRST_PAGE)
}

/// Cuts a full list into the page a caller asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    page_size: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn total_pages(&self, item_count: usize) -> u32 {
        total_pages(item_count, self.page_size)
    }

    /// Items on `page`; pages past the end yield an empty slice.
    pub fn slice<'a, T>(&self, items: &'a [T], page: u32) -> &'a [T] {
        let index = page.max(FIRST_PAGE) as usize - 1;
        let start = index.saturating_mul(self.page_size).min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}
