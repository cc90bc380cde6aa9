//! Page window arithmetic and pagination controls

use serde::{Deserialize, Serialize};

/// Restaurants per page on the listing grid
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// Maximum numbered page buttons rendered at once
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// Current slice parameters over a filtered list
///
/// Invariant: `1 <= current_page <= max(total_pages, 1)`. Every constructor
/// and transition clamps instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    current_page: u32,
    page_size: u32,
    total_items: usize,
}

impl PageWindow {
    /// Window on page 1; a zero page size is treated as 1.
    pub fn new(page_size: u32, total_items: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
            total_items,
        }
    }

    /// Window positioned at `requested`, clamped into range.
    pub fn at(requested: i64, page_size: u32, total_items: usize) -> Self {
        Self::new(page_size, total_items).change_page(requested)
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// `ceil(total_items / page_size)`; zero for an empty list.
    pub fn total_pages(&self) -> u32 {
        let pages = self.total_items.div_ceil(self.page_size as usize);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Highest reachable page (1 even when there are no pages).
    pub fn last_page(&self) -> u32 {
        self.total_pages().max(1)
    }

    /// Move to `requested`, clamped into `[1, max(total_pages, 1)]`.
    pub fn change_page(self, requested: i64) -> Self {
        let last = i64::from(self.last_page());
        let page = requested.clamp(1, last);
        Self {
            // 1 <= page <= u32::MAX
            current_page: page as u32,
            ..self
        }
    }

    /// Same page size, new item count, back on page 1.
    pub fn reset(self, total_items: usize) -> Self {
        Self::new(self.page_size, total_items)
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.current_page as usize - 1).saturating_mul(self.page_size as usize)
    }

    /// Items `[offset, offset + page_size)` clamped to `items.len()`.
    ///
    /// Empty when the window starts past the end of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size as usize).min(items.len());
        &items[start..end]
    }

    pub fn controls(&self) -> PageControls {
        page_controls(self)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// Slice of `filtered` shown by `window`.
pub fn page<T: Clone>(filtered: &[T], window: &PageWindow) -> Vec<T> {
    window.slice(filtered).to_vec()
}

/// Clamp `requested` into the window's page range.
pub fn change_page(requested: i64, window: PageWindow) -> PageWindow {
    window.change_page(requested)
}

/// What the pagination bar renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageControls {
    /// Numbered buttons, ascending
    pub pages: Vec<u32>,
    pub current: u32,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Up to five numbered buttons around the current page.
///
/// `start = max(current - 2, 1)`, `end = min(start + 4, total_pages)`.
pub fn page_controls(window: &PageWindow) -> PageControls {
    let total = window.total_pages();
    let current = window.current_page();
    let start = current.saturating_sub(2).max(1);
    let end = start.saturating_add(MAX_PAGE_BUTTONS - 1).min(total);

    PageControls {
        pages: (start..=end).collect(),
        current,
        has_previous: current > 1,
        has_next: current < total,
    }
}
