//! Page-number pagination for the GitHub search API.
//!
//! The search endpoint does not report how many pages remain in a form the
//! tool relies on. Instead a page that comes back full implies another page
//! may follow, and the first short (or empty) page ends the walk.

/// Largest page size the search API accepts, and the size every request uses.
pub const SEARCH_PAGE_SIZE: u8 = 100;

/// Position of one request within a paginated search.
///
/// # Example
///
/// ```
/// use prtally::github::pagination::PageCursor;
///
/// let first = PageCursor::first();
/// assert_eq!(first.page(), 1);
/// assert!(first.has_next_after(100));
/// assert!(!first.has_next_after(99));
/// assert_eq!(first.next().page(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    /// Current page number (1-based).
    page: u32,
    /// Items requested per page.
    per_page: u8,
}

impl PageCursor {
    /// Returns the cursor for the first page at [`SEARCH_PAGE_SIZE`].
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: 1,
            per_page: SEARCH_PAGE_SIZE,
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the number of items requested per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns true if a page holding `returned` items may be followed by
    /// another one.
    #[must_use]
    pub const fn has_next_after(&self, returned: usize) -> bool {
        returned > 0 && returned >= self.per_page as usize
    }

    /// Returns the cursor for the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            per_page: self.per_page,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}
