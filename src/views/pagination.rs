//! Page navigator

use std::fmt;

/// Previous/next control bound to the page metadata of the last response.
///
/// Values are kept exactly as the server sent them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControl {
    current_page: u32,
    total_pages: u32,
}

impl PaginationControl {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages
    }

    /// Invoke `on_change` with the previous page unless the button is disabled.
    pub fn click_previous(&self, on_change: impl FnOnce(u32)) -> bool {
        if self.previous_disabled() {
            return false;
        }
        on_change(self.current_page.saturating_sub(1));
        true
    }

    /// Invoke `on_change` with the next page unless the button is disabled.
    pub fn click_next(&self, on_change: impl FnOnce(u32)) -> bool {
        if self.next_disabled() {
            return false;
        }
        on_change(self.current_page.saturating_add(1));
        true
    }

    /// `Page <current> of <total>`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PaginationControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.current_page, self.total_pages)
    }
}
