//! Reveal cursor for infinite scrolling over the filtered result.

use serde::{Deserialize, Serialize};

/// Records revealed initially and per reveal-more step.
pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// How much of the current filtered result is revealed.
///
/// The raw cursor is reset to one page whenever filter inputs change; the observable revealed
/// count is always clamped to the filtered length.
pub struct PaginationState {
    cursor: usize,
    page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PaginationState {
    /// Creates a cursor at one page. A zero page size is treated as one.
    pub fn new(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            cursor: page_size,
            page_size,
        }
    }

    /// Page increment.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Raw cursor value, before clamping.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of records revealed out of `filtered_len`.
    pub fn revealed(&self, filtered_len: usize) -> usize {
        self.cursor.min(filtered_len)
    }

    /// Returns whether a reveal-more trigger would be honored.
    pub fn has_more(&self, filtered_len: usize) -> bool {
        self.cursor < filtered_len
    }

    /// Grows the cursor by one page, clamped to `filtered_len`.
    ///
    /// Returns `false` and leaves the cursor untouched when everything is already revealed.
    pub fn reveal_more(&mut self, filtered_len: usize) -> bool {
        if !self.has_more(filtered_len) {
            return false;
        }
        self.cursor = self
            .cursor
            .saturating_add(self.page_size)
            .min(filtered_len);
        true
    }

    /// Returns the cursor to one page.
    pub fn reset(&mut self) {
        self.cursor = self.page_size;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_at_one_page_and_clamps_to_result_length() {
        let pagination = PaginationState::default();
        assert_eq!(pagination.cursor(), 50);
        assert_eq!(pagination.revealed(30), 30);
        assert_eq!(pagination.revealed(500), 50);
    }

    #[test]
    fn reveal_more_grows_by_page_and_stops_at_end() {
        let mut pagination = PaginationState::default();
        assert!(pagination.reveal_more(120));
        assert_eq!(pagination.revealed(120), 100);
        assert!(pagination.reveal_more(120));
        assert_eq!(pagination.cursor(), 120);
        assert!(!pagination.reveal_more(120));
        assert!(!pagination.reveal_more(120));
        assert_eq!(pagination.cursor(), 120);
    }

    #[test]
    fn short_results_never_reveal_more() {
        let mut pagination = PaginationState::default();
        assert!(!pagination.has_more(50));
        assert!(!pagination.reveal_more(30));
        assert_eq!(pagination.cursor(), 50);
    }

    #[test]
    fn reset_returns_to_one_page_and_zero_page_size_is_clamped() {
        let mut pagination = PaginationState::new(0);
        assert_eq!(pagination.page_size(), 1);
        pagination.reveal_more(10);
        pagination.reset();
        assert_eq!(pagination.cursor(), 1);
    }
}
