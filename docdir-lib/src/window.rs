//! Incremental page window over a listing result.
//!
//! The visible part of a result is always the prefix
//! `result[..current_page * page_size]`. It grows one page at a time and is
//! put back to the first page whenever the result itself is replaced.
//!
//! Scroll-driven loading goes through [`PageWindow::request_load`] and
//! [`PageWindow::complete_load`]. Only one load may be in flight, and a load
//! requested before a [`PageWindow::reset`] is dropped when it completes so
//! items from a stale result can never be revealed.

/// Default number of items revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Default distance from the end of the list, in pixels, that counts as
/// "near the end" for scroll-driven loading.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 200.0;

/// Scroll geometry reported by the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Distance scrolled from the top of the list.
    pub offset: f64,
    /// Height of the visible viewport.
    pub viewport: f64,
    /// Total height of the rendered list.
    pub content: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, viewport: f64, content: f64) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Pixels left below the bottom of the viewport.
    pub fn remaining(&self) -> f64 {
        (self.content - (self.offset + self.viewport)).max(0.0)
    }

    pub fn is_near_end(&self, threshold: f64) -> bool {
        self.remaining() <= threshold
    }
}

/// Permission to reveal one more page, handed out by
/// [`PageWindow::request_load`].
///
/// Tickets are tied to the result generation they were issued for.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a load ticket must be passed to complete_load"]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A monotonically growing prefix of a result list.
#[derive(Debug, Clone)]
pub struct PageWindow<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
    generation: u64,
    loading: bool,
    scroll_threshold: f64,
}

impl<T> PageWindow<T> {
    /// Create an empty window. A `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            current_page: 1,
            generation: 0,
            loading: false,
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }

    pub fn with_scroll_threshold(mut self, threshold: f64) -> Self {
        self.scroll_threshold = threshold.max(0.0);
        self
    }

    /// Replace the result and go back to the first page.
    ///
    /// Starts a new generation: tickets issued before this call are void.
    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
        self.generation += 1;
        self.loading = false;
        log::debug!(
            "Page window reset: generation {}, {} items",
            self.generation,
            self.items.len()
        );
    }

    /// Reveal the next page and return the newly visible items.
    ///
    /// Returns an empty slice without changing state once everything is
    /// visible.
    pub fn advance(&mut self) -> &[T] {
        if !self.has_more() {
            return &[];
        }
        let start = self.visible_len();
        self.current_page += 1;
        let end = self.visible_len();
        log::debug!("Page window advanced to page {}", self.current_page);
        &self.items[start..end]
    }

    /// Ask to load more in response to a scroll event.
    ///
    /// Returns `None` when the scroll position is not near the end, nothing
    /// remains to be revealed, or a load is already in flight.
    pub fn request_load(&mut self, metrics: &ScrollMetrics) -> Option<LoadTicket> {
        if self.loading || !self.has_more() || !metrics.is_near_end(self.scroll_threshold) {
            return None;
        }
        self.loading = true;
        Some(LoadTicket {
            generation: self.generation,
        })
    }

    /// Finish a load started by [`request_load`](Self::request_load).
    ///
    /// A ticket from an earlier generation is discarded and reveals nothing.
    pub fn complete_load(&mut self, ticket: LoadTicket) -> &[T] {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale load from generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return &[];
        }
        self.loading = false;
        self.advance()
    }

    pub fn visible(&self) -> &[T] {
        &self.items[..self.visible_len()]
    }

    pub fn visible_len(&self) -> usize {
        self.current_page
            .saturating_mul(self.page_size)
            .min(self.items.len())
    }

    pub fn has_more(&self) -> bool {
        self.visible_len() < self.items.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> Default for PageWindow<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
