//! Directory view: the state behind one browsing session.
//!
//! A [`DirectoryView`] owns the provider snapshot, the current filter and
//! sort, and a [`PageWindow`] over the matching providers. Anything that
//! changes which providers are listed, or in what order, recomputes the
//! listing and resets the window to its first page.

use docdir_catalog::{Provider, Snapshot};

use crate::listing::{self, Facets, FilterCriteria, SortOrder};
use crate::resolver::{self, Resolution};
use crate::window::{LoadTicket, PageWindow, ScrollMetrics};

/// Filtered, sorted, incrementally revealed view over a provider snapshot.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    snapshot: Snapshot,
    criteria: FilterCriteria,
    order: SortOrder,
    // Positions in `snapshot.providers()`.
    window: PageWindow<usize>,
}

impl DirectoryView {
    /// Create an unfiltered, ascending view showing the first page.
    pub fn new(snapshot: Snapshot, page_size: usize) -> Self {
        Self::with_window(snapshot, PageWindow::new(page_size))
    }

    /// Create a view using a preconfigured (empty) window.
    pub fn with_window(snapshot: Snapshot, window: PageWindow<usize>) -> Self {
        let mut view = Self {
            snapshot,
            criteria: FilterCriteria::default(),
            order: SortOrder::default(),
            window,
        };
        view.refresh();
        view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Apply new filter criteria. Returns whether the listing changed.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> bool {
        if criteria == self.criteria {
            return false;
        }
        self.criteria = criteria;
        self.refresh();
        true
    }

    /// Drop every filter. Returns whether the listing changed.
    pub fn clear_filters(&mut self) -> bool {
        self.set_criteria(FilterCriteria::default())
    }

    /// Change the sort direction. Returns whether the listing changed.
    pub fn set_sort(&mut self, order: SortOrder) -> bool {
        if order == self.order {
            return false;
        }
        self.order = order;
        self.refresh();
        true
    }

    /// Swap in a freshly fetched snapshot. Always resets the window.
    pub fn replace_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.refresh();
    }

    /// Providers currently revealed, in listing order.
    pub fn visible(&self) -> Vec<&Provider> {
        self.to_providers(self.window.visible())
    }

    /// Reveal the next page and return the newly visible providers.
    pub fn advance(&mut self) -> Vec<&Provider> {
        let start = self.window.visible_len();
        self.window.advance();
        self.to_providers(&self.window.visible()[start..])
    }

    /// Scroll-driven load request; see [`PageWindow::request_load`].
    pub fn request_load(&mut self, metrics: &ScrollMetrics) -> Option<LoadTicket> {
        self.window.request_load(metrics)
    }

    /// Complete a scroll-driven load; see [`PageWindow::complete_load`].
    pub fn complete_load(&mut self, ticket: LoadTicket) -> Vec<&Provider> {
        let start = self.window.visible_len();
        self.window.complete_load(ticket);
        self.to_providers(&self.window.visible()[start..])
    }

    /// Number of providers matching the current filter.
    pub fn total(&self) -> usize {
        self.window.len()
    }

    /// True when the current filter matches nothing.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    pub fn has_more(&self) -> bool {
        self.window.has_more()
    }

    pub fn current_page(&self) -> usize {
        self.window.current_page()
    }

    /// Resolve a URL slug against the whole snapshot, ignoring filters.
    pub fn resolve(&self, slug: &str) -> Resolution<'_> {
        resolver::resolve(self.snapshot.providers(), slug)
    }

    /// Filter values available across the whole snapshot.
    pub fn facets(&self) -> Facets {
        listing::facets(self.snapshot.providers())
    }

    fn refresh(&mut self) {
        let indices = listing::list_indices(self.snapshot.providers(), &self.criteria, self.order);
        self.window.reset(indices);
    }

    fn to_providers(&self, indices: &[usize]) -> Vec<&Provider> {
        let providers = self.snapshot.providers();
        indices.iter().map(|&idx| &providers[idx]).collect()
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
