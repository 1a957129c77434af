//! Accumulating a full snapshot from paged fetches.
//!
//! Storage hands out rows a page at a time. Instead of growing a shared
//! list, the caller owns a [`PageAccumulator`], appends each fetched page,
//! and stops once a short page signals the end.

/// Caller-owned accumulator for paged fetches.
#[derive(Debug, Clone)]
pub struct PageAccumulator<T> {
    items: Vec<T>,
    page_size: usize,
    has_more: bool,
    pages: usize,
}

impl<T> PageAccumulator<T> {
    /// Create an accumulator expecting pages of `page_size` items.
    /// A `page_size` of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            has_more: true,
            pages: 0,
        }
    }

    /// Append one fetched page. Returns whether more pages should be fetched.
    ///
    /// A page shorter than `page_size` (including an empty page) is the last
    /// one. Pages appended after that are ignored.
    pub fn append(&mut self, page: Vec<T>) -> bool {
        if !self.has_more {
            log::warn!("Ignoring page of {} items appended after the last page", page.len());
            return false;
        }
        self.has_more = page.len() >= self.page_size;
        self.pages += 1;
        self.items.extend(page);
        self.has_more
    }

    /// Fold a sequence of pages, stopping at the first short page.
    pub fn collect<I>(pages: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = Vec<T>>,
    {
        let mut acc = Self::new(page_size);
        for page in pages {
            if !acc.append(page) {
                break;
            }
        }
        acc
    }

    /// Offset of the next page to fetch.
    pub fn next_offset(&self) -> usize {
        self.items.len()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
#[path = "tests/accumulator_tests.rs"]
mod tests;
