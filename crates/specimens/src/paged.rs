// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A producer whose storage can fail.
//!
//! Values live in pages, and any page may turn out to be unreadable. Hitting
//! one aborts the traversal with a [`PageFault`], which callers receive as
//! `TraversalError::Producer`. A traversal that stops before reaching the bad
//! page never notices it.

use enumerable::control::Control;
use enumerable::control::Outcome;
use enumerable::control::Yielder;
use enumerable::enumerable::Enumerable;
use enumerable::error::TraversalError;
use thiserror::Error;

/// One page of storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Readable(Vec<i64>),
    Unreadable { reason: String },
}

/// A page could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("page {page} is unreadable: {reason}")]
pub struct PageFault {
    pub page: usize,
    pub reason: String,
}

/// Values spread across pages, yielded page by page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paged {
    pages: Vec<Page>,
}

impl Paged {
    pub fn new() -> Paged {
        return Paged { pages: Vec::new() };
    }

    /// Split `values` into readable pages of at most `page_size` values.
    pub fn from_values(values: &[i64], page_size: usize) -> Paged {
        let page_size = page_size.max(1);
        let pages = values
            .chunks(page_size)
            .map(|chunk| Page::Readable(chunk.to_vec()))
            .collect();
        return Paged { pages };
    }

    pub fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Append a page that fails when read.
    pub fn push_unreadable(&mut self, reason: &str) {
        self.pages.push(Page::Unreadable {
            reason: reason.to_string(),
        });
    }

    pub fn page_count(&self) -> usize {
        return self.pages.len();
    }
}

impl Enumerable for Paged {
    type Item<'a> = i64 where Self: 'a;
    type Error = PageFault;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        for (index, page) in self.pages.iter().enumerate() {
            let values = match page {
                Page::Readable(values) => values,
                Page::Unreadable { reason } => {
                    log::debug!("page {} unreadable after {} values: {}", index, yielder.yielded(), reason);
                    return Err(TraversalError::Producer(PageFault {
                        page: index,
                        reason: reason.clone(),
                    }));
                }
            };
            for value in values {
                if yielder.emit(*value)?.is_stop() {
                    return Ok(yielder.finish());
                }
            }
        }
        return Ok(yielder.finish());
    }
}
