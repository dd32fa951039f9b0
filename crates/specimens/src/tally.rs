// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Word counts, yielded as `(word, count)` pairs in first-seen order.

use std::convert::Infallible;

use enumerable::control::Control;
use enumerable::control::Outcome;
use enumerable::control::Yielder;
use enumerable::enumerable::Enumerable;
use enumerable::enumerable::Shape;
use enumerable::error::TraversalError;
use rustc_hash::FxHashMap;

/// Counts how often each word was recorded.
#[derive(Clone, Debug, Default)]
pub struct Tally {
    /// Map from word to its slot in `counts`.
    slots: FxHashMap<String, usize>,
    /// Words and counts in first-seen order.
    counts: Vec<(String, usize)>,
}

impl Tally {
    pub fn new() -> Tally {
        return Tally::default();
    }

    /// Count every whitespace-separated word of `text`.
    pub fn from_text(text: &str) -> Tally {
        let mut tally = Tally::new();
        for word in text.split_whitespace() {
            tally.record(word);
        }
        return tally;
    }

    /// Count one more occurrence of `word`, returning its new count.
    pub fn record(&mut self, word: &str) -> usize {
        if let Some(&slot) = self.slots.get(word) {
            self.counts[slot].1 += 1;
            return self.counts[slot].1;
        }

        self.slots.insert(word.to_string(), self.counts.len());
        self.counts.push((word.to_string(), 1));
        return 1;
    }

    pub fn get(&self, word: &str) -> usize {
        return match self.slots.get(word) {
            Some(&slot) => self.counts[slot].1,
            None => 0,
        };
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        return self.counts.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.counts.is_empty();
    }
}

impl Enumerable for Tally {
    type Item<'a> = (&'a str, usize) where Self: 'a;
    type Error = Infallible;

    const SHAPE: Shape = Shape::Pair;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        for (word, count) in &self.counts {
            if yielder.emit((word.as_str(), *count))?.is_stop() {
                break;
            }
        }
        return Ok(yielder.finish());
    }
}
