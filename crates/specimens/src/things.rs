// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Producers that generate their elements instead of storing them.

use std::convert::Infallible;

use enumerable::control::Control;
use enumerable::control::Outcome;
use enumerable::control::Yielder;
use enumerable::enumerable::Enumerable;
use enumerable::error::TraversalError;

/// Yields `1`, `2`, `3`, one statement at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Things;

impl Enumerable for Things {
    type Item<'a> = i64 where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        // Deliberately ignores stop signals: the yielder swallows anything
        // emitted after a stop.
        let mut yielder = Yielder::new(callback);
        yielder.emit(1)?;
        yielder.emit(2)?;
        yielder.emit(3)?;
        return Ok(yielder.finish());
    }
}

/// Yields `from, from - 1, ..., 1`.
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    pub from: u32,
}

impl Countdown {
    pub fn new(from: u32) -> Countdown {
        return Countdown { from };
    }
}

impl Enumerable for Countdown {
    type Item<'a> = u32 where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        let mut current = self.from;
        while current > 0 {
            if yielder.emit(current)?.is_stop() {
                break;
            }
            current -= 1;
        }
        return Ok(yielder.finish());
    }
}
