// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Enumerable - one traversal primitive, a whole family of algorithms.
//!
//! A producer implements [`Enumerable::try_each`](enumerable::Enumerable::try_each):
//! push every element, in order, to a callback, and stop as soon as the
//! callback says so. Transform, search, partition and the rest are written
//! once in [`algorithms`] against that single method.
//!
//! # Quick Start
//!
//! ```
//! use enumerable::algorithms::{first_match, partition, transform};
//! use enumerable::capability::{Numeric, capability};
//! use enumerable::control::{Control, Outcome, Yielder};
//! use enumerable::enumerable::Enumerable;
//! use enumerable::error::TraversalError;
//! use enumerable::ordered_map::OrderedMap;
//! use std::convert::Infallible;
//!
//! // A producer with its own traversal logic.
//! struct Things;
//!
//! impl Enumerable for Things {
//!     type Item<'a> = i32 where Self: 'a;
//!     type Error = Infallible;
//!
//!     fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
//!     where
//!         F: FnMut(Self::Item<'a>) -> Result<Control, E>,
//!     {
//!         let mut yielder = Yielder::new(callback);
//!         yielder.emit(1)?;
//!         yielder.emit(2)?;
//!         yielder.emit(3)?;
//!         return Ok(yielder.finish());
//!     }
//! }
//!
//! assert_eq!(transform(&Things, |n| n * 2), vec![2, 4, 6]);
//!
//! // Pairs from a map, in insertion order.
//! let map: OrderedMap<i32, i32> = [(1, 2), (3, 4)].into();
//! assert_eq!(transform(&map, |(k, v)| [*k, *v]), vec![[1, 2], [3, 4]]);
//!
//! // Searching and splitting plain vectors.
//! assert_eq!(first_match(&vec![1, 2, 3, 4, 5], |n| **n > 2), Some(&3));
//! assert_eq!(partition(&[1, 2, 3, 4], capability(i32::is_odd)), (vec![&1, &3], vec![&2, &4]));
//! ```

pub mod algorithms;
pub mod capability;
pub mod control;
pub mod enumerable;
pub mod error;
pub mod ordered_map;

// Re-exports for convenience
pub use control::Control;
pub use control::Outcome;
pub use enumerable::Enumerable;
pub use enumerable::Shape;
pub use error::TraversalError;
pub use ordered_map::OrderedMap;
