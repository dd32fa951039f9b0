// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Hand-written producers for the `enumerable` traversal protocol.
//!
//! Each type here owns its elements in a different way and implements only
//! `Enumerable::try_each`. Every derived algorithm then works on it for free,
//! which is what the conformance suite in `tests/` checks.
//!
//! | Producer | Storage | Shape | Notes |
//! |----------|---------|-------|-------|
//! | `Things` | none | Single | yields `1, 2, 3` from straight-line code |
//! | `Countdown` | a counter | Single | generated values, no storage |
//! | `Chain` | singly linked list | Single | pointer chasing |
//! | `SearchTree` | binary search tree | Single | in-order walk on an explicit stack |
//! | `Paged` | pages that may be unreadable | Single | fallible producer |
//! | `Tally` | counted words | Pair | first-seen order |
//!
//! # Example
//!
//! ```
//! use enumerable::algorithms::{partition, transform};
//! use specimens::tree::SearchTree;
//!
//! let tree: SearchTree<i32> = [4, 2, 3, 1].into_iter().collect();
//! assert_eq!(transform(&tree, |n| n * 10), vec![10, 20, 30, 40]);
//! assert_eq!(partition(&tree, |n| **n <= 2), (vec![&1, &2], vec![&3, &4]));
//! ```

pub mod chain;
pub mod paged;
pub mod tally;
pub mod things;
pub mod tree;
