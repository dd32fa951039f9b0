// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Errors surfaced by traversals and capability lookups.
//!
//! A traversal can fail for exactly two reasons: the producer could not reach
//! its own storage, or the callback handed to it failed. Both abort the loop
//! immediately and travel to the caller unchanged.

use std::convert::Infallible;

use thiserror::Error;

/// Why a traversal was aborted.
///
/// `P` is the producer's own error type (`Infallible` for in-memory
/// storage), `E` is whatever the caller's callback returns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraversalError<P, E> {
    /// The producer could not yield its next element.
    #[error("producer failed: {0}")]
    Producer(P),
    /// The caller-supplied callback failed.
    #[error("callback failed: {0}")]
    Callback(E),
}

impl<P, E> TraversalError<P, E> {
    pub fn is_producer(&self) -> bool {
        return matches!(self, TraversalError::Producer(_));
    }

    pub fn is_callback(&self) -> bool {
        return matches!(self, TraversalError::Callback(_));
    }

    /// The callback's error, if that is what aborted the traversal.
    pub fn into_callback(self) -> Option<E> {
        return match self {
            TraversalError::Callback(error) => Some(error),
            TraversalError::Producer(_) => None,
        };
    }

    /// The producer's error, if that is what aborted the traversal.
    pub fn into_producer(self) -> Option<P> {
        return match self {
            TraversalError::Producer(error) => Some(error),
            TraversalError::Callback(_) => None,
        };
    }

    pub fn map_callback<F, G>(self, f: G) -> TraversalError<P, F>
    where
        G: FnOnce(E) -> F,
    {
        return match self {
            TraversalError::Producer(error) => TraversalError::Producer(error),
            TraversalError::Callback(error) => TraversalError::Callback(f(error)),
        };
    }
}

/// A callback error on its way out of [`crate::control::Yielder::emit`].
///
/// Hand-written traversals propagate it with `?`, which turns it into
/// [`TraversalError::Callback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raised<E>(pub E);

impl<P, E> From<Raised<E>> for TraversalError<P, E> {
    fn from(raised: Raised<E>) -> TraversalError<P, E> {
        return TraversalError::Callback(raised.0);
    }
}

/// A capability name that is not registered for the element type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("undefined capability `{name}` for {type_name}")]
    Undefined {
        name: String,
        type_name: &'static str,
    },
}

/// Unwrap the result of a traversal that cannot fail.
pub(crate) fn settle<T>(result: Result<T, TraversalError<Infallible, Infallible>>) -> T {
    return match result {
        Ok(value) => value,
        Err(TraversalError::Producer(never)) => match never {},
        Err(TraversalError::Callback(never)) => match never {},
    };
}
