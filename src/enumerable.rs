// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! The traversal primitive.
//!
//! A producer implements exactly one method, [`Enumerable::try_each`], which
//! pushes every element it owns to a callback in a definite order. Everything
//! in [`crate::algorithms`] is built on that method alone.
//!
//! Implementations are provided for:
//!
//! | Producer | Shape | Item | Order |
//! |----------|-------|------|-------|
//! | `[T]`, `[T; N]`, `Vec<T>`, `VecDeque<T>` | Single | `&T` | index |
//! | `BTreeSet<T>` | Single | `&T` | ascending |
//! | `Range<A>`, `RangeInclusive<A>` | Single | `A` | ascending |
//! | `BTreeMap<K, V>` | Pair | `(&K, &V)` | key |
//! | [`OrderedMap<K, V>`](crate::ordered_map::OrderedMap) | Pair | `(&K, &V)` | insertion |
//!
//! `HashMap` is left out on purpose: it has no order to promise.

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::ops::Range;
use std::ops::RangeInclusive;

use crate::control::Control;
use crate::control::Outcome;
use crate::control::drive;
use crate::error::TraversalError;
use crate::error::settle;

/// What a producer yields on each step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// One value per step.
    Single,
    /// A `(key, value)` tuple per step.
    Pair,
}

impl Shape {
    /// Number of values handed over per step.
    pub fn arity(self) -> usize {
        return match self {
            Shape::Single => 1,
            Shape::Pair => 2,
        };
    }
}

/// A value that can push its elements, in order, to a callback.
///
/// The producer is only borrowed for the duration of a call and is never
/// mutated by it.
///
/// ```
/// use enumerable::control::{Control, Outcome};
/// use enumerable::enumerable::Enumerable;
///
/// let mut seen = Vec::new();
/// let outcome = vec![1, 2, 3].each(|n| {
///     seen.push(*n);
///     return Control::stop_if(*n == 2);
/// });
/// assert_eq!(outcome, Outcome::Stopped);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub trait Enumerable {
    /// The element handed to the callback on each step.
    ///
    /// Borrowed storage yields references tied to the traversal borrow;
    /// generated sequences may yield owned values.
    type Item<'a>
    where
        Self: 'a;

    /// Why the producer itself may fail to yield. `Infallible` for anything
    /// that lives in memory.
    type Error;

    /// Whether `Item` is a single value or a `(key, value)` tuple.
    const SHAPE: Shape = Shape::Single;

    /// Invoke `callback` once per element, in order.
    ///
    /// Returns [`Outcome::Stopped`] as soon as the callback returns
    /// [`Control::Stop`], without invoking it again, and
    /// [`Outcome::Completed`] once every element was handed over. A callback
    /// error or a producer error aborts the traversal and is returned as is.
    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>;

    /// [`Enumerable::try_each`] for producers and callbacks that cannot fail.
    fn each<'a, F>(&'a self, mut callback: F) -> Outcome
    where
        Self: Enumerable<Error = Infallible>,
        F: FnMut(Self::Item<'a>) -> Control,
    {
        return settle(self.try_each(|item| Ok(callback(item))));
    }

    fn shape(&self) -> Shape {
        return Self::SHAPE;
    }
}

impl<T> Enumerable for [T] {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

impl<T, const N: usize> Enumerable for [T; N] {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

impl<T> Enumerable for Vec<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

impl<T> Enumerable for VecDeque<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

impl<T> Enumerable for BTreeSet<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

impl<K, V> Enumerable for BTreeMap<K, V> {
    type Item<'a> = (&'a K, &'a V) where Self: 'a;
    type Error = Infallible;

    const SHAPE: Shape = Shape::Pair;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.iter(), callback);
    }
}

// Ranges are walked on a clone, so the producer itself stays untouched.

impl<A> Enumerable for Range<A>
where
    A: Clone,
    Range<A>: Iterator<Item = A>,
{
    type Item<'a> = A where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.clone(), callback);
    }
}

impl<A> Enumerable for RangeInclusive<A>
where
    A: Clone,
    RangeInclusive<A>: Iterator<Item = A>,
{
    type Item<'a> = A where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        return drive(self.clone(), callback);
    }
}
