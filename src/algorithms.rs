// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Algorithms derived from the traversal primitive.
//!
//! Every function here is written once, against [`Enumerable::try_each`],
//! and knows nothing about how a producer stores its elements. Each comes in
//! two forms:
//!
//! - `name`: for producers that cannot fail (`Error = Infallible`) and plain
//!   closures. The result needs no unwrapping.
//! - `try_name`: for any producer, with a callback returning `Result`. The
//!   first error from either side aborts the traversal, anything accumulated
//!   so far is dropped, and the error is returned unchanged.
//!
//! Predicates borrow the element (`&Item`) so the element itself can still be
//! kept. Searches stop the traversal on the deciding element; nothing after
//! it is visited.
//!
//! ```
//! use enumerable::algorithms::{first_match, partition, transform};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(transform(&numbers, |n| n * 2), vec![2, 4, 6, 8, 10]);
//! assert_eq!(first_match(&numbers, |n| **n > 2), Some(&3));
//! assert_eq!(partition(&numbers, |n| **n <= 2), (vec![&1, &2], vec![&3, &4, &5]));
//! ```

use std::convert::Infallible;

use crate::control::Control;
use crate::enumerable::Enumerable;
use crate::error::TraversalError;
use crate::error::settle;

type Fallible<T, P, E> = Result<T, TraversalError<<P as Enumerable>::Error, E>>;

// =============================================================================
// Collecting
// =============================================================================

/// Every element, in order.
pub fn to_vec<'a, P>(producer: &'a P) -> Vec<P::Item<'a>>
where
    P: Enumerable<Error = Infallible> + ?Sized,
{
    return transform(producer, |item| item);
}

pub fn try_to_vec<'a, P>(producer: &'a P) -> Fallible<Vec<P::Item<'a>>, P, Infallible>
where
    P: Enumerable + ?Sized,
{
    return try_transform(producer, Ok);
}

/// Apply `f` to every element, collecting the results in yield order.
///
/// For pair producers `f` receives the `(key, value)` tuple and may return
/// anything, including another pair.
pub fn transform<'a, P, R, F>(producer: &'a P, mut f: F) -> Vec<R>
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(P::Item<'a>) -> R,
{
    return settle(try_transform(producer, |item| Ok(f(item))));
}

pub fn try_transform<'a, P, R, E, F>(producer: &'a P, mut f: F) -> Fallible<Vec<R>, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(P::Item<'a>) -> Result<R, E>,
{
    let mut results = Vec::new();
    producer.try_each(|item| -> Result<Control, E> {
        results.push(f(item)?);
        return Ok(Control::Continue);
    })?;
    return Ok(results);
}

/// Elements for which the predicate holds, in order.
pub fn select<'a, P, F>(producer: &'a P, mut predicate: F) -> Vec<P::Item<'a>>
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_select(producer, |item| Ok(predicate(item))));
}

pub fn try_select<'a, P, E, F>(producer: &'a P, predicate: F) -> Fallible<Vec<P::Item<'a>>, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let (matched, _) = try_partition(producer, predicate)?;
    return Ok(matched);
}

/// Elements for which the predicate fails, in order.
pub fn reject<'a, P, F>(producer: &'a P, mut predicate: F) -> Vec<P::Item<'a>>
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_reject(producer, |item| Ok(predicate(item))));
}

pub fn try_reject<'a, P, E, F>(producer: &'a P, predicate: F) -> Fallible<Vec<P::Item<'a>>, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let (_, unmatched) = try_partition(producer, predicate)?;
    return Ok(unmatched);
}

/// Split the elements into `(matched, unmatched)`, preserving order in both.
///
/// The predicate can be a closure or a named capability:
///
/// ```
/// use enumerable::algorithms::partition;
/// use enumerable::capability::{Numeric, capability};
///
/// let numbers = [1, 2, 3, 4];
/// assert_eq!(partition(&numbers, capability(i32::is_odd)), (vec![&1, &3], vec![&2, &4]));
/// ```
pub fn partition<'a, P, F>(producer: &'a P, mut predicate: F) -> (Vec<P::Item<'a>>, Vec<P::Item<'a>>)
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_partition(producer, |item| Ok(predicate(item))));
}

pub fn try_partition<'a, P, E, F>(
    producer: &'a P,
    mut predicate: F,
) -> Fallible<(Vec<P::Item<'a>>, Vec<P::Item<'a>>), P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    producer.try_each(|item| -> Result<Control, E> {
        if predicate(&item)? {
            matched.push(item);
        } else {
            unmatched.push(item);
        }
        return Ok(Control::Continue);
    })?;
    return Ok((matched, unmatched));
}

/// The first `n` elements. Stops right after the `n`th; `n == 0` never
/// starts a traversal at all.
pub fn take<'a, P>(producer: &'a P, n: usize) -> Vec<P::Item<'a>>
where
    P: Enumerable<Error = Infallible> + ?Sized,
{
    return settle(try_take(producer, n));
}

pub fn try_take<'a, P>(producer: &'a P, n: usize) -> Fallible<Vec<P::Item<'a>>, P, Infallible>
where
    P: Enumerable + ?Sized,
{
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut taken = Vec::with_capacity(n);
    producer.try_each(|item| -> Result<Control, Infallible> {
        taken.push(item);
        return Ok(Control::stop_if(taken.len() >= n));
    })?;
    return Ok(taken);
}

// =============================================================================
// Searching
// =============================================================================

/// The first element satisfying the predicate.
///
/// The predicate runs once per element up to and including the match; the
/// traversal stops there.
pub fn first_match<'a, P, F>(producer: &'a P, mut predicate: F) -> Option<P::Item<'a>>
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_first_match(producer, |item| Ok(predicate(item))));
}

pub fn try_first_match<'a, P, E, F>(producer: &'a P, mut predicate: F) -> Fallible<Option<P::Item<'a>>, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let mut found = None;
    producer.try_each(|item| -> Result<Control, E> {
        if predicate(&item)? {
            found = Some(item);
            return Ok(Control::Stop);
        }
        return Ok(Control::Continue);
    })?;
    return Ok(found);
}

/// Yield position of the first element satisfying the predicate.
pub fn find_index<'a, P, F>(producer: &'a P, mut predicate: F) -> Option<usize>
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_find_index(producer, |item| Ok(predicate(item))));
}

pub fn try_find_index<'a, P, E, F>(producer: &'a P, mut predicate: F) -> Fallible<Option<usize>, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let mut index = 0;
    let mut found = None;
    producer.try_each(|item| -> Result<Control, E> {
        if predicate(&item)? {
            found = Some(index);
            return Ok(Control::Stop);
        }
        index += 1;
        return Ok(Control::Continue);
    })?;
    return Ok(found);
}

/// Whether any element equals `needle`. Stops at the first hit.
pub fn contains<'a, P, Q>(producer: &'a P, needle: &Q) -> bool
where
    P: Enumerable<Error = Infallible> + ?Sized,
    P::Item<'a>: PartialEq<Q>,
    Q: ?Sized,
{
    return any(producer, |item| <P::Item<'a> as PartialEq<Q>>::eq(item, needle));
}

/// Whether the predicate holds for at least one element. `false` when empty.
pub fn any<'a, P, F>(producer: &'a P, mut predicate: F) -> bool
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_any(producer, |item| Ok(predicate(item))));
}

pub fn try_any<'a, P, E, F>(producer: &'a P, predicate: F) -> Fallible<bool, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    return try_find_index(producer, predicate).map(|found| found.is_some());
}

/// Whether the predicate holds for every element. `true` when empty.
pub fn all<'a, P, F>(producer: &'a P, mut predicate: F) -> bool
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_all(producer, |item| Ok(predicate(item))));
}

pub fn try_all<'a, P, E, F>(producer: &'a P, mut predicate: F) -> Fallible<bool, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let counterexample = try_find_index(producer, |item| -> Result<bool, E> {
        return Ok(!predicate(item)?);
    })?;
    return Ok(counterexample.is_none());
}

// =============================================================================
// Reducing
// =============================================================================

/// Number of elements.
pub fn count<P>(producer: &P) -> usize
where
    P: Enumerable<Error = Infallible> + ?Sized,
{
    return count_matching(producer, |_| true);
}

pub fn try_count<P>(producer: &P) -> Fallible<usize, P, Infallible>
where
    P: Enumerable + ?Sized,
{
    return try_count_matching(producer, |_| Ok(true));
}

/// Number of elements satisfying the predicate.
pub fn count_matching<'a, P, F>(producer: &'a P, mut predicate: F) -> usize
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(&P::Item<'a>) -> bool,
{
    return settle(try_count_matching(producer, |item| Ok(predicate(item))));
}

pub fn try_count_matching<'a, P, E, F>(producer: &'a P, mut predicate: F) -> Fallible<usize, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(&P::Item<'a>) -> Result<bool, E>,
{
    let mut matches = 0;
    producer.try_each(|item| -> Result<Control, E> {
        if predicate(&item)? {
            matches += 1;
        }
        return Ok(Control::Continue);
    })?;
    return Ok(matches);
}

/// Combine every element into an accumulator, starting from `init`.
pub fn fold<'a, P, A, F>(producer: &'a P, init: A, mut f: F) -> A
where
    P: Enumerable<Error = Infallible> + ?Sized,
    F: FnMut(A, P::Item<'a>) -> A,
{
    return settle(try_fold(producer, init, |acc, item| Ok(f(acc, item))));
}

pub fn try_fold<'a, P, A, E, F>(producer: &'a P, init: A, mut f: F) -> Fallible<A, P, E>
where
    P: Enumerable + ?Sized,
    F: FnMut(A, P::Item<'a>) -> Result<A, E>,
{
    // The callback error stays here, next to the accumulator, so a producer
    // that carries on after an `Err` can neither lose it nor see `f` again.
    let mut state: Option<Result<A, E>> = Some(Ok(init));
    let traversal = producer.try_each(|item| -> Result<Control, ()> {
        let current = match state.take() {
            Some(Ok(current)) => current,
            settled => {
                state = settled;
                return Err(());
            }
        };
        let next = f(current, item);
        let failed = next.is_err();
        state = Some(next);
        if failed {
            return Err(());
        }
        return Ok(Control::Continue);
    });
    if let Err(TraversalError::Producer(error)) = traversal {
        return Err(TraversalError::Producer(error));
    }

    return match state {
        Some(Ok(acc)) => Ok(acc),
        Some(Err(error)) => Err(TraversalError::Callback(error)),
        None => unreachable!("fold state is put back unless `f` panicked"),
    };
}
