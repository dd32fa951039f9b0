// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! End-to-end scenarios for the derived algorithms.

use std::collections::BTreeMap;
use std::convert::Infallible;

use enumerable::algorithms::first_match;
use enumerable::algorithms::fold;
use enumerable::algorithms::partition;
use enumerable::algorithms::select;
use enumerable::algorithms::take;
use enumerable::algorithms::transform;
use enumerable::algorithms::try_count;
use enumerable::algorithms::try_first_match;
use enumerable::algorithms::try_partition;
use enumerable::algorithms::try_transform;
use enumerable::capability::Numeric;
use enumerable::capability::Registry;
use enumerable::capability::capability;
use enumerable::control::Control;
use enumerable::control::Outcome;
use enumerable::control::Yielder;
use enumerable::enumerable::Enumerable;
use enumerable::enumerable::Shape;
use enumerable::error::CapabilityError;
use enumerable::error::TraversalError;
use enumerable::ordered_map::OrderedMap;

// =============================================================================
// Test producers
// =============================================================================

/// Yields 1, 2, 3 from straight-line code.
struct Things;

impl Enumerable for Things {
    type Item<'a> = i32 where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        yielder.emit(1)?;
        yielder.emit(2)?;
        yielder.emit(3)?;
        return Ok(yielder.finish());
    }
}

/// Yields `0..len`, but loses its storage after `fails_after` elements.
struct Flaky {
    len: u32,
    fails_after: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StorageLost(u32);

impl Enumerable for Flaky {
    type Item<'a> = u32 where Self: 'a;
    type Error = StorageLost;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        for n in 0..self.len {
            if n == self.fails_after {
                return Err(TraversalError::Producer(StorageLost(n)));
            }
            if yielder.emit(n)?.is_stop() {
                break;
            }
        }
        return Ok(yielder.finish());
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn custom_producer_transform() {
    assert_eq!(transform(&Things, |x| x * 2), vec![2, 4, 6]);
}

#[test]
fn ordered_map_transform_yields_pairs_in_insertion_order() {
    let map: OrderedMap<i32, i32> = [(1, 2), (3, 4)].into();
    assert_eq!(transform(&map, |(k, v)| [*k, *v]), vec![[1, 2], [3, 4]]);
    assert_eq!(map.shape(), Shape::Pair);
}

#[test]
fn first_match_on_sequence() {
    assert_eq!(first_match(&vec![1, 2, 3, 4, 5], |x| **x > 2), Some(&3));
}

#[test]
fn partition_by_capability() {
    let numbers = vec![1, 2, 3, 4];
    assert_eq!(partition(&numbers, capability(i32::is_odd)), (vec![&1, &3], vec![&2, &4]));
}

#[test]
fn partition_by_closure() {
    let numbers = vec![1, 2, 3, 4];
    assert_eq!(partition(&numbers, |x| **x <= 2), (vec![&1, &2], vec![&3, &4]));
}

#[test]
fn partition_by_registered_name() {
    let registry: Registry<i32> = Registry::numeric();
    let odd = registry.predicate("odd?").unwrap();
    assert_eq!(partition(&vec![1, 2, 3, 4], odd), (vec![&1, &3], vec![&2, &4]));

    // Owned elements from a range borrow the same way.
    let odd = registry.predicate("odd?").unwrap();
    assert_eq!(partition(&(1..=4), odd), (vec![1, 3], vec![2, 4]));
}

#[test]
fn unknown_capability_is_an_error() {
    let registry: Registry<i32> = Registry::numeric();
    let error = registry.predicate::<&i32>("prime?").err().unwrap();
    assert_eq!(
        error,
        CapabilityError::Undefined {
            name: "prime?".to_string(),
            type_name: "i32",
        }
    );
    assert_eq!(error.to_string(), "undefined capability `prime?` for i32");
}

// =============================================================================
// Pairs
// =============================================================================

#[test]
fn pair_components_are_individually_addressable() {
    let mut stock = OrderedMap::new();
    stock.insert("pears", 0);
    stock.insert("apples", 12);
    stock.insert("plums", 3);

    let in_stock = select(&stock, |(_, count)| **count > 0);
    assert_eq!(in_stock, vec![(&"apples", &12), (&"plums", &3)]);

    let total = fold(&stock, 0, |acc, (_, count)| acc + count);
    assert_eq!(total, 15);

    assert_eq!(first_match(&stock, |(name, _)| name.starts_with("pl")), Some((&"plums", &3)));
}

#[test]
fn btree_map_pairs_follow_key_order() {
    let mut map = BTreeMap::new();
    map.insert("b", 2);
    map.insert("a", 1);
    assert_eq!(transform(&map, |(k, v)| format!("{}={}", k, v)), vec!["a=1", "b=2"]);
}

// =============================================================================
// Early termination
// =============================================================================

#[test]
fn nothing_after_the_deciding_element_is_visited() {
    let mut visited = Vec::new();
    let found = first_match(&(1..1_000_000), |n| {
        visited.push(*n);
        return *n % 7 == 0;
    });
    assert_eq!(found, Some(7));
    assert_eq!(visited, (1..=7).collect::<Vec<_>>());
}

#[test]
fn take_from_a_custom_producer() {
    assert_eq!(take(&Things, 2), vec![1, 2]);
    assert_eq!(take(&Things, 0), Vec::<i32>::new());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn callback_error_surfaces_unchanged() {
    let result = try_transform(&vec!["1", "2", "x", "4"], |s| s.parse::<i32>());
    let error = result.unwrap_err().into_callback().unwrap();
    assert_eq!(error, "x".parse::<i32>().unwrap_err());
}

#[test]
fn producer_error_surfaces_unchanged() {
    let flaky = Flaky { len: 10, fails_after: 4 };
    let result = try_transform(&flaky, |n| Ok::<_, String>(n * 10));
    assert_eq!(result, Err(TraversalError::Producer(StorageLost(4))));
    assert_eq!(try_count(&flaky), Err(TraversalError::Producer(StorageLost(4))));
}

#[test]
fn stopping_early_avoids_producer_error() {
    let flaky = Flaky { len: 10, fails_after: 4 };
    let found = try_first_match(&flaky, |n| Ok::<_, String>(*n == 3));
    assert_eq!(found, Ok(Some(3)));

    let found = try_first_match(&flaky, |n| Ok::<_, String>(*n == 5));
    assert_eq!(found, Err(TraversalError::Producer(StorageLost(4))));
}

#[test]
fn predicate_error_mid_partition_discards_everything() {
    let mut calls = 0;
    let result = try_partition(&[1, 2, 3, 4, 5], |n| {
        calls += 1;
        if **n == 3 {
            return Err("cannot classify 3");
        }
        return Ok(**n % 2 == 0);
    });
    assert_eq!(result, Err(TraversalError::Callback("cannot classify 3")));
    assert_eq!(calls, 3);
}

#[test]
fn callback_error_after_stop_is_impossible() {
    let mut calls = 0;
    let outcome = Things.try_each(|n| -> Result<Control, &'static str> {
        calls += 1;
        if n > 1 {
            return Err("visited past the stop");
        }
        return Ok(Control::Stop);
    });
    assert_eq!(outcome, Ok(Outcome::Stopped));
    assert_eq!(calls, 1);
}
