// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! An unbalanced binary search tree, traversed in order.
//!
//! Sorted input degenerates the tree into a list as deep as it is long, so
//! the walk and the drop both keep their own stack instead of recursing.

use std::cmp::Ordering;
use std::convert::Infallible;

use enumerable::control::Control;
use enumerable::control::Outcome;
use enumerable::control::Yielder;
use enumerable::enumerable::Enumerable;
use enumerable::error::TraversalError;

struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// A set of ordered values, yielded in ascending order.
pub struct SearchTree<T: Ord> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Ord> Default for SearchTree<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Ord> SearchTree<T> {
    pub fn new() -> SearchTree<T> {
        return SearchTree { root: None, len: 0 };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Insert a value. Returns false if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Node {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
        return true;
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            cursor = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        return false;
    }
}

impl<T: Ord> Drop for SearchTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: Ord> Enumerable for SearchTree<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        // Ancestors whose value and right subtree are still due.
        let mut pending: Vec<&'a Node<T>> = Vec::new();
        let mut cursor = self.root.as_deref();
        loop {
            while let Some(node) = cursor {
                pending.push(node);
                cursor = node.left.as_deref();
            }
            let Some(node) = pending.pop() else {
                break;
            };
            if yielder.emit(&node.value)?.is_stop() {
                break;
            }
            cursor = node.right.as_deref();
        }
        return Ok(yielder.finish());
    }
}

impl<T: Ord> FromIterator<T> for SearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = SearchTree::new();
        for value in iter {
            tree.insert(value);
        }
        return tree;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use enumerable::algorithms::count;
    use enumerable::algorithms::first_match;
    use enumerable::algorithms::to_vec;
    use proptest::prelude::*;

    #[test]
    fn yields_ascending() {
        let tree: SearchTree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
        assert_eq!(to_vec(&tree), vec![&1, &3, &4, &5, &7, &8, &9]);
        assert_eq!(tree.len(), 7);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut tree = SearchTree::new();
        assert!(tree.insert(2));
        assert!(!tree.insert(2));
        assert_eq!(tree.len(), 1);
        assert!(tree.contains(&2));
        assert!(!tree.contains(&3));
    }

    #[test]
    fn stop_deep_in_the_left_spine_visits_nothing_else() {
        let tree: SearchTree<i32> = [50, 25, 75, 10, 30, 60, 90].into_iter().collect();
        let mut seen = Vec::new();
        let found = first_match(&tree, |n| {
            seen.push(**n);
            return **n >= 25;
        });
        assert_eq!(found, Some(&25));
        assert_eq!(seen, vec![10, 25]);
    }

    #[test]
    fn sorted_input_does_not_exhaust_the_stack() {
        let tree: SearchTree<u32> = (0..25_000).collect();
        assert_eq!(count(&tree), 25_000);
        assert_eq!(first_match(&tree, |n| **n == 24_999), Some(&24_999));
        drop(tree);

        let tree: SearchTree<u32> = (0..25_000).rev().collect();
        assert_eq!(to_vec(&tree).first(), Some(&&0));
    }

    #[test]
    fn empty_tree() {
        let tree: SearchTree<i32> = SearchTree::new();
        assert!(tree.is_empty());
        assert!(to_vec(&tree).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        /// In-order traversal is the sorted, deduplicated input.
        #[test]
        fn traversal_is_sorted_and_unique(values in prop::collection::vec(-500i32..500, 0..200)) {
            let tree: SearchTree<i32> = values.iter().copied().collect();
            let mut expected = values.clone();
            expected.sort_unstable();
            expected.dedup();

            let seen: Vec<i32> = to_vec(&tree).into_iter().copied().collect();
            prop_assert_eq!(seen, expected);
        }
    }
}
