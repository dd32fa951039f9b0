// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! A singly linked list.

use std::convert::Infallible;

use enumerable::control::Control;
use enumerable::control::Outcome;
use enumerable::control::Yielder;
use enumerable::enumerable::Enumerable;
use enumerable::error::TraversalError;

struct Link<T> {
    value: T,
    next: Option<Box<Link<T>>>,
}

/// A singly linked list, traversed head to tail.
pub struct Chain<T> {
    head: Option<Box<Link<T>>>,
    len: usize,
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> Chain<T> {
    pub fn new() -> Chain<T> {
        return Chain { head: None, len: 0 };
    }

    pub fn len(&self) -> usize {
        return self.len;
    }

    pub fn is_empty(&self) -> bool {
        return self.head.is_none();
    }

    /// Prepend a value; it becomes the first element yielded.
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Link { value, next }));
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        let link = self.head.take()?;
        self.head = link.next;
        self.len -= 1;
        return Some(link.value);
    }

    pub fn front(&self) -> Option<&T> {
        return self.head.as_ref().map(|link| &link.value);
    }
}

impl<T> Drop for Chain<T> {
    // Unlink iteratively so long chains cannot overflow the stack.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut link) = cursor {
            cursor = link.next.take();
        }
    }
}

impl<T> FromIterator<T> for Chain<T> {
    /// Builds a chain that yields the items in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut chain = Chain::new();
        for item in items.into_iter().rev() {
            chain.push_front(item);
        }
        return chain;
    }
}

impl<T> Enumerable for Chain<T> {
    type Item<'a> = &'a T where Self: 'a;
    type Error = Infallible;

    fn try_each<'a, E, F>(&'a self, callback: F) -> Result<Outcome, TraversalError<Self::Error, E>>
    where
        F: FnMut(Self::Item<'a>) -> Result<Control, E>,
    {
        let mut yielder = Yielder::new(callback);
        let mut cursor = self.head.as_deref();
        while let Some(link) = cursor {
            if yielder.emit(&link.value)?.is_stop() {
                break;
            }
            cursor = link.next.as_deref();
        }
        return Ok(yielder.finish());
    }
}
