// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Named capabilities as predicates.
//!
//! Callers often want to say "partition by oddness" rather than spell out a
//! closure. Two adapters turn such a reference into an ordinary predicate, so
//! the algorithms never know the difference:
//!
//! - [`capability`] wraps a method reference like `i64::is_odd`.
//! - [`Registry`] looks a method up by name (`"odd?"`) at run time and fails
//!   with [`CapabilityError::Undefined`] when nothing is registered under it.
//!
//! Both accept any element that [`Borrow`]s the method's receiver type, so one
//! predicate serves `&i64` elements from a `Vec<i64>` and owned `i64` elements
//! from a range alike.

use std::any::type_name;
use std::borrow::Borrow;

use rustc_hash::FxHashMap;

use crate::error::CapabilityError;

/// Predicates every primitive integer answers.
pub trait Numeric {
    fn is_odd(&self) -> bool;
    fn is_even(&self) -> bool;
    fn is_zero(&self) -> bool;
    fn is_positive(&self) -> bool;
    fn is_negative(&self) -> bool;
}

macro_rules! impl_numeric_signed {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_odd(&self) -> bool {
                    return *self % 2 != 0;
                }

                #[inline]
                fn is_even(&self) -> bool {
                    return *self % 2 == 0;
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    return *self == 0;
                }

                #[inline]
                fn is_positive(&self) -> bool {
                    return *self > 0;
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    return *self < 0;
                }
            }
        )*
    };
}

macro_rules! impl_numeric_unsigned {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn is_odd(&self) -> bool {
                    return *self % 2 != 0;
                }

                #[inline]
                fn is_even(&self) -> bool {
                    return *self % 2 == 0;
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    return *self == 0;
                }

                #[inline]
                fn is_positive(&self) -> bool {
                    return *self != 0;
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    return false;
                }
            }
        )*
    };
}

impl_numeric_signed!(i8, i16, i32, i64, i128, isize);
impl_numeric_unsigned!(u8, u16, u32, u64, u128, usize);

/// Adapt a method reference into a predicate over any element borrowing `T`.
///
/// ```
/// use enumerable::algorithms::select;
/// use enumerable::capability::{Numeric, capability};
///
/// assert_eq!(select(&vec![1, 2, 3, 4], capability(i32::is_even)), vec![&2, &4]);
/// assert_eq!(select(&(1..=4), capability(i32::is_even)), vec![2, 4]);
/// ```
pub fn capability<T, I, M>(method: M) -> impl Fn(&I) -> bool
where
    T: ?Sized,
    I: Borrow<T>,
    M: Fn(&T) -> bool,
{
    return move |item: &I| method(<I as Borrow<T>>::borrow(item));
}

/// A table of named predicates for element type `T`.
#[derive(Clone)]
pub struct Registry<T: ?Sized> {
    methods: FxHashMap<&'static str, fn(&T) -> bool>,
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: ?Sized> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Registry<T> {
        return Registry {
            methods: FxHashMap::default(),
        };
    }

    /// Register a method under `name`, replacing any earlier definition.
    pub fn define(&mut self, name: &'static str, method: fn(&T) -> bool) -> &mut Registry<T> {
        self.methods.insert(name, method);
        return self;
    }

    pub fn is_defined(&self, name: &str) -> bool {
        return self.methods.contains_key(name);
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.methods.keys().copied().collect();
        names.sort_unstable();
        return names;
    }

    /// The raw method registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<fn(&T) -> bool, CapabilityError> {
        if let Some(method) = self.methods.get(name) {
            return Ok(*method);
        }

        log::debug!("no capability `{}` registered for {}", name, type_name::<T>());
        return Err(CapabilityError::Undefined {
            name: name.to_string(),
            type_name: type_name::<T>(),
        });
    }

    /// The method registered under `name`, adapted into a predicate.
    pub fn predicate<I>(&self, name: &str) -> Result<impl Fn(&I) -> bool + use<T, I>, CapabilityError>
    where
        I: Borrow<T>,
    {
        let method = self.lookup(name)?;
        return Ok(capability(method));
    }
}

impl<T: Numeric> Registry<T> {
    /// A registry with every [`Numeric`] predicate under its conventional name.
    pub fn numeric() -> Registry<T> {
        let mut registry = Registry::new();
        registry
            .define("odd?", T::is_odd)
            .define("even?", T::is_even)
            .define("zero?", T::is_zero)
            .define("positive?", T::is_positive)
            .define("negative?", T::is_negative);
        return registry;
    }
}
