// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Control signals and the per-call traversal loop.
//!
//! Every traversal is a tiny state machine:
//!
//! ```text
//! Running --Stop signal--> Stopped
//! Running --exhausted----> Completed
//! ```
//!
//! Both end states are terminal. A callback error also halts the loop; the
//! error itself is what the caller sees, so it needs no state of its own.
//!
//! [`Yielder`] owns that state machine for producers that write their own
//! traversal logic, and [`drive`] runs it over anything iterable.

use crate::error::Raised;
use crate::error::TraversalError;

/// Returned by a callback to steer the traversal loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Control {
    /// Hand over the next element.
    Continue,
    /// Halt now. The callback will not be invoked again for this traversal.
    Stop,
}

impl Control {
    /// `Stop` when the condition holds, `Continue` otherwise.
    #[inline]
    pub fn stop_if(condition: bool) -> Control {
        if condition {
            return Control::Stop;
        }
        return Control::Continue;
    }

    #[inline]
    pub fn is_stop(self) -> bool {
        return self == Control::Stop;
    }

    #[inline]
    pub fn is_continue(self) -> bool {
        return self == Control::Continue;
    }
}

/// How a traversal call ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Every element was handed to the callback.
    Completed,
    /// The callback asked to stop before the producer ran dry.
    Stopped,
}

impl Outcome {
    #[inline]
    pub fn is_completed(self) -> bool {
        return self == Outcome::Completed;
    }

    #[inline]
    pub fn is_stopped(self) -> bool {
        return self == Outcome::Stopped;
    }
}

/// State of a single traversal call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    Running,
    Stopped,
    Completed,
}

impl State {
    pub fn is_terminal(self) -> bool {
        return self != State::Running;
    }

    /// The outcome a terminal state reports, `None` while still running.
    pub fn outcome(self) -> Option<Outcome> {
        return match self {
            State::Running => None,
            State::Stopped => Some(Outcome::Stopped),
            State::Completed => Some(Outcome::Completed),
        };
    }
}

/// Hands elements to a callback and tracks the loop state.
///
/// Producers with hand-written traversal logic wrap their callback in a
/// `Yielder` and call [`Yielder::emit`] once per element:
///
/// ```
/// use enumerable::control::{Control, Outcome, Yielder};
///
/// let mut seen = Vec::new();
/// let mut yielder = Yielder::new(|n: u32| -> Result<Control, ()> {
///     seen.push(n);
///     return Ok(Control::stop_if(n == 2));
/// });
///
/// for n in 1..=5 {
///     if yielder.emit(n).unwrap().is_stop() {
///         break;
///     }
/// }
/// assert_eq!(yielder.finish(), Outcome::Stopped);
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub struct Yielder<F> {
    callback: F,
    state: State,
    yielded: usize,
}

impl<F> Yielder<F> {
    pub fn new(callback: F) -> Yielder<F> {
        return Yielder {
            callback,
            state: State::Running,
            yielded: 0,
        };
    }

    pub fn state(&self) -> State {
        return self.state;
    }

    pub fn is_running(&self) -> bool {
        return self.state == State::Running;
    }

    /// Number of times the callback has been invoked.
    pub fn yielded(&self) -> usize {
        return self.yielded;
    }

    /// Hand one element to the callback.
    ///
    /// Once the loop has stopped, the element is dropped without invoking the
    /// callback and `Stop` is returned again, so a producer that keeps
    /// emitting after a stop can never leak elements to the caller.
    pub fn emit<T, E>(&mut self, item: T) -> Result<Control, Raised<E>>
    where
        F: FnMut(T) -> Result<Control, E>,
    {
        if self.state.is_terminal() {
            return Ok(Control::Stop);
        }

        self.yielded += 1;
        let control = match (self.callback)(item) {
            Ok(control) => control,
            Err(error) => {
                log::debug!("callback failed on element {}, aborting traversal", self.yielded);
                self.state = State::Stopped;
                return Err(Raised(error));
            }
        };

        if control.is_stop() {
            log::trace!("traversal stopped after {} elements", self.yielded);
            self.state = State::Stopped;
        }
        return Ok(control);
    }

    /// End the traversal, completing it unless the callback already stopped it.
    pub fn finish(self) -> Outcome {
        if self.state == State::Stopped {
            return Outcome::Stopped;
        }
        log::trace!("traversal completed after {} elements", self.yielded);
        return Outcome::Completed;
    }
}

/// Run every item of `items` through `callback`, in order, until it stops.
///
/// This is the whole traversal primitive for storage that can already be
/// iterated; the producer error type is free because iteration itself never
/// fails.
pub fn drive<I, P, E, F>(items: I, callback: F) -> Result<Outcome, TraversalError<P, E>>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<Control, E>,
{
    let mut yielder = Yielder::new(callback);
    for item in items {
        if yielder.emit(item)?.is_stop() {
            break;
        }
    }
    return Ok(yielder.finish());
}
