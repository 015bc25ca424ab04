//! Guards validating individual transition attempts.
//!
//! A guard sees the live start and goal states of an attempt, not the
//! template states used to declare the rule, so it can inspect payload
//! data the identity tokens ignore.

use super::identity::Identify;
use super::state::State;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Rejection reported by a guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("guard{} rejected transition: {message}", quoted_name(.guard.as_deref()))]
pub struct GuardError {
    guard: Option<String>,
    message: String,
}

impl GuardError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            guard: None,
            message: message.into(),
        }
    }

    /// Name of the guard that rejected the attempt, if it was registered
    /// with one.
    pub fn guard(&self) -> Option<&str> {
        self.guard.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn quoted_name(name: Option<&str>) -> String {
    name.map(|name| format!(" '{name}'")).unwrap_or_default()
}

type GuardFn<P> = dyn Fn(&State<P>, &State<P>) -> Result<(), GuardError> + Send + Sync;

/// Predicate deciding whether one attempt at a transition may proceed.
///
/// Guards must not have side effects on the machine; they only read the
/// start and goal states handed to them.
///
/// # Example
///
/// ```rust
/// use automaton::core::{Guard, GuardError, Identify, IdentityError, State};
///
/// #[derive(Clone, Debug)]
/// struct Payment {
///     status: &'static str,
///     amount: f64,
/// }
///
/// impl Identify for Payment {
///     type Id = &'static str;
///
///     fn identify(&self) -> Result<&'static str, IdentityError> {
///         Ok(self.status)
///     }
/// }
///
/// let positive = Guard::named("positive-amount", |start: &State<Payment>, _goal: &State<Payment>| {
///     if start.payload().amount > 0.0 {
///         Ok(())
///     } else {
///         Err(GuardError::new("amount is <= 0"))
///     }
/// });
///
/// let start = State::new(Payment { status: "pending", amount: 0.0 }).unwrap();
/// let goal = State::new(Payment { status: "authorized", amount: 0.0 }).unwrap();
///
/// let err = positive.check(&start, &goal).unwrap_err();
/// assert_eq!(err.guard(), Some("positive-amount"));
/// ```
pub struct Guard<P: Identify> {
    name: Option<String>,
    predicate: Arc<GuardFn<P>>,
}

impl<P: Identify> Guard<P> {
    /// Create an anonymous guard from a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&State<P>, &State<P>) -> Result<(), GuardError> + Send + Sync + 'static,
    {
        Self {
            name: None,
            predicate: Arc::new(predicate),
        }
    }

    /// Create a guard whose failures carry `name`.
    pub fn named<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&State<P>, &State<P>) -> Result<(), GuardError> + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            predicate: Arc::new(predicate),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Evaluate the guard against one attempt.
    pub fn check(&self, start: &State<P>, goal: &State<P>) -> Result<(), GuardError> {
        (self.predicate)(start, goal).map_err(|mut err| {
            if err.guard.is_none() {
                err.guard = self.name.clone();
            }
            err
        })
    }
}

impl<P: Identify> Clone for Guard<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<P: Identify> fmt::Debug for Guard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
