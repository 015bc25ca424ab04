//! Identity extraction for state machine payloads.
//!
//! The engine never compares payloads directly. It asks each payload for an
//! identity token and matches transitions on token equality alone.

use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// A payload that could not produce an identity token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot identify payload: {reason}")]
pub struct IdentityError {
    reason: String,
}

impl IdentityError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Capability every payload type must provide to be driven by a machine.
///
/// `identify` must be pure: equal logical states return equal tokens and
/// distinct logical states return unequal ones. The token can be as coarse
/// (a bare status label) or as fine (a record of sub-flags) as the caller
/// wants; that choice decides how many distinct states the ruleset sees.
///
/// # Example
///
/// ```rust
/// use automaton::core::{Identify, IdentityError};
///
/// struct Order {
///     status: String,
///     amount: f64,
/// }
///
/// impl Identify for Order {
///     type Id = String;
///
///     fn identify(&self) -> Result<String, IdentityError> {
///         if self.status.is_empty() {
///             return Err(IdentityError::new("order has no status"));
///         }
///         Ok(self.status.clone())
///     }
/// }
///
/// let order = Order { status: "pending".into(), amount: 4.5 };
/// assert_eq!(order.identify().unwrap(), "pending");
/// ```
pub trait Identify {
    /// Token distinguishing one logical state from another.
    type Id: Clone + Eq + Hash + Debug + Send + Sync;

    /// Derive the identity token for this payload.
    fn identify(&self) -> Result<Self::Id, IdentityError>;
}
