//! States pairing a payload with its identity token.
//!
//! A `State` is built once from a payload and never changes afterwards.
//! The identity is computed at construction so the engine can match
//! transitions without calling back into the payload.

use super::identity::{Identify, IdentityError};

/// Immutable snapshot of a payload tagged with its identity.
///
/// # Example
///
/// ```rust
/// use automaton::core::{Identify, IdentityError, State};
///
/// #[derive(Clone, Debug)]
/// struct Ticket {
///     column: &'static str,
/// }
///
/// impl Identify for Ticket {
///     type Id = &'static str;
///
///     fn identify(&self) -> Result<&'static str, IdentityError> {
///         Ok(self.column)
///     }
/// }
///
/// let state = State::new(Ticket { column: "todo" }).unwrap();
/// assert_eq!(state.identity(), &"todo");
/// assert_eq!(state.payload().column, "todo");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct State<P: Identify> {
    identity: P::Id,
    payload: P,
}

impl<P: Identify> State<P> {
    /// Wrap a payload, extracting its identity.
    ///
    /// Fails only when the payload cannot identify itself.
    pub fn new(payload: P) -> Result<Self, IdentityError> {
        let identity = payload.identify()?;
        Ok(Self { identity, payload })
    }

    pub fn identity(&self) -> &P::Id {
        &self.identity
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Give the payload back, dropping the cached identity.
    pub fn into_payload(self) -> P {
        self.payload
    }
}
