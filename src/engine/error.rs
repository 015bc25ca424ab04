//! Errors returned by machine operations.

use crate::core::{GuardError, IdentityError};
use thiserror::Error;

/// Why a transition attempt did not change the machine's state.
///
/// The machine's current state is untouched whenever one of these is
/// returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MachineError<I> {
    /// The goal payload could not produce an identity.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// No rule declares the (start, goal) pair.
    #[error("no rule allows transition from {start:?} to {goal:?}")]
    NoRule { start: I, goal: I },

    /// A rule matched but one of its guards rejected the attempt.
    #[error(transparent)]
    Guard(#[from] GuardError),
}

impl<I> MachineError<I> {
    pub fn is_no_rule(&self) -> bool {
        matches!(self, Self::NoRule { .. })
    }

    pub fn is_guard(&self) -> bool {
        matches!(self, Self::Guard(_))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity(_))
    }
}
