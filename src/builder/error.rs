//! Build errors for machine construction.

use crate::core::IdentityError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Ruleset not specified. Call .rules(ruleset) before .build()")]
    MissingRuleset,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No transitions defined. Add at least one rule to the ruleset")]
    NoTransitions,

    #[error("Initial payload has no identity: {0}")]
    InitialIdentity(#[from] IdentityError),
}
