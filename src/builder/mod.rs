//! Builder API for declaring rulesets and constructing machines.
//!
//! The crate has no file or environment configuration; rulesets and
//! machines are configured in code through these builders.

pub mod error;
pub mod machine;
pub mod macros;
pub mod ruleset;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use ruleset::RulesetBuilder;

use crate::core::{Guard, GuardError, Identify, State};

/// Guard that passes only when `project` yields equal values for the
/// start and goal payloads.
///
/// # Example
///
/// ```
/// use automaton::builder::{matching, RulesetBuilder};
/// use automaton::core::{Identify, IdentityError, Transition};
///
/// #[derive(Clone, Debug)]
/// struct Shipment {
///     stage: &'static str,
///     crates: u32,
/// }
///
/// impl Identify for Shipment {
///     type Id = &'static str;
///
///     fn identify(&self) -> Result<&'static str, IdentityError> {
///         Ok(self.stage)
///     }
/// }
///
/// let rules = RulesetBuilder::new()
///     .rule(
///         Transition::new("loaded", "delivered"),
///         matching("crate-count", |s: &Shipment| s.crates),
///     )
///     .build();
/// assert!(rules.contains(&"loaded", &"delivered"));
/// ```
pub fn matching<P, T, F>(name: &str, project: F) -> Guard<P>
where
    P: Identify,
    T: PartialEq + std::fmt::Debug,
    F: Fn(&P) -> T + Send + Sync + 'static,
{
    let label = name.to_string();
    Guard::named(name, move |start: &State<P>, goal: &State<P>| {
        let (before, after) = (project(start.payload()), project(goal.payload()));
        if before == after {
            Ok(())
        } else {
            Err(GuardError::new(format!(
                "{label} differs: {before:?} != {after:?}"
            )))
        }
    })
}

/// Guard that passes only when `predicate` holds for the start payload.
pub fn requires<P, F>(name: &str, message: &str, predicate: F) -> Guard<P>
where
    P: Identify,
    F: Fn(&P) -> bool + Send + Sync + 'static,
{
    let message = message.to_string();
    Guard::named(name, move |start: &State<P>, _goal: &State<P>| {
        if predicate(start.payload()) {
            Ok(())
        } else {
            Err(GuardError::new(message.clone()))
        }
    })
}
