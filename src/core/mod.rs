//! Core value types of the transition-rule engine.
//!
//! - Identity extraction via the `Identify` trait
//! - `State` snapshots pairing payloads with identities
//! - `Transition` keys and `Guard` predicates
//! - In-memory transition history
//!
//! Nothing in this module mutates shared state; the machine in
//! `engine` is the only place a current state changes.

mod guard;
mod history;
mod identity;
mod state;
mod transition;

pub use guard::{Guard, GuardError};
pub use history::{StateHistory, TransitionRecord};
pub use identity::{Identify, IdentityError};
pub use state::State;
pub use transition::Transition;
