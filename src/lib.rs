//! Automaton: a generic finite-state-machine runtime
//!
//! Payloads report their own logical state through the `Identify` trait.
//! A `Ruleset` declares which (start, goal) identity pairs are legal and
//! attaches guards to them; a `Machine` applies transition requests
//! against that table and adopts the goal only when every guard agrees.
//!
//! # Core Concepts
//!
//! - **Identity**: comparable token extracted from a payload
//! - **State**: immutable payload + identity pair
//! - **Transition**: declared (start, goal) identity edge
//! - **Guard**: validation run against the live start and goal states
//! - **Ruleset**: table of transitions and their ordered guards
//! - **Machine**: current state plus a shared ruleset
//!
//! # Example
//!
//! ```rust
//! use automaton::builder::{matching, requires, RulesetBuilder};
//! use automaton::core::{Identify, IdentityError, Transition};
//! use automaton::engine::Machine;
//!
//! #[derive(Clone, Debug)]
//! struct Payment {
//!     status: &'static str,
//!     cents: u64,
//! }
//!
//! impl Identify for Payment {
//!     type Id = &'static str;
//!
//!     fn identify(&self) -> Result<&'static str, IdentityError> {
//!         Ok(self.status)
//!     }
//! }
//!
//! let rules = RulesetBuilder::new()
//!     .guarded(
//!         Transition::new("pending", "authorized"),
//!         [
//!             requires("positive", "amount is <= 0", |p: &Payment| p.cents > 0),
//!             matching("amount", |p: &Payment| p.cents),
//!         ],
//!     )
//!     .transition(Transition::new("authorized", "captured"))
//!     .shared();
//!
//! let mut machine = Machine::builder()
//!     .rules(rules)
//!     .initial_payload(Payment { status: "pending", cents: 199 })
//!     .build()
//!     .unwrap();
//!
//! machine.transition_to(Payment { status: "authorized", cents: 199 }).unwrap();
//! machine.transition_to(Payment { status: "captured", cents: 199 }).unwrap();
//! assert!(machine.is_terminal());
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineBuilder, RulesetBuilder};
pub use crate::core::{Guard, GuardError, Identify, IdentityError, State, StateHistory, Transition};
pub use crate::engine::{Machine, MachineError, Ruleset};
