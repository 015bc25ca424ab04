//! The transition-rule engine.
//!
//! A `Ruleset` declares which identity pairs are legal and which guards
//! each pair carries. A `Machine` owns one current state, holds the
//! ruleset behind an `Arc`, and applies transitions against it.
//!
//! # Evaluation
//!
//! `Machine::transition` looks up the (current, goal) identity pair,
//! runs the matched guards in registration order, stops at the first
//! rejection, and adopts the goal only when nothing rejected it.
//! `Machine::audit` runs the same guards without stopping early and
//! reports every rejection at once.

mod error;
mod machine;
mod ruleset;

pub use error::MachineError;
pub use machine::{Audit, Machine, DEFAULT_HISTORY_LIMIT};
pub use ruleset::Ruleset;
