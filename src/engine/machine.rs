//! The live automaton: a current state driven by a shared ruleset.

use crate::builder::MachineBuilder;
use crate::core::{Identify, State, StateHistory, TransitionRecord};
use crate::engine::error::MachineError;
use crate::engine::ruleset::Ruleset;
use chrono::Utc;
use std::sync::Arc;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Records a machine keeps in its history unless told otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Every reason a prospective transition would be refused.
pub type Audit<I> = Validation<(), NonEmptyVec<MachineError<I>>>;

/// State machine holding a current state and a shared ruleset.
///
/// `transition` is the only operation that changes the current state, and
/// it does so only when a rule matches and every guard passes. It takes
/// `&mut self`; share one machine across threads behind a `Mutex`.
///
/// Accepted transitions are recorded in a history that keeps the newest
/// [`DEFAULT_HISTORY_LIMIT`] records; see [`Machine::set_history_limit`].
///
/// # Example
///
/// ```rust
/// use automaton::core::{Identify, IdentityError, State, Transition};
/// use automaton::engine::{Machine, Ruleset};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug)]
/// struct Switch {
///     on: bool,
/// }
///
/// impl Identify for Switch {
///     type Id = bool;
///
///     fn identify(&self) -> Result<bool, IdentityError> {
///         Ok(self.on)
///     }
/// }
///
/// let mut rules: Ruleset<Switch> = Ruleset::new();
/// rules.add_transition(Transition::new(false, true));
///
/// let initial = State::new(Switch { on: false }).unwrap();
/// let mut machine = Machine::new(Arc::new(rules), initial);
///
/// machine.transition_to(Switch { on: true }).unwrap();
/// assert_eq!(machine.identity(), &true);
/// assert!(machine.transition_to(Switch { on: false }).unwrap_err().is_no_rule());
/// ```
pub struct Machine<P: Identify> {
    current: State<P>,
    rules: Arc<Ruleset<P>>,
    history: StateHistory<P::Id>,
}

impl<P: Identify> Machine<P> {
    pub fn new(rules: Arc<Ruleset<P>>, initial: State<P>) -> Self {
        Self {
            current: initial,
            rules,
            history: StateHistory::with_limit(DEFAULT_HISTORY_LIMIT),
        }
    }

    pub fn builder() -> MachineBuilder<P> {
        MachineBuilder::new()
    }

    pub fn state(&self) -> &State<P> {
        &self.current
    }

    pub fn identity(&self) -> &P::Id {
        self.current.identity()
    }

    pub fn rules(&self) -> &Arc<Ruleset<P>> {
        &self.rules
    }

    pub fn history(&self) -> &StateHistory<P::Id> {
        &self.history
    }

    /// Bound the history to `limit` records, or lift the bound with `None`.
    /// Records beyond a lowered limit are dropped oldest first.
    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history.set_limit(limit);
    }

    /// Whether no rule leads out of the current state.
    pub fn is_terminal(&self) -> bool {
        self.rules.goals_from(self.identity()).next().is_none()
    }

    /// Replace the current state without consulting the ruleset.
    ///
    /// Used to assign the initial state or to resume from a state the
    /// caller restored. The history restarts from here.
    pub fn set_state(&mut self, state: State<P>) {
        self.current = state;
        self.history.clear();
    }

    /// Check whether moving to `goal` would succeed, without moving.
    pub fn check(&self, goal: &State<P>) -> Result<(), MachineError<P::Id>> {
        let guards = self
            .rules
            .lookup(self.current.identity(), goal.identity())
            .ok_or_else(|| MachineError::NoRule {
                start: self.current.identity().clone(),
                goal: goal.identity().clone(),
            })?;

        for guard in guards {
            guard.check(&self.current, goal)?;
        }
        Ok(())
    }

    /// Move to `goal` if a rule allows it and all its guards pass.
    ///
    /// Guards run in registration order and the first rejection is
    /// returned. On any error the current state is left as it was.
    pub fn transition(&mut self, goal: State<P>) -> Result<(), MachineError<P::Id>> {
        self.check(&goal)?;

        let record = TransitionRecord {
            from: self.current.identity().clone(),
            to: goal.identity().clone(),
            timestamp: Utc::now(),
        };
        tracing::debug!(from = ?record.from, to = ?record.to, "transition applied");

        self.history.push(record);
        self.current = goal;
        Ok(())
    }

    /// Build a state from `payload` and transition to it.
    pub fn transition_to(&mut self, payload: P) -> Result<(), MachineError<P::Id>> {
        let goal = State::new(payload)?;
        self.transition(goal)
    }

    /// Evaluate every guard for a move to `goal`, collecting all rejections.
    ///
    /// Unlike `check`, evaluation does not stop at the first failing guard.
    /// An undeclared pair yields a single `NoRule` failure.
    pub fn audit(&self, goal: &State<P>) -> Audit<P::Id> {
        let Some(guards) = self
            .rules
            .lookup(self.current.identity(), goal.identity())
        else {
            return Validation::fail(MachineError::NoRule {
                start: self.current.identity().clone(),
                goal: goal.identity().clone(),
            });
        };

        if guards.is_empty() {
            return Validation::success(());
        }

        let checks: Vec<Audit<P::Id>> = guards
            .iter()
            .map(|guard| match guard.check(&self.current, goal) {
                Ok(()) => Validation::success(()),
                Err(err) => Validation::fail(MachineError::Guard(err)),
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<P: Identify + Clone> Clone for Machine<P> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            rules: Arc::clone(&self.rules),
            history: self.history.clone(),
        }
    }
}

impl<P: Identify + std::fmt::Debug> std::fmt::Debug for Machine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("rules", &self.rules)
            .field("history", &self.history.len())
            .finish()
    }
}
