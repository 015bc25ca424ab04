//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::core::{Identify, State};
use crate::engine::{Machine, Ruleset, DEFAULT_HISTORY_LIMIT};
use std::sync::Arc;

/// Builder for constructing machines with a fluent API.
pub struct MachineBuilder<P: Identify> {
    rules: Option<Arc<Ruleset<P>>>,
    initial: Option<Result<State<P>, BuildError>>,
    history_limit: Option<usize>,
}

impl<P: Identify> MachineBuilder<P> {
    pub fn new() -> Self {
        Self {
            rules: None,
            initial: None,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Set the shared ruleset (required).
    pub fn rules(mut self, rules: Arc<Ruleset<P>>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: State<P>) -> Self {
        self.initial = Some(Ok(state));
        self
    }

    /// Set the initial state from a raw payload.
    /// Identity failures surface from `build`.
    pub fn initial_payload(mut self, payload: P) -> Self {
        self.initial = Some(State::new(payload).map_err(BuildError::from));
        self
    }

    /// Keep at most `limit` history records (default [`DEFAULT_HISTORY_LIMIT`]).
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every history record for the machine's lifetime.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Build the machine.
    pub fn build(self) -> Result<Machine<P>, BuildError> {
        let rules = self.rules.ok_or(BuildError::MissingRuleset)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)??;

        if rules.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine = Machine::new(rules, initial);
        machine.set_history_limit(self.history_limit);
        Ok(machine)
    }
}

impl<P: Identify> Default for MachineBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RulesetBuilder;
    use crate::core::{IdentityError, Transition};

    #[derive(Clone, Debug, PartialEq)]
    struct Phase(&'static str);

    impl Identify for Phase {
        type Id = &'static str;

        fn identify(&self) -> Result<&'static str, IdentityError> {
            if self.0.is_empty() {
                return Err(IdentityError::new("empty phase"));
            }
            Ok(self.0)
        }
    }

    fn rules() -> Arc<Ruleset<Phase>> {
        RulesetBuilder::new()
            .transition(Transition::new("new", "done"))
            .shared()
    }

    #[test]
    fn builder_validates_missing_ruleset() {
        let result = MachineBuilder::new()
            .initial(State::new(Phase("new")).unwrap())
            .build();

        assert!(matches!(result, Err(BuildError::MissingRuleset)));
    }

    #[test]
    fn builder_validates_missing_initial_state() {
        let result = MachineBuilder::new().rules(rules()).build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_rejects_empty_ruleset() {
        let result = MachineBuilder::new()
            .rules(Arc::new(Ruleset::new()))
            .initial_payload(Phase("new"))
            .build();

        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn builder_surfaces_initial_identity_failure() {
        let result = MachineBuilder::new()
            .rules(rules())
            .initial_payload(Phase(""))
            .build();

        assert!(matches!(result, Err(BuildError::InitialIdentity(_))));
    }

    #[test]
    fn builder_applies_history_limit() {
        let machine = Machine::builder()
            .rules(rules())
            .initial_payload(Phase("new"))
            .history_limit(8)
            .build()
            .unwrap();

        assert_eq!(machine.history().limit(), Some(8));
    }

    #[test]
    fn builder_can_lift_history_limit() {
        let machine = Machine::builder()
            .rules(rules())
            .initial_payload(Phase("new"))
            .unbounded_history()
            .build()
            .unwrap();

        assert_eq!(machine.history().limit(), None);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = Machine::builder()
            .rules(rules())
            .initial_payload(Phase("new"))
            .build()
            .unwrap();

        assert_eq!(machine.identity(), &"new");
        machine.transition_to(Phase("done")).unwrap();
        assert!(machine.is_terminal());
    }
}
