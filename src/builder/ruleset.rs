//! Builder for declaring rulesets.

use crate::core::{Guard, GuardError, Identify, State, Transition};
use crate::engine::Ruleset;
use std::sync::Arc;

/// Fluent builder collecting rules into a `Ruleset`.
///
/// Rules keep the semantics of `Ruleset::add_rule`: declaring the same
/// pair twice appends guards in call order.
pub struct RulesetBuilder<P: Identify> {
    rules: Ruleset<P>,
}

impl<P: Identify> RulesetBuilder<P> {
    pub fn new() -> Self {
        Self {
            rules: Ruleset::new(),
        }
    }

    /// Declare an unconditional transition.
    pub fn transition(mut self, transition: Transition<P::Id>) -> Self {
        self.rules.add_transition(transition);
        self
    }

    /// Attach one guard to a transition.
    pub fn rule(mut self, transition: Transition<P::Id>, guard: Guard<P>) -> Self {
        self.rules.add_rule(transition, [guard]);
        self
    }

    /// Attach several guards to a transition, in order.
    pub fn guarded<G>(mut self, transition: Transition<P::Id>, guards: G) -> Self
    where
        G: IntoIterator<Item = Guard<P>>,
    {
        self.rules.add_rule(transition, guards);
        self
    }

    /// Attach a guard written as a closure.
    pub fn when<F>(self, transition: Transition<P::Id>, predicate: F) -> Self
    where
        F: Fn(&State<P>, &State<P>) -> Result<(), GuardError> + Send + Sync + 'static,
    {
        self.rule(transition, Guard::new(predicate))
    }

    pub fn build(self) -> Ruleset<P> {
        self.rules
    }

    /// Build and wrap for sharing between machines.
    pub fn shared(self) -> Arc<Ruleset<P>> {
        Arc::new(self.rules)
    }
}

impl<P: Identify> Default for RulesetBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}
