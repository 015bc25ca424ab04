//! The table of legal transitions and their guards.

use crate::core::{Guard, Identify, Transition};
use std::collections::HashMap;
use std::fmt;

/// Maps each declared transition to its ordered guard list.
///
/// A pair that was never declared is illegal. Declaring the same pair
/// again appends guards to the existing list; insertion order is the
/// order guards run in.
///
/// Build a ruleset once, then share it behind an `Arc`. Lookups never
/// mutate it and borrow the identities they are given.
///
/// # Example
///
/// ```rust
/// use automaton::core::{Guard, GuardError, Identify, IdentityError, State, Transition};
/// use automaton::engine::Ruleset;
///
/// #[derive(Clone, Debug)]
/// struct Job {
///     phase: &'static str,
///     retries: u8,
/// }
///
/// impl Identify for Job {
///     type Id = &'static str;
///
///     fn identify(&self) -> Result<&'static str, IdentityError> {
///         Ok(self.phase)
///     }
/// }
///
/// let mut rules: Ruleset<Job> = Ruleset::new();
/// rules.add_transition(Transition::new("queued", "running"));
/// rules.add_rule(
///     Transition::new("failed", "queued"),
///     [Guard::new(|start: &State<Job>, _: &State<Job>| {
///         if start.payload().retries < 3 {
///             Ok(())
///         } else {
///             Err(GuardError::new("out of retries"))
///         }
///     })],
/// );
///
/// assert_eq!(rules.lookup(&"queued", &"running").map(<[_]>::len), Some(0));
/// assert_eq!(rules.lookup(&"failed", &"queued").map(<[_]>::len), Some(1));
/// assert!(rules.lookup(&"running", &"queued").is_none());
/// ```
pub struct Ruleset<P: Identify> {
    rules: HashMap<P::Id, HashMap<P::Id, Vec<Guard<P>>>>,
}

impl<P: Identify> Ruleset<P> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register guards under `transition`, appending to any already there.
    pub fn add_rule<G>(&mut self, transition: Transition<P::Id>, guards: G)
    where
        G: IntoIterator<Item = Guard<P>>,
    {
        let (start, goal) = transition.into_parts();
        let entry = self
            .rules
            .entry(start.clone())
            .or_default()
            .entry(goal.clone())
            .or_default();
        let before = entry.len();
        entry.extend(guards);
        tracing::trace!(
            start = ?start,
            goal = ?goal,
            added = entry.len() - before,
            guards = entry.len(),
            "rule registered"
        );
    }

    /// Register `transition` as legal with no guards.
    ///
    /// Guards already attached to the same pair are kept.
    pub fn add_transition(&mut self, transition: Transition<P::Id>) {
        self.add_rule(transition, std::iter::empty());
    }

    /// Guards for the (start, goal) pair, or `None` if the pair is illegal.
    pub fn lookup(&self, start: &P::Id, goal: &P::Id) -> Option<&[Guard<P>]> {
        self.rules
            .get(start)?
            .get(goal)
            .map(Vec::as_slice)
    }

    pub fn contains(&self, start: &P::Id, goal: &P::Id) -> bool {
        self.lookup(start, goal).is_some()
    }

    /// Declared transitions, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = Transition<P::Id>> + '_ {
        self.rules.iter().flat_map(|(start, goals)| {
            goals
                .keys()
                .map(move |goal| Transition::new(start.clone(), goal.clone()))
        })
    }

    /// Goals reachable in one step from `start`.
    pub fn goals_from<'a>(&'a self, start: &P::Id) -> impl Iterator<Item = &'a P::Id> + 'a {
        self.rules
            .get(start)
            .into_iter()
            .flat_map(|goals| goals.keys())
    }

    /// Whether `identity` appears as the start or goal of any declared rule.
    pub fn mentions(&self, identity: &P::Id) -> bool {
        self.rules.contains_key(identity)
            || self
                .rules
                .values()
                .any(|goals| goals.contains_key(identity))
    }

    /// Merge `other` into this ruleset, appending guard lists of shared pairs.
    pub fn extend(&mut self, other: Ruleset<P>) {
        for (start, goals) in other.rules {
            for (goal, guards) in goals {
                self.add_rule(Transition::new(start.clone(), goal), guards);
            }
        }
    }

    /// Number of declared transitions.
    pub fn len(&self) -> usize {
        self.rules.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<P: Identify> Default for Ruleset<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Identify> Clone for Ruleset<P> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}

impl<P: Identify> fmt::Debug for Ruleset<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.rules.iter().flat_map(|(start, goals)| {
                goals
                    .iter()
                    .map(move |(goal, guards)| ((start, goal), guards.len()))
            }))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuardError, IdentityError, State};

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        column: &'static str,
    }

    impl Identify for Ticket {
        type Id = &'static str;

        fn identify(&self) -> Result<&'static str, IdentityError> {
            Ok(self.column)
        }
    }

    fn rejecting(name: &'static str) -> Guard<Ticket> {
        Guard::named(name, |_: &State<Ticket>, _: &State<Ticket>| {
            Err(GuardError::new("rejected"))
        })
    }

    fn names(guards: &[Guard<Ticket>]) -> Vec<Option<&str>> {
        guards.iter().map(Guard::name).collect()
    }

    #[test]
    fn undeclared_pair_is_not_found() {
        let mut rules: Ruleset<Ticket> = Ruleset::new();
        rules.add_transition(Transition::new("todo", "doing"));

        assert!(rules.lookup(&"doing", &"todo").is_none());
        assert!(!rules.contains(&"todo", &"done"));
    }

    #[test]
    fn add_transition_registers_empty_guard_list() {
        let mut rules: Ruleset<Ticket> = Ruleset::new();
        rules.add_transition(Transition::new("todo", "doing"));

        assert_eq!(rules.lookup(&"todo", &"doing").map(<[_]>::len), Some(0));
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn repeated_add_rule_appends_in_order() {
        let mut rules = Ruleset::new();
        rules.add_rule(Transition::new("todo", "doing"), [rejecting("a")]);
        rules.add_rule(
            Transition::new("todo", "doing"),
            [rejecting("b"), rejecting("c")],
        );

        let guards = rules.lookup(&"todo", &"doing").unwrap();
        assert_eq!(names(guards), vec![Some("a"), Some("b"), Some("c")]);
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn add_transition_keeps_existing_guards() {
        let mut rules = Ruleset::new();
        rules.add_rule(Transition::new("todo", "doing"), [rejecting("a")]);
        rules.add_transition(Transition::new("todo", "doing"));

        assert_eq!(rules.lookup(&"todo", &"doing").map(<[_]>::len), Some(1));
    }

    #[test]
    fn self_transitions_are_allowed_when_declared() {
        let mut rules: Ruleset<Ticket> = Ruleset::new();
        rules.add_transition(Transition::new("doing", "doing"));

        assert!(rules.contains(&"doing", &"doing"));
    }

    #[test]
    fn lookup_is_repeatable() {
        let mut rules = Ruleset::new();
        rules.add_rule(
            Transition::new("todo", "doing"),
            [rejecting("a"), rejecting("b")],
        );

        let first = names(rules.lookup(&"todo", &"doing").unwrap());
        let second = names(rules.lookup(&"todo", &"doing").unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn extend_combines_guard_lists() {
        let mut left = Ruleset::new();
        left.add_rule(Transition::new("todo", "doing"), [rejecting("left")]);

        let mut right = Ruleset::new();
        right.add_rule(Transition::new("todo", "doing"), [rejecting("right")]);
        right.add_transition(Transition::new("doing", "done"));

        left.extend(right);

        assert_eq!(left.len(), 2);
        assert_eq!(
            names(left.lookup(&"todo", &"doing").unwrap()),
            vec![Some("left"), Some("right")]
        );
        assert!(left.contains(&"doing", &"done"));
    }

    #[test]
    fn goals_from_lists_outgoing_edges() {
        let mut rules: Ruleset<Ticket> = Ruleset::new();
        rules.add_transition(Transition::new("todo", "doing"));
        rules.add_transition(Transition::new("todo", "dropped"));
        rules.add_transition(Transition::new("doing", "done"));

        let mut goals: Vec<_> = rules.goals_from(&"todo").copied().collect();
        goals.sort_unstable();
        assert_eq!(goals, vec!["doing", "dropped"]);
        assert_eq!(rules.goals_from(&"done").count(), 0);
    }

    #[test]
    fn transitions_lists_every_declared_pair() {
        let mut rules: Ruleset<Ticket> = Ruleset::new();
        rules.add_transition(Transition::new("todo", "doing"));
        rules.add_transition(Transition::new("todo", "dropped"));
        rules.add_transition(Transition::new("doing", "done"));
        rules.add_transition(Transition::new("todo", "doing"));

        let mut pairs: Vec<_> = rules.transitions().map(Transition::into_parts).collect();
        pairs.sort_unstable();
        assert_eq!(
            pairs,
            vec![("doing", "done"), ("todo", "doing"), ("todo", "dropped")]
        );
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn lookup_with_owned_identities() {
        #[derive(Clone, Debug)]
        struct Account {
            status: String,
        }

        impl Identify for Account {
            type Id = String;

            fn identify(&self) -> Result<String, IdentityError> {
                Ok(self.status.clone())
            }
        }

        let mut rules: Ruleset<Account> = Ruleset::new();
        rules.add_transition(Transition::new("open".to_string(), "frozen".to_string()));

        let open = "open".to_string();
        let frozen = "frozen".to_string();
        assert_eq!(rules.lookup(&open, &frozen).map(<[_]>::len), Some(0));
        assert!(rules.lookup(&frozen, &open).is_none());
        assert!(rules.goals_from(&frozen).next().is_none());
    }

    #[test]
    fn mentions_checks_both_ends() {
        let mut rules: Ruleset<Ticket> = Ruleset::new();
        rules.add_transition(Transition::new("todo", "doing"));

        assert!(rules.mentions(&"todo"));
        assert!(rules.mentions(&"doing"));
        assert!(!rules.mentions(&"done"));
    }
}
