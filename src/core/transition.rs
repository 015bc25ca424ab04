//! Declared edges between identities.

use super::identity::{Identify, IdentityError};
use super::state::State;
use serde::{Deserialize, Serialize};

/// Ordered (start, goal) pair of identity tokens describing one legal edge.
///
/// Transitions are keys: two transitions are the same rule exactly when
/// both identities match. Self-transitions are allowed.
///
/// # Example
///
/// ```rust
/// use automaton::core::Transition;
///
/// let authorize = Transition::new("pending", "authorized");
/// assert_eq!(authorize.start(), &"pending");
/// assert_eq!(authorize.goal(), &"authorized");
/// assert!(!authorize.is_self_loop());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition<I> {
    start: I,
    goal: I,
}

impl<I> Transition<I> {
    pub fn new(start: I, goal: I) -> Self {
        Self { start, goal }
    }

    pub fn start(&self) -> &I {
        &self.start
    }

    pub fn goal(&self) -> &I {
        &self.goal
    }

    pub fn into_parts(self) -> (I, I) {
        (self.start, self.goal)
    }

    /// Declare an edge from two template payloads.
    pub fn of<P>(start: &P, goal: &P) -> Result<Self, IdentityError>
    where
        P: Identify<Id = I>,
    {
        Ok(Self::new(start.identify()?, goal.identify()?))
    }
}

impl<I: PartialEq> Transition<I> {
    pub fn is_self_loop(&self) -> bool {
        self.start == self.goal
    }
}

impl<I: Clone> Transition<I> {
    /// Declare an edge from two template states.
    pub fn between<P>(start: &State<P>, goal: &State<P>) -> Self
    where
        P: Identify<Id = I>,
    {
        Self::new(start.identity().clone(), goal.identity().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Debug, PartialEq)]
    struct Door {
        position: &'static str,
        painted: bool,
    }

    impl Identify for Door {
        type Id = &'static str;

        fn identify(&self) -> Result<&'static str, IdentityError> {
            if self.position.is_empty() {
                return Err(IdentityError::new("door position unknown"));
            }
            Ok(self.position)
        }
    }

    #[test]
    fn between_uses_template_identities() {
        let open = State::new(Door {
            position: "open",
            painted: true,
        })
        .unwrap();
        let shut = State::new(Door {
            position: "shut",
            painted: false,
        })
        .unwrap();

        assert_eq!(Transition::between(&open, &shut), Transition::new("open", "shut"));
    }

    #[test]
    fn of_propagates_identity_failures() {
        let valid = Door {
            position: "open",
            painted: false,
        };
        let broken = Door {
            position: "",
            painted: false,
        };

        assert!(Transition::of(&valid, &valid).is_ok());
        assert!(Transition::of(&valid, &broken).is_err());
    }

    #[test]
    fn direction_matters_for_equality() {
        let forward = Transition::new("open", "shut");
        let backward = Transition::new("shut", "open");

        assert_ne!(forward, backward);

        let keys: HashSet<_> = [forward.clone(), backward, forward].into_iter().collect();
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn self_loops_are_representable() {
        assert!(Transition::new("open", "open").is_self_loop());
    }

    #[test]
    fn into_parts_returns_pair() {
        let (start, goal) = Transition::new(1u8, 2u8).into_parts();
        assert_eq!((start, goal), (1, 2));
    }
}
