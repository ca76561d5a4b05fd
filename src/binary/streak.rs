use std::{
    num::NonZeroUsize,
    ops::{Deref, DerefMut},
};

use tracing::{debug, warn};

use crate::{
    alphabet::Alphabet,
    automaton::Dfa,
    error::{AutomatonError, Result},
};

use super::{bit, Parameter, MAX_PARAMETER};

/// Counts consecutive ones: a `'0'` resets `count` to zero, a `'1'` increments it, but the
/// count never exceeds `length`.
pub fn streak_step(length: NonZeroUsize, count: usize, symbol: char) -> usize {
    match bit(symbol) {
        1 => count.saturating_add(1).min(length.get()),
        _ => 0,
    }
}

/// Detects whether the last `N` symbols that were read are all `'1'`. The state is the length
/// of the current run of ones, capped at `N`, so there are `N + 1` states. Only the state `N`
/// is accepting, and further ones keep the automaton there.
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// let mut streak = StreakAutomaton::new(3).unwrap();
/// assert_eq!(streak.run("1011101".chars()), Ok(1));
/// assert_eq!(streak.run("11".chars()), Ok(3));
/// assert!(streak.is_accepting());
/// assert_eq!(streak.transition('0'), Ok(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakAutomaton {
    length: NonZeroUsize,
    dfa: Dfa<usize>,
}

impl StreakAutomaton {
    /// Creates the automaton that looks for `length` consecutive ones. Fails with
    /// [`AutomatonError::InvalidStreakLength`] if `length` is not a positive integer
    /// or exceeds [`MAX_PARAMETER`].
    pub fn new(length: impl Parameter) -> Result<Self> {
        let Some(n) = length.positive_integer().filter(|n| n.get() <= MAX_PARAMETER) else {
            warn!("rejecting streak length {length:?}");
            return Err(AutomatonError::InvalidStreakLength {
                value: format!("{length:?}"),
            });
        };

        let dfa = Dfa::new(0..=n.get(), Alphabet::binary(), 0, [n.get()], move |count, symbol| {
            streak_step(n, count, symbol)
        })?;
        debug!("built streak automaton for length {n}");
        Ok(Self { length: n, dfa })
    }

    /// Returns the number of consecutive ones that is looked for.
    pub fn length(&self) -> usize {
        self.length.get()
    }

    /// Returns the number of trailing ones read so far, capped at [`Self::length`].
    pub fn count(&self) -> usize {
        self.dfa.current_state()
    }

    /// Returns the display label of the current state, e.g. `S2`.
    pub fn label(&self) -> String {
        format!("S{}", self.count())
    }

    /// Consumes `self` and returns the underlying automaton.
    pub fn into_dfa(self) -> Dfa<usize> {
        self.dfa
    }
}

impl Deref for StreakAutomaton {
    type Target = Dfa<usize>;

    fn deref(&self) -> &Self::Target {
        &self.dfa
    }
}

impl DerefMut for StreakAutomaton {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.dfa
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn step_saturates() {
        let three = NonZeroUsize::new(3).unwrap();
        assert_eq!(streak_step(three, 0, '1'), 1);
        assert_eq!(streak_step(three, 2, '1'), 3);
        assert_eq!(streak_step(three, 3, '1'), 3);
        assert_eq!(streak_step(three, 3, '0'), 0);
        assert_eq!(streak_step(three, 1, '0'), 0);
    }

    #[test_log::test]
    fn detects_three_consecutive_ones() {
        let mut streak = StreakAutomaton::new(3).unwrap();
        assert_eq!(streak.current_state(), 0);
        assert!(!streak.is_accepting());

        assert_eq!(streak.transition('1'), Ok(1));
        assert!(!streak.is_accepting());
        assert_eq!(streak.transition('1'), Ok(2));
        assert!(!streak.is_accepting());
        assert_eq!(streak.transition('1'), Ok(3));
        assert!(streak.is_accepting());
        assert_eq!(streak.transition('1'), Ok(3));
        assert!(streak.is_accepting());
        assert_eq!(streak.label(), "S3");
    }

    #[test]
    fn zero_breaks_the_streak() {
        let mut streak = StreakAutomaton::new(3).unwrap();
        streak.run("11".chars()).unwrap();
        assert_eq!(streak.count(), 2);
        assert_eq!(streak.transition('0'), Ok(0));
        assert_eq!(streak.count(), 0);
    }

    #[test]
    fn mixed_sequence() {
        let mut streak = StreakAutomaton::new(3).unwrap();
        let counts = "1011101"
            .chars()
            .map(|symbol| streak.transition(symbol).unwrap())
            .collect_vec();
        assert_eq!(counts, vec![1, 0, 1, 2, 3, 0, 1]);
        assert!(!streak.is_accepting());
    }

    #[test]
    fn length_one() {
        let mut streak = StreakAutomaton::new(1).unwrap();
        assert_eq!(streak.size(), 2);
        assert!(streak.accepts("0101".chars()));
        assert!(!streak.accepts("10".chars()));
        assert_eq!(streak.run("111".chars()), Ok(1));
    }

    #[test]
    fn every_count_is_reachable() {
        let streak = StreakAutomaton::new(4).unwrap();
        assert_eq!(
            streak.reachable_states().collect_vec(),
            vec![0, 1, 2, 3, 4]
        );
        assert_eq!(
            streak.minimal_representatives().last(),
            Some((vec!['1'; 4], 4))
        );
    }

    #[test]
    fn invalid_lengths() {
        for (length, rendered) in [(0.0, "0.0"), (-1.0, "-1.0"), (1.5, "1.5")] {
            assert_eq!(
                StreakAutomaton::new(length),
                Err(AutomatonError::InvalidStreakLength {
                    value: rendered.into()
                })
            );
        }
        assert!(StreakAutomaton::new(0).is_err());
        assert!(StreakAutomaton::new(-1).is_err());
    }

    #[test]
    fn length_accessors() {
        let streak = StreakAutomaton::new(6u8).unwrap();
        assert_eq!(streak.length(), 6);
        assert_eq!(streak.accepting_states().collect_vec(), vec![6]);
        assert_eq!(streak.into_dfa().size(), 7);
    }
}
