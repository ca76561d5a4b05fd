use bit_set::BitSet;
use itertools::Itertools;
use tracing::warn;

use crate::{
    alphabet::{Alphabet, Symbol},
    error::{AutomatonError, Result},
    transition_system::{IndexType, StateSpace, TransitionTable},
};

use super::Dfa;

/// The declared part of an automaton: its states, alphabet, initial state and accepting
/// states. A declaration is validated when it is created but has no transitions yet, it has
/// to be turned into a [`Dfa`] through [`Declaration::generate_transitions`] before anything
/// can be run on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<Q: IndexType, S: Symbol = char> {
    states: StateSpace<Q>,
    alphabet: Alphabet<S>,
    initial: usize,
    accepting: BitSet,
}

impl<Q: IndexType, S: Symbol> Declaration<Q, S> {
    /// Validates and stores the given states, alphabet, initial and accepting states.
    /// Duplicates among the states are ignored.
    ///
    /// Fails with [`AutomatonError::InvalidConfiguration`] if there are no states, if the
    /// alphabet is empty, if `initial` is not among the states or if some accepting state is
    /// not among the states.
    pub fn new(
        states: impl IntoIterator<Item = Q>,
        alphabet: Alphabet<S>,
        initial: Q,
        accepting: impl IntoIterator<Item = Q>,
    ) -> Result<Self> {
        let states = StateSpace::new(states);
        if states.is_empty() {
            return Err(reject("the set of states is empty"));
        }
        if alphabet.is_empty() {
            return Err(reject("the alphabet is empty"));
        }

        let Some(initial) = states.position(initial) else {
            return Err(reject(format!("initial state {initial:?} is not a state")));
        };

        let (accepting, unknown): (Vec<_>, Vec<_>) = accepting
            .into_iter()
            .map(|q| states.position(q).ok_or(q))
            .partition_result();
        if !unknown.is_empty() {
            return Err(reject(format!(
                "accepting states [{}] are not states",
                unknown.iter().map(|q| format!("{q:?}")).join(", ")
            )));
        }

        Ok(Self {
            accepting: accepting.into_iter().collect(),
            states,
            alphabet,
            initial,
        })
    }

    /// Builds the complete transition table by evaluating `rule` once on every pair of a state
    /// and a symbol, and produces the automaton, positioned in its initial state.
    ///
    /// Fails with [`AutomatonError::InvalidTransition`] if `rule` maps some pair to a value
    /// that is not one of the declared states.
    pub fn generate_transitions<F>(self, rule: F) -> Result<Dfa<Q, S>>
    where
        F: Fn(Q, S) -> Q,
    {
        let table = TransitionTable::generate(&self.states, &self.alphabet, rule)?;
        Ok(Dfa {
            current: self.initial,
            states: self.states,
            alphabet: self.alphabet,
            initial: self.initial,
            accepting: self.accepting,
            table,
        })
    }

    /// Returns the declared states.
    pub fn states(&self) -> &StateSpace<Q> {
        &self.states
    }

    /// Returns the declared alphabet.
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Returns the declared initial state.
    pub fn initial(&self) -> Q {
        self.states.as_slice()[self.initial]
    }

    /// Iterates over the declared accepting states in ascending order.
    pub fn accepting_states(&self) -> impl Iterator<Item = Q> + '_ {
        self.accepting
            .iter()
            .map(|position| self.states.as_slice()[position])
    }
}

fn reject(reason: impl Into<String>) -> AutomatonError {
    let error = AutomatonError::configuration(reason);
    warn!("rejecting declaration: {error}");
    error
}
