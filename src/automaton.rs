use bit_set::BitSet;
use tracing::trace;

use crate::{
    alphabet::{Alphabet, Symbol},
    error::{AutomatonError, Result, RunError},
    transition_system::{
        reachable::{MinimalRepresentatives, ReachableStates},
        IndexType, StateSpace, TransitionSystem, TransitionTable,
    },
};

mod declaration;
pub use declaration::Declaration;

#[cfg(feature = "render")]
mod render;

/// A deterministic finite automaton, given by its states `Q`, its alphabet `Σ`, an initial
/// state, a set of accepting states and a complete transition table. On top of that the
/// automaton tracks a current state, which is the only part that ever changes.
///
/// A `Dfa` can only be obtained through [`Dfa::new`] or [`Declaration::generate_transitions`],
/// both of which validate the declaration and the transition rule. Consequently, every
/// instance has a total transition table and looking up a successor cannot fail for any
/// symbol of the alphabet.
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// // accepts all words over {a, b} that contain an `a`
/// let mut dfa = Dfa::new([false, true], Alphabet::new(['a', 'b']), false, [true], |seen, sym| {
///     seen || sym == 'a'
/// })
/// .unwrap();
/// assert!(!dfa.is_accepting());
/// assert_eq!(dfa.transition('b'), Ok(false));
/// assert_eq!(dfa.transition('a'), Ok(true));
/// assert!(dfa.is_accepting());
/// assert!(dfa.transition('c').is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa<Q: IndexType, S: Symbol = char> {
    states: StateSpace<Q>,
    alphabet: Alphabet<S>,
    initial: usize,
    accepting: BitSet,
    table: TransitionTable,
    current: usize,
}

impl<Q: IndexType, S: Symbol> Dfa<Q, S> {
    /// Declares and builds an automaton in one go. This is equivalent to calling
    /// [`Declaration::new`] followed by [`Declaration::generate_transitions`].
    pub fn new<F>(
        states: impl IntoIterator<Item = Q>,
        alphabet: Alphabet<S>,
        initial: Q,
        accepting: impl IntoIterator<Item = Q>,
        rule: F,
    ) -> Result<Self>
    where
        F: Fn(Q, S) -> Q,
    {
        Declaration::new(states, alphabet, initial, accepting)?.generate_transitions(rule)
    }

    /// Reads `symbol`, moves to the successor of the current state and returns it.
    ///
    /// Fails with [`AutomatonError::SymbolNotInAlphabet`] if `symbol` does not belong to the
    /// alphabet, in which case the current state is left unchanged.
    pub fn transition(&mut self, symbol: S) -> Result<Q> {
        let Some(column) = self.alphabet.position(symbol) else {
            return Err(AutomatonError::SymbolNotInAlphabet {
                symbol: format!("{symbol:?}"),
            });
        };
        let next = self.target(self.current, column);
        trace!(
            "transition {:?} --{:?}--> {:?}",
            self.state(self.current),
            symbol,
            self.state(next)
        );
        self.current = next;
        Ok(self.state(next))
    }

    /// Feeds every symbol of `word` into [`Self::transition`] and returns the state that is
    /// reached at the end.
    ///
    /// The run stops at the first symbol that can not be read. The automaton then rests in the
    /// state that was reached before that symbol, no later symbol is consumed and the returned
    /// [`RunError`] holds the position of the offending symbol.
    pub fn run<W>(&mut self, word: W) -> Result<Q, RunError>
    where
        W: IntoIterator<Item = S>,
    {
        for (position, symbol) in word.into_iter().enumerate() {
            self.transition(symbol)
                .map_err(|source| RunError { position, source })?;
        }
        Ok(self.current_state())
    }

    /// Returns the current state.
    pub fn current_state(&self) -> Q {
        self.state(self.current)
    }

    /// Returns true if the current state is accepting.
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(self.current)
    }

    /// Moves back to the initial state.
    pub fn reset(&mut self) {
        trace!("reset to initial state {:?}", self.initial());
        self.current = self.initial;
    }

    /// Moves to the given state. Fails with [`AutomatonError::InvalidState`] if `state` does
    /// not exist, the current state is left unchanged in that case.
    pub fn reset_to(&mut self, state: Q) -> Result<()> {
        let position = self
            .states
            .position(state)
            .ok_or_else(|| AutomatonError::InvalidState {
                state: format!("{state:?}"),
            })?;
        trace!("reset to state {state:?}");
        self.current = position;
        Ok(())
    }

    /// Runs `word` from the initial state without touching the current state and returns
    /// the state that is reached. Gives `None` if `word` contains a symbol that is not in the
    /// alphabet.
    pub fn reached_state<W>(&self, word: W) -> Option<Q>
    where
        W: IntoIterator<Item = S>,
    {
        word.into_iter()
            .try_fold(self.initial, |position, symbol| {
                self.alphabet
                    .position(symbol)
                    .map(|column| self.target(position, column))
            })
            .map(|position| self.state(position))
    }

    /// Returns true if running `word` from the initial state ends in an accepting state.
    /// Words containing symbols outside of the alphabet are rejected.
    pub fn accepts<W>(&self, word: W) -> bool
    where
        W: IntoIterator<Item = S>,
    {
        self.reached_state(word)
            .is_some_and(|state| self.is_accepting_state(state))
    }

    /// Returns the set of states.
    pub fn states(&self) -> &StateSpace<Q> {
        &self.states
    }

    /// Returns the initial state.
    pub fn initial(&self) -> Q {
        self.state(self.initial)
    }

    /// Iterates over the accepting states in ascending order.
    pub fn accepting_states(&self) -> impl Iterator<Item = Q> + '_ {
        self.accepting.iter().map(|position| self.state(position))
    }

    /// Returns true if `state` exists and is accepting.
    pub fn is_accepting_state(&self, state: Q) -> bool {
        self.states
            .position(state)
            .is_some_and(|position| self.accepting.contains(position))
    }

    /// Returns true if `state` is a state of this automaton.
    pub fn contains_state(&self, state: Q) -> bool {
        self.states.contains(state)
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.size()
    }

    /// Gives access to the underlying transition table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Iterates over all states that are reachable from the initial state, in breadth-first order.
    pub fn reachable_states(&self) -> ReachableStates<&Self> {
        self.reachable_states_from(self.initial())
    }

    /// Gives the length-lexicographically minimal access word of every state that is reachable
    /// from the initial state.
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<&Self> {
        self.minimal_representatives_from(self.initial())
    }

    fn state(&self, position: usize) -> Q {
        self.states.as_slice()[position]
    }

    // positions are taken from `states`/`alphabet`, for which the table is complete
    fn target(&self, position: usize, column: usize) -> usize {
        self.table.entry(position, column)
    }
}

impl<Q: IndexType, S: Symbol> TransitionSystem for Dfa<Q, S> {
    type StateIndex = Q;
    type Symbol = S;

    fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    fn successor(&self, state: Q, symbol: S) -> Option<Q> {
        let row = self.states.position(state)?;
        let column = self.alphabet.position(symbol)?;
        self.table
            .target(row, column)
            .map(|position| self.state(position))
    }
}
