use crate::alphabet::{Alphabet, Symbol};

mod state_index;
pub use state_index::{IndexType, StateSpace};

mod table;
pub use table::TransitionTable;

/// Breadth-first exploration of the states that can be reached from some origin.
pub mod reachable;
use reachable::{MinimalRepresentatives, ReachableStates};

/// A deterministic transition system, that is a finite set of states together with a
/// partial successor function over some [`Alphabet`]. For the automata built by this crate
/// the successor function is total, but the trait does not require it.
pub trait TransitionSystem {
    /// The type of the states.
    type StateIndex: IndexType;
    /// The type of the symbols that label transitions.
    type Symbol: Symbol;

    /// Returns the alphabet over which transitions are labelled.
    fn alphabet(&self) -> &Alphabet<Self::Symbol>;

    /// Returns the state that is reached from `state` on `symbol`, `None` if the state or
    /// the symbol is unknown.
    fn successor(&self, state: Self::StateIndex, symbol: Self::Symbol) -> Option<Self::StateIndex>;

    /// Iterates over the states which are reachable from `origin` in breadth-first order.
    fn reachable_states_from(&self, origin: Self::StateIndex) -> ReachableStates<&Self>
    where
        Self: Sized,
    {
        ReachableStates::new(self, origin)
    }

    /// Computes the length-lexicographically minimal word leading from `origin` to each
    /// reachable state, see [`MinimalRepresentatives`].
    fn minimal_representatives_from(&self, origin: Self::StateIndex) -> MinimalRepresentatives<&Self>
    where
        Self: Sized,
    {
        MinimalRepresentatives::new(self, origin)
    }
}

impl<Ts: TransitionSystem> TransitionSystem for &Ts {
    type StateIndex = Ts::StateIndex;
    type Symbol = Ts::Symbol;

    fn alphabet(&self) -> &Alphabet<Self::Symbol> {
        Ts::alphabet(self)
    }

    fn successor(&self, state: Self::StateIndex, symbol: Self::Symbol) -> Option<Self::StateIndex> {
        Ts::successor(self, state, symbol)
    }
}
