//! Library for working with deterministic finite automata (DFAs) in Rust.
//!
//! A DFA is a 5-tuple $(Q, \Sigma, q_0, F, \delta)$ consisting of a finite set of states $Q$, a
//! finite alphabet $\Sigma$, an initial state $q_0 \in Q$, a set of accepting states $F \subseteq Q$
//! and a transition function $\delta: Q \times \Sigma \to Q$. In this crate, the transition function
//! is supplied as a pure rule that maps a state and a symbol to the successor state. When an
//! automaton is built, the rule is evaluated on every pair of a state and a symbol and the results
//! are stored in a [`transition_system::TransitionTable`]. Should the rule ever produce something
//! that is not a state, building fails, so every [`Dfa`] that exists has a complete table
//! and running it can only fail on symbols that are not part of the alphabet.
//!
//! States can be of any type implementing [`transition_system::IndexType`]; internally they are
//! replaced by their rank among all states, so the table is a flat vector of integers.
//!
//! Building an automaton is split into two phases, which can also be done in a single call to
//! [`Dfa::new`]:
//! - [`automaton::Declaration`] validates the states, the alphabet, the initial and the accepting states
//! - [`automaton::Declaration::generate_transitions`] evaluates the rule and produces the [`Dfa`]
//!
//! The [`binary`] module contains ready-made automata over the alphabet `{'0', '1'}`:
//! [`binary::ModuloAutomaton`] computes the remainder of a binary number, [`binary::StreakAutomaton`]
//! checks whether the last `N` symbols were ones and [`binary::ParityAutomaton`] tracks the parity
//! of the number of ones.
//!
//! ```
//! use dfa_engine::prelude::*;
//!
//! let mut modulo = ModuloAutomaton::new(3).unwrap();
//! assert_eq!(modulo.run("110".chars()), Ok(0));
//! assert!(modulo.is_accepting());
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_engine::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{Alphabet, Symbol},
        automaton::{Declaration, Dfa},
        binary::{
            modulo_step, parity_step, streak_step, ModuloAutomaton, Parameter, Parity,
            ParityAutomaton, StreakAutomaton, MAX_PARAMETER,
        },
        error::{AutomatonError, Result, RunError},
        math,
        transition_system::{
            reachable::{MinimalRepresentatives, ReachableStates},
            IndexType, StateSpace, TransitionSystem, TransitionTable,
        },
        Show,
    };
}

/// This module contains the collection types which are used throughout the crate.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;

/// Errors and the result type of this crate.
pub mod error;
pub use error::{AutomatonError, RunError};

/// This module defines transition systems, successor functions and transition tables.
pub mod transition_system;
pub use transition_system::TransitionSystem;

/// Defines declarations and deterministic finite automata built from them.
pub mod automaton;
pub use automaton::Dfa;

pub mod binary;

mod show;
pub use show::Show;
