use std::ops::{Deref, DerefMut};

use crate::{alphabet::Alphabet, automaton::Dfa, error::Result, Show};

use super::bit;

/// The parity of the number of ones read so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Parity {
    /// An even number of ones.
    Even,
    /// An odd number of ones.
    Odd,
}

impl Show for Parity {
    fn show(&self) -> String {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
        .to_string()
    }
}

/// A `'0'` keeps the parity, a `'1'` flips it.
pub fn parity_step(parity: Parity, symbol: char) -> Parity {
    match (parity, bit(symbol)) {
        (parity, 0) => parity,
        (Parity::Even, _) => Parity::Odd,
        (Parity::Odd, _) => Parity::Even,
    }
}

/// Accepts the binary words with an even number of ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityAutomaton(Dfa<Parity>);

impl ParityAutomaton {
    /// Creates the parity automaton, which starts in [`Parity::Even`].
    pub fn new() -> Self {
        // the declaration is constant and covered by `declaration_is_valid`
        Self(parity_dfa().expect("parity automaton is well-formed"))
    }
}

fn parity_dfa() -> Result<Dfa<Parity>> {
    Dfa::new(
        [Parity::Even, Parity::Odd],
        Alphabet::binary(),
        Parity::Even,
        [Parity::Even],
        parity_step,
    )
}

impl Default for ParityAutomaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ParityAutomaton {
    type Target = Dfa<Parity>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ParityAutomaton {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
