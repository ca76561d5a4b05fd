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

/// Computes the remainder of the binary number that is formed by appending `symbol` to a
/// number whose remainder modulo `modulus` is `remainder`, i.e. `(2 * remainder + bit) % modulus`.
///
/// The intermediate value is computed in `u128`, so no overflow can occur for any `usize`
/// modulus.
pub fn modulo_step(modulus: NonZeroUsize, remainder: usize, symbol: char) -> usize {
    let modulus = modulus.get() as u128;
    ((remainder as u128 * 2 + bit(symbol) as u128) % modulus) as usize
}

/// Reads a binary number from the most significant bit onwards and keeps track of its value
/// modulo `N`. The states are the remainders `0..N`, the remainder `0` is initial and the only
/// accepting state, so the automaton accepts precisely the binary numbers divisible by `N`.
///
/// Each symbol is processed in constant time and the automaton never needs more memory than
/// its transition table, no matter how long the input is.
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// let mut modulo = ModuloAutomaton::new(3).unwrap();
/// assert_eq!(modulo.run("101".chars()), Ok(2));
/// assert!(!modulo.is_accepting());
/// assert_eq!(modulo.transition('1'), Ok(2));
/// assert_eq!(modulo.label(), "S2");
///
/// assert!(ModuloAutomaton::new(0).is_err());
/// assert!(ModuloAutomaton::new(1.5).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuloAutomaton {
    modulus: NonZeroUsize,
    dfa: Dfa<usize>,
}

impl ModuloAutomaton {
    /// Creates the automaton for the given modulus. Fails with [`AutomatonError::InvalidModulus`]
    /// if `modulus` is not a positive integer
    /// or exceeds [`MAX_PARAMETER`].
    pub fn new(modulus: impl Parameter) -> Result<Self> {
        let Some(n) = modulus.positive_integer().filter(|n| n.get() <= MAX_PARAMETER) else {
            warn!("rejecting modulus {modulus:?}");
            return Err(AutomatonError::InvalidModulus {
                value: format!("{modulus:?}"),
            });
        };

        let dfa = Dfa::new(0..n.get(), Alphabet::binary(), 0, [0], move |remainder, symbol| {
            modulo_step(n, remainder, symbol)
        })?;
        debug!("built modulo automaton for modulus {n}");
        Ok(Self { modulus: n, dfa })
    }

    /// Returns the modulus.
    pub fn modulus(&self) -> usize {
        self.modulus.get()
    }

    /// Returns the remainder of the input read so far.
    pub fn remainder(&self) -> usize {
        self.dfa.current_state()
    }

    /// Returns the display label of the current state, e.g. `S2`.
    pub fn label(&self) -> String {
        format!("S{}", self.remainder())
    }

    /// Consumes `self` and returns the underlying automaton.
    pub fn into_dfa(self) -> Dfa<usize> {
        self.dfa
    }
}

impl Deref for ModuloAutomaton {
    type Target = Dfa<usize>;

    fn deref(&self) -> &Self::Target {
        &self.dfa
    }
}

impl DerefMut for ModuloAutomaton {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.dfa
    }
}
