use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

use crate::{math::Bijection, Show};

/// A symbol of an alphabet, which is also the type of the symbols in a word.
pub trait Symbol: PartialEq + Eq + Debug + Copy + Ord + PartialOrd + Hash + Show {}
impl<S: PartialEq + Eq + Debug + Copy + Ord + PartialOrd + Hash + Show> Symbol for S {}

/// A finite set of [`Symbol`]s. Every symbol is assigned a position, which is its rank in
/// the ascending order of all symbols. Positions are used to address the columns of a
/// [`crate::transition_system::TransitionTable`].
///
/// # Example
/// ```
/// use dfa_engine::prelude::*;
///
/// let alphabet = Alphabet::new(['b', 'a', 'b']);
/// assert_eq!(alphabet.size(), 2);
/// assert_eq!(alphabet.position('b'), Some(1));
/// assert!(!alphabet.contains('c'));
/// ```
#[derive(Clone, Debug)]
pub struct Alphabet<S: Symbol = char> {
    positions: Bijection<S, usize>,
}

impl<S: Symbol> Alphabet<S> {
    /// Builds an alphabet from the given symbols, duplicates are collapsed.
    pub fn new(symbols: impl IntoIterator<Item = S>) -> Self {
        Self {
            positions: symbols
                .into_iter()
                .unique()
                .sorted()
                .enumerate()
                .map(|(position, symbol)| (symbol, position))
                .collect(),
        }
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the alphabet contains no symbols at all.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if the given symbol is present in the alphabet.
    pub fn contains(&self, symbol: S) -> bool {
        self.positions.contains_left(&symbol)
    }

    /// Returns the position of `symbol`, or `None` if it is not part of the alphabet.
    pub fn position(&self, symbol: S) -> Option<usize> {
        self.positions.get_by_left(&symbol).copied()
    }

    /// Returns the symbol at the given position.
    pub fn symbol_at(&self, position: usize) -> Option<S> {
        self.positions.get_by_right(&position).copied()
    }

    /// Iterates over all symbols in ascending order.
    pub fn universe(&self) -> impl Iterator<Item = S> + '_ {
        self.positions.left_values().copied()
    }
}

impl Alphabet<char> {
    /// The alphabet `{'0', '1'}` over which binary numbers are written.
    pub fn binary() -> Self {
        Self::new(['0', '1'])
    }
}

impl<S: Symbol> PartialEq for Alphabet<S> {
    fn eq(&self, other: &Self) -> bool {
        self.universe().eq(other.universe())
    }
}
impl<S: Symbol> Eq for Alphabet<S> {}

impl<S: Symbol> FromIterator<S> for Alphabet<S> {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<S: Symbol> Show for Alphabet<S> {
    fn show(&self) -> String {
        format!("{{{}}}", self.universe().map(|sym| sym.show()).join(", "))
    }
}
