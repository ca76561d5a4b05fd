//! Automata over the binary alphabet `{'0', '1'}`.
//!
//! Each automaton wraps a [`crate::automaton::Dfa`] and dereferences to it, so all
//! operations of the engine are available directly. The transition rules are exposed as
//! free functions, which makes it possible to check them independently of any automaton.

use std::{fmt::Debug, num::NonZeroUsize};

mod modulo;
pub use modulo::{modulo_step, ModuloAutomaton};

mod streak;
pub use streak::{streak_step, StreakAutomaton};

mod parity;
pub use parity::{parity_step, Parity, ParityAutomaton};

/// The largest modulus or streak length that the constructors accept. Larger values are
/// rejected with the same error as non-positive ones, as their transition tables would not
/// fit into memory.
pub const MAX_PARAMETER: usize = 1 << 24;

/// A numeric value that parameterizes an automaton, e.g. the modulus of a
/// [`ModuloAutomaton`]. Only positive integers are accepted as parameters, this trait decides
/// whether a given value is one.
pub trait Parameter: Copy + Debug {
    /// Returns the value as a positive integer, or `None` if it is zero, negative, not an
    /// integer or too large to be represented.
    fn positive_integer(self) -> Option<NonZeroUsize>;
}

macro_rules! integer_parameter {
    ($($t:ty),*) => {
        $(
            impl Parameter for $t {
                fn positive_integer(self) -> Option<NonZeroUsize> {
                    usize::try_from(self).ok().and_then(NonZeroUsize::new)
                }
            }
        )*
    };
}

integer_parameter!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Parameter for f64 {
    fn positive_integer(self) -> Option<NonZeroUsize> {
        if !self.is_finite() || self.fract() != 0.0 || self < 1.0 || self >= usize::MAX as f64 {
            return None;
        }
        NonZeroUsize::new(self as usize)
    }
}

impl Parameter for f32 {
    fn positive_integer(self) -> Option<NonZeroUsize> {
        f64::from(self).positive_integer()
    }
}

fn bit(symbol: char) -> usize {
    match symbol {
        '1' => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{ModuloAutomaton, Parameter, StreakAutomaton, MAX_PARAMETER};
    use crate::error::AutomatonError;

    #[test]
    fn only_positive_integers_are_parameters() {
        assert_eq!(3u8.positive_integer().map(|n| n.get()), Some(3));
        assert_eq!(7i64.positive_integer().map(|n| n.get()), Some(7));
        assert_eq!(12.0f64.positive_integer().map(|n| n.get()), Some(12));
        assert_eq!(2.0f32.positive_integer().map(|n| n.get()), Some(2));

        assert_eq!(0usize.positive_integer(), None);
        assert_eq!((-1i32).positive_integer(), None);
        assert_eq!(1.5f64.positive_integer(), None);
        assert_eq!(0.0f64.positive_integer(), None);
        assert_eq!((-4.0f64).positive_integer(), None);
        assert_eq!(f64::NAN.positive_integer(), None);
        assert_eq!(f64::INFINITY.positive_integer(), None);
        assert_eq!(1e300f64.positive_integer(), None);
    }

    #[test]
    fn oversized_parameters_are_errors() {
        assert_eq!(
            ModuloAutomaton::new(usize::MAX),
            Err(AutomatonError::InvalidModulus {
                value: usize::MAX.to_string()
            })
        );
        assert_eq!(
            StreakAutomaton::new(usize::MAX),
            Err(AutomatonError::InvalidStreakLength {
                value: usize::MAX.to_string()
            })
        );
        assert!(ModuloAutomaton::new(1u64 << 40).is_err());
        assert!(StreakAutomaton::new(MAX_PARAMETER + 1).is_err());
        assert!(ModuloAutomaton::new(u128::MAX).is_err());
    }
}
