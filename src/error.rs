use thiserror::Error;

/// Errors that can occur when declaring, building or driving an automaton.
///
/// States and symbols are stored through their `Debug` representation, which keeps this
/// type independent of the state and symbol types of the automaton that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// The declared 4-tuple is inconsistent, e.g. the initial state is not a state.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Describes which condition was violated.
        reason: String,
    },
    /// The transition rule produced a state which was never declared.
    #[error("transition rule maps ({state}, {symbol}) to {target}, which is not a state")]
    InvalidTransition {
        /// The state from which the transition originates.
        state: String,
        /// The symbol that is read.
        symbol: String,
        /// The undeclared state that was produced.
        target: String,
    },
    /// The modulus of a modulo automaton is not a positive integer.
    #[error("modulus must be a positive integer, got {value}")]
    InvalidModulus {
        /// The rejected value.
        value: String,
    },
    /// The length of a streak automaton is not a positive integer.
    #[error("streak length must be a positive integer, got {value}")]
    InvalidStreakLength {
        /// The rejected value.
        value: String,
    },
    /// A symbol that does not belong to the alphabet was read.
    #[error("symbol {symbol} is not in the alphabet")]
    SymbolNotInAlphabet {
        /// The rejected symbol.
        symbol: String,
    },
    /// Attempted to reset to a state that does not exist.
    #[error("{state} is not a state of the automaton")]
    InvalidState {
        /// The rejected state.
        state: String,
    },
}

impl AutomatonError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Raised when a batch run over a word stops at a symbol it cannot consume.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("run stopped at position {position}: {source}")]
pub struct RunError {
    /// Zero-based position of the symbol that could not be read.
    pub position: usize,
    /// The reason for which the symbol was rejected.
    pub source: AutomatonError,
}

/// Result type used throughout the crate.
pub type Result<T, E = AutomatonError> = std::result::Result<T, E>;
