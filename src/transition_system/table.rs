use tracing::{debug, warn};

use crate::{
    alphabet::{Alphabet, Symbol},
    error::{AutomatonError, Result},
};

use super::{IndexType, StateSpace};

/// A complete transition table. It holds one entry for every pair of a state and a
/// symbol, rows are indexed by state positions and columns by symbol positions. Entries
/// are the positions of target states, so looking up a transition never touches the
/// states themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    columns: usize,
    targets: Vec<usize>,
}

impl TransitionTable {
    /// Materializes the table by evaluating `rule` on every state/symbol pair, states in
    /// ascending order and, per state, symbols in ascending order.
    ///
    /// Fails with [`AutomatonError::InvalidTransition`] as soon as `rule` produces a state
    /// that is not contained in `states`, and with [`AutomatonError::InvalidConfiguration`]
    /// if the table can not be allocated.
    pub fn generate<Q, S, F>(states: &StateSpace<Q>, alphabet: &Alphabet<S>, rule: F) -> Result<Self>
    where
        Q: IndexType,
        S: Symbol,
        F: Fn(Q, S) -> Q,
    {
        let columns = alphabet.size();
        let entries = states
            .size()
            .checked_mul(columns)
            .ok_or_else(|| AutomatonError::configuration("transition table size overflows"))?;
        let mut targets = Vec::new();
        targets.try_reserve_exact(entries).map_err(|_| {
            warn!("could not allocate transition table with {entries} entries");
            AutomatonError::configuration(format!(
                "cannot allocate a transition table with {entries} entries"
            ))
        })?;

        for state in states.iter() {
            for symbol in alphabet.universe() {
                let target = rule(state, symbol);
                let Some(position) = states.position(target) else {
                    warn!("transition rule maps ({state:?}, {symbol:?}) to undeclared state {target:?}");
                    return Err(AutomatonError::InvalidTransition {
                        state: format!("{state:?}"),
                        symbol: format!("{symbol:?}"),
                        target: format!("{target:?}"),
                    });
                };
                targets.push(position);
            }
        }

        debug!(
            "generated transition table with {} states and {} symbols",
            states.size(),
            columns
        );
        Ok(Self { columns, targets })
    }

    /// Returns the position of the state reached from the state at position `state` when
    /// reading the symbol at position `symbol`.
    #[inline(always)]
    pub fn target(&self, state: usize, symbol: usize) -> Option<usize> {
        if symbol >= self.columns {
            return None;
        }
        let index = state.checked_mul(self.columns)?.checked_add(symbol)?;
        self.targets.get(index).copied()
    }

    // callers guarantee that both positions are in range
    pub(crate) fn entry(&self, state: usize, symbol: usize) -> usize {
        self.targets[state * self.columns + symbol]
    }

    /// Returns the number of rows, i.e. the number of states.
    pub fn rows(&self) -> usize {
        self.targets.len().checked_div(self.columns).unwrap_or(0)
    }

    /// Returns the number of columns, i.e. the number of symbols.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the total number of entries.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Gives the target positions of the state at position `state`, one per symbol.
    pub fn row(&self, state: usize) -> Option<&[usize]> {
        let start = state.checked_mul(self.columns)?;
        self.targets.get(start..start.checked_add(self.columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_every_entry() {
        let states = StateSpace::new(0..3usize);
        let alphabet = Alphabet::new(['a', 'b']);
        let table =
            TransitionTable::generate(&states, &alphabet, |q, sym| if sym == 'a' { (q + 1) % 3 } else { q })
                .unwrap();

        assert_eq!(table.len(), 6);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.columns(), 2);
        assert_eq!(table.target(2, 0), Some(0));
        assert_eq!(table.target(2, 1), Some(2));
        assert_eq!(table.target(3, 0), None);
        assert_eq!(table.target(0, 2), None);
        assert_eq!(table.row(1), Some(&[2, 1][..]));
    }

    #[test]
    fn out_of_range_lookups_are_none() {
        let states = StateSpace::new(0..3usize);
        let table = TransitionTable::generate(&states, &Alphabet::new(['0', '1']), |q, _| q).unwrap();

        assert_eq!(table.target(usize::MAX, 0), None);
        assert_eq!(table.target(usize::MAX / 2, 1), None);
        assert_eq!(table.target(0, usize::MAX), None);
        assert_eq!(table.row(usize::MAX), None);
        assert_eq!(table.row(usize::MAX / 2), None);
        assert_eq!(table.entry(2, 1), 2);
    }

    #[test]
    fn rejects_undeclared_targets() {
        let states = StateSpace::new([10u32, 20]);
        let alphabet = Alphabet::new(['x']);
        let result = TransitionTable::generate(&states, &alphabet, |q, _| q + 5);

        assert_eq!(
            result,
            Err(AutomatonError::InvalidTransition {
                state: "10".into(),
                symbol: "'x'".into(),
                target: "15".into(),
            })
        );
    }
}
