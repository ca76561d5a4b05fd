use crate::math::Map;

/// Encapsulates what is necessary for a type to be usable as a state index in a [`super::TransitionSystem`].
pub trait IndexType: Copy + std::hash::Hash + std::fmt::Debug + Eq + Ord {}
impl<T: Copy + std::hash::Hash + std::fmt::Debug + Eq + Ord> IndexType for T {}

/// The finite set of states of an automaton. Each state is assigned a dense position in
/// `0..size`, which is its rank among all states. Everything that is stored per state
/// (transition table rows, the accepting set, the current state) works on positions, the
/// states themselves only appear at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSpace<Q: IndexType> {
    states: Vec<Q>,
    positions: Map<Q, usize>,
}

impl<Q: IndexType> StateSpace<Q> {
    /// Collects the given states, sorting them and removing duplicates.
    pub fn new(states: impl IntoIterator<Item = Q>) -> Self {
        let mut states: Vec<Q> = states.into_iter().collect();
        states.sort_unstable();
        states.dedup();
        let positions = states
            .iter()
            .enumerate()
            .map(|(position, &state)| (state, position))
            .collect();
        Self { states, positions }
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns true if there are no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns true if `state` is a member of the set.
    pub fn contains(&self, state: Q) -> bool {
        self.positions.contains_key(&state)
    }

    /// Returns the dense position of `state`, if it exists.
    pub fn position(&self, state: Q) -> Option<usize> {
        self.positions.get(&state).copied()
    }

    /// Returns the state at the given position.
    pub fn state_at(&self, position: usize) -> Option<Q> {
        self.states.get(position).copied()
    }

    /// Iterates over all states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Q> + '_ {
        self.states.iter().copied()
    }

    /// Gives the states as a slice in ascending order.
    pub fn as_slice(&self) -> &[Q] {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::StateSpace;

    #[test]
    fn positions_are_ranks() {
        let space = StateSpace::new([7u32, 3, 7, 5]);
        assert_eq!(space.size(), 3);
        assert_eq!(space.as_slice(), &[3, 5, 7]);
        assert_eq!(space.position(5), Some(1));
        assert_eq!(space.position(4), None);
        assert_eq!(space.state_at(2), Some(7));
        assert!(space.contains(3));
        assert!(!StateSpace::<u8>::new([]).contains(0));
    }
}
