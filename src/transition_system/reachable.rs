use std::collections::VecDeque;

use crate::math::Set;

use super::TransitionSystem;

/// Type alias for a minimal representative of a state which is its length-lexicographically minimal
/// access sequence and its state index.
pub type MinimalRepresentative<Ts> = (
    Vec<<Ts as TransitionSystem>::Symbol>,
    <Ts as TransitionSystem>::StateIndex,
);

/// Struct that can return the minimal representatives of a transition system. A minimal representative
/// for a state `q` of some transition system is the length-lexicographically minimal string with which
/// `q` can be reached from a given state.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<Ts: TransitionSystem> {
    ts: Ts,
    seen: Set<Ts::StateIndex>,
    queue: VecDeque<MinimalRepresentative<Ts>>,
}

#[allow(missing_docs)]
impl<Ts> MinimalRepresentatives<Ts>
where
    Ts: TransitionSystem,
{
    pub fn new(ts: Ts, origin: Ts::StateIndex) -> Self {
        let seen = Set::from_iter([origin]);
        let queue = [(vec![], origin)].into_iter().collect();
        Self { ts, seen, queue }
    }
}

impl<Ts> Iterator for MinimalRepresentatives<Ts>
where
    Ts: TransitionSystem,
{
    type Item = MinimalRepresentative<Ts>;

    fn next(&mut self) -> Option<Self::Item> {
        let (access, q) = self.queue.pop_front()?;
        for sym in self.ts.alphabet().universe() {
            let Some(p) = self.ts.successor(q, sym) else {
                continue;
            };
            if self.seen.insert(p) {
                let mut new_access = access.clone();
                new_access.push(sym);
                self.queue.push_back((new_access, p));
            }
        }
        Some((access, q))
    }
}

/// Allows iterating over the reachable states of a transition system.
#[derive(Debug, Clone)]
pub struct ReachableStates<Ts: TransitionSystem>(MinimalRepresentatives<Ts>);

#[allow(missing_docs)]
impl<Ts> ReachableStates<Ts>
where
    Ts: TransitionSystem,
{
    pub fn new(ts: Ts, origin: Ts::StateIndex) -> Self {
        Self(MinimalRepresentatives::new(ts, origin))
    }
}

impl<Ts> Iterator for ReachableStates<Ts>
where
    Ts: TransitionSystem,
{
    type Item = Ts::StateIndex;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, q)| q)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::prelude::*;

    fn chain() -> Dfa<usize, char> {
        Dfa::new(0..3, Alphabet::new(['a', 'b']), 0, [2], |q, sym| match (q, sym) {
            (0, 'a') => 1,
            (1, 'a') | (2, _) => 2,
            _ => 0,
        })
        .unwrap()
    }

    #[test]
    fn reachable_states() {
        let dfa = chain();

        assert_eq!(
            dfa.minimal_representatives().collect::<Vec<_>>(),
            vec![(vec![], 0), (vec!['a'], 1), (vec!['a', 'a'], 2)]
        );
        assert_eq!(dfa.reachable_states().collect_vec(), vec![0, 1, 2]);
        assert_eq!(dfa.reachable_states_from(2).collect_vec(), vec![2]);
    }

    #[test]
    fn unreachable_states_are_skipped() {
        let dfa = Dfa::new(0..4usize, Alphabet::new(['a']), 0, [3], |q, _| match q {
            0 => 1,
            1 => 0,
            _ => 3,
        })
        .unwrap();

        assert_eq!(dfa.reachable_states().collect_vec(), vec![0, 1]);
        assert_eq!(dfa.reachable_states_from(2).collect_vec(), vec![2, 3]);
    }
}
