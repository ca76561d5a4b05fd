use owo_colors::OwoColorize;

use crate::{alphabet::Symbol, transition_system::IndexType, Show};

use super::Dfa;

impl<Q: IndexType + Show, S: Symbol> Dfa<Q, S> {
    /// Returns a string representation of the transition table, one row per state and one
    /// column per symbol. The initial state is marked with `→`, accepting states with `*`.
    ///
    /// # Example
    /// ```
    /// use dfa_engine::prelude::*;
    ///
    /// let parity = ParityAutomaton::new();
    /// let table = parity.transition_table();
    /// assert!(table.contains("→*even"));
    /// assert!(table.contains("odd"));
    /// ```
    pub fn transition_table(&self) -> String {
        self.build_transition_table(|_, label| label)
    }

    /// Like [`Self::transition_table`], but the current state is highlighted and accepting
    /// states are colored using ANSI escape codes.
    pub fn highlighted_transition_table(&self) -> String {
        self.build_transition_table(|position, label| {
            if position == self.current {
                label.on_yellow().bold().to_string()
            } else if self.accepting.contains(position) {
                label.green().to_string()
            } else {
                label
            }
        })
    }

    fn build_transition_table<D>(&self, decorate: D) -> String
    where
        D: Fn(usize, String) -> String,
    {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.universe().map(|s| s.show())),
        );
        for (position, state) in self.states.iter().enumerate() {
            let marker = match (position == self.initial, self.accepting.contains(position)) {
                (true, true) => "→*",
                (true, false) => "→",
                (false, true) => "*",
                (false, false) => "",
            };
            let mut row = vec![decorate(position, format!("{marker}{}", state.show()))];
            if let Some(targets) = self.table.row(position) {
                row.extend(targets.iter().map(|&target| self.state(target).show()));
            }
            builder.push_record(row);
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn table_lists_all_transitions() {
        let modulo = ModuloAutomaton::new(3).unwrap();
        let table = modulo.transition_table();
        let rows: Vec<&str> = table.lines().filter(|line| line.contains('│')).collect();

        assert_eq!(rows.len(), 4);
        let cells = |line: &str| {
            line.split('│')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        };
        assert_eq!(cells(rows[0]), vec!["State", "0", "1"]);
        assert_eq!(cells(rows[1]), vec!["→*0", "0", "1"]);
        assert_eq!(cells(rows[2]), vec!["1", "2", "0"]);
        assert_eq!(cells(rows[3]), vec!["2", "1", "2"]);
    }

    #[test]
    fn highlighting_marks_current_state() {
        let mut streak = StreakAutomaton::new(2).unwrap();
        streak.run("11".chars()).unwrap();
        let plain = streak.transition_table();
        let highlighted = streak.highlighted_transition_table();

        assert!(!plain.contains('\u{1b}'));
        assert!(highlighted.contains('\u{1b}'));
        assert!(highlighted.contains("*2"));
    }
}
