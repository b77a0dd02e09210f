use super::action::Action;
use super::policy::Choice;
use super::policy::Policy;
use super::position::Position;
use super::report::Report;
use crate::STACK;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PREFLOP: LazyLock<Book> = LazyLock::new(|| {
    use Action::*;
    Book::new("preflop", "AhKd or 72o")
        .with(Position::SB, "AhKd", &[(Raise, 0.8, 0.9), (Call, 0.1, 0.3), (Fold, 0.1, 0.0)])
        .with(Position::SB, "72o", &[(Raise, 0.1, 0.2), (Call, 0.1, 0.1), (Fold, 0.8, 0.0)])
        .with(Position::BB, "AhKd", &[(Raise, 0.6, 0.7), (Call, 0.3, 0.4), (Fold, 0.1, 0.0)])
        .with(Position::BB, "72o", &[(Raise, 0.0, 0.0), (Call, 0.2, 0.1), (Fold, 0.8, 0.0)])
});

// SB is the preflop raiser and acts last; BB acts first and may lead.
static FLOP: LazyLock<Book> = LazyLock::new(|| {
    use Action::*;
    Book::new("flop", "T72r or AK5r")
        .with(Position::SB, "T72r", &[(Bet, 0.75, 1.2), (Check, 0.25, 0.9)])
        .with(Position::SB, "AK5r", &[(Bet, 0.85, 1.5), (Check, 0.15, 1.1)])
        .with(Position::SB, "986s", &[(Bet, 0.35, 0.8), (Check, 0.65, 0.7)])
        .with(Position::SB, "KK4r", &[(Bet, 0.9, 1.3), (Check, 0.1, 1.0)])
        .with(Position::SB, "JT9m", &[(Bet, 0.25, 0.6), (Check, 0.75, 0.6)])
        .with(Position::BB, "T72r", &[(Bet, 0.05, 0.3), (Check, 0.95, 0.5)])
        .with(Position::BB, "AK5r", &[(Bet, 0.0, 0.0), (Check, 1.0, 0.6)])
        .with(Position::BB, "986s", &[(Bet, 0.2, 0.6), (Check, 0.8, 0.5)])
        .with(Position::BB, "KK4r", &[(Bet, 0.0, 0.0), (Check, 1.0, 0.4)])
        .with(Position::BB, "JT9m", &[(Bet, 0.15, 0.5), (Check, 0.85, 0.5)])
});

/// A static table of heads-up strategies for one betting round.
///
/// Keys are the ad hoc strings the table was typed with (`"AhKd"`, `"72o"`,
/// `"T72r"`). A lookup matches them exactly after trimming whitespace:
/// `"AKo"` does not find `"AhKd"`, and `"ahkd"` finds nothing.
#[derive(Debug)]
pub struct Book {
    street: &'static str,
    hint: &'static str,
    spots: BTreeMap<(Position, String), Policy>,
}

impl Book {
    /// Preflop strategies, keyed by hole cards.
    pub fn preflop() -> &'static Self {
        &PREFLOP
    }
    /// Flop strategies, keyed by board texture.
    pub fn flop() -> &'static Self {
        &FLOP
    }

    pub fn street(&self) -> &'static str {
        self.street
    }
    /// Exact-key lookup. `None` when the spot was never typed in.
    pub fn lookup(&self, position: Position, key: &str) -> Option<&Policy> {
        self.spots.get(&(position, key.trim().to_string()))
    }
    /// Lookup from raw user input. An unparseable position is a miss.
    pub fn report(&self, position: &str, key: &str) -> Report {
        let key = key.trim();
        match Position::try_from(position) {
            Err(e) => {
                log::debug!("{} lookup with bad position: {}", self.street, e);
                Report::miss(self.fallback())
            }
            Ok(position) => match self.lookup(position, key) {
                None => {
                    log::debug!("{} miss for {} {}", self.street, position, key);
                    Report::miss(self.fallback())
                }
                Some(policy) => Report::hit(self.header(position, key), policy),
            },
        }
    }
    pub fn header(&self, position: Position, key: &str) -> String {
        format!(
            "GTO Strategies for {} in {} ({} BB):",
            key.trim(),
            position,
            STACK
        )
    }
    pub fn fallback(&self) -> String {
        format!("No strategy found. Try {}.", self.hint)
    }
    /// Every stored spot, sorted by position then key.
    pub fn spots(&self) -> impl Iterator<Item = (Position, &str, &Policy)> {
        self.spots
            .iter()
            .map(|((position, key), policy)| (*position, key.as_str(), policy))
    }
    /// Keys typed for a given position.
    pub fn keys(&self, position: Position) -> Vec<&str> {
        self.spots()
            .filter(|(p, _, _)| *p == position)
            .map(|(_, key, _)| key)
            .collect()
    }

    fn new(street: &'static str, hint: &'static str) -> Self {
        Self {
            street,
            hint,
            spots: BTreeMap::new(),
        }
    }
    fn with(mut self, position: Position, key: &str, rows: &[(Action, f32, f32)]) -> Self {
        let policy: Policy = rows
            .iter()
            .map(|&(action, frequency, ev)| Choice::new(action, frequency, ev))
            .collect::<Vec<_>>()
            .into();
        self.spots.insert((position, key.to_string()), policy);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(policy: &Policy) -> Vec<(Action, f32, f32)> {
        policy
            .choices()
            .iter()
            .map(|c| (c.action, c.frequency, c.ev))
            .collect()
    }

    #[test]
    fn preflop_entries_verbatim() {
        use Action::*;
        let book = Book::preflop();
        let sb_ak = book.lookup(Position::SB, "AhKd").unwrap();
        let sb_72 = book.lookup(Position::SB, "72o").unwrap();
        let bb_ak = book.lookup(Position::BB, "AhKd").unwrap();
        let bb_72 = book.lookup(Position::BB, "72o").unwrap();
        assert!(rows(sb_ak) == vec![(Raise, 0.8, 0.9), (Call, 0.1, 0.3), (Fold, 0.1, 0.0)]);
        assert!(rows(sb_72) == vec![(Raise, 0.1, 0.2), (Call, 0.1, 0.1), (Fold, 0.8, 0.0)]);
        assert!(rows(bb_ak) == vec![(Raise, 0.6, 0.7), (Call, 0.3, 0.4), (Fold, 0.1, 0.0)]);
        assert!(rows(bb_72) == vec![(Raise, 0.0, 0.0), (Call, 0.2, 0.1), (Fold, 0.8, 0.0)]);
    }

    #[test]
    fn preflop_has_four_spots() {
        assert!(Book::preflop().spots().count() == 4);
    }

    #[test]
    fn flop_covers_both_seats() {
        let book = Book::flop();
        assert!(book.keys(Position::SB) == book.keys(Position::BB));
        assert!(book.lookup(Position::SB, "T72r").map(|p| p.choices().len()) == Some(2));
    }

    #[test]
    fn lookup_trims_but_is_exact() {
        let book = Book::preflop();
        assert!(book.lookup(Position::SB, "  AhKd ").is_some());
        assert!(book.lookup(Position::SB, "ahkd").is_none());
        assert!(book.lookup(Position::SB, "KdAh").is_none());
        assert!(book.lookup(Position::SB, "AKo").is_none());
    }

    #[test]
    fn report_hit() {
        let report = Book::preflop().report("SB", "AhKd");
        assert!(report.found());
        assert!(report.summary() == "GTO Strategies for AhKd in SB (100 BB):");
        assert!(report.lines()[0] == "Raise: 80%, EV: 0.90 BB");
        assert!(report.lines()[1] == "Call: 10%, EV: 0.30 BB");
        assert!(report.lines()[2] == "Fold: 10%, EV: 0.00 BB");
    }

    #[test]
    fn report_miss() {
        let report = Book::preflop().report("SB", "QQ");
        assert!(!report.found());
        assert!(report.summary() == "No strategy found. Try AhKd or 72o.");
        assert!(report.lines().is_empty());
    }

    #[test]
    fn report_normalizes_seat_only() {
        assert!(Book::preflop().report("sb", "AhKd").found());
        assert!(Book::preflop().report(" bb ", "72o").found());
        assert!(!Book::preflop().report("sb", "ahkd").found());
    }

    #[test]
    fn report_bad_position_is_miss() {
        let report = Book::preflop().report("UTG", "AhKd");
        assert!(!report.found());
        let report = Book::flop().report("BTN", "T72r");
        assert!(report.summary() == "No strategy found. Try T72r or AK5r.");
    }
}
