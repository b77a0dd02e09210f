use crate::equity::Equities;
use crate::strategy::Book;

/// The immutable tables every handler reads from.
#[derive(Debug, Clone, Copy)]
pub struct Tables {
    pub preflop: &'static Book,
    pub flop: &'static Book,
    pub equities: &'static Equities,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            preflop: Book::preflop(),
            flop: Book::flop(),
            equities: Equities::preflop(),
        }
    }
}
