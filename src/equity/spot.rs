use crate::Chips;
use crate::Probability;
use crate::Utility;

/// EV of getting `bet` more chips in with `equity` against a `pot`.
///
/// `equity * (pot + bet) - (1 - equity) * bet`, in big blinds.
pub fn ev(equity: Probability, pot: Chips, bet: Chips) -> Utility {
    equity * (pot + bet) - (1. - equity) * bet
}

/// A single betting decision: bet into a pot with some equity and
/// some chance the opponent folds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    pub equity: Probability,
    pub pot: Chips,
    pub bet: Chips,
    pub fold_equity: Probability,
}

impl Spot {
    pub fn new(equity: Probability, pot: Chips, bet: Chips) -> Self {
        Self {
            equity,
            pot,
            bet,
            fold_equity: 0.,
        }
    }
    pub fn with_fold_equity(self, fold_equity: Probability) -> Self {
        Self {
            fold_equity,
            ..self
        }
    }
    /// EV when called every time.
    pub fn called(&self) -> Utility {
        ev(self.equity, self.pot, self.bet)
    }
    /// EV blending the pot won outright when villain folds with the
    /// called EV when they don't.
    pub fn ev(&self) -> Utility {
        self.fold_equity * self.pot + (1. - self.fold_equity) * self.called()
    }
    /// Equity at which the called EV is zero.
    pub fn break_even(&self) -> Probability {
        let denom = self.pot + 2. * self.bet;
        if denom == 0. { 0. } else { self.bet / denom }
    }
    /// Rejects NaN and infinite inputs, and finite inputs whose EVs
    /// overflow. Range is otherwise unchecked.
    pub fn validate(&self) -> Result<(), String> {
        [
            ("equity", self.equity),
            ("pot", self.pot),
            ("bet", self.bet),
            ("fold_equity", self.fold_equity),
        ]
        .into_iter()
        .find(|(_, x)| !x.is_finite())
        .map_or(Ok(()), |(name, x)| Err(format!("{} must be finite, got {}", name, x)))?;
        [
            ("called EV", self.called()),
            ("blended EV", self.ev()),
            ("break-even", self.break_even()),
        ]
        .into_iter()
        .find(|(_, x)| !x.is_finite())
        .map_or(Ok(()), |(name, x)| Err(format!("{} overflowed to {}", name, x)))
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "equity {:.2}, pot {:.2} BB, bet {:.2} BB, fold equity {:.2}",
            self.equity, self.pot, self.bet, self.fold_equity
        )
    }
}
