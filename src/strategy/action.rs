/// A betting decision as it appears in the strategy tables.
///
/// Unlike a game-engine action this carries no chip amount: the tables
/// only name the kind of decision and attach a frequency and EV to it.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Raise,
    Bet,
    Call,
    Check,
    Fold,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Raise => "Raise",
            Action::Bet => "Bet",
            Action::Call => "Call",
            Action::Check => "Check",
            Action::Fold => "Fold",
        }
    }
}

impl TryFrom<&str> for Action {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "RAISE" => Ok(Action::Raise),
            "BET" => Ok(Action::Bet),
            "CALL" => Ok(Action::Call),
            "CHECK" => Ok(Action::Check),
            "FOLD" => Ok(Action::Fold),
            _ => Err(format!("invalid action: {}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}
