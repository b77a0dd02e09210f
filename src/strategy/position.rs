/// Seat in a heads-up hand.
///
/// Preflop the small blind acts first; postflop it is in position.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Position {
    #[default]
    SB,
    BB,
}

/// str isomorphism
/// Case-insensitive and trimmed, so `"sb"` finds the same spots as `"SB"`.
/// Hand and board keys stay exact; only the seat name is normalized.
impl TryFrom<&str> for Position {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "SB" => Ok(Self::SB),
            "BB" => Ok(Self::BB),
            _ => Err(format!("invalid position: {}", s)),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::SB => write!(f, "SB"),
            Self::BB => write!(f, "BB"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert!(Position::try_from("sb") == Ok(Position::SB));
        assert!(Position::try_from(" BB ") == Ok(Position::BB));
    }

    #[test]
    fn rejects_unknown() {
        assert!(Position::try_from("BTN").is_err());
        assert!(Position::try_from("").is_err());
    }
}
