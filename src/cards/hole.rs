use super::card::Card;
use super::class::Class;
use crate::Arbitrary;

/// A player's two private hole cards, stored high card first.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> (Card, Card) {
        (self.0, self.1)
    }
    /// The starting-hand class this specific combo belongs to.
    pub fn class(&self) -> Class {
        Class::from(*self)
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = String;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a.cmp(&b) {
            std::cmp::Ordering::Equal => Err(format!("duplicate card: {}", a)),
            std::cmp::Ordering::Greater => Ok(Self(a, b)),
            std::cmp::Ordering::Less => Ok(Self(b, a)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] => Self::try_from((*a, *b)),
            _ => Err("hole must contain exactly two cards".into()),
        }
    }
}

impl Arbitrary for Hole {
    fn random() -> Self {
        let a = Card::random();
        loop {
            let b = Card::random();
            if let Ok(hole) = Self::try_from((a, b)) {
                return hole;
            }
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
