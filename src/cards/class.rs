use super::hole::Hole;
use super::rank::Rank;
use crate::GRID;

/// One of the 169 strategically distinct starting hands.
///
/// A class forgets the specific suits of a [`Hole`] and keeps only the two
/// ranks plus whether they share a suit: `"AA"`, `"AKs"`, `"72o"`.
///
/// # Grid
///
/// Classes tile the usual 13×13 matrix with aces in the first row and column.
/// Pairs sit on the diagonal, suited hands above it, offsuit hands below it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Class {
    hi: Rank,
    lo: Rank,
    suited: bool,
}

impl Class {
    pub fn pair(rank: Rank) -> Self {
        Self {
            hi: rank,
            lo: rank,
            suited: false,
        }
    }
    /// Two unpaired ranks in either order. Panics if they are equal.
    pub fn unpaired(a: Rank, b: Rank, suited: bool) -> Self {
        assert!(a != b, "unpaired class needs distinct ranks");
        Self {
            hi: a.max(b),
            lo: a.min(b),
            suited,
        }
    }
    pub fn is_pair(&self) -> bool {
        self.hi == self.lo
    }
    /// Number of specific two-card combos in this class.
    pub fn combos(&self) -> usize {
        match (self.is_pair(), self.suited) {
            (true, _) => 6,
            (false, true) => 4,
            (false, false) => 12,
        }
    }
    /// (row, col) on the starting-hand matrix.
    pub fn cell(&self) -> (usize, usize) {
        let hi = Self::axis(self.hi);
        let lo = Self::axis(self.lo);
        match self.suited {
            true => (hi, lo),
            false => (lo, hi),
        }
    }
    /// Row-major position on the starting-hand matrix.
    pub fn index(&self) -> usize {
        let (row, col) = self.cell();
        row * GRID + col
    }
    /// Every class in row-major matrix order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID).flat_map(|row| (0..GRID).map(move |col| Self::from((row, col))))
    }

    fn axis(rank: Rank) -> usize {
        GRID - 1 - u8::from(rank) as usize
    }
    fn rank(axis: usize) -> Rank {
        Rank::from((GRID - 1 - axis) as u8)
    }
}

/// (row, col) isomorphism
impl From<(usize, usize)> for Class {
    fn from((row, col): (usize, usize)) -> Self {
        debug_assert!(row < GRID && col < GRID);
        match row.cmp(&col) {
            std::cmp::Ordering::Equal => Self::pair(Self::rank(row)),
            std::cmp::Ordering::Less => Self::unpaired(Self::rank(row), Self::rank(col), true),
            std::cmp::Ordering::Greater => Self::unpaired(Self::rank(row), Self::rank(col), false),
        }
    }
}

impl From<Hole> for Class {
    fn from(hole: Hole) -> Self {
        let (a, b) = hole.cards();
        match a.rank() == b.rank() {
            true => Self::pair(a.rank()),
            false => Self::unpaired(a.rank(), b.rank(), a.suit() == b.suit()),
        }
    }
}

/// str isomorphism
/// "AA", "AKs", "72o"; rank order is normalized so "KAs" is AKs
impl TryFrom<&str> for Class {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        match chars.as_slice() {
            [a, b] => {
                let (a, b) = (Rank::try_from(*a)?, Rank::try_from(*b)?);
                match a == b {
                    true => Ok(Self::pair(a)),
                    false => Err(format!("unpaired class needs s or o suffix: {}", s)),
                }
            }
            [a, b, x] => {
                let (a, b) = (Rank::try_from(*a)?, Rank::try_from(*b)?);
                if a == b {
                    return Err(format!("pairs take no suffix: {}", s));
                }
                match x {
                    's' | 'S' => Ok(Self::unpaired(a, b, true)),
                    'o' | 'O' => Ok(Self::unpaired(a, b, false)),
                    _ => Err(format!("invalid class suffix: {}", x)),
                }
            }
            _ => Err(format!("invalid class str: {}", s)),
        }
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.is_pair(), self.suited) {
            (true, _) => write!(f, "{}{}", self.hi, self.lo),
            (false, true) => write!(f, "{}{}s", self.hi, self.lo),
            (false, false) => write!(f, "{}{}o", self.hi, self.lo),
        }
    }
}
