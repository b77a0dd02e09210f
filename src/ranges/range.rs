use crate::Probability;
use crate::cards::Class;
use crate::cards::Rank;

/// A set of starting-hand classes written in the usual shorthand.
///
/// Tokens are comma-separated:
/// - `"JJ"` one pair, `"JJ+"` that pair and every higher one, `"22-55"` a span
/// - `"AKs"`, `"AKo"`, or `"AK"` for both
/// - `"ATs+"` raises the kicker up to one below the top card
/// - `"A2s-A5s"` spans kickers under a fixed top card
///
/// Classes are kept once each, in matrix order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Range(Vec<Class>);

/// Token shape before it is expanded into classes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Shape {
    Pair(Rank),
    /// (hi, lo, suited) where `None` means both.
    Unpaired(Rank, Rank, Option<bool>),
}

impl Range {
    /// Lenient expansion. Tokens that fail to parse contribute nothing,
    /// so an unrecognised range is empty.
    pub fn expand(s: &str) -> Self {
        Self::from(
            Self::tokens(s)
                .filter_map(|t| {
                    Self::token(t)
                        .inspect_err(|e| log::debug!("skipping range token {:?}: {}", t, e))
                        .ok()
                })
                .flatten()
                .collect::<Vec<_>>(),
        )
    }
    /// Strict expansion. Fails on the first bad token.
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::tokens(s)
            .map(Self::token)
            .collect::<Result<Vec<_>, _>>()
            .map(|classes| Self::from(classes.into_iter().flatten().collect::<Vec<_>>()))
    }
    pub fn classes(&self) -> &[Class] {
        &self.0
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn contains(&self, class: &Class) -> bool {
        self.0.contains(class)
    }
    /// Number of specific two-card combos covered.
    pub fn combos(&self) -> usize {
        self.0.iter().map(Class::combos).sum()
    }
    /// Share of all 1326 starting combos covered.
    pub fn fraction(&self) -> Probability {
        self.combos() as Probability / 1326.
    }

    fn tokens(s: &str) -> impl Iterator<Item = &str> {
        s.split(',').map(str::trim).filter(|t| !t.is_empty())
    }
    fn token(s: &str) -> Result<Vec<Class>, String> {
        if let Some((a, b)) = s.split_once('-') {
            Self::span(Self::shape(a)?, Self::shape(b)?)
        } else if let Some(base) = s.strip_suffix('+') {
            Ok(Self::plus(Self::shape(base)?))
        } else {
            Ok(Self::single(Self::shape(s)?))
        }
    }
    fn shape(s: &str) -> Result<Shape, String> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        let (a, b) = match chars.as_slice() {
            [a, b] | [a, b, _] => (Rank::try_from(*a)?, Rank::try_from(*b)?),
            _ => return Err(format!("invalid range token: {}", s)),
        };
        let suited = match chars.get(2) {
            None => None,
            Some('s' | 'S') => Some(true),
            Some('o' | 'O') => Some(false),
            Some(x) => return Err(format!("invalid suffix: {}", x)),
        };
        match (a == b, suited) {
            (true, None) => Ok(Shape::Pair(a)),
            (true, Some(_)) => Err(format!("pairs take no suffix: {}", s)),
            (false, _) => Ok(Shape::Unpaired(a.max(b), a.min(b), suited)),
        }
    }
    fn single(shape: Shape) -> Vec<Class> {
        match shape {
            Shape::Pair(r) => vec![Class::pair(r)],
            Shape::Unpaired(hi, lo, suited) => Self::both(hi, lo, suited),
        }
    }
    fn plus(shape: Shape) -> Vec<Class> {
        match shape {
            Shape::Pair(r) => Rank::all()
                .into_iter()
                .filter(|x| *x >= r)
                .map(Class::pair)
                .collect(),
            Shape::Unpaired(hi, lo, suited) => Rank::all()
                .into_iter()
                .filter(|x| *x >= lo && *x < hi)
                .flat_map(|x| Self::both(hi, x, suited))
                .collect(),
        }
    }
    fn span(a: Shape, b: Shape) -> Result<Vec<Class>, String> {
        match (a, b) {
            (Shape::Pair(x), Shape::Pair(y)) => Ok(Rank::all()
                .into_iter()
                .filter(|r| *r >= x.min(y) && *r <= x.max(y))
                .map(Class::pair)
                .collect()),
            (Shape::Unpaired(h1, l1, s1), Shape::Unpaired(h2, l2, s2)) if h1 == h2 && s1 == s2 => {
                Ok(Rank::all()
                    .into_iter()
                    .filter(|r| *r >= l1.min(l2) && *r <= l1.max(l2))
                    .flat_map(|r| Self::both(h1, r, s1))
                    .collect())
            }
            _ => Err("span ends must share a shape and top card".into()),
        }
    }
    fn both(hi: Rank, lo: Rank, suited: Option<bool>) -> Vec<Class> {
        match suited {
            Some(s) => vec![Class::unpaired(hi, lo, s)],
            None => vec![Class::unpaired(hi, lo, true), Class::unpaired(hi, lo, false)],
        }
    }
}

impl From<Vec<Class>> for Range {
    fn from(mut classes: Vec<Class>) -> Self {
        classes.sort_by_key(Class::index);
        classes.dedup();
        Self(classes)
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(range: &Range) -> Vec<String> {
        range.classes().iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn pairs_plus() {
        let range = Range::expand("JJ+");
        assert!(names(&range) == vec!["AA", "KK", "QQ", "JJ"]);
        assert!(range.combos() == 24);
    }

    #[test]
    fn pair_span_either_order() {
        assert!(Range::expand("22-44") == Range::expand("44-22"));
        assert!(Range::expand("22-44").combos() == 18);
    }

    #[test]
    fn suited_kickers_plus() {
        let range = Range::expand("ATs+");
        assert!(names(&range) == vec!["AKs", "AQs", "AJs", "ATs"]);
        assert!(range.combos() == 16);
    }

    #[test]
    fn kicker_span() {
        let range = Range::expand("A2s-A5s");
        assert!(names(&range) == vec!["A5s", "A4s", "A3s", "A2s"]);
    }

    #[test]
    fn unsuffixed_is_both() {
        let range = Range::expand("AK");
        assert!(range.combos() == 16);
        assert!(range.contains(&Class::try_from("AKs").unwrap()));
        assert!(range.contains(&Class::try_from("AKo").unwrap()));
    }

    #[test]
    fn dedups_overlaps() {
        let range = Range::expand("QQ+, KK, AKs, AK");
        assert!(names(&range) == vec!["AA", "AKs", "AKo", "KK", "QQ"]);
    }

    #[test]
    fn unknown_is_empty() {
        assert!(Range::expand("").is_empty());
        assert!(Range::expand("garbage").is_empty());
        assert!(Range::expand("AAs").is_empty());
        assert!(Range::expand("AKs-QJs").is_empty());
    }

    #[test]
    fn lenient_keeps_good_tokens() {
        let range = Range::expand("JJ+,nonsense,AKs");
        assert!(range.combos() == 24 + 4);
    }

    #[test]
    fn strict_rejects_bad_tokens() {
        assert!(Range::parse("JJ+,nonsense").is_err());
        assert!(Range::parse("JJ+, AKs").is_ok());
    }

    #[test]
    fn everything() {
        let range = Range::expand("22+,A2+,K2+,Q2+,J2+,T2+,92+,82+,72+,62+,52+,42+,32");
        assert!(range.classes().len() == 169);
        assert!((range.fraction() - 1.).abs() < 1e-6);
    }
}
