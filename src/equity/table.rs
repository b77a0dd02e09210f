use crate::DEFAULT_EQUITY;
use crate::Probability;
use crate::cards::Class;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PREFLOP: LazyLock<Equities> = LazyLock::new(|| {
    Equities::from([
        ("AA", 0.85),
        ("KK", 0.82),
        ("QQ", 0.80),
        ("JJ", 0.775),
        ("TT", 0.75),
        ("99", 0.72),
        ("88", 0.69),
        ("77", 0.66),
        ("66", 0.63),
        ("55", 0.60),
        ("44", 0.57),
        ("33", 0.54),
        ("22", 0.50),
        ("AKs", 0.67),
        ("AKo", 0.65),
        ("AhKd", 0.65),
        ("AQs", 0.66),
        ("AQo", 0.64),
        ("AJs", 0.65),
        ("AJo", 0.63),
        ("ATs", 0.65),
        ("KQs", 0.63),
        ("KQo", 0.61),
        ("KJs", 0.62),
        ("QJs", 0.60),
        ("JTs", 0.58),
        ("T9s", 0.54),
        ("98s", 0.51),
        ("87s", 0.48),
        ("76s", 0.45),
        ("72o", 0.35),
        ("32o", 0.32),
    ])
});

/// Preflop all-in equity versus a random hand, by hand string.
///
/// Keys are matched exactly after trimming. Anything not in the table
/// is assumed to be a coin flip at [`DEFAULT_EQUITY`].
#[derive(Debug)]
pub struct Equities(BTreeMap<String, Probability>);

impl Equities {
    pub fn preflop() -> &'static Self {
        &PREFLOP
    }
    pub fn get(&self, key: &str) -> Probability {
        self.find(key).unwrap_or(DEFAULT_EQUITY)
    }
    /// Like [`Equities::get`] but without the default.
    pub fn find(&self, key: &str) -> Option<Probability> {
        self.0.get(key.trim()).copied()
    }
    /// Equity of a starting-hand class by its canonical name.
    pub fn class(&self, class: &Class) -> Probability {
        self.get(class.to_string().as_str())
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, Probability)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<const N: usize> From<[(&str, Probability); N]> for Equities {
    fn from(entries: [(&str, Probability); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}
