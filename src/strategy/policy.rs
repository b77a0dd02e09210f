use super::action::Action;
use crate::Probability;
use crate::Utility;
use rand::Rng;

/// One row of a strategy table: how often to take an action and what it earns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub action: Action,
    pub frequency: Probability,
    pub ev: Utility,
}

impl Choice {
    pub const fn new(action: Action, frequency: Probability, ev: Utility) -> Self {
        Self {
            action,
            frequency,
            ev,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.0}%, EV: {:.2} BB",
            self.action.label(),
            self.frequency * 100.,
            self.ev
        )
    }
}

/// The mixed strategy stored for a single spot, in table order.
///
/// Frequencies are hand-typed and only approximately sum to one.
/// Nothing normalizes them; [`Policy::total`] reports the raw sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy(Vec<Choice>);

impl Policy {
    pub fn choices(&self) -> &[Choice] {
        &self.0
    }
    /// Raw frequency mass across all choices.
    pub fn total(&self) -> Probability {
        self.0.iter().map(|c| c.frequency).sum()
    }
    /// Most frequent choice. Ties go to the earlier row.
    pub fn best(&self) -> Option<&Choice> {
        self.0.iter().rev().max_by(|a, b| {
            a.frequency
                .partial_cmp(&b.frequency)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
    /// Frequency-weighted EV across all choices.
    pub fn value(&self) -> Utility {
        self.0.iter().map(|c| c.frequency * c.ev).sum()
    }
    /// Draw an action in proportion to the stored frequencies.
    pub fn sample(&self) -> Option<Action> {
        let total = self.total();
        if total <= 0. {
            return None;
        }
        let roll = rand::rng().random_range(0. ..total);
        let mut sum = 0.;
        for choice in self.0.iter() {
            sum += choice.frequency;
            if roll < sum {
                return Some(choice.action);
            }
        }
        self.0.last().map(|c| c.action)
    }
}

impl From<Vec<Choice>> for Policy {
    fn from(choices: Vec<Choice>) -> Self {
        Self(choices)
    }
}
