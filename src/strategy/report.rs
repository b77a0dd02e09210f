use super::policy::Choice;
use super::policy::Policy;
use crate::Utility;

/// Outcome of a strategy lookup, ready to print or serialize.
///
/// A miss is not an error: it carries the fallback message and no rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    summary: String,
    policy: Policy,
    found: bool,
}

impl Report {
    pub fn hit(summary: String, policy: &Policy) -> Self {
        Self {
            summary,
            policy: policy.clone(),
            found: true,
        }
    }
    pub fn miss(summary: String) -> Self {
        Self {
            summary,
            policy: Policy::from(vec![]),
            found: false,
        }
    }
    pub fn found(&self) -> bool {
        self.found
    }
    pub fn summary(&self) -> &str {
        &self.summary
    }
    pub fn choices(&self) -> &[Choice] {
        self.policy.choices()
    }
    /// Most frequent row. `None` on a miss.
    pub fn best(&self) -> Option<&Choice> {
        self.policy.best()
    }
    /// Frequency-weighted EV of the stored mix. `None` on a miss.
    pub fn value(&self) -> Option<Utility> {
        self.found.then(|| self.policy.value())
    }
    /// One formatted line per choice, e.g. `"Raise: 80%, EV: 0.90 BB"`.
    pub fn lines(&self) -> Vec<String> {
        self.choices().iter().map(|c| c.to_string()).collect()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        if let (Some(best), Some(value)) = (self.best(), self.value()) {
            writeln!(f, "Mostly {}, mixed EV: {:.2} BB", best.action, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Book;

    #[test]
    fn hit_summarizes_mix() {
        let report = Book::preflop().report("SB", "AhKd");
        assert!(report.best().map(|c| c.frequency) == Some(0.8));
        assert!(report.value().is_some_and(|v| (v - 0.75).abs() < 1e-5));
        assert!(report.to_string().ends_with("Fold: 10%, EV: 0.00 BB\nMostly raise, mixed EV: 0.75 BB\n"));
    }

    #[test]
    fn miss_has_no_mix() {
        let report = Book::preflop().report("BB", "QQ");
        assert!(report.best().is_none());
        assert!(report.value().is_none());
        assert!(report.to_string() == "No strategy found. Try AhKd or 72o.\n");
    }
}
