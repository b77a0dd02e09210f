use crate::Probability;
use crate::Utility;
use crate::equity::Spot;
use crate::ranges::Grid;
use crate::ranges::Range;
use crate::strategy::Choice;
use crate::strategy::Report;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiChoice {
    pub action: String,
    pub frequency: Probability,
    pub ev: Utility,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiStrategy {
    pub found: bool,
    pub summary: String,
    pub lines: Vec<String>,
    pub choices: Vec<ApiChoice>,
    pub best: Option<String>,
    pub value: Option<Utility>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEquity {
    pub hand: String,
    pub equity: Probability,
    pub known: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEv {
    pub equity: Probability,
    pub ev: Utility,
    pub blended: Utility,
    pub break_even: Probability,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiRange {
    pub classes: Vec<String>,
    pub combos: usize,
    pub fraction: Probability,
    pub grid: Vec<Vec<Option<Probability>>>,
    pub shades: Vec<Vec<Option<Probability>>>,
    pub labels: Vec<Vec<String>>,
}

impl From<&Choice> for ApiChoice {
    fn from(choice: &Choice) -> Self {
        Self {
            action: choice.action.to_string(),
            frequency: choice.frequency,
            ev: choice.ev,
        }
    }
}

impl From<Report> for ApiStrategy {
    fn from(report: Report) -> Self {
        Self {
            found: report.found(),
            summary: report.summary().to_string(),
            lines: report.lines(),
            choices: report.choices().iter().map(ApiChoice::from).collect(),
            best: report.best().map(|c| c.action.to_string()),
            value: report.value(),
        }
    }
}

impl From<Spot> for ApiEv {
    fn from(spot: Spot) -> Self {
        Self {
            equity: spot.equity,
            ev: spot.called(),
            blended: spot.ev(),
            break_even: spot.break_even(),
        }
    }
}

impl From<(&Range, &Grid)> for ApiRange {
    fn from((range, grid): (&Range, &Grid)) -> Self {
        Self {
            classes: range.classes().iter().map(|c| c.to_string()).collect(),
            combos: range.combos(),
            fraction: range.fraction(),
            grid: grid.rows(),
            shades: grid.shades(),
            labels: Grid::labels(),
        }
    }
}
