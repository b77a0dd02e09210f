use serde::Deserialize;
use serde::Serialize;

fn sb() -> String {
    "SB".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetPreflop {
    pub hole_cards: String,
    #[serde(default = "sb")]
    pub position: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetFlop {
    pub board: String,
    #[serde(default = "sb")]
    pub position: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetEquity {
    pub hand: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetEv {
    pub hand: String,
    pub pot: f32,
    pub bet: f32,
    #[serde(default)]
    pub fold_equity: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetRange {
    pub range: String,
}
