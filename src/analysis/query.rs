use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Look up the preflop strategy for hole cards", alias = "pre")]
    Preflop {
        #[arg(required = true)]
        hole_cards: String,
        #[arg(default_value = "SB")]
        position: String,
    },
    #[command(about = "Look up the flop strategy for a board texture", alias = "flo")]
    Flop {
        #[arg(required = true)]
        board: String,
        #[arg(default_value = "SB")]
        position: String,
    },
    #[command(about = "Find the preflop equity of a hand", alias = "eq")]
    Equity {
        #[arg(required = true)]
        hand: String,
    },
    #[command(about = "Compute the EV of betting into a pot", alias = "val")]
    Ev {
        #[arg(required = true)]
        hand: String,
        #[arg(required = true)]
        pot: f32,
        #[arg(required = true)]
        bet: f32,
        #[arg(default_value_t = 0.)]
        fold_equity: f32,
    },
    #[command(about = "Expand a range and draw its matrix", alias = "rng")]
    Range {
        #[arg(required = true, num_args = 1..)]
        range: Vec<String>,
    },
    #[command(about = "Deal random hole cards and act on them", alias = "dl")]
    Deal {
        #[arg(default_value = "SB")]
        position: String,
    },
    #[command(about = "List every stored spot", alias = "ls")]
    Spots,
}
