//! Interactive CLI over the static tables.
use super::Query;
use crate::Arbitrary;
use crate::cards::Hole;
use crate::equity::Spot;
use crate::ranges::Grid;
use crate::ranges::Range;
use crate::strategy::Position;
use crate::tables::Tables;
use clap::Parser;
use std::io::Write;

pub struct CLI(Tables);

impl Default for CLI {
    fn default() -> Self {
        Self(Tables::default())
    }
}

impl CLI {
    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("entering lookup");
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush()?;
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
        Ok(())
    }

    /// Answer one line of input.
    pub fn handle(&self, input: &str) -> anyhow::Result<String> {
        let query = Query::try_parse_from(std::iter::once(">").chain(input.split_whitespace()))?;
        log::debug!("{:?}", query);
        match query {
            Query::Preflop {
                hole_cards,
                position,
            } => Ok(self.0.preflop.report(&position, &hole_cards).to_string()),
            Query::Flop { board, position } => {
                Ok(self.0.flop.report(&position, &board).to_string())
            }
            Query::Equity { hand } => Ok(match self.0.equities.find(&hand) {
                Some(equity) => format!("{}: {:.1}%", hand, equity * 100.),
                None => format!(
                    "{}: {:.1}% (not in table)",
                    hand,
                    self.0.equities.get(&hand) * 100.
                ),
            }),
            Query::Ev {
                hand,
                pot,
                bet,
                fold_equity,
            } => {
                let spot = Spot::new(self.0.equities.get(&hand), pot, bet)
                    .with_fold_equity(fold_equity);
                spot.validate().map_err(anyhow::Error::msg)?;
                Ok(format!(
                    "{}\ncalled EV:  {:.2} BB\nblended EV: {:.2} BB\nbreak-even: {:.1}%",
                    spot,
                    spot.called(),
                    spot.ev(),
                    spot.break_even() * 100.
                ))
            }
            Query::Range { range } => {
                let range = Range::parse(&range.join(",")).map_err(anyhow::Error::msg)?;
                let grid = Grid::new(&range, self.0.equities);
                Ok(format!(
                    "{} classes, {} combos ({:.1}%)\n{}",
                    range.classes().len(),
                    range.combos(),
                    range.fraction() * 100.,
                    grid
                ))
            }
            Query::Deal { position } => {
                let position = Position::try_from(position.as_str()).map_err(anyhow::Error::msg)?;
                let hole = Hole::random();
                let class = hole.class();
                let report = self.0.preflop.report(&position.to_string(), &hole.to_string());
                let sampled = self
                    .0
                    .preflop
                    .lookup(position, &hole.to_string())
                    .and_then(|policy| policy.sample())
                    .map(|action| format!("\nsampled: {}", action))
                    .unwrap_or_default();
                Ok(format!(
                    "dealt {} ({}) in {}, equity {:.1}%\n{}{}",
                    hole,
                    class,
                    position,
                    self.0.equities.class(&class) * 100.,
                    report.summary(),
                    sampled
                ))
            }
            Query::Spots => Ok([self.0.preflop, self.0.flop]
                .into_iter()
                .flat_map(|book| {
                    book.spots().map(move |(position, key, policy)| {
                        format!(
                            "{:<8} {} {:<6} total {:.2}",
                            book.street(),
                            position,
                            key,
                            policy.total()
                        )
                    })
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
