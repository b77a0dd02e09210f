//! Lookup CLI Binary
//!
//! Answers one query from the command line, or opens a prompt when
//! called without arguments.

use gtolookup::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    kys();
    let cli = analysis::CLI::default();
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match args.is_empty() {
        true => cli.run(),
        false => Ok(println!("{}", cli.handle(&args.join(" "))?)),
    }
}
