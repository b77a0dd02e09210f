//! Hosting Server Binary
//!
//! Serves the strategy, equity, EV, and range lookups over HTTP.

use clap::Parser;
use gtolookup::*;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = hosting::Config::parse();
    log();
    kys();
    hosting::Server::run(config).await
}
