pub mod cli;
pub mod query;

pub use cli::*;
pub use query::*;
