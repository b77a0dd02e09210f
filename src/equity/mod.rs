//! Equity lookups and the linear EV formula built on them.
mod spot;
mod table;

pub use spot::*;
pub use table::*;
