//! Range shorthand expansion and the starting-hand matrix.
mod grid;
mod range;

pub use grid::*;
pub use range::*;
