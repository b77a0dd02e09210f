//! Card representation and starting-hand classes.
//!
//! - [`Rank`] and [`Suit`]: the two halves of a card
//! - [`Card`]: a single card encoded in one byte
//! - [`Hole`]: a specific pair of private cards, like `AhKd`
//! - [`Class`]: one of 169 starting hands, like `AKo`, placed on the 13×13 grid
mod card;
mod class;
mod hole;
mod rank;
mod suit;

pub use card::*;
pub use class::*;
pub use hole::*;
pub use rank::*;
pub use suit::*;
