//! Hand-authored heads-up strategy tables.
//!
//! A [`Book`] maps `(Position, key)` to a [`Policy`], an ordered list of
//! [`Choice`] rows. There is no solver behind these numbers.
mod action;
mod book;
mod policy;
mod position;
mod report;

pub use action::*;
pub use book::*;
pub use policy::*;
pub use position::*;
pub use report::*;
