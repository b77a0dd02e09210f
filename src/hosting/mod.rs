//! HTTP surface: JSON lookups over the static tables.
//!
//! | Method | Path           | Body                                 |
//! |--------|----------------|--------------------------------------|
//! | GET    | `/health`      |                                      |
//! | POST   | `/api/preflop` | `{hole_cards, position?}`            |
//! | POST   | `/api/flop`    | `{board, position?}`                 |
//! | POST   | `/api/equity`  | `{hand}`                             |
//! | POST   | `/api/ev`      | `{hand, pot, bet, fold_equity?}`     |
//! | POST   | `/api/range`   | `{range}`                            |
mod config;
mod handlers;
mod server;

pub use config::*;
pub use handlers::*;
pub use server::*;
