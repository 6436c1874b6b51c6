//! Board primitives for the three-pile subtraction game.
//!
//! - [`Piles`] — the three stone counters
//! - [`Take`] — a single legal move
//! - [`GameState`] — piles plus the side-to-move flag

mod piles;
mod state;
mod take;

pub use piles::*;
pub use state::*;
pub use take::*;
