//! Human-versus-computer turn structure.
//!
//! - [`Side`] — who is moving, or who won
//! - [`Phase`] — awaiting a side's move, or finished
//! - [`Session`] — a [`Tree`](crate::Tree) plus the current position

mod phase;
mod session;

pub use phase::*;
pub use session::*;
