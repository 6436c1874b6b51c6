//! Exhaustive game-tree explorer for three-pile subtraction games.
//!
//! The engine lives in [`tree`]: a [`Tree`] arena grows lazily from a root
//! position, caches each vertex's children the first time they are asked
//! for, orders them by [`Tree::score`], and walks parent links to rebuild
//! the move history of any vertex.
//!
//! The [`session`] module layers the human-vs-computer turn structure on top,
//! and [`players`] supplies the participants.
pub mod error;
pub mod game;
pub mod players;
pub mod session;
pub mod settings;
pub mod tree;

pub use error::*;
pub use game::*;
pub use players::*;
pub use session::*;
pub use settings::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Number of stones in a single pile.
pub type Stones = u32;
/// Leaf-sum evaluation of a subtree. Wide enough for the exponential
/// number of terminal leaves below any realistic starting position.
pub type Score = i64;

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of piles on the board.
pub const N_PILES: usize = 3;

// ============================================================================
// DISPLAY DEFAULTS
// Cosmetic switches; none of them changes what the engine computes.
// ============================================================================
/// Append each node's score to its rendered descriptor.
pub const SHOW_SCORES: bool = true;
/// Present the human's choices in random order instead of score order.
pub const SHUFFLE_CHOICES: bool = false;
/// Cache each vertex's score after its first evaluation.
pub const MEMOIZE_SCORES: bool = false;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
