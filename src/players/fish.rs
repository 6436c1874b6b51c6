use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// CPU player that chooses uniformly from legal moves.
/// Useful for simulating many sessions against the [`Robot`].
#[derive(Debug)]
pub struct Fish(SmallRng);

impl Fish {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl Player for Fish {
    fn decide(&mut self, tree: &mut Tree, at: NodeIndex) -> Option<NodeIndex> {
        tree.expand(at).choose(&mut self.0).copied()
    }
}
