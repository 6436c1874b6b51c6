use crate::*;
use petgraph::graph::NodeIndex;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Display switches, passed explicitly wherever they matter.
///
/// Both are cosmetic. Score caching belongs to the [`Tree`] itself; see
/// [`Tree::memoized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Append each node's score to its descriptor.
    pub scores: bool,
    /// Present the human's choices in random order.
    pub shuffle: bool,
    /// Fixed seed for shuffling, for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scores: SHOW_SCORES,
            shuffle: SHUFFLE_CHOICES,
            seed: None,
        }
    }
}

impl Settings {
    /// Random source for display shuffling.
    pub fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
    /// Order in which `children` are shown to a human.
    ///
    /// Always returns a fresh list; the tree's cached order, which the
    /// computer picks from, is left alone.
    pub fn arrange(&self, children: &[NodeIndex], rng: &mut impl rand::Rng) -> Vec<NodeIndex> {
        let mut shown = children.to_vec();
        if self.shuffle {
            shown.shuffle(rng);
        }
        shown
    }
}
