use crate::*;

/// Remove `amount` stones from pile `pile`.
///
/// Labels the edge between a vertex and each of its children.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Take {
    pile: usize,
    amount: Stones,
}

impl Take {
    pub fn new(pile: usize, amount: Stones) -> Self {
        Self { pile, amount }
    }
    pub fn pile(&self) -> usize {
        self.pile
    }
    pub fn amount(&self) -> Stones {
        self.amount
    }
}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from pile {}", self.amount, self.pile)
    }
}
