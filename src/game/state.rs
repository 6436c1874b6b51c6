use crate::*;

/// A board position together with the perspective that owns it.
///
/// The root is always maximizing; every move flips the flag. The flag
/// carries no rule of play, it only picks the sign of a terminal score.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct GameState {
    piles: Piles,
    maximizing: bool,
}

impl GameState {
    /// Starting position: the given piles, maximizing to move.
    pub fn root(piles: Piles) -> Self {
        Self {
            piles,
            maximizing: true,
        }
    }
    pub fn piles(&self) -> Piles {
        self.piles
    }
    pub fn is_maximizing(&self) -> bool {
        self.maximizing
    }
    /// No stones remain, so no move exists.
    pub fn is_terminal(&self) -> bool {
        self.piles.is_empty()
    }
    /// Legal moves in enumeration order.
    pub fn takes(&self) -> Vec<Take> {
        self.piles.takes()
    }
    /// The position after `take`, with the perspective flipped.
    pub fn apply(&self, take: Take) -> Self {
        Self {
            piles: self.piles.apply(take),
            maximizing: !self.maximizing,
        }
    }
    /// +1 for a maximizing position, -1 otherwise.
    pub fn sign(&self) -> Score {
        if self.maximizing { 1 } else { -1 }
    }
}

/// `(+) [a, b, c]` or `(-) [a, b, c]`.
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.maximizing { '+' } else { '-' };
        write!(f, "({}) {}", sign, self.piles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_maximizing() {
        let state = GameState::root(Piles::from([1, 2, 3]));
        assert!(state.is_maximizing());
        assert!(!state.is_terminal());
    }

    #[test]
    fn empty_root_is_terminal() {
        assert!(GameState::root(Piles::default()).is_terminal());
    }

    #[test]
    fn apply_flips_perspective() {
        let root = GameState::root(Piles::from([2, 0, 0]));
        let child = root.apply(Take::new(0, 1));
        let grandchild = child.apply(Take::new(0, 1));
        assert!(!child.is_maximizing());
        assert!(grandchild.is_maximizing());
        assert!(grandchild.is_terminal());
    }

    #[test]
    fn every_take_changes_exactly_one_pile() {
        let root = GameState::root(Piles::from([2, 3, 1]));
        for take in root.takes() {
            let child = root.apply(take);
            let changed = (0..N_PILES)
                .filter(|&i| child.piles().get(i) != root.piles().get(i))
                .collect::<Vec<_>>();
            assert!(changed == vec![take.pile()]);
            assert!(root.piles().total() - child.piles().total() == take.amount());
        }
    }

    #[test]
    fn sign_follows_perspective() {
        let root = GameState::root(Piles::default());
        assert!(root.sign() == 1);
        let child = GameState::root(Piles::from([1, 0, 0])).apply(Take::new(0, 1));
        assert!(child.sign() == -1);
    }

    #[test]
    fn display_prefixes_perspective() {
        let root = GameState::root(Piles::from([1, 1, 0]));
        assert!(root.to_string() == "(+) [1, 1, 0]");
        assert!(root.apply(Take::new(1, 1)).to_string() == "(-) [1, 0, 0]");
    }
}
