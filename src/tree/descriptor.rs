use crate::*;

/// Printable snapshot of one position, with its score when requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Descriptor {
    state: GameState,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<Score>,
}

impl Descriptor {
    pub fn new(state: GameState, score: Option<Score>) -> Self {
        Self { state, score }
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    pub fn score(&self) -> Option<Score> {
        self.score
    }
}

/// `(+) [a, b, c]`, then ` (score)` when a score is attached.
impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.score {
            Some(score) => write!(f, "{} ({})", self.state, score),
            None => write!(f, "{}", self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_and_without_score() {
        let state = GameState::root(Piles::from([1, 1, 0]));
        assert!(Descriptor::new(state, Some(-2)).to_string() == "(+) [1, 1, 0] (-2)");
        assert!(Descriptor::new(state, None).to_string() == "(+) [1, 1, 0]");
    }

    #[test]
    fn serializes_state_and_score() {
        let state = GameState::root(Piles::from([1, 0, 0]));
        let json = serde_json::to_string(&Descriptor::new(state, Some(-1))).unwrap();
        assert!(json == r#"{"state":{"piles":[1,0,0],"maximizing":true},"score":-1}"#);
        let json = serde_json::to_string(&Descriptor::new(state, None)).unwrap();
        assert!(json == r#"{"state":{"piles":[1,0,0],"maximizing":true}}"#);
    }
}
