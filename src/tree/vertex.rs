use crate::*;
use petgraph::graph::NodeIndex;

/// Payload stored at each position of the [`Tree`].
///
/// `children` stays `None` until the first expansion and is never
/// rewritten afterwards. `score` is only filled in by memoizing trees.
#[derive(Debug, Clone)]
pub struct Vertex {
    state: GameState,
    children: Option<Vec<NodeIndex>>,
    score: Option<Score>,
}

impl From<GameState> for Vertex {
    fn from(state: GameState) -> Self {
        Self {
            state,
            children: None,
            score: None,
        }
    }
}

impl Vertex {
    pub fn state(&self) -> &GameState {
        &self.state
    }
    /// Score-sorted children, if this vertex has been expanded.
    pub fn children(&self) -> Option<&[NodeIndex]> {
        self.children.as_deref()
    }
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }
    pub(crate) fn memo(&self) -> Option<Score> {
        self.score
    }
    pub(crate) fn remember(&mut self, score: Score) {
        self.score = Some(score);
    }
    pub(crate) fn adopt(&mut self, children: Vec<NodeIndex>) {
        debug_assert!(self.children.is_none(), "children are written once");
        self.children = Some(children);
    }
}
