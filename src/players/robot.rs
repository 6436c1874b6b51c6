use super::*;

/// The automated opponent.
///
/// Takes whatever sits first in the score-sorted child list, whether or
/// not that helps it. Never shuffles and never consults display settings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Player for Robot {
    fn decide(&mut self, tree: &mut Tree, at: NodeIndex) -> Option<NodeIndex> {
        tree.expand(at).first().copied()
    }
}
