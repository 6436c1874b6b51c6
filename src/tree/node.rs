use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// A lightweight handle to a vertex in the game tree.
///
/// Stores only an index and a reference to the underlying graph,
/// making nodes cheap to copy and pass around. The parent link is the
/// single incoming edge of the vertex, so it never owns anything.
///
/// # Iterator Implementation
///
/// Implements `Iterator` for upward traversal: each `next()` yields
/// the parent node and the take that led out of it, ending at the root.
#[derive(Copy, Clone)]
pub struct Node<'tree> {
    index: NodeIndex,
    graph: &'tree DiGraph<Vertex, Take>,
}

impl<'tree> Node<'tree> {
    /// Creates a node handle from an index and graph reference.
    pub fn from(index: NodeIndex, graph: &'tree DiGraph<Vertex, Take>) -> Self {
        Self { index, graph }
    }
    /// The petgraph index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    /// The stored payload.
    pub fn vertex(&self) -> &'tree Vertex {
        &self.graph[self.index]
    }
    /// The position at this node.
    pub fn state(&self) -> &'tree GameState {
        self.vertex().state()
    }
    pub fn is_terminal(&self) -> bool {
        self.state().is_terminal()
    }
    /// Creates a node handle at a different index in the same tree.
    pub fn at(&self, index: NodeIndex) -> Node<'tree> {
        Self::from(index, self.graph)
    }
    /// Returns parent node and incoming take, if not at root.
    pub fn up(&self) -> Option<(Node<'tree>, Take)> {
        match (self.parent(), self.incoming()) {
            (None, None) => None,
            (Some(parent), Some(incoming)) => Some((parent, incoming)),
            (Some(_), _) => unreachable!("tree property violation"),
            (_, Some(_)) => unreachable!("tree property violation"),
        }
    }
    /// Parent node (None if this is the root).
    pub fn parent(&self) -> Option<Node<'tree>> {
        self.graph
            .neighbors_directed(self.index, petgraph::Direction::Incoming)
            .next()
            .map(|index| self.at(index))
    }
    /// The take that produced this node from its parent.
    pub fn incoming(&self) -> Option<Take> {
        self.graph
            .edges_directed(self.index, petgraph::Direction::Incoming)
            .next()
            .map(|edge| *edge.weight())
    }
    /// Cached children in score order; `None` before expansion.
    pub fn children(&self) -> Option<Vec<Node<'tree>>> {
        self.vertex()
            .children()
            .map(|children| children.iter().map(|&index| self.at(index)).collect())
    }
    /// Number of moves between the root and this node.
    pub fn depth(&self) -> usize {
        self.into_iter().count()
    }
    /// Takes played from the root to reach this node, in order.
    pub fn history(&self) -> Vec<Take> {
        let mut takes = self.into_iter().map(|(_, take)| take).collect::<Vec<_>>();
        takes.reverse();
        takes
    }
}

/// Node recurses upward through its tree. Each iteration yields the
/// parent node and the take from that parent to the previous node.
impl<'tree> Iterator for Node<'tree> {
    type Item = (Self, Take);
    fn next(&mut self) -> Option<Self::Item> {
        let (parent, take) = self.up()?;
        *self = parent;
        Some((parent, take))
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{})",
            self.state(),
            self.index.index(),
            self.graph.node_count()
        )
    }
}

/// Nodes compare by index within the same graph.
impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && std::ptr::eq(self.graph, other.graph)
    }
}
impl Eq for Node<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_parent() {
        let tree = Tree::from(Piles::from([1, 1, 0]));
        let root = tree.at(tree.root());
        assert!(root.parent().is_none());
        assert!(root.incoming().is_none());
        assert!(root.depth() == 0);
        assert!(root.history().is_empty());
    }

    #[test]
    fn children_are_none_until_expanded() {
        let mut tree = Tree::from(Piles::from([1, 1, 0]));
        let root = tree.root();
        assert!(tree.at(root).children().is_none());
        tree.expand(root);
        assert!(tree.at(root).children().map(|c| c.len()) == Some(2));
    }

    #[test]
    fn child_points_back_to_parent() {
        let mut tree = Tree::from(Piles::from([2, 1, 0]));
        let root = tree.root();
        let child = tree.expand(root)[0];
        let node = tree.at(child);
        assert!(node.parent() == Some(tree.at(root)));
        assert!(node.incoming().is_some());
        assert!(node.depth() == 1);
    }

    #[test]
    fn history_replays_to_the_node() {
        let mut tree = Tree::from(Piles::from([2, 2, 0]));
        let mut x = tree.root();
        while !tree.is_terminal(x) {
            x = tree.expand(x)[0];
        }
        let node = tree.at(x);
        let replayed = node
            .history()
            .into_iter()
            .fold(GameState::root(Piles::from([2, 2, 0])), |state, take| state.apply(take));
        assert!(replayed == *node.state());
        assert!(node.history().len() == node.depth());
    }
}
