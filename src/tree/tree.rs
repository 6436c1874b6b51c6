use crate::*;
use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;

/// The explored portion of a game tree.
///
/// Every vertex lives in a petgraph `DiGraph`; edges run from parent to
/// child and carry the [`Take`] that was played. A vertex's parent is its
/// single incoming neighbor, so back-references are plain indices.
///
/// # Growth
///
/// The tree starts as a lone root. [`Tree::expand`] generates a vertex's
/// children the first time it is called and caches them in score order.
/// Because ordering needs scores and scores need expansion, the first
/// expansion of any vertex materializes its whole subtree.
///
/// # Scoring
///
/// [`Tree::score`] is a leaf sum: terminal vertices count +1 when
/// maximizing and -1 otherwise, and interior vertices add up their
/// children. Scores are recomputed on every call unless the tree was
/// built with [`Tree::memoized`].
#[derive(Debug)]
pub struct Tree {
    graph: DiGraph<Vertex, Take>,
    memoize: bool,
}

impl Tree {
    /// Toggle score caching on vertices. Defaults to [`MEMOIZE_SCORES`].
    pub fn memoized(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
    /// Index of the starting position.
    pub fn root(&self) -> NodeIndex {
        NodeIndex::new(0)
    }
    /// Number of vertices materialized so far.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    /// Get a Node handle by index.
    pub fn at(&self, index: NodeIndex) -> Node<'_> {
        Node::from(index, &self.graph)
    }
    pub fn state(&self, index: NodeIndex) -> GameState {
        *self.graph[index].state()
    }
    pub fn is_terminal(&self, index: NodeIndex) -> bool {
        self.graph[index].state().is_terminal()
    }

    /// Children of `index`, sorted ascending by score.
    ///
    /// Generated on first call and returned unchanged afterwards. Ties
    /// keep enumeration order: pile ascending, then amount ascending.
    pub fn expand(&mut self, index: NodeIndex) -> &[NodeIndex] {
        if !self.graph[index].is_expanded() {
            let children = self.spawn(index);
            self.graph[index].adopt(children);
        }
        self.graph[index].children().unwrap_or_default()
    }

    /// Leaf-sum score of the subtree below `index`.
    pub fn score(&mut self, index: NodeIndex) -> Score {
        if let Some(score) = self.graph[index].memo() {
            return score;
        }
        let state = self.state(index);
        let score = match state.is_terminal() {
            true => state.sign(),
            false => self
                .expand(index)
                .to_vec()
                .into_iter()
                .map(|child| self.score(child))
                .sum(),
        };
        if self.memoize {
            self.graph[index].remember(score);
        }
        score
    }

    /// Ascending-score ordering between two vertices.
    pub fn compare(&mut self, a: NodeIndex, b: NodeIndex) -> std::cmp::Ordering {
        self.score(a).cmp(&self.score(b))
    }

    /// Printable snapshot of `index`, scored if `settings.scores` is set.
    pub fn describe(&mut self, index: NodeIndex, settings: &Settings) -> Descriptor {
        let score = match settings.scores {
            true => Some(self.score(index)),
            false => None,
        };
        Descriptor::new(self.state(index), score)
    }

    /// Descriptor of `index` followed by those of all its children.
    pub fn listing(&mut self, index: NodeIndex, settings: &Settings) -> String {
        let head = self.describe(index, settings);
        let children = self
            .expand(index)
            .to_vec()
            .into_iter()
            .map(|child| self.describe(child, settings).to_string())
            .collect::<Vec<_>>();
        format!("{} [{}]", head, children.join(", "))
    }

    /// Descriptors from the root down to `index`, inclusive.
    pub fn path(&mut self, index: NodeIndex, settings: &Settings) -> Vec<Descriptor> {
        let mut line = std::iter::once(index)
            .chain(self.at(index).map(|(parent, _)| parent.index()))
            .collect::<Vec<_>>();
        line.reverse();
        line.into_iter()
            .map(|x| self.describe(x, settings))
            .collect()
    }

    /// The path to `index` joined as `a => b => c`.
    pub fn transcript(&mut self, index: NodeIndex, settings: &Settings) -> String {
        self.path(index, settings)
            .iter()
            .map(Descriptor::to_string)
            .collect::<Vec<_>>()
            .join(" => ")
    }

    /// Attach one vertex per legal take, then order them by score.
    fn spawn(&mut self, index: NodeIndex) -> Vec<NodeIndex> {
        let state = self.state(index);
        let children = state
            .takes()
            .into_iter()
            .map(|take| {
                let tail = self.graph.add_node(Vertex::from(state.apply(take)));
                self.graph.add_edge(index, tail, take);
                tail
            })
            .collect::<Vec<_>>();
        let mut scored = children
            .into_iter()
            .map(|child| (self.score(child), child))
            .collect::<Vec<_>>();
        scored.sort_by_key(|&(score, _)| score);
        log::trace!("expanded {} into {} children", state, scored.len());
        scored.into_iter().map(|(_, child)| child).collect()
    }

    /// Draw the expanded part of the tree below `x`.
    /// Grows fast, so keep it to small boards.
    fn show(&self, f: &mut std::fmt::Formatter, x: Node<'_>, prefix: &str) -> std::fmt::Result {
        if x.index() == self.root() {
            writeln!(f, "\nROOT   {}", x.state())?;
        }
        let children = x.children().unwrap_or_default();
        let n = children.len();
        for (i, child) in children.into_iter().enumerate() {
            let last = i == n - 1;
            let gaps = if last { "    " } else { "│   " };
            let stem = if last { "└" } else { "├" };
            if let Some(take) = child.incoming() {
                writeln!(f, "{}{}──{} → {}", prefix, stem, take, child.state())?;
            }
            self.show(f, child, &format!("{}{}", prefix, gaps))?;
        }
        Ok(())
    }
}

/// Seed a Tree with its root position.
impl From<Piles> for Tree {
    fn from(piles: Piles) -> Self {
        let mut graph = DiGraph::default();
        graph.add_node(Vertex::from(GameState::root(piles)));
        Self {
            graph,
            memoize: MEMOIZE_SCORES,
        }
    }
}

/// Signed construction; any negative pile is `Error::InvalidInput`.
impl TryFrom<[i64; N_PILES]> for Tree {
    type Error = Error;
    fn try_from(piles: [i64; N_PILES]) -> Result<Self> {
        Piles::try_from(piles).map(Self::from)
    }
}

impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.show(f, self.at(self.root()), "")
    }
}
