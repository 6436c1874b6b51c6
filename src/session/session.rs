use crate::*;
use petgraph::graph::NodeIndex;

/// One game between a human and the computer.
///
/// Owns the [`Tree`] so the whole line of play stays alive for the
/// closing transcript. The human always moves first.
#[derive(Debug)]
pub struct Session {
    tree: Tree,
    current: NodeIndex,
    phase: Phase,
}

impl Session {
    /// Open a session at the tree's root. An empty board is rejected,
    /// since the first player would have nothing to choose from.
    pub fn new(tree: Tree) -> Result<Self> {
        let root = tree.root();
        if tree.is_terminal(root) {
            return Err(Error::EmptyBoard);
        }
        log::info!("starting session at {}", tree.state(root));
        Ok(Self {
            tree,
            current: root,
            phase: Phase::Awaiting(Side::Human),
        })
    }
    pub fn tree(&self) -> &Tree {
        &self.tree
    }
    pub fn tree_mut(&mut self) -> &mut Tree {
        &mut self.tree
    }
    pub fn current(&self) -> NodeIndex {
        self.current
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Move to `next`, which must be a child of the current position.
    pub fn advance(&mut self, next: NodeIndex) -> Result<Phase> {
        let Phase::Awaiting(mover) = self.phase else {
            return Err(Error::GameOver);
        };
        if !self.tree.expand(self.current).contains(&next) {
            return Err(Error::IllegalMove(next.index()));
        }
        self.current = next;
        self.phase = Phase::after(mover, self.tree.is_terminal(next));
        log::debug!("{} moves to {}", mover, self.tree.state(next));
        if let Phase::Finished { winner } = self.phase {
            log::info!("{} wins after {} moves", winner, self.tree.at(next).depth());
        }
        Ok(self.phase)
    }

    /// Let `player` choose for the side to move, then advance.
    pub fn step(&mut self, player: &mut impl Player) -> Result<Phase> {
        if self.phase.is_finished() {
            return Err(Error::GameOver);
        }
        let next = player
            .decide(&mut self.tree, self.current)
            .ok_or(Error::Abandoned)?;
        self.advance(next)
    }

    /// Alternate turns until someone empties the board.
    pub fn play(&mut self, human: &mut impl Player, robot: &mut impl Player) -> Result<Side> {
        loop {
            match self.phase {
                Phase::Awaiting(Side::Human) => self.step(human)?,
                Phase::Awaiting(Side::Computer) => self.step(robot)?,
                Phase::Finished { winner } => return Ok(winner),
            };
        }
    }

    /// Descriptors from the root to the current position.
    pub fn path(&mut self, settings: &Settings) -> Vec<Descriptor> {
        self.tree.path(self.current, settings)
    }
    /// The played line as `a => b => c`.
    pub fn transcript(&mut self, settings: &Settings) -> String {
        self.tree.transcript(self.current, settings)
    }
}
