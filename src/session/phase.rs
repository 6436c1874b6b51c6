/// One of the two participants.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// Where a session stands.
///
/// Starts at `Awaiting(Human)` and alternates until a move empties the
/// board. Whoever takes the last stone loses, so the winner is always
/// the side that did not make the final move.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    Awaiting(Side),
    Finished { winner: Side },
}

impl Phase {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }
    /// The phase after `mover` plays into a position.
    pub fn after(mover: Side, terminal: bool) -> Self {
        match terminal {
            true => Self::Finished {
                winner: mover.opponent(),
            },
            false => Self::Awaiting(mover.opponent()),
        }
    }
}
