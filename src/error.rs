/// Errors surfaced by board construction and session play.
///
/// Tree operations themselves are total once a root exists;
/// everything that can fail happens at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Starting piles were negative, malformed, or the wrong count.
    InvalidInput(String),
    /// A session was opened on a board with no stones to take.
    EmptyBoard,
    /// The chosen vertex is not a child of the current position.
    IllegalMove(usize),
    /// A move was offered after the session already finished.
    GameOver,
    /// The player to move declined to choose.
    Abandoned,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::EmptyBoard => write!(f, "board has no stones to play"),
            Self::IllegalMove(i) => write!(f, "illegal move to node {}", i),
            Self::GameOver => write!(f, "game is already over"),
            Self::Abandoned => write!(f, "player abandoned the game"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_input() {
        let error = Error::InvalidInput(String::from("pile 1 is -3"));
        assert!(error.to_string() == "invalid input: pile 1 is -3");
    }

    #[test]
    fn boxes_as_std_error() {
        let boxed: Box<dyn std::error::Error> = Box::new(Error::GameOver);
        assert!(boxed.to_string() == "game is already over");
    }
}
