use crate::*;

/// The three stone counters that make up a board.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct Piles([Stones; N_PILES]);

impl Piles {
    /// Stones in pile `i`.
    pub fn get(&self, i: usize) -> Stones {
        self.0[i]
    }
    /// Total stones left on the board. Every move strictly lowers this,
    /// so it bounds the depth of any line of play.
    pub fn total(&self) -> Stones {
        self.0.iter().sum()
    }
    /// True when every pile is empty.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }
    /// Every legal take, pile-ascending then amount-ascending.
    pub fn takes(&self) -> Vec<Take> {
        (0..N_PILES)
            .flat_map(|pile| (1..=self.get(pile)).map(move |amount| Take::new(pile, amount)))
            .collect()
    }
    /// The board after removing `take.amount()` stones from `take.pile()`.
    pub fn apply(&self, take: Take) -> Self {
        debug_assert!(take.pile() < N_PILES, "pile out of range");
        debug_assert!(take.amount() >= 1, "take must remove a stone");
        debug_assert!(take.amount() <= self.get(take.pile()), "take exceeds pile");
        let mut next = self.0;
        next[take.pile()] -= take.amount();
        Self(next)
    }
}

impl From<[Stones; N_PILES]> for Piles {
    fn from(piles: [Stones; N_PILES]) -> Self {
        Self(piles)
    }
}

impl From<Piles> for [Stones; N_PILES] {
    fn from(piles: Piles) -> Self {
        piles.0
    }
}

/// Signed construction, rejecting negative or oversized piles.
impl TryFrom<[i64; N_PILES]> for Piles {
    type Error = Error;
    fn try_from(piles: [i64; N_PILES]) -> Result<Self> {
        let mut stones = [0; N_PILES];
        for (i, (&n, slot)) in piles.iter().zip(stones.iter_mut()).enumerate() {
            *slot = Stones::try_from(n)
                .map_err(|_| Error::InvalidInput(format!("pile {} is {}", i, n)))?;
        }
        Ok(Self(stones))
    }
}

/// Parses three integers separated by whitespace and/or commas.
impl std::str::FromStr for Piles {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidInput(format!("{:?} is not an integer", token)))
            })
            .collect::<Result<Vec<i64>>>()?;
        let values = <[i64; N_PILES]>::try_from(values).map_err(|v| {
            Error::InvalidInput(format!("expected {} piles, found {}", N_PILES, v.len()))
        })?;
        Self::try_from(values)
    }
}

impl std::fmt::Display for Piles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.0[0], self.0[1], self.0[2])
    }
}
