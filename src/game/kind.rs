/// Payoff template used to construct a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum GameKind {
    /// Independent uniform payoffs in `[PAYOFF_MIN, PAYOFF_MAX]`.
    Random,
    /// Two-player game of Chicken.
    Chicken,
    /// Two-player congestion game.
    Congestion,
    /// Caller-supplied payoff tensors.
    Custom,
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Chicken => write!(f, "chicken"),
            Self::Congestion => write!(f, "congestion"),
            Self::Custom => write!(f, "custom"),
        }
    }
}
