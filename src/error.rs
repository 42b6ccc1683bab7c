//! Error kinds surfaced to solver and benchmark callers.
use crate::*;

/// Invalid game construction or out-of-range profile lookup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    #[error("game needs at least one player")]
    NoPlayers,
    #[error("game declares {declared} players but {given} action counts")]
    Players { declared: usize, given: usize },
    #[error("player {player} has no actions")]
    Empty { player: Player },
    #[error("joint action space of {size} profiles exceeds the limit of {limit}")]
    Oversized { size: u128, limit: usize },
    #[error("{kind} game requires {requirement}")]
    Template {
        kind: GameKind,
        requirement: &'static str,
    },
    #[error("custom game requires one payoff tensor per player, got {given} for {players}")]
    Tensors { players: usize, given: usize },
    #[error("payoff tensor for player {player} has shape {found:?}, expected {expected:?}")]
    Shape {
        player: Player,
        found: Vec<usize>,
        expected: Vec<usize>,
    },
    #[error("tensor of shape {shape:?} cannot hold {len} entries")]
    Length { shape: Vec<usize>, len: usize },
    #[error("profile index {index} is outside a joint space of {size} profiles")]
    Index { index: usize, size: usize },
    #[error("payoff matrix rows have unequal lengths")]
    Ragged,
    #[error("profile {profile:?} does not match a game of {players} players")]
    Arity { profile: Vec<Action>, players: usize },
    #[error("action {action} is out of range for player {player} with {actions} actions")]
    OutOfRange {
        player: Player,
        action: Action,
        actions: usize,
    },
}

/// Fatal numerical breakdown inside an online learner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericalError {
    #[error("player {player} weight row {row} collapsed to zero mass")]
    DegenerateRow { player: Player, row: Action },
    #[error("player {player} strategy carries no positive mass")]
    Strategy { player: Player },
    #[error(
        "player {player} stationary distribution did not converge in {iterations} steps (residual {residual:e})"
    )]
    Unconverged {
        player: Player,
        iterations: usize,
        residual: Probability,
    },
}

/// Malformed distribution handed to the verifier.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VerifyError {
    #[error("distribution sums to {total}, not 1")]
    Mass { total: Probability },
    #[error("distribution assigns non-finite mass to profile {profile}")]
    NonFinite { profile: Profile },
    #[error("distribution assigns {mass} to profile {profile}")]
    Negative { profile: Profile, mass: Probability },
    #[error("distribution spans {found:?} but the game spans {expected:?}")]
    Shape {
        found: Vec<usize>,
        expected: Vec<usize>,
    },
}

/// Failure to produce an equilibrium distribution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("invalid schedule: {0}")]
    Schedule(String),
    #[error(transparent)]
    Numerical(#[from] NumericalError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("no equilibrium found: linear program is infeasible")]
    Infeasible,
    #[error("no equilibrium found: linear program is unbounded")]
    Unbounded,
}

impl From<minilp::Error> for SolveError {
    fn from(e: minilp::Error) -> Self {
        match e {
            minilp::Error::Infeasible => Self::Infeasible,
            minilp::Error::Unbounded => Self::Unbounded,
        }
    }
}
