//! Equilibrium solvers behind a single interface.
//!
//! - [`SwapRegretSolver`]: approximate, by independent no-swap-regret play
//! - [`ExactSolver`]: exact, by linear programming
//! - [`Method`]: tagged union over both, for heterogeneous solver lists
mod exact;
mod method;
mod schedule;
mod swap;

pub use exact::*;
pub use method::*;
pub use schedule::*;
pub use swap::*;

use crate::*;

/// Anything that turns a game into a distribution over joint profiles.
pub trait Solver {
    /// Human-readable label used in benchmark records.
    fn name(&self) -> &'static str;
    /// Incentive slack at which this solver's output should be verified.
    fn tolerance(&self) -> Utility;
    /// Compute an (approximate) correlated equilibrium of `game`.
    fn solve(&self, game: &Game) -> Result<Distribution, SolveError>;
}
