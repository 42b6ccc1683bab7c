//! Approximate correlated equilibria of finite normal-form games.
//!
//! - `game`: payoff tensors over the joint action space
//! - `distribution`: dense distributions over joint action profiles
//! - `learner`: per-player no-swap-regret online learner
//! - `solver`: swap-regret and linear-programming solvers
//! - `verify`: incentive-constraint checks and social welfare
//! - `bench`: timing harness and CSV sweeps
#![allow(dead_code)]

mod bench;
mod distribution;
mod error;
mod game;
mod learner;
mod solver;
mod verify;

pub use bench::*;
pub use distribution::*;
pub use error::*;
pub use game::*;
pub use learner::*;
pub use solver::*;
pub use verify::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Payoffs, losses, regrets and welfare.
pub type Utility = f64;
/// Strategy weights, joint distributions and sampling mass.
pub type Probability = f64;
/// Player index in `0..n`.
pub type Player = usize;
/// Action index in `0..num_actions[player]`.
pub type Action = usize;

// ============================================================================
// GAME CONSTRUCTION
// ============================================================================
/// Lower bound of uniformly random payoffs.
pub const PAYOFF_MIN: Utility = -10.0;
/// Upper bound of uniformly random payoffs.
pub const PAYOFF_MAX: Utility = 10.0;
/// Largest joint action space a game may span.
/// Every payoff tensor and every distribution is dense over this space,
/// so memory grows as the product of all action counts.
pub const MAX_JOINT_PROFILES: usize = 1 << 24;

// ============================================================================
// EQUILIBRIUM VERIFICATION
// ============================================================================
/// Allowed deviation of total mass from 1.
pub const MASS_TOLERANCE: Probability = 1e-6;
/// Most negative probability accepted as numerical noise.
pub const NEGATIVE_TOLERANCE: Probability = -1e-4;
/// Incentive slack used when checking exact solutions.
pub const VIOLATION_EPSILON: Utility = 0.01;

// ============================================================================
// SWAP REGRET
// ============================================================================
/// Default number of rounds when configured explicitly.
pub const SWAP_REGRET_ROUNDS: usize = 10_000;
/// Default multiplicative-weights step size.
pub const SWAP_REGRET_LEARNING_RATE: Utility = 0.1;
/// Target approximation used by the benchmark sweeps.
pub const SWAP_REGRET_EPSILON: Utility = 0.1;
/// Rounds between progress log messages.
pub const SWAP_REGRET_LOG_INTERVAL: usize = 1 << 12;

// ============================================================================
// STATIONARY DISTRIBUTION
// Power iteration on the lazy chain (I + Q) / 2.
// ============================================================================
/// Stop once the residual ‖p·Q − p‖₁ drops below this.
pub const STATIONARY_TOLERANCE: Probability = 1e-12;
/// Maximum power iteration steps per update.
pub const STATIONARY_ITERATIONS: usize = 1 << 16;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
