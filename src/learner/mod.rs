//! Per-player online learning via the swap-regret reduction.
mod learner;
mod loss;
mod stationary;

pub use learner::*;
pub use loss::*;
pub use stationary::*;
