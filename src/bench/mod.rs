//! Timing harness and CSV sweeps over random games.
mod harness;
mod record;
mod sweep;

pub use harness::*;
pub use record::*;
pub use sweep::*;
