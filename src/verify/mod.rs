//! Correlated-equilibrium verification and social welfare.
mod verifier;
mod violation;

#[cfg(test)]
mod tests;

pub use verifier::*;
pub use violation::*;
