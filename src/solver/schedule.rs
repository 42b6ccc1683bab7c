use crate::*;

/// Round count and learning rate of a swap-regret run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    rounds: usize,
    learning_rate: Utility,
}

impl Schedule {
    /// Explicit round count and learning rate.
    pub fn explicit(rounds: usize, learning_rate: Utility) -> Result<Self, SolveError> {
        if rounds == 0 {
            return Err(SolveError::Schedule("round count must be positive".into()));
        }
        if !(learning_rate.is_finite() && learning_rate > 0.) {
            return Err(SolveError::Schedule(format!(
                "learning rate must be positive and finite, got {}",
                learning_rate
            )));
        }
        Ok(Self {
            rounds,
            learning_rate,
        })
    }

    /// Sample-complexity bound for an `epsilon`-approximate equilibrium:
    /// `T = ⌈4·m²·ln m / ε²⌉` and `η = √(ln m / T)` with `m` the largest
    /// action count. `m` is floored at 2 so that `ln m` stays positive.
    pub fn epsilon(epsilon: Utility, max_actions: usize) -> Result<Self, SolveError> {
        if !(epsilon.is_finite() && epsilon > 0.) {
            return Err(SolveError::Schedule(format!(
                "epsilon must be positive and finite, got {}",
                epsilon
            )));
        }
        let m = max_actions.max(2) as Utility;
        let rounds = (4. * m * m * m.ln() / (epsilon * epsilon)).ceil();
        if rounds > usize::MAX as Utility {
            return Err(SolveError::Schedule(format!(
                "epsilon {} requires too many rounds",
                epsilon
            )));
        }
        let rounds = rounds as usize;
        Self::explicit(rounds, (m.ln() / rounds as Utility).sqrt())
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }
    pub fn learning_rate(&self) -> Utility {
        self.learning_rate
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            rounds: SWAP_REGRET_ROUNDS,
            learning_rate: SWAP_REGRET_LEARNING_RATE,
        }
    }
}
