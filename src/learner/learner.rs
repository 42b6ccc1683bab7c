use super::*;
use crate::*;
use rand::Rng;
use rand::distr::Distribution as _;
use rand::distr::weighted::WeightedIndex;

/// No-swap-regret online learner for a single player.
///
/// Runs one multiplicative-weights expert per own action. Row `j` of the
/// weight matrix is the expert responsible for action `j`: it decides where
/// probability mass recommended to `j` should be moved. Row-normalizing the
/// weights yields a Markov matrix `Q`, and the strategy actually played is
/// its stationary distribution.
///
/// - `update`: observe a realized joint profile and adapt
/// - `sample`: draw the next action from the current strategy
#[derive(Debug, Clone)]
pub struct OnlineLearner {
    player: Player,
    actions: usize,
    eta: Utility,
    space: Space,
    losses: Losses,
    weights: Vec<Vec<Utility>>,
    strategy: Vec<Probability>,
}

impl OnlineLearner {
    /// Uniform strategy and uniform weights for `player` in `game`.
    pub fn new(game: &Game, player: Player, eta: Utility) -> Self {
        let actions = game.actions(player);
        Self {
            player,
            actions,
            eta,
            space: game.space().clone(),
            losses: Losses::from(game.tensor(player)),
            weights: vec![vec![1.; actions]; actions],
            strategy: vec![1. / actions as Probability; actions],
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }
    pub fn strategy(&self) -> &[Probability] {
        &self.strategy
    }
    pub fn weights(&self) -> &[Vec<Utility>] {
        &self.weights
    }

    /// Draw an action from the current strategy.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Action, NumericalError> {
        WeightedIndex::new(&self.strategy)
            .map(|choice| choice.sample(rng))
            .map_err(|_| NumericalError::Strategy {
                player: self.player,
            })
    }

    /// Loss of every own action against the other players' part of `index`.
    pub fn counterfactual(&self, index: usize) -> Vec<Utility> {
        (0..self.actions)
            .map(|k| self.space.deviate(index, self.player, k))
            .map(|i| self.losses.get(i))
            .collect()
    }

    /// Adapt to the joint profile realized at linear index `index`.
    pub fn update(&mut self, index: usize) -> Result<(), NumericalError> {
        let losses = self.counterfactual(index);
        for (j, row) in self.weights.iter_mut().enumerate() {
            let p = self.strategy[j];
            for (w, loss) in row.iter_mut().zip(losses.iter()) {
                *w = (*w - self.eta * p * loss * *w).max(0.);
            }
            let max = row.iter().copied().fold(0., Utility::max);
            if max <= 0. {
                return Err(NumericalError::DegenerateRow {
                    player: self.player,
                    row: j,
                });
            }
            row.iter_mut().for_each(|w| *w /= max);
        }
        self.strategy = stationary(self.player, &self.transitions(), &self.strategy)?;
        Ok(())
    }

    /// Row-normalized weights.
    pub fn transitions(&self) -> Vec<Vec<Probability>> {
        self.weights
            .iter()
            .map(|row| {
                let total = row.iter().sum::<Utility>();
                row.iter().map(|w| w / total).collect()
            })
            .collect()
    }
}
