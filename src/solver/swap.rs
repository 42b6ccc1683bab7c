use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Approximate correlated equilibrium by independent no-swap-regret play.
///
/// Each round every [`OnlineLearner`] samples an action on its own, the
/// realized joint profile is counted, and every learner updates against that
/// same profile. After exactly `T` rounds the visit counts divided by `T` are
/// the returned distribution. There is no early stopping.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapRegretSolver {
    schedule: Option<Schedule>,
    epsilon: Utility,
    seed: Option<u64>,
}

impl SwapRegretSolver {
    /// Fixed round count and learning rate; violations are judged at `epsilon`.
    pub fn explicit(schedule: Schedule, epsilon: Utility) -> Self {
        Self {
            schedule: Some(schedule),
            epsilon,
            seed: None,
        }
    }
    /// Round count and learning rate derived from `epsilon` at solve time.
    pub fn epsilon(epsilon: Utility) -> Self {
        Self {
            schedule: None,
            epsilon,
            seed: None,
        }
    }
    /// Reproducible sampling.
    pub fn seeded(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Schedule used for `game`.
    pub fn schedule(&self, game: &Game) -> Result<Schedule, SolveError> {
        match self.schedule {
            Some(schedule) => Ok(schedule),
            None => Schedule::epsilon(self.epsilon, game.space().max_actions()),
        }
    }

    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Default for SwapRegretSolver {
    fn default() -> Self {
        Self::explicit(Schedule::default(), SWAP_REGRET_EPSILON)
    }
}

impl Solver for SwapRegretSolver {
    fn name(&self) -> &'static str {
        "Swap Regret"
    }
    fn tolerance(&self) -> Utility {
        self.epsilon
    }
    fn solve(&self, game: &Game) -> Result<Distribution, SolveError> {
        let schedule = self.schedule(game)?;
        let space = game.space();
        let ref mut rng = self.rng();
        let mut learners = (0..game.players())
            .map(|player| OnlineLearner::new(game, player, schedule.learning_rate()))
            .collect::<Vec<_>>();
        let mut counts = vec![0usize; space.size()];
        let mut actions = vec![0; game.players()];
        log::info!(
            "{:<32}{:<16}{:<16}",
            "solving swap regret",
            format!("T {}", schedule.rounds()),
            format!("η {:.4}", schedule.learning_rate())
        );
        for round in 0..schedule.rounds() {
            for (slot, learner) in actions.iter_mut().zip(learners.iter()) {
                *slot = learner.sample(rng)?;
            }
            let index = space.encode(&actions);
            counts[index] += 1;
            for learner in learners.iter_mut() {
                learner.update(index)?;
            }
            if round % SWAP_REGRET_LOG_INTERVAL == 0 {
                log::debug!("{:<32}{:<16}", "swap regret round", round);
            }
        }
        Ok(Distribution::empirical(
            space.clone(),
            &counts,
            schedule.rounds(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dilemma() -> Game {
        Game::custom(
            vec![2, 2],
            vec![
                Tensor::from([[3., 0.], [5., 1.]]),
                Tensor::from([[3., 5.], [0., 1.]]),
            ],
        )
        .unwrap()
    }

    #[test]
    fn output_is_a_distribution() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let game = Game::random(vec![2, 3, 2], rng).unwrap();
        let solver = SwapRegretSolver::explicit(Schedule::explicit(500, 0.1).unwrap(), 0.1)
            .seeded(5);
        let distribution = solver.solve(&game).unwrap();
        assert!((distribution.total() - 1.).abs() < MASS_TOLERANCE);
        assert!(distribution.min() >= 0.);
        assert_eq!(distribution.space(), game.space());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let game = Game::chicken(vec![2, 2]).unwrap();
        let solver = SwapRegretSolver::explicit(Schedule::explicit(300, 0.1).unwrap(), 0.1)
            .seeded(42);
        assert_eq!(solver.solve(&game).unwrap(), solver.solve(&game).unwrap());
    }

    #[test]
    fn play_concentrates_on_dominant_strategies() {
        let solver = SwapRegretSolver::default().seeded(1);
        let distribution = solver.solve(&dilemma()).unwrap();
        assert!(distribution.density(&Profile::from(vec![1, 1])) > 0.95);
    }

    #[test]
    fn epsilon_mode_derives_schedule() {
        let game = Game::chicken(vec![2, 2]).unwrap();
        let solver = SwapRegretSolver::epsilon(0.1);
        assert_eq!(solver.schedule(&game).unwrap(), Schedule::epsilon(0.1, 2).unwrap());
        assert_eq!(solver.tolerance(), 0.1);
        assert!(matches!(
            SwapRegretSolver::epsilon(0.).solve(&game),
            Err(SolveError::Schedule(_))
        ));
    }

    #[test]
    fn numerical_collapse_is_surfaced() {
        let solver = SwapRegretSolver::explicit(Schedule::explicit(100, 8.).unwrap(), 0.1)
            .seeded(0);
        assert!(matches!(
            solver.solve(&dilemma()),
            Err(SolveError::Numerical(NumericalError::DegenerateRow { .. }))
        ));
    }

    #[test]
    fn single_action_players_always_play_it() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let game = Game::random(vec![1, 3], rng).unwrap();
        let distribution = SwapRegretSolver::epsilon(0.2).seeded(9).solve(&game).unwrap();
        assert!((distribution.total() - 1.).abs() < MASS_TOLERANCE);
        assert!(distribution.support().all(|(profile, _)| profile[0] == 0));
    }
}
