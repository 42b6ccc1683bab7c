use crate::*;

/// Every incentive constraint broken by more than `epsilon`.
///
/// For player `i` and ordered pair `current ≠ alt`, compares
/// `lhs = Σ_{a_i = current} p(a)·u_i(a)` against
/// `rhs = Σ_{a_i = current} p(a)·u_i(a with alt)` and reports
/// `lhs < rhs − epsilon` with magnitude `rhs − lhs`. An empty result is the
/// defining property of an `epsilon`-correlated equilibrium.
///
/// Malformed input (wrong space, mass not 1, negative mass) is rejected
/// before any constraint is evaluated.
pub fn collect_violations(
    game: &Game,
    distribution: &Distribution,
    epsilon: Utility,
) -> Result<Vec<Violation>, VerifyError> {
    validate(game, distribution)?;
    Ok(incentives(game, distribution)
        .iter()
        .flat_map(|incentive| incentive.violations(epsilon))
        .collect())
}

/// Expected total payoff over profiles with positive mass.
pub fn social_welfare(distribution: &Distribution, game: &Game) -> Result<Utility, VerifyError> {
    conform(game, distribution)?;
    Ok(distribution
        .mass()
        .iter()
        .enumerate()
        .filter(|(_, p)| **p > 0.)
        .map(|(index, p)| p * game.welfare(index))
        .sum())
}

/// Reject distributions that are not valid input for the verifier.
pub fn validate(game: &Game, distribution: &Distribution) -> Result<(), VerifyError> {
    conform(game, distribution)?;
    if let Some(index) = distribution.mass().iter().position(|p| !p.is_finite()) {
        return Err(VerifyError::NonFinite {
            profile: distribution.space().profile(index),
        });
    }
    let total = distribution.total();
    if (total - 1.).abs() > MASS_TOLERANCE {
        return Err(VerifyError::Mass { total });
    }
    match distribution
        .mass()
        .iter()
        .position(|&p| p < NEGATIVE_TOLERANCE)
    {
        Some(index) => Err(VerifyError::Negative {
            profile: distribution.space().profile(index),
            mass: distribution.get(index),
        }),
        None => Ok(()),
    }
}

fn conform(game: &Game, distribution: &Distribution) -> Result<(), VerifyError> {
    match distribution.space() == game.space() {
        true => Ok(()),
        false => Err(VerifyError::Shape {
            found: distribution.space().shape().to_vec(),
            expected: game.space().shape().to_vec(),
        }),
    }
}

/// Both sides of every incentive constraint of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct Incentive {
    player: Player,
    /// `lhs` per recommended action.
    follow: Vec<Utility>,
    /// `rhs` per recommended action and alternative.
    deviate: Vec<Vec<Utility>>,
}

impl Incentive {
    /// Accumulate both sides in a single pass over the joint space.
    pub fn new(game: &Game, distribution: &Distribution, player: Player) -> Self {
        let space = game.space();
        let n = game.actions(player);
        let mut follow = vec![0.; n];
        let mut deviate = vec![vec![0.; n]; n];
        for (index, &p) in distribution.mass().iter().enumerate() {
            if p == 0. {
                continue;
            }
            let current = space.action(index, player);
            follow[current] += p * game.utility(player, index);
            for (alt, rhs) in deviate[current].iter_mut().enumerate() {
                *rhs += p * game.utility(player, space.deviate(index, player, alt));
            }
        }
        Self {
            player,
            follow,
            deviate,
        }
    }
    pub fn lhs(&self, current: Action) -> Utility {
        self.follow[current]
    }
    pub fn rhs(&self, current: Action, alt: Action) -> Utility {
        self.deviate[current][alt]
    }
    pub fn violations(&self, epsilon: Utility) -> Vec<Violation> {
        let n = self.follow.len();
        (0..n)
            .flat_map(|current| (0..n).map(move |alt| (current, alt)))
            .filter(|(current, alt)| current != alt)
            .filter(|&(current, alt)| self.lhs(current) < self.rhs(current, alt) - epsilon)
            .map(|(current, alt)| Violation {
                player: self.player,
                current,
                alt,
                magnitude: self.rhs(current, alt) - self.lhs(current),
            })
            .collect()
    }
}

/// One [`Incentive`] per player, in player order.
#[cfg(feature = "server")]
pub fn incentives(game: &Game, distribution: &Distribution) -> Vec<Incentive> {
    use rayon::iter::IntoParallelIterator;
    use rayon::iter::ParallelIterator;
    (0..game.players())
        .into_par_iter()
        .map(|player| Incentive::new(game, distribution, player))
        .collect()
}

/// One [`Incentive`] per player, in player order.
#[cfg(not(feature = "server"))]
pub fn incentives(game: &Game, distribution: &Distribution) -> Vec<Incentive> {
    (0..game.players())
        .map(|player| Incentive::new(game, distribution, player))
        .collect()
}
