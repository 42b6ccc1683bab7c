use crate::*;
use minilp::ComparisonOp;
use minilp::LinearExpr;
use minilp::OptimizationDirection;
use minilp::Problem;

/// Exact correlated equilibrium as a linear program.
///
/// One variable `p_a ≥ 0` per joint profile, total mass 1, and for every
/// player `i` and ordered pair `current ≠ alt` the incentive constraint
/// `Σ_{a_i = current} (u_i(a) − u_i(a with alt)) · p_a ≥ 0`. The objective is
/// total payoff when maximizing welfare and zero otherwise. Solving is
/// delegated to the `minilp` simplex solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExactSolver {
    maximize_welfare: bool,
}

impl ExactSolver {
    /// Any feasible equilibrium.
    pub fn feasible() -> Self {
        Self {
            maximize_welfare: false,
        }
    }
    /// The equilibrium maximizing total payoff.
    pub fn welfare() -> Self {
        Self {
            maximize_welfare: true,
        }
    }
    pub fn maximizes_welfare(&self) -> bool {
        self.maximize_welfare
    }

    fn objective(&self, game: &Game, index: usize) -> Utility {
        match self.maximize_welfare {
            true => game.welfare(index),
            false => 0.,
        }
    }
}

impl Solver for ExactSolver {
    fn name(&self) -> &'static str {
        match self.maximize_welfare {
            true => "Linear Programming - Social Welfare",
            false => "Linear Programming",
        }
    }
    fn tolerance(&self) -> Utility {
        VIOLATION_EPSILON
    }
    fn solve(&self, game: &Game) -> Result<Distribution, SolveError> {
        let space = game.space();
        log::info!(
            "{:<32}{:<16}",
            "solving linear program",
            format!("vars {}", space.size())
        );
        let mut problem = Problem::new(OptimizationDirection::Maximize);
        let vars = (0..space.size())
            .map(|index| problem.add_var(self.objective(game, index), (0., f64::INFINITY)))
            .collect::<Vec<_>>();
        let mut total = LinearExpr::empty();
        vars.iter().for_each(|&var| total.add(var, 1.));
        problem.add_constraint(total, ComparisonOp::Eq, 1.);
        for player in 0..game.players() {
            for current in 0..game.actions(player) {
                for alt in (0..game.actions(player)).filter(|&alt| alt != current) {
                    let terms = (0..space.size())
                        .filter(|&index| space.action(index, player) == current)
                        .map(|index| {
                            let deviation = space.deviate(index, player, alt);
                            let gain = game.utility(player, index) - game.utility(player, deviation);
                            (index, gain)
                        })
                        .filter(|&(_, gain)| gain != 0.)
                        .collect::<Vec<_>>();
                    // indifferent deviations constrain nothing
                    if terms.is_empty() {
                        continue;
                    }
                    let mut incentive = LinearExpr::empty();
                    terms
                        .into_iter()
                        .for_each(|(index, gain)| incentive.add(vars[index], gain));
                    problem.add_constraint(incentive, ComparisonOp::Ge, 0.);
                }
            }
        }
        let solution = problem.solve()?;
        log::debug!("{:<32}{:<16.4}", "linear program objective", solution.objective());
        Distribution::new(
            space.clone(),
            vars.iter().map(|&var| solution[var]).collect(),
        )
        .map_err(SolveError::from)
    }
}
