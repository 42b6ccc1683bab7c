use crate::*;
use std::time::Instant;

/// Solve `game` with every method, verifying each output at that method's
/// tolerance. Only the `solve()` call is timed.
pub fn benchmark(game: &Game, methods: &[Method]) -> anyhow::Result<Vec<Record>> {
    methods.iter().map(|method| trial(game, method)).collect()
}

/// A single timed solve followed by verification and welfare.
pub fn trial<S: Solver>(game: &Game, solver: &S) -> anyhow::Result<Record> {
    let start = Instant::now();
    let distribution = solver.solve(game)?;
    let runtime = start.elapsed().as_secs_f64();
    let violations = collect_violations(game, &distribution, solver.tolerance())?;
    let welfare = social_welfare(&distribution, game)?;
    log::debug!(
        "{:<32}{:>8.4}s {:>4} violations",
        solver.name(),
        runtime,
        violations.len()
    );
    Ok(Record::new(game, solver.name(), runtime, &violations, welfare))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn one_record_per_method() {
        let ref mut rng = SmallRng::seed_from_u64(5);
        let game = Game::random(vec![2, 3], rng).unwrap();
        let methods = [
            Method::from(ExactSolver::feasible()),
            Method::from(ExactSolver::welfare()),
            Method::from(SwapRegretSolver::epsilon(0.5).seeded(1)),
        ];
        let records = benchmark(&game, &methods).unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.players == 2 && r.max_actions == 3));
        assert!(records.iter().all(|r| r.runtime >= 0.));
        assert_eq!(records[0].violations, 0);
        assert_eq!(records[1].violations, 0);
        assert!(records[1].welfare >= records[0].welfare - 1e-6);
    }

    #[test]
    fn solver_failure_propagates() {
        let game = Game::custom(
            vec![2, 2],
            vec![
                Tensor::from([[3., 0.], [5., 1.]]),
                Tensor::from([[3., 5.], [0., 1.]]),
            ],
        )
        .unwrap();
        let unstable = SwapRegretSolver::explicit(Schedule::explicit(100, 8.).unwrap(), 0.1).seeded(3);
        assert!(trial(&game, &unstable).is_err());
    }
}
