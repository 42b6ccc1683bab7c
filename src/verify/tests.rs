use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn chicken() -> Game {
    Game::chicken(vec![2, 2]).unwrap()
}

fn congestion() -> Game {
    Game::custom(
        vec![2, 2],
        vec![
            Tensor::from([[-5., -2.], [-3., -6.]]),
            Tensor::from([[-5., -3.], [-2., -6.]]),
        ],
    )
    .unwrap()
}

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

fn arbitrary(space: &Space, rng: &mut SmallRng) -> Distribution {
    let weights = (0..space.size())
        .map(|_| rng.random::<Probability>())
        .collect::<Vec<_>>();
    let total = weights.iter().sum::<Probability>();
    Distribution::new(
        space.clone(),
        weights.into_iter().map(|w| w / total).collect(),
    )
    .unwrap()
}

/// Swap the two players of a two-player game and of a distribution over it.
fn relabel(game: &Game, distribution: &Distribution) -> (Game, Distribution) {
    let (n, m) = (game.actions(0), game.actions(1));
    let transpose = |values: &[Utility]| {
        (0..m)
            .flat_map(|b| (0..n).map(move |a| values[a * m + b]))
            .collect::<Vec<_>>()
    };
    let swapped = Game::custom(
        vec![m, n],
        vec![
            Tensor::new(vec![m, n], transpose(game.tensor(1).values())).unwrap(),
            Tensor::new(vec![m, n], transpose(game.tensor(0).values())).unwrap(),
        ],
    )
    .unwrap();
    let mass = transpose(distribution.mass());
    let distribution = Distribution::new(swapped.space().clone(), mass).unwrap();
    (swapped, distribution)
}

#[test]
fn exact_solutions_are_valid_distributions() {
    let ref mut rng = SmallRng::seed_from_u64(17);
    for actions in [vec![2, 2], vec![3, 2], vec![2, 2, 2]] {
        let game = Game::random(actions, rng).unwrap();
        for solver in [ExactSolver::feasible(), ExactSolver::welfare()] {
            let distribution = solver.solve(&game).unwrap();
            assert!((distribution.total() - 1.).abs() < MASS_TOLERANCE);
            assert!(distribution.min() >= NEGATIVE_TOLERANCE);
            assert!(
                collect_violations(&game, &distribution, VIOLATION_EPSILON)
                    .unwrap()
                    .is_empty()
            );
        }
    }
}

#[test]
fn swap_regret_solutions_are_valid_distributions() {
    let ref mut rng = SmallRng::seed_from_u64(23);
    let game = Game::random(vec![3, 3], rng).unwrap();
    let distribution = SwapRegretSolver::epsilon(0.3).seeded(4).solve(&game).unwrap();
    assert!((distribution.total() - 1.).abs() < MASS_TOLERANCE);
    assert!(distribution.min() >= NEGATIVE_TOLERANCE);
}

#[test]
fn verification_is_deterministic_and_idempotent() {
    let ref mut rng = SmallRng::seed_from_u64(29);
    let game = Game::random(vec![3, 2, 2], rng).unwrap();
    let distribution = arbitrary(game.space(), rng);
    let once = collect_violations(&game, &distribution, 0.01).unwrap();
    let twice = collect_violations(&game, &distribution, 0.01).unwrap();
    assert_eq!(once, twice);
    assert!(!once.is_empty());
}

#[test]
fn verification_is_symmetric_under_relabeling() {
    let ref mut rng = SmallRng::seed_from_u64(31);
    let game = Game::random(vec![2, 3], rng).unwrap();
    let distribution = arbitrary(game.space(), rng);
    let (swapped, relabeled) = relabel(&game, &distribution);
    let key = |v: &Violation| (v.player, v.current, v.alt);
    let mut original = collect_violations(&game, &distribution, 0.01)
        .unwrap()
        .into_iter()
        .map(|v| Violation {
            player: 1 - v.player,
            ..v
        })
        .collect::<Vec<_>>();
    let mut mirrored = collect_violations(&swapped, &relabeled, 0.01).unwrap();
    original.sort_by_key(key);
    mirrored.sort_by_key(key);
    assert_eq!(original.len(), mirrored.len());
    for (a, b) in original.iter().zip(mirrored.iter()) {
        assert_eq!(key(a), key(b));
        assert!((a.magnitude - b.magnitude).abs() < 1e-9);
    }
}

#[test]
fn single_action_players_never_deviate() {
    let ref mut rng = SmallRng::seed_from_u64(37);
    let game = Game::random(vec![1, 4], rng).unwrap();
    let distribution = arbitrary(game.space(), rng);
    let violations = collect_violations(&game, &distribution, 0.).unwrap();
    assert!(violations.iter().all(|v| v.player != 0));
}

#[test]
fn chicken_welfare_equilibrium() {
    let game = chicken();
    let distribution = ExactSolver::welfare().solve(&game).unwrap();
    assert!(collect_violations(&game, &distribution, 0.01).unwrap().is_empty());
}

#[test]
fn congestion_welfare_equilibrium() {
    let game = congestion();
    let distribution = ExactSolver::welfare().solve(&game).unwrap();
    assert!(collect_violations(&game, &distribution, 0.01).unwrap().is_empty());
    let uniform = Distribution::uniform(game.space().clone());
    let best = social_welfare(&distribution, &game).unwrap();
    let flat = social_welfare(&uniform, &game).unwrap();
    assert!(best >= flat);
}

#[test]
fn congestion_template_equilibrium() {
    let game = Game::congestion(vec![2, 2]).unwrap();
    let distribution = ExactSolver::feasible().solve(&game).unwrap();
    assert!(collect_violations(&game, &distribution, 0.01).unwrap().is_empty());
}

#[test]
fn swap_regret_converges_on_two_by_two_games() {
    let schedule = Schedule::explicit(10_000, 0.1).unwrap();
    for game in [dilemma(), chicken()] {
        let solver = SwapRegretSolver::explicit(schedule, 0.1).seeded(2024);
        let distribution = solver.solve(&game).unwrap();
        let violations = collect_violations(&game, &distribution, 0.1).unwrap();
        assert!(violations.len() <= 1, "{:?}", violations);
    }
}

#[test]
fn constant_games_are_trivially_in_equilibrium() {
    let flat = Tensor::from([[1., 1., 1.], [1., 1., 1.]]);
    let game = Game::custom(vec![2, 3], vec![flat.clone(), flat]).unwrap();
    let uniform = Distribution::uniform(game.space().clone());
    assert!(collect_violations(&game, &uniform, 0.).unwrap().is_empty());
    let learned = SwapRegretSolver::explicit(Schedule::explicit(1_000, 0.1).unwrap(), 0.1)
        .seeded(8)
        .solve(&game)
        .unwrap();
    assert!(collect_violations(&game, &learned, 0.).unwrap().is_empty());
    let exact = ExactSolver::welfare().solve(&game).unwrap();
    assert!(collect_violations(&game, &exact, 0.).unwrap().is_empty());
}

#[test]
fn malformed_input_is_not_an_equilibrium_verdict() {
    let game = chicken();
    let empty = Distribution::new(game.space().clone(), vec![0.; 4]).unwrap();
    assert!(matches!(
        collect_violations(&game, &empty, 0.01),
        Err(VerifyError::Mass { total }) if total == 0.
    ));
}
