//! Benchmark Binary
//!
//! Solve a single game and inspect the result, or run a full sweep
//! of random games and write CSV records.

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use correlate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Solve one game and report its violations", alias = "s")]
    Solve {
        #[arg(long, value_enum, default_value_t = GameKind::Random)]
        kind: GameKind,
        #[arg(long, default_value_t = 2)]
        players: usize,
        #[arg(long, default_value_t = 2)]
        actions: usize,
        #[arg(long, value_enum, default_value = "swap-regret")]
        solver: Choice,
        #[arg(long, conflicts_with_all = ["rounds", "learning_rate"])]
        epsilon: Option<Utility>,
        #[arg(long, requires = "learning_rate")]
        rounds: Option<usize>,
        #[arg(long, requires = "rounds")]
        learning_rate: Option<Utility>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    #[command(about = "Benchmark solvers over a grid of random games", alias = "b")]
    Sweep {
        #[arg(long, value_enum, default_value = "sr")]
        mode: Mode,
        #[arg(long)]
        out: Option<std::path::PathBuf>,
        #[arg(long)]
        repeats: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Choice {
    Lp,
    LpWelfare,
    SwapRegret,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    kind: GameKind,
    solver: &'static str,
    runtime: f64,
    welfare: Utility,
    distribution: &'a Distribution,
    violations: &'a [Violation],
}

fn main() -> anyhow::Result<()> {
    log()?;
    match Args::parse().command {
        Command::Solve {
            kind,
            players,
            actions,
            solver,
            epsilon,
            rounds,
            learning_rate,
            seed,
            json,
        } => {
            let ref mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let game = Game::new(players, vec![actions; players], kind, None, rng)?;
            let method = match solver {
                Choice::Lp => Method::from(ExactSolver::feasible()),
                Choice::LpWelfare => Method::from(ExactSolver::welfare()),
                Choice::SwapRegret => {
                    let solver = match (rounds, learning_rate) {
                        (Some(t), Some(eta)) => SwapRegretSolver::explicit(
                            Schedule::explicit(t, eta)?,
                            epsilon.unwrap_or(SWAP_REGRET_EPSILON),
                        ),
                        _ => SwapRegretSolver::epsilon(epsilon.unwrap_or(SWAP_REGRET_EPSILON)),
                    };
                    match seed {
                        Some(seed) => Method::from(solver.seeded(seed)),
                        None => Method::from(solver),
                    }
                }
            };
            let start = Instant::now();
            let distribution = method.solve(&game)?;
            let runtime = start.elapsed().as_secs_f64();
            let violations = collect_violations(&game, &distribution, method.tolerance())?;
            let welfare = social_welfare(&distribution, &game)?;
            if json {
                let report = Report {
                    kind,
                    solver: method.name(),
                    runtime,
                    welfare,
                    distribution: &distribution,
                    violations: &violations,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", game);
                println!("{}", distribution);
                for heatmap in Heatmap::all(&game, &violations) {
                    println!("{}", heatmap);
                }
                println!("{:<16}{}", "solver", method.name());
                println!("{:<16}{:.4}s", "runtime", runtime);
                println!("{:<16}{}", "violations", violations.len());
                println!("{:<16}{:.4}", "welfare", welfare);
            }
            Ok(())
        }
        Command::Sweep {
            mode,
            out,
            repeats,
            seed,
        } => {
            let sweep = match mode {
                Mode::Lp => Sweep::lp(),
                Mode::Sr => Sweep::sr(),
            };
            let sweep = match repeats {
                Some(repeats) => sweep.with_repeats(repeats),
                None => sweep,
            };
            let path = out.unwrap_or_else(|| match mode {
                Mode::Lp => "logs/lp_benchmarking.csv".into(),
                Mode::Sr => "logs/sr_benchmarking.csv".into(),
            });
            let n = sweep.with_seed(seed).run(&path)?;
            log::info!("{:<32}{}", "records written", n);
            Ok(())
        }
    }
}
