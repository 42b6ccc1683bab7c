use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::Write;

/// Which solvers a sweep compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
pub enum Mode {
    /// Both linear programs.
    Lp,
    /// Both linear programs and swap regret.
    Sr,
}

/// Repeated benchmarks on random games over a grid of sizes.
///
/// The grid scales the player count at 2 actions each, then the action
/// count at 2 players. Every grid point is repeated on fresh random games.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    mode: Mode,
    players: Vec<usize>,
    actions: Vec<usize>,
    repeats: usize,
    seed: u64,
}

impl Sweep {
    pub fn lp() -> Self {
        Self {
            mode: Mode::Lp,
            players: vec![2, 4, 7, 10],
            actions: vec![2, 10, 25, 50],
            repeats: 10,
            seed: 0,
        }
    }
    pub fn sr() -> Self {
        Self {
            mode: Mode::Sr,
            players: vec![2, 3, 4, 5],
            actions: vec![2, 3, 4, 5],
            repeats: 5,
            seed: 0,
        }
    }
    pub fn with_repeats(self, repeats: usize) -> Self {
        Self { repeats, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `(players, actions per player)` in sweep order.
    pub fn grid(&self) -> Vec<(usize, usize)> {
        let players = self.players.iter().map(|&n| (n, 2));
        let actions = self.actions.iter().map(|&k| (2, k));
        players.chain(actions).collect()
    }

    /// Solvers compared on one game.
    pub fn methods<R: Rng>(&self, rng: &mut R) -> Vec<Method> {
        let mut methods = vec![
            Method::from(ExactSolver::feasible()),
            Method::from(ExactSolver::welfare()),
        ];
        if self.mode == Mode::Sr {
            methods.push(Method::from(
                SwapRegretSolver::epsilon(SWAP_REGRET_EPSILON).seeded(rng.random()),
            ));
        }
        methods
    }

    /// Every record of the sweep. Trials that cannot be built or solved are
    /// logged and skipped.
    pub fn records(&self) -> Vec<Record> {
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        let mut records = Vec::new();
        for (players, actions) in self.grid() {
            log::info!(
                "{:<32}{:<16}{:<16}",
                "benchmarking",
                format!("{} players", players),
                format!("{} actions", actions)
            );
            for _ in 0..self.repeats {
                let game = match Game::random(vec![actions; players], rng) {
                    Ok(game) => game,
                    Err(e) => {
                        log::warn!("{:<32}{}", "skipping game", e);
                        continue;
                    }
                };
                for method in self.methods(rng) {
                    match trial(&game, &method) {
                        Ok(record) => records.push(record),
                        Err(e) => log::warn!("{:<32}{}", method.name(), e),
                    }
                }
            }
        }
        records
    }

    /// Run the sweep and write a CSV with header to `path`.
    pub fn run(&self, path: &std::path::Path) -> anyhow::Result<usize> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let records = self.records();
        let ref mut file = std::io::BufWriter::new(std::fs::File::create(path)?);
        writeln!(file, "{}", Record::header())?;
        for record in records.iter() {
            writeln!(file, "{}", record)?;
        }
        file.flush()?;
        log::info!(
            "{:<32}{}",
            "benchmarking complete",
            path.display()
        );
        Ok(records.len())
    }
}
