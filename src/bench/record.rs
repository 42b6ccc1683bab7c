use crate::*;

/// One solver run on one game, as a CSV row.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub players: usize,
    pub max_actions: usize,
    pub solver: &'static str,
    /// Wall-clock seconds spent inside `solve()`.
    pub runtime: f64,
    /// Largest violation magnitude, 0 when there is none.
    pub max_violation: Utility,
    pub violations: usize,
    pub welfare: Utility,
}

impl Record {
    pub fn header() -> &'static str {
        "NPlayers,MaxNActions,Solver,Runtime,MaxViolation,NViolations,Welfare"
    }
    pub fn new(
        game: &Game,
        solver: &'static str,
        runtime: f64,
        violations: &[Violation],
        welfare: Utility,
    ) -> Self {
        Self {
            players: game.players(),
            max_actions: game.space().max_actions(),
            solver,
            runtime,
            max_violation: violations
                .iter()
                .map(|v| v.magnitude)
                .fold(0., Utility::max),
            violations: violations.len(),
            welfare,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{}",
            self.players,
            self.max_actions,
            self.solver,
            self.runtime,
            self.max_violation,
            self.violations,
            self.welfare
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_matches_header_columns() {
        let game = Game::chicken(vec![2, 2]).unwrap();
        let violations = [
            Violation {
                player: 0,
                current: 0,
                alt: 1,
                magnitude: 0.5,
            },
            Violation {
                player: 1,
                current: 1,
                alt: 0,
                magnitude: 1.5,
            },
        ];
        let record = Record::new(&game, "Swap Regret", 0.25, &violations, -2.);
        assert_eq!(record.max_violation, 1.5);
        assert_eq!(record.to_string(), "2,2,Swap Regret,0.25,1.5,2,-2");
        assert_eq!(
            record.to_string().split(',').count(),
            Record::header().split(',').count()
        );
    }

    #[test]
    fn no_violations_reports_zero() {
        let game = Game::chicken(vec![2, 2]).unwrap();
        let record = Record::new(&game, "Linear Programming", 0.1, &[], 0.);
        assert_eq!(record.max_violation, 0.);
        assert_eq!(record.violations, 0);
    }
}
