use crate::*;

/// Either solver, dispatched by variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Exact(ExactSolver),
    SwapRegret(SwapRegretSolver),
}

impl Solver for Method {
    fn name(&self) -> &'static str {
        match self {
            Self::Exact(solver) => solver.name(),
            Self::SwapRegret(solver) => solver.name(),
        }
    }
    fn tolerance(&self) -> Utility {
        match self {
            Self::Exact(solver) => solver.tolerance(),
            Self::SwapRegret(solver) => solver.tolerance(),
        }
    }
    fn solve(&self, game: &Game) -> Result<Distribution, SolveError> {
        match self {
            Self::Exact(solver) => solver.solve(game),
            Self::SwapRegret(solver) => solver.solve(game),
        }
    }
}

impl From<ExactSolver> for Method {
    fn from(solver: ExactSolver) -> Self {
        Self::Exact(solver)
    }
}

impl From<SwapRegretSolver> for Method {
    fn from(solver: SwapRegretSolver) -> Self {
        Self::SwapRegret(solver)
    }
}
