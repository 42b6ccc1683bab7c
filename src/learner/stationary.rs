//! Stationary distribution of a row-stochastic matrix by power iteration.
use crate::*;

/// Fixed point `p = p·Q` of the row-stochastic matrix `q`, warm-started at `guess`.
///
/// Iterates the lazy chain `(I + Q) / 2`, which shares every stationary
/// distribution with `Q` but is aperiodic, so the iteration cannot cycle.
/// Each step renormalizes to unit mass. Stops once the residual
/// `‖p·Q − p‖₁` falls below [`STATIONARY_TOLERANCE`].
pub fn stationary(
    player: Player,
    q: &[Vec<Probability>],
    guess: &[Probability],
) -> Result<Vec<Probability>, NumericalError> {
    let mut p = guess.to_vec();
    let mut residual = Probability::INFINITY;
    for _ in 0..STATIONARY_ITERATIONS {
        let step = transition(q, &p);
        residual = step.iter().zip(p.iter()).map(|(a, b)| (a - b).abs()).sum();
        if residual < STATIONARY_TOLERANCE {
            return Ok(normalize(step));
        }
        p = normalize(step.iter().zip(p.iter()).map(|(a, b)| (a + b) / 2.).collect());
    }
    Err(NumericalError::Unconverged {
        player,
        iterations: STATIONARY_ITERATIONS,
        residual,
    })
}

/// One step of the chain: `p·Q`.
fn transition(q: &[Vec<Probability>], p: &[Probability]) -> Vec<Probability> {
    let mut next = vec![0.; p.len()];
    for (row, &mass) in q.iter().zip(p.iter()) {
        for (k, &qjk) in row.iter().enumerate() {
            next[k] += mass * qjk;
        }
    }
    next
}

fn normalize(p: Vec<Probability>) -> Vec<Probability> {
    let total = p.iter().map(|x| x.max(0.)).sum::<Probability>();
    p.into_iter().map(|x| x.max(0.) / total).collect()
}
