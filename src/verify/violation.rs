use crate::*;

/// A broken incentive constraint.
///
/// Whenever the distribution recommends `current` to `player`, always
/// switching to `alt` instead would gain `magnitude` in expectation.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Violation {
    pub player: Player,
    pub current: Action,
    pub alt: Action,
    pub magnitude: Utility,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "player {} gains {:.4} by swapping {} -> {}",
            self.player, self.magnitude, self.current, self.alt
        )
    }
}

/// Violation magnitudes of one player as a `current × alt` grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    player: Player,
    cells: Vec<Vec<Utility>>,
}

impl Heatmap {
    /// Grid for `player` with `actions` actions; cells without a violation are 0.
    pub fn new(player: Player, actions: usize, violations: &[Violation]) -> Self {
        let mut cells = vec![vec![0.; actions]; actions];
        violations
            .iter()
            .filter(|v| v.player == player)
            .for_each(|v| cells[v.current][v.alt] = v.magnitude);
        Self { player, cells }
    }
    /// One grid per player of `game`.
    pub fn all(game: &Game, violations: &[Violation]) -> Vec<Self> {
        (0..game.players())
            .map(|player| Self::new(player, game.actions(player), violations))
            .collect()
    }
    pub fn get(&self, current: Action, alt: Action) -> Utility {
        self.cells[current][alt]
    }
}

impl std::fmt::Display for Heatmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Player {}'s violations (current \\ alt)", self.player)?;
        write!(f, "{:>8}", "")?;
        for alt in 0..self.cells.len() {
            write!(f, "{:>8}", alt)?;
        }
        writeln!(f)?;
        for (current, row) in self.cells.iter().enumerate() {
            write!(f, "{:>8}", current)?;
            for magnitude in row {
                write!(f, "{:>8.2}", magnitude)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heatmap_places_magnitudes() {
        let violations = [
            Violation {
                player: 1,
                current: 0,
                alt: 2,
                magnitude: 0.5,
            },
            Violation {
                player: 0,
                current: 1,
                alt: 0,
                magnitude: 3.,
            },
        ];
        let heatmap = Heatmap::new(1, 3, &violations);
        assert_eq!(heatmap.get(0, 2), 0.5);
        assert_eq!(heatmap.get(1, 0), 0.);
        assert!(heatmap.to_string().contains("0.50"));
    }
}
