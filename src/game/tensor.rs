use crate::*;

/// Dense row-major payoff tensor for a single player.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    values: Vec<Utility>,
}

impl Tensor {
    pub fn new(shape: Vec<usize>, values: Vec<Utility>) -> Result<Self, GameError> {
        match shape.iter().product::<usize>() == values.len() {
            true => Ok(Self { shape, values }),
            false => Err(GameError::Length {
                len: values.len(),
                shape,
            }),
        }
    }
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
    pub fn values(&self) -> &[Utility] {
        &self.values
    }
    pub fn min(&self) -> Utility {
        self.values.iter().copied().fold(Utility::INFINITY, Utility::min)
    }
    pub fn max(&self) -> Utility {
        self.values.iter().copied().fold(Utility::NEG_INFINITY, Utility::max)
    }
    /// Difference between the largest and smallest payoff.
    pub fn spread(&self) -> Utility {
        match self.values.is_empty() {
            true => 0.,
            false => self.max() - self.min(),
        }
    }
}

/// Two-player payoff matrix, rows indexed by player 0's action.
impl TryFrom<Vec<Vec<Utility>>> for Tensor {
    type Error = GameError;
    fn try_from(rows: Vec<Vec<Utility>>) -> Result<Self, Self::Error> {
        let n = rows.len();
        let m = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != m) {
            return Err(GameError::Ragged);
        }
        Self::new(vec![n, m], rows.into_iter().flatten().collect())
    }
}

impl<const N: usize, const M: usize> From<[[Utility; M]; N]> for Tensor {
    fn from(rows: [[Utility; M]; N]) -> Self {
        Self {
            shape: vec![N, M],
            values: rows.into_iter().flatten().collect(),
        }
    }
}
