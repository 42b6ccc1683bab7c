use crate::*;

/// A player's payoff tensor rescaled to losses in `[0, 1]`.
///
/// The best payoff maps to loss 0 and the worst to loss 1. A constant tensor
/// has no scale, so every loss is 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Losses(Vec<Utility>);

impl Losses {
    pub fn get(&self, index: usize) -> Utility {
        self.0[index]
    }
}

impl From<&Tensor> for Losses {
    fn from(tensor: &Tensor) -> Self {
        let max = tensor.max();
        let spread = tensor.spread();
        match spread > 0. {
            false => Self(vec![0.; tensor.values().len()]),
            true => Self(
                tensor
                    .values()
                    .iter()
                    .map(|u| (max - u) / spread)
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_payoff_has_no_loss() {
        let losses = Losses::from(&Tensor::from([[3., 0.], [5., 1.]]));
        assert_eq!(losses.get(2), 0.);
        assert_eq!(losses.get(1), 1.);
        assert!((losses.get(0) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn constant_payoffs_have_no_loss() {
        let losses = Losses::from(&Tensor::from([[4., 4.], [4., 4.]]));
        assert!((0..4).all(|i| losses.get(i) == 0.));
    }
}
