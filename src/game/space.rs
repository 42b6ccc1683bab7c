//! Joint action space and its mixed-radix linearization.
use crate::*;

/// Shape of the joint action space: one action count per player.
///
/// Profiles are linearized row-major, so player 0 is the most significant
/// digit and the last player varies fastest. Every payoff tensor and every
/// [`Distribution`] is dense over this index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Space {
    shape: Vec<usize>,
    strides: Vec<usize>,
    size: usize,
}

impl Space {
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
    pub fn players(&self) -> usize {
        self.shape.len()
    }
    pub fn actions(&self, player: Player) -> usize {
        self.shape[player]
    }
    pub fn max_actions(&self) -> usize {
        self.shape.iter().copied().max().unwrap_or(0)
    }
    /// Number of joint action profiles.
    pub fn size(&self) -> usize {
        self.size
    }
    /// Distance in the linear index between consecutive actions of `player`.
    pub fn stride(&self, player: Player) -> usize {
        self.strides[player]
    }

    /// Player `player`'s action within the linear index.
    pub fn action(&self, index: usize, player: Player) -> Action {
        (index / self.strides[player]) % self.shape[player]
    }
    /// Linear index of the profile where `player` switches to `action`.
    pub fn deviate(&self, index: usize, player: Player, action: Action) -> usize {
        let stride = self.strides[player];
        index - self.action(index, player) * stride + action * stride
    }

    /// Checked linearization of a profile.
    pub fn index(&self, actions: &[Action]) -> Result<usize, GameError> {
        if actions.len() != self.players() {
            return Err(GameError::Arity {
                profile: actions.to_vec(),
                players: self.players(),
            });
        }
        for (player, (&action, &n)) in actions.iter().zip(self.shape.iter()).enumerate() {
            if action >= n {
                return Err(GameError::OutOfRange {
                    player,
                    action,
                    actions: n,
                });
            }
        }
        Ok(self.encode(actions))
    }
    /// Unchecked linearization; callers guarantee every action is in range.
    pub fn encode(&self, actions: &[Action]) -> usize {
        actions
            .iter()
            .zip(self.strides.iter())
            .map(|(a, s)| a * s)
            .sum()
    }
    pub fn profile(&self, index: usize) -> Profile {
        (0..self.players())
            .map(|player| self.action(index, player))
            .collect::<Vec<_>>()
            .into()
    }
    /// Every joint profile in linear-index order. Restartable by calling again.
    pub fn profiles(&self) -> impl Iterator<Item = Profile> + '_ {
        (0..self.size).map(|index| self.profile(index))
    }
}

impl TryFrom<Vec<usize>> for Space {
    type Error = GameError;
    fn try_from(shape: Vec<usize>) -> Result<Self, Self::Error> {
        if let Some(player) = shape.iter().position(|&n| n == 0) {
            return Err(GameError::Empty { player });
        }
        let size = shape.iter().map(|&n| n as u128).product::<u128>();
        if size > MAX_JOINT_PROFILES as u128 {
            return Err(GameError::Oversized {
                size,
                limit: MAX_JOINT_PROFILES,
            });
        }
        let mut strides = vec![1; shape.len()];
        for player in (0..shape.len().saturating_sub(1)).rev() {
            strides[player] = strides[player + 1] * shape[player + 1];
        }
        Ok(Self {
            size: size as usize,
            shape,
            strides,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> Space {
        Space::try_from(vec![2, 3, 4]).unwrap()
    }

    #[test]
    fn size_is_product_of_actions() {
        assert_eq!(space().size(), 24);
        assert_eq!(space().max_actions(), 4);
    }

    #[test]
    fn linearization_is_bijective() {
        let space = space();
        for (i, profile) in space.profiles().enumerate() {
            assert_eq!(space.index(profile.actions()).unwrap(), i);
        }
        assert_eq!(space.profiles().count(), 24);
        assert_eq!(space.profile(0).actions(), &[0, 0, 0]);
        assert_eq!(space.profile(23).actions(), &[1, 2, 3]);
    }

    #[test]
    fn deviation_moves_along_one_axis() {
        let space = space();
        let index = space.index(&[1, 2, 0]).unwrap();
        let moved = space.deviate(index, 1, 0);
        assert_eq!(space.profile(moved).actions(), &[1, 0, 0]);
        assert_eq!(space.action(moved, 0), 1);
    }

    #[test]
    fn rejects_out_of_range_profiles() {
        assert_eq!(
            space().index(&[0, 3, 0]),
            Err(GameError::OutOfRange {
                player: 1,
                action: 3,
                actions: 3
            })
        );
        assert!(matches!(
            space().index(&[0, 0]),
            Err(GameError::Arity { .. })
        ));
    }

    #[test]
    fn rejects_empty_and_oversized_spaces() {
        assert_eq!(
            Space::try_from(vec![2, 0]),
            Err(GameError::Empty { player: 1 })
        );
        assert!(matches!(
            Space::try_from(vec![50; 10]),
            Err(GameError::Oversized { .. })
        ));
    }
}
