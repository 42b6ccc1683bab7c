use crate::*;

/// One action per player, in player order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Profile(Vec<Action>);

impl Profile {
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
    pub fn players(&self) -> usize {
        self.0.len()
    }
    /// The same profile with `player`'s action replaced.
    pub fn deviate(&self, player: Player, action: Action) -> Self {
        let mut actions = self.0.clone();
        actions[player] = action;
        Self(actions)
    }
}

impl From<Vec<Action>> for Profile {
    fn from(actions: Vec<Action>) -> Self {
        Self(actions)
    }
}

impl From<&[Action]> for Profile {
    fn from(actions: &[Action]) -> Self {
        Self(actions.to_vec())
    }
}

impl std::ops::Index<Player> for Profile {
    type Output = Action;
    fn index(&self, player: Player) -> &Self::Output {
        &self.0[player]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({})",
            self.0
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
