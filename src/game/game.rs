use crate::*;
use rand::Rng;

/// Immutable n-player normal-form game.
///
/// Holds one dense payoff [`Tensor`] per player, each shaped exactly like the
/// joint action [`Space`]. Construction validates every shape; after that the
/// game is read-only input to every solver and to the verifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    space: Space,
    tensors: Vec<Tensor>,
}

impl Game {
    /// General constructor dispatching on the payoff template.
    ///
    /// `payoffs` is only consulted for [`GameKind::Custom`], where it is required.
    pub fn new<R: Rng>(
        players: usize,
        actions: Vec<usize>,
        kind: GameKind,
        payoffs: Option<Vec<Tensor>>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if players == 0 {
            return Err(GameError::NoPlayers);
        }
        if players != actions.len() {
            return Err(GameError::Players {
                declared: players,
                given: actions.len(),
            });
        }
        match kind {
            GameKind::Random => Self::random(actions, rng),
            GameKind::Chicken => Self::chicken(actions),
            GameKind::Congestion => Self::congestion(actions),
            GameKind::Custom => match payoffs {
                Some(tensors) => Self::custom(actions, tensors),
                None => Err(GameError::Tensors {
                    players,
                    given: 0,
                }),
            },
        }
    }

    /// Independent uniform payoffs for every player and profile.
    pub fn random<R: Rng>(actions: Vec<usize>, rng: &mut R) -> Result<Self, GameError> {
        let space = Self::space_of(actions)?;
        let tensors = (0..space.players())
            .map(|_| {
                (0..space.size())
                    .map(|_| rng.random_range(PAYOFF_MIN..PAYOFF_MAX))
                    .collect::<Vec<Utility>>()
            })
            .map(|values| Tensor::new(space.shape().to_vec(), values))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { space, tensors })
    }

    /// Chicken: swerving against a swerver is neutral, daring against a
    /// swerver wins, and mutual daring is a crash.
    pub fn chicken(actions: Vec<usize>) -> Result<Self, GameError> {
        let requirement = match actions.as_slice() {
            [a, b] if a != b => Some("both players to have the same number of actions"),
            [a, b] if *a < 2 || *b < 2 => Some("both players to have at least two actions"),
            [_, _] => None,
            _ => Some("exactly two players"),
        };
        if let Some(requirement) = requirement {
            return Err(GameError::Template {
                kind: GameKind::Chicken,
                requirement,
            });
        }
        Self::custom(
            actions,
            vec![
                Tensor::from([[0., 1.], [-1., -10.]]),
                Tensor::from([[0., -1.], [1., -10.]]),
            ],
        )
    }

    /// Congestion: matching routes cost nothing, otherwise the player on
    /// route 0 pays 1 and anyone else pays 2. Both players share the matrix.
    pub fn congestion(actions: Vec<usize>) -> Result<Self, GameError> {
        if actions.len() != 2 {
            return Err(GameError::Template {
                kind: GameKind::Congestion,
                requirement: "exactly two players",
            });
        }
        let space = Self::space_of(actions)?;
        let values = (0..space.size())
            .map(|index| (space.action(index, 0), space.action(index, 1)))
            .map(|(i, j)| match (i == j, i == 0) {
                (true, _) => 0.,
                (false, true) => -1.,
                (false, false) => -2.,
            })
            .collect::<Vec<Utility>>();
        let tensor = Tensor::new(space.shape().to_vec(), values)?;
        Ok(Self {
            tensors: vec![tensor.clone(), tensor],
            space,
        })
    }

    /// Caller-supplied tensors, one per player, each shaped like the joint space.
    pub fn custom(actions: Vec<usize>, tensors: Vec<Tensor>) -> Result<Self, GameError> {
        let space = Self::space_of(actions)?;
        if tensors.len() != space.players() {
            return Err(GameError::Tensors {
                players: space.players(),
                given: tensors.len(),
            });
        }
        if let Some((player, tensor)) = tensors
            .iter()
            .enumerate()
            .find(|(_, t)| t.shape() != space.shape())
        {
            return Err(GameError::Shape {
                player,
                found: tensor.shape().to_vec(),
                expected: space.shape().to_vec(),
            });
        }
        Ok(Self { space, tensors })
    }

    fn space_of(actions: Vec<usize>) -> Result<Space, GameError> {
        match actions.is_empty() {
            true => Err(GameError::NoPlayers),
            false => Space::try_from(actions),
        }
    }
}

impl Game {
    pub fn players(&self) -> usize {
        self.space.players()
    }
    pub fn actions(&self, player: Player) -> usize {
        self.space.actions(player)
    }
    pub fn space(&self) -> &Space {
        &self.space
    }
    pub fn tensor(&self, player: Player) -> &Tensor {
        &self.tensors[player]
    }
    /// Every joint action profile, lazily, in linear-index order.
    pub fn profiles(&self) -> impl Iterator<Item = Profile> + '_ {
        self.space.profiles()
    }
    /// Per-player payoffs at a joint action profile.
    pub fn payoff(&self, actions: &[Action]) -> Result<Vec<Utility>, GameError> {
        let index = self.space.index(actions)?;
        Ok(self.payoffs(index))
    }
    /// Per-player payoffs at a linear profile index.
    pub fn payoffs(&self, index: usize) -> Vec<Utility> {
        self.tensors.iter().map(|t| t.values()[index]).collect()
    }
    /// Player `player`'s payoff at a linear profile index.
    pub fn utility(&self, player: Player, index: usize) -> Utility {
        self.tensors[player].values()[index]
    }
    /// Sum of all players' payoffs at a linear profile index.
    pub fn welfare(&self, index: usize) -> Utility {
        self.tensors.iter().map(|t| t.values()[index]).sum()
    }
    /// Largest payoff range of any single player.
    pub fn max_spread(&self) -> Utility {
        self.tensors
            .iter()
            .map(Tensor::spread)
            .fold(0., Utility::max)
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Game with {} players", self.players())?;
        let width = self.space.actions(self.players() - 1);
        for (player, tensor) in self.tensors.iter().enumerate() {
            writeln!(f, "Player {}'s payoffs:", player + 1)?;
            for (row, chunk) in tensor.values().chunks(width).enumerate() {
                let prefix = self.space.profile(row * width);
                let prefix = &prefix.actions()[..self.players() - 1];
                writeln!(
                    f,
                    "  {:<12} [{}]",
                    format!("{:?}", prefix),
                    chunk
                        .iter()
                        .map(|u| format!("{:>7.2}", u))
                        .collect::<Vec<_>>()
                        .join(" ")
                )?;
            }
        }
        Ok(())
    }
}
