//! Dense probability distributions over joint action profiles.
use crate::*;

/// Probability mass over every profile of a joint action [`Space`].
///
/// Stored densely by linear profile index, so zero-probability profiles are
/// present as explicit zeros. Both solvers produce one; the verifier and the
/// welfare function consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    space: Space,
    mass: Vec<Probability>,
}

impl Distribution {
    pub fn new(space: Space, mass: Vec<Probability>) -> Result<Self, GameError> {
        match mass.len() == space.size() {
            true => Ok(Self { space, mass }),
            false => Err(GameError::Length {
                shape: space.shape().to_vec(),
                len: mass.len(),
            }),
        }
    }
    /// Equal mass on every profile.
    pub fn uniform(space: Space) -> Self {
        let p = 1. / space.size() as Probability;
        Self {
            mass: vec![p; space.size()],
            space,
        }
    }
    /// All mass on the profile at linear index `index`.
    pub fn point(space: Space, index: usize) -> Result<Self, GameError> {
        if index >= space.size() {
            return Err(GameError::Index {
                index,
                size: space.size(),
            });
        }
        let mut mass = vec![0.; space.size()];
        mass[index] = 1.;
        Ok(Self { space, mass })
    }
    /// Empirical distribution from visit counts over `rounds` rounds.
    pub fn empirical(space: Space, counts: &[usize], rounds: usize) -> Self {
        Self {
            mass: counts
                .iter()
                .map(|&c| c as Probability / rounds as Probability)
                .collect(),
            space,
        }
    }

    pub fn space(&self) -> &Space {
        &self.space
    }
    pub fn mass(&self) -> &[Probability] {
        &self.mass
    }
    /// Probability at a linear profile index.
    pub fn get(&self, index: usize) -> Probability {
        self.mass[index]
    }
    /// Probability at a joint action profile, or 0 outside the space.
    pub fn density(&self, profile: &Profile) -> Probability {
        self.space
            .index(profile.actions())
            .map(|index| self.mass[index])
            .unwrap_or(0.)
    }
    pub fn total(&self) -> Probability {
        self.mass.iter().sum()
    }
    pub fn min(&self) -> Probability {
        self.mass.iter().copied().fold(Probability::INFINITY, Probability::min)
    }
    /// Profiles carrying positive mass, with that mass.
    pub fn support(&self) -> impl Iterator<Item = (Profile, Probability)> + '_ {
        self.mass
            .iter()
            .enumerate()
            .filter(|(_, p)| **p > 0.)
            .map(|(index, &p)| (self.space.profile(index), p))
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (profile, p) in self.support() {
            writeln!(f, "Joint Action {:<16} {:.4}", profile.to_string(), p)?;
        }
        Ok(())
    }
}

impl serde::Serialize for Distribution {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for entry in self.support() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}
