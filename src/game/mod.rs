//! Normal-form game data model.
mod game;
mod kind;
mod profile;
mod space;
mod tensor;

pub use game::*;
pub use kind::*;
pub use profile::*;
pub use space::*;
pub use tensor::*;
