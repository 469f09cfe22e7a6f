//! Pokémon domain types

mod identifier;
mod record;
mod type_tag;

pub use identifier::PokemonIdentifier;
pub use record::{Ability, PLACEHOLDER_IMAGE_URL, Record, Sprites};
pub use type_tag::{TypePalette, TypeTag};

#[cfg(test)]
pub(crate) use record::fixtures;
