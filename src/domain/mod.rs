//! Domain layer - Pokémon records, the provider seam and the detail view

pub mod error;
pub mod pokemon;
pub mod provider;
pub mod search;
pub mod view;

pub use error::{PlaybackError, ProviderError};
pub use pokemon::{
    Ability, PLACEHOLDER_IMAGE_URL, PokemonIdentifier, Record, Sprites, TypePalette, TypeTag,
};
pub use provider::PokemonProvider;
pub use search::SearchQuery;
pub use view::{CardFace, DetailView, LoadedCard};
