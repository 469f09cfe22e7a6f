//! PokeAPI provider

mod client;
mod model;

pub use client::{DEFAULT_POKEAPI_BASE_URL, PokeApiClient};
pub use model::ApiPokemon;
