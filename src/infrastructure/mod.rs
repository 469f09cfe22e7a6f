//! Infrastructure layer - provider client, assets, logging and metrics

pub mod loader;
pub mod logging;
pub mod observability;
pub mod pokeapi;
pub mod sound;

pub use loader::PokemonLoader;
pub use pokeapi::PokeApiClient;
pub use sound::SoundLibrary;
