//! Pokédex card viewer
//!
//! Search a Pokémon by name or number and view it as a flippable card:
//! - Loader backed by PokeAPI, one fresh request per navigation
//! - Server-rendered search and detail pages, plus a JSON endpoint
//! - Cry sounds served from a local asset directory

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::PokemonProvider;
use infrastructure::{PokeApiClient, PokemonLoader, SoundLibrary};
use tracing::info;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let client = PokeApiClient::with_base_url(&config.provider.base_url);
    info!(
        provider = client.provider_name(),
        base_url = %client.base_url(),
        "Using Pokémon provider"
    );

    AppState::new(
        PokemonLoader::new(Arc::new(client)),
        SoundLibrary::new(&config.assets.sounds_dir),
        &config.assets.static_dir,
        &config.assets.placeholder_image,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_app_state_uses_config() {
        let mut config = AppConfig::default();
        config.assets.sounds_dir = "/tmp/cries".to_string();
        config.assets.placeholder_image = "https://example.com/none.png".to_string();

        let state = create_app_state(&config);

        assert_eq!(state.sounds.dir(), std::path::Path::new("/tmp/cries"));
        assert_eq!(state.static_dir, std::path::PathBuf::from("public/static"));
        assert_eq!(state.placeholder_image, "https://example.com/none.png");
    }
}
