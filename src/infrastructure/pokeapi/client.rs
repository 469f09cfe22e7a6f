use async_trait::async_trait;
use reqwest::Url;
use tracing::debug;

use super::model::ApiPokemon;
use crate::domain::{PokemonIdentifier, PokemonProvider, ProviderError, Record};

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// PokeAPI provider over reqwest
///
/// No timeout and no retry are configured: a lookup is a single request
/// whose outcome goes straight back to the caller.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_POKEAPI_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/pokemon/{id}` with the identifier as one encoded path segment
    fn pokemon_url(&self, id: &PokemonIdentifier) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ProviderError::transport(id.as_str(), format!("Invalid provider URL: {}", e))
        })?;

        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ProviderError::transport(id.as_str(), "Provider URL cannot have a path")
            })?;
            segments.pop_if_empty().push("pokemon").push(id.as_str());
        }

        Ok(url)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PokemonProvider for PokeApiClient {
    async fn fetch(&self, id: &PokemonIdentifier) -> Result<Record, ProviderError> {
        let url = self.pokemon_url(id)?;
        debug!(url = %url, "Requesting Pokémon from provider");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::transport(id.as_str(), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::status(status.as_u16(), id.as_str()));
        }

        let payload: ApiPokemon = response
            .json()
            .await
            .map_err(|e| ProviderError::decode(id.as_str(), e.to_string()))?;

        Ok(payload.into_record())
    }

    fn provider_name(&self) -> &'static str {
        "pokeapi"
    }
}
