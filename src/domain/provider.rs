use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::error::ProviderError;
use super::pokemon::{PokemonIdentifier, Record};

/// Source of Pokémon records (PokeAPI in production)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PokemonProvider: Send + Sync {
    /// Fetches one record. Exactly one upstream request per call, no retries.
    async fn fetch(&self, id: &PokemonIdentifier) -> Result<Record, ProviderError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
