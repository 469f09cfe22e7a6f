//! Route parameter to record resolution

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::{PokemonIdentifier, PokemonProvider, ProviderError, Record};
use crate::infrastructure::observability::record_pokemon_lookup;

/// Resolves a `/pokemon/{id}` parameter into a [`Record`]
///
/// Every call is an independent, fire-once fetch: nothing is cached between
/// navigations and failures are handed back to the caller untouched.
#[derive(Clone)]
pub struct PokemonLoader {
    provider: Arc<dyn PokemonProvider>,
}

impl PokemonLoader {
    pub fn new(provider: Arc<dyn PokemonProvider>) -> Self {
        Self { provider }
    }

    /// Normalises `raw_id` and fetches the matching record
    pub async fn load(&self, raw_id: &str) -> Result<Record, ProviderError> {
        let Some(id) = PokemonIdentifier::parse(raw_id) else {
            let rejected = raw_id.trim();
            warn!(id = %rejected, "Rejected unusable Pokémon identifier");
            record_pokemon_lookup("not_found", std::time::Duration::ZERO);
            return Err(ProviderError::not_found(rejected));
        };

        debug!(id = %id, "Loading Pokémon");
        let start = Instant::now();

        let result = self.provider.fetch(&id).await;
        let duration = start.elapsed();

        match &result {
            Ok(record) => {
                info!(
                    id = %id,
                    pokemon_id = record.id,
                    name = %record.name,
                    duration_ms = %duration.as_millis(),
                    "Pokémon loaded"
                );
                if !id.matches(record.id, &record.name) {
                    debug!(
                        id = %id,
                        name = %record.name,
                        "Provider answered with a different canonical name"
                    );
                }
                record_pokemon_lookup("success", duration);
            }
            Err(e) => {
                warn!(
                    id = %e.requested_id(),
                    kind = e.kind(),
                    error = %e,
                    "Pokémon lookup failed"
                );
                record_pokemon_lookup(e.kind(), duration);
            }
        }

        result
    }
}
