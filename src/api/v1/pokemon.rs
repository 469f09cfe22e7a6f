//! Pokémon lookup endpoint

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, PokemonResponse};

/// GET /api/v1/pokemon/{id}
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PokemonResponse>, ApiError> {
    debug!(id = %id, "Looking up Pokémon");

    let record = state.loader.load(&id).await.map_err(ApiError::from)?;

    Ok(Json(PokemonResponse::from_domain(
        &record,
        &state.placeholder_image,
    )))
}
