//! JSON API, version 1

pub mod pokemon;

use axum::{Router, routing::get};

use super::state::AppState;

pub fn create_v1_router() -> Router<AppState> {
    Router::new().route("/pokemon/{id}", get(pokemon::get_pokemon))
}
