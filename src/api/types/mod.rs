//! Response types for the JSON API

pub mod error;
pub mod pokemon;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use pokemon::PokemonResponse;
