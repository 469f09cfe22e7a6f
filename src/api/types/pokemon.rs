//! JSON representation of a loaded record

use serde::{Deserialize, Serialize};

use crate::domain::Record;

/// Record plus the values the card derives from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    pub display_name: String,
    pub artwork_url: String,
    pub types: Vec<String>,
    pub abilities: Vec<AbilityResponse>,
    /// Decimetres, as reported by the provider
    pub height: u32,
    /// Hectograms, as reported by the provider
    pub weight: u32,
    pub height_m: f64,
    pub weight_kg: f64,
    pub sound_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbilityResponse {
    pub name: String,
    pub is_hidden: bool,
}

impl PokemonResponse {
    pub fn from_domain(record: &Record, placeholder_image: &str) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            display_name: record.display_name(),
            artwork_url: record.artwork_url(placeholder_image).to_string(),
            types: record.types.iter().map(|t| t.name().to_string()).collect(),
            abilities: record
                .abilities
                .iter()
                .map(|a| AbilityResponse {
                    name: a.name.clone(),
                    is_hidden: a.is_hidden,
                })
                .collect(),
            height: record.height,
            weight: record.weight,
            height_m: record.height_m(),
            weight_kg: record.weight_kg(),
            sound_path: record.sound_path(),
        }
    }
}
