//! The Pokémon record consumed from the provider

use serde::Serialize;

use super::TypeTag;

/// Artwork shown when the provider has neither official artwork nor a base sprite
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/192x192/E2E8F0/1A202C?text=No+Image";

/// One Pokémon, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub abilities: Vec<Ability>,
    pub types: Vec<TypeTag>,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sprites {
    pub official_artwork: Option<String>,
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ability {
    pub name: String,
    pub is_hidden: bool,
}

impl Record {
    pub fn height_m(&self) -> f64 {
        scale_down(self.height)
    }

    pub fn weight_kg(&self) -> f64 {
        scale_down(self.weight)
    }

    /// Height as displayed on the card, e.g. `0.4 m`
    pub fn display_height(&self) -> String {
        format!("{} m", self.height_m())
    }

    /// Weight as displayed on the card, e.g. `6 kg`
    pub fn display_weight(&self) -> String {
        format!("{} kg", self.weight_kg())
    }

    /// `mr-mime` becomes `Mr Mime`
    pub fn display_name(&self) -> String {
        capitalize_words(&self.name)
    }

    /// Official artwork, then the base sprite, then `placeholder`
    pub fn artwork_url<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.sprites
            .official_artwork
            .as_deref()
            .filter(|url| !url.is_empty())
            .or_else(|| {
                self.sprites
                    .front_default
                    .as_deref()
                    .filter(|url| !url.is_empty())
            })
            .unwrap_or(placeholder)
    }

    /// Path of the cry asset on the static host
    pub fn sound_path(&self) -> String {
        format!("/sounds/{}.ogg", self.id)
    }
}

impl Ability {
    /// Ability name for the card, hidden abilities are suffixed
    pub fn display_name(&self) -> String {
        let name = capitalize_words(&self.name);

        if self.is_hidden {
            format!("{} (hidden)", name)
        } else {
            name
        }
    }
}

/// Provider units are tenths of the display unit
fn scale_down(value: u32) -> f64 {
    f64::from(value) / 10.0
}

fn capitalize_words(input: &str) -> String {
    input
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn pikachu() -> Record {
        Record {
            id: 25,
            name: "pikachu".to_string(),
            sprites: Sprites {
                official_artwork: Some(
                    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
                        .to_string(),
                ),
                front_default: Some(
                    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png"
                        .to_string(),
                ),
            },
            abilities: vec![
                Ability {
                    name: "static".to_string(),
                    is_hidden: false,
                },
                Ability {
                    name: "lightning-rod".to_string(),
                    is_hidden: true,
                },
            ],
            types: vec![TypeTag::new("electric")],
            height: 4,
            weight: 60,
        }
    }
}
