//! Wire shape of `GET /pokemon/{id}`
//!
//! Only the fields the card reads are declared; everything else in the
//! provider payload is ignored. Nested sprite objects are optional so a
//! missing alternate artwork never fails deserialization.

use serde::Deserialize;

use crate::domain::{Ability, Record, Sprites, TypeTag};

#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub sprites: ApiSprites,
    #[serde(default)]
    pub abilities: Vec<ApiAbilitySlot>,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSprites {
    pub front_default: Option<String>,
    pub other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
pub struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    pub official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Deserialize)]
pub struct ApiArtwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiAbilitySlot {
    pub ability: ApiNamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Debug, Deserialize)]
pub struct ApiTypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiNamedResource {
    pub name: String,
}

impl ApiPokemon {
    pub fn into_record(self) -> Record {
        let official_artwork = self
            .sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default);

        let mut abilities = self.abilities;
        abilities.sort_by_key(|a| a.slot);

        let mut types = self.types;
        types.sort_by_key(|t| t.slot);

        Record {
            id: self.id,
            name: self.name,
            sprites: Sprites {
                official_artwork,
                front_default: self.sprites.front_default,
            },
            abilities: abilities
                .into_iter()
                .map(|a| Ability {
                    name: a.ability.name,
                    is_hidden: a.is_hidden,
                })
                .collect(),
            types: types
                .into_iter()
                .map(|t| TypeTag::new(t.type_.name))
                .collect(),
            height: self.height,
            weight: self.weight,
        }
    }
}
