use std::fmt;

use serde::{Deserialize, Serialize};

/// A type tag as reported by the provider (`grass`, `poison`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into().to_lowercase())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn palette(&self) -> TypePalette {
        TypePalette::from_name(&self.0)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Badge colours. Types without a dedicated palette share the neutral one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypePalette {
    Grass,
    Fire,
    Water,
    Bug,
    Normal,
    Electric,
    Poison,
    Neutral,
}

impl TypePalette {
    pub fn from_name(name: &str) -> Self {
        match name {
            "grass" => Self::Grass,
            "fire" => Self::Fire,
            "water" => Self::Water,
            "bug" => Self::Bug,
            "normal" => Self::Normal,
            "electric" => Self::Electric,
            "poison" => Self::Poison,
            _ => Self::Neutral,
        }
    }

    /// Stylesheet class for the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Grass => "type-grass",
            Self::Fire => "type-fire",
            Self::Water => "type-water",
            Self::Bug => "type-bug",
            Self::Normal => "type-normal",
            Self::Electric => "type-electric",
            Self::Poison => "type-poison",
            Self::Neutral => "type-neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedicated_palettes() {
        assert_eq!(TypeTag::new("grass").palette(), TypePalette::Grass);
        assert_eq!(TypeTag::new("Fire").palette(), TypePalette::Fire);
        assert_eq!(TypeTag::new("electric").palette(), TypePalette::Electric);
    }

    #[test]
    fn test_unknown_types_use_neutral_palette() {
        assert_eq!(TypeTag::new("dragon").palette(), TypePalette::Neutral);
        assert_eq!(TypeTag::new("fairy").palette().css_class(), "type-neutral");
    }
}
