//! Route parameter normalisation

use std::fmt;

use serde::Serialize;

/// A normalised Pokémon name or numeric ID, as used in `/pokemon/{id}`
///
/// Normalisation trims surrounding whitespace and lowercases the input. No
/// check is made that the text names a real Pokémon; the provider decides.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PokemonIdentifier(String);

impl PokemonIdentifier {
    /// Normalises raw input, returning `None` when nothing is left after
    /// trimming or when the result is a dot segment
    ///
    /// `.` and `..` are dropped by URL path normalisation, so they would
    /// address the provider's list endpoint instead of a single Pokémon.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "" | "." | ".." => None,
            _ => Some(Self(normalized)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The decimal ID, when the identifier is numeric
    pub fn as_number(&self) -> Option<u32> {
        if self.0.bytes().all(|b| b.is_ascii_digit()) {
            self.0.parse().ok()
        } else {
            None
        }
    }

    /// Whether `name`/`id` of a loaded record are the canonical form of this identifier
    pub fn matches(&self, id: u32, name: &str) -> bool {
        match self.as_number() {
            Some(number) => number == id,
            None => self.0 == name.to_lowercase(),
        }
    }
}

impl fmt::Display for PokemonIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PokemonIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let id = PokemonIdentifier::parse("  PIKACHU  ").unwrap();
        assert_eq!(id.as_str(), "pikachu");
    }

    #[test]
    fn test_parse_rejects_blank_input() {
        assert!(PokemonIdentifier::parse("").is_none());
        assert!(PokemonIdentifier::parse("   \t ").is_none());
    }

    #[test]
    fn test_parse_rejects_dot_segments() {
        assert!(PokemonIdentifier::parse(".").is_none());
        assert!(PokemonIdentifier::parse(" .. ").is_none());
        assert_eq!(PokemonIdentifier::parse("...").unwrap().as_str(), "...");
        assert_eq!(PokemonIdentifier::parse("mr.mime").unwrap().as_str(), "mr.mime");
    }

    #[test]
    fn test_as_number() {
        assert_eq!(PokemonIdentifier::parse(" 25 ").unwrap().as_number(), Some(25));
        assert_eq!(PokemonIdentifier::parse("025").unwrap().as_number(), Some(25));
        assert_eq!(PokemonIdentifier::parse("pikachu").unwrap().as_number(), None);
        assert_eq!(PokemonIdentifier::parse("-1").unwrap().as_number(), None);
        assert_eq!(PokemonIdentifier::parse("+1").unwrap().as_number(), None);
    }

    #[test]
    fn test_matches_canonical_form() {
        let by_number = PokemonIdentifier::parse("025").unwrap();
        assert!(by_number.matches(25, "pikachu"));
        assert!(!by_number.matches(26, "raichu"));

        let by_name = PokemonIdentifier::parse("Pikachu").unwrap();
        assert!(by_name.matches(25, "pikachu"));
        assert!(!by_name.matches(25, "raichu"));
    }

    #[test]
    fn test_display() {
        let id = PokemonIdentifier::parse("Mr-Mime").unwrap();
        assert_eq!(id.to_string(), "mr-mime");
    }
}
