//! Search form submission

use serde::Deserialize;

use super::pokemon::PokemonIdentifier;

/// Query string of `GET /search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

impl SearchQuery {
    /// The navigation target, `None` for a blank submission
    pub fn identifier(&self) -> Option<PokemonIdentifier> {
        PokemonIdentifier::parse(&self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_normalized() {
        let query = SearchQuery {
            q: "  PIKACHU  ".to_string(),
        };
        assert_eq!(query.identifier().unwrap().as_str(), "pikachu");
    }

    #[test]
    fn test_blank_search_has_no_target() {
        assert!(SearchQuery::default().identifier().is_none());
        assert!(
            SearchQuery {
                q: "  ".to_string()
            }
            .identifier()
            .is_none()
        );
    }

    #[test]
    fn test_dot_segment_search_has_no_target() {
        for q in [".", "..", " .. "] {
            let query = SearchQuery { q: q.to_string() };
            assert!(query.identifier().is_none());
        }
    }
}
