//! Search form and search redirect

use axum::{
    extract::Query,
    response::{Html, Redirect},
};
use once_cell::sync::Lazy;
use reqwest::Url;
use tracing::debug;

use super::html::page;
use crate::domain::{PokemonIdentifier, SearchQuery};

static LOCATION_BASE: Lazy<Url> = Lazy::new(|| Url::parse("http://localhost/").unwrap());

/// GET /
pub async fn home() -> Html<String> {
    Html(render_home())
}

/// GET /search?q=
///
/// Blank input goes back to the form instead of producing a lookup.
pub async fn search(Query(query): Query<SearchQuery>) -> Redirect {
    match query.identifier() {
        Some(id) => {
            let location = detail_location(&id);
            debug!(id = %id, location = %location, "Search redirect");
            Redirect::to(&location)
        }
        None => Redirect::to("/"),
    }
}

/// `/pokemon/{id}` with the identifier as one percent-encoded segment
pub fn detail_location(id: &PokemonIdentifier) -> String {
    let mut url = LOCATION_BASE.clone();

    if let Ok(mut segments) = url.path_segments_mut() {
        segments.clear().push("pokemon").push(id.as_str());
    }

    url.path().to_string()
}

pub fn render_home() -> String {
    let body = r#"<main class="home">
<h1>Welcome to the PokéDex</h1>
<p class="lead">Look up your favourite Pokémon by name or by number.</p>
<form class="search" action="/search" method="get" role="search">
<input type="text" name="q" placeholder="e.g. pikachu or 25" aria-label="Search Pokémon by name or ID" autocomplete="off" required>
<button type="submit">Search</button>
</form>
<section class="explore">
<h2>Explore the Pokémon world!</h2>
<p>Find details about your favourite Pokémon, their abilities, and listen to their cries.</p>
</section>
</main>"#;

    page("Search", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_location() {
        let id = PokemonIdentifier::parse("  PIKACHU  ").unwrap();
        assert_eq!(detail_location(&id), "/pokemon/pikachu");
    }

    #[test]
    fn test_detail_location_encodes_segment() {
        let id = PokemonIdentifier::parse("mr mime/../x").unwrap();
        assert_eq!(detail_location(&id), "/pokemon/mr%20mime%2F..%2Fx");
    }

    #[test]
    fn test_render_home_has_form() {
        let html = render_home();

        assert!(html.contains(r#"action="/search""#));
        assert!(html.contains(r#"name="q""#));
        assert!(html.contains("e.g. pikachu or 25"));
    }
}
