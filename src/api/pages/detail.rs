//! `/pokemon/{id}`: the card page

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tracing::debug;

use super::html::{escape, message_page, page};
use crate::api::state::AppState;
use crate::domain::{CardFace, DetailView, LoadedCard, ProviderError};

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub face: Option<String>,
}

/// GET /pokemon/{id}
pub async fn pokemon_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> (StatusCode, Html<String>) {
    let face = CardFace::from_param(query.face.as_deref());
    let view = DetailView::resolve(state.loader.load(&id).await).with_face(face);

    if let DetailView::Loaded(card) = &view {
        // A missing cry is logged and the button still rendered
        state.sounds.check(card.record().id).await;
    }

    let status =
        StatusCode::from_u16(view.http_status()).unwrap_or(StatusCode::BAD_GATEWAY);
    debug!(
        id = %id,
        loaded = view.is_loaded(),
        status = status.as_u16(),
        "Rendering detail page"
    );

    (status, Html(render_detail(&view, &state.placeholder_image)))
}

pub fn render_detail(view: &DetailView, placeholder_image: &str) -> String {
    match view {
        DetailView::Loading => render_loading(),
        DetailView::Loaded(card) => render_card(card, placeholder_image),
        DetailView::Error(error) => render_error(error),
    }
}

fn render_loading() -> String {
    let body = r#"<main class="loading" aria-busy="true">
<div class="spinner"></div>
<p>Loading Pokémon...</p>
</main>"#;

    page("Loading", body)
}

/// Provider details stay in the logs; the page only names the request
fn render_error(error: &ProviderError) -> String {
    let heading = if error.is_not_found() {
        "Pokémon not found".to_string()
    } else {
        format!("Something went wrong (HTTP {})", error.http_status())
    };

    let detail = match error {
        ProviderError::Status { .. } => error.to_string(),
        ProviderError::Transport { .. } | ProviderError::Decode { .. } => format!(
            "Could not load Pokémon '{}'. The Pokémon service is unavailable right now, please try again later.",
            error.requested_id()
        ),
    };

    message_page("Error", &heading, &detail)
}

fn render_card(card: &LoadedCard, placeholder_image: &str) -> String {
    let record = card.record();
    let name = escape(&record.display_name());
    let sound = escape(&record.sound_path());
    let other_face = card.face().flipped();

    let types: String = record
        .types
        .iter()
        .map(|tag| {
            format!(
                r#"<li class="type-tag {}">{}</li>"#,
                tag.palette().css_class(),
                escape(tag.name())
            )
        })
        .collect();

    let abilities: String = record
        .abilities
        .iter()
        .map(|ability| format!("<li>{}</li>", escape(&ability.display_name())))
        .collect();

    let cry_button = format!(
        r#"<button class="pokeball" type="button" data-sound="{sound}" title="Play cry"><span class="sr-only">Play cry</span></button>"#
    );

    let body = format!(
        r#"<main class="detail">
<a class="back-link" href="/">&larr; Back to search</a>
<div class="flip-card" data-face="{face}" tabindex="0">
<div class="flip-card-inner">
<section class="flip-card-front">
{cry_button}
<img class="artwork" src="{artwork}" alt="{name}" data-fallback="{placeholder}">
<h1 class="card-name">{name}</h1>
<p class="card-number">#{id}</p>
<ul class="type-tags">{types}</ul>
</section>
<section class="flip-card-back">
{cry_button}
<dl class="measurements">
<dt>Height</dt><dd>{height}</dd>
<dt>Weight</dt><dd>{weight}</dd>
</dl>
<h2>Abilities</h2>
<ul class="abilities">{abilities}</ul>
</section>
</div>
</div>
<p class="flip-hint">Hover or tap the card to flip it. <a class="flip-link" href="/pokemon/{id}?face={other_face}">Show {other_face}</a></p>
</main>"#,
        face = card.face().as_str(),
        artwork = escape(record.artwork_url(placeholder_image)),
        placeholder = escape(placeholder_image),
        id = record.id,
        height = escape(&record.display_height()),
        weight = escape(&record.display_weight()),
        other_face = other_face.as_str(),
    );

    page(&record.display_name(), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PLACEHOLDER_IMAGE_URL;
    use crate::domain::pokemon::fixtures::pikachu;

    #[test]
    fn test_loaded_front() {
        let view = DetailView::resolve(Ok(pikachu()));
        let html = render_detail(&view, PLACEHOLDER_IMAGE_URL);

        assert!(html.contains(r#"data-face="front""#));
        assert!(html.contains("<h1 class=\"card-name\">Pikachu</h1>"));
        assert!(html.contains("#25"));
        assert!(html.contains("type-tag type-electric"));
        assert!(html.contains("0.4 m"));
        assert!(html.contains("6 kg"));
        assert!(html.contains("Lightning Rod (hidden)"));
        assert!(html.contains(r#"data-sound="/sounds/25.ogg""#));
        assert!(html.contains("?face=back"));
    }

    #[test]
    fn test_loaded_back_face() {
        let view = DetailView::resolve(Ok(pikachu())).with_face(CardFace::Back);
        let html = render_detail(&view, PLACEHOLDER_IMAGE_URL);

        assert!(html.contains(r#"data-face="back""#));
        assert!(html.contains("?face=front"));
    }

    #[test]
    fn test_artwork_falls_back_to_placeholder() {
        let mut record = pikachu();
        record.sprites = Default::default();
        let html = render_detail(&DetailView::resolve(Ok(record)), PLACEHOLDER_IMAGE_URL);

        assert!(html.contains(&format!(r#"src="{}""#, escape(PLACEHOLDER_IMAGE_URL))));
    }

    #[test]
    fn test_error_view() {
        let view = DetailView::resolve(Err(ProviderError::not_found("doesnotexist")));
        let html = render_detail(&view, PLACEHOLDER_IMAGE_URL);

        assert!(html.contains("Pokémon not found"));
        assert!(html.contains("doesnotexist"));
        assert!(html.contains("Back to search"));
        assert!(!html.contains("flip-card"));
    }

    #[test]
    fn test_error_view_escapes_identifier() {
        let view = DetailView::resolve(Err(ProviderError::not_found("<script>")));
        let html = render_detail(&view, PLACEHOLDER_IMAGE_URL);

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_transport_error_hides_provider_details() {
        let error = ProviderError::transport(
            "pikachu",
            "error sending request for url (https://pokeapi.co/api/v2/pokemon/pikachu)",
        );
        let html = render_detail(&DetailView::resolve(Err(error)), PLACEHOLDER_IMAGE_URL);

        assert!(html.contains("Something went wrong (HTTP 502)"));
        assert!(html.contains("Could not load Pokémon &#39;pikachu&#39;"));
        assert!(!html.contains("pokeapi.co"));
        assert!(!html.contains("error sending request"));
    }

    #[test]
    fn test_decode_error_hides_parser_message() {
        let error = ProviderError::decode("pikachu", "missing field `id` at line 1 column 2");
        let html = render_detail(&DetailView::resolve(Err(error)), PLACEHOLDER_IMAGE_URL);

        assert!(html.contains("HTTP 502"));
        assert!(!html.contains("missing field"));
    }

    #[test]
    fn test_loading_view() {
        let html = render_detail(&DetailView::Loading, PLACEHOLDER_IMAGE_URL);

        assert!(html.contains("Loading Pokémon..."));
        assert!(html.contains("spinner"));
    }
}
