//! Server-rendered HTML pages

pub mod detail;
pub mod home;
pub mod html;

use axum::{http::StatusCode, response::Html};

pub use detail::pokemon_detail;
pub use home::{home, search};

/// Fallback for unknown routes
pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(html::message_page(
            "Not found",
            "Page not found",
            "There is nothing at this address.",
        )),
    )
}
