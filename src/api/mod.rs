//! API layer - HTML pages, JSON endpoints and middleware

pub mod health;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod state;
pub mod types;
pub mod v1;

pub use router::{create_app, create_router};
pub use state::AppState;
