//! Application state shared by every handler

use std::path::PathBuf;

use crate::infrastructure::{PokemonLoader, SoundLibrary};

/// Immutable per-process state; cloning is cheap
#[derive(Clone)]
pub struct AppState {
    pub loader: PokemonLoader,
    pub sounds: SoundLibrary,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    pub placeholder_image: String,
}

impl AppState {
    pub fn new(
        loader: PokemonLoader,
        sounds: SoundLibrary,
        static_dir: impl Into<PathBuf>,
        placeholder_image: impl Into<String>,
    ) -> Self {
        Self {
            loader,
            sounds,
            static_dir: static_dir.into(),
            placeholder_image: placeholder_image.into(),
        }
    }
}
