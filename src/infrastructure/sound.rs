//! Cry sound assets served under `/sounds`

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::PlaybackError;

/// Directory holding `{id}.ogg` cry files
#[derive(Debug, Clone)]
pub struct SoundLibrary {
    dir: PathBuf,
}

impl SoundLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn asset_file(&self, pokemon_id: u32) -> PathBuf {
        self.dir.join(format!("{}.ogg", pokemon_id))
    }

    /// Resolves the cry file for a Pokémon on disk
    pub async fn locate(&self, pokemon_id: u32) -> Result<PathBuf, PlaybackError> {
        let path = self.asset_file(pokemon_id);

        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            Ok(_) => Err(PlaybackError::unreadable(path, "not a regular file")),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(PlaybackError::missing(path)),
            Err(e) => Err(PlaybackError::unreadable(path, e.to_string())),
        }
    }

    /// Logs when the cry for `pokemon_id` cannot be played. Never fails.
    pub async fn check(&self, pokemon_id: u32) -> bool {
        match self.locate(pokemon_id).await {
            Ok(_) => true,
            Err(e) => {
                warn!(pokemon_id, error = %e, "Cry asset unavailable");
                false
            }
        }
    }
}
