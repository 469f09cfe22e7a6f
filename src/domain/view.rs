//! Detail page state machine
//!
//! The loader result is matched here, on the caller side, into one of three
//! presentations. Flipping the card is pure view state: it never goes back
//! to the loader.

use super::error::ProviderError;
use super::pokemon::Record;

/// Which side of the card is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardFace {
    /// Name, number, artwork and type tags
    #[default]
    Front,
    /// Height, weight and abilities
    Back,
}

impl CardFace {
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Parses the `face` query parameter, anything unknown shows the front
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(face) if face.eq_ignore_ascii_case("back") => Self::Back,
            _ => Self::Front,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// A loaded record plus its ephemeral card state
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCard {
    record: Record,
    face: CardFace,
}

impl LoadedCard {
    pub fn new(record: Record) -> Self {
        Self {
            record,
            face: CardFace::default(),
        }
    }

    pub fn with_face(mut self, face: CardFace) -> Self {
        self.face = face;
        self
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn flip(&mut self) {
        self.face = self.face.flipped();
    }
}

/// The three presentations of `/pokemon/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailView {
    #[default]
    Loading,
    Loaded(LoadedCard),
    Error(ProviderError),
}

impl DetailView {
    /// Error boundary: turns the loader outcome into a presentation
    pub fn resolve(result: Result<Record, ProviderError>) -> Self {
        match result {
            Ok(record) => Self::Loaded(LoadedCard::new(record)),
            Err(error) => Self::Error(error),
        }
    }

    /// Sets the initial face; only meaningful once loaded
    pub fn with_face(self, face: CardFace) -> Self {
        match self {
            Self::Loaded(card) => Self::Loaded(card.with_face(face)),
            other => other,
        }
    }

    /// Toggles the card face; a no-op outside the loaded state
    pub fn flip(&mut self) {
        if let Self::Loaded(card) = self {
            card.flip();
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Status the page is served with
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Loading | Self::Loaded(_) => 200,
            Self::Error(error) => error.http_status(),
        }
    }
}
