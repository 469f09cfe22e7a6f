use std::path::PathBuf;

use thiserror::Error;

/// Status used when the provider could not be reached or answered garbage
pub const BAD_GATEWAY: u16 = 502;

/// Failures raised by the loader while resolving a route parameter
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Could not load Pokémon '{id}' (HTTP {status})")]
    Status { status: u16, id: String },

    #[error("Request for Pokémon '{id}' failed: {message}")]
    Transport { id: String, message: String },

    #[error("Unexpected provider response for Pokémon '{id}': {message}")]
    Decode { id: String, message: String },
}

impl ProviderError {
    pub fn status(status: u16, id: impl Into<String>) -> Self {
        Self::Status {
            status,
            id: id.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::status(404, id)
    }

    pub fn transport(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            id: id.into(),
            message: message.into(),
        }
    }

    pub fn decode(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            id: id.into(),
            message: message.into(),
        }
    }

    /// The identifier the caller asked for
    pub fn requested_id(&self) -> &str {
        match self {
            Self::Status { id, .. } | Self::Transport { id, .. } | Self::Decode { id, .. } => id,
        }
    }

    /// HTTP status the error page should be served with
    pub fn http_status(&self) -> u16 {
        match self {
            Self::Status { status, .. } if (400..600).contains(status) => *status,
            _ => BAD_GATEWAY,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Short label used for metrics and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Status { status: 404, .. } => "not_found",
            Self::Status { .. } => "provider_status",
            Self::Transport { .. } => "transport",
            Self::Decode { .. } => "decode",
        }
    }
}

/// Failures around the cry sound asset. These are logged, never shown.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("Sound asset not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Sound asset {} is unreadable: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },
}

impl PlaybackError {
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self::Missing { path: path.into() }
    }

    pub fn unreadable(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Unreadable {
            path: path.into(),
            message: message.into(),
        }
    }
}
