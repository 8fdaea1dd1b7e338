//! Error types
//!
//! Only the loading boundary (assets, configuration) can fail. Gameplay
//! failure is a game-state transition, never an error.

use thiserror::Error;

/// Errors raised while loading a scene or its configuration
#[derive(Debug, Error)]
pub enum GameError {
    /// Asset name missing from the manifest
    #[error("unknown asset `{0}`")]
    UnknownAsset(String),
    /// Asset used without being preloaded first
    #[error("asset `{0}` was not preloaded")]
    AssetNotLoaded(String),
    /// Manifest JSON failed to parse
    #[error("invalid asset manifest: {0}")]
    Manifest(#[source] serde_json::Error),
    /// Settings JSON failed to parse
    #[error("invalid settings: {0}")]
    Settings(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
