//! Error types for emoji art operations.

use thiserror::Error;

use crate::{EmojiId, PaletteId};

/// Result type for emoji art operations.
pub type ArtResult<T> = Result<T, ArtError>;

/// Errors that can occur in emoji art operations.
///
/// Document intents never fail under the default configuration; these
/// variants are produced by opt-in validation policies, palette management,
/// configuration loading, and validation of deserialized documents.
#[derive(Debug, Error)]
pub enum ArtError {
    /// A document held two emoji with the same id.
    #[error("Duplicate emoji id: {0}")]
    DuplicateEmojiId(EmojiId),

    /// A document's id counter has no ids left to issue.
    #[error("Emoji id space exhausted")]
    IdSpaceExhausted,

    /// Emoji content rejected by the configured policy.
    #[error("Invalid emoji content: {0:?}")]
    InvalidContent(String),

    /// Emoji size rejected by the configured policy.
    #[error("Invalid emoji size {size} (minimum {min})")]
    InvalidSize {
        /// The size that was computed.
        size: i32,
        /// The configured minimum.
        min: i32,
    },

    /// Palette not found in the store.
    #[error("Palette not found: {0}")]
    PaletteNotFound(PaletteId),

    /// The store must always hold at least one palette.
    #[error("Cannot remove the last palette")]
    LastPalette,

    /// Configuration deserialization error.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Environment variable held an unusable value.
    #[error("Invalid value for {name}: {value}")]
    InvalidEnv {
        /// Variable name.
        name: String,
        /// The offending value.
        value: String,
    },
}
