//! # Emoji Art Core
//!
//! Document model and mutation contract for a drag-and-drop emoji canvas.
//! Rendering, gesture recognition and drag-and-drop transport belong to the
//! presentation layer, which calls the intents on [`EmojiArtDocument`] and
//! re-renders from its snapshot.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │             presentation layer              │
//! └──────────────┬──────────────────▲───────────┘
//!        intents │                  │ DocumentChange
//! ┌──────────────▼──────────────────┴───────────┐
//! │  EmojiArtDocument (controller)              │
//! │  - screen deltas → document coordinates     │
//! │  - size policy   - observer registry        │
//! ├─────────────────────────────────────────────┤
//! │  EmojiArt (model)  │  PaletteStore          │
//! │  - background      │  - named glyph lists   │
//! │  - ordered emoji   │  - circular cursor     │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod art;
pub mod config;
pub mod document;
pub mod emoji;
pub mod error;
pub mod observer;
pub mod palette;
pub mod palette_store;
pub mod viewport;

pub use art::EmojiArt;
pub use config::{DocumentConfig, SizePolicy};
pub use document::{BatchOutcome, DropPayload, EmojiArtDocument};
pub use emoji::{Emoji, EmojiId, Offset, Position};
pub use error::{ArtError, ArtResult};
pub use observer::{DocumentChange, DocumentObserver, ObserverRegistry, SubscriptionId};
pub use palette::{Palette, PaletteId};
pub use palette_store::PaletteStore;
pub use viewport::Viewport;

/// Emoji art core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
