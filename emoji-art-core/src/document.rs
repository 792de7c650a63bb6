//! The document controller.
//!
//! [`EmojiArtDocument`] owns an [`EmojiArt`] and exposes the intents the
//! presentation layer calls. It converts screen-space gesture values into
//! document changes, applies the configured validation policy, and notifies
//! observers after every mutation that took effect.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    ArtError, ArtResult, DocumentChange, DocumentConfig, DocumentObserver, Emoji, EmojiArt,
    EmojiId, ObserverRegistry, Offset, Position, SubscriptionId, Viewport,
};

/// Content delivered by a drag-and-drop onto the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum DropPayload {
    /// An image reference, used as the background.
    Url(Url),
    /// A glyph string, placed as a new emoji.
    Text(String),
    /// Raw bytes. Not handled by the document.
    Data(Vec<u8>),
}

/// Per-id result of a batch intent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Ids that were changed.
    pub applied: Vec<EmojiId>,
    /// Ids not present in the document.
    pub missing: Vec<EmojiId>,
    /// Ids whose change was refused by the size policy.
    pub rejected: Vec<EmojiId>,
}

impl BatchOutcome {
    /// Whether every id was applied.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.rejected.is_empty()
    }
}

/// An emoji art document and its observers.
#[derive(Debug, Default)]
pub struct EmojiArtDocument {
    art: EmojiArt,
    config: DocumentConfig,
    observers: ObserverRegistry,
}

impl EmojiArtDocument {
    /// Create an empty document with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the given configuration.
    #[must_use]
    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    /// The underlying model.
    #[must_use]
    pub fn art(&self) -> &EmojiArt {
        &self.art
    }

    /// An owned copy of the current model.
    #[must_use]
    pub fn snapshot(&self) -> EmojiArt {
        self.art.clone()
    }

    /// The background reference, if any.
    #[must_use]
    pub fn background(&self) -> Option<&Url> {
        self.art.background()
    }

    /// All placed emoji in z-order.
    #[must_use]
    pub fn emojis(&self) -> &[Emoji] {
        self.art.emojis()
    }

    /// Look up an emoji by id.
    #[must_use]
    pub fn emoji(&self, id: EmojiId) -> Option<&Emoji> {
        self.art.emoji(id)
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Register an observer for applied changes.
    pub fn subscribe(&mut self, observer: impl DocumentObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn publish(&mut self, change: &DocumentChange) {
        self.observers.notify(change, &self.art);
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    /// Replace the background reference. `None` clears it.
    pub fn set_background(&mut self, background: Option<Url>) {
        tracing::debug!(background = ?background.as_ref().map(Url::as_str), "Set background");
        self.art.set_background(background.clone());
        self.publish(&DocumentChange::BackgroundChanged { background });
    }

    /// Place a new emoji. `size` is truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::InvalidContent`] or [`ArtError::InvalidSize`] only
    /// when the configuration enables the corresponding validation. The
    /// default configuration never fails.
    #[allow(clippy::cast_possible_truncation)] // Truncation toward zero is the contract
    pub fn add_emoji(&mut self, content: &str, at: Position, size: f64) -> ArtResult<EmojiId> {
        if self.config.reject_empty_content && content.is_empty() {
            tracing::warn!("Rejected emoji with empty content");
            return Err(ArtError::InvalidContent(content.to_string()));
        }
        let size = self.config.size_policy.apply(size as i32).map_err(|e| {
            tracing::warn!("Rejected new emoji {content:?}: {e}");
            e
        })?;

        let id = self.art.add_emoji(content, at, size);
        tracing::debug!(%id, content, x = at.x, y = at.y, size, "Added emoji");
        self.publish(&DocumentChange::EmojiAdded { id });
        Ok(id)
    }

    /// Remove an emoji. Returns `false` if it was not present.
    pub fn remove_emoji(&mut self, id: EmojiId) -> bool {
        if self.art.remove_emoji(id).is_some() {
            tracing::debug!(%id, "Removed emoji");
            self.publish(&DocumentChange::EmojiRemoved { id });
            true
        } else {
            tracing::trace!(%id, "Remove ignored, emoji not found");
            false
        }
    }

    /// Move an emoji by a screen-space offset.
    ///
    /// The offset is rounded to whole points and its vertical component is
    /// negated to match the document's upward y axis. Returns `false` if the
    /// emoji was not present.
    pub fn move_emoji(&mut self, id: EmojiId, by: Offset) -> bool {
        let Some(current) = self.art.emoji(id).map(Emoji::position) else {
            tracing::trace!(%id, "Move ignored, emoji not found");
            return false;
        };
        let position = Position::new(
            current.x.saturating_add(round_to_i32(by.dx)),
            current.y.saturating_sub(round_to_i32(by.dy)),
        );

        self.art.update(id, |emoji| emoji.set_position(position));
        tracing::debug!(%id, x = position.x, y = position.y, "Moved emoji");
        self.publish(&DocumentChange::EmojiMoved { id, position });
        true
    }

    /// Scale an emoji's size, rounding to the nearest whole size.
    ///
    /// Returns `Ok(false)` if the emoji was not present.
    ///
    /// # Errors
    ///
    /// Returns [`ArtError::InvalidSize`] when the size policy rejects the
    /// result. The emoji is left unchanged.
    pub fn resize_emoji(&mut self, id: EmojiId, scale: f64) -> ArtResult<bool> {
        let Some(current) = self.art.emoji(id).map(Emoji::size) else {
            tracing::trace!(%id, "Resize ignored, emoji not found");
            return Ok(false);
        };
        let size = self
            .config
            .size_policy
            .apply(round_to_i32(f64::from(current) * scale))
            .map_err(|e| {
                tracing::warn!(%id, "Rejected resize: {e}");
                e
            })?;

        self.art.update(id, |emoji| emoji.set_size(size));
        tracing::debug!(%id, size, "Resized emoji");
        self.publish(&DocumentChange::EmojiResized { id, size });
        Ok(true)
    }

    /// Move every listed emoji by the same offset.
    ///
    /// Each id is handled independently; missing ids are reported and skipped.
    pub fn move_emojis<I>(&mut self, ids: I, by: Offset) -> BatchOutcome
    where
        I: IntoIterator<Item = EmojiId>,
    {
        let mut outcome = BatchOutcome::default();
        for id in ids {
            if self.move_emoji(id, by) {
                outcome.applied.push(id);
            } else {
                outcome.missing.push(id);
            }
        }
        outcome
    }

    /// Scale every listed emoji by the same factor.
    ///
    /// Each id is handled independently; missing or rejected ids are reported
    /// and do not affect the others.
    pub fn resize_emojis<I>(&mut self, ids: I, scale: f64) -> BatchOutcome
    where
        I: IntoIterator<Item = EmojiId>,
    {
        let mut outcome = BatchOutcome::default();
        for id in ids {
            match self.resize_emoji(id, scale) {
                Ok(true) => outcome.applied.push(id),
                Ok(false) => outcome.missing.push(id),
                Err(_) => outcome.rejected.push(id),
            }
        }
        outcome
    }

    /// Accept dropped content at a screen location.
    ///
    /// The first URL or text payload wins: a URL becomes the background, text
    /// becomes an emoji at the document position under `location`, sized to
    /// the configured drop size divided by the zoom. Returns whether anything
    /// was accepted.
    pub fn handle_drop(
        &mut self,
        payloads: &[DropPayload],
        location: (f64, f64),
        viewport: &Viewport,
    ) -> bool {
        for payload in payloads {
            match payload {
                DropPayload::Url(url) => {
                    self.set_background(Some(url.clone()));
                    return true;
                }
                DropPayload::Text(content) => {
                    let at = viewport.document_position(location.0, location.1);
                    let size = self.config.drop_emoji_size / viewport.zoom;
                    return self.add_emoji(content, at, size).is_ok();
                }
                DropPayload::Data(bytes) => {
                    tracing::trace!(len = bytes.len(), "Skipping raw data payload");
                }
            }
        }
        false
    }
}

/// Round half away from zero, saturating at the `i32` range.
#[allow(clippy::cast_possible_truncation)]
fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}
