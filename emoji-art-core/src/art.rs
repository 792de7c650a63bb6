//! The emoji art document model.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{ArtError, Emoji, EmojiId, Position};

/// A document: an optional background reference and an ordered list of
/// placed emoji.
///
/// Insertion order is z-order. No operation here fails; operations on an
/// absent id are no-ops.
///
/// Deserialization validates the id counter: duplicate ids or an exhausted
/// id space are rejected, and the counter is raised past every present id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EmojiArtRecord")]
pub struct EmojiArt {
    /// Externally resolved background image.
    background: Option<Url>,
    /// Placed emoji, back to front.
    emojis: Vec<Emoji>,
    /// Last identifier issued. Never decreases.
    next_id: u64,
}

impl EmojiArt {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The background reference, if any.
    #[must_use]
    pub fn background(&self) -> Option<&Url> {
        self.background.as_ref()
    }

    /// Replace the background reference. `None` clears it.
    pub fn set_background(&mut self, background: Option<Url>) {
        self.background = background;
    }

    /// All placed emoji in z-order.
    #[must_use]
    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    /// Append a new emoji and return its identifier.
    pub fn add_emoji(&mut self, content: impl Into<String>, at: Position, size: i32) -> EmojiId {
        // Deserialization guarantees headroom below u64::MAX.
        self.next_id = self.next_id.saturating_add(1);
        let id = EmojiId::from_raw(self.next_id);
        self.emojis.push(Emoji::new(content.into(), at, size, id));
        id
    }

    /// Remove the emoji with the given id, keeping the others in order.
    ///
    /// Returns the removed emoji, or `None` if there was none.
    pub fn remove_emoji(&mut self, id: EmojiId) -> Option<Emoji> {
        self.index_of(id).map(|index| self.emojis.remove(index))
    }

    /// Look up an emoji by id.
    #[must_use]
    pub fn emoji(&self, id: EmojiId) -> Option<&Emoji> {
        self.emojis.iter().find(|e| e.id() == id)
    }

    /// Apply an in-place change to the emoji with the given id.
    ///
    /// Returns `false` without calling `f` if the id is absent.
    pub fn update<F>(&mut self, id: EmojiId, f: F) -> bool
    where
        F: FnOnce(&mut Emoji),
    {
        match self.emojis.iter_mut().find(|e| e.id() == id) {
            Some(emoji) => {
                f(emoji);
                true
            }
            None => false,
        }
    }

    /// Number of placed emoji.
    #[must_use]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    /// Check if no emoji are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    fn index_of(&self, id: EmojiId) -> Option<usize> {
        self.emojis.iter().position(|e| e.id() == id)
    }
}

/// Unvalidated wire form of [`EmojiArt`].
#[derive(Deserialize)]
struct EmojiArtRecord {
    #[serde(default)]
    background: Option<Url>,
    #[serde(default)]
    emojis: Vec<Emoji>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<EmojiArtRecord> for EmojiArt {
    type Error = ArtError;

    fn try_from(record: EmojiArtRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(record.emojis.len());
        let mut highest = 0;
        for emoji in &record.emojis {
            let id = emoji.id();
            if !seen.insert(id) {
                return Err(ArtError::DuplicateEmojiId(id));
            }
            highest = highest.max(id.get());
        }
        let next_id = record.next_id.max(highest);
        if next_id == u64::MAX {
            return Err(ArtError::IdSpaceExhausted);
        }
        Ok(Self {
            background: record.background,
            emojis: record.emojis,
            next_id,
        })
    }
}
