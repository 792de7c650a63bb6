//! Named collections of emoji glyphs.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

/// Unique identifier for a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteId(Uuid);

impl PaletteId {
    /// Create a new unique palette ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for PaletteId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaletteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered set of emoji glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Unique identifier.
    pub id: PaletteId,
    /// Display name.
    pub name: String,
    /// Glyphs with duplicates removed.
    emojis: String,
}

impl Palette {
    /// Create a palette. Duplicate glyphs in `emojis` are dropped.
    #[must_use]
    pub fn new(name: impl Into<String>, emojis: &str) -> Self {
        Self {
            id: PaletteId::new(),
            name: name.into(),
            emojis: uniqued(emojis),
        }
    }

    /// The glyphs as a single string.
    #[must_use]
    pub fn emojis(&self) -> &str {
        &self.emojis
    }

    /// Replace the glyphs. Duplicates are dropped.
    pub fn set_emojis(&mut self, emojis: &str) {
        self.emojis = uniqued(emojis);
    }

    /// Iterate the individual glyphs (extended grapheme clusters).
    pub fn glyphs(&self) -> impl Iterator<Item = &str> {
        self.emojis.graphemes(true)
    }

    /// The palettes every new store starts with.
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        vec![
            Self::new("Vehicles", "🚙🚗🚘🚕🚖🏎🚚🛻🚛🚐🚓🚔🚑🚒🚀✈️🛫🛬🛩🚁🛸🚲🏍🛶⛵️🚤🛥🛳⛴🚢🚂🚝🚅🚆🚊🚉🚇🛺🚜"),
            Self::new("Sports", "🏈⚾️🏀⚽️🎾🏐🥏🏓⛳️🥅🥌🏂⛷🎳"),
            Self::new("Music", "🎼🎤🎹🪘🥁🎺🪗🪕🎻"),
            Self::new("Animals", "🐥🐣🐂🐄🐎🐖🐏🐑🦙🐐🐓🐁🐀🐒🦆🦅🦉🦇🐢🐍🦎🦖🦕🐅🐆🦓🦍🦧🦣🐘🦛🦏🐪🐫🦒🦘🦬🐃🦙🐐🦌🐕🐩🦮🐈🦤🦢🦩🕊🦝🦨🦡🦫🦦🦥🐿🦔"),
            Self::new("Faces", "😀😃😄😁😆😅😂🤣🥲☺️😊😇🙂🙃😉😌😍🥰😘😗😙😚😋😛😝😜🤪🤨🧐🤓😎🥸🤩🥳😏😞😔😟😕🙁☹️😣😖😫😩🥺😢😭😤😠😡🤯😳🥶😥😓🤗🤔🤭🤫🤥😬🙄😯😧🥱😴🤮😷🤧🤒🤠"),
            Self::new("Flora", "🌲🌴🌿☘️🍀🍁🍄🌾💐🌷🌹🥀🌺🌸🌼🌻"),
            Self::new("Weather", "☀️🌤⛅️🌥☁️🌦🌧⛈🌩🌨❄️💨☔️💧💦🌊☂️🌫🌪"),
        ]
    }
}

/// Remove repeated glyphs, keeping the first occurrence of each.
fn uniqued(emojis: &str) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for glyph in emojis.graphemes(true) {
        if !seen.contains(&glyph) {
            seen.push(glyph);
        }
    }
    seen.concat()
}
