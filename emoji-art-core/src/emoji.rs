//! Placed emoji - the building blocks of a document.

use std::ops::{Add, AddAssign, Neg};

use serde::{Deserialize, Serialize};

/// Unique identifier for a placed emoji.
///
/// Identifiers are issued by [`EmojiArt`](crate::EmojiArt) and are never
/// reused within a document, even after the emoji is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiId(u64);

impl EmojiId {
    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EmojiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position in document coordinates.
///
/// The origin is the canvas centre and `y` grows upward, the opposite of
/// screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the centre.
    pub x: i32,
    /// Vertical offset from the centre, positive is up.
    pub y: i32,
}

impl Position {
    /// The canvas centre.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A screen-space displacement (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    /// Horizontal displacement.
    pub dx: f64,
    /// Vertical displacement, positive is down.
    pub dy: f64,
}

impl Offset {
    /// No displacement.
    pub const ZERO: Self = Self { dx: 0.0, dy: 0.0 };

    /// Create an offset.
    #[must_use]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}

impl Add for Offset {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl AddAssign for Offset {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

/// An emoji placed on the canvas.
///
/// `id` and `content` are fixed at creation. Position and size change only
/// through [`EmojiArt::update`](crate::EmojiArt::update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    content: String,
    position: Position,
    size: i32,
    id: EmojiId,
}

impl Emoji {
    pub(crate) fn new(content: String, position: Position, size: i32, id: EmojiId) -> Self {
        Self {
            content,
            position,
            size,
            id,
        }
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> EmojiId {
        self.id
    }

    /// The glyph string rendered.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Position in document coordinates.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Nominal font size.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Move to a new position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Change the nominal font size.
    pub fn set_size(&mut self, size: i32) {
        self.size = size;
    }
}
