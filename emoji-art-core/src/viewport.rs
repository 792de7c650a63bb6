//! Mapping between screen points and document coordinates.

use serde::{Deserialize, Serialize};

use crate::{Offset, Position};

/// The visible canvas: its size in points plus the presentation's zoom and pan.
///
/// Document content is scaled by `zoom` about the canvas centre and then
/// shifted by `pan`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Canvas width in points.
    pub width: f64,
    /// Canvas height in points.
    pub height: f64,
    /// Scale factor (1.0 = 100%).
    pub zoom: f64,
    /// Screen-space pan offset.
    pub pan: Offset,
}

impl Viewport {
    /// Create an unzoomed, unpanned viewport of the given size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            zoom: 1.0,
            pan: Offset::ZERO,
        }
    }

    /// Set the zoom.
    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the pan offset.
    #[must_use]
    pub fn with_pan(mut self, pan: Offset) -> Self {
        self.pan = pan;
        self
    }

    /// The canvas centre in screen points.
    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Screen point at which a document position is drawn.
    #[must_use]
    pub fn screen_point(&self, position: Position) -> (f64, f64) {
        let (cx, cy) = self.center();
        (
            cx + f64::from(position.x) * self.zoom + self.pan.dx,
            cy - f64::from(position.y) * self.zoom + self.pan.dy,
        )
    }

    /// Document position under a screen point, truncated toward zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Saturating truncation is the intended rounding
    pub fn document_position(&self, x: f64, y: f64) -> Position {
        let (cx, cy) = self.center();
        Position::new(
            ((x - cx - self.pan.dx) / self.zoom) as i32,
            (-(y - cy - self.pan.dy) / self.zoom) as i32,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
