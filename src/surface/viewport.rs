//! Viewport rectangles clamped to a surface.

use crate::error::{Error, Result};
use crate::surface::Surface;

/// Rectangle a widget may draw into, in absolute surface coordinates.
///
/// `x2` and `y2` are exclusive. Construction always clamps every edge to
/// the surface, so a viewport never addresses a cell outside of it; a
/// rectangle that ends up with no area is [empty](Self::is_empty).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x1: u32,
    pub x2: u32,
    pub y1: u32,
    pub y2: u32,
}

fn clamp_edge(value: i32, max: u32) -> u32 {
    value.max(0).unsigned_abs().min(max)
}

impl Viewport {
    /// Create a viewport clamped to the surface's current size.
    #[must_use]
    pub fn new<S: Surface + ?Sized>(surface: &S, x1: i32, x2: i32, y1: i32, y2: i32) -> Self {
        Self::clamped(surface.width(), surface.height(), x1, x2, y1, y2)
    }

    /// Create a viewport clamped to `[0, width] x [0, height]`.
    #[must_use]
    pub fn clamped(width: u32, height: u32, x1: i32, x2: i32, y1: i32, y2: i32) -> Self {
        Self {
            x1: clamp_edge(x1, width),
            x2: clamp_edge(x2, width),
            y1: clamp_edge(y1, height),
            y2: clamp_edge(y2, height),
        }
    }

    /// Viewport covering the whole surface.
    #[must_use]
    pub fn full<S: Surface + ?Sized>(surface: &S) -> Self {
        Self {
            x1: 0,
            x2: surface.width(),
            y1: 0,
            y2: surface.height(),
        }
    }

    /// Like [`new`](Self::new), but rejects a rectangle with no drawable area.
    pub fn checked<S: Surface + ?Sized>(
        surface: &S,
        x1: i32,
        x2: i32,
        y1: i32,
        y2: i32,
    ) -> Result<Self> {
        let viewport = Self::new(surface, x1, x2, y1, y2);
        if viewport.is_empty() {
            return Err(Error::InvalidViewport {
                x1: viewport.x1,
                x2: viewport.x2,
                y1: viewport.y1,
                y2: viewport.y2,
            });
        }
        Ok(viewport)
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Height in rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Check if a point is inside this rectangle.
    #[must_use]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x1 && x < self.x2 && y >= self.y1 && y < self.y2
    }

    /// A viewport is empty when its own top-left corner lies outside it.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.contains(self.x1, self.y1)
    }

    /// Intersect with the surface's current bounds.
    ///
    /// A viewport built for a larger surface, or assembled by hand from its
    /// public fields, may reach past the surface; the result never does.
    #[must_use]
    pub fn clip_to<S: Surface + ?Sized>(self, surface: &S) -> Self {
        let (width, height) = (surface.width(), surface.height());
        Self {
            x1: self.x1.min(width),
            x2: self.x2.min(width),
            y1: self.y1.min(height),
            y2: self.y2.min(height),
        }
    }

    /// One-row slice starting at column `x`, clipped to this viewport.
    #[must_use]
    pub fn row(&self, x: u32, y: u32) -> Self {
        let x1 = x.clamp(self.x1, self.x2);
        let y1 = y.clamp(self.y1, self.y2);
        Self {
            x1,
            x2: self.x2,
            y1,
            y2: y1.saturating_add(1).min(self.y2),
        }
    }
}
