//! Fill patterns and the anchor arithmetic that maps surface pixels into
//! pattern space.
//!
//! A pattern is a small, already decoded RGB image. During a pattern fill each
//! surface pixel (x, y) is addressed relative to an anchor (ax, ay):
//!
//! - [`PatternMode::Tile`]: `((x - ax) mod pw, (y - ay) mod ph)`, always a hit.
//! - [`PatternMode::Stamp`]: `(x - ax, y - ay)`, a hit only when inside the
//!   pattern; the image is not repeated.

use crate::basics::Point;
use crate::color::Rgb8;
use crate::error::Result;
use crate::surface::{PixelSurface, RgbBuffer};

// ============================================================================
// Pattern
// ============================================================================

/// A decoded, tileable RGB image used as fill paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    image: RgbBuffer,
}

impl Pattern {
    pub fn new(image: RgbBuffer) -> Self {
        Self { image }
    }

    /// Build a pattern by evaluating `f(px, py)` over a `width` x `height` grid.
    pub fn from_fn(width: u32, height: u32, f: impl FnMut(i32, i32) -> Rgb8) -> Result<Self> {
        Ok(Self::new(RgbBuffer::from_fn(width, height, f)?))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbBuffer {
        &self.image
    }

    /// Color at pattern coordinate (px, py), `None` outside the image.
    #[inline]
    pub fn color_at(&self, px: i32, py: i32) -> Option<Rgb8> {
        self.image.get(px, py)
    }

    /// Pattern color for surface pixel (x, y) under `anchor` and `mode`.
    #[inline]
    pub fn sample(&self, x: i32, y: i32, anchor: Point, mode: PatternMode) -> Option<Rgb8> {
        let (px, py) = pattern_address(x, y, anchor, self.width(), self.height(), mode)?;
        self.color_at(px, py)
    }
}

// ============================================================================
// Addressing
// ============================================================================

/// How a pattern covers the region outside its own extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum PatternMode {
    /// Repeat the image in both directions.
    #[default]
    Tile,
    /// Paint a single copy; pixels outside it stay untouched.
    Stamp,
}

/// Map surface pixel (x, y) to pattern coordinates.
///
/// Returns `None` when the pattern has no pixels, or in stamp mode when the
/// mapped coordinate falls outside the `pw` x `ph` pattern.
#[inline]
pub fn pattern_address(
    x: i32,
    y: i32,
    anchor: Point,
    pw: u32,
    ph: u32,
    mode: PatternMode,
) -> Option<(i32, i32)> {
    if pw == 0 || ph == 0 {
        return None;
    }
    let dx = x - anchor.x;
    let dy = y - anchor.y;
    match mode {
        PatternMode::Tile => Some((dx.rem_euclid(pw as i32), dy.rem_euclid(ph as i32))),
        PatternMode::Stamp => {
            if dx >= 0 && dy >= 0 && (dx as u32) < pw && (dy as u32) < ph {
                Some((dx, dy))
            } else {
                None
            }
        }
    }
}

// ============================================================================
// Anchor policies
// ============================================================================

/// Where the pattern origin is pinned when a fill is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum AnchorPolicy {
    /// Pattern origin at the clicked pixel.
    Click,
    /// Pattern centre at the clicked pixel.
    CenteredOnClick,
    /// Pattern origin at the surface origin; tiles line up across fills.
    #[default]
    SurfaceOrigin,
    /// Pattern origin at a caller-chosen surface coordinate.
    Fixed(Point),
}

impl AnchorPolicy {
    /// Resolve the anchor for a fill seeded at `click`.
    pub fn resolve(self, click: Point, pattern: &Pattern) -> Point {
        match self {
            AnchorPolicy::Click => click,
            AnchorPolicy::CenteredOnClick => click.offset(
                -((pattern.width() / 2) as i32),
                -((pattern.height() / 2) as i32),
            ),
            AnchorPolicy::SurfaceOrigin => Point::new(0, 0),
            AnchorPolicy::Fixed(p) => p,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
