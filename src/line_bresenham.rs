//! Exact (aliased) line drawing with Bresenham's integer algorithm.
//!
//! The walk advances one pixel per step along the major axis (the one with
//! the larger delta; x wins ties) and carries a signed decision term for the
//! minor axis. With `dx`, `dy` taken as magnitudes and x as the major axis:
//!
//! ```text
//! d = 2*dy - dx
//! each step: if d >= 0 { y += sy; d += 2*(dy - dx) } else { d += 2*dy }
//! ```
//!
//! The walk starts at `p0` and ends exactly at `p1`, producing
//! `max(|dx|, |dy|) + 1` distinct, 8-connected pixels.

use crate::basics::Point;
use crate::color::Rgb8;
use crate::surface::PixelSurface;

// ============================================================================
// BresenhamLine
// ============================================================================

/// Iterator over the pixels of the digital segment `p0 -> p1`.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    ver: bool,
    d: i32,
    remaining: u32,
}

impl BresenhamLine {
    pub fn new(p0: Point, p1: Point) -> Self {
        let dx = (p1.x - p0.x).abs();
        let dy = (p1.y - p0.y).abs();
        let ver = dy > dx;
        let d = if ver { 2 * dx - dy } else { 2 * dy - dx };
        Self {
            x: p0.x,
            y: p0.y,
            dx,
            dy,
            sx: (p1.x - p0.x).signum(),
            sy: (p1.y - p0.y).signum(),
            ver,
            d,
            remaining: dx.max(dy) as u32 + 1,
        }
    }

    /// True if y is the major axis.
    #[inline]
    pub fn is_ver(&self) -> bool {
        self.ver
    }

    /// Pixels still to be produced.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u32 {
        self.remaining
    }

    #[inline]
    fn step(&mut self) {
        if self.ver {
            self.y += self.sy;
            if self.d >= 0 {
                self.x += self.sx;
                self.d += 2 * (self.dx - self.dy);
            } else {
                self.d += 2 * self.dx;
            }
        } else {
            self.x += self.sx;
            if self.d >= 0 {
                self.y += self.sy;
                self.d += 2 * (self.dy - self.dx);
            } else {
                self.d += 2 * self.dy;
            }
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let p = Point::new(self.x, self.y);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.step();
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for BresenhamLine {}

// ============================================================================
// Entry point
// ============================================================================

/// Draw the exact segment `p0 -> p1` in `color`.
///
/// Pixels falling outside the surface are skipped. Returns how many pixels
/// were actually written.
pub fn draw_line_exact<S: PixelSurface + ?Sized>(
    surface: &mut S,
    p0: Point,
    p1: Point,
    color: Rgb8,
) -> usize {
    let mut written = 0;
    for p in BresenhamLine::new(p0, p1) {
        if surface.set_at(p, color) {
            written += 1;
        }
    }
    tracing::debug!(?p0, ?p1, written, "draw_line_exact");
    written
}

// ============================================================================
// Tests
// ============================================================================
