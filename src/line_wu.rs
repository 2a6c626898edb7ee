//! Anti-aliased line drawing with Xiaolin Wu's algorithm.
//!
//! The segment is walked one pixel at a time along its shallow axis (x and y
//! are transposed for steep lines). At every step the true intersection with
//! the minor axis falls between two pixels; the one it is closer to receives
//! `1 - fract` coverage and its neighbour `fract`, so each step deposits a
//! total coverage of exactly one. The two endpoints are weighted additionally
//! by how much of their pixel the segment actually spans (the "gap").
//!
//! Coverage is applied by blending: `new = background * (1 - a) + color * a`.

use crate::basics::{fpart, ifloor, rfpart, Point, PointF};
use crate::color::Rgb8;
use crate::surface::PixelSurface;

// ============================================================================
// WuPair: the two pixels touched by one step
// ============================================================================

/// Two minor-axis neighbours sharing one major-axis step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WuPair {
    /// Pixel at the floor of the intercept.
    pub near: Point,
    /// Its neighbour one unit further along the minor axis.
    pub far: Point,
    /// Fractional part of the intercept.
    pub frac: f64,
    /// Gap coverage of the step: 1 for interior steps, partial at endpoints.
    pub weight: f64,
}

impl WuPair {
    #[inline]
    pub fn near_alpha(&self) -> f64 {
        (1.0 - self.frac) * self.weight
    }

    #[inline]
    pub fn far_alpha(&self) -> f64 {
        self.frac * self.weight
    }
}

// ============================================================================
// WuLine
// ============================================================================

/// Iterator over the [`WuPair`]s of a sub-pixel segment, in walk order:
/// first endpoint, interior steps, second endpoint. A segment whose endpoints
/// round to the same pixel yields a single pair.
#[derive(Debug, Clone)]
pub struct WuLine {
    steep: bool,
    gradient: f64,
    intery: f64,
    x: i32,
    x_end: i32,
    first: Option<WuPair>,
    last: Option<WuPair>,
}

impl WuLine {
    pub fn new(p0: PointF, p1: PointF) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (p0.x, p0.y, p1.x, p1.y);
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx == 0.0 { 0.0 } else { dy / dx };

        // First endpoint
        let xend = x0.round();
        let yend = y0 + gradient * (xend - x0);
        let xgap = rfpart(x0 + 0.5);
        let xpxl1 = xend as i32;
        let first = Self::pair(steep, xpxl1, yend, xgap);
        let intery = yend + gradient;

        // Second endpoint
        let xend = x1.round();
        let yend = y1 + gradient * (xend - x1);
        let xgap = fpart(x1 + 0.5);
        let xpxl2 = xend as i32;
        let last = Self::pair(steep, xpxl2, yend, xgap);

        // Both endpoints in one pixel: plot it once, as the second endpoint.
        let (first, last) = if xpxl1 == xpxl2 {
            (last, None)
        } else {
            (first, Some(last))
        };

        Self {
            steep,
            gradient,
            intery,
            x: xpxl1 + 1,
            x_end: xpxl2,
            first: Some(first),
            last,
        }
    }

    /// Integer-endpoint convenience constructor.
    pub fn from_points(p0: Point, p1: Point) -> Self {
        Self::new(p0.into(), p1.into())
    }

    /// True if the walk runs along y (x and y were transposed).
    #[inline]
    pub fn is_steep(&self) -> bool {
        self.steep
    }

    #[inline]
    pub fn gradient(&self) -> f64 {
        self.gradient
    }

    fn pair(steep: bool, major: i32, intercept: f64, weight: f64) -> WuPair {
        let minor = ifloor(intercept);
        let (near, far) = if steep {
            (Point::new(minor, major), Point::new(minor + 1, major))
        } else {
            (Point::new(major, minor), Point::new(major, minor + 1))
        };
        WuPair {
            near,
            far,
            frac: fpart(intercept),
            weight,
        }
    }
}

impl Iterator for WuLine {
    type Item = WuPair;

    fn next(&mut self) -> Option<WuPair> {
        if let Some(p) = self.first.take() {
            return Some(p);
        }
        if self.x < self.x_end {
            let p = Self::pair(self.steep, self.x, self.intery, 1.0);
            self.intery += self.gradient;
            self.x += 1;
            return Some(p);
        }
        self.last.take()
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Blend an anti-aliased segment between integer pixel centres.
///
/// Returns the number of pixels blended with non-zero coverage.
pub fn draw_line_antialiased<S: PixelSurface + ?Sized>(
    surface: &mut S,
    p0: Point,
    p1: Point,
    color: Rgb8,
) -> usize {
    draw_line_antialiased_f(surface, p0.into(), p1.into(), color)
}

/// Blend an anti-aliased segment with sub-pixel endpoints.
pub fn draw_line_antialiased_f<S: PixelSurface + ?Sized>(
    surface: &mut S,
    p0: PointF,
    p1: PointF,
    color: Rgb8,
) -> usize {
    let mut written = 0;
    for pair in WuLine::new(p0, p1) {
        for (p, alpha) in [(pair.near, pair.near_alpha()), (pair.far, pair.far_alpha())] {
            if alpha > 0.0 && surface.blend_pixel(p.x, p.y, color, alpha) {
                written += 1;
            }
        }
    }
    tracing::debug!(?p0, ?p1, written, "draw_line_antialiased");
    written
}

// ============================================================================
// Tests
// ============================================================================
