//! Connected-region fill with a scanline span stack.
//!
//! Starting from a seed, the filler grows a maximal horizontal span of
//! target-colored pixels, paints it, then scans the rows directly above and
//! below the span. Each maximal run of still-fillable pixels there pushes one
//! seed onto an explicit work stack. Nothing recurses, so a region the size of
//! the whole surface needs stack memory proportional to the number of pending
//! runs, never to the call depth.
//!
//! Connectivity is 4-neighbour: pixels touching only diagonally belong to
//! different regions.
//!
//! Two paints share the engine:
//!
//! - Solid color ([`fill_region_color`]): a painted pixel no longer matches
//!   the target, which is what stops it being revisited.
//! - Pattern ([`fill_region_pattern`]): painted colors may equal the target,
//!   and stamp mode leaves some pixels unpainted, so a [`VisitedMask`] private
//!   to the call tracks what has been handled.

use crate::basics::Point;
use crate::color::Rgb8;
use crate::pattern::{Pattern, PatternMode};
use crate::surface::PixelSurface;

// ============================================================================
// VisitedMask
// ============================================================================

/// One bit per surface pixel, set once the pixel has been handled by a fill.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    width: u32,
    height: u32,
    bits: Vec<u64>,
}

impl VisitedMask {
    pub fn new(width: u32, height: u32) -> Self {
        let n = width as usize * height as usize;
        Self {
            width,
            height,
            bits: vec![0; (n + 63) / 64],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Out-of-range coordinates read as not visited.
    #[inline]
    pub fn is_visited(&self, x: i32, y: i32) -> bool {
        match self.index(x, y) {
            Some(i) => self.bits[i >> 6] & (1u64 << (i & 63)) != 0,
            None => false,
        }
    }

    /// Out-of-range coordinates are ignored.
    #[inline]
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.bits[i >> 6] |= 1u64 << (i & 63);
        }
    }

    /// Number of visited pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

// ============================================================================
// SpanPaint: what a fill writes
// ============================================================================

/// Per-pixel paint source for the span filler.
pub trait SpanPaint {
    /// Color to write at (x, y), or `None` to leave the pixel as it is.
    fn paint(&mut self, x: i32, y: i32) -> Option<Rgb8>;
}

/// The same color everywhere.
#[derive(Debug, Clone, Copy)]
pub struct SolidPaint(pub Rgb8);

impl SpanPaint for SolidPaint {
    #[inline]
    fn paint(&mut self, _x: i32, _y: i32) -> Option<Rgb8> {
        Some(self.0)
    }
}

/// Pattern colors addressed relative to an anchor.
#[derive(Debug, Clone, Copy)]
pub struct PatternPaint<'a> {
    pattern: &'a Pattern,
    anchor: Point,
    mode: PatternMode,
}

impl<'a> PatternPaint<'a> {
    pub fn new(pattern: &'a Pattern, anchor: Point, mode: PatternMode) -> Self {
        Self {
            pattern,
            anchor,
            mode,
        }
    }
}

impl SpanPaint for PatternPaint<'_> {
    #[inline]
    fn paint(&mut self, x: i32, y: i32) -> Option<Rgb8> {
        self.pattern.sample(x, y, self.anchor, self.mode)
    }
}

// ============================================================================
// SpanFiller: the span-stack engine
// ============================================================================

struct SpanFiller<'s, S: ?Sized, P> {
    surface: &'s mut S,
    target: Rgb8,
    paint: P,
    visited: Option<VisitedMask>,
    stack: Vec<Point>,
    painted: usize,
}

impl<'s, S: PixelSurface + ?Sized, P: SpanPaint> SpanFiller<'s, S, P> {
    fn new(surface: &'s mut S, target: Rgb8, paint: P, track_visits: bool) -> Self {
        let visited = if track_visits {
            Some(VisitedMask::new(surface.width(), surface.height()))
        } else {
            None
        };
        Self {
            surface,
            target,
            paint,
            visited,
            stack: Vec::new(),
            painted: 0,
        }
    }

    #[inline]
    fn fillable(&self, x: i32, y: i32) -> bool {
        match self.surface.get(x, y) {
            Some(c) if c == self.target => match &self.visited {
                Some(mask) => !mask.is_visited(x, y),
                None => true,
            },
            _ => false,
        }
    }

    fn run(mut self, seed: Point) -> usize {
        self.stack.push(seed);
        while let Some(Point { x, y }) = self.stack.pop() {
            // A seed may have been swallowed by a span processed after it was pushed.
            if !self.fillable(x, y) {
                continue;
            }

            let mut xl = x;
            while self.fillable(xl - 1, y) {
                xl -= 1;
            }
            let mut xr = x;
            while self.fillable(xr + 1, y) {
                xr += 1;
            }

            self.paint_span(xl, xr, y);
            self.push_runs(xl, xr, y - 1);
            self.push_runs(xl, xr, y + 1);
        }
        self.painted
    }

    fn paint_span(&mut self, xl: i32, xr: i32, y: i32) {
        for x in xl..=xr {
            if let Some(mask) = &mut self.visited {
                mask.mark(x, y);
            }
            if let Some(c) = self.paint.paint(x, y) {
                self.surface.copy_pixel(x, y, c);
                self.painted += 1;
            }
        }
    }

    /// Push one seed per maximal fillable run of row `y` within `[xl, xr]`.
    fn push_runs(&mut self, xl: i32, xr: i32, y: i32) {
        if y < 0 || y >= self.surface.height() as i32 {
            return;
        }
        let mut in_run = false;
        for x in xl..=xr {
            if self.fillable(x, y) {
                if !in_run {
                    self.stack.push(Point::new(x, y));
                    in_run = true;
                }
            } else {
                in_run = false;
            }
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Recolor the 4-connected region of `seed`'s color that contains `seed`.
///
/// A fill whose replacement equals the region's current color, or whose seed
/// lies outside the surface, changes nothing. Returns the number of pixels
/// painted.
pub fn fill_region_color<S: PixelSurface + ?Sized>(
    surface: &mut S,
    seed: Point,
    replacement: Rgb8,
) -> usize {
    let target = match surface.get_at(seed) {
        Some(c) => c,
        None => {
            tracing::trace!(?seed, "fill_region_color: seed outside surface");
            return 0;
        }
    };
    if target == replacement {
        tracing::trace!(?seed, ?target, "fill_region_color: already filled");
        return 0;
    }
    let painted = SpanFiller::new(surface, target, SolidPaint(replacement), false).run(seed);
    tracing::debug!(?seed, ?target, ?replacement, painted, "fill_region_color");
    painted
}

/// Paint the 4-connected region containing `seed` with `pattern`.
///
/// Each region pixel (x, y) takes the pattern color at its address relative
/// to `anchor` (see [`crate::pattern::pattern_address`]). In stamp mode,
/// region pixels outside the single pattern copy are left unpainted. Returns
/// the number of pixels painted.
pub fn fill_region_pattern<S: PixelSurface + ?Sized>(
    surface: &mut S,
    seed: Point,
    pattern: &Pattern,
    anchor: Point,
    mode: PatternMode,
) -> usize {
    let target = match surface.get_at(seed) {
        Some(c) => c,
        None => {
            tracing::trace!(?seed, "fill_region_pattern: seed outside surface");
            return 0;
        }
    };
    let paint = PatternPaint::new(pattern, anchor, mode);
    let painted = SpanFiller::new(surface, target, paint, true).run(seed);
    tracing::debug!(?seed, ?anchor, ?mode, painted, "fill_region_pattern");
    painted
}

// ============================================================================
// Tests
// ============================================================================
