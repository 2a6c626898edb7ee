//! Solid discs for the freehand brush.
//!
//! Outline stepping uses a Bresenham ellipse interpolator; each completed row
//! of the outline is filled as one horizontal span mirrored about the centre.

use crate::basics::Point;
use crate::color::Rgb8;
use crate::surface::PixelSurface;

// ============================================================================
// EllipseBresenhamInterpolator
// ============================================================================

/// Steps through the pixels of one ellipse quadrant, from `(0, -ry)` toward
/// `(rx, 0)`. Every call to [`next`](Self::next) moves one pixel in x, in y,
/// or diagonally, whichever keeps the error term smallest.
#[derive(Debug, Clone)]
pub struct EllipseBresenhamInterpolator {
    rx2: i64,
    ry2: i64,
    two_rx2: i64,
    two_ry2: i64,
    dx: i32,
    dy: i32,
    inc_x: i64,
    inc_y: i64,
    cur_f: i64,
}

impl EllipseBresenhamInterpolator {
    pub fn new(rx: i32, ry: i32) -> Self {
        let rx2 = rx as i64 * rx as i64;
        let ry2 = ry as i64 * ry as i64;
        Self {
            rx2,
            ry2,
            two_rx2: rx2 << 1,
            two_ry2: ry2 << 1,
            dx: 0,
            dy: 0,
            inc_x: 0,
            inc_y: -(ry as i64) * (rx2 << 1),
            cur_f: 0,
        }
    }

    /// X step taken by the last call to `next` (0 or 1).
    pub fn dx(&self) -> i32 {
        self.dx
    }

    /// Y step taken by the last call to `next` (0 or 1).
    pub fn dy(&self) -> i32 {
        self.dy
    }

    pub fn next(&mut self) {
        let fx = self.cur_f + self.inc_x + self.ry2;
        let fy = self.cur_f + self.inc_y + self.rx2;
        let fxy = fx + self.inc_y + self.rx2;

        let mx = fx.abs();
        let my = fy.abs();
        let mxy = fxy.abs();

        let (min_m, x_only) = if mx > my { (my, false) } else { (mx, true) };

        self.dx = 0;
        self.dy = 0;

        if min_m > mxy {
            self.inc_x += self.two_ry2;
            self.inc_y += self.two_rx2;
            self.cur_f = fxy;
            self.dx = 1;
            self.dy = 1;
        } else if x_only {
            self.inc_x += self.two_ry2;
            self.cur_f = fx;
            self.dx = 1;
        } else {
            self.inc_y += self.two_rx2;
            self.cur_f = fy;
            self.dy = 1;
        }
    }
}

// ============================================================================
// Filled shapes
// ============================================================================

/// Paint `x1..=x2` on row `y`, clipped. Returns the number of pixels written.
fn span<S: PixelSurface + ?Sized>(surface: &mut S, x1: i32, y: i32, x2: i32, c: Rgb8) -> usize {
    if y < 0 || y >= surface.height() as i32 {
        return 0;
    }
    let lo = x1.max(0);
    let hi = x2.min(surface.width() as i32 - 1);
    if lo > hi {
        return 0;
    }
    surface.copy_hline(lo, y, hi, c);
    (hi - lo + 1) as usize
}

/// Fill the axis-aligned ellipse centred at `center` with radii `rx`, `ry`.
///
/// Negative radii paint nothing. A zero radius degenerates to a straight
/// span along the other axis. Returns the number of pixels written.
pub fn solid_ellipse<S: PixelSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    rx: i32,
    ry: i32,
    color: Rgb8,
) -> usize {
    if rx < 0 || ry < 0 {
        return 0;
    }
    let (x, y) = (center.x, center.y);
    if rx == 0 || ry == 0 {
        return (y - ry..=y + ry)
            .map(|row| span(surface, x - rx, row, x + rx, color))
            .sum();
    }

    let mut ei = EllipseBresenhamInterpolator::new(rx, ry);
    let mut dx = 0;
    let mut dy = -ry;
    let mut dx0 = dx;
    let mut dy0 = dy;
    let mut written = 0;

    loop {
        ei.next();
        dx += ei.dx();
        dy += ei.dy();
        if dy != dy0 {
            written += span(surface, x - dx0, y + dy0, x + dx0, color);
            written += span(surface, x - dx0, y - dy0, x + dx0, color);
        }
        dx0 = dx;
        dy0 = dy;
        if dy >= 0 {
            break;
        }
    }
    written + span(surface, x - dx0, y + dy0, x + dx0, color)
}

/// Fill a disc of radius `r` around `center`.
pub fn solid_circle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    center: Point,
    r: i32,
    color: Rgb8,
) -> usize {
    let written = solid_ellipse(surface, center, r, r, color);
    tracing::trace!(?center, r, written, "solid_circle");
    written
}

// ============================================================================
// Tests
// ============================================================================
