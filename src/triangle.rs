//! Triangle fill with per-vertex color interpolation (Gouraud shading).
//!
//! Every integer pixel P inside the triangle's clipped bounding box gets
//! barycentric weights from the three edge functions, normalised by the
//! doubled signed area `S`:
//!
//! ```text
//! a = edge(B, C, P) / S    b = edge(C, A, P) / S    c = edge(A, B, P) / S
//! ```
//!
//! Because all three share `S`, the inside test does not depend on winding.
//! The pixel color is `colorA * a + colorB * b + colorC * c` per channel.

use crate::basics::{iceil, ifloor, PointF, RectI};
use crate::color::Rgb8;
use crate::surface::PixelSurface;

/// Triangles with `|S|` below this are treated as collinear and not drawn.
pub const DEGENERATE_EPSILON: f64 = 1e-4;

// ============================================================================
// GouraudVertex
// ============================================================================

/// Triangle vertex with position and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GouraudVertex {
    pub x: f64,
    pub y: f64,
    pub color: Rgb8,
}

impl GouraudVertex {
    pub fn new(p: impl Into<PointF>, color: Rgb8) -> Self {
        let p = p.into();
        Self {
            x: p.x,
            y: p.y,
            color,
        }
    }
}

// ============================================================================
// FillRule
// ============================================================================

/// Ownership of pixels lying exactly on a triangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum FillRule {
    /// Every edge pixel is inside. Triangles sharing an edge both paint it.
    #[default]
    Inclusive,
    /// Edge pixels belong to the triangle only on its top and left edges, so
    /// a mesh of adjacent triangles paints every pixel exactly once.
    TopLeft,
}

/// Edge function: doubled signed area of (p0, p1, (x, y)).
#[inline]
fn edge(p0: &GouraudVertex, p1: &GouraudVertex, x: f64, y: f64) -> f64 {
    (p1.x - p0.x) * (y - p0.y) - (p1.y - p0.y) * (x - p0.x)
}

/// For a triangle with positive doubled area, a top edge runs exactly
/// horizontally to the right and a left edge runs upward (y decreasing).
#[inline]
fn is_top_left(p0: &GouraudVertex, p1: &GouraudVertex) -> bool {
    let dx = p1.x - p0.x;
    let dy = p1.y - p0.y;
    (dy == 0.0 && dx > 0.0) || dy < 0.0
}

// ============================================================================
// Entry points
// ============================================================================

/// Fill triangle ABC, interpolating the three vertex colors.
///
/// Uses [`FillRule::Inclusive`]. Returns the number of pixels written.
pub fn fill_triangle<S: PixelSurface + ?Sized>(
    surface: &mut S,
    a: PointF,
    b: PointF,
    c: PointF,
    color_a: Rgb8,
    color_b: Rgb8,
    color_c: Rgb8,
) -> usize {
    fill_triangle_with_rule(
        surface,
        [
            GouraudVertex::new(a, color_a),
            GouraudVertex::new(b, color_b),
            GouraudVertex::new(c, color_c),
        ],
        FillRule::Inclusive,
    )
}

/// Fill a triangle with an explicit edge-ownership rule.
pub fn fill_triangle_with_rule<S: PixelSurface + ?Sized>(
    surface: &mut S,
    vertices: [GouraudVertex; 3],
    rule: FillRule,
) -> usize {
    let [mut va, mut vb, mut vc] = vertices;
    let mut area = edge(&va, &vb, vc.x, vc.y);
    if area.abs() < DEGENERATE_EPSILON {
        tracing::trace!(?vertices, "fill_triangle: degenerate triangle");
        return 0;
    }
    if area < 0.0 {
        std::mem::swap(&mut vb, &mut vc);
        area = -area;
    }

    let mut bbox = RectI::new(
        ifloor(va.x.min(vb.x).min(vc.x)),
        ifloor(va.y.min(vb.y).min(vc.y)),
        iceil(va.x.max(vb.x).max(vc.x)),
        iceil(va.y.max(vb.y).max(vc.y)),
    );
    if !bbox.clip(&surface.bounds()) {
        tracing::trace!(?vertices, "fill_triangle: outside surface");
        return 0;
    }

    // Which edges own their zero-weight pixels: BC for a, CA for b, AB for c.
    let owns = match rule {
        FillRule::Inclusive => [true; 3],
        FillRule::TopLeft => [
            is_top_left(&vb, &vc),
            is_top_left(&vc, &va),
            is_top_left(&va, &vb),
        ],
    };
    let inside = |w: f64, owned: bool| w > 0.0 || (w == 0.0 && owned);

    let colors = [va.color, vb.color, vc.color];
    let mut written = 0;
    for y in bbox.y1..=bbox.y2 {
        let fy = y as f64;
        for x in bbox.x1..=bbox.x2 {
            let fx = x as f64;
            let wa = edge(&vb, &vc, fx, fy);
            let wb = edge(&vc, &va, fx, fy);
            let wc = edge(&va, &vb, fx, fy);
            if !(inside(wa, owns[0]) && inside(wb, owns[1]) && inside(wc, owns[2])) {
                continue;
            }
            let color = Rgb8::weighted3(colors, [wa / area, wb / area, wc / area]);
            surface.copy_pixel(x, y, color);
            written += 1;
        }
    }
    tracing::debug!(?rule, written, "fill_triangle");
    written
}

// ============================================================================
// Tests
// ============================================================================
