//! RGB color type and blending.
//!
//! Surfaces in this crate store opaque 8-bit RGB. Anti-aliasing is expressed
//! as a coverage fraction used to interpolate between the existing pixel and
//! the drawing color, so no alpha channel is ever stored.

use crate::basics::iround;

// ============================================================================
// Rgb8
// ============================================================================

/// 8-bit-per-channel RGB color. Value type; two colors are the same color
/// exactly when all three channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
    pub const GREEN: Rgb8 = Rgb8::new(0, 255, 0);
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);
    pub const GRAY: Rgb8 = Rgb8::new(200, 200, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Blend `color` over `self` with coverage `alpha`.
    ///
    /// Each channel becomes `self * (1 - alpha) + color * alpha`, truncated.
    /// `alpha` is clamped to `[0, 1]`.
    #[inline]
    pub fn blend(self, color: Rgb8, alpha: f64) -> Rgb8 {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |bg: u8, fg: u8| -> u8 { (bg as f64 * (1.0 - a) + fg as f64 * a) as u8 };
        Rgb8::new(
            mix(self.r, color.r),
            mix(self.g, color.g),
            mix(self.b, color.b),
        )
    }

    /// Per-channel weighted sum of three colors, rounded and clamped to
    /// `[0, 255]`. Used for barycentric interpolation, where weights sum to
    /// one inside the triangle.
    pub fn weighted3(colors: [Rgb8; 3], weights: [f64; 3]) -> Rgb8 {
        let channel = |pick: fn(Rgb8) -> u8| -> u8 {
            let v = pick(colors[0]) as f64 * weights[0]
                + pick(colors[1]) as f64 * weights[1]
                + pick(colors[2]) as f64 * weights[2];
            iround(v).clamp(0, 255) as u8
        };
        Rgb8::new(channel(|c| c.r), channel(|c| c.g), channel(|c| c.b))
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<(u8, u8, u8)> for Rgb8 {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ============================================================================
// Tests
// ============================================================================
