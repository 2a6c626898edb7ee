//! # rasterkit
//!
//! Pixel-exact raster algorithms for interactive paint tools, operating on an
//! opaque RGB24 surface:
//!
//! - Exact lines (Bresenham) and anti-aliased lines (Xiaolin Wu)
//! - Connected-region fill with a solid color or a tiled/stamped pattern,
//!   driven by an explicit span stack so whole-surface regions are safe
//! - Triangles with per-vertex color interpolation and a selectable edge rule
//! - Boundary extraction around an interior region, as a set or an ordered walk
//! - A brush disc primitive and a [`Session`] that dispatches pointer events to
//!   the active tool
//!
//! ## Architecture
//!
//! Every algorithm is a free function over a [`PixelSurface`]. Surfaces clip
//! their own accessors, so no entry point fails once a surface exists:
//! out-of-range pixels are skipped and degenerate input draws nothing.
//!
//! ```
//! use rasterkit::{draw_line_exact, fill_region_color, Point, Rgb8, RgbBuffer};
//!
//! let mut canvas = RgbBuffer::filled(16, 16, Rgb8::WHITE).unwrap();
//! draw_line_exact(&mut canvas, Point::new(0, 8), Point::new(15, 8), Rgb8::BLACK);
//! let painted = fill_region_color(&mut canvas, Point::new(4, 2), Rgb8::RED);
//! assert_eq!(painted, 16 * 8);
//! ```

// Foundation types
pub mod basics;
pub mod color;
pub mod error;
pub mod surface;

// Algorithms
pub mod boundary;
pub mod flood_fill;
pub mod line_bresenham;
pub mod line_wu;
pub mod pattern;
pub mod primitives;
pub mod triangle;

// Tool dispatch
pub mod config;
pub mod session;

pub use basics::{Point, PointF, RectI};
pub use boundary::{trace_boundary, trace_contour, BoundarySet};
pub use color::Rgb8;
pub use config::{BoundaryMode, SessionConfig};
pub use error::{Error, Result};
pub use flood_fill::{fill_region_color, fill_region_pattern};
pub use line_bresenham::draw_line_exact;
pub use line_wu::{draw_line_antialiased, draw_line_antialiased_f};
pub use pattern::{AnchorPolicy, Pattern, PatternMode};
pub use primitives::solid_circle;
pub use session::{Outcome, Session, Tool, Trace};
pub use surface::{PixelSurface, RgbBuffer, RgbView};
pub use triangle::{fill_triangle, fill_triangle_with_rule, FillRule, GouraudVertex};
