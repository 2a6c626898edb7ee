//! Session configuration.
//!
//! [`SessionConfig::default`] reproduces the behaviour of the classic paint
//! tool: a radius-4 brush, an anti-aliased comparison line offset by (5, 5),
//! red boundary overlays and a red/green/blue triangle.
//!
//! With the `config` feature (on by default) the configuration can be loaded
//! from TOML. Every field is optional there; missing fields keep their
//! defaults.
//!
//! ```toml
//! brush_radius = 6
//! line_offset = { x = 0, y = 8 }
//! fill_rule = "top_left"
//! anchor = "click"
//! boundary_mode = "contour"
//! ```

use crate::basics::Point;
use crate::color::Rgb8;
use crate::pattern::{AnchorPolicy, PatternMode};
use crate::triangle::FillRule;

/// Which tracer the boundary tool runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum BoundaryMode {
    /// Exhaustive, unordered border set.
    #[default]
    Set,
    /// Ordered contour walk; may stop early on complex regions.
    Contour,
}

/// Tunables for a [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct SessionConfig {
    /// Color selected when the session starts.
    pub initial_color: Rgb8,
    /// Radius of the freehand brush disc.
    pub brush_radius: i32,
    /// Displacement of the anti-aliased copy drawn by the line tool.
    pub line_offset: Point,
    /// Color used to paint boundary traces.
    pub overlay_color: Rgb8,
    /// Vertex colors for the first, second and third triangle click.
    pub triangle_colors: [Rgb8; 3],
    pub fill_rule: FillRule,
    pub anchor: AnchorPolicy,
    pub pattern_mode: PatternMode,
    pub boundary_mode: BoundaryMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_color: Rgb8::BLACK,
            brush_radius: 4,
            line_offset: Point::new(5, 5),
            overlay_color: Rgb8::RED,
            triangle_colors: [Rgb8::RED, Rgb8::GREEN, Rgb8::BLUE],
            fill_rule: FillRule::Inclusive,
            anchor: AnchorPolicy::SurfaceOrigin,
            pattern_mode: PatternMode::Tile,
            boundary_mode: BoundaryMode::Set,
        }
    }
}

#[cfg(feature = "config")]
impl SessionConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> crate::error::Result<Self> {
        let config: SessionConfig = toml::from_str(s)?;
        tracing::debug!(?config, "loaded session config");
        Ok(config)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SessionConfig::default();
        assert_eq!(c.brush_radius, 4);
        assert_eq!(c.line_offset, Point::new(5, 5));
        assert_eq!(c.overlay_color, Rgb8::RED);
        assert_eq!(c.triangle_colors, [Rgb8::RED, Rgb8::GREEN, Rgb8::BLUE]);
        assert_eq!(c.fill_rule, FillRule::Inclusive);
        assert_eq!(c.boundary_mode, BoundaryMode::Set);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SessionConfig::from_toml_str("").unwrap(), SessionConfig::default());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_partial_toml() {
        let c = SessionConfig::from_toml_str(
            r#"
            brush_radius = 6
            line_offset = { x = 0, y = 8 }
            overlay_color = { r = 0, g = 0, b = 255 }
            fill_rule = "top_left"
            pattern_mode = "stamp"
            boundary_mode = "contour"
            "#,
        )
        .unwrap();
        assert_eq!(c.brush_radius, 6);
        assert_eq!(c.line_offset, Point::new(0, 8));
        assert_eq!(c.overlay_color, Rgb8::BLUE);
        assert_eq!(c.fill_rule, FillRule::TopLeft);
        assert_eq!(c.pattern_mode, PatternMode::Stamp);
        assert_eq!(c.boundary_mode, BoundaryMode::Contour);
        assert_eq!(c.triangle_colors, SessionConfig::default().triangle_colors);
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_anchor_variants() {
        let c = SessionConfig::from_toml_str(r#"anchor = "centered_on_click""#).unwrap();
        assert_eq!(c.anchor, AnchorPolicy::CenteredOnClick);
        let c = SessionConfig::from_toml_str("anchor = { fixed = { x = 3, y = 4 } }").unwrap();
        assert_eq!(c.anchor, AnchorPolicy::Fixed(Point::new(3, 4)));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_invalid_toml() {
        let err = SessionConfig::from_toml_str("brush_radius = \"big\"").unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
        assert!(err.to_string().starts_with("invalid session configuration"));
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_unknown_fill_rule_rejected() {
        assert!(SessionConfig::from_toml_str("fill_rule = \"even_odd\"").is_err());
    }
}
