//! Tool dispatch for an interactive paint surface.
//!
//! A [`Session`] is the explicit context a UI layer owns: the active tool, the
//! current color, an optional loaded pattern and the clicks collected so far
//! for multi-click tools. The UI translates its pointer events into surface
//! coordinates and forwards them as [`press`](Session::press),
//! [`drag`](Session::drag) and [`release`](Session::release). Every call
//! reports what happened as an [`Outcome`].
//!
//! | Tool          | press                                                  |
//! |---------------|--------------------------------------------------------|
//! | `Brush`       | starts a stroke and stamps a disc; drags keep stamping |
//! | `Fill`        | solid fill with the current color                      |
//! | `PatternFill` | pattern fill, ignored until a pattern is loaded        |
//! | `Boundary`    | traces the current color around the click, overlays it |
//! | `Line`        | second click draws exact and offset anti-aliased lines |
//! | `Triangle`    | third click fills a shaded triangle                    |

use crate::basics::Point;
use crate::boundary::{trace_boundary, trace_contour, BoundarySet};
use crate::color::Rgb8;
use crate::config::{BoundaryMode, SessionConfig};
use crate::flood_fill::{fill_region_color, fill_region_pattern};
use crate::line_bresenham::draw_line_exact;
use crate::line_wu::draw_line_antialiased;
use crate::pattern::Pattern;
use crate::primitives::solid_circle;
use crate::surface::PixelSurface;
use crate::triangle::{fill_triangle_with_rule, GouraudVertex};

// ============================================================================
// Tool
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "snake_case"))]
pub enum Tool {
    #[default]
    Brush,
    Fill,
    PatternFill,
    Boundary,
    Line,
    Triangle,
}

impl Tool {
    /// Clicks needed before the tool draws anything.
    pub fn clicks_needed(self) -> usize {
        match self {
            Tool::Line => 2,
            Tool::Triangle => 3,
            _ => 1,
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Border pixels found by the boundary tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trace {
    Set(BoundarySet),
    Contour(Vec<Point>),
}

impl Trace {
    pub fn len(&self) -> usize {
        match self {
            Trace::Set(s) => s.len(),
            Trace::Contour(c) => c.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn paint<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: Rgb8) -> usize {
        match self {
            Trace::Set(s) => s.paint(surface, color),
            Trace::Contour(c) => c.iter().filter(|p| surface.set_at(**p, color)).count(),
        }
    }
}

/// Result of forwarding one pointer event to a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do for this event.
    Ignored,
    /// A multi-click tool stored the point and waits for more.
    Pending { collected: usize, needed: usize },
    /// The surface was modified.
    Painted { pixels: usize },
    /// A boundary was traced and painted as an overlay.
    Traced(Trace),
}

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    tool: Tool,
    color: Rgb8,
    pattern: Option<Pattern>,
    pending: Vec<Point>,
    stroke: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            color: config.initial_color,
            config,
            tool: Tool::default(),
            pattern: None,
            pending: Vec::new(),
            stroke: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Switch tools. Collected clicks and any open stroke are discarded.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool != self.tool {
            tracing::debug!(from = ?self.tool, to = ?tool, "set_tool");
        }
        self.tool = tool;
        self.pending.clear();
        self.stroke = false;
    }

    pub fn color(&self) -> Rgb8 {
        self.color
    }

    pub fn set_color(&mut self, color: Rgb8) {
        self.color = color;
    }

    pub fn load_pattern(&mut self, pattern: Pattern) {
        tracing::debug!(
            width = pattern.width(),
            height = pattern.height(),
            "load_pattern"
        );
        self.pattern = Some(pattern);
    }

    pub fn clear_pattern(&mut self) {
        self.pattern = None;
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    /// Clicks collected so far by a multi-click tool.
    pub fn pending(&self) -> &[Point] {
        &self.pending
    }

    /// True between a brush press and the matching release.
    pub fn is_stroking(&self) -> bool {
        self.stroke
    }

    /// Pointer pressed at `p`. Presses outside the surface are ignored.
    pub fn press<S: PixelSurface + ?Sized>(&mut self, surface: &mut S, p: Point) -> Outcome {
        if !surface.inbox(p.x, p.y) {
            tracing::trace!(?p, "press outside surface");
            return Outcome::Ignored;
        }
        match self.tool {
            Tool::Brush => {
                self.stroke = true;
                self.stamp(surface, p)
            }
            Tool::Fill => Outcome::Painted {
                pixels: fill_region_color(surface, p, self.color),
            },
            Tool::PatternFill => match &self.pattern {
                Some(pattern) => {
                    let anchor = self.config.anchor.resolve(p, pattern);
                    let pixels =
                        fill_region_pattern(surface, p, pattern, anchor, self.config.pattern_mode);
                    Outcome::Painted { pixels }
                }
                None => {
                    tracing::trace!("pattern fill without a loaded pattern");
                    Outcome::Ignored
                }
            },
            Tool::Boundary => {
                let trace = match self.config.boundary_mode {
                    BoundaryMode::Set => Trace::Set(trace_boundary(&*surface, p, self.color)),
                    BoundaryMode::Contour => {
                        Trace::Contour(trace_contour(&*surface, p, self.color))
                    }
                };
                trace.paint(surface, self.config.overlay_color);
                Outcome::Traced(trace)
            }
            Tool::Line | Tool::Triangle => self.collect(surface, p),
        }
    }

    /// Pointer moved to `p` with the button held.
    pub fn drag<S: PixelSurface + ?Sized>(&mut self, surface: &mut S, p: Point) -> Outcome {
        if self.tool == Tool::Brush && self.stroke && surface.inbox(p.x, p.y) {
            self.stamp(surface, p)
        } else {
            Outcome::Ignored
        }
    }

    /// Pointer released. Ends a brush stroke.
    pub fn release(&mut self) -> Outcome {
        self.stroke = false;
        Outcome::Ignored
    }

    fn stamp<S: PixelSurface + ?Sized>(&self, surface: &mut S, p: Point) -> Outcome {
        Outcome::Painted {
            pixels: solid_circle(surface, p, self.config.brush_radius, self.color),
        }
    }

    fn collect<S: PixelSurface + ?Sized>(&mut self, surface: &mut S, p: Point) -> Outcome {
        self.pending.push(p);
        let needed = self.tool.clicks_needed();
        if self.pending.len() < needed {
            return Outcome::Pending {
                collected: self.pending.len(),
                needed,
            };
        }

        let pts = std::mem::take(&mut self.pending);
        let pixels = match self.tool {
            Tool::Line => {
                let off = self.config.line_offset;
                draw_line_exact(surface, pts[0], pts[1], self.color)
                    + draw_line_antialiased(
                        surface,
                        pts[0].offset(off.x, off.y),
                        pts[1].offset(off.x, off.y),
                        self.color,
                    )
            }
            _ => {
                let [ca, cb, cc] = self.config.triangle_colors;
                fill_triangle_with_rule(
                    surface,
                    [
                        GouraudVertex::new(pts[0], ca),
                        GouraudVertex::new(pts[1], cb),
                        GouraudVertex::new(pts[2], cc),
                    ],
                    self.config.fill_rule,
                )
            }
        };
        Outcome::Painted { pixels }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RgbBuffer;

    fn canvas() -> RgbBuffer {
        RgbBuffer::filled(40, 30, Rgb8::WHITE).unwrap()
    }

    #[test]
    fn test_defaults() {
        let s = Session::default();
        assert_eq!(s.tool(), Tool::Brush);
        assert_eq!(s.color(), Rgb8::BLACK);
        assert!(s.pattern().is_none());
        assert!(s.pending().is_empty());
    }

    #[test]
    fn test_brush_stroke() {
        let mut buf = canvas();
        let mut s = Session::default();
        assert_eq!(s.drag(&mut buf, Point::new(10, 10)), Outcome::Ignored);
        assert_eq!(s.press(&mut buf, Point::new(10, 10)), Outcome::Painted { pixels: 61 });
        assert!(s.is_stroking());
        assert!(matches!(s.drag(&mut buf, Point::new(20, 10)), Outcome::Painted { .. }));
        assert_eq!(buf.pixel(20, 14), Rgb8::BLACK);
        s.release();
        assert!(!s.is_stroking());
        assert_eq!(s.drag(&mut buf, Point::new(30, 20)), Outcome::Ignored);
        assert_eq!(buf.pixel(30, 20), Rgb8::WHITE);
    }

    #[test]
    fn test_fill_uses_current_color() {
        let mut buf = canvas();
        let mut s = Session::default();
        s.set_tool(Tool::Fill);
        s.set_color(Rgb8::GREEN);
        assert_eq!(s.press(&mut buf, Point::new(3, 3)), Outcome::Painted { pixels: 1200 });
        assert_eq!(buf.pixel(39, 29), Rgb8::GREEN);
    }

    #[test]
    fn test_pattern_fill_needs_pattern() {
        let mut buf = canvas();
        let mut s = Session::default();
        s.set_tool(Tool::PatternFill);
        assert_eq!(s.press(&mut buf, Point::new(3, 3)), Outcome::Ignored);
        s.load_pattern(Pattern::from_fn(2, 2, |x, y| {
            if (x + y) % 2 == 0 {
                Rgb8::RED
            } else {
                Rgb8::BLUE
            }
        })
        .unwrap());
        assert_eq!(s.press(&mut buf, Point::new(3, 3)), Outcome::Painted { pixels: 1200 });
        assert_eq!(buf.pixel(0, 0), Rgb8::RED);
        assert_eq!(buf.pixel(1, 0), Rgb8::BLUE);
    }

    #[test]
    fn test_line_two_clicks() {
        let mut buf = canvas();
        let mut s = Session::default();
        s.set_tool(Tool::Line);
        assert_eq!(
            s.press(&mut buf, Point::new(2, 2)),
            Outcome::Pending {
                collected: 1,
                needed: 2
            }
        );
        assert!(matches!(s.press(&mut buf, Point::new(12, 2)), Outcome::Painted { .. }));
        assert!(s.pending().is_empty());
        // Exact line plus its anti-aliased copy five pixels down and right.
        assert_eq!(buf.pixel(7, 2), Rgb8::BLACK);
        assert_eq!(buf.pixel(12, 7), Rgb8::BLACK);
        assert_eq!(buf.pixel(7, 4), Rgb8::WHITE);
    }

    #[test]
    fn test_triangle_three_clicks() {
        let mut buf = canvas();
        let mut s = Session::default();
        s.set_tool(Tool::Triangle);
        s.press(&mut buf, Point::new(2, 2));
        assert_eq!(
            s.press(&mut buf, Point::new(30, 4)),
            Outcome::Pending {
                collected: 2,
                needed: 3
            }
        );
        assert!(matches!(s.press(&mut buf, Point::new(10, 25)), Outcome::Painted { .. }));
        assert_eq!(buf.pixel(2, 2), Rgb8::RED);
        assert_eq!(buf.pixel(30, 4), Rgb8::GREEN);
        assert_eq!(buf.pixel(10, 25), Rgb8::BLUE);
    }

    #[test]
    fn test_switching_tool_clears_pending() {
        let mut buf = canvas();
        let mut s = Session::default();
        s.set_tool(Tool::Triangle);
        s.press(&mut buf, Point::new(2, 2));
        s.press(&mut buf, Point::new(5, 2));
        s.set_tool(Tool::Line);
        assert!(s.pending().is_empty());
        assert!(matches!(s.press(&mut buf, Point::new(1, 1)), Outcome::Pending { .. }));
    }

    #[test]
    fn test_boundary_overlay() {
        let mut buf = canvas();
        for x in 5..=15 {
            buf.copy_pixel(x, 5, Rgb8::BLACK);
            buf.copy_pixel(x, 15, Rgb8::BLACK);
        }
        for y in 5..=15 {
            buf.copy_pixel(5, y, Rgb8::BLACK);
            buf.copy_pixel(15, y, Rgb8::BLACK);
        }
        let mut s = Session::default();
        s.set_tool(Tool::Boundary);
        let Outcome::Traced(trace) = s.press(&mut buf, Point::new(10, 10)) else {
            panic!("expected a trace");
        };
        assert_eq!(trace.len(), 36);
        assert_eq!(buf.pixel(10, 5), Rgb8::RED);
        assert_eq!(buf.pixel(5, 5), Rgb8::BLACK);
    }

    #[test]
    fn test_boundary_contour_mode() {
        let mut buf = canvas();
        for x in 5..=15 {
            buf.copy_pixel(x, 5, Rgb8::BLACK);
        }
        let config = SessionConfig {
            boundary_mode: BoundaryMode::Contour,
            ..SessionConfig::default()
        };
        let mut s = Session::new(config);
        s.set_tool(Tool::Boundary);
        match s.press(&mut buf, Point::new(5, 6)) {
            Outcome::Traced(Trace::Contour(path)) => {
                assert_eq!(path.first(), Some(&Point::new(5, 5)));
                assert_eq!(path.len(), 11);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(buf.pixel(15, 5), Rgb8::RED);
    }

    #[test]
    fn test_press_outside_surface_ignored() {
        let mut buf = canvas();
        let mut s = Session::default();
        s.set_tool(Tool::Line);
        assert_eq!(s.press(&mut buf, Point::new(-1, 3)), Outcome::Ignored);
        assert!(s.pending().is_empty());
    }
}
