//! Boundary extraction around a connected interior region.
//!
//! [`trace_boundary`] is exhaustive: a breadth-first walk over the 4-connected
//! interior reachable from the seed collects every border-colored pixel that
//! touches it. The result is a set, so it carries no drawing order.
//!
//! [`trace_contour`] is the ordered alternative for callers that want a
//! polyline. It crawls along border pixels with a fixed turn preference and
//! stops heuristically, so on regions with holes or thin spurs it may return
//! only part of the outline.

use std::collections::hash_set;
use std::collections::{HashSet, VecDeque};

use crate::basics::Point;
use crate::color::Rgb8;
use crate::flood_fill::VisitedMask;
use crate::surface::PixelSurface;

// ============================================================================
// BoundarySet
// ============================================================================

/// Unordered set of border pixels returned by [`trace_boundary`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundarySet {
    points: HashSet<Point>,
}

impl BoundarySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Point> {
        self.points.iter()
    }

    /// Points in row-major order (y, then x).
    pub fn to_sorted_vec(&self) -> Vec<Point> {
        let mut v: Vec<Point> = self.points.iter().copied().collect();
        v.sort_unstable_by_key(|p| (p.y, p.x));
        v
    }

    /// Paint every point in `color`. Returns the number of pixels written.
    pub fn paint<S: PixelSurface + ?Sized>(&self, surface: &mut S, color: Rgb8) -> usize {
        self.points
            .iter()
            .filter(|p| surface.set_at(**p, color))
            .count()
    }

    fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }
}

impl<'a> IntoIterator for &'a BoundarySet {
    type Item = &'a Point;
    type IntoIter = hash_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for BoundarySet {
    type Item = Point;
    type IntoIter = hash_set::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl FromIterator<Point> for BoundarySet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Exhaustive trace
// ============================================================================

/// Collect the border pixels enclosing the interior region that contains
/// `seed`.
///
/// Every pixel not equal to `border` counts as interior. The result is empty
/// when the seed lies outside the surface or is itself a border pixel.
pub fn trace_boundary<S: PixelSurface + ?Sized>(
    surface: &S,
    seed: Point,
    border: Rgb8,
) -> BoundarySet {
    let mut found = BoundarySet::new();
    match surface.get_at(seed) {
        None => {
            tracing::trace!(?seed, "trace_boundary: seed outside surface");
            return found;
        }
        Some(c) if c == border => {
            tracing::trace!(?seed, "trace_boundary: seed on border");
            return found;
        }
        Some(_) => {}
    }

    let mut visited = VisitedMask::new(surface.width(), surface.height());
    let mut queue = VecDeque::new();
    visited.mark(seed.x, seed.y);
    queue.push_back(seed);

    let mut interior = 0usize;
    while let Some(p) = queue.pop_front() {
        interior += 1;
        for n in p.neighbors4() {
            let Some(c) = surface.get_at(n) else {
                continue;
            };
            if c == border {
                found.insert(n);
            } else if !visited.is_visited(n.x, n.y) {
                visited.mark(n.x, n.y);
                queue.push_back(n);
            }
        }
    }

    tracing::debug!(?seed, interior, border_len = found.len(), "trace_boundary");
    found
}

// ============================================================================
// Ordered contour walk
// ============================================================================

/// Walk directions in clockwise order: up, right, down, left.
const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Consecutive turns without advancing after which the walk gives up.
const MAX_STUCK: u32 = 4;

/// Follow the border next to `seed` and return its pixels in walk order.
///
/// The walk starts on the first border-colored neighbour of the seed (tried
/// up, right, down, left) facing up. At each step it tries to advance one
/// pixel in its current direction. Landing on a new border pixel appends it
/// and turns left; anything else turns right. The walk ends when it would
/// step back onto its starting pixel or after [`MAX_STUCK`] turns in a row
/// without advancing.
pub fn trace_contour<S: PixelSurface + ?Sized>(
    surface: &S,
    seed: Point,
    border: Rgb8,
) -> Vec<Point> {
    match surface.get_at(seed) {
        Some(c) if c != border => {}
        _ => {
            tracing::trace!(?seed, "trace_contour: seed outside surface or on border");
            return Vec::new();
        }
    }

    let Some(start) = seed
        .neighbors4()
        .into_iter()
        .find(|n| surface.get_at(*n) == Some(border))
    else {
        tracing::trace!(?seed, "trace_contour: no adjacent border");
        return Vec::new();
    };

    let mut visited = VisitedMask::new(surface.width(), surface.height());
    visited.mark(start.x, start.y);
    let mut path = vec![start];
    let mut current = start;
    let mut dir = 0usize;
    let mut stuck = 0u32;
    let mut closed = false;

    while stuck < MAX_STUCK {
        let (dx, dy) = DIRECTIONS[dir];
        let next = current.offset(dx, dy);
        if surface.get_at(next) == Some(border) {
            if next == start && path.len() > 2 {
                closed = true;
                break;
            }
            if !visited.is_visited(next.x, next.y) {
                visited.mark(next.x, next.y);
                path.push(next);
                current = next;
                dir = (dir + 3) % 4;
                stuck = 0;
                continue;
            }
        }
        dir = (dir + 1) % 4;
        stuck += 1;
    }

    tracing::debug!(?seed, len = path.len(), closed, "trace_contour");
    path
}

// ============================================================================
// Tests
// ============================================================================
