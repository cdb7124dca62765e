// Copyright 2025 Lars Brubaker
// Bounding box and bounding-triangle helpers for the triangulator.

use crate::geom::{orient2d, Point2, Real};

/// Axis-aligned extent of the points a triangulator will accept.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: Real,
    pub max_x: Real,
    pub min_y: Real,
    pub max_y: Real,
}

impl Bounds {
    /// Box spanning both coordinate pairs; each pair may be given in
    /// either order.
    pub fn new(min_x: Real, max_x: Real, min_y: Real, max_y: Real) -> Self {
        Bounds {
            min_x: min_x.min(max_x),
            max_x: min_x.max(max_x),
            min_y: min_y.min(max_y),
            max_y: min_y.max(max_y),
        }
    }

    /// Smallest box holding every point, or `None` for an empty slice.
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut b = Bounds::new(first.x, first.x, first.y, first.y);
        for p in rest {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
        }
        Some(b)
    }

    #[inline]
    pub fn x_span(&self) -> Real {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn y_span(&self) -> Real {
        self.max_y - self.min_y
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Counter-clockwise triangle `[lower-left, lower-right, upper]` that
    /// strictly encloses the box, padded by the sum of both spans.
    ///
    /// A degenerate box (a single point) is padded by 1.0 so the triangle
    /// still has area.
    pub fn super_triangle(&self) -> [Point2; 3] {
        let xs = self.x_span();
        let ys = self.y_span();
        let mut pad = xs + ys;
        if pad <= 0.0 {
            pad = 1.0;
        }
        [
            Point2::new(self.min_x - xs / 2.0 - pad, self.min_y - pad),
            Point2::new(self.max_x + xs / 2.0 + pad, self.min_y - pad),
            Point2::new(self.min_x + xs / 2.0, self.max_y + ys / 2.0 + pad),
        ]
    }
}

/// True when `p` is strictly inside `tri`, whatever its winding.
pub(crate) fn strictly_inside(tri: &[Point2; 3], p: Point2) -> bool {
    let d0 = orient2d(tri[0], tri[1], p);
    let d1 = orient2d(tri[1], tri[2], p);
    let d2 = orient2d(tri[2], tri[0], p);
    (d0 > 0.0 && d1 > 0.0 && d2 > 0.0) || (d0 < 0.0 && d1 < 0.0 && d2 < 0.0)
}
