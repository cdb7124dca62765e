// Copyright 2025 Lars Brubaker
// License: MIT
//
// Geometric predicates over 2D points.
//
// Both predicates are plain floating-point determinants with no tolerance
// and no adaptive-precision fallback. Colinear and co-circular inputs are
// resolved by whatever sign the rounded determinant happens to have.

use std::fmt;

pub type Real = f64;

/// A location in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: Real,
    pub y: Real,
}

impl Point2 {
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn magnitude_squared(self) -> Real {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(Real, Real)> for Point2 {
    fn from((x, y): (Real, Real)) -> Self {
        Self { x, y }
    }
}

impl From<[Real; 2]> for Point2 {
    fn from([x, y]: [Real; 2]) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Determinant of a row-major 3x3 matrix, expanded along the first row.
#[inline]
fn det3(m: [[Real; 3]; 3]) -> Real {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Orientation determinant of the rows `[a.x, a.y, 1]`, `[b.x, b.y, 1]`,
/// `[c.x, c.y, 1]`. Twice the signed area of triangle `abc`.
///
/// Evaluated relative to `a` so that points far from the origin keep their
/// low-order bits.
#[inline]
pub fn orient2d(a: Point2, b: Point2, c: Point2) -> Real {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True when the orientation determinant is strictly negative.
///
/// Every triangle of the mesh is traversed this way along its `lnext` loop,
/// so for a mesh edge `a -> b` this reads as "`c` lies on the face side of
/// the edge". A zero determinant (colinear points) is not clockwise.
#[inline]
pub fn orientation_is_clockwise(a: Point2, b: Point2, c: Point2) -> bool {
    orient2d(a, b, c) < 0.0
}

/// In-circle determinant with every point translated by `-p`: the rows are
/// `[dx, dy, dx^2 + dy^2]` for `v_i - p` with `v_i` in `a, b, c`.
#[inline]
pub fn in_circle_det(a: Point2, b: Point2, c: Point2, p: Point2) -> Real {
    let row = |v: Point2| {
        let d = Point2::new(v.x - p.x, v.y - p.y);
        [d.x, d.y, d.magnitude_squared()]
    };
    det3([row(a), row(b), row(c)])
}

/// True when `p` lies strictly inside the circle through `a`, `b`, `c`.
///
/// `a`, `b`, `c` must have a strictly positive [`orient2d`], i.e. the
/// opposite winding to [`orientation_is_clockwise`]. With the other winding
/// the sign flips and the answer is silently inverted; callers holding a
/// mesh triangle pass its vertices reversed.
#[inline]
pub fn is_point_in_circumcircle(a: Point2, b: Point2, c: Point2, p: Point2) -> bool {
    in_circle_det(a, b, c, p) > 0.0
}
