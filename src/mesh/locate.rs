// Copyright 2025 Lars Brubaker
// Point location by directed walk.

use std::collections::HashSet;

use super::{sym, EdgeIdx, Mesh};
use crate::error::{Result, TriangulationError};
use crate::geom::{orientation_is_clockwise, Point2};

/// The triangle found by [`Mesh::locate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Quarter-edge whose left face strictly contains the query point.
    pub edge: EdgeIdx,
    /// Number of candidate triangles tested.
    pub steps: usize,
}

impl Mesh {
    /// Walk from `start` to the triangle strictly containing `p`.
    ///
    /// The candidate triangle is the left face of the current edge.  When
    /// `p` is on the face side of the current edge but outside the triangle,
    /// the walk rotates to the next edge around the same origin; otherwise
    /// it crosses to the neighbouring face through `sym`.
    ///
    /// Every visited quarter-edge is remembered.  The walk is deterministic,
    /// so a revisit means it would cycle forever; that is reported as
    /// [`TriangulationError::WalkTrapped`].  This happens for points outside
    /// the bounding triangle and for points colinear with an edge the walk
    /// meets, whether or not the point lies on the edge segment itself: a
    /// zero orientation sends the walk through `sym` from both sides, so it
    /// bounces between the two quarter-edges.
    pub fn locate(&self, start: EdgeIdx, p: Point2) -> Result<Location> {
        let mut visited: HashSet<EdgeIdx> = HashSet::new();
        let mut cur = start;
        loop {
            if !visited.insert(cur) {
                return Err(TriangulationError::WalkTrapped {
                    point: p,
                    steps: visited.len(),
                });
            }

            let e2 = self.lnext(cur);
            let e3 = self.lnext(e2);
            let a = self.org_point(cur);
            let b = self.org_point(e2);
            let c = self.org_point(e3);
            if a == p || b == p || c == p {
                return Err(TriangulationError::DuplicatePoint { point: p });
            }

            let left = orientation_is_clockwise(a, b, p);
            if left && orientation_is_clockwise(b, c, p) && orientation_is_clockwise(c, a, p) {
                return Ok(Location {
                    edge: cur,
                    steps: visited.len(),
                });
            }

            cur = if left { self.next(cur) } else { sym(cur) };
        }
    }
}
