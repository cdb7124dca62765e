// Copyright 2025 Lars Brubaker
// Output generation methods for the Triangulator.

use std::fmt;

use super::Triangulator;
use crate::geom::{orientation_is_clockwise, Point2, Real};
use crate::mesh::EdgeIdx;

/// One undirected mesh edge as a pair of coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub origin: Point2,
    pub dest: Point2,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.dest)
    }
}

impl Triangulator {
    fn segment(&self, e: EdgeIdx) -> Segment {
        Segment {
            origin: self.mesh.org_point(e),
            dest: self.mesh.dst_point(e),
        }
    }

    /// Every edge of the mesh, bounding triangle included.
    pub fn edges(&self) -> Vec<Segment> {
        self.mesh
            .edges_from(self.cursor)
            .map(|e| self.segment(e))
            .collect()
    }

    /// Edges between inserted points only.
    pub fn interior_edges(&self) -> Vec<Segment> {
        let mesh = &self.mesh;
        mesh.edges_from(self.cursor)
            .filter(|&e| !mesh.is_boundary_vertex(mesh.org(e)) && !mesh.is_boundary_vertex(mesh.dst(e)))
            .map(|e| self.segment(e))
            .collect()
    }

    /// Triangles whose three corners are all inserted points, each listed in
    /// the mesh's clockwise order.
    pub fn triangles(&self) -> Vec<[Point2; 3]> {
        let mesh = &self.mesh;
        let mut out = Vec::new();
        for f in mesh.faces_from(self.cursor) {
            let e1 = mesh.lnext(f);
            let e2 = mesh.lnext(e1);
            if [f, e1, e2].iter().any(|&e| mesh.is_boundary_vertex(mesh.org(e))) {
                continue;
            }
            let tri = [mesh.org_point(f), mesh.org_point(e1), mesh.org_point(e2)];
            if orientation_is_clockwise(tri[0], tri[1], tri[2]) {
                out.push(tri);
            }
        }
        out
    }

    /// All edges flattened to `[x0, y0, x1, y1, ...]` for line rendering.
    pub fn segment_buffer(&self) -> Vec<Real> {
        let mut buf = Vec::with_capacity(self.mesh.quad_count() * 4);
        for s in self.edges() {
            buf.extend_from_slice(&[s.origin.x, s.origin.y, s.dest.x, s.dest.y]);
        }
        buf
    }
}
