// Copyright 2025 Lars Brubaker
// Mesh construction: the initial triangle and point insertion.

use super::{quad, sym, EdgeIdx, Mesh, VertIdx, Vertex, VertexRole, INVALID};
use crate::geom::{orientation_is_clockwise, Point2};

impl Mesh {
    /// Append a vertex with no edges yet.
    pub fn add_vertex(&mut self, coords: Point2, role: VertexRole) -> VertIdx {
        let v = self.verts.len() as VertIdx;
        self.verts.push(Vertex {
            coords,
            role,
            an_edge: INVALID,
        });
        v
    }

    /// Build the triangle `p0 -> p1 -> p2` and return the `p0 -> p1`
    /// quarter-edge.  The three quads are recorded as boundary edges.
    ///
    /// One face is bounded by `lnext` from the returned edge, the other by
    /// `lnext` from its `sym`; which one is the geometric interior depends on
    /// the winding of the three points.
    pub fn create_triangle(&mut self, p0: VertIdx, p1: VertIdx, p2: VertIdx) -> EdgeIdx {
        let ab = self.make_edge(p0, p1);
        let bc = self.make_edge(p1, p2);
        let ca = self.make_edge(p2, p0);

        self.splice(sym(ab), bc);
        self.splice(sym(bc), ca);
        self.splice(sym(ca), ab);

        self.boundary.extend([quad(ab), quad(bc), quad(ca)]);
        ab
    }

    /// Split the face to the left of `poly_edge` by joining every corner to
    /// vertex `v`, which must lie strictly inside that face.
    ///
    /// Returns the first spoke, from `org(poly_edge)` to `v`.
    pub fn insert_point(&mut self, poly_edge: EdgeIdx, v: VertIdx) -> EdgeIdx {
        debug_assert_eq!(self.verts[v as usize].an_edge, INVALID, "vertex already linked");
        debug_assert!({
            let p = self.verts[v as usize].coords;
            let mut e = poly_edge;
            let mut inside = true;
            loop {
                inside &= orientation_is_clockwise(self.org_point(e), self.dst_point(e), p);
                e = self.lnext(e);
                if e == poly_edge {
                    break;
                }
            }
            inside
        });

        let first_spoke = self.make_edge(self.org(poly_edge), v);
        self.splice(first_spoke, poly_edge);

        let mut spoke = first_spoke;
        let mut edge = poly_edge;
        loop {
            spoke = self.connect(edge, sym(spoke));
            edge = self.prev(spoke);
            if self.lnext(edge) == first_spoke {
                break;
            }
        }
        first_spoke
    }
}
