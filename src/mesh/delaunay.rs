// Copyright 2025 Lars Brubaker
// Delaunay legalization methods for Mesh.

use tracing::{trace, warn};

use super::{sym, EdgeIdx, Mesh, VertIdx, INVALID};
use crate::error::{Result, TriangulationError};
use crate::geom::{is_point_in_circumcircle, orient2d};

/// Why an edge that fails the in-circle test was left in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipGuard {
    /// The edge belongs to the initial triangle.
    BoundaryEdge,
    /// A boundary vertex is involved and the quadrilateral is not strictly
    /// convex, so the flipped diagonal would leave the new vertex on or
    /// outside its triangles.
    NonConvex,
    /// The opposite vertex is already a neighbor of the new vertex.
    DuplicateDiagonal,
}

/// Counters from one [`Mesh::legalize`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegalizeStats {
    pub flips: usize,
    pub guarded: usize,
}

impl Mesh {
    /// True when the vertex across `e` is not strictly inside the
    /// circumcircle of the triangle to the left of `e`.
    ///
    /// Both faces of `e` must be triangles.
    pub fn is_locally_delaunay(&self, e: EdgeIdx) -> bool {
        let a = self.org_point(e);
        let b = self.dst_point(e);
        let c = self.dst_point(self.lnext(e));
        let f = self.dst_point(self.lnext(sym(e)));
        !is_point_in_circumcircle(b, a, c, f)
    }

    /// Restore the Delaunay property around the vertex just inserted at the
    /// destination of `first_spoke`.
    ///
    /// Walks the ring of triangles around the new vertex `P`.  For each
    /// spoke `c` the suspect is the edge `s` opposite `P`.  If the vertex `F`
    /// across `s` violates the in-circle test, `s` is flipped into `P -> F`
    /// and the same spoke is tested again against its new triangle;
    /// otherwise the walk moves on to the next spoke.  The pass ends when the
    /// walk is back at `first_spoke`.
    ///
    /// Every flip adds a neighbor to `P`, so more flips than there are
    /// vertices means the ring walk has lost its way.
    pub fn legalize(&mut self, first_spoke: EdgeIdx) -> Result<LegalizeStats> {
        let p = self.dst(first_spoke);
        let limit = self.verts.len();
        let mut stats = LegalizeStats::default();

        let mut cursor = first_spoke;
        loop {
            let s = self.lnext(sym(cursor));
            let f = self.dst(self.lnext(sym(s)));

            if self.violates_in_circle(s, p, f) {
                match self.flip_guard(s, p, f) {
                    None => {
                        trace!("flip {}-{} into {}-{}", self.org(s), self.dst(s), p, f);
                        self.flip(s);
                        stats.flips += 1;
                        if stats.flips > limit {
                            return Err(TriangulationError::FlipLimitExceeded { vertex: p, limit });
                        }
                        continue;
                    }
                    Some(guard) => {
                        stats.guarded += 1;
                        if guard == FlipGuard::NonConvex {
                            warn!(
                                "skipping flip of {}-{} around vertex {}: quadrilateral is not convex",
                                self.org(s),
                                self.dst(s),
                                p
                            );
                        } else {
                            trace!("skipping flip of {}-{}: {:?}", self.org(s), self.dst(s), guard);
                        }
                    }
                }
            }

            cursor = self.lnext(s);
            if cursor == first_spoke {
                return Ok(stats);
            }
        }
    }

    /// `s` runs `A -> B` with `p` on its face side and `f` across it.
    fn violates_in_circle(&self, s: EdgeIdx, p: VertIdx, f: VertIdx) -> bool {
        let a = self.org_point(s);
        let b = self.dst_point(s);
        let pp = self.vertex(p).coords;
        let fp = self.vertex(f).coords;
        is_point_in_circumcircle(b, a, pp, fp) || is_point_in_circumcircle(a, b, fp, pp)
    }

    fn flip_guard(&self, s: EdgeIdx, p: VertIdx, f: VertIdx) -> Option<FlipGuard> {
        if self.is_boundary_edge(s) {
            return Some(FlipGuard::BoundaryEdge);
        }

        let (a, b) = (self.org(s), self.dst(s));
        if self.is_boundary_vertex(a) || self.is_boundary_vertex(b) {
            let (ap, bp) = (self.vertex(a).coords, self.vertex(b).coords);
            let (pp, fp) = (self.vertex(p).coords, self.vertex(f).coords);
            let separates_ab = orient2d(pp, fp, ap) * orient2d(pp, fp, bp) < 0.0;
            let separates_pf = orient2d(ap, bp, pp) * orient2d(ap, bp, fp) < 0.0;
            if !(separates_ab && separates_pf) {
                return Some(FlipGuard::NonConvex);
            }
        }

        if f == p || self.is_neighbor(p, f) {
            return Some(FlipGuard::DuplicateDiagonal);
        }
        None
    }

    /// True when an edge joins `u` and `v`.
    pub fn is_neighbor(&self, u: VertIdx, v: VertIdx) -> bool {
        let start = self.vertex(u).an_edge;
        if start == INVALID {
            return false;
        }
        self.orbit(start).any(|e| self.dst(e) == v)
    }
}
