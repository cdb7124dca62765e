// Copyright 2025 Lars Brubaker
// License: MIT
//
// Quad-edge mesh (Guibas/Stolfi).
//
// All references between quarter-edges are u32 indices into Vec arenas.
//
// Design:
//   - INVALID: u32::MAX  (null reference equivalent)
//   - Quarter-edges are allocated four at a time. Quad q owns edges[4q..4q+4]
//     in the order {e, e.rot, e.sym, e.rot_inv}, so rot, sym and rot_inv are
//     index arithmetic and never stored.  sym(e) = e ^ 2.
//   - Even indices are primal (they carry an origin vertex); odd indices are
//     dual and carry INVALID.
//   - `next` is the only stored link.  It is the CCW successor around the
//     origin vertex (primal) or around the face (dual).
//   - Vertices and faces are implicit orbits; the vertex arena only holds
//     coordinates, a role tag and one outgoing edge.

mod build;
mod delaunay;
mod locate;
mod traverse;
mod validate;

pub use delaunay::{FlipGuard, LegalizeStats};
pub use locate::Location;
pub use traverse::{EdgeWalk, OrbitIter};

use crate::geom::Point2;

pub const INVALID: u32 = u32::MAX;

/// Index into Mesh::verts
pub type VertIdx = u32;
/// Index into Mesh::edges
pub type EdgeIdx = u32;

/// Dual rotation: {e, left face, reverse edge, right face} in cycle.
#[inline(always)]
pub fn rot(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(1) & 3)
}

/// The same edge traversed in the opposite direction.
#[inline(always)]
pub fn sym(e: EdgeIdx) -> EdgeIdx {
    e ^ 2
}

/// Inverse of [`rot`].
#[inline(always)]
pub fn rot_inv(e: EdgeIdx) -> EdgeIdx {
    (e & !3) | (e.wrapping_add(3) & 3)
}

/// Index of the undirected edge that `e` belongs to.
#[inline(always)]
pub fn quad(e: EdgeIdx) -> u32 {
    e >> 2
}

#[inline(always)]
pub fn is_primal(e: EdgeIdx) -> bool {
    e & 1 == 0
}

/// Whether a vertex belongs to the bounding triangle or was inserted later.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VertexRole {
    Boundary,
    Interior,
}

#[derive(Clone, Debug)]
pub struct Vertex {
    pub coords: Point2,
    pub role: VertexRole,
    /// Some primal quarter-edge leaving this vertex (INVALID until one exists).
    pub an_edge: EdgeIdx,
}

#[derive(Clone, Debug)]
pub struct QuarterEdge {
    /// Next quarter-edge CCW around the origin (primal) or the face (dual).
    pub next: EdgeIdx,
    /// Origin vertex; INVALID on dual quarter-edges.
    pub org: VertIdx,
}

impl Default for QuarterEdge {
    fn default() -> Self {
        Self {
            next: INVALID,
            org: INVALID,
        }
    }
}

/// The quad-edge mesh.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub verts: Vec<Vertex>,
    pub edges: Vec<QuarterEdge>,
    /// Quads of the initial triangle; legalization never flips these.
    boundary: Vec<u32>,
}

impl Mesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh sized for `points` insertions into one triangle.
    pub fn with_capacity(points: usize) -> Self {
        let quads = 3 + 3 * points;
        Mesh {
            verts: Vec::with_capacity(points + 3),
            edges: Vec::with_capacity(quads * 4),
            boundary: Vec::with_capacity(3),
        }
    }

    /// Number of undirected edges ever allocated (severed ones included).
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.edges.len() / 4
    }

    // ──────────────── Navigation ────────────────

    #[inline]
    pub fn next(&self, e: EdgeIdx) -> EdgeIdx {
        self.edges[e as usize].next
    }

    /// Clockwise successor around the origin: rot -> next -> rot.
    #[inline]
    pub fn prev(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.next(rot(e)))
    }

    /// Next edge CCW around the left face: rot_inv -> next -> rot.
    #[inline]
    pub fn lnext(&self, e: EdgeIdx) -> EdgeIdx {
        rot(self.next(rot_inv(e)))
    }

    /// Previous edge around the left face: next -> sym.
    #[inline]
    pub fn lprev(&self, e: EdgeIdx) -> EdgeIdx {
        sym(self.next(e))
    }

    #[inline]
    pub fn org(&self, e: EdgeIdx) -> VertIdx {
        self.edges[e as usize].org
    }

    /// Destination vertex of e (= org of sym).
    #[inline]
    pub fn dst(&self, e: EdgeIdx) -> VertIdx {
        self.edges[sym(e) as usize].org
    }

    #[inline]
    pub fn org_point(&self, e: EdgeIdx) -> Point2 {
        self.verts[self.org(e) as usize].coords
    }

    #[inline]
    pub fn dst_point(&self, e: EdgeIdx) -> Point2 {
        self.verts[self.dst(e) as usize].coords
    }

    #[inline]
    pub fn vertex(&self, v: VertIdx) -> &Vertex {
        &self.verts[v as usize]
    }

    #[inline]
    pub fn is_boundary_vertex(&self, v: VertIdx) -> bool {
        self.verts[v as usize].role == VertexRole::Boundary
    }

    /// True for the three edges of the initial triangle, by arena identity.
    #[inline]
    pub fn is_boundary_edge(&self, e: EdgeIdx) -> bool {
        self.boundary.contains(&quad(e))
    }

    /// Quarter-edges (origin-side primal) of the initial triangle.
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeIdx> + '_ {
        self.boundary.iter().map(|&q| q << 2)
    }

    // ──────────────── Topology operators ────────────────

    /// Allocate one quad-edge from `start` to `end` and return its primal
    /// quarter-edge.  Both vertex orbits are singletons; the two dual
    /// quarter-edges form one face loop.
    pub fn make_edge(&mut self, start: VertIdx, end: VertIdx) -> EdgeIdx {
        let e = self.edges.len() as EdgeIdx;
        self.edges.push(QuarterEdge { next: e, org: start });
        self.edges.push(QuarterEdge {
            next: e + 3,
            org: INVALID,
        });
        self.edges.push(QuarterEdge {
            next: e + 2,
            org: end,
        });
        self.edges.push(QuarterEdge {
            next: e + 1,
            org: INVALID,
        });

        for (v, qe) in [(start, e), (end, sym(e))] {
            if let Some(vert) = self.verts.get_mut(v as usize) {
                if vert.an_edge == INVALID {
                    vert.an_edge = qe;
                }
            }
        }
        e
    }

    #[inline]
    fn swap_next(&mut self, a: EdgeIdx, b: EdgeIdx) {
        let a_next = self.edges[a as usize].next;
        self.edges[a as usize].next = self.edges[b as usize].next;
        self.edges[b as usize].next = a_next;
    }

    /// The fundamental connectivity-changing operation.
    ///
    /// Merges the orbits of `a` and `b` if they are distinct, splits them if
    /// they are the same, and does the opposite to the dual orbits.  Calling
    /// it twice with the same arguments restores the mesh.
    pub fn splice(&mut self, a: EdgeIdx, b: EdgeIdx) {
        debug_assert_eq!(is_primal(a), is_primal(b), "splice across primal/dual");
        let alpha = rot(self.next(a));
        let beta = rot(self.next(b));
        self.swap_next(alpha, beta);
        self.swap_next(a, b);
    }

    /// Turn `e`, the diagonal of the quadrilateral formed by its two
    /// adjacent triangles, into the other diagonal.
    ///
    /// No quad-edges are created or destroyed.  Both faces of `e` must be
    /// triangles; flipping anything else corrupts the mesh.
    pub fn flip(&mut self, e: EdgeIdx) {
        debug_assert!(is_primal(e));
        debug_assert_eq!(self.lnext(self.lnext(self.lnext(e))), e, "left face is not a triangle");
        debug_assert_eq!(
            self.lnext(self.lnext(self.lnext(sym(e)))),
            sym(e),
            "right face is not a triangle"
        );

        let e_sym = sym(e);
        let old_org = self.org(e);
        let old_dst = self.dst(e);

        let a = self.prev(e);
        let b = self.prev(e_sym);
        self.splice(e, a);
        self.splice(e_sym, b);
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        let b_lnext = self.lnext(b);
        self.splice(e_sym, b_lnext);

        self.edges[e as usize].org = self.dst(a);
        self.edges[e_sym as usize].org = self.dst(b);

        // a and b still leave the old endpoints.
        if self.verts[old_org as usize].an_edge == e {
            self.verts[old_org as usize].an_edge = a;
        }
        if self.verts[old_dst as usize].an_edge == e_sym {
            self.verts[old_dst as usize].an_edge = b;
        }
    }

    /// Create a new edge from `dst(a)` to `org(b)` so that `a`, the new edge
    /// and `b` share a left face.  Returns the new quarter-edge.
    pub fn connect(&mut self, a: EdgeIdx, b: EdgeIdx) -> EdgeIdx {
        let e = self.make_edge(self.dst(a), self.org(b));
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(sym(e), b);
        e
    }

    /// Detach `e` from both endpoint orbits.  Its arena slots stay allocated;
    /// the mesh never shrinks.
    pub fn sever(&mut self, e: EdgeIdx) {
        for half in [e, sym(e)] {
            let p = self.prev(half);
            let v = self.org(half);
            if self.verts[v as usize].an_edge == half {
                self.verts[v as usize].an_edge = if p == half { INVALID } else { p };
            }
            self.splice(half, p);
        }
    }
}
