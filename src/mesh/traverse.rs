// Copyright 2025 Lars Brubaker
// Edge, face and orbit enumeration.

use super::{is_primal, quad, sym, EdgeIdx, Mesh};

/// Depth-first walk over every undirected edge reachable from a start edge.
///
/// Yields one primal quarter-edge per quad, in no particular direction.
/// Visited quads are tracked in a bit-set sized to the arena, so the walk is
/// single-use: build a new one with [`Mesh::edges_from`] to walk again.
pub struct EdgeWalk<'a> {
    mesh: &'a Mesh,
    seen: Vec<bool>,
    stack: Vec<EdgeIdx>,
}

impl<'a> Iterator for EdgeWalk<'a> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        while let Some(e) = self.stack.pop() {
            let q = quad(e) as usize;
            if self.seen[q] {
                continue;
            }
            self.seen[q] = true;
            // The rest of both endpoint orbits.
            self.stack.push(self.mesh.next(e));
            self.stack.push(self.mesh.next(sym(e)));
            return Some(e);
        }
        None
    }
}

/// The `next` orbit of a quarter-edge: every edge around its origin, or
/// every edge of its face for a dual quarter-edge.
pub struct OrbitIter<'a> {
    mesh: &'a Mesh,
    start: EdgeIdx,
    cur: Option<EdgeIdx>,
}

impl<'a> Iterator for OrbitIter<'a> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        let cur = self.cur?;
        let n = self.mesh.next(cur);
        self.cur = if n == self.start { None } else { Some(n) };
        Some(cur)
    }
}

impl Mesh {
    /// Walk every edge connected to `start`.
    pub fn edges_from(&self, start: EdgeIdx) -> EdgeWalk<'_> {
        debug_assert!(is_primal(start));
        EdgeWalk {
            mesh: self,
            seen: vec![false; self.quad_count()],
            stack: vec![start],
        }
    }

    pub fn orbit(&self, e: EdgeIdx) -> OrbitIter<'_> {
        OrbitIter {
            mesh: self,
            start: e,
            cur: Some(e),
        }
    }

    /// Number of edges around the left face of `e`.
    ///
    /// Gives up after as many steps as there are quarter-edges, so a corrupt
    /// `next` permutation cannot make it spin forever.
    pub fn face_size(&self, e: EdgeIdx) -> usize {
        let mut n = 1;
        let mut x = self.lnext(e);
        while x != e && n <= self.edges.len() {
            x = self.lnext(x);
            n += 1;
        }
        n
    }

    /// One quarter-edge per face reachable from `start`, with the face to
    /// its left.
    pub fn faces_from(&self, start: EdgeIdx) -> Vec<EdgeIdx> {
        let mut marked = vec![false; self.edges.len()];
        let mut faces = Vec::new();
        for e in self.edges_from(start) {
            for half in [e, sym(e)] {
                if marked[half as usize] {
                    continue;
                }
                faces.push(half);
                let mut x = half;
                while !marked[x as usize] {
                    marked[x as usize] = true;
                    x = self.lnext(x);
                }
            }
        }
        faces
    }
}
