// Copyright 2025 Lars Brubaker
// Structural checks for the quad-edge invariants.

use super::{is_primal, EdgeIdx, Mesh, INVALID};
use crate::error::TopologyError;

impl Mesh {
    /// Check every quad-edge invariant, then the shape of the component
    /// reachable from `start`: all faces are triangles and
    /// `V - E + F == 2`.
    ///
    /// Arena-wide checks run first so the component walk never follows a
    /// broken link.
    pub fn validate(&self, start: EdgeIdx) -> Result<(), TopologyError> {
        let n = self.edges.len();

        for (i, qe) in self.edges.iter().enumerate() {
            let e = i as EdgeIdx;
            if qe.next as usize >= n {
                return Err(TopologyError::DanglingNext { edge: e, next: qe.next });
            }
            if is_primal(e) != is_primal(qe.next) {
                return Err(TopologyError::MixedOrbit { edge: e, next: qe.next });
            }
        }

        for i in 0..n {
            let e = i as EdgeIdx;
            if self.prev(self.next(e)) != e {
                return Err(TopologyError::OpenOrbit(e));
            }
        }

        for i in (0..n).step_by(2) {
            let e = i as EdgeIdx;
            let org = self.org(e);
            if org == INVALID || org as usize >= self.verts.len() {
                return Err(TopologyError::MissingOrigin(e));
            }
        }
        for i in (0..n).step_by(4) {
            let e = i as EdgeIdx;
            if self.org(e) == self.dst(e) {
                return Err(TopologyError::SelfLoop {
                    edge: e,
                    vertex: self.org(e),
                });
            }
        }

        let mut vertex_seen = vec![false; self.verts.len()];
        let mut edges = 0;
        for e in self.edges_from(start) {
            edges += 1;
            vertex_seen[self.org(e) as usize] = true;
            vertex_seen[self.dst(e) as usize] = true;
        }
        let vertices = vertex_seen.iter().filter(|&&v| v).count();

        let faces = self.faces_from(start);
        for &f in &faces {
            let sides = self.face_size(f);
            if sides != 3 {
                return Err(TopologyError::NonTriangularFace { edge: f, sides });
            }
        }

        if vertices + faces.len() != edges + 2 {
            return Err(TopologyError::EulerCharacteristic {
                vertices,
                edges,
                faces: faces.len(),
            });
        }
        Ok(())
    }

    /// Panic with the violated invariant if the mesh is corrupt.
    #[cfg(test)]
    pub(crate) fn check(&self, start: EdgeIdx) {
        if let Err(e) = self.validate(start) {
            panic!("mesh invariant violated: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point2;
    use crate::mesh::{sym, VertexRole};

    fn split_triangle() -> (Mesh, EdgeIdx) {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point2::new(0.0, 0.0), VertexRole::Boundary);
        let b = mesh.add_vertex(Point2::new(10.0, 0.0), VertexRole::Boundary);
        let c = mesh.add_vertex(Point2::new(5.0, 10.0), VertexRole::Boundary);
        let e = mesh.create_triangle(a, b, c);
        let p = mesh.add_vertex(Point2::new(5.0, 3.0), VertexRole::Interior);
        mesh.insert_point(sym(e), p);
        (mesh, e)
    }

    #[test]
    fn valid_meshes_pass() {
        let (mesh, e) = split_triangle();
        mesh.check(e);
        assert_eq!(mesh.validate(e), Ok(()));
    }

    #[test]
    fn dangling_next() {
        let (mut mesh, e) = split_triangle();
        mesh.edges[0].next = 999;
        assert_eq!(
            mesh.validate(e),
            Err(TopologyError::DanglingNext { edge: 0, next: 999 })
        );
    }

    #[test]
    fn mixed_orbit() {
        let (mut mesh, e) = split_triangle();
        mesh.edges[0].next = 1;
        assert_eq!(
            mesh.validate(e),
            Err(TopologyError::MixedOrbit { edge: 0, next: 1 })
        );
    }

    #[test]
    fn open_orbit() {
        let (mut mesh, e) = split_triangle();
        mesh.edges[0].next = 0;
        assert_eq!(mesh.validate(e), Err(TopologyError::OpenOrbit(0)));
    }

    #[test]
    fn missing_origin() {
        let (mut mesh, e) = split_triangle();
        mesh.edges[2].org = INVALID;
        assert_eq!(mesh.validate(e), Err(TopologyError::MissingOrigin(2)));
    }

    #[test]
    fn self_loop() {
        let (mut mesh, e) = split_triangle();
        mesh.edges[0].org = 1;
        assert_eq!(
            mesh.validate(e),
            Err(TopologyError::SelfLoop { edge: 0, vertex: 1 })
        );
    }

    #[test]
    fn lone_edge_is_not_triangulated() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point2::new(0.0, 0.0), VertexRole::Interior);
        mesh.add_vertex(Point2::new(1.0, 0.0), VertexRole::Interior);
        let e = mesh.make_edge(0, 1);
        assert_eq!(
            mesh.validate(e),
            Err(TopologyError::NonTriangularFace { edge: e, sides: 2 })
        );
    }
}
