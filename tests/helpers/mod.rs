// Copyright 2025 Lars Brubaker
// Shared test utilities for quadedge-delaunay tests.

#![allow(dead_code)]

use std::collections::BTreeSet;

use quadedge_delaunay::geom::is_point_in_circumcircle;
use quadedge_delaunay::{EdgeIdx, Mesh, Point2, Triangulator, VertIdx};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n` points drawn uniformly from `[0, extent)²` with a fixed seed.
pub fn random_cloud(seed: u64, n: usize, extent: f64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

/// Count (triangle, vertex) pairs where an inserted point lies strictly
/// inside the circumcircle of an interior triangle.
pub fn delaunay_violations(tri: &Triangulator) -> usize {
    let mesh = tri.mesh();
    let interior: Vec<Point2> = (0..mesh.verts.len() as VertIdx)
        .filter(|&v| !mesh.is_boundary_vertex(v))
        .map(|v| mesh.vertex(v).coords)
        .collect();

    let mut bad = 0;
    for t in tri.triangles() {
        for &p in &interior {
            if t.contains(&p) {
                continue;
            }
            // Mesh triangles wind clockwise; the predicate wants the reverse.
            if is_point_in_circumcircle(t[2], t[1], t[0], p) {
                bad += 1;
            }
        }
    }
    bad
}

/// Vertex triples of every face reachable from `start`, each sorted, so two
/// meshes can be compared without caring about edge identity.
pub fn face_set(mesh: &Mesh, start: EdgeIdx) -> BTreeSet<[VertIdx; 3]> {
    mesh.faces_from(start)
        .into_iter()
        .map(|f| {
            let e1 = mesh.lnext(f);
            let e2 = mesh.lnext(e1);
            let mut t = [mesh.org(f), mesh.org(e1), mesh.org(e2)];
            t.sort_unstable();
            t
        })
        .collect()
}

pub fn face_count(tri: &Triangulator) -> usize {
    tri.mesh().faces_from(tri.cursor()).len()
}

pub fn edge_count(tri: &Triangulator) -> usize {
    tri.mesh().edges_from(tri.cursor()).count()
}
