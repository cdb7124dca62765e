// Copyright 2025 Lars Brubaker
// License: MIT
//
// Incremental Delaunay triangulator.
//
// Owns a quad-edge mesh seeded with a bounding triangle and inserts points
// one at a time: locate the containing triangle by walking from the last
// insertion, split it around the new vertex, then flip edges around the new
// vertex until every triangle passes the in-circle test.

mod geometry;
mod output;
#[cfg(test)]
mod tests;

pub use geometry::Bounds;
pub use output::Segment;

use tracing::debug;

use crate::error::{Result, TriangulationError};
use crate::geom::Point2;
use crate::mesh::{EdgeIdx, LegalizeStats, Mesh, VertIdx, VertexRole};
use geometry::strictly_inside;

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TriangulatorOption {
    /// Flip edges after each insertion to keep the mesh Delaunay.
    Legalize,
    /// Validate the whole mesh after each insertion.
    CheckInvariants,
}

/// Progress events delivered to a diagnostic hook.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    Located {
        point: Point2,
        edge: EdgeIdx,
        steps: usize,
    },
    Inserted {
        point: Point2,
        vertex: VertIdx,
        spoke: EdgeIdx,
    },
    Legalized {
        vertex: VertIdx,
        stats: LegalizeStats,
    },
}

pub type DiagnosticHook = Box<dyn FnMut(&Diagnostic)>;

// ─────────────────────────── Triangulator ──────────────────────────────────────

pub struct Triangulator {
    mesh: Mesh,
    bounds: Bounds,
    frame: [Point2; 3],
    /// Walk start for the next insertion: the last spoke created.
    cursor: EdgeIdx,
    legalize: bool,
    check_invariants: bool,
    hook: Option<DiagnosticHook>,
    inserted: usize,
}

impl Triangulator {
    /// Start an empty triangulation whose bounding triangle encloses `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self::with_capacity(bounds, 0)
    }

    /// Like [`Triangulator::new`], with room reserved for `points` insertions.
    pub fn with_capacity(bounds: Bounds, points: usize) -> Self {
        let frame = bounds.super_triangle();
        let mut mesh = Mesh::with_capacity(points);
        let a = mesh.add_vertex(frame[0], VertexRole::Boundary);
        let b = mesh.add_vertex(frame[1], VertexRole::Boundary);
        let c = mesh.add_vertex(frame[2], VertexRole::Boundary);
        let cursor = mesh.create_triangle(a, b, c);
        Triangulator {
            mesh,
            bounds,
            frame,
            cursor,
            legalize: true,
            check_invariants: cfg!(debug_assertions),
            hook: None,
            inserted: 0,
        }
    }

    /// Triangulate `points` in order, with bounds taken from the points.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if let Some(&point) = points.iter().find(|p| !p.is_finite()) {
            return Err(TriangulationError::NonFinitePoint { point });
        }
        let bounds = Bounds::from_points(points).ok_or(TriangulationError::EmptyInput)?;
        let mut tri = Self::with_capacity(bounds, points.len());
        tri.insert_all(points.iter().copied())?;
        Ok(tri)
    }

    pub fn set_option(&mut self, option: TriangulatorOption, value: bool) {
        match option {
            TriangulatorOption::Legalize => self.legalize = value,
            TriangulatorOption::CheckInvariants => self.check_invariants = value,
        }
    }

    pub fn set_diagnostic_hook(&mut self, hook: DiagnosticHook) {
        self.hook = Some(hook);
    }

    pub fn clear_diagnostic_hook(&mut self) {
        self.hook = None;
    }

    fn emit(&mut self, event: Diagnostic) {
        if let Some(hook) = self.hook.as_mut() {
            hook(&event);
        }
    }

    /// Insert one point and return its vertex index.
    ///
    /// On error the mesh is left as it was unless legalization or the
    /// invariant check failed, in which case the mesh is suspect.
    pub fn insert(&mut self, p: Point2) -> Result<VertIdx> {
        if !p.is_finite() {
            return Err(TriangulationError::NonFinitePoint { point: p });
        }
        if !strictly_inside(&self.frame, p) {
            return Err(TriangulationError::OutsideBounds { point: p });
        }

        let loc = self.mesh.locate(self.cursor, p)?;
        self.emit(Diagnostic::Located {
            point: p,
            edge: loc.edge,
            steps: loc.steps,
        });

        let v = self.mesh.add_vertex(p, VertexRole::Interior);
        let spoke = self.mesh.insert_point(loc.edge, v);
        self.emit(Diagnostic::Inserted {
            point: p,
            vertex: v,
            spoke,
        });

        let stats = if self.legalize {
            let stats = self.mesh.legalize(spoke)?;
            self.emit(Diagnostic::Legalized { vertex: v, stats });
            stats
        } else {
            LegalizeStats::default()
        };

        self.cursor = spoke;
        self.inserted += 1;
        if self.check_invariants {
            self.mesh.validate(spoke)?;
        }

        debug!(
            "inserted vertex {} at {}: {} walk steps, {} flips, {} guarded",
            v, p, loc.steps, stats.flips, stats.guarded
        );
        Ok(v)
    }

    /// Insert points in order, stopping at the first failure.  Returns how
    /// many were inserted.
    pub fn insert_all<I>(&mut self, points: I) -> Result<usize>
    where
        I: IntoIterator<Item = Point2>,
    {
        let mut n = 0;
        for p in points {
            self.insert(p)?;
            n += 1;
        }
        Ok(n)
    }

    /// Check every mesh invariant now, whatever the options say.
    pub fn validate(&self) -> Result<()> {
        self.mesh.validate(self.cursor)?;
        Ok(())
    }

    /// Number of points inserted so far.
    pub fn len(&self) -> usize {
        self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Corners of the bounding triangle.
    pub fn super_triangle(&self) -> [Point2; 3] {
        self.frame
    }

    /// Some quarter-edge of the mesh; a valid start for traversal.
    pub fn cursor(&self) -> EdgeIdx {
        self.cursor
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}
