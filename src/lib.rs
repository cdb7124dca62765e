// quadedge-delaunay: incremental Delaunay triangulation on a quad-edge mesh
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod error;
pub mod geom;
pub mod mesh;
pub mod triangulator;

pub use error::{Result, TopologyError, TriangulationError};
pub use geom::{Point2, Real};
pub use mesh::{EdgeIdx, Mesh, VertIdx, VertexRole};
pub use triangulator::{Bounds, Diagnostic, DiagnosticHook, Segment, Triangulator, TriangulatorOption};
