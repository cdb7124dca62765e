// Copyright 2025 Lars Brubaker
// Error types for mesh construction and point insertion.

use thiserror::Error;

use crate::geom::Point2;
use crate::mesh::{EdgeIdx, VertIdx};

/// A broken quad-edge invariant. Always a programming error: once one of
/// these is observed every later operation on the mesh is suspect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    /// `next` points outside the quarter-edge arena.
    #[error("quarter-edge {edge} has dangling next {next}")]
    DanglingNext { edge: EdgeIdx, next: EdgeIdx },

    /// A primal quarter-edge links into a dual orbit, or the reverse.
    #[error("quarter-edge {edge} links across primal/dual orbits to {next}")]
    MixedOrbit { edge: EdgeIdx, next: EdgeIdx },

    /// `prev(next(e)) != e`, so the orbit is not a closed cycle.
    #[error("orbit through quarter-edge {0} is not closed")]
    OpenOrbit(EdgeIdx),

    /// A primal quarter-edge has no origin vertex.
    #[error("primal quarter-edge {0} has no origin")]
    MissingOrigin(EdgeIdx),

    /// Both ends of an edge are the same vertex.
    #[error("edge {edge} starts and ends at vertex {vertex}")]
    SelfLoop { edge: EdgeIdx, vertex: VertIdx },

    /// A face reachable from the reference edge is not a triangle.
    #[error("face through quarter-edge {edge} has {sides} sides, expected 3")]
    NonTriangularFace { edge: EdgeIdx, sides: usize },

    /// The reachable subdivision is not a sphere: V - E + F != 2.
    #[error("euler characteristic {vertices} - {edges} + {faces} != 2")]
    EulerCharacteristic {
        vertices: usize,
        edges: usize,
        faces: usize,
    },
}

/// Errors that abort point insertion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// The locating walk revisited a quarter-edge and would loop forever.
    #[error("point location trapped in circular walk for {point} after {steps} steps")]
    WalkTrapped { point: Point2, steps: usize },

    /// The point coincides with a vertex already in the mesh.
    #[error("point {point} duplicates an existing vertex")]
    DuplicatePoint { point: Point2 },

    /// The point is not strictly inside the bounding triangle.
    #[error("point {point} is not strictly inside the bounding triangle")]
    OutsideBounds { point: Point2 },

    /// A coordinate is NaN or infinite.
    #[error("point {point} has a non-finite coordinate")]
    NonFinitePoint { point: Point2 },

    /// Bounds cannot be derived from an empty point set.
    #[error("cannot derive bounds from an empty point set")]
    EmptyInput,

    /// Legalization flipped more edges than the new vertex can have neighbors.
    #[error("legalization around vertex {vertex} exceeded {limit} flips")]
    FlipLimitExceeded { vertex: VertIdx, limit: usize },

    #[error("topology violation: {0}")]
    Topology(#[from] TopologyError),
}

/// Result type for triangulation operations.
pub type Result<T> = std::result::Result<T, TriangulationError>;
