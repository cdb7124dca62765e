// Copyright 2025 Lars Brubaker
// Unit tests for the triangulator driver.

use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::error::TopologyError;

fn ten_box() -> Triangulator {
    Triangulator::new(Bounds::new(0.0, 10.0, 0.0, 10.0))
}

#[test]
fn empty_triangulation_is_the_frame() {
    let tri = ten_box();
    assert!(tri.is_empty());
    assert_eq!(tri.edges().len(), 3);
    assert!(tri.interior_edges().is_empty());
    assert!(tri.triangles().is_empty());
    assert_eq!(tri.segment_buffer().len(), 12);
    tri.validate().unwrap();
}

#[test]
fn one_point_splits_frame_into_three() {
    let mut tri = ten_box();
    let v = tri.insert(Point2::new(5.0, 3.0)).unwrap();
    assert_eq!(v, 3);
    assert_eq!(tri.len(), 1);
    assert_eq!(tri.edges().len(), 6);

    let mesh = tri.mesh();
    let faces = mesh.faces_from(tri.cursor());
    assert_eq!(faces.len(), 4);
    let around_new = faces
        .iter()
        .filter(|&&f| {
            let e1 = mesh.lnext(f);
            let e2 = mesh.lnext(e1);
            [f, e1, e2].iter().any(|&e| mesh.org(e) == v)
        })
        .count();
    assert_eq!(around_new, 3);
}

#[test]
fn square_gives_two_triangles() {
    let pts = [
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(1.0, 1.0),
        Point2::new(0.0, 1.0),
    ];
    let tri = Triangulator::from_points(&pts).unwrap();
    assert_eq!(tri.len(), 4);
    assert_eq!(tri.interior_edges().len(), 5);

    let triangles = tri.triangles();
    assert_eq!(triangles.len(), 2);
    for t in &triangles {
        assert!(crate::geom::orientation_is_clockwise(t[0], t[1], t[2]));
        assert!(t.iter().all(|p| pts.contains(p)));
    }
}

#[test]
fn unlegalized_insertion_keeps_topology() {
    let mut tri = ten_box();
    tri.set_option(TriangulatorOption::Legalize, false);
    tri.set_option(TriangulatorOption::CheckInvariants, true);
    let pts = [
        Point2::new(1.0, 1.0),
        Point2::new(9.0, 1.5),
        Point2::new(5.0, 8.0),
        Point2::new(4.0, 4.0),
        Point2::new(6.5, 2.0),
    ];
    assert_eq!(tri.insert_all(pts.iter().copied()).unwrap(), pts.len());
    assert_eq!(tri.edges().len(), 3 + 3 * pts.len());
    assert_eq!(tri.mesh().faces_from(tri.cursor()).len(), 2 + 2 * pts.len());
}

#[test]
fn diagnostic_hook_sees_each_phase() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);

    let mut tri = ten_box();
    tri.set_diagnostic_hook(Box::new(move |d: &Diagnostic| sink.borrow_mut().push(d.clone())));
    let v = tri.insert(Point2::new(2.0, 2.0)).unwrap();

    {
        let events = events.borrow();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], Diagnostic::Located { steps, .. } if steps >= 1));
        assert!(matches!(events[1], Diagnostic::Inserted { vertex, .. } if vertex == v));
        assert!(matches!(events[2], Diagnostic::Legalized { vertex, .. } if vertex == v));
    }

    tri.set_option(TriangulatorOption::Legalize, false);
    tri.insert(Point2::new(7.0, 3.0)).unwrap();
    assert_eq!(events.borrow().len(), 5);

    tri.clear_diagnostic_hook();
    tri.insert(Point2::new(4.0, 8.0)).unwrap();
    assert_eq!(events.borrow().len(), 5);
}

#[test]
fn non_finite_points_are_rejected() {
    let mut tri = ten_box();
    let nan = Point2::new(f64::NAN, 1.0);
    assert!(matches!(
        tri.insert(nan),
        Err(TriangulationError::NonFinitePoint { .. })
    ));
    assert!(matches!(
        tri.insert(Point2::new(1.0, f64::INFINITY)),
        Err(TriangulationError::NonFinitePoint { .. })
    ));
    assert!(matches!(
        Triangulator::from_points(&[Point2::new(0.0, 0.0), nan]),
        Err(TriangulationError::NonFinitePoint { .. })
    ));
    assert!(tri.is_empty());
}

#[test]
fn points_outside_frame_are_rejected() {
    let mut tri = ten_box();
    let far = Point2::new(500.0, 500.0);
    assert_eq!(
        tri.insert(far),
        Err(TriangulationError::OutsideBounds { point: far })
    );
    // A frame corner is on the frame, not inside it.
    let corner = tri.super_triangle()[0];
    assert_eq!(
        tri.insert(corner),
        Err(TriangulationError::OutsideBounds { point: corner })
    );
    // Outside the box but inside the frame is fine.
    tri.insert(Point2::new(-2.0, -2.0)).unwrap();
}

#[test]
fn duplicate_point_is_rejected() {
    let mut tri = ten_box();
    tri.insert(Point2::new(2.0, 2.0)).unwrap();
    tri.insert(Point2::new(6.0, 2.0)).unwrap();
    let before = tri.mesh().verts.len();
    assert_eq!(
        tri.insert(Point2::new(2.0, 2.0)),
        Err(TriangulationError::DuplicatePoint {
            point: Point2::new(2.0, 2.0)
        })
    );
    assert_eq!(tri.mesh().verts.len(), before);
    assert_eq!(tri.len(), 2);
}

#[test]
fn point_on_edge_traps_walk() {
    let mut tri = ten_box();
    tri.insert(Point2::new(2.0, 2.0)).unwrap();
    tri.insert(Point2::new(6.0, 2.0)).unwrap();
    match tri.insert(Point2::new(4.0, 2.0)) {
        Err(TriangulationError::WalkTrapped { point, .. }) => assert_eq!(point, Point2::new(4.0, 2.0)),
        other => panic!("expected trapped walk, got {:?}", other),
    }
    tri.validate().unwrap();
}

#[test]
fn point_colinear_with_edge_traps_walk() {
    let mut tri = ten_box();
    tri.insert(Point2::new(2.0, 2.0)).unwrap();
    tri.insert(Point2::new(6.0, 2.0)).unwrap();
    // On the line through the 2-2 / 6-2 edge, but off the segment.
    let p = Point2::new(1.0, 2.0);
    assert!(matches!(
        tri.insert(p),
        Err(TriangulationError::WalkTrapped { point, .. }) if point == p
    ));
    tri.validate().unwrap();
    assert_eq!(tri.len(), 2);
}

#[test]
fn empty_input() {
    assert!(matches!(
        Triangulator::from_points(&[]),
        Err(TriangulationError::EmptyInput)
    ));
}

#[test]
fn validate_reports_corruption() {
    let mut tri = ten_box();
    tri.insert(Point2::new(3.0, 3.0)).unwrap();
    let mut mesh = tri.into_mesh();
    mesh.edges[0].next = 1;
    assert_eq!(
        mesh.validate(0),
        Err(TopologyError::MixedOrbit { edge: 0, next: 1 })
    );
}

#[test]
fn single_point_input() {
    let tri = Triangulator::from_points(&[Point2::new(4.0, -1.0)]).unwrap();
    assert_eq!(tri.len(), 1);
    assert_eq!(tri.edges().len(), 6);
    assert!(tri.triangles().is_empty());
}
