use super::{random_range, random_rotation};
use jostle3d::math::{Point, Real, Rotation, Vector};
use jostle3d::query::{self, sat};
use jostle3d::shape::OrientedBox;

fn unit_cube(center: Point<Real>) -> OrientedBox {
    OrientedBox::axis_aligned(center, Vector::repeat(1.0))
}

#[test]
fn gap_along_face_axis() {
    let obb1 = unit_cube(Point::origin());

    for dir in [Vector::x(), Vector::y(), Vector::z(), -Vector::x()] {
        let obb2 = unit_cube(Point::from(dir * 1.5));
        assert!(!query::are_colliding(&obb1, &obb2));
        assert!(!query::are_colliding(&obb2, &obb1));
    }
}

#[test]
fn gap_along_edge_axis() {
    let angle = core::f64::consts::FRAC_PI_4 as Real;
    let obb1 = OrientedBox::new(
        Point::origin(),
        Rotation::from_euler_angles(0.0, angle, 0.0),
        Vector::repeat(1.0),
    );
    let obb2 = OrientedBox::new(
        Point::new(1.35, 1.35, 0.0),
        Rotation::from_euler_angles(angle, 0.0, 0.0),
        Vector::repeat(1.0),
    );

    let sep = sat::oriented_box_oriented_box_find_separating_axis(&obb1, &obb2)
        .expect("the boxes should be separated");
    assert!(sep.index >= 6, "expected an edge-edge axis, got {:?}", sep);
    assert!(!query::are_colliding(&obb1, &obb2));
}

// The midpoint test compares the center distance with the widest projection only, so a
// small box next to a large one needs a gap wider than half the size difference.
#[test]
fn unequal_boxes_use_the_widest_projection() {
    let large = OrientedBox::axis_aligned(Point::origin(), Vector::repeat(8.0));

    // Faces 1.5 apart, but the centers are 6 apart and the large box is 8 wide.
    let near = unit_cube(Point::new(6.0, 0.0, 0.0));
    assert!(query::are_colliding(&large, &near));
    assert!(query::are_colliding(&near, &large));
    assert!(sat::oriented_box_oriented_box_find_separating_axis(&large, &near).is_none());

    let far = unit_cube(Point::new(8.5, 0.0, 0.0));
    let sep = sat::oriented_box_oriented_box_find_separating_axis(&large, &far)
        .expect("the boxes should be separated");
    assert_eq!(sep.index, 0);
    assert!(!query::are_colliding(&large, &far));
}

#[test]
fn identical_boxes_collide() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..200 {
        let center = Point::new(
            random_range(&mut rng, -10.0, 10.0),
            random_range(&mut rng, -10.0, 10.0),
            random_range(&mut rng, -10.0, 10.0),
        );
        let size = Vector::new(
            random_range(&mut rng, 0.1, 3.0),
            random_range(&mut rng, 0.1, 3.0),
            random_range(&mut rng, 0.1, 3.0),
        );
        let obb = OrientedBox::new(center, random_rotation(&mut rng), size);

        assert!(query::are_colliding(&obb, &obb));
    }
}

#[test]
fn touching_cubes_collide() {
    let obb1 = unit_cube(Point::new(-0.25, 0.0, 0.0));
    let obb2 = unit_cube(Point::new(0.75, 0.0, 0.0));

    assert!(query::are_colliding(&obb1, &obb2));
}

#[test]
fn intersection_is_symmetric() {
    let mut rng = oorandom::Rand32::new(42);
    let mut num_colliding = 0;

    for _ in 0..1000 {
        let obb1 = OrientedBox::new(
            Point::origin(),
            random_rotation(&mut rng),
            Vector::new(
                random_range(&mut rng, 0.2, 2.0),
                random_range(&mut rng, 0.2, 2.0),
                random_range(&mut rng, 0.2, 2.0),
            ),
        );
        let obb2 = OrientedBox::new(
            Point::new(
                random_range(&mut rng, -2.5, 2.5),
                random_range(&mut rng, -2.5, 2.5),
                random_range(&mut rng, -2.5, 2.5),
            ),
            random_rotation(&mut rng),
            Vector::new(
                random_range(&mut rng, 0.2, 2.0),
                random_range(&mut rng, 0.2, 2.0),
                random_range(&mut rng, 0.2, 2.0),
            ),
        );

        let colliding = query::are_colliding(&obb1, &obb2);
        assert_eq!(colliding, query::are_colliding(&obb2, &obb1));
        // The test is pure: asking twice gives the same answer.
        assert_eq!(colliding, query::are_colliding(&obb1, &obb2));

        if colliding {
            num_colliding += 1;
        }
    }

    // Make sure both outcomes were exercised.
    assert!(num_colliding > 0 && num_colliding < 1000);
}

#[test]
fn full_turn_does_not_change_the_outcome() {
    let tau = core::f64::consts::TAU as Real;
    let axis = Vector::new(1.0, 2.0, -0.5).normalize();
    let axis = jostle3d::na::Unit::new_normalize(axis);

    for (offset, expected) in [(0.3, true), (5.0, false)] {
        for angle in [0.0, 0.4, 1.3, 2.9] {
            let rot = Rotation::from_axis_angle(&axis, angle);
            let full_turn = Rotation::from_axis_angle(&axis, angle + tau);
            let obb1 = unit_cube(Point::origin());
            let obb2 = OrientedBox::new(Point::new(offset, 0.0, 0.0), rot, Vector::repeat(1.0));
            let obb3 =
                OrientedBox::new(Point::new(offset, 0.0, 0.0), full_turn, Vector::repeat(1.0));

            assert_eq!(query::are_colliding(&obb1, &obb2), expected);
            assert_eq!(query::are_colliding(&obb1, &obb3), expected);
        }
    }
}

#[test]
fn degenerate_cross_axes_do_not_separate() {
    // Parallel boxes: 3 of the 9 cross products are zero vectors.
    let obb1 = OrientedBox::axis_aligned(Point::origin(), Vector::new(2.0, 1.0, 1.0));
    let obb2 = OrientedBox::axis_aligned(Point::new(0.5, 0.5, 0.5), Vector::new(1.0, 1.0, 3.0));
    let axes = sat::oriented_box_oriented_box_candidate_axes(&obb1, &obb2);

    assert_eq!(axes.iter().filter(|a| a.norm_squared() == 0.0).count(), 3);
    assert!(query::are_colliding(&obb1, &obb2));
}
