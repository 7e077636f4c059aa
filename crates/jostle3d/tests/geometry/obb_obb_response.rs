use super::{random_range, random_rotation};
use approx::assert_relative_eq;
use jostle3d::dynamics::{resolve_collision, ResponseParameters, RigidBody};
use jostle3d::math::{Point, Real, Vector};
use jostle3d::query::{self, CenterLineResolver};
use jostle3d::shape::OrientedBox;

fn unit_cube(x: Real) -> OrientedBox {
    OrientedBox::axis_aligned(Point::new(x, 0.0, 0.0), Vector::repeat(1.0))
}

#[test]
fn overlapping_cubes_just_touch_after_correction() {
    let mut a = RigidBody::new(unit_cube(0.0), 1.0).unwrap();
    let mut b = RigidBody::new(unit_cube(0.5), 1.0).unwrap();
    assert!(query::are_colliding(a.obb(), b.obb()));

    let response = resolve_collision(&mut a, &mut b, &ResponseParameters::default()).unwrap();

    assert_relative_eq!(response.correction * 2.0, Vector::new(-0.5, 0.0, 0.0));
    assert_relative_eq!(a.center(), Point::new(-0.25, 0.0, 0.0));
    assert_relative_eq!(b.center(), Point::new(0.75, 0.0, 0.0));
    assert_relative_eq!(CenterLineResolver::depth(a.obb(), b.obb()), 0.0);
    // Touching boxes still count as intersecting.
    assert!(query::are_colliding(a.obb(), b.obb()));
}

#[test]
fn elastic_collision_swaps_velocities() {
    let params = ResponseParameters {
        restitution: 1.0,
        ..ResponseParameters::default()
    };
    let mut a = RigidBody::new(unit_cube(0.0), 1.0)
        .unwrap()
        .with_momentum(Vector::new(1.0, 0.0, 0.0));
    let mut b = RigidBody::new(unit_cube(0.8), 1.0)
        .unwrap()
        .with_momentum(Vector::new(-1.0, 0.0, 0.0));

    let _ = resolve_collision(&mut a, &mut b, &params).unwrap();

    assert_relative_eq!(a.momentum, Vector::new(-1.0, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(b.momentum, Vector::new(1.0, 0.0, 0.0), epsilon = 1.0e-6);
}

#[test]
fn momentum_is_conserved() {
    let mut rng = oorandom::Rand32::new(1234);
    let params = ResponseParameters::default();

    for _ in 0..500 {
        let offset = Vector::new(
            random_range(&mut rng, -0.8, 0.8),
            random_range(&mut rng, -0.8, 0.8),
            random_range(&mut rng, -0.8, 0.8),
        );
        let obb1 = OrientedBox::new(Point::origin(), random_rotation(&mut rng), Vector::repeat(1.0));
        let obb2 = OrientedBox::new(
            Point::from(offset),
            random_rotation(&mut rng),
            Vector::repeat(1.0),
        );
        let mut random_vector = || {
            Vector::new(
                random_range(&mut rng, -3.0, 3.0),
                random_range(&mut rng, -3.0, 3.0),
                random_range(&mut rng, -3.0, 3.0),
            )
        };
        let (p1, l1, p2, l2) = (
            random_vector(),
            random_vector(),
            random_vector(),
            random_vector(),
        );
        let mut a = RigidBody::new(obb1, random_range(&mut rng, 0.5, 3.0))
            .unwrap()
            .with_momentum(p1)
            .with_angular_momentum(l1);
        let mut b = RigidBody::new(obb2, random_range(&mut rng, 0.5, 3.0))
            .unwrap()
            .with_momentum(p2)
            .with_angular_momentum(l2);

        let _ = resolve_collision(&mut a, &mut b, &params).unwrap();

        assert_relative_eq!(a.momentum + b.momentum, p1 + p2, epsilon = 1.0e-4);
        assert_relative_eq!(
            a.angular_momentum + b.angular_momentum,
            l1 + l2,
            epsilon = 1.0e-4
        );
    }
}

#[test]
fn separating_bodies_are_slowed_down_too() {
    // The impulse is applied whatever the relative velocity: bodies already moving apart
    // along the normal are pulled back toward each other.
    let mut a = RigidBody::new(unit_cube(0.0), 1.0)
        .unwrap()
        .with_momentum(Vector::new(-1.0, 0.0, 0.0));
    let mut b = RigidBody::new(unit_cube(0.5), 1.0).unwrap();

    let _ = resolve_collision(&mut a, &mut b, &ResponseParameters::default()).unwrap();

    assert_relative_eq!(a.momentum, Vector::new(-0.3, 0.0, 0.0), epsilon = 1.0e-6);
    assert_relative_eq!(b.momentum, Vector::new(-0.7, 0.0, 0.0), epsilon = 1.0e-6);
}
