use approx::assert_relative_eq;
use convex3d::math::{Isometry, Point, Real, Vector};
use convex3d::motion::ConstantVelocityRigidMotion;
use convex3d::query::{self, QueryError, ToiOptions, ToiStatus};
use convex3d::shape::{ConvexShape, Cuboid, Cylinder, Sphere};

fn unit_sphere() -> ConvexShape {
    Sphere::new(1.0).into()
}

#[test]
fn spinning_spheres_approaching_each_other() {
    let motion1 = ConstantVelocityRigidMotion::new(
        Isometry::translation(-2.0, 0.0, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 5.0, 0.0),
    );
    let motion2 = ConstantVelocityRigidMotion::new(
        Isometry::translation(2.0, 0.0, 0.0),
        Vector::new(-2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 5.0),
    );
    let sphere = unit_sphere();

    let toi = query::conservative_advancement(
        &motion1,
        &sphere,
        1.0,
        &motion2,
        &sphere,
        1.0,
        1.0,
        &ToiOptions::default(),
    )
    .unwrap();

    assert!(toi.impact);
    assert_eq!(toi.status, ToiStatus::Impact);
    assert_relative_eq!(toi.toi, 0.5, max_relative = 0.01);
    assert_relative_eq!(toi.witness_a, Point::origin(), epsilon = 0.01);
    assert_relative_eq!(toi.witness_b, Point::origin(), epsilon = 0.01);
}

#[test]
fn spheres_moving_apart() {
    let motion1 = ConstantVelocityRigidMotion::new(
        Isometry::translation(-2.0, 0.0, 0.0),
        Vector::new(-2.0, 0.0, 0.0),
        Vector::zeros(),
    );
    let motion2 = ConstantVelocityRigidMotion::new(
        Isometry::translation(2.0, 0.0, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::zeros(),
    );
    let sphere = unit_sphere();

    let toi = query::conservative_advancement(
        &motion1,
        &sphere,
        1.0,
        &motion2,
        &sphere,
        1.0,
        1.0,
        &ToiOptions::default(),
    )
    .unwrap();

    assert!(!toi.impact);
    assert_eq!(toi.status, ToiStatus::Separated);
    assert_eq!(toi.toi, 1.0);
}

#[test]
fn spinning_spheres_passing_each_other() {
    let motion1 = ConstantVelocityRigidMotion::new(
        Isometry::translation(-2.0, 1.01, 0.0),
        Vector::new(-2.0, 0.0, 0.0),
        Vector::new(0.0, 5.0, 0.0),
    );
    let motion2 = ConstantVelocityRigidMotion::new(
        Isometry::translation(2.0, -1.01, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 0.0, 5.0),
    );
    let sphere = unit_sphere();

    let toi = query::conservative_advancement(
        &motion1,
        &sphere,
        1.0,
        &motion2,
        &sphere,
        1.0,
        1.0,
        &ToiOptions::default(),
    )
    .unwrap();

    assert!(!toi.impact);
}

#[test]
fn rotating_cylinder_hits_a_still_sphere() {
    // The cylinder axis starts along `z` and is along `y` at `t = 0.5`, when
    // its top cap touches the sphere.
    let motion1 = ConstantVelocityRigidMotion::new(
        Isometry::translation(0.0, 0.0, 2.0),
        Vector::zeros(),
        Vector::new(-std::f64::consts::PI, 0.0, 0.0),
    );
    let motion2 =
        ConstantVelocityRigidMotion::constant_position(Isometry::translation(0.0, 10.0, 0.0));
    let cylinder = ConvexShape::from(Cylinder::new(10.0, 1.0));
    let sphere = unit_sphere();
    let radius1 = (101.0 as Real).sqrt();

    let toi = query::conservative_advancement(
        &motion1,
        &cylinder,
        radius1,
        &motion2,
        &sphere,
        1.0,
        1.0,
        &ToiOptions::default(),
    )
    .unwrap();

    assert!(toi.impact);
    assert_relative_eq!(toi.toi, 0.5, max_relative = 0.01);
    assert!((toi.witness_a - toi.witness_b).norm() < 0.01);
}

#[test]
fn rotating_rod_stops_before_a_box_corner() {
    let rod = ConvexShape::from(Cuboid::new(Vector::new(2.0, 0.2, 0.2)));
    let cube = ConvexShape::from(Cuboid::new(Vector::repeat(0.5)));
    let angvel = 2.5;
    let cube_pos = Isometry::translation(0.0, 2.0, 0.0);
    let options = ToiOptions {
        epsilon: 1.0e-4,
        ..ToiOptions::default()
    };

    let toi = query::time_of_impact(
        &Isometry::identity(),
        &Isometry::rotation(Vector::z() * angvel),
        &rod,
        rod.bounding_radius(),
        &cube_pos,
        &cube_pos,
        &cube,
        cube.bounding_radius(),
        &options,
    )
    .unwrap();

    // The leading face of the rod reaches the corner (0.5, 1.5) of the cube.
    let corner_angle = Real::atan2(1.5, 0.5);
    let contact_angle = corner_angle - (0.2 / Real::sqrt(2.5)).asin();
    let contact_time = contact_angle / angvel;

    assert!(toi.impact);
    assert_eq!(toi.status, ToiStatus::Impact);
    assert!(toi.witness_a.coords.iter().all(|x| x.is_finite()));
    assert!(toi.witness_b.coords.iter().all(|x| x.is_finite()));
    assert!(toi.toi <= contact_time + 1.0e-6, "{} > {}", toi.toi, contact_time);
    assert!(toi.toi >= contact_time - 1.0e-3, "{} < {}", toi.toi, contact_time);

    let angle = angvel * toi.toi;
    let distance = -0.5 * angle.sin() + 1.5 * angle.cos() - 0.2;
    assert!((-1.0e-6..=options.epsilon + 1.0e-6).contains(&distance));

    assert_relative_eq!(toi.witness_b.x, 0.5, epsilon = 1.0e-4);
    assert_relative_eq!(toi.witness_b.y, 1.5, epsilon = 1.0e-4);
    assert!((toi.witness_a - toi.witness_b).norm() <= options.epsilon + 1.0e-6);
}

#[test]
fn interpolated_spheres_meet_halfway() {
    let sphere = unit_sphere();
    let toi = query::time_of_impact(
        &Isometry::translation(-2.0, 0.0, 0.0),
        &Isometry::identity(),
        &sphere,
        1.0,
        &Isometry::translation(2.0, 0.0, 0.0),
        &Isometry::identity(),
        &sphere,
        1.0,
        &ToiOptions::default(),
    )
    .unwrap();

    assert!(toi.impact);
    assert_relative_eq!(toi.toi, 0.5, epsilon = 1.0e-6);
    assert_relative_eq!(toi.witness_a, Point::origin(), epsilon = 1.0e-6);
    assert_relative_eq!(toi.witness_b, Point::origin(), epsilon = 1.0e-6);
}

#[test]
fn swapping_the_shapes_swaps_the_witnesses() {
    let sphere = unit_sphere();
    let small = ConvexShape::from(Sphere::new(0.5));
    let start1 = Isometry::translation(-3.0, 0.0, 0.0);
    let end1 = Isometry::translation(1.0, 0.0, 0.0);
    let start2 = Isometry::translation(2.0, 0.0, 0.0);
    let end2 = Isometry::translation(2.0, 0.0, 0.0);
    let options = ToiOptions::default();

    let ab = query::time_of_impact(
        &start1, &end1, &sphere, 1.0, &start2, &end2, &small, 0.5, &options,
    )
    .unwrap();
    let ba = query::time_of_impact(
        &start2, &end2, &small, 0.5, &start1, &end1, &sphere, 1.0, &options,
    )
    .unwrap();

    assert!(ab.impact && ba.impact);
    assert_relative_eq!(ab.toi, ba.toi, epsilon = 1.0e-9);

    let ba = ba.swapped();
    assert_relative_eq!(ab.witness_a, ba.witness_a, epsilon = 1.0e-9);
    assert_relative_eq!(ab.witness_b, ba.witness_b, epsilon = 1.0e-9);
}

#[test]
fn iteration_limit_is_inconclusive() {
    let motion1 = ConstantVelocityRigidMotion::new(
        Isometry::translation(-2.0, 0.0, 0.0),
        Vector::new(2.0, 0.0, 0.0),
        Vector::new(0.0, 5.0, 0.0),
    );
    let motion2 =
        ConstantVelocityRigidMotion::constant_position(Isometry::translation(2.0, 0.0, 0.0));
    let sphere = unit_sphere();
    let options = ToiOptions {
        max_iterations: 1,
        ..ToiOptions::default()
    };

    let toi = query::conservative_advancement(
        &motion1, &sphere, 1.0, &motion2, &sphere, 1.0, 1.0, &options,
    )
    .unwrap();

    assert!(!toi.impact);
    assert_eq!(toi.iterations, 1);
    assert_eq!(toi.status, ToiStatus::ExceededMaxIterations);
}

#[test]
fn malformed_arguments_are_rejected() {
    let sphere = unit_sphere();
    let motion = ConstantVelocityRigidMotion::constant_position(Isometry::identity());
    let options = ToiOptions::default();

    assert_eq!(
        query::conservative_advancement(
            &motion, &sphere, -1.0, &motion, &sphere, 1.0, 1.0, &options
        ),
        Err(QueryError::NegativeBoundingRadius { value: -1.0 })
    );
    assert_eq!(
        query::conservative_advancement(
            &motion, &sphere, 1.0, &motion, &sphere, 1.0, 0.0, &options
        ),
        Err(QueryError::NonPositiveTolerance {
            name: "time horizon",
            value: 0.0
        })
    );
}
