use approx::assert_relative_eq;
use convex3d::math::{Isometry, Point, Real, Rotation, Vector};
use convex3d::query::{self, GjkOptions, GjkStatus};
use convex3d::shape::{ConvexShape, Sphere};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn unit_sphere() -> ConvexShape {
    Sphere::new(1.0).into()
}

fn options() -> GjkOptions {
    GjkOptions {
        absolute_tolerance: 10.0e-6,
        relative_tolerance: 10.0e-6,
        stagnation_tolerance: 10.0e-15,
        max_iterations: 100,
    }
}

#[test]
fn spheres_on_top_of_each_other() {
    let sphere = unit_sphere();
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.0, 2.0, 0.0);

    let res = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &options()).unwrap();

    assert!(res.distance.abs() < 10.0e-6);
    assert_eq!(res.witness_a, Point::new(0.0, 1.0, 0.0));
    assert_eq!(res.witness_b, Point::new(0.0, 1.0, 0.0));
    assert!(res.is_intersecting());
}

#[test]
fn separated_spheres_on_the_x_axis() {
    let sphere = unit_sphere();
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(2.5, 0.0, 0.0);

    let res = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &options()).unwrap();

    assert!((res.distance - 0.5).abs() < 10.0e-6);
    assert_eq!(res.witness_a, Point::new(1.0, 0.0, 0.0));
    assert_eq!(res.witness_b, Point::new(1.5, 0.0, 0.0));
    assert!(!res.is_intersecting());
    assert_eq!(res.status.message(), query::status_message(res.status.code()));
}

#[test]
fn spheres_with_different_radii() {
    let a = ConvexShape::from(Sphere::new(0.5));
    let b = ConvexShape::from(Sphere::new(2.0));
    let pos_a = Isometry::translation(1.0, 1.0, 1.0);
    let pos_b = Isometry::translation(1.0, -3.0, 4.0);

    let res = query::closest_points(&pos_a, &a, &pos_b, &b, &GjkOptions::default()).unwrap();

    // Centers are 5 apart.
    assert_relative_eq!(res.distance, 2.5, epsilon = 1.0e-9);
    assert_relative_eq!(res.witness_a, Point::new(1.0, 0.6, 1.3), epsilon = 1.0e-9);
    assert_relative_eq!(res.witness_b, Point::new(1.0, -1.4, 2.8), epsilon = 1.0e-9);
}

#[test]
fn overlapping_spheres_report_an_intersection() {
    let sphere = unit_sphere();
    let pos_a = Isometry::translation(0.3, 0.0, 0.0);
    let pos_b = Isometry::translation(-0.4, 0.5, 0.0);

    let res = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &options()).unwrap();

    assert!(res.distance <= 10.0e-6);
    assert!(
        matches!(
            res.status,
            GjkStatus::AbsoluteConvergence | GjkStatus::Intersection
        ),
        "{:?}",
        res.status
    );
}

#[test]
fn random_sphere_pairs() {
    let sphere = unit_sphere();
    let options = GjkOptions {
        relative_tolerance: 10.0e-10,
        ..options()
    };
    let mut rng = oorandom::Rand64::new(42);
    let mut rot_rng = StdRng::seed_from_u64(42);
    let mut coord = move || rng.rand_float() * 4.0 - 2.0;

    for _ in 0..100 {
        let pos_a = Isometry::from_parts(
            Vector::new(coord(), coord(), coord()).into(),
            rot_rng.gen::<Rotation<Real>>(),
        );
        let pos_b = Isometry::from_parts(
            Vector::new(coord(), coord(), coord()).into(),
            rot_rng.gen::<Rotation<Real>>(),
        );

        let res = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &options).unwrap();
        let true_distance = (pos_a.translation.vector - pos_b.translation.vector).norm() - 2.0;

        assert_ne!(res.status, GjkStatus::ExceededMaxIterationsLimit);

        if true_distance > options.absolute_tolerance {
            assert_relative_eq!(res.distance, true_distance, max_relative = 5.0e-4);
            assert!(!res.is_intersecting(), "{:?}", res.status);
        } else {
            assert!(res.distance >= 0.0);
            assert!(res.distance <= options.absolute_tolerance);
            assert!(res.is_intersecting(), "{:?}", res.status);
        }
    }
}

#[test]
fn repeated_queries_are_identical() {
    let sphere = unit_sphere();
    let pos_a = Isometry::new(Vector::new(-2.0, 0.3, 0.1), Vector::new(0.1, 0.2, 0.3));
    let pos_b = Isometry::new(Vector::new(2.0, -0.5, 0.7), Vector::new(-1.0, 0.0, 2.0));

    let first = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &options()).unwrap();
    let second = query::closest_points(&pos_a, &sphere, &pos_b, &sphere, &options()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn swapping_the_shapes_swaps_the_witnesses() {
    let a = ConvexShape::from(Sphere::new(1.0));
    let b = ConvexShape::from(Sphere::new(0.25));
    let pos_a = Isometry::translation(-2.0, 1.0, 0.0);
    let pos_b = Isometry::translation(3.0, 0.0, -1.0);

    let ab = query::closest_points(&pos_a, &a, &pos_b, &b, &options()).unwrap();
    let ba = query::closest_points(&pos_b, &b, &pos_a, &a, &options()).unwrap();

    assert_relative_eq!(ab.distance, ba.distance, epsilon = 1.0e-9);
    assert_relative_eq!(ab.witness_a, ba.witness_b, epsilon = 1.0e-9);
    assert_relative_eq!(ab.witness_b, ba.witness_a, epsilon = 1.0e-9);
    assert_relative_eq!(ab.flipped().witness_a, ba.witness_a, epsilon = 1.0e-9);
}
