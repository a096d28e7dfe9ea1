use approx::assert_relative_eq;
use convex3d::math::{Isometry, Point};
use convex3d::query::{self, GrowthOptions, QueryError};
use convex3d::shape::{Capsule, ConvexShape, Sphere};

fn sphere(radius: f64) -> ConvexShape {
    Sphere::new(radius).into()
}

#[test]
fn separated_spheres_grow_until_touching() {
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(3.0, 0.0, 0.0);

    let res = query::growth_distance(
        &pos_a,
        &sphere(1.0),
        &pos_b,
        &sphere(1.0),
        &GrowthOptions::default(),
    )
    .unwrap();

    assert!(res.converged);
    assert_relative_eq!(res.scale, 1.5, epsilon = 1.0e-3);
    assert_relative_eq!(res.witness_a, Point::new(1.5, 0.0, 0.0), epsilon = 1.0e-2);
    assert_relative_eq!(res.witness_b, Point::new(1.5, 0.0, 0.0), epsilon = 1.0e-2);
}

#[test]
fn overlapping_spheres_shrink_until_touching() {
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.0, 3.0, 0.0);

    let res = query::growth_distance(
        &pos_a,
        &sphere(2.0),
        &pos_b,
        &sphere(2.0),
        &GrowthOptions::default(),
    )
    .unwrap();

    assert!(res.converged);
    assert!(res.scale < 1.0);
    assert_relative_eq!(res.scale, 0.75, epsilon = 1.0e-3);
}

#[test]
fn coincident_origins_never_separate() {
    let pos = Isometry::translation(1.0, 2.0, 3.0);

    let res = query::growth_distance(
        &pos,
        &sphere(1.0),
        &pos,
        &sphere(0.5),
        &GrowthOptions::default(),
    )
    .unwrap();

    assert!(res.converged);
    assert_eq!(res.scale, 0.0);
    assert_eq!(res.iterations, 1);
}

#[test]
fn capsule_cap_grows_toward_a_sphere() {
    let capsule = ConvexShape::from(Capsule::new(1.0, 0.5));
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(0.0, 0.0, 4.0);

    let res = query::growth_distance(
        &pos_a,
        &capsule,
        &pos_b,
        &sphere(0.5),
        &GrowthOptions::default(),
    )
    .unwrap();

    assert!(res.converged);
    assert_relative_eq!(res.scale, 2.0, epsilon = 1.0e-3);
}

#[test]
fn small_budget_does_not_converge() {
    let pos_a = Isometry::identity();
    let pos_b = Isometry::translation(3.0, 0.0, 0.0);
    let options = GrowthOptions {
        max_iterations: 3,
        ..GrowthOptions::default()
    };

    let res =
        query::growth_distance(&pos_a, &sphere(1.0), &pos_b, &sphere(1.0), &options).unwrap();

    assert!(!res.converged);
    assert_eq!(res.iterations, 3);
}

#[test]
fn malformed_arguments_are_rejected() {
    let pos = Isometry::identity();
    let options = GrowthOptions {
        epsilon: 0.0,
        ..GrowthOptions::default()
    };

    assert!(matches!(
        query::growth_distance(&pos, &sphere(1.0), &pos, &sphere(1.0), &options),
        Err(QueryError::NonPositiveTolerance { .. })
    ));
    assert!(matches!(
        query::growth_distance(
            &pos,
            &sphere(-1.0),
            &pos,
            &sphere(1.0),
            &GrowthOptions::default()
        ),
        Err(QueryError::InvalidShape(_))
    ));
}
