//! Tests for the Point value type

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::coordinate::Point;
use crate::errors::MapError;

fn hash_of(point: &Point) -> u64 {
    let mut hasher = DefaultHasher::new();
    point.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_point_creation_is_exact() {
    let samples = [(0.0, 0.0), (-89.99, 179.5), (123.456, -987.25), (91.0, 200.0)];
    for (lat, lon) in samples {
        let point = Point::create(lat, lon);
        assert_eq!(point.latitude(), lat);
        assert_eq!(point.longitude(), lon);
    }
}

#[test]
fn test_default_point() {
    assert_eq!(Point::default(), Point::new(51.505, -0.09));
    assert_eq!(Point::DEFAULT, Point::default());
}

#[test]
fn test_points_are_structurally_equal() {
    let a = Point::new(12.5, -3.25);
    let b = Point::new(12.5, -3.25);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, Point::new(12.5, -3.0));
}

#[test]
fn test_signed_zero_hashes_like_zero() {
    let a = Point::new(0.0, 1.0);
    let b = Point::new(-0.0, 1.0);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn test_add_and_subtract() {
    let a = Point::new(10.0, 20.0);
    let b = Point::new(2.5, -4.0);

    assert_eq!(a + b, Point::new(12.5, 16.0));
    assert_eq!(a - b, Point::new(7.5, 24.0));
    assert_eq!((a + b) - b, a);
}

#[test]
fn test_scale_multiply_divide() {
    let p = Point::new(3.0, -6.0);

    assert_eq!(p.scale(1.0), p);
    assert_eq!(p.scale(2.0), Point::new(6.0, -12.0));
    assert_eq!(p * 0.5, Point::new(1.5, -3.0));
    assert_eq!(p / 3.0, Point::new(1.0, -2.0));
}

#[test]
fn test_divide_by_zero_propagates_infinity() {
    let p = Point::new(1.0, -1.0) / 0.0;
    assert_eq!(p.latitude(), f64::INFINITY);
    assert_eq!(p.longitude(), f64::NEG_INFINITY);

    let origin = Point::new(0.0, 0.0) / 0.0;
    assert!(origin.latitude().is_nan());
}

#[test]
fn test_distance_is_euclidean_and_symmetric() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);

    assert_eq!(a.distance_to(&b), 5.0);
    assert_eq!(b.distance_to(&a), a.distance_to(&b));
    assert_eq!(a.distance_to(&a), 0.0);
    assert!(Point::new(51.5, -0.1).distance_to(&Point::DEFAULT) > 0.0);
}

// Components are exact binary fractions so sums and differences do not round.
fn sample_points() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(-89.75, 179.5),
        Point::new(90.0, -180.0),
        Point::new(1048576.25, -2097152.5),
        Point::new(-0.015625, 0.0078125),
        Point::new(-123456.5, 65536.0),
        Point::new(3.0, 4.0),
    ]
}

#[test]
fn test_additive_round_trip_for_varied_points() {
    for p in sample_points() {
        for q in sample_points() {
            assert_eq!((p + q) - q, p, "p = {}, q = {}", p, q);
        }
        assert_eq!(p.scale(1.0), p);
        assert_eq!(p * 1.0, p);
    }
}

#[test]
fn test_distance_symmetry_for_varied_points() {
    let extra = [Point::new(51.505, -0.09), Point::new(-33.8688, 151.2093), Point::new(1e7, -1e-7)];
    let points: Vec<Point> = sample_points().into_iter().chain(extra).collect();

    for a in &points {
        for b in &points {
            assert_eq!(a.distance_to(b), b.distance_to(a), "a = {}, b = {}", a, b);
            assert_eq!(a.distance_to(b) == 0.0, a == b, "a = {}, b = {}", a, b);
        }
    }
}

#[test]
fn test_array_and_tuple_conversions() {
    let p = Point::new(51.505, -0.09);

    let array: [f64; 2] = p.into();
    assert_eq!(array, [51.505, -0.09]);
    assert_eq!(Point::from(array), p);

    let (lat, lon): (f64, f64) = p.into();
    assert_eq!((lat, lon), (51.505, -0.09));
    assert_eq!(Point::from((lat, lon)), p);

    let (lat, lon) = p.into_parts();
    assert_eq!(lat, p.latitude());
    assert_eq!(lon, p.longitude());
}

#[test]
fn test_try_from_slice() {
    let values = vec![1.0, 2.0];
    assert_eq!(Point::try_from(values.as_slice()).unwrap(), Point::new(1.0, 2.0));

    let short = [1.0];
    match Point::try_from(&short[..]) {
        Err(MapError::InvalidArgument { param, .. }) => assert_eq!(param, "point"),
        other => panic!("expected invalid argument, got {:?}", other),
    }
}

#[test]
fn test_display_format() {
    assert_eq!(Point::DEFAULT.to_string(), "[51.505, -0.09]");
    assert_eq!(Point::new(1.0, -2.5).to_string(), "[1, -2.5]");
}

#[test]
fn test_parse_point() {
    assert_eq!("51.505,-0.09".parse::<Point>().unwrap(), Point::DEFAULT);
    assert_eq!(" 1 , 2 ".parse::<Point>().unwrap(), Point::new(1.0, 2.0));
    assert_eq!("[51.505, -0.09]".parse::<Point>().unwrap(), Point::DEFAULT);

    let shown = Point::new(-12.75, 33.0);
    assert_eq!(shown.to_string().parse::<Point>().unwrap(), shown);
}

#[test]
fn test_parse_point_rejects_garbage() {
    assert!(matches!("1,2,3".parse::<Point>(), Err(MapError::ParseError(_))));
    assert!(matches!("north,2".parse::<Point>(), Err(MapError::ParseError(_))));
    assert!(matches!("".parse::<Point>(), Err(MapError::ParseError(_))));
}
