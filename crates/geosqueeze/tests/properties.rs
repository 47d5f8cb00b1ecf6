//! Integration tests: behavioral properties of the simplification engine.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::f64::consts::PI;

use geosqueeze::{Point, Polyline, SqueezeConfig};

/// A unit circle with one point per degree, closed back onto its start.
fn circle() -> Polyline {
    let sides = 360;
    (0..=sides)
        .map(|i| {
            let t = 2.0 * PI * f64::from(i) / f64::from(sides);
            Point::new(t.cos(), t.sin())
        })
        .collect::<Vec<_>>()
        .into()
}

/// Unit steps whose heading wobbles around north-east.
fn wobbly_walk(steps: u32) -> Polyline {
    let mut at = Point::new(10.0, -3.0);
    let mut points = vec![at];
    for k in 0..steps {
        let k = f64::from(k);
        let heading = 45.0 + 12.0 * (k * 0.7).sin() + 3.0 * (k * 2.3).cos();
        let (sin, cos) = heading.to_radians().sin_cos();
        at = Point::new(at.x + sin, at.y + cos);
        points.push(at);
    }
    points.into()
}

/// An outward spiral: turns shrink as the radius grows.
fn spiral() -> Polyline {
    (0..400)
        .map(|i| {
            let t = f64::from(i) * 0.05;
            let r = 1.0 + t;
            Point::new(r * t.cos(), r * t.sin())
        })
        .collect::<Vec<_>>()
        .into()
}

fn shapes() -> Vec<(&'static str, Polyline)> {
    vec![
        ("circle", circle()),
        ("wobbly walk", wobbly_walk(200)),
        ("spiral", spiral()),
    ]
}

#[test]
fn circle_tolerance_5_keeps_at_most_60_points() {
    let config = SqueezeConfig::new(5.0, SqueezeConfig::DEFAULT_PRECISION);
    let result = geosqueeze::simplify(&circle(), &config).unwrap();
    assert!(result.len() <= 60, "got {} points", result.len());
}

#[test]
fn circle_tolerance_8_keeps_at_most_40_points() {
    let result = geosqueeze::simplify(&circle(), &SqueezeConfig::default()).unwrap();
    assert!(result.len() <= 40, "got {} points", result.len());
}

#[test]
fn output_never_grows_and_keeps_endpoints() {
    for (name, shape) in shapes() {
        for tolerance in [0.0, 1.0, 8.0, 45.0, 359.0] {
            let config = SqueezeConfig::new(tolerance, 6);
            let result = geosqueeze::simplify(&shape, &config).unwrap();
            assert!(result.len() <= shape.len(), "{name} @ {tolerance}");
            assert!(result.len() >= 2, "{name} @ {tolerance}");

            let rounded = geosqueeze::precision::reduce_precision(shape.points(), 6);
            assert_eq!(result.first(), rounded.first(), "{name} @ {tolerance}");
            assert_eq!(result.last(), rounded.last(), "{name} @ {tolerance}");
        }
    }
}

#[test]
fn output_is_an_ordered_subsequence_of_the_rounded_input() {
    for (name, shape) in shapes() {
        let rounded = geosqueeze::precision::reduce_precision(shape.points(), 6);
        let result = geosqueeze::simplify(&shape, &SqueezeConfig::default()).unwrap();

        let mut remaining = rounded.iter();
        for p in result.points() {
            assert!(
                remaining.any(|q| q == p),
                "{name}: point {p:?} out of order or not in input"
            );
        }
    }
}

#[test]
fn simplifying_twice_removes_nothing_more() {
    for (name, shape) in shapes() {
        for tolerance in [1.0, 5.0, 8.0, 30.0, 200.0] {
            let config = SqueezeConfig::new(tolerance, 6);
            let once = geosqueeze::simplify(&shape, &config).unwrap();
            let twice = geosqueeze::simplify(&once, &config).unwrap();
            assert_eq!(once, twice, "{name} @ {tolerance}");
        }
    }
}

#[test]
fn remaining_vertices_all_exceed_tolerance() {
    let config = SqueezeConfig::default();
    let result = geosqueeze::simplify(&wobbly_walk(200), &config).unwrap();
    let chain = geosqueeze::VertexChain::from_points(result.points()).unwrap();
    for id in chain.live_ids() {
        let turn = chain.vertex(id).turn();
        assert!(turn > config.tolerance, "vertex {id:?} turns only {turn}");
    }
}

#[test]
fn larger_tolerance_never_keeps_more_points_on_a_circle() {
    let circle = circle();
    let counts: Vec<usize> = [1.0, 2.0, 3.0, 5.0, 8.0, 10.0, 20.0]
        .iter()
        .map(|&t| {
            geosqueeze::simplify(&circle, &SqueezeConfig::new(t, 6))
                .unwrap()
                .len()
        })
        .collect();
    for pair in counts.windows(2) {
        assert!(pair[1] <= pair[0], "counts not monotonic: {counts:?}");
    }
}

#[test]
fn short_inputs_pass_through_unchanged() {
    let inputs = [
        Polyline::new(vec![]),
        Polyline::new(vec![Point::new(0.123_456_789, 1.0)]),
        Polyline::new(vec![Point::new(0.0, 0.0), Point::new(1e-9, 2e-9)]),
    ];
    for input in inputs {
        let result = geosqueeze::simplify(&input, &SqueezeConfig::default()).unwrap();
        assert_eq!(result, input);
    }
}

#[test]
fn simplify_points_matches_simplify() {
    let shape = wobbly_walk(50);
    let via_points = geosqueeze::simplify_points(shape.points(), 8.0, 6).unwrap();
    let via_polyline = geosqueeze::simplify(&shape, &SqueezeConfig::default()).unwrap();
    assert_eq!(via_points, via_polyline.into_points());
}

#[test]
fn compress_line_string_matches_simplify() {
    let shape = spiral();
    let line = geo::LineString::from(shape.clone());
    let compressed = geosqueeze::compress_line_string(&line, &SqueezeConfig::default()).unwrap();
    let expected = geosqueeze::simplify(&shape, &SqueezeConfig::default()).unwrap();
    assert_eq!(Polyline::from(&compressed), expected);
}
