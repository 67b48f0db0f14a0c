use voronoi_sketch_core::Point;
use voronoi_sketch_designer::curve::{
    sample_curves, CurveEvaluator, CurveSegment, ParametricCurve, ProfileCurve,
    DEFAULT_SAMPLE_STEP,
};

#[test]
fn test_quadratic_samples_are_evenly_spaced() {
    let segment = CurveSegment::quadratic(
        Point::new(0.0, 0.0),
        Point::new(10.0, 20.0),
        Point::new(20.0, 0.0),
    );
    let curve = ParametricCurve::new(segment);
    let frag = ProfileCurve::segment(segment)
        .to_fragment(DEFAULT_SAMPLE_STEP)
        .unwrap();

    let strides = (curve.length() / DEFAULT_SAMPLE_STEP).floor() as usize;
    assert_eq!(frag.len(), strides + 2);

    // Chords between interior samples approach the step for a smooth curve.
    for pair in frag.points()[..=strides].windows(2) {
        let chord = pair[0].distance_to(&pair[1]);
        assert!(chord <= DEFAULT_SAMPLE_STEP + 1e-9);
        assert!(chord > DEFAULT_SAMPLE_STEP * 0.95);
    }
    assert_eq!(*frag.last().unwrap(), curve.end_point());
}

#[test]
fn test_sample_curves_preserves_order() {
    let curves = vec![
        ProfileCurve::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0)),
        ProfileCurve::line(Point::new(5.0, 5.0), Point::new(6.0, 5.0)),
    ];
    let fragments = sample_curves(&curves, 2.0).unwrap();
    assert_eq!(fragments.len(), 2);
    assert_eq!(*fragments[1].first().unwrap(), Point::new(5.0, 5.0));
}

#[test]
fn test_short_curve_keeps_both_endpoints() {
    // Shorter than one step: only the start is sampled, the end is appended.
    let segment = CurveSegment::circular_arc(Point::new(0.0, 0.0), 1.0, 0.0, 0.5);
    let frag = ProfileCurve::segment(segment).to_fragment(2.0).unwrap();
    assert_eq!(frag.len(), 2);
    assert!(frag.first().unwrap().approx_eq(&Point::new(1.0, 0.0), 1e-12));
}

#[test]
fn test_elliptical_quarter_arc_endpoints() {
    use std::f64::consts::FRAC_PI_2;

    let segment =
        CurveSegment::elliptical_arc(Point::new(0.0, 0.0), (4.0, 2.0), 0.0, 0.0, FRAC_PI_2);
    let curve = ParametricCurve::new(segment);
    assert!(curve.start_point().approx_eq(&Point::new(4.0, 0.0), 1e-9));
    assert!(curve.end_point().approx_eq(&Point::new(0.0, 2.0), 1e-9));
    // Quarter ellipse perimeter lies between the chord and the two semi-axes.
    assert!(curve.length() > 20f64.sqrt() && curve.length() < 6.0);
}

#[test]
fn test_tiny_step_rejected_before_sampling() {
    use voronoi_sketch_core::GeometryError;
    use voronoi_sketch_designer::curve::MAX_SAMPLES_PER_CURVE;

    let arc = ProfileCurve::segment(CurveSegment::circular_arc(
        Point::new(0.0, 0.0),
        10.0,
        0.0,
        1.0,
    ));
    for step in [1e-308, 1e-9] {
        assert_eq!(
            arc.to_fragment(step).unwrap_err(),
            GeometryError::InvalidSampleStep { step }
        );
    }

    // Just under the cap still samples.
    let step = 10.0 / (MAX_SAMPLES_PER_CURVE as f64 - 10.0);
    assert!(arc.to_fragment(step).unwrap().len() < MAX_SAMPLES_PER_CURVE + 2);
}

#[test]
fn test_arc_bounds_include_apex_missed_by_samples() {
    use std::f64::consts::PI;
    use voronoi_sketch_designer::curve::curves_bounding_box;

    // Half circle whose apex (0, 5) falls between two samples at step 2.
    let arc = ProfileCurve::segment(CurveSegment::circular_arc(
        Point::new(0.0, 0.0),
        5.0,
        0.0,
        PI,
    ));
    let sampled = arc.to_fragment(2.0).unwrap().bounding_box().unwrap();
    assert!(sampled.max.y < 5.0 - 1e-3);

    let curves = vec![
        arc,
        ProfileCurve::line(Point::new(-5.0, 0.0), Point::new(5.0, 0.0)),
    ];
    let exact = curves_bounding_box(&curves).unwrap();
    assert!((exact.max.y - 5.0).abs() < 1e-9);
    assert!((exact.min.x + 5.0).abs() < 1e-9);
    assert!(exact.min.y.abs() < 1e-9);
}

#[test]
fn test_bounds_unknown_for_opaque_evaluator() {
    use voronoi_sketch_designer::curve::curves_bounding_box;

    #[derive(Debug)]
    struct Opaque;

    impl CurveEvaluator for Opaque {
        fn start_point(&self) -> Point {
            Point::new(0.0, 0.0)
        }
        fn end_point(&self) -> Point {
            Point::new(1.0, 0.0)
        }
        fn length(&self) -> f64 {
            1.0
        }
        fn parameter_at_length(&self, length: f64) -> Option<f64> {
            Some(length)
        }
        fn point_at_parameter(&self, parameter: f64) -> Option<Point> {
            Some(Point::new(parameter, 0.0))
        }
    }

    let curves = vec![
        ProfileCurve::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
        ProfileCurve::curve(Opaque),
    ];
    assert_eq!(curves_bounding_box(&curves), None);
    assert_eq!(curves_bounding_box(&[]), None);
}
