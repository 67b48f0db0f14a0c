use voronoi_sketch_core::{Point, DEFAULT_TOLERANCE};
use voronoi_sketch_designer::profile::{parse_profile, profile_paths, to_profile_json};
use voronoi_sketch_designer::{stitch, CurveFragment};

const SLOT_PROFILE: &str = r#"[[{"x":"2.54","y":"7.62"}, {"x":"2.54","y":"2.54"}], [{"x":"12.7","y":"7.62"}, {"x":"7.62","y":"12.7"}, {"x":"2.54","y":"7.62"}], [{"x":"2.54","y":"2.54"}, {"x":"12.7","y":"2.54"}], [{"x":"12.7","y":"2.54"}, {"x":"12.7","y":"7.62"}]]"#;

#[test]
fn test_editor_profile_stitches_closed() {
    let fragments = parse_profile(SLOT_PROFILE).unwrap();
    assert_eq!(fragments.len(), 4);

    let stitched = stitch(&fragments, DEFAULT_TOLERANCE).unwrap();
    assert!(stitched.is_closed());

    let bbox = stitched.bounding_box().unwrap();
    assert_eq!(bbox.min, Point::new(2.54, 2.54));
    assert_eq!(bbox.max, Point::new(12.7, 12.7));
}

#[test]
fn test_profile_json_uses_significant_digits() {
    let fragments = vec![
        CurveFragment::line(Point::new(1.0 / 3.0, 2.0), Point::new(12.70001, 7.6199)),
        CurveFragment::line(Point::new(12.70001, 7.6199), Point::new(1.0 / 3.0, 2.0)),
    ];
    let stitched = stitch(&fragments, DEFAULT_TOLERANCE).unwrap();
    let json = to_profile_json(&stitched, 4).unwrap();
    assert_eq!(
        json,
        r#"[[{"x":"0.3333","y":"2"},{"x":"12.7","y":"7.62"}],[{"x":"12.7","y":"7.62"},{"x":"0.3333","y":"2"}]]"#
    );
}

#[test]
fn test_profile_paths_round_trip_within_precision() {
    let fragments = vec![CurveFragment::line(
        Point::new(3.14159, -2.71828),
        Point::new(100.25, 0.0),
    )];
    let paths = profile_paths(&fragments, 6);
    let json = serde_json::to_string(&paths).unwrap();
    let parsed = parse_profile(&json).unwrap();
    assert!(parsed[0].points()[0].approx_eq(&Point::new(3.14159, -2.71828), 1e-9));
    assert_eq!(parsed[0].points()[1], Point::new(100.25, 0.0));
}
