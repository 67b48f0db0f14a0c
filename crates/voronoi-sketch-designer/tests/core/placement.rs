use voronoi_sketch_core::{BoundingBox, GeometryError, Point};
use voronoi_sketch_designer::placement::{
    compute_offset, OriginConvention, PlacementOffset, PlacementTarget,
};

#[test]
fn test_offset_lands_svg_origin_on_region_top_left() {
    let region = BoundingBox::new(Point::new(-4.0, 1.0), Point::new(6.0, 8.5));
    let offset = compute_offset(
        &PlacementTarget::Region(region),
        OriginConvention::TopLeftYDown,
        3.0,
    )
    .unwrap();
    assert_eq!(offset, PlacementOffset::new(-4.0, 8.5, 0.0));

    let moved = offset.apply(&Point::new(0.0, 0.0));
    assert_eq!(moved, Point::new(region.min.x, region.max.y));
}

#[test]
fn test_free_placement_ignores_width() {
    let offset =
        compute_offset(&PlacementTarget::Free, OriginConvention::default(), 7.25).unwrap();
    assert_eq!(offset.dx, 0.0);
    assert_eq!(offset.dy, 7.25);
    assert_eq!(offset.dz, 0.0);
}

#[test]
fn test_infinite_min_rejected() {
    let target = PlacementTarget::region(Point::new(f64::NEG_INFINITY, 0.0), Point::new(1.0, 1.0));
    let err = compute_offset(&target, OriginConvention::TopLeftYDown, 1.0).unwrap_err();
    assert!(matches!(err, GeometryError::InvalidBounds { .. }));
}

#[test]
fn test_apply_all() {
    let offset = PlacementOffset::new(1.0, 2.0, 0.0);
    let moved = offset.apply_all(&[Point::new(0.0, 0.0), Point::new(1.0, -1.0)]);
    assert_eq!(moved, vec![Point::new(1.0, 2.0), Point::new(2.0, 1.0)]);
}
