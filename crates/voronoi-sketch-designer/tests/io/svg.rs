use voronoi_sketch_designer::svg::SvgArtifact;

#[test]
fn test_editor_export_pixels_become_centimeters() {
    // The editor publishes only the SVG; its size is in unitless pixels.
    let svg = r#"<?xml version="1.0"?><svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="960" height="600" stroke-width="0.1"><g><path d="M0,0 L1,1"/></g></svg>"#;
    let artifact = SvgArtifact::new(svg, None, None).unwrap();
    assert!((artifact.width - 25.4).abs() < 1e-9);
    assert!((artifact.height - 15.875).abs() < 1e-9);
}

#[test]
fn test_declared_centimeters_win_over_pixels() {
    let svg = r#"<svg width="960" height="600"></svg>"#;
    let artifact = SvgArtifact::new(svg, Some(25.1), Some(14.8)).unwrap();
    assert_eq!(artifact.width, 25.1);
    assert_eq!(artifact.height, 14.8);
}

#[test]
fn test_non_positive_declared_size_falls_back() {
    let artifact = SvgArtifact::new("<svg></svg>", Some(-3.0), Some(f64::NAN)).unwrap();
    assert_eq!(artifact.width, SvgArtifact::DEFAULT_WIDTH);
    assert_eq!(artifact.height, SvgArtifact::DEFAULT_HEIGHT);
}
