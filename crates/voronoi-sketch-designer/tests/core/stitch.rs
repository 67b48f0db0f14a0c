use proptest::prelude::*;
use voronoi_sketch_core::{GeometryError, Point, DEFAULT_TOLERANCE};
use voronoi_sketch_designer::stitch::{stitch, StitchStatus};
use voronoi_sketch_designer::CurveFragment;

fn vertex(i: usize) -> Point {
    Point::new(i as f64 * 1.5, ((i * 7) % 11) as f64)
}

/// Edges of an n-gon, edge i running from vertex i to vertex i+1.
fn polygon_edges(n: usize) -> Vec<CurveFragment> {
    (0..n)
        .map(|i| CurveFragment::line(vertex(i), vertex((i + 1) % n)))
        .collect()
}

fn vertex_index(p: &Point, n: usize) -> usize {
    (0..n)
        .find(|&i| vertex(i).approx_eq(p, DEFAULT_TOLERANCE))
        .expect("point is a polygon vertex")
}

/// Vertex cycle rotated to start at vertex 0 and oriented towards the
/// smaller neighbour, so equivalent loops compare equal.
fn canonical_cycle(sequence: &[usize]) -> Vec<usize> {
    let n = sequence.len();
    let start = sequence.iter().position(|&v| v == 0).unwrap();
    let forward: Vec<usize> = (0..n).map(|k| sequence[(start + k) % n]).collect();
    let backward: Vec<usize> = (0..n).map(|k| sequence[(start + n - k) % n]).collect();
    if forward[1] <= backward[1] {
        forward
    } else {
        backward
    }
}

fn traced_cycle(fragments: &[CurveFragment], n: usize) -> Vec<usize> {
    let starts: Vec<usize> = fragments
        .iter()
        .map(|f| vertex_index(f.first().unwrap(), n))
        .collect();
    canonical_cycle(&starts)
}

fn shuffled_polygon() -> impl Strategy<Value = (usize, Vec<usize>, Vec<bool>)> {
    (3usize..12).prop_flat_map(|n| {
        (
            Just(n),
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
            proptest::collection::vec(any::<bool>(), n),
        )
    })
}

proptest! {
    #[test]
    fn closed_loop_covers_every_fragment_once((n, order, _flips) in shuffled_polygon()) {
        let edges = polygon_edges(n);
        let input: Vec<CurveFragment> = order.iter().map(|&i| edges[i].clone()).collect();

        let stitched = stitch(&input, DEFAULT_TOLERANCE).unwrap();
        prop_assert_eq!(stitched.status(), StitchStatus::Closed);
        prop_assert_eq!(stitched.len(), n);

        let mut sources: Vec<usize> = stitched.entries().iter().map(|e| e.source_index).collect();
        sources.sort_unstable();
        prop_assert_eq!(sources, (0..n).collect::<Vec<usize>>());

        for pair in stitched.fragments().windows(2) {
            prop_assert!(pair[0].last().unwrap().approx_eq(pair[1].first().unwrap(), DEFAULT_TOLERANCE));
        }
    }

    #[test]
    fn reversing_inputs_traces_the_same_loop((n, order, flips) in shuffled_polygon()) {
        let edges = polygon_edges(n);
        let plain: Vec<CurveFragment> = order.iter().map(|&i| edges[i].clone()).collect();
        let flipped: Vec<CurveFragment> = plain
            .iter()
            .zip(&flips)
            .map(|(f, &flip)| if flip { f.reversed() } else { f.clone() })
            .collect();

        let a = stitch(&plain, DEFAULT_TOLERANCE).unwrap();
        let b = stitch(&flipped, DEFAULT_TOLERANCE).unwrap();
        prop_assert!(b.is_closed());
        prop_assert_eq!(traced_cycle(a.fragments(), n), traced_cycle(b.fragments(), n));
    }

    #[test]
    fn gaps_never_drop_fragments((n, order, _flips) in shuffled_polygon()) {
        // Removing one edge opens the polygon; a stray far-away segment can never attach.
        let mut input: Vec<CurveFragment> = order.iter().skip(1).map(|&i| polygon_edges(n)[i].clone()).collect();
        input.push(CurveFragment::line(Point::new(-100.0, -100.0), Point::new(-101.0, -100.0)));

        let stitched = stitch(&input, DEFAULT_TOLERANCE).unwrap();
        prop_assert!(stitched.is_partial());
        prop_assert_eq!(stitched.len(), input.len());
    }
}

#[test]
fn test_degenerate_input_rejected() {
    let input = vec![CurveFragment::new(vec![Point::new(0.0, 0.0)])];
    assert_eq!(
        stitch(&input, DEFAULT_TOLERANCE),
        Err(GeometryError::DegenerateFragment {
            index: 0,
            points: 1
        })
    );
    assert_eq!(stitch(&[], DEFAULT_TOLERANCE), Err(GeometryError::EmptyInput));
}

#[test]
fn test_sampled_curve_closes_with_lines() {
    use std::f64::consts::PI;
    use voronoi_sketch_designer::curve::{sample_curves, CurveSegment, ProfileCurve};

    // Rounded slot: arc across the top, three straight sides, supplied out of order.
    let curves = vec![
        ProfileCurve::line(Point::new(2.54, 7.62), Point::new(2.54, 2.54)),
        ProfileCurve::line(Point::new(12.7, 2.54), Point::new(12.7, 7.62)),
        ProfileCurve::segment(CurveSegment::circular_arc(
            Point::new(7.62, 7.62),
            5.08,
            0.0,
            PI,
        )),
        ProfileCurve::line(Point::new(2.54, 2.54), Point::new(12.7, 2.54)),
    ];

    let fragments = sample_curves(&curves, 2.0).unwrap();
    let stitched = stitch(&fragments, 1e-6).unwrap();
    assert!(stitched.is_closed());
    assert_eq!(stitched.len(), 4);

    let bbox = stitched.bounding_box().unwrap();
    assert!((bbox.max.y - 12.7).abs() < 1e-3);
    assert!((bbox.min.x - 2.54).abs() < 1e-9);
}
