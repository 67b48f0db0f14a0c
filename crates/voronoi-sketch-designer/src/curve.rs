//! # Profile Curves
//!
//! Converts the boundary curves of a profile into point fragments.
//!
//! A boundary curve is either a straight line, which contributes its two
//! endpoints, or a general curve, which is sampled at a fixed arc-length
//! step with its exact end point appended when the stride does not land
//! on it. General curves are evaluated through [`CurveEvaluator`], so the
//! host kernel can supply its own evaluator; [`ParametricCurve`] covers
//! arcs and Bézier segments locally using lyon.

use lyon::geom::{point, vector, Angle, Arc, CubicBezierSegment, QuadraticBezierSegment};
use serde::{Deserialize, Serialize};
use std::fmt;
use voronoi_sketch_core::{BoundingBox, GeometryError, Point, DEFAULT_TOLERANCE};

/// Arc-length step used when sampling general curves.
pub const DEFAULT_SAMPLE_STEP: f64 = 2.0;

/// Upper bound on samples taken from one curve; smaller steps are rejected.
pub const MAX_SAMPLES_PER_CURVE: usize = 100_000;

/// Subdivisions used to build the arc-length table of a [`ParametricCurve`].
const LENGTH_TABLE_SEGMENTS: usize = 128;

/// An ordered run of points approximating one boundary curve.
///
/// The first and last points are the curve's true endpoints. Point order
/// may or may not match the direction of the final stitched loop.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveFragment {
    points: Vec<Point>,
}

impl CurveFragment {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Straight segment between two endpoints.
    pub fn line(start: Point, end: Point) -> Self {
        Self::new(vec![start, end])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// Same fragment traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.points)
    }
}

impl From<Vec<Point>> for CurveFragment {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

/// Parametric evaluation of a general (non-line) boundary curve.
///
/// Mirrors the evaluator a CAD kernel exposes for its curves. Evaluation
/// may fail, in which case `None` is returned.
pub trait CurveEvaluator: fmt::Debug {
    /// Point at the start of the curve.
    fn start_point(&self) -> Point;

    /// Point at the end of the curve.
    fn end_point(&self) -> Point;

    /// Total arc length.
    fn length(&self) -> f64;

    /// Parameter reached after travelling `length` along the curve from its start.
    fn parameter_at_length(&self, length: f64) -> Option<f64>;

    /// Point on the curve at `parameter`.
    fn point_at_parameter(&self, parameter: f64) -> Option<Point>;

    /// Exact bounds, when the evaluator can compute them.
    fn bounding_box(&self) -> Option<BoundingBox> {
        None
    }
}

/// Curve geometry supported by [`ParametricCurve`].
#[derive(Debug, Clone, Copy)]
pub enum CurveSegment {
    Arc(Arc<f64>),
    Quadratic(QuadraticBezierSegment<f64>),
    Cubic(CubicBezierSegment<f64>),
}

impl CurveSegment {
    /// Circular arc around `center`, angles in radians, counter-clockwise sweep positive.
    pub fn circular_arc(center: Point, radius: f64, start_angle: f64, sweep_angle: f64) -> Self {
        Self::Arc(Arc {
            center: point(center.x, center.y),
            radii: vector(radius, radius),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: Angle::radians(0.0),
        })
    }

    /// Elliptical arc with radii along its own axes, rotated by `rotation` radians.
    pub fn elliptical_arc(
        center: Point,
        radii: (f64, f64),
        rotation: f64,
        start_angle: f64,
        sweep_angle: f64,
    ) -> Self {
        Self::Arc(Arc {
            center: point(center.x, center.y),
            radii: vector(radii.0, radii.1),
            start_angle: Angle::radians(start_angle),
            sweep_angle: Angle::radians(sweep_angle),
            x_rotation: Angle::radians(rotation),
        })
    }

    pub fn quadratic(from: Point, ctrl: Point, to: Point) -> Self {
        Self::Quadratic(QuadraticBezierSegment {
            from: point(from.x, from.y),
            ctrl: point(ctrl.x, ctrl.y),
            to: point(to.x, to.y),
        })
    }

    pub fn cubic(from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        Self::Cubic(CubicBezierSegment {
            from: point(from.x, from.y),
            ctrl1: point(ctrl1.x, ctrl1.y),
            ctrl2: point(ctrl2.x, ctrl2.y),
            to: point(to.x, to.y),
        })
    }

    /// Tight bounds, including arc and Bézier extremes between endpoints.
    pub fn bounding_box(&self) -> BoundingBox {
        let b = match self {
            Self::Arc(arc) => arc.bounding_box(),
            Self::Quadratic(q) => q.bounding_box(),
            Self::Cubic(c) => c.bounding_box(),
        };
        BoundingBox::new(Point::new(b.min.x, b.min.y), Point::new(b.max.x, b.max.y))
    }

    /// Point at `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> Point {
        let p = match self {
            Self::Arc(arc) => arc.sample(t),
            Self::Quadratic(q) => q.sample(t),
            Self::Cubic(c) => c.sample(t),
        };
        Point::new(p.x, p.y)
    }
}

/// A [`CurveSegment`] with a precomputed arc-length table.
///
/// Parameters run over `[0, 1]`. Length to parameter lookups interpolate
/// linearly between table entries.
#[derive(Debug, Clone)]
pub struct ParametricCurve {
    segment: CurveSegment,
    // (parameter, cumulative length), strictly increasing in parameter
    table: Vec<(f64, f64)>,
}

impl ParametricCurve {
    pub fn new(segment: CurveSegment) -> Self {
        let mut table = Vec::with_capacity(LENGTH_TABLE_SEGMENTS + 1);
        let mut previous = segment.sample(0.0);
        let mut travelled = 0.0;
        table.push((0.0, 0.0));
        for i in 1..=LENGTH_TABLE_SEGMENTS {
            let t = i as f64 / LENGTH_TABLE_SEGMENTS as f64;
            let current = segment.sample(t);
            travelled += previous.distance_to(&current);
            table.push((t, travelled));
            previous = current;
        }
        Self { segment, table }
    }

    pub fn segment(&self) -> &CurveSegment {
        &self.segment
    }
}

impl CurveEvaluator for ParametricCurve {
    fn start_point(&self) -> Point {
        self.segment.sample(0.0)
    }

    fn end_point(&self) -> Point {
        self.segment.sample(1.0)
    }

    fn length(&self) -> f64 {
        self.table.last().map_or(0.0, |&(_, len)| len)
    }

    fn parameter_at_length(&self, length: f64) -> Option<f64> {
        if !length.is_finite() {
            return None;
        }
        let total = self.length();
        if total <= 0.0 || length <= 0.0 {
            return Some(0.0);
        }
        if length >= total {
            return Some(1.0);
        }

        let idx = self.table.partition_point(|&(_, len)| len < length);
        let (t1, l1) = self.table[idx];
        let (t0, l0) = self.table[idx - 1];
        let span = l1 - l0;
        if span <= 0.0 {
            return Some(t1);
        }
        Some(t0 + (t1 - t0) * (length - l0) / span)
    }

    fn point_at_parameter(&self, parameter: f64) -> Option<Point> {
        if !parameter.is_finite() {
            return None;
        }
        Some(self.segment.sample(parameter.clamp(0.0, 1.0)))
    }

    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(self.segment.bounding_box())
    }
}

/// One boundary curve of a profile, classified the way the host reports it.
#[derive(Debug)]
pub enum ProfileCurve {
    /// Straight line between two points
    Line { start: Point, end: Point },
    /// Any other curve, evaluated parametrically
    Curve(Box<dyn CurveEvaluator>),
}

impl ProfileCurve {
    pub fn line(start: Point, end: Point) -> Self {
        Self::Line { start, end }
    }

    pub fn curve(evaluator: impl CurveEvaluator + 'static) -> Self {
        Self::Curve(Box::new(evaluator))
    }

    /// Convenience for the built-in lyon-backed evaluator.
    pub fn segment(segment: CurveSegment) -> Self {
        Self::curve(ParametricCurve::new(segment))
    }

    /// Exact bounds: the endpoints of a line, or whatever the evaluator reports.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Self::Line { start, end } => BoundingBox::from_points([*start, *end].iter()),
            Self::Curve(evaluator) => evaluator.bounding_box(),
        }
    }

    /// Sample this curve into a fragment.
    ///
    /// Lines yield exactly their two endpoints. Other curves are sampled
    /// every `step` length units from the start, and the exact end point is
    /// appended unless the last sample already coincides with it.
    pub fn to_fragment(&self, step: f64) -> Result<CurveFragment, GeometryError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(GeometryError::InvalidSampleStep { step });
        }

        let evaluator = match self {
            Self::Line { start, end } => return Ok(CurveFragment::line(*start, *end)),
            Self::Curve(evaluator) => evaluator,
        };

        let length = evaluator.length();
        if !length.is_finite() || length < 0.0 {
            return Err(GeometryError::InvalidCurve {
                reason: format!("curve length {} is not usable", length),
            });
        }

        let strides = length / step;
        if !strides.is_finite() || strides >= MAX_SAMPLES_PER_CURVE as f64 {
            return Err(GeometryError::InvalidSampleStep { step });
        }
        let strides = strides.floor() as usize;
        let mut points = Vec::with_capacity(strides + 2);
        for i in 0..=strides {
            let distance = i as f64 * step;
            let parameter = evaluator.parameter_at_length(distance).ok_or_else(|| {
                GeometryError::InvalidCurve {
                    reason: format!("no parameter at length {}", distance),
                }
            })?;
            let p = evaluator.point_at_parameter(parameter).ok_or_else(|| {
                GeometryError::InvalidCurve {
                    reason: format!("no point at parameter {}", parameter),
                }
            })?;
            points.push(p);
        }

        let end = evaluator.end_point();
        if points
            .last()
            .map_or(true, |last| !last.approx_eq(&end, DEFAULT_TOLERANCE))
        {
            points.push(end);
        }

        Ok(CurveFragment::new(points))
    }
}

/// Exact bounds of a profile boundary.
///
/// `None` when the list is empty or any curve's evaluator cannot report
/// exact bounds; callers then fall back to the sampled fragments.
pub fn curves_bounding_box(curves: &[ProfileCurve]) -> Option<BoundingBox> {
    let mut combined: Option<BoundingBox> = None;
    for curve in curves {
        let bounds = curve.bounding_box()?;
        combined = Some(combined.map_or(bounds, |acc| acc.union(&bounds)));
    }
    combined
}

/// Sample every curve of a profile boundary, preserving input order.
pub fn sample_curves(
    curves: &[ProfileCurve],
    step: f64,
) -> Result<Vec<CurveFragment>, GeometryError> {
    curves.iter().map(|c| c.to_fragment(step)).collect()
}
