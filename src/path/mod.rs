//! Slider paths: composite curves resolved to a beat-snapped arc length.
//!
//! A slider is authored as a sparse sequence of control points plus a curve
//! kind. Turning that into a playable shape takes three steps:
//!
//! 1. The control points are split into runs at exact consecutive
//!    duplicates (repeating a point is the authoring gesture for a sharp
//!    corner between independently curved sections).
//! 2. Each run is approximated into a dense polyline and the runs are
//!    joined, skipping vertices equal to their predecessor.
//! 3. The joined polyline is resolved against a target arc length, either
//!    given explicitly or derived from the raw length by snapping it to the
//!    beat grid, and queried by normalized progress.
//!
//! Every query recomputes from the control points, so the authored fields
//! can be edited freely between calls and no state ever goes stale.

mod resolved;
mod snap;

pub use resolved::ResolvedPath;
pub use snap::SnapSettings;

use crate::curves::{Bezier2, CatmullRom2, CircularArc2};
use crate::error::ParseError;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Maximum deviation when flattening Bézier runs.
pub const BEZIER_TOLERANCE: f64 = 0.25;
/// Maximum deviation when flattening circular arcs.
pub const CIRCULAR_ARC_TOLERANCE: f64 = 0.1;
/// Steps per segment when flattening Catmull-Rom runs.
pub const CATMULL_DETAIL: usize = 50;

/// How a slider's control points are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    /// Control points joined by straight lines.
    Linear,
    /// A circular arc through exactly three points.
    PerfectCurve,
    /// A Catmull-Rom chain through the control points.
    Catmull,
    /// A Bézier curve over the control points.
    Bezier,
}

impl CurveKind {
    /// The single-letter code used in beatmap lines.
    pub fn letter(self) -> char {
        match self {
            CurveKind::Linear => 'L',
            CurveKind::PerfectCurve => 'P',
            CurveKind::Catmull => 'C',
            CurveKind::Bezier => 'B',
        }
    }
}

impl Default for CurveKind {
    fn default() -> Self {
        CurveKind::PerfectCurve
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for CurveKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        match s {
            "L" => Ok(CurveKind::Linear),
            "P" => Ok(CurveKind::PerfectCurve),
            "C" => Ok(CurveKind::Catmull),
            "B" => Ok(CurveKind::Bezier),
            other => Err(ParseError::UnknownCurveKind(other.to_string())),
        }
    }
}

/// A slider's authored geometry plus the settings that fix its length.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPath<F> {
    /// Authored control points. The first one is the slider's position.
    pub control_points: Vec<Point2<F>>,
    /// Interpretation of the control points.
    pub kind: CurveKind,
    /// Externally required arc length. `None` derives the length from the
    /// approximated polyline via `snap`.
    pub expected_length: Option<F>,
    /// Beat-snap settings, consulted when `expected_length` is `None`.
    pub snap: SnapSettings<F>,
}

impl<F: Float> SliderPath<F> {
    /// Creates a path with no expected length and default snap settings.
    pub fn new(control_points: Vec<Point2<F>>, kind: CurveKind) -> Self {
        Self {
            control_points,
            kind,
            expected_length: None,
            snap: SnapSettings::default(),
        }
    }

    /// Creates a path whose length is pinned to `expected_length`.
    pub fn with_expected_length(
        control_points: Vec<Point2<F>>,
        kind: CurveKind,
        expected_length: F,
    ) -> Self {
        Self {
            control_points,
            kind,
            expected_length: Some(expected_length),
            snap: SnapSettings::default(),
        }
    }

    /// Approximates the control points into a dense polyline.
    ///
    /// Runs are delimited by exact consecutive duplicates; each run is
    /// approximated on its own and the outputs are joined, skipping any
    /// vertex equal to the one before it. The result has no consecutive
    /// duplicates.
    pub fn raw_polyline(&self) -> Vec<Point2<F>> {
        let n = self.control_points.len();
        let mut polyline: Vec<Point2<F>> = Vec::new();

        let mut start = 0;
        for i in 0..n {
            if i != n - 1 && self.control_points[i] != self.control_points[i + 1] {
                continue;
            }

            for p in self.approximate_run(&self.control_points[start..=i]) {
                if polyline.last() != Some(&p) {
                    polyline.push(p);
                }
            }
            start = i + 1;
        }

        polyline
    }

    /// Approximates a single run of control points according to `kind`.
    ///
    /// A perfect-curve run is only honored when both the whole sequence and
    /// the run consist of exactly three points; anything else, and any arc
    /// the fitter rejects (coincident or collinear points), degrades to a
    /// Bézier over the same run.
    fn approximate_run(&self, run: &[Point2<F>]) -> Vec<Point2<F>> {
        match self.kind {
            CurveKind::Linear => return run.to_vec(),
            CurveKind::PerfectCurve if self.control_points.len() == 3 && run.len() == 3 => {
                if let Some(arc) = CircularArc2::from_three_points(run[0], run[1], run[2]) {
                    return arc.to_polyline(F::from(CIRCULAR_ARC_TOLERANCE).unwrap());
                }
            }
            CurveKind::Catmull => {
                return CatmullRom2::new(run.to_vec()).to_polyline(CATMULL_DETAIL)
            }
            _ => {}
        }
        Bezier2::new(run.to_vec()).to_polyline(F::from(BEZIER_TOLERANCE).unwrap())
    }

    /// Resolves the path for querying: approximates the polyline, fixes the
    /// target length (expected, or raw length snapped to the beat grid),
    /// and builds the arc-length table.
    pub fn resolve(&self) -> ResolvedPath<F> {
        let vertices = self.raw_polyline();
        let target = match self.expected_length {
            Some(length) => length,
            None => self.snap.snap_length(polyline_length(&vertices)),
        };
        ResolvedPath::new(vertices, target)
    }

    /// The resolved arc length of the path.
    pub fn length(&self) -> F {
        self.resolve().length()
    }

    /// The point at normalized progress (0 = start, 1 = end) along the path.
    pub fn position_at(&self, progress: F) -> Point2<F> {
        self.resolve().position_at(progress)
    }

    /// The playable polyline from progress 0 to 1.
    pub fn path(&self) -> Vec<Point2<F>> {
        self.resolve().path()
    }
}

/// Total length of a polyline.
pub fn polyline_length<F: Float>(points: &[Point2<F>]) -> F {
    let mut length = F::zero();
    for i in 1..points.len() {
        length = length + (points[i] - points[i - 1]).magnitude();
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_curve_kind() {
        assert_eq!(CurveKind::default(), CurveKind::PerfectCurve);
    }

    #[test]
    fn test_curve_kind_letters_round_trip() {
        for kind in [
            CurveKind::Linear,
            CurveKind::PerfectCurve,
            CurveKind::Catmull,
            CurveKind::Bezier,
        ] {
            let parsed: CurveKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("X".parse::<CurveKind>().is_err());
    }

    #[test]
    fn test_linear_keeps_control_points_verbatim() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 10.0),
            Point2::new(100.0, 0.0),
        ];
        let path: SliderPath<f64> = SliderPath::new(points.clone(), CurveKind::Linear);
        assert_eq!(path.raw_polyline(), points);
    }

    #[test]
    fn test_duplicate_control_point_splits_runs() {
        let p0 = Point2::new(0.0, 0.0);
        let p1 = Point2::new(50.0, 50.0);
        let p2 = Point2::new(100.0, 0.0);
        let path: SliderPath<f64> =
            SliderPath::new(vec![p0, p1, p1, p2], CurveKind::Bezier);

        // Two 2-point runs, each a straight segment; the shared corner
        // vertex appears once.
        assert_eq!(path.raw_polyline(), vec![p0, p1, p2]);
    }

    #[test]
    fn test_perfect_curve_matches_arc_fit() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(50.0, 50.0);
        let c = Point2::new(100.0, 0.0);
        let path: SliderPath<f64> = SliderPath::new(vec![a, b, c], CurveKind::PerfectCurve);

        let arc = CircularArc2::from_three_points(a, b, c).unwrap();
        assert_eq!(path.raw_polyline(), arc.to_polyline(CIRCULAR_ARC_TOLERANCE));
    }

    #[test]
    fn test_perfect_curve_with_four_points_degrades_to_bezier() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 60.0),
            Point2::new(70.0, 60.0),
            Point2::new(100.0, 0.0),
        ];
        let path: SliderPath<f64> =
            SliderPath::new(points.clone(), CurveKind::PerfectCurve);

        let bezier = Bezier2::new(points).to_polyline(BEZIER_TOLERANCE);
        assert_eq!(path.raw_polyline(), bezier);
    }

    #[test]
    fn test_perfect_curve_collinear_degrades_to_bezier() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(50.0, 0.0),
            Point2::new(100.0, 0.0),
        ];
        let path: SliderPath<f64> =
            SliderPath::new(points.clone(), CurveKind::PerfectCurve);

        let bezier = Bezier2::new(points).to_polyline(BEZIER_TOLERANCE);
        assert_eq!(path.raw_polyline(), bezier);
    }

    #[test]
    fn test_catmull_run_collapses_doubled_samples() {
        let path: SliderPath<f64> = SliderPath::new(
            vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)],
            CurveKind::Catmull,
        );

        // One segment: 50 entry/exit pairs collapse to 51 distinct samples.
        assert_eq!(path.raw_polyline().len(), CATMULL_DETAIL + 1);
    }

    #[test]
    fn test_cumulative_lengths_are_monotonic() {
        let path: SliderPath<f64> = SliderPath::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(80.0, 120.0),
                Point2::new(160.0, 0.0),
            ],
            CurveKind::Bezier,
        );

        let resolved = path.resolve();
        let cumulative = resolved.cumulative_lengths();
        assert_eq!(cumulative[0], 0.0);
        for w in cumulative.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn test_progress_endpoints_match_path_endpoints() {
        let path: SliderPath<f64> = SliderPath::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(60.0, 90.0),
                Point2::new(120.0, 0.0),
            ],
            CurveKind::Bezier,
        );

        let resolved = path.resolve();
        let polyline = resolved.path();

        let start = resolved.position_at(0.0);
        assert_relative_eq!(start.x, polyline[0].x, epsilon = 1e-9);
        assert_relative_eq!(start.y, polyline[0].y, epsilon = 1e-9);

        let end = resolved.position_at(1.0);
        let last = polyline.last().unwrap();
        assert_relative_eq!(end.x, last.x, epsilon = 1e-9);
        assert_relative_eq!(end.y, last.y, epsilon = 1e-9);
    }

    #[test]
    fn test_default_snap_quantizes_length() {
        let path: SliderPath<f32> = SliderPath::new(
            vec![Point2::new(0.0, 0.0), Point2::new(150.0, 0.0)],
            CurveKind::Linear,
        );

        // Raw length 150 snaps down to 140 on the default 35-unit grid.
        assert_eq!(path.length(), 140.0);
        let end = path.position_at(1.0);
        assert_relative_eq!(end.x, 140.0, epsilon = 1e-3);
        assert_relative_eq!(end.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_expected_length_extends_path() {
        let path: SliderPath<f64> = SliderPath::with_expected_length(
            vec![Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)],
            CurveKind::Linear,
            200.0,
        );

        assert_eq!(path.position_at(1.0), Point2::new(200.0, 0.0));
    }

    #[test]
    fn test_empty_and_degenerate_inputs() {
        let empty: SliderPath<f64> = SliderPath::new(vec![], CurveKind::Bezier);
        assert_eq!(empty.position_at(0.5), Point2::origin());
        assert_eq!(empty.length(), 0.0);

        let p = Point2::new(30.0, 40.0);
        let stacked: SliderPath<f64> = SliderPath::new(vec![p, p], CurveKind::Bezier);
        assert_eq!(stacked.position_at(1.0), p);
        assert_eq!(stacked.path().len(), 2);
    }

    #[test]
    fn test_polyline_length() {
        let points = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 16.0),
        ];
        let length: f64 = polyline_length(&points);
        assert_relative_eq!(length, 17.0, epsilon = 1e-12);
    }
}
