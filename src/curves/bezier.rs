//! Bézier curves of arbitrary degree.
//!
//! Provides evaluation and flattening to polylines via iterative midpoint
//! subdivision. A control polygon is subdivided until it is flat enough,
//! then emitted through a parabolic midpoint rule, so the output vertex
//! density adapts to curvature.

use crate::primitives::Point2;
use num_traits::Float;

/// A Bézier curve over an arbitrary number of control points.
///
/// Two control points give a line, three a quadratic, four a cubic, and so
/// on. The curve starts at the first control point and ends at the last.
#[derive(Debug, Clone, PartialEq)]
pub struct Bezier2<F> {
    /// Control points defining the curve.
    pub control_points: Vec<Point2<F>>,
}

impl<F: Float> Bezier2<F> {
    /// Creates a new Bézier curve. Any number of control points is accepted,
    /// including none.
    #[inline]
    pub fn new(control_points: Vec<Point2<F>>) -> Self {
        Self { control_points }
    }

    /// Returns the degree of the curve (number of control points minus one).
    #[inline]
    pub fn degree(&self) -> usize {
        self.control_points.len().saturating_sub(1)
    }

    /// Evaluates the curve at parameter `t` (0 to 1) with de Casteljau's
    /// algorithm.
    ///
    /// Returns the origin for an empty curve.
    pub fn eval(&self, t: F) -> Point2<F> {
        let n = self.control_points.len();
        if n == 0 {
            return Point2::origin();
        }

        let mut points = self.control_points.clone();
        for step in 1..n {
            for j in 0..n - step {
                points[j] = points[j].lerp(points[j + 1], t);
            }
        }
        points[0]
    }

    /// Converts the curve to a polyline.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Maximum allowed deviation from the true curve.
    ///
    /// # Returns
    ///
    /// A vector of points approximating the curve. A single control point
    /// yields that point twice (a zero-length curve still has distinct
    /// start and end samples); an empty curve yields an empty vector.
    ///
    /// # Example
    ///
    /// ```
    /// use sliderpath::{Point2, curves::Bezier2};
    ///
    /// let curve = Bezier2::new(vec![
    ///     Point2::new(0.0, 0.0),
    ///     Point2::new(1.0, 2.0),
    ///     Point2::new(3.0, 2.0),
    ///     Point2::new(4.0, 0.0),
    /// ]);
    ///
    /// let polyline = curve.to_polyline(0.25);
    /// assert_eq!(polyline.first().unwrap().x, 0.0);
    /// assert_eq!(polyline.last().unwrap().x, 4.0);
    /// ```
    pub fn to_polyline(&self, tolerance: F) -> Vec<Point2<F>> {
        let count = self.control_points.len();
        if count == 0 {
            return Vec::new();
        }

        let four = F::from(4.0).unwrap();
        let flat_sq = four * tolerance * tolerance;

        let mut output = Vec::new();

        // Depth-first flattening; the left half is pushed last so vertices
        // come out in curve order.
        let mut to_flatten = vec![self.control_points.clone()];
        while let Some(parent) = to_flatten.pop() {
            if is_flat_enough(&parent, flat_sq) {
                emit_flat(&parent, &mut output);
                continue;
            }

            let (left, right) = subdivide(&parent);
            to_flatten.push(right);
            to_flatten.push(left);
        }

        output.push(self.control_points[count - 1]);
        output
    }
}

/// A control polygon is flat enough when every second difference of its
/// points is small against the tolerance (`flat_sq` is 4·tolerance²).
fn is_flat_enough<F: Float>(points: &[Point2<F>], flat_sq: F) -> bool {
    let two = F::one() + F::one();
    for i in 1..points.len().saturating_sub(1) {
        let dx = points[i - 1].x - two * points[i].x + points[i + 1].x;
        let dy = points[i - 1].y - two * points[i].y + points[i + 1].y;
        if dx * dx + dy * dy > flat_sq {
            return false;
        }
    }
    true
}

/// Splits a control polygon at t = 0.5 into the control polygons of the two
/// curve halves (de Casteljau).
fn subdivide<F: Float>(points: &[Point2<F>]) -> (Vec<Point2<F>>, Vec<Point2<F>>) {
    let count = points.len();
    let mut midpoints = points.to_vec();
    let mut left = vec![Point2::origin(); count];
    let mut right = vec![Point2::origin(); count];

    for i in 0..count {
        left[i] = midpoints[0];
        right[count - i - 1] = midpoints[count - i - 1];
        for j in 0..count - i - 1 {
            midpoints[j] = midpoints[j].midpoint(midpoints[j + 1]);
        }
    }

    (left, right)
}

/// Emits a flat control polygon as curve samples.
///
/// The polygon is split once more and the interior points are drawn from a
/// weighted average of the halved polygon, which lands closer to the true
/// curve than the raw control points.
fn emit_flat<F: Float>(points: &[Point2<F>], output: &mut Vec<Point2<F>>) {
    let count = points.len();
    let (left, right) = subdivide(points);

    let mut merged = left;
    merged.extend_from_slice(&right[1..]);

    output.push(points[0]);

    let two = F::one() + F::one();
    let quarter = F::from(0.25).unwrap();
    for i in 1..count.saturating_sub(1) {
        let index = 2 * i;
        output.push(Point2::new(
            (merged[index - 1].x + two * merged[index].x + merged[index + 1].x) * quarter,
            (merged[index - 1].y + two * merged[index].y + merged[index + 1].y) * quarter,
        ));
    }
}
