//! Circular arcs fitted through three points.
//!
//! The fit places a circle through start, interior, and end points, then
//! walks the circle from start to end through the interior point. Input
//! triples that define no usable circle (coincident or collinear points)
//! yield no arc rather than a garbage one.

use crate::primitives::Point2;
use crate::tolerance::{almost_zero, FLOAT_EPSILON};
use num_traits::Float;

/// A 2D circular arc defined by center, radius, start angle, and sweep.
///
/// Angles are in radians, measured counter-clockwise from the positive
/// x-axis. `sweep` is signed: negative sweeps run clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularArc2<F> {
    /// Center of the arc's circle.
    pub center: Point2<F>,
    /// Radius of the arc.
    pub radius: F,
    /// Angle of the start point in radians.
    pub start_angle: F,
    /// Signed angular extent of the arc in radians.
    pub sweep: F,
}

impl<F: Float> CircularArc2<F> {
    /// Fits an arc through three points, running from `a` to `c` through `b`.
    ///
    /// Returns `None` when two of the points (nearly) coincide or the three
    /// are (nearly) collinear, judged against [`FLOAT_EPSILON`].
    pub fn from_three_points(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Option<Self> {
        let eps = F::from(FLOAT_EPSILON).unwrap();

        let a_sq = (b - c).magnitude_squared();
        let b_sq = (a - c).magnitude_squared();
        let c_sq = (a - b).magnitude_squared();

        if almost_zero(a_sq, eps) || almost_zero(b_sq, eps) || almost_zero(c_sq, eps) {
            return None;
        }

        // Barycentric circumcenter; the weights vanish together exactly when
        // the points are collinear.
        let s = a_sq * (b_sq + c_sq - a_sq);
        let t = b_sq * (a_sq + c_sq - b_sq);
        let u = c_sq * (a_sq + b_sq - c_sq);
        let sum = s + t + u;

        if almost_zero(sum, eps) {
            return None;
        }

        let center = Point2::new(
            (s * a.x + t * b.x + u * c.x) / sum,
            (s * a.y + t * b.y + u * c.y) / sum,
        );
        let radius = a.distance(center);

        let start_angle = (a.y - center.y).atan2(a.x - center.x);
        let mut end_angle = (c.y - center.y).atan2(c.x - center.x);

        let two_pi = F::from(2.0 * std::f64::consts::PI).unwrap();
        while end_angle < start_angle {
            end_angle = end_angle + two_pi;
        }

        let mut range = end_angle - start_angle;
        let mut dir = F::one();

        // b decides which of the two arcs between a and c is meant.
        if (c - a).cross(b - a) > F::zero() {
            dir = -dir;
            range = two_pi - range;
        }

        Some(Self {
            center,
            radius,
            start_angle,
            sweep: dir * range,
        })
    }

    /// Evaluates the arc at parameter `t` (0 = start, 1 = end).
    #[inline]
    pub fn eval(&self, t: F) -> Point2<F> {
        let theta = self.start_angle + self.sweep * t;
        Point2::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y + self.radius * theta.sin(),
        )
    }

    /// Returns the start point of the arc.
    #[inline]
    pub fn start_point(&self) -> Point2<F> {
        self.eval(F::zero())
    }

    /// Returns the end point of the arc.
    #[inline]
    pub fn end_point(&self) -> Point2<F> {
        self.eval(F::one())
    }

    /// Returns the arc length.
    #[inline]
    pub fn arc_length(&self) -> F {
        self.radius * self.sweep.abs()
    }

    /// Converts the arc to a polyline of evenly spaced angular samples.
    ///
    /// # Arguments
    ///
    /// * `tolerance` - Maximum allowed deviation from the true arc.
    ///
    /// # Returns
    ///
    /// At least two points, from the start point to the end point.
    pub fn to_polyline(&self, tolerance: F) -> Vec<Point2<F>> {
        let amount = self.point_count(tolerance);

        let mut points = Vec::with_capacity(amount);
        let last = F::from(amount - 1).unwrap();
        for i in 0..amount {
            let fract = F::from(i).unwrap() / last;
            points.push(self.eval(fract));
        }
        points
    }

    /// Number of samples so each step stays within the sagitta tolerance.
    /// The largest admissible step angle is 2·acos(1 - tolerance/radius).
    fn point_count(&self, tolerance: F) -> usize {
        let one = F::one();
        let two = one + one;

        if two * self.radius <= tolerance {
            return 2;
        }

        let max_angle = two * (one - tolerance / self.radius).acos();
        let n = (self.sweep.abs() / max_angle).ceil();
        n.to_usize().unwrap_or(2).max(2)
    }
}
