//! Catmull-Rom spline chains.
//!
//! A uniform Catmull-Rom spline interpolates every control point, with
//! tangents derived from neighboring points. Missing neighbours at the chain
//! ends are substituted: the first point stands in for its own predecessor,
//! and the neighbour past the end is the last point reflected through its
//! successor.
//!
//! # Example
//!
//! ```
//! use sliderpath::{Point2, curves::CatmullRom2};
//!
//! let spline = CatmullRom2::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(2.0, 0.5),
//! ]);
//!
//! let polyline = spline.to_polyline(50);
//! assert_eq!(polyline.first().unwrap().x, 0.0);
//! assert_eq!(polyline.last().unwrap().x, 2.0);
//! ```

use crate::primitives::Point2;
use num_traits::Float;

/// A uniform Catmull-Rom spline through a chain of points.
#[derive(Debug, Clone, PartialEq)]
pub struct CatmullRom2<F> {
    /// Control points the spline passes through.
    pub points: Vec<Point2<F>>,
}

impl<F: Float> CatmullRom2<F> {
    /// Creates a new spline. Any number of points is accepted; fewer than
    /// two simply produce an empty polyline.
    #[inline]
    pub fn new(points: Vec<Point2<F>>) -> Self {
        Self { points }
    }

    /// Converts the spline to a polyline with `detail` steps per segment.
    ///
    /// Every step contributes its entry and exit sample, so each interior
    /// sample appears twice in the output. Callers that want a clean
    /// polyline drop exact consecutive duplicates; the doubled samples are
    /// bitwise equal, so the cleanup is lossless.
    pub fn to_polyline(&self, detail: usize) -> Vec<Point2<F>> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }

        let detail_f = F::from(detail).unwrap();
        let mut result = Vec::with_capacity((n - 1) * detail * 2);

        for i in 0..n - 1 {
            let v1 = if i > 0 { self.points[i - 1] } else { self.points[i] };
            let v2 = self.points[i];
            let v3 = self.points[i + 1];
            let v4 = if i + 2 < n {
                self.points[i + 2]
            } else {
                Point2::new(v3.x + v3.x - v2.x, v3.y + v3.y - v2.y)
            };

            for c in 0..detail {
                result.push(segment_point(v1, v2, v3, v4, F::from(c).unwrap() / detail_f));
                result.push(segment_point(
                    v1,
                    v2,
                    v3,
                    v4,
                    F::from(c + 1).unwrap() / detail_f,
                ));
            }
        }

        result
    }
}

/// Evaluates one uniform Catmull-Rom segment at parameter `t` (0 to 1).
///
/// The segment runs from `p1` to `p2`; `p0` and `p3` shape the tangents.
fn segment_point<F: Float>(
    p0: Point2<F>,
    p1: Point2<F>,
    p2: Point2<F>,
    p3: Point2<F>,
    t: F,
) -> Point2<F> {
    let t2 = t * t;
    let t3 = t2 * t;

    let half = F::from(0.5).unwrap();
    let two = F::from(2.0).unwrap();
    let three = F::from(3.0).unwrap();
    let four = F::from(4.0).unwrap();
    let five = F::from(5.0).unwrap();

    let x = half
        * ((two * p1.x)
            + (-p0.x + p2.x) * t
            + (two * p0.x - five * p1.x + four * p2.x - p3.x) * t2
            + (-p0.x + three * p1.x - three * p2.x + p3.x) * t3);

    let y = half
        * ((two * p1.y)
            + (-p0.y + p2.y) * t
            + (two * p0.y - five * p1.y + four * p2.y - p3.y) * t2
            + (-p0.y + three * p1.y - three * p2.y + p3.y) * t3);

    Point2::new(x, y)
}
