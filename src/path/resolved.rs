//! Arc-length parametrised polylines.

use crate::primitives::Point2;
use crate::tolerance::{almost_equal, FLOAT_EPSILON};
use num_traits::Float;

/// A polyline with its arc-length table, fixed to a target length.
///
/// Construction computes everything up front; queries are read-only and
/// never mutate the path, so a resolved path can be shared freely.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath<F> {
    vertices: Vec<Point2<F>>,
    cumulative: Vec<F>,
    length: F,
}

impl<F: Float> ResolvedPath<F> {
    /// Builds the arc-length table for `vertices` and fixes the total length
    /// to `target_length`.
    ///
    /// When the polyline falls short of the target and has at least two
    /// vertices, the last vertex slides outward along the final segment's
    /// direction until the total matches, and its table entry becomes
    /// exactly `target_length`. A degenerate final segment (zero direction)
    /// leaves the path short instead. A polyline longer than the target
    /// keeps all its vertices; queries simply never walk past the target.
    pub fn new(mut vertices: Vec<Point2<F>>, target_length: F) -> Self {
        let mut cumulative = Vec::with_capacity(vertices.len());
        let mut l = F::zero();
        if !vertices.is_empty() {
            cumulative.push(l);
        }
        for i in 1..vertices.len() {
            l = l + (vertices[i] - vertices[i - 1]).magnitude();
            cumulative.push(l);
        }

        if l < target_length && vertices.len() >= 2 {
            let last = vertices.len() - 1;
            let diff = vertices[last] - vertices[last - 1];
            let d = diff.magnitude();
            if d > F::zero() {
                vertices[last] = vertices[last] + diff * ((target_length - l) / d);
                cumulative[last] = target_length;
            }
        }

        Self {
            vertices,
            cumulative,
            length: target_length,
        }
    }

    /// The polyline vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point2<F>] {
        &self.vertices
    }

    /// Arc length from the start to each vertex; parallel to [`vertices`].
    ///
    /// [`vertices`]: ResolvedPath::vertices
    #[inline]
    pub fn cumulative_lengths(&self) -> &[F] {
        &self.cumulative
    }

    /// The fixed total length of the path.
    #[inline]
    pub fn length(&self) -> F {
        self.length
    }

    /// Maps normalized progress to a distance along the path.
    ///
    /// Progress is clamped to `0..=1` before scaling.
    #[inline]
    pub fn progress_to_length(&self, progress: F) -> F {
        progress.max(F::zero()).min(F::one()) * self.length
    }

    /// First vertex index whose cumulative length reaches `d`.
    fn index_of_length(&self, d: F) -> usize {
        self.cumulative.partition_point(|&c| c < d)
    }

    /// The point at normalized progress (0 = start, 1 = end) along the path.
    ///
    /// An empty path answers every query with the origin.
    pub fn position_at(&self, progress: F) -> Point2<F> {
        let d = self.progress_to_length(progress);
        self.interpolate_vertices(self.index_of_length(d), d)
    }

    /// Linearly interpolates the position at distance `d` inside the segment
    /// ending at vertex `i`.
    fn interpolate_vertices(&self, i: usize, d: F) -> Point2<F> {
        if self.vertices.is_empty() {
            return Point2::origin();
        }
        if i == 0 {
            return self.vertices[0];
        }
        if i >= self.vertices.len() {
            return self.vertices[self.vertices.len() - 1];
        }

        let p0 = self.vertices[i - 1];
        let p1 = self.vertices[i];
        let d0 = self.cumulative[i - 1];
        let d1 = self.cumulative[i];

        // Guard the weight against (near-)identical table entries.
        if almost_equal(d0, d1, F::from(FLOAT_EPSILON).unwrap()) {
            return p0;
        }

        let w = (d - d0) / (d1 - d0);
        p0 + (p1 - p0) * w
    }

    /// The sub-polyline between two normalized progress values.
    ///
    /// Both boundary points are interpolated exactly; interior vertices are
    /// passed through untouched. Exact consecutive duplicates at the seams
    /// are collapsed, but the result never shrinks below two points.
    pub fn path_between(&self, start_progress: F, end_progress: F) -> Vec<Point2<F>> {
        let d0 = self.progress_to_length(start_progress);
        let d1 = self.progress_to_length(end_progress);

        let mut path = Vec::new();
        let mut i = 0;
        while i < self.vertices.len() && self.cumulative[i] < d0 {
            i += 1;
        }
        path.push(self.interpolate_vertices(i, d0));

        while i < self.vertices.len() && self.cumulative[i] <= d1 {
            path.push(self.vertices[i]);
            i += 1;
        }
        path.push(self.interpolate_vertices(i, d1));

        let mut j = 0;
        while j + 1 < path.len() && path.len() > 2 {
            if path[j] == path[j + 1] {
                path.remove(j);
            } else {
                j += 1;
            }
        }
        path
    }

    /// The whole path as a polyline, from progress 0 to 1.
    pub fn path(&self) -> Vec<Point2<F>> {
        self.path_between(F::zero(), F::one())
    }
}
