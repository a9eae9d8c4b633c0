//! Fitting a smooth path through ordered points.

use alloc::vec::Vec;

use tinyvec::TinyVec;

use crate::curve::Curve;
use crate::error::PathError;
use crate::path::Path;
use crate::point::Point;

/// Build a smooth path through `points`.
///
/// The first point is the start. Each interior point becomes the control point of a curve that
/// ends halfway to the following point, and the last curve runs through the second-to-last
/// point to end exactly on the last one. `n` points therefore give `n - 2` curves.
///
/// Needs at least 3 finite points.
///
/// # Examples
/// ```rust
/// use smoothpath::{build_path, PathError, Point};
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let path = build_path(&points).unwrap();
/// assert_eq!(path.len(), points.len() - 2);
/// assert_eq!(path.curves()[0].end(), Point::new(10.0, 5.0));
///
/// assert_eq!(
///     build_path(&points[..2]),
///     Err(PathError::TooFewPoints { count: 2 })
/// );
/// ```
pub fn build_path(points: &[Point]) -> Result<Path, PathError> {
    if points.len() < 3 {
        return Err(PathError::TooFewPoints {
            count: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(PathError::NonFinitePoint { index });
    }

    let last = points.len() - 1;
    let mut curves: TinyVec<[Curve; 8]> = TinyVec::with_capacity(points.len() - 2);
    let mut cursor = points[0];
    // every interior point except the second-to-last one: control point, then halfway to the next
    for pair in points[1..last].windows(2) {
        let mid = pair[0].midpoint(pair[1]);
        curves.push(Curve::new(cursor, pair[0], mid));
        cursor = mid;
    }
    curves.push(Curve::new(cursor, points[last - 1], points[last]));

    Path::new(points[0], curves)
}

/// Collects points one by one and builds a [`Path`] through them.
///
/// ```rust
/// use smoothpath::{PathBuilder, Point};
///
/// let mut builder = PathBuilder::new();
/// builder.push((0.0, 0.0));
/// builder.push((5.0, 5.0));
/// builder.push((10.0, 0.0));
/// let path = builder.build().unwrap();
/// assert_eq!(path.point_at_percentage(100), Some(Point::new(10.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathBuilder {
    points: Vec<Point>,
}

impl PathBuilder {
    pub fn new() -> Self {
        PathBuilder { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PathBuilder {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point to the end of the path.
    pub fn push<P: Into<Point>>(&mut self, point: P) -> &mut Self {
        self.points.push(point.into());
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Build the path through all points pushed so far, see [`build_path`].
    pub fn build(&self) -> Result<Path, PathError> {
        build_path(&self.points)
    }
}

impl Extend<Point> for PathBuilder {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point> for PathBuilder {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PathBuilder {
            points: iter.into_iter().collect(),
        }
    }
}
