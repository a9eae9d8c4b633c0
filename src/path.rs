//! A path of quadratic Bézier curves with a percentage lookup table.

use tinyvec::TinyVec;

use super::*;
use crate::curve::Curve;
use crate::error::PathError;
use crate::point::Point;
use crate::render::{self, DrawingSurface};

/// Number of whole-percentage steps in the lookup table; it holds one more entry than this
/// so that both 0 % and 100 % are included.
pub const LOOKUP_RESOLUTION: usize = 100;

/// An ordered sequence of quadratic curves starting at `start`.
///
/// On construction every curve is assigned its share of the total length as an integer
/// percentage, rounded up, and the point at each whole percentage `0..=100` is cached.
/// Because every share is rounded up on its own, the shares usually add up to a bit more
/// than 100.
///
/// # Examples
/// ```rust
/// use smoothpath::{Curve, Path, Point};
///
/// let path = Path::new(
///     Point::new(0.0, 0.0),
///     [
///         Curve::new(Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(10.0, 0.0)),
///         Curve::new(Point::new(10.0, 0.0), Point::new(15.0, 0.0), Point::new(20.0, 0.0)),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(path.segment_percentages(), &[50, 50]);
/// assert_eq!(path.point_at_percentage(25), Some(Point::new(5.0, 0.0)));
/// assert_eq!(path.compute_point_at_percentage(75.0), Some(Point::new(15.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    start: Point,
    curves: TinyVec<[Curve; 8]>,
    segment_percentages: TinyVec<[u32; 8]>,
    lookup: [Point; LOOKUP_RESOLUTION + 1],
}

impl Path {
    /// Create a path from its start point and curves, then fill the lookup table.
    /// Returns `PathError::EmptyPath` if there are no curves.
    pub fn new<I>(start: Point, curves: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = Curve>,
    {
        let curves: TinyVec<[Curve; 8]> = curves.into_iter().collect();
        if curves.is_empty() {
            return Err(PathError::EmptyPath);
        }
        let segment_percentages = segment_percentages(&curves);

        let mut path = Path {
            start,
            curves,
            segment_percentages,
            lookup: [start; LOOKUP_RESOLUTION + 1],
        };
        path.lookup = path.compute_lookup_table();

        log::debug!(
            "built path with {} curves, length {}, percentages {:?}",
            path.curves.len(),
            path.length(),
            path.segment_percentages.as_slice()
        );
        Ok(path)
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// End point of the last curve.
    pub fn end(&self) -> Point {
        self.curves.last().map(Curve::end).unwrap_or(self.start)
    }

    /// Return the number of curves.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Return true if the path has no curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Each curve's share of the total length in whole percent, rounded up.
    pub fn segment_percentages(&self) -> &[u32] {
        &self.segment_percentages
    }

    /// The cached points at 0 %, 1 %, ..., 100 %.
    pub fn lookup_table(&self) -> &[Point; LOOKUP_RESOLUTION + 1] {
        &self.lookup
    }

    /// Total arc length of all curves.
    pub fn length(&self) -> NativeFloat {
        self.curves.iter().map(Curve::length).sum()
    }

    /// Return the cached point at `percentage` (`0..=100`) in constant time.
    /// Returns None for percentages above 100.
    ///
    /// 100 % is always the end of the last curve.
    pub fn point_at_percentage(&self, percentage: u8) -> Option<Point> {
        self.lookup.get(usize::from(percentage)).copied()
    }

    /// Walk the curves until their accumulated percentages first reach `percentage` and
    /// evaluate that curve at the matching local parameter.
    ///
    /// A percentage exactly on the boundary between two curves belongs to the earlier one.
    /// Returns None for negative or NaN input and for percentages beyond the summed shares.
    pub fn compute_point_at_percentage(&self, percentage: NativeFloat) -> Option<Point> {
        let (index, t) = self.locate(percentage)?;
        Some(self.curves[index].eval(t))
    }

    /// Return the tangent vector (not normalized) at `percentage`, located like
    /// [`Path::compute_point_at_percentage`].
    pub fn tangent_at_percentage(&self, percentage: NativeFloat) -> Option<Point> {
        let (index, t) = self.locate(percentage)?;
        Some(self.curves[index].derivative(t))
    }

    /// Return the bounding box over all curves as (min, max).
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = self.start;
        let mut max = self.start;
        for curve in self.curves.iter() {
            let (curve_min, curve_max) = curve.bounding_box();
            min = Point::new(min.x.min(curve_min.x), min.y.min(curve_min.y));
            max = Point::new(max.x.max(curve_max.x), max.y.max(curve_max.y));
        }
        (min, max)
    }

    /// Issue the draw calls for this path on `surface`, see [`render::draw`].
    pub fn draw<S>(&self, surface: &mut S)
    where
        S: DrawingSurface + ?Sized,
    {
        render::draw(surface, self)
    }

    /// Map a percentage to the index of its curve and the local parameter in `[0, 1]`.
    fn locate(&self, percentage: NativeFloat) -> Option<(usize, NativeFloat)> {
        if percentage.is_nan() || percentage < 0.0 {
            return None;
        }

        let mut sum: u32 = 0;
        for (index, &span) in self.segment_percentages.iter().enumerate() {
            let previous = sum;
            sum += span;
            if NativeFloat::from(sum) >= percentage {
                let t = if span == 0 {
                    0.0
                } else {
                    (percentage - NativeFloat::from(previous)) / NativeFloat::from(span)
                };
                return Some((index, t));
            }
        }
        None
    }

    fn compute_lookup_table(&self) -> [Point; LOOKUP_RESOLUTION + 1] {
        let end = self.end();
        let mut table = [end; LOOKUP_RESOLUTION + 1];
        for (percentage, entry) in table.iter_mut().enumerate().take(LOOKUP_RESOLUTION) {
            if let Some(point) = self.compute_point_at_percentage(percentage as NativeFloat) {
                *entry = point;
            }
        }

        // rounding up the shares can leave the computed 100 % point short of the end
        if let Some(computed) = self.compute_point_at_percentage(LOOKUP_RESOLUTION as NativeFloat) {
            if computed != end {
                log::trace!("lookup table end pinned from {:?} to {:?}", computed, end);
            }
        }
        table
    }
}

/// `ceil(100 * length / total)` per curve. A path without length gets 0 everywhere.
fn segment_percentages(curves: &[Curve]) -> TinyVec<[u32; 8]> {
    let total: NativeFloat = curves.iter().map(Curve::length).sum();
    curves
        .iter()
        .map(|curve| {
            let share = (curve.length() / total * 100.0).ceil();
            num_traits::cast::<NativeFloat, u32>(share).unwrap_or(0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Straight curve along the x axis from `x0` to `x1` with the control point halfway,
    /// so the curve parameter is proportional to the distance travelled.
    fn straight(x0: NativeFloat, x1: NativeFloat) -> Curve {
        Curve::new(
            Point::new(x0, 0.0),
            Point::new(0.5 * (x0 + x1), 0.0),
            Point::new(x1, 0.0),
        )
    }

    fn assert_near(p: Point, q: Point) {
        assert!(p.distance(q) < 1e-9, "{:?} != {:?}", p, q);
    }

    #[test]
    fn path_single_curve_owns_everything() {
        let curve = Curve::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(3.0, 0.0),
        );
        let path = Path::new(curve.start(), [curve]).unwrap();

        assert_eq!(path.len(), 1);
        assert!(!path.is_empty());
        assert_eq!(path.segment_percentages(), &[100]);
        assert_eq!(path.point_at_percentage(0), Some(curve.start()));
        assert_eq!(path.point_at_percentage(100), Some(curve.end()));
        assert_near(path.compute_point_at_percentage(50.0).unwrap(), curve.eval(0.5));
        assert_eq!(path.compute_point_at_percentage(100.0), Some(curve.end()));
        assert_abs_diff_eq!(path.length(), curve.length());
    }

    #[test]
    fn path_boundary_goes_to_earlier_curve() {
        let path = Path::new(Point::ORIGIN, [straight(0.0, 10.0), straight(10.0, 20.0)]).unwrap();
        assert_eq!(path.segment_percentages(), &[50, 50]);

        assert_eq!(path.locate(50.0), Some((0, 1.0)));
        assert_eq!(path.locate(50.5).map(|(index, _)| index), Some(1));
        assert_near(path.compute_point_at_percentage(25.0).unwrap(), Point::new(5.0, 0.0));
        assert_near(path.compute_point_at_percentage(50.0).unwrap(), Point::new(10.0, 0.0));
        assert_near(path.compute_point_at_percentage(75.0).unwrap(), Point::new(15.0, 0.0));
    }

    #[test]
    fn path_percentages_round_up() {
        let path = Path::new(Point::ORIGIN, [straight(0.0, 1.0), straight(1.0, 4.0)]).unwrap();
        assert_eq!(path.segment_percentages(), &[25, 75]);

        let path = Path::new(
            Point::ORIGIN,
            [straight(0.0, 10.0), straight(10.0, 20.0), straight(20.0, 30.0)],
        )
        .unwrap();
        assert_eq!(path.segment_percentages(), &[34, 34, 34]);
    }

    #[test]
    fn path_overshooting_percentages_keep_tie_break() {
        let path = Path::new(
            Point::ORIGIN,
            [straight(0.0, 10.0), straight(10.0, 20.0), straight(20.0, 30.0)],
        )
        .unwrap();

        // shares sum to 102, so 100 % lands inside the last curve
        let computed = path.compute_point_at_percentage(100.0).unwrap();
        assert_abs_diff_eq!(computed.x, 20.0 + 10.0 * 32.0 / 34.0, epsilon = 1e-9);
        assert_near(path.compute_point_at_percentage(102.0).unwrap(), Point::new(30.0, 0.0));
        assert_eq!(path.compute_point_at_percentage(102.5), None);

        // the table still ends on the last point
        assert_eq!(path.point_at_percentage(100), Some(Point::new(30.0, 0.0)));
        assert_abs_diff_eq!(
            path.point_at_percentage(99).unwrap().x,
            20.0 + 10.0 * 31.0 / 34.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn path_lookup_table_matches_computation() {
        let path = Path::new(
            Point::new(0.0, 0.0),
            [
                Curve::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 5.0)),
                Curve::new(Point::new(10.0, 5.0), Point::new(10.0, 10.0), Point::new(0.0, 10.0)),
            ],
        )
        .unwrap();

        for percentage in 0..LOOKUP_RESOLUTION as u8 {
            assert_eq!(
                path.point_at_percentage(percentage),
                path.compute_point_at_percentage(NativeFloat::from(percentage))
            );
        }
        assert_eq!(path.point_at_percentage(0), Some(path.start()));
        assert_eq!(path.point_at_percentage(100), Some(Point::new(0.0, 10.0)));
        assert_eq!(path.lookup_table().len(), LOOKUP_RESOLUTION + 1);
    }

    #[test]
    fn path_percentages_sum_to_at_least_100() {
        let path = Path::new(
            Point::new(0.0, 1.77),
            [
                Curve::new(Point::new(0.0, 1.77), Point::new(1.1, -1.0), Point::new(2.7, 1.0)),
                Curve::new(Point::new(2.7, 1.0), Point::new(4.3, 3.0), Point::new(3.75, -0.5)),
                Curve::new(Point::new(3.75, -0.5), Point::new(3.2, -4.0), Point::new(0.0, 0.0)),
            ],
        )
        .unwrap();
        let sum: u32 = path.segment_percentages().iter().sum();
        assert!(sum >= 100);
        assert!(sum <= 100 + path.len() as u32);
    }

    #[test]
    fn path_rejects_out_of_range_percentages() {
        let path = Path::new(Point::ORIGIN, [straight(0.0, 10.0)]).unwrap();
        assert_eq!(path.point_at_percentage(101), None);
        assert_eq!(path.point_at_percentage(u8::MAX), None);
        assert_eq!(path.compute_point_at_percentage(-0.5), None);
        assert_eq!(path.compute_point_at_percentage(NativeFloat::NAN), None);
        assert_eq!(path.compute_point_at_percentage(100.5), None);
    }

    #[test]
    fn path_without_curves_is_an_error() {
        assert_eq!(
            Path::new(Point::ORIGIN, core::iter::empty()),
            Err(PathError::EmptyPath)
        );
    }

    #[test]
    fn path_without_length_stays_on_start() {
        let p = Point::new(4.0, 4.0);
        let path = Path::new(p, [Curve::new(p, p, p), Curve::new(p, p, p)]).unwrap();
        assert_eq!(path.segment_percentages(), &[0, 0]);
        assert!(path.lookup_table().iter().all(|&q| q == p));
        assert_eq!(path.compute_point_at_percentage(0.0), Some(p));
        assert_eq!(path.compute_point_at_percentage(1.0), None);
    }

    #[test]
    fn path_tangent_and_bounds() {
        let path = Path::new(
            Point::new(0.0, 0.0),
            [
                Curve::new(Point::new(0.0, 0.0), Point::new(1.0, 2.0), Point::new(2.0, 0.0)),
                straight(2.0, 6.0),
            ],
        )
        .unwrap();

        let tangent = path.tangent_at_percentage(90.0).unwrap();
        assert!(tangent.x > 0.0);
        assert_abs_diff_eq!(tangent.y, 0.0);

        let (min, max) = path.bounding_box();
        assert_near(min, Point::new(0.0, 0.0));
        assert_near(max, Point::new(6.0, 1.0));
    }
}
