use super::*;
use crate::arclen::quadratic_arclen;
use crate::point::Point;

/// A 2d quadratic Bezier curve defined by three points: the starting point, a control point
/// and the ending point. Its arc length is computed once on construction.
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * start + 2 * (1 - t) * t * control + t² * end```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "CurvePoints", into = "CurvePoints")
)]
pub struct Curve {
    start: Point,
    control: Point,
    end: Point,
    length: NativeFloat,
}

impl Curve {
    /// Creates the curve and computes its length. Degenerate curves get a length of 0.
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Curve {
            start,
            control,
            end,
            length: quadratic_arclen(start, control, end),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control(&self) -> Point {
        self.control
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Arc length of the curve, always `>= 0`.
    pub fn length(&self) -> NativeFloat {
        self.length
    }

    /// True if the curve has no length (e.g. all three points coincide).
    pub fn is_degenerate(&self) -> bool {
        self.length == 0.0
    }

    /// Evaluate the curve at t (expecting t between 0 and 1) by direct evaluation of the polynomial.
    pub fn eval(&self, t: NativeFloat) -> Point {
        let t2 = t * t;
        let one_t = 1.0 - t;
        let one_t2 = one_t * one_t;

        Point::new(
            self.start.x * one_t2 + self.control.x * 2.0 * one_t * t + self.end.x * t2,
            self.start.y * one_t2 + self.control.y * 2.0 * one_t * t + self.end.y * t2,
        )
    }

    /// Sample the curve's derivative (the tangent vector, not normalized) at t.
    /// The derivative of a quadratic is a line from 2 * (control - start) to 2 * (end - control).
    pub fn derivative(&self, t: NativeFloat) -> Point {
        let d0 = (self.control - self.start) * 2.0;
        let d1 = (self.end - self.control) * 2.0;
        d0.lerp(d1, t)
    }

    /// Split the curve at t into two curves that trace the same points (De Casteljau).
    pub fn split(&self, t: NativeFloat) -> (Curve, Curve) {
        // _1ab is the first iteration from first (a) to second (b) control point and so on
        let ctrl_1ab = self.start.lerp(self.control, t);
        let ctrl_1bc = self.control.lerp(self.end, t);
        // second iteration, final point on the curve
        let ctrl_2ab = ctrl_1ab.lerp(ctrl_1bc, t);

        (
            Curve::new(self.start, ctrl_1ab, ctrl_2ab),
            Curve::new(ctrl_2ab, ctrl_1bc, self.end),
        )
    }

    /// Returns the tight axis-aligned bounding box as (min, max).
    /// Each coordinate is a quadratic in t, so it has at most one extremum inside (0, 1).
    pub fn bounding_box(&self) -> (Point, Point) {
        let mut min = Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y));
        let mut max = Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y));

        let denom = self.start - self.control * 2.0 + self.end;
        if denom.x.abs() > EPSILON {
            let t = (self.start.x - self.control.x) / denom.x;
            if t > 0.0 && t < 1.0 {
                let x = self.eval(t).x;
                min.x = min.x.min(x);
                max.x = max.x.max(x);
            }
        }
        if denom.y.abs() > EPSILON {
            let t = (self.start.y - self.control.y) / denom.y;
            if t > 0.0 && t < 1.0 {
                let y = self.eval(t).y;
                min.y = min.y.min(y);
                max.y = max.y.max(y);
            }
        }

        (min, max)
    }
}

/// Standard quadratic Bézier formula `(1-t)²·start + 2(1-t)t·control + t²·end`,
/// same as [`Curve::eval`].
pub fn evaluate_quadratic_bezier(curve: &Curve, t: NativeFloat) -> Point {
    curve.eval(t)
}

/// Serialized form of a curve. The length is derived, so it is recomputed on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CurvePoints {
    start: Point,
    control: Point,
    end: Point,
}

#[cfg(feature = "serde")]
impl From<CurvePoints> for Curve {
    fn from(points: CurvePoints) -> Self {
        Curve::new(points.start, points.control, points.end)
    }
}

#[cfg(feature = "serde")]
impl From<Curve> for CurvePoints {
    fn from(curve: Curve) -> Self {
        CurvePoints {
            start: curve.start,
            control: curve.control,
            end: curve.end,
        }
    }
}
