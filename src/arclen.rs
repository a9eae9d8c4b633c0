//! Closed-form arc length of quadratic Bézier curves.
//!
//! The derivative of a quadratic Bézier is the line `B'(t) = 2at + b` with
//! `a = start - 2 * control + end` and `b = 2 * (control - start)`, so the squared speed is
//! the polynomial `A t² + B t + C` with `A = 4 a·a`, `B = 4 a·b` and `C = b·b`.
//! Its square root has an elementary antiderivative made of square roots and a logarithm.
use super::*;
use crate::point::Point;

/// Relative cross product below which `a` and `b` count as parallel (colinear control polygon).
const COLINEAR_TOLERANCE: NativeFloat = 1e-9;

/// Returns the exact length of the quadratic Bézier curve through `start`, `control` and `end`.
///
/// Always returns a finite value `>= 0`. Colinear control polygons (including the straight
/// line with the control point halfway between start and end) get their exact length from a
/// piecewise-linear speed integral, because the general formula divides by zero for them.
/// Anything the formula still cannot evaluate (NaN, infinities in the input) yields 0.
///
/// ```rust
/// use smoothpath::{quadratic_arclen, Point};
///
/// let straight = quadratic_arclen(Point::new(0.0, 0.0), Point::new(5.0, 0.0), Point::new(10.0, 0.0));
/// assert!((straight - 10.0).abs() < 1e-9);
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(quadratic_arclen(p, p, p), 0.0);
/// ```
pub fn quadratic_arclen(start: Point, control: Point, end: Point) -> NativeFloat {
    let a = start - control * 2.0 + end;
    let b = (control - start) * 2.0;

    let len = if is_colinear(a, b) {
        colinear_arclen(a, b)
    } else {
        general_arclen(a, b)
    };

    if !len.is_finite() || len < 0.0 {
        log::trace!("degenerate quadratic ({:?}, {:?}, {:?}), length 0", start, control, end);
        0.0
    } else {
        len
    }
}

fn is_colinear(a: Point, b: Point) -> bool {
    let cross = a.x * b.y - a.y * b.x;
    cross.abs() <= COLINEAR_TOLERANCE * a.length() * b.length()
}

/// The speed is `|2a| * |t - t0|` (or the constant `|b|` if `a` vanishes), which integrates piecewise.
fn colinear_arclen(a: Point, b: Point) -> NativeFloat {
    let qa = 4.0 * a.dot(a);
    let qb = 4.0 * a.dot(b);
    let qc = b.dot(b);

    if qa <= COLINEAR_TOLERANCE * qc {
        return qc.sqrt();
    }

    // parameter where the curve turns around (speed is zero)
    let t0 = -qb / (2.0 * qa);
    let integral = if t0 <= 0.0 {
        0.5 - t0
    } else if t0 >= 1.0 {
        t0 - 0.5
    } else {
        0.5 * (t0 * t0 + (1.0 - t0) * (1.0 - t0))
    };
    qa.sqrt() * integral
}

fn general_arclen(a: Point, b: Point) -> NativeFloat {
    let qa = 4.0 * a.dot(a);
    let qb = 4.0 * a.dot(b);
    let qc = b.dot(b);
    let cross = a.x * b.y - a.y * b.x;
    // 4AC - B², without the cancellation of the expanded form
    let disc = 16.0 * cross * cross;

    let s_abc = 2.0 * (qa + qb + qc).sqrt();
    let a_2 = qa.sqrt();
    let a_32 = 2.0 * qa * a_2;
    let c_2 = 2.0 * qc.sqrt();
    let b_a = qb / a_2;

    let len = (a_32 * s_abc
        + a_2 * qb * (s_abc - c_2)
        + disc * log_ratio(2.0 * a_2 + b_a, s_abc, b_a, c_2, disc / qa))
        / (4.0 * a_32);

    if len.is_finite() {
        len
    } else {
        colinear_arclen(a, b)
    }
}

/// `ln((p1 + q1) / (p0 + q0))` where `q² = p² + r` for both pairs.
///
/// A sum `p + q` with `p < 0` cancels when the curve nearly turns around, so it is
/// evaluated as `r / (q - p)` instead.
fn log_ratio(
    p1: NativeFloat,
    q1: NativeFloat,
    p0: NativeFloat,
    q0: NativeFloat,
    r: NativeFloat,
) -> NativeFloat {
    match (p1 >= 0.0, p0 >= 0.0) {
        (true, true) => ((p1 + q1) / (p0 + q0)).ln(),
        (false, false) => ((q0 - p0) / (q1 - p1)).ln(),
        (true, false) => (p1 + q1).ln() + (q0 - p0).ln() - r.ln(),
        (false, true) => r.ln() - (q1 - p1).ln() - (p0 + q0).ln(),
    }
}
