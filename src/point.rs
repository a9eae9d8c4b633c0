use super::*;

/// A 2D point, also used as a vector for the curve arithmetic.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: NativeFloat,
    pub y: NativeFloat,
}

impl Point {
    /// The point (0, 0).
    pub const ORIGIN: Point = Point::new(0.0, 0.0);

    pub const fn new(x: NativeFloat, y: NativeFloat) -> Self {
        Point { x, y }
    }

    /// Returns the point halfway between self and other
    pub fn midpoint(self, other: Point) -> Point {
        Point::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }

    /// Linearly interpolate between self (t = 0) and other (t = 1)
    pub fn lerp(self, other: Point, t: NativeFloat) -> Point {
        self + (other - self) * t
    }

    /// Dot product of both points interpreted as vectors
    pub fn dot(self, other: Point) -> NativeFloat {
        self.x * other.x + self.y * other.y
    }

    /// Returns the distance between self and other
    pub fn distance(self, other: Point) -> NativeFloat {
        (self - other).length()
    }

    /// Interprets the point as a vector and returns its norm (distance from origin)
    pub fn length(self) -> NativeFloat {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(NativeFloat, NativeFloat)> for Point {
    fn from((x, y): (NativeFloat, NativeFloat)) -> Self {
        Point::new(x, y)
    }
}

impl From<[NativeFloat; 2]> for Point {
    fn from([x, y]: [NativeFloat; 2]) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<NativeFloat> for Point {
    type Output = Point;

    fn mul(self, rhs: NativeFloat) -> Point {
        Point {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
