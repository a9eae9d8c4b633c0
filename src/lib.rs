//! Smooth quadratic Bézier paths through ordered 2D points.
//!
//! A [`Path`] is built from at least three points. Every interior point becomes the
//! control point of a quadratic segment whose end lies halfway to the next point, so
//! consecutive segments join smoothly and the path still starts on the first point
//! and ends on the last one.
//!
//! Each segment carries its closed-form arc length. The path turns those lengths into
//! integer percentages and caches the point at every whole percentage `0..=100`, which
//! makes repeated lookups (e.g. moving a marker along the path) constant time.
//!
//! ```rust
//! use smoothpath::{build_path, Point};
//!
//! let path = build_path(&[
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ])
//! .unwrap();
//!
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.point_at_percentage(100), Some(Point::new(0.0, 10.0)));
//! ```
//!
//! The crate is `#![no_std]` and only needs `alloc`. Math functions come from
//! `num_traits::Float` backed by `libm`.
#![no_std]

extern crate alloc;

pub(crate) use core::ops::{Add, Mul, Sub};
pub(crate) use num_traits::Float;

pub mod arclen;
pub mod builder;
pub mod curve;
pub mod error;
pub mod geo;
pub mod path;
pub mod point;
pub mod render;

pub use arclen::quadratic_arclen;
pub use builder::{build_path, PathBuilder};
pub use curve::{evaluate_quadratic_bezier, Curve};
pub use error::PathError;
pub use geo::{distance, Coordinate, GeoPoint};
pub use path::{Path, LOOKUP_RESOLUTION};
pub use point::Point;
pub use render::{draw, DrawingSurface, SvgPathData};

/// The scalar type used for all coordinates and lengths.
pub type NativeFloat = f64;

/// Tolerance for float comparisons.
pub const EPSILON: NativeFloat = 1e-9;
