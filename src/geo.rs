//! Distance between geographic coordinates.
//!
//! Unrelated to paths: a standalone helper using the equirectangular approximation,
//! which is fast and accurate for short distances only.

use super::*;

/// Mean earth radius in meters.
pub const EARTH_RADIUS_METERS: NativeFloat = 6_371_000.0;

/// Anything with a latitude and longitude in degrees.
pub trait Coordinate {
    fn latitude(&self) -> NativeFloat;

    fn longitude(&self) -> NativeFloat;
}

/// A latitude/longitude pair in degrees.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub latitude: NativeFloat,
    pub longitude: NativeFloat,
}

impl GeoPoint {
    pub const fn new(latitude: NativeFloat, longitude: NativeFloat) -> Self {
        GeoPoint {
            latitude,
            longitude,
        }
    }
}

impl Coordinate for GeoPoint {
    fn latitude(&self) -> NativeFloat {
        self.latitude
    }

    fn longitude(&self) -> NativeFloat {
        self.longitude
    }
}

/// `(latitude, longitude)` in degrees.
impl Coordinate for (NativeFloat, NativeFloat) {
    fn latitude(&self) -> NativeFloat {
        self.0
    }

    fn longitude(&self) -> NativeFloat {
        self.1
    }
}

/// Approximate distance in meters between two coordinates.
///
/// Projects both onto a plane with `x = Δλ·cos(φm)` and `y = Δφ` (`φm` being the mean
/// latitude) and takes the euclidean distance scaled by [`EARTH_RADIUS_METERS`]. This is
/// not the great-circle distance; the error grows with the distance.
///
/// ```rust
/// use smoothpath::{distance, GeoPoint};
///
/// let berlin = GeoPoint::new(52.5200, 13.4050);
/// assert_eq!(distance(&berlin, &berlin), 0.0);
/// ```
pub fn distance<A, B>(from: &A, to: &B) -> NativeFloat
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let delta_lon = (to.longitude() - from.longitude()).to_radians();

    let x = delta_lon * ((lat1 + lat2) * 0.5).cos();
    let y = lat2 - lat1;
    EARTH_RADIUS_METERS * (x * x + y * y).sqrt()
}
