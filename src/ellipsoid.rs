//! Reference ellipsoid and geodetic conversions.
use map_3d::{ecef2geodetic, geodetic2ecef};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximal number of iterations in [Ellipsoid::to_geodetic],
/// for custom ellipsoids.
const MAX_ITERATIONS: usize = 10;

/// Latitude convergence criteria (in radians).
const LATITUDE_TOLERANCE_RAD: f64 = 1.0E-12;

/// Reference [Ellipsoid], used to convert station positions
/// to ellipsoidal coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// Semi-major axis (in meters)
    pub semi_major_axis_m: f64,

    /// Flattening (unitless)
    pub flattening: f64,
}

/// GRS80 reference ellipsoid
pub const GRS80: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_222_101);

/// WGS84 reference ellipsoid
pub const WGS84: Ellipsoid = Ellipsoid::new(6_378_137.0, 298.257_223_563);

impl Default for Ellipsoid {
    fn default() -> Self {
        GRS80
    }
}

impl Ellipsoid {
    /// Builds a new [Ellipsoid] from its semi-major axis (in meters)
    /// and inverse flattening.
    pub const fn new(semi_major_axis_m: f64, inverse_flattening: f64) -> Self {
        Self {
            semi_major_axis_m,
            flattening: 1.0 / inverse_flattening,
        }
    }

    /// Returns semi-minor axis (in meters)
    pub fn semi_minor_axis_m(&self) -> f64 {
        self.semi_major_axis_m * (1.0 - self.flattening)
    }

    /// Returns first eccentricity squared
    pub fn eccentricity_squared(&self) -> f64 {
        self.flattening * (2.0 - self.flattening)
    }

    /// Returns the matching [map_3d::Ellipsoid], for the
    /// standard ellipsoids only.
    fn standard(&self) -> Option<map_3d::Ellipsoid> {
        if *self == GRS80 {
            Some(map_3d::Ellipsoid::GRS80)
        } else if *self == WGS84 {
            Some(map_3d::Ellipsoid::WGS84)
        } else {
            None
        }
    }

    /// Prime vertical radius of curvature at given latitude (in meters)
    fn prime_vertical_radius_m(&self, latitude_rad: f64) -> f64 {
        let sin_lat = latitude_rad.sin();
        self.semi_major_axis_m / (1.0 - self.eccentricity_squared() * sin_lat * sin_lat).sqrt()
    }

    /// Converts ellipsoidal coordinates to cartesian ECEF coordinates (in meters).
    pub fn to_cartesian(&self, longitude_rad: f64, latitude_rad: f64, height_m: f64) -> [f64; 3] {
        if let Some(ellipsoid) = self.standard() {
            let (x, y, z) = geodetic2ecef(latitude_rad, longitude_rad, height_m, ellipsoid);
            return [x, y, z];
        }

        let n = self.prime_vertical_radius_m(latitude_rad);
        let (sin_lat, cos_lat) = latitude_rad.sin_cos();
        let (sin_lon, cos_lon) = longitude_rad.sin_cos();

        [
            (n + height_m) * cos_lat * cos_lon,
            (n + height_m) * cos_lat * sin_lon,
            (n * (1.0 - self.eccentricity_squared()) + height_m) * sin_lat,
        ]
    }

    /// Converts cartesian ECEF coordinates (in meters) to
    /// (longitude (rad), latitude (rad), height above ellipsoid (m)).
    pub fn to_geodetic(&self, position: &[f64; 3]) -> (f64, f64, f64) {
        let [x, y, z] = *position;

        let p = x.hypot(y);
        let longitude_rad = y.atan2(x);

        // on the rotation axis
        if p < 1.0E-9 {
            let latitude_rad = std::f64::consts::FRAC_PI_2.copysign(z);
            return (longitude_rad, latitude_rad, z.abs() - self.semi_minor_axis_m());
        }

        if let Some(ellipsoid) = self.standard() {
            let (latitude_rad, longitude_rad, height_m) = ecef2geodetic(x, y, z, ellipsoid);
            return (longitude_rad, latitude_rad, height_m);
        }

        let e2 = self.eccentricity_squared();
        let mut latitude_rad = (z / (p * (1.0 - e2))).atan();

        for _ in 0..MAX_ITERATIONS {
            let n = self.prime_vertical_radius_m(latitude_rad);
            let height_m = p / latitude_rad.cos() - n;
            let next = (z / (p * (1.0 - e2 * n / (n + height_m)))).atan();
            let converged = (next - latitude_rad).abs() < LATITUDE_TOLERANCE_RAD;
            latitude_rad = next;
            if converged {
                break;
            }
        }

        let height_m = p / latitude_rad.cos() - self.prime_vertical_radius_m(latitude_rad);
        (longitude_rad, latitude_rad, height_m)
    }
}
