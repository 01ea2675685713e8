use crate::ellipsoid::Ellipsoid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Hemisphere] a [Station] is located in, which drives
/// the seasonal behavior of the hydrostatic `c` coefficient.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// Northern hemisphere, equator included
    #[default]
    Northern,

    /// Southern hemisphere
    Southern,
}

impl Hemisphere {
    /// Seasonal phase offset (in radians)
    pub fn phase_rad(&self) -> f64 {
        match self {
            Self::Northern => 0.0,
            Self::Southern => std::f64::consts::PI,
        }
    }

    /// Seasonal amplitude weight of the hydrostatic `c` coefficient
    pub fn c11(&self) -> f64 {
        match self {
            Self::Northern => 0.005,
            Self::Southern => 0.007,
        }
    }

    /// Constant weight of the hydrostatic `c` coefficient
    pub fn c10(&self) -> f64 {
        match self {
            Self::Northern => 0.001,
            Self::Southern => 0.002,
        }
    }
}

/// Ground [Station] geometry, immutable once defined.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    /// Ellipsoidal longitude (in radians)
    pub longitude_rad: f64,

    /// Ellipsoidal latitude (in radians)
    pub latitude_rad: f64,

    /// Height above the ellipsoid (in meters)
    pub height_m: f64,
}

impl Station {
    /// Defines a new [Station] from ellipsoidal coordinates.
    pub fn from_geodetic(longitude_rad: f64, latitude_rad: f64, height_m: f64) -> Self {
        Self {
            longitude_rad,
            latitude_rad,
            height_m,
        }
    }

    /// Defines a new [Station] from ECEF coordinates (in meters)
    /// using the reference [Ellipsoid].
    pub fn from_cartesian(position: &[f64; 3], ellipsoid: &Ellipsoid) -> Self {
        let (longitude_rad, latitude_rad, height_m) = ellipsoid.to_geodetic(position);
        Self::from_geodetic(longitude_rad, latitude_rad, height_m)
    }

    /// Returns the direction of this [Station] on the unit sphere.
    /// The ellipsoidal latitude is interpreted as geocentric, which is what
    /// Boehm et al. (2006) do when synthesizing the GMF coefficients.
    pub fn unit_vector(&self) -> [f64; 3] {
        let (sin_lat, cos_lat) = self.latitude_rad.sin_cos();
        let (sin_lon, cos_lon) = self.longitude_rad.sin_cos();
        [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
    }

    /// Returns cosine of the latitude
    pub fn cos_latitude(&self) -> f64 {
        self.latitude_rad.cos()
    }

    /// Returns height above the ellipsoid in kilometers
    pub fn height_km(&self) -> f64 {
        self.height_m * 1.0E-3
    }

    /// Returns [Hemisphere] this [Station] belongs to.
    pub fn hemisphere(&self) -> Hemisphere {
        if self.unit_vector()[2] < 0.0 {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ellipsoid::GRS80;

    #[test]
    fn unit_vector() {
        let station = Station::from_geodetic(0.0, 0.0, 0.0);
        assert_eq!(station.unit_vector(), [1.0, 0.0, 0.0]);
        assert_eq!(station.cos_latitude(), 1.0);

        let station = Station::from_geodetic(1.2, -0.4, 250.0);
        let [x, y, z] = station.unit_vector();
        assert!(((x * x + y * y + z * z) - 1.0).abs() < 1.0E-15);
        assert_eq!(station.height_km(), 0.25);
    }

    #[test]
    fn hemispheres() {
        for (lat_deg, hemisphere) in [
            (45.0_f64, Hemisphere::Northern),
            (0.0, Hemisphere::Northern),
            (-0.0, Hemisphere::Northern),
            (-1.0E-9, Hemisphere::Southern),
            (-45.0, Hemisphere::Southern),
        ] {
            let station = Station::from_geodetic(0.3, lat_deg.to_radians(), 0.0);
            assert_eq!(station.hemisphere(), hemisphere, "failed for {}°", lat_deg);
        }

        assert_eq!(Hemisphere::Northern.phase_rad(), 0.0);
        assert_eq!(Hemisphere::Southern.phase_rad(), std::f64::consts::PI);
        assert_eq!(
            (Hemisphere::Southern.c11(), Hemisphere::Southern.c10()),
            (0.007, 0.002)
        );
        assert_eq!(
            (Hemisphere::Northern.c11(), Hemisphere::Northern.c10()),
            (0.005, 0.001)
        );
    }

    #[test]
    fn cartesian_station() {
        let position = GRS80.to_cartesian(0.5, 0.8, 1000.0);
        let station = Station::from_cartesian(&position, &GRS80);
        assert!((station.longitude_rad - 0.5).abs() < 1.0E-12);
        assert!((station.latitude_rad - 0.8).abs() < 1.0E-12);
        assert!((station.height_m - 1000.0).abs() < 1.0E-4);
    }
}
