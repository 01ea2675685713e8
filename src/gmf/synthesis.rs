use crate::{
    gmf::tables::{HYDROSTATIC_AMPLITUDE, HYDROSTATIC_MEAN, WET_AMPLITUDE, WET_MEAN},
    legendre::Legendre,
    station::{Hemisphere, Station},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [StationCoefficients] synthesized once per station,
/// from its geometry and the GMF harmonic tables.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationCoefficients {
    /// Mean hydrostatic `a` coefficient (x 1e-5)
    pub mean_hydrostatic: f64,

    /// Annual amplitude of the hydrostatic `a` coefficient (x 1e-5)
    pub amplitude_hydrostatic: f64,

    /// Mean wet `a` coefficient (x 1e-5)
    pub mean_wet: f64,

    /// Annual amplitude of the wet `a` coefficient (x 1e-5)
    pub amplitude_wet: f64,

    /// [Hemisphere] driving the hydrostatic `c` seasonal model
    pub hemisphere: Hemisphere,

    /// Cosine of station latitude
    pub cos_latitude: f64,

    /// Station height above the ellipsoid, in kilometers
    pub height_km: f64,
}

impl StationCoefficients {
    /// Synthesizes [StationCoefficients] for this [Station].
    pub fn synthesize(station: &Station) -> Self {
        let legendre = Legendre::new(&station.unit_vector());

        Self {
            mean_hydrostatic: HYDROSTATIC_MEAN.synthesize(&legendre),
            amplitude_hydrostatic: HYDROSTATIC_AMPLITUDE.synthesize(&legendre),
            mean_wet: WET_MEAN.synthesize(&legendre),
            amplitude_wet: WET_AMPLITUDE.synthesize(&legendre),
            hemisphere: station.hemisphere(),
            cos_latitude: station.cos_latitude(),
            height_km: station.height_km(),
        }
    }

    /// Hydrostatic `a` coefficient at this annual angle (in radians)
    pub fn a_hydrostatic(&self, annual_angle_rad: f64) -> f64 {
        (self.mean_hydrostatic + self.amplitude_hydrostatic * annual_angle_rad.cos()) * 1.0E-5
    }

    /// Wet `a` coefficient at this annual angle (in radians)
    pub fn a_wet(&self, annual_angle_rad: f64) -> f64 {
        (self.mean_wet + self.amplitude_wet * annual_angle_rad.cos()) * 1.0E-5
    }

    /// Hydrostatic `c` coefficient at this annual angle (in radians)
    pub fn c_hydrostatic(&self, annual_angle_rad: f64) -> f64 {
        let seasonal = (annual_angle_rad + self.hemisphere.phase_rad()).cos() + 1.0;
        0.062
            + (seasonal * self.hemisphere.c11() / 2.0 + self.hemisphere.c10())
                * (1.0 - self.cos_latitude)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn equatorial_station() {
        let station = Station::from_geodetic(0.0, 0.0, 0.0);
        let coefficients = StationCoefficients::synthesize(&station);

        assert_eq!(coefficients.hemisphere, Hemisphere::Northern);
        assert_eq!(coefficients.cos_latitude, 1.0);
        assert_eq!(coefficients.height_km, 0.0);

        // at the equator, the hydrostatic c coefficient has no seasonal term
        for angle in [0.0, 1.0, 2.5, 4.0] {
            assert_eq!(coefficients.c_hydrostatic(angle), 0.062);
        }

        // physically sound a coefficients (~1.2e-3 hydrostatic, ~5e-4 wet)
        let a_h = coefficients.a_hydrostatic(0.0);
        let a_w = coefficients.a_wet(0.0);
        assert!(a_h > 1.0E-3 && a_h < 1.5E-3, "a_h={}", a_h);
        assert!(a_w > 3.0E-4 && a_w < 8.0E-4, "a_w={}", a_w);
    }

    #[test]
    fn hemisphere_dependent_c() {
        let lat = 60.0_f64.to_radians();
        let north = StationCoefficients::synthesize(&Station::from_geodetic(0.2, lat, 0.0));
        let south = StationCoefficients::synthesize(&Station::from_geodetic(0.2, -lat, 0.0));

        assert_eq!(north.hemisphere, Hemisphere::Northern);
        assert_eq!(south.hemisphere, Hemisphere::Southern);

        // northern winter maximum (angle = 0)
        let expected = 0.062 + (2.0 * 0.005 / 2.0 + 0.001) * (1.0 - lat.cos());
        assert!((north.c_hydrostatic(0.0) - expected).abs() < 1.0E-15);

        // southern hemisphere is phase shifted by half a year
        let expected = 0.062 + 0.002 * (1.0 - lat.cos());
        assert!((south.c_hydrostatic(0.0) - expected).abs() < 1.0E-15);
    }

    #[test]
    fn height_independent_synthesis() {
        let lower = StationCoefficients::synthesize(&Station::from_geodetic(0.4, 0.7, 0.0));
        let upper = StationCoefficients::synthesize(&Station::from_geodetic(0.4, 0.7, 3000.0));

        assert_eq!(lower.mean_hydrostatic, upper.mean_hydrostatic);
        assert_eq!(lower.amplitude_hydrostatic, upper.amplitude_hydrostatic);
        assert_eq!(lower.mean_wet, upper.mean_wet);
        assert_eq!(lower.amplitude_wet, upper.amplitude_wet);
        assert_eq!(upper.height_km, 3.0);
    }
}
