//! Continued fraction and gradient mapping functions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hydrostatic gradient mapping constant (Chen & Herring, 1997)
pub const HYDROSTATIC_GRADIENT: f64 = 0.0031;

/// Wet gradient mapping constant (Chen & Herring, 1997)
pub const WET_GRADIENT: f64 = 0.0007;

/// Three terms [ContinuedFraction] (Marini/Niell form), normalized to unity at zenith:
/// `(1 + a/(1 + b/(1 + c))) / (sin(e) + a/(sin(e) + b/(sin(e) + c)))`
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ContinuedFraction {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ContinuedFraction {
    /// Builds a new [ContinuedFraction]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Evaluates this [ContinuedFraction] for sine of the elevation angle.
    /// The horizon (`sin_e = 0`) is not guarded.
    pub fn evaluate(&self, sin_e: f64) -> f64 {
        let beta = self.b / (sin_e + self.c);
        let gamma = self.a / (sin_e + beta);
        let topcon = 1.0 + self.a / (1.0 + self.b / (1.0 + self.c));
        topcon / (sin_e + gamma)
    }
}

/// [HeightCorrection] parameters of the hydrostatic mapping function
/// (Niell, 1996), shared by all stations.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightCorrection {
    /// Parameter a
    pub a: f64,

    /// Parameter b
    pub b: f64,

    /// Parameter c
    pub c: f64,
}

impl Default for HeightCorrection {
    fn default() -> Self {
        Self {
            a: 2.53E-5,
            b: 5.49E-3,
            c: 1.14E-3,
        }
    }
}

impl HeightCorrection {
    /// Height correction coefficient, to be scaled by the station
    /// height in kilometers.
    pub fn coefficient(&self, sin_e: f64) -> f64 {
        1.0 / sin_e - ContinuedFraction::new(self.a, self.b, self.c).evaluate(sin_e)
    }
}

/// Gradient mapping function `1/(sin(e)tan(e) + constant)`, for elevation in radians.
pub fn gradient_mapping(elevation_rad: f64, constant: f64) -> f64 {
    1.0 / (elevation_rad.sin() * elevation_rad.tan() + constant)
}
