use itertools::Itertools;

use geo::Point;

use crate::{
    error::Error,
    linspace::Linspace,
    prelude::{Ellipsoid, Epoch, Troposphere},
};

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [GridSample] of a [Troposphere] model, at one line of sight.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridSample {
    /// Line of sight as (x = azimuth, y = elevation), in decimal degrees
    pub point: Point<f64>,

    /// Slant delay (in meters)
    pub slant_delay: f64,

    /// Wet mapping function
    pub mapf_wet: f64,

    /// Hydrostatic mapping function
    pub mapf_hydrostatic: f64,

    /// Gradient mapping function, north partial
    pub gradient_north: f64,

    /// Gradient mapping function, east partial
    pub gradient_east: f64,
}

/// [GridEpoch] gathers all [GridSample]s at one [Epoch].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridEpoch {
    /// [Epoch] of evaluation
    pub epoch: Epoch,

    /// [GridSample]s, elevation major (descending), azimuth ascending
    pub samples: Vec<GridSample>,
}

/// [EvaluationGrid] is the elevation x azimuth grid (in decimal degrees)
/// at which a [Troposphere] model is sampled.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationGrid {
    /// Elevation [Linspace]
    pub elevation: Linspace,

    /// Azimuth [Linspace]
    pub azimuth: Linspace,
}

impl Default for EvaluationGrid {
    /// 1° x 1° grid, from 0.5° to 89.5° elevation, all azimuths.
    fn default() -> Self {
        Self {
            elevation: Linspace {
                start: 0.5,
                end: 89.5,
                spacing: 1.0,
            },
            azimuth: Linspace {
                start: -179.5,
                end: 179.5,
                spacing: 1.0,
            },
        }
    }
}

impl EvaluationGrid {
    /// Copies and returns [EvaluationGrid] with updated elevation [Linspace].
    pub fn with_elevation_space(mut self, linspace: Linspace) -> Self {
        self.elevation = linspace;
        self
    }

    /// Copies and returns [EvaluationGrid] with updated azimuth [Linspace].
    pub fn with_azimuth_space(mut self, linspace: Linspace) -> Self {
        self.azimuth = linspace;
        self
    }

    /// Verifies both [Linspace]s of this [EvaluationGrid].
    pub fn validate(&self) -> Result<(), Error> {
        self.elevation.validate()?;
        self.azimuth.validate()
    }

    /// Returns total number of points in this [EvaluationGrid].
    pub fn len(&self) -> usize {
        self.elevation.len() * self.azimuth.len()
    }

    /// Iterates all grid points (x = azimuth, y = elevation) in decimal degrees:
    /// elevations in descending order, azimuths in ascending order.
    pub fn points(&self) -> impl Iterator<Item = Point<f64>> + '_ {
        self.elevation
            .iter()
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .cartesian_product(self.azimuth.iter().collect::<Vec<_>>())
            .map(|(elevation, azimuth)| Point::new(azimuth, elevation))
    }

    /// Evaluates this [Troposphere] model for one station, at every grid point
    /// and every [Epoch]. Aborts on the first a priori refresh failure.
    pub fn evaluate<T: Troposphere, I: IntoIterator<Item = Epoch>>(
        &self,
        troposphere: &mut T,
        station_id: usize,
        epochs: I,
    ) -> Result<Vec<GridEpoch>, Error> {
        self.validate()?;

        let points = self.points().collect::<Vec<_>>();

        epochs
            .into_iter()
            .map(|epoch| -> Result<GridEpoch, Error> {
                let samples = points
                    .iter()
                    .map(|point| -> Result<GridSample, Error> {
                        let (azimuth, elevation) = (point.x().to_radians(), point.y().to_radians());

                        let slant_delay =
                            troposphere.slant_delay(epoch, station_id, azimuth, elevation)?;

                        let mapf_wet =
                            troposphere.mapping_function_wet(epoch, station_id, azimuth, elevation);

                        let mapf_hydrostatic = troposphere
                            .mapping_function_hydrostatic(epoch, station_id, azimuth, elevation);

                        let (gradient_north, gradient_east) = troposphere
                            .mapping_function_gradient(epoch, station_id, azimuth, elevation);

                        Ok(GridSample {
                            point: *point,
                            slant_delay,
                            mapf_wet,
                            mapf_hydrostatic,
                            gradient_north,
                            gradient_east,
                        })
                    })
                    .collect::<Result<Vec<_>, Error>>()?;

                #[cfg(feature = "log")]
                debug!("{}: evaluated {} grid points", epoch, samples.len());

                Ok(GridEpoch { epoch, samples })
            })
            .collect()
    }

    /// Initializes this [Troposphere] model with a single station defined
    /// by its ellipsoidal coordinates (in decimal degrees and meters), then
    /// evaluates it with [Self::evaluate].
    pub fn evaluate_station<T: Troposphere, I: IntoIterator<Item = Epoch>>(
        &self,
        troposphere: &mut T,
        ellipsoid: &Ellipsoid,
        longitude_ddeg: f64,
        latitude_ddeg: f64,
        height_m: f64,
        epochs: I,
    ) -> Result<Vec<GridEpoch>, Error> {
        let position = ellipsoid.to_cartesian(
            longitude_ddeg.to_radians(),
            latitude_ddeg.to_radians(),
            height_m,
        );

        troposphere.init(&[position])?;
        self.evaluate(troposphere, 0, epochs)
    }
}
