use crate::{
    apriori::AprioriValues,
    error::Error,
    prelude::Epoch,
};

/// [Troposphere] models capability: slant delays and mapping
/// functions, evaluated per station. Angles are expressed in radians,
/// delays in meters.
pub trait Troposphere {
    /// Initializes this model for the following ECEF station
    /// positions (in meters). Must be called once, prior any evaluation.
    fn init(&mut self, positions: &[[f64; 3]]) -> Result<(), Error>;

    /// Slant delay (in meters) along this line of sight.
    fn slant_delay(
        &mut self,
        epoch: Epoch,
        station_id: usize,
        azimuth_rad: f64,
        elevation_rad: f64,
    ) -> Result<f64, Error>;

    /// Hydrostatic mapping function (unitless).
    fn mapping_function_hydrostatic(
        &self,
        epoch: Epoch,
        station_id: usize,
        azimuth_rad: f64,
        elevation_rad: f64,
    ) -> f64;

    /// Wet mapping function (unitless).
    fn mapping_function_wet(
        &self,
        epoch: Epoch,
        station_id: usize,
        azimuth_rad: f64,
        elevation_rad: f64,
    ) -> f64;

    /// Gradient mapping function, returned as (north, east) partials.
    fn mapping_function_gradient(
        &self,
        epoch: Epoch,
        station_id: usize,
        azimuth_rad: f64,
        elevation_rad: f64,
    ) -> (f64, f64);

    /// [AprioriValues] of this station at this [Epoch].
    fn apriori_values(&mut self, epoch: Epoch, station_id: usize) -> Result<AprioriValues, Error>;
}
