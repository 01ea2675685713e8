//! Seasonal phase helpers
use crate::prelude::Epoch;

/// Modified Julian Date of the GMF reference epoch (1980-01-28).
const REFERENCE_MJD: f64 = 44239.0 - 1.0 + 28.0;

/// Length of the seasonal cycle (in days)
const YEAR_DAYS: f64 = 365.25;

/// Returns the day of year like phase used by the seasonal model,
/// counted from 28th of January. The MJD is expressed in UTC: the GPST
/// offset (18 s in 2017+) is below 1e-6 of the annual cycle.
pub(crate) fn doy(epoch: Epoch) -> f64 {
    epoch.to_mjd_utc_days() - REFERENCE_MJD
}

/// Returns the annual angle (in radians) of the seasonal model.
pub(crate) fn annual_angle(epoch: Epoch) -> f64 {
    doy(epoch) / YEAR_DAYS * 2.0 * std::f64::consts::PI
}
