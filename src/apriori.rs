//! A priori (empirical) coefficients, provided by external collaborators.
use std::{collections::BTreeMap, path::Path};

use crate::{
    error::Error,
    prelude::{Epoch, Station},
};

#[cfg(feature = "log")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [AprioriValues] of one station at one point in time.
/// Delays and gradients are expressed in meters.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AprioriValues {
    /// Zenith hydrostatic (dry) delay
    pub zenith_dry_delay: f64,

    /// Zenith wet delay
    pub zenith_wet_delay: f64,

    /// Hydrostatic gradient, north component
    pub gradient_dry_north: f64,

    /// Wet gradient, north component
    pub gradient_wet_north: f64,

    /// Hydrostatic gradient, east component
    pub gradient_dry_east: f64,

    /// Wet gradient, east component
    pub gradient_wet_east: f64,

    /// Hydrostatic mapping `a` coefficient
    pub a_dry: f64,

    /// Wet mapping `a` coefficient
    pub a_wet: f64,
}

impl std::ops::Add for AprioriValues {
    type Output = AprioriValues;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            zenith_dry_delay: self.zenith_dry_delay + rhs.zenith_dry_delay,
            zenith_wet_delay: self.zenith_wet_delay + rhs.zenith_wet_delay,
            gradient_dry_north: self.gradient_dry_north + rhs.gradient_dry_north,
            gradient_wet_north: self.gradient_wet_north + rhs.gradient_wet_north,
            gradient_dry_east: self.gradient_dry_east + rhs.gradient_dry_east,
            gradient_wet_east: self.gradient_wet_east + rhs.gradient_wet_east,
            a_dry: self.a_dry + rhs.a_dry,
            a_wet: self.a_wet + rhs.a_wet,
        }
    }
}

impl std::ops::Mul<f64> for AprioriValues {
    type Output = AprioriValues;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            zenith_dry_delay: self.zenith_dry_delay * rhs,
            zenith_wet_delay: self.zenith_wet_delay * rhs,
            gradient_dry_north: self.gradient_dry_north * rhs,
            gradient_wet_north: self.gradient_wet_north * rhs,
            gradient_dry_east: self.gradient_dry_east * rhs,
            gradient_wet_east: self.gradient_wet_east * rhs,
            a_dry: self.a_dry * rhs,
            a_wet: self.a_wet * rhs,
        }
    }
}

impl AprioriValues {
    /// Builds new [AprioriValues] from zenith delays only (no gradients).
    pub fn from_zenith_delays(zenith_dry_delay: f64, zenith_wet_delay: f64) -> Self {
        Self {
            zenith_dry_delay,
            zenith_wet_delay,
            ..Default::default()
        }
    }

    /// Copies and returns [AprioriValues] with updated hydrostatic gradients.
    pub fn with_dry_gradients(mut self, north: f64, east: f64) -> Self {
        self.gradient_dry_north = north;
        self.gradient_dry_east = east;
        self
    }

    /// Copies and returns [AprioriValues] with updated wet gradients.
    pub fn with_wet_gradients(mut self, north: f64, east: f64) -> Self {
        self.gradient_wet_north = north;
        self.gradient_wet_east = east;
        self
    }

    /// Copies and returns [AprioriValues] with updated mapping `a` coefficients.
    pub fn with_mapping_coefficients(mut self, a_dry: f64, a_wet: f64) -> Self {
        self.a_dry = a_dry;
        self.a_wet = a_wet;
        self
    }
}

/// Source of [AprioriValues], typically backed by a gridded GPT
/// time series. Refreshing one epoch may be expensive, it is only
/// requested once per distinct epoch.
pub trait AprioriSource {
    /// Prepares this source for the following [Station]s.
    fn init(&mut self, gpt_file: &Path, stations: &[Station]) -> Result<(), Error>;

    /// Computes [AprioriValues] of every initialized [Station], at this [Epoch].
    fn compute(&mut self, epoch: Epoch) -> Result<Vec<AprioriValues>, Error>;
}

/// Verifies that a set of [AprioriValues] matches the [Station]s.
fn check_station_count(values: &[AprioriValues], stations: &[Station]) -> Result<(), Error> {
    if values.len() != stations.len() {
        return Err(Error::StationCountMismatch {
            expected: stations.len(),
            found: values.len(),
        });
    }
    Ok(())
}

/// [StaticApriori] values, that do not vary in time.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StaticApriori {
    values: Vec<AprioriValues>,
}

impl StaticApriori {
    /// Defines [StaticApriori] values, one per station.
    pub fn new(values: Vec<AprioriValues>) -> Self {
        Self { values }
    }
}

impl AprioriSource for StaticApriori {
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    fn init(&mut self, gpt_file: &Path, stations: &[Station]) -> Result<(), Error> {
        #[cfg(feature = "log")]
        debug!(
            "static a priori values for {} stations ({} not used)",
            stations.len(),
            gpt_file.display()
        );
        check_station_count(&self.values, stations)
    }

    fn compute(&mut self, _: Epoch) -> Result<Vec<AprioriValues>, Error> {
        Ok(self.values.clone())
    }
}

/// [AprioriTimeSeries] stores [AprioriValues] at discrete [Epoch]s
/// and interpolates linearly in between.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AprioriTimeSeries {
    nodes: BTreeMap<Epoch, Vec<AprioriValues>>,
}

impl AprioriTimeSeries {
    /// Insert new node (one [AprioriValues] per station) into this [AprioriTimeSeries].
    pub fn insert(&mut self, epoch: Epoch, values: Vec<AprioriValues>) {
        self.nodes.insert(epoch, values);
    }

    /// Copies and returns [AprioriTimeSeries] with one more node.
    pub fn with_node(mut self, epoch: Epoch, values: Vec<AprioriValues>) -> Self {
        self.insert(epoch, values);
        self
    }

    /// Returns first and last [Epoch] covered by this [AprioriTimeSeries].
    pub fn time_span(&self) -> Option<(Epoch, Epoch)> {
        let (first, _) = self.nodes.first_key_value()?;
        let (last, _) = self.nodes.last_key_value()?;
        Some((*first, *last))
    }

    /// Interpolates [AprioriValues] at this [Epoch], that must lie within [Self::time_span].
    pub fn interpolate(&self, epoch: Epoch) -> Result<Vec<AprioriValues>, Error> {
        if self.nodes.is_empty() {
            return Err(Error::EmptyTimeSeries);
        }

        let (t0, before) = self
            .nodes
            .range(..=epoch)
            .next_back()
            .ok_or(Error::EpochOutOfRange(epoch))?;

        if *t0 == epoch {
            return Ok(before.clone());
        }

        let (t1, after) = self
            .nodes
            .range(epoch..)
            .next()
            .ok_or(Error::EpochOutOfRange(epoch))?;

        let dt = (*t1 - *t0).to_seconds();
        let w1 = (epoch - *t0).to_seconds() / dt;
        let w0 = 1.0 - w1;

        Ok(before
            .iter()
            .zip(after.iter())
            .map(|(v0, v1)| *v0 * w0 + *v1 * w1)
            .collect())
    }
}

impl AprioriSource for AprioriTimeSeries {
    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    fn init(&mut self, gpt_file: &Path, stations: &[Station]) -> Result<(), Error> {
        #[cfg(feature = "log")]
        debug!(
            "a priori time series: {} nodes for {} stations ({} not used)",
            self.nodes.len(),
            stations.len(),
            gpt_file.display()
        );

        if self.nodes.is_empty() {
            return Err(Error::EmptyTimeSeries);
        }

        for values in self.nodes.values() {
            check_station_count(values, stations)?;
        }

        Ok(())
    }

    fn compute(&mut self, epoch: Epoch) -> Result<Vec<AprioriValues>, Error> {
        self.interpolate(epoch)
    }
}
