#![doc(
    html_logo_url = "https://raw.githubusercontent.com/nav-solutions/.github/master/logos/logo2.jpg"
)]
#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * GMF is part of the nav-solutions framework.
 *
 * Authors: Guillaume W. Bres <guillaume.bressaix@gmail.com> et al.
 * (cf. https://github.com/nav-solutions/gmf/graphs/contributors),
 * licensed under Mozilla Public license V2.
 *
 * Documentation: https://github.com/nav-solutions/gmf
 */

pub mod apriori;
pub mod config;
pub mod ellipsoid;
pub mod error;
pub mod gmf;
pub mod grid;
pub mod legendre;
pub mod linspace;
pub mod mapf;
pub mod station;
pub mod troposphere;

mod epoch;

#[cfg(test)]
mod tests;

pub mod prelude {
    // export
    pub use crate::{
        apriori::{AprioriSource, AprioriTimeSeries, AprioriValues, StaticApriori},
        config::GlobalMappingConfig,
        ellipsoid::{Ellipsoid, GRS80, WGS84},
        error::Error,
        gmf::{GlobalMapping, StationCoefficients},
        grid::{EvaluationGrid, GridEpoch, GridSample},
        linspace::Linspace,
        mapf::{ContinuedFraction, HeightCorrection},
        station::{Hemisphere, Station},
        troposphere::Troposphere,
    };

    // pub re-export
    pub use geo::Point;
    pub use hifitime::{Duration, Epoch, TimeScale, TimeSeries, Unit};
}
