//! Global Mapping Function (GMF).
//!
//! Reference: Boehm, J., A.E. Niell, P. Tregoning, H. Schuh (2006),
//! Global Mapping Functions (GMF): A new empirical mapping function based on
//! numerical weather model data, Geoph. Res. Letters, Vol. 33, L07304,
//! doi:10.1029/2005GL025545.
mod synthesis;
mod tables;

pub use synthesis::StationCoefficients;
pub use tables::HarmonicTable;

use crate::{
    apriori::{AprioriSource, AprioriValues},
    config::GlobalMappingConfig,
    ellipsoid::Ellipsoid,
    epoch::annual_angle,
    error::Error,
    mapf::{gradient_mapping, ContinuedFraction, HYDROSTATIC_GRADIENT, WET_GRADIENT},
    prelude::{Epoch, Station},
    troposphere::Troposphere,
};

#[cfg(feature = "log")]
use log::{debug, error, trace};

/// Hydrostatic `b` coefficient
const B_HYDROSTATIC: f64 = 0.0029;

/// Wet `b` coefficient
const B_WET: f64 = 0.00146;

/// Wet `c` coefficient
const C_WET: f64 = 0.04391;

/// [GlobalMapping] tropospheric model.
///
/// ```
/// use gmf::prelude::*;
///
/// let config = GlobalMappingConfig::new("troposphere/gpt3_grid1deg.dat");
///
/// // station at sea level, on the equator
/// let position = GRS80.to_cartesian(0.0, 0.0, 0.0);
///
/// let apriori = StaticApriori::new(vec![AprioriValues::from_zenith_delays(2.3, 0.1)]);
///
/// let mut model = GlobalMapping::new(config, apriori)
///     .unwrap();
///
/// model.init(&[position])
///     .unwrap();
///
/// let epoch = Epoch::from_mjd_utc(55055.0);
/// let elevation = 10.0_f64.to_radians();
///
/// let mapf = model.mapping_function_hydrostatic(epoch, 0, 0.0, elevation);
/// assert!(mapf > 5.0 && mapf < 6.0);
///
/// let delay = model.slant_delay(epoch, 0, 0.0, elevation)
///     .unwrap();
///
/// assert!(delay > 13.0 && delay < 14.0);
/// ```
#[derive(Debug, Clone)]
pub struct GlobalMapping<A: AprioriSource> {
    /// [GlobalMappingConfig]
    config: GlobalMappingConfig,

    /// Reference [Ellipsoid] of the station positions
    ellipsoid: Ellipsoid,

    /// [AprioriSource]
    source: A,

    /// Initialized [Station]s
    stations: Vec<Station>,

    /// [StationCoefficients], one per station
    coefficients: Vec<StationCoefficients>,

    /// Latest [AprioriValues], valid at this [Epoch]
    apriori: Option<(Epoch, Vec<AprioriValues>)>,
}

impl<A: AprioriSource> GlobalMapping<A> {
    /// Builds a new [GlobalMapping] model, that needs to be initialized
    /// with [Troposphere::init] prior any evaluation.
    pub fn new(config: GlobalMappingConfig, source: A) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            ellipsoid: Default::default(),
            stations: Default::default(),
            coefficients: Default::default(),
            apriori: None,
        })
    }

    /// Copies and returns [GlobalMapping] using custom reference [Ellipsoid].
    pub fn with_ellipsoid(mut self, ellipsoid: Ellipsoid) -> Self {
        self.ellipsoid = ellipsoid;
        self
    }

    /// Initializes this model from [Station]s directly.
    pub fn init_stations(&mut self, stations: &[Station]) -> Result<(), Error> {
        self.source.init(&self.config.gpt_file, stations)?;

        self.stations = stations.to_vec();

        self.coefficients = stations
            .iter()
            .map(StationCoefficients::synthesize)
            .collect();

        self.apriori = None;

        #[cfg(feature = "log")]
        debug!("gmf: initialized {} stations", self.stations.len());

        Ok(())
    }

    /// Returns initialized [Station]s
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Returns [StationCoefficients] of this station.
    /// Panics if this station was not initialized.
    pub fn station_coefficients(&self, station_id: usize) -> &StationCoefficients {
        self.coefficients.get(station_id).unwrap_or_else(|| {
            panic!(
                "station #{} not initialized ({} stations)",
                station_id,
                self.coefficients.len()
            )
        })
    }

    /// Returns the height correction coefficient, which scales with
    /// the station height (in kilometers) in [Troposphere::mapping_function_hydrostatic].
    pub fn height_correction_coefficient(&self, elevation_rad: f64) -> f64 {
        self.config
            .height_correction
            .coefficient(elevation_rad.sin())
    }

    /// Refreshes the [AprioriValues] for this [Epoch].
    /// This is a no-op when the current values are already valid at this [Epoch].
    /// On failure, the previous values are discarded.
    pub fn refresh(&mut self, epoch: Epoch) -> Result<(), Error> {
        if let Some((valid_epoch, _)) = &self.apriori {
            if *valid_epoch == epoch {
                return Ok(());
            }
        }

        self.apriori = None;

        let values = self.source.compute(epoch).map_err(|e| {
            #[cfg(feature = "log")]
            error!("gmf: failed to refresh a priori values at {}: {}", epoch, e);
            e
        })?;

        if values.len() != self.stations.len() {
            return Err(Error::StationCountMismatch {
                expected: self.stations.len(),
                found: values.len(),
            });
        }

        #[cfg(feature = "log")]
        debug!("gmf: a priori values refreshed at {}", epoch);

        self.apriori = Some((epoch, values));
        Ok(())
    }

    /// Refreshes and returns [AprioriValues] of this station.
    fn refreshed_apriori(&mut self, epoch: Epoch, station_id: usize) -> Result<AprioriValues, Error> {
        self.refresh(epoch)?;

        let (_, values) = self
            .apriori
            .as_ref()
            .ok_or(Error::EpochOutOfRange(epoch))?;

        match values.get(station_id) {
            Some(values) => Ok(*values),
            None => panic!(
                "station #{} not initialized ({} stations)",
                station_id,
                values.len()
            ),
        }
    }
}

impl<A: AprioriSource> Troposphere for GlobalMapping<A> {
    fn init(&mut self, positions: &[[f64; 3]]) -> Result<(), Error> {
        let stations = positions
            .iter()
            .map(|position| Station::from_cartesian(position, &self.ellipsoid))
            .collect::<Vec<_>>();

        self.init_stations(&stations)
    }

    fn slant_delay(
        &mut self,
        epoch: Epoch,
        station_id: usize,
        azimuth_rad: f64,
        elevation_rad: f64,
    ) -> Result<f64, Error> {
        let apriori = self.refreshed_apriori(epoch, station_id)?;

        let gmfh = self.mapping_function_hydrostatic(epoch, station_id, azimuth_rad, elevation_rad);
        let gmfw = self.mapping_function_wet(epoch, station_id, azimuth_rad, elevation_rad);

        let mfgh = gradient_mapping(elevation_rad, HYDROSTATIC_GRADIENT);
        let mfgw = gradient_mapping(elevation_rad, WET_GRADIENT);

        let (sin_az, cos_az) = azimuth_rad.sin_cos();

        Ok(gmfh * apriori.zenith_dry_delay
            + gmfw * apriori.zenith_wet_delay
            + (mfgh * apriori.gradient_dry_north + mfgw * apriori.gradient_wet_north) * cos_az
            + (mfgh * apriori.gradient_dry_east + mfgw * apriori.gradient_wet_east) * sin_az)
    }

    fn mapping_function_hydrostatic(
        &self,
        epoch: Epoch,
        station_id: usize,
        _: f64,
        elevation_rad: f64,
    ) -> f64 {
        let coefficients = self.station_coefficients(station_id);
        let angle = annual_angle(epoch);
        let sin_e = elevation_rad.sin();

        let gmfh = ContinuedFraction::new(
            coefficients.a_hydrostatic(angle),
            B_HYDROSTATIC,
            coefficients.c_hydrostatic(angle),
        )
        .evaluate(sin_e);

        let height_correction = self.config.height_correction.coefficient(sin_e);
        let gmfh = gmfh + height_correction * coefficients.height_km;

        #[cfg(feature = "log")]
        trace!("gmf: {} station #{} gmfh: {:21.15e}", epoch, station_id, gmfh);

        gmfh
    }

    fn mapping_function_wet(
        &self,
        epoch: Epoch,
        station_id: usize,
        _: f64,
        elevation_rad: f64,
    ) -> f64 {
        let coefficients = self.station_coefficients(station_id);

        let gmfw = ContinuedFraction::new(coefficients.a_wet(annual_angle(epoch)), B_WET, C_WET)
            .evaluate(elevation_rad.sin());

        #[cfg(feature = "log")]
        trace!("gmf: {} station #{} gmfw: {:21.15e}", epoch, station_id, gmfw);

        gmfw
    }

    fn mapping_function_gradient(
        &self,
        _: Epoch,
        _: usize,
        azimuth_rad: f64,
        elevation_rad: f64,
    ) -> (f64, f64) {
        // hydrostatic gradient mapping, for both components
        let mfg = gradient_mapping(elevation_rad, HYDROSTATIC_GRADIENT);
        let (sin_az, cos_az) = azimuth_rad.sin_cos();
        (mfg * cos_az, mfg * sin_az)
    }

    fn apriori_values(&mut self, epoch: Epoch, station_id: usize) -> Result<AprioriValues, Error> {
        self.refreshed_apriori(epoch, station_id)
    }
}
