use std::path::PathBuf;

use crate::{error::Error, mapf::HeightCorrection};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [GlobalMappingConfig] gathers the construction time options
/// of [crate::prelude::GlobalMapping].
///
/// ```
/// use gmf::prelude::*;
///
/// let config = GlobalMappingConfig::new("troposphere/gpt3_grid1deg.dat");
///
/// // Niell (1996) height correction is used by default
/// assert_eq!(config.height_correction, HeightCorrection::default());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlobalMappingConfig {
    /// Gridded GPT input file, from which the a priori values are derived.
    pub gpt_file: PathBuf,

    /// [HeightCorrection] applied to the hydrostatic mapping function.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height_correction: HeightCorrection,
}

impl GlobalMappingConfig {
    /// Builds a new [GlobalMappingConfig] with default [HeightCorrection].
    pub fn new<P: Into<PathBuf>>(gpt_file: P) -> Self {
        Self {
            gpt_file: gpt_file.into(),
            height_correction: Default::default(),
        }
    }

    /// Copies and returns [GlobalMappingConfig] with updated [HeightCorrection].
    pub fn with_height_correction(mut self, height_correction: HeightCorrection) -> Self {
        self.height_correction = height_correction;
        self
    }

    /// Verifies this [GlobalMappingConfig] is complete.
    pub fn validate(&self) -> Result<(), Error> {
        if self.gpt_file.as_os_str().is_empty() {
            return Err(Error::MissingGptFile);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_gpt_file() {
        let config = GlobalMappingConfig::new("");
        assert!(matches!(config.validate(), Err(Error::MissingGptFile)));
    }

    #[test]
    fn custom_height_correction() {
        let correction = HeightCorrection {
            a: 2.0E-5,
            b: 5.0E-3,
            c: 1.0E-3,
        };

        let config = GlobalMappingConfig::new("gpt3_5.grd").with_height_correction(correction);
        assert_eq!(config.height_correction, correction);
        assert_eq!(config.gpt_file, PathBuf::from("gpt3_5.grd"));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn json_config() {
        let config: GlobalMappingConfig =
            serde_json::from_str(r#"{ "gpt_file": "troposphere/gpt3_grid1deg.dat" }"#).unwrap();

        assert_eq!(config.gpt_file, PathBuf::from("troposphere/gpt3_grid1deg.dat"));
        assert_eq!(config.height_correction, HeightCorrection::default());

        let config: GlobalMappingConfig = serde_json::from_str(
            r#"{
                "gpt_file": "gpt.dat",
                "height_correction": { "a": 1.0e-5, "b": 2.0e-3, "c": 3.0e-3 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.height_correction.a, 1.0E-5);
        assert_eq!(config.height_correction.c, 3.0E-3);

        // gpt file is mandatory
        assert!(serde_json::from_str::<GlobalMappingConfig>("{}").is_err());
    }
}
