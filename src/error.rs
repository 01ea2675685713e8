use thiserror::Error;

use hifitime::Epoch;

use std::io::Error as IoError;

/// Errors that may rise when preparing or refreshing the model.
/// Evaluating the mapping functions themselves is infaillible.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised by [crate::apriori::AprioriSource] implementations
    /// that read the gridded GPT file.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    #[error("missing gridded GPT input file")]
    MissingGptFile,

    #[error("a priori values defined for {found} stations, {expected} were initialized")]
    StationCountMismatch { expected: usize, found: usize },

    #[error("no a priori values available at {0}")]
    EpochOutOfRange(Epoch),

    #[error("empty a priori time series")]
    EmptyTimeSeries,

    #[error("grid spacing must be positive finite number")]
    InvalidGridSpacing,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn gpt_file_io_error() {
        let error: Error = IoError::new(ErrorKind::NotFound, "gpt3_grid1deg.dat").into();
        assert!(matches!(error, Error::IoError(_)));
        assert_eq!(error.to_string(), "I/O error: gpt3_grid1deg.dat");
    }
}
