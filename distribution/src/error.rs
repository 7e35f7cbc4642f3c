use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Reasons why a histogram cannot be built.  Binning itself never
/// fails; these all describe unusable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HistogramError {
    /// The bin width must be finite and positive.
    InvalidBinWidth(f64),
    /// At least one sample is needed.
    InvalidSampleCount,
    /// The bin width is so small that the bin edges would not fit in
    /// memory.
    TooManyBins(f64),
    /// Integer formats are enumerated exhaustively, which is only
    /// feasible for narrow widths.
    TooManyValues { width: u32 },
}

impl Display for HistogramError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            HistogramError::InvalidBinWidth(w) => {
                write!(f, "bin width {w} is not a finite positive number")
            }
            HistogramError::InvalidSampleCount => f.write_str("sample count must be at least 1"),
            HistogramError::TooManyBins(n) => write!(f, "{n} bins is too many"),
            HistogramError::TooManyValues { width } => write!(
                f,
                "a {width}-bit integer format has too many values to enumerate"
            ),
        }
    }
}

impl Error for HistogramError {}
