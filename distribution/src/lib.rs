//! This crate characterises how the values of a number format are
//! distributed: it enumerates (or, for wide formats, samples) the
//! positive values a format can represent and bins them into a
//! histogram on a log2 scale.
#![crate_name = "distribution"]

mod error;
mod histogram;
mod sample;

pub use error::HistogramError;
pub use histogram::{
    bin_edges, binned_counts, log_histogram, BinCount, HistogramBin, DEFAULT_BIN_WIDTH,
    DEFAULT_SAMPLE_COUNT, MAX_BIN_EDGES,
};
pub use sample::{
    float_log2_values, integer_log2_values, SamplingPlan, MAX_ENUMERATED_INTEGER_WIDTH,
};
