//! Histograms of representable values, with both axes in log2 space.
use conv::*;
use serde::Serialize;
use tracing::{event, Level};

use formats::prelude::*;

use super::error::HistogramError;
use super::sample::{float_log2_values, integer_log2_values, SamplingPlan};


/// Default bin width, in log2 units.
pub const DEFAULT_BIN_WIDTH: f64 = 0.25;

/// Default target number of samples taken from a float format.
pub const DEFAULT_SAMPLE_COUNT: u64 = 1 << 15;

/// Upper limit on the number of bin edges we are willing to allocate.
pub const MAX_BIN_EDGES: usize = 1 << 20;

/// The number of values falling in `[start, end)`, corrected for
/// sampling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BinCount {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// One bin of a log histogram.  `log2_count` is negative infinity
/// for an empty bin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub log2_count: f64,
}

/// Bin edges `start, start + w, start + 2w, ...` strictly below
/// `ceil(log2(abs_max)) + 1`, where `start = ceil(log2(abs_min))`.
pub fn bin_edges<F: NumericFormat>(format: &F, bin_width: f64) -> Result<Vec<f64>, HistogramError> {
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Err(HistogramError::InvalidBinWidth(bin_width));
    }
    let start = format.abs_min().log2().ceil();
    let stop = format.abs_max().log2().ceil() + 1.0;
    let edge_count = ((stop - start) / bin_width).ceil();
    if edge_count > MAX_BIN_EDGES as f64 {
        return Err(HistogramError::TooManyBins(edge_count));
    }
    // In range: 0 < edge_count <= MAX_BIN_EDGES.
    let edge_count = edge_count as usize;
    Ok((0..edge_count)
        .map(|i| start + (i as f64) * bin_width)
        .collect())
}

/// Finds the bin containing `v`.  Bins are half-open except for the
/// last one, which also contains its upper edge.
fn bin_index(edges: &[f64], v: f64) -> Option<usize> {
    match (edges.first(), edges.last()) {
        (Some(first), Some(last)) if edges.len() >= 2 && *first <= v && v <= *last => {
            let upper = edges.partition_point(|edge| *edge <= v);
            Some((upper - 1).min(edges.len() - 2))
        }
        _ => None,
    }
}

fn count_into_bins(edges: &[f64], values: impl Iterator<Item = f64>) -> Vec<u64> {
    let mut counts = vec![0u64; edges.len().saturating_sub(1)];
    for v in values {
        if let Some(i) = bin_index(edges, v) {
            counts[i] += 1;
        }
    }
    counts
}

/// Counts the positive values of `format` in each log2 bin.
///
/// Float formats are sampled according to a [`SamplingPlan`] built
/// from `sample_count`, and the counts of bins lying in the normal
/// range are multiplied by the plan's sampling factor to estimate
/// the true number of values.  Subnormal bins and integer formats
/// are enumerated exhaustively and their counts are exact.
pub fn binned_counts(
    format: &Format,
    bin_width: f64,
    sample_count: u64,
) -> Result<Vec<BinCount>, HistogramError> {
    if sample_count == 0 {
        return Err(HistogramError::InvalidSampleCount);
    }
    let edges = bin_edges(format, bin_width)?;
    let counts: Vec<u64> = match format {
        Format::Float(f) => {
            let plan = SamplingPlan::new(f, sample_count)?;
            let raw = count_into_bins(&edges, float_log2_values(*f, plan));
            let normal_start = f.abs_min_normal().log2();
            raw.into_iter()
                .zip(edges.iter())
                .map(|(count, bin_start)| {
                    if *bin_start < normal_start {
                        count
                    } else {
                        count.saturating_mul(plan.sampling_factor)
                    }
                })
                .collect()
        }
        Format::Integer(i) => count_into_bins(&edges, integer_log2_values(*i)?),
    };
    let result: Vec<BinCount> = counts
        .into_iter()
        .zip(edges.windows(2))
        .map(|(count, edge)| BinCount {
            start: edge[0],
            end: edge[1],
            count,
        })
        .collect();
    event!(
        Level::DEBUG,
        "{} bins of width {} for {:?} hold {} values",
        result.len(),
        bin_width,
        format,
        result.iter().map(|bin| bin.count).sum::<u64>()
    );
    Ok(result)
}

/// Returns a histogram of the values expressible in `format`, where
/// both the bins and the counts are on a log2 scale.
///
/// `bin_width` is the width of each bin in log2 units (see
/// [`DEFAULT_BIN_WIDTH`]).  `sample_count` bounds the work done for
/// wide float formats (see [`DEFAULT_SAMPLE_COUNT`]); enumerating
/// every value of FP32 would be far too slow.
pub fn log_histogram(
    format: &Format,
    bin_width: f64,
    sample_count: u64,
) -> Result<Vec<HistogramBin>, HistogramError> {
    Ok(binned_counts(format, bin_width, sample_count)?
        .into_iter()
        .map(|bin| HistogramBin {
            start: bin.start,
            end: bin.end,
            // Counts above 2^53 are rounded, which a log scale hides.
            log2_count: f64::value_from(bin.count)
                .unwrap_or(bin.count as f64)
                .log2(),
        })
        .collect())
}
