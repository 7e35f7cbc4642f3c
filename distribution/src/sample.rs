//! Enumerating (or sampling) the positive values of a format.
//!
//! Wide float formats have far too many values to visit them all
//! (FP32 has 2^31 positive bit patterns), so for each exponent we visit
//! only every `step`th mantissa.  The counts obtained that way are
//! scaled back up by the histogram builder using the same
//! [`SamplingPlan`].  Subnormals are always enumerated exhaustively,
//! and so are integers.
use conv::*;
use tracing::{event, Level};

use formats::prelude::*;

use super::error::HistogramError;

#[cfg(test)]
mod tests;

/// Integer formats wider than this are not enumerated.
pub const MAX_ENUMERATED_INTEGER_WIDTH: u32 = 32;

/// How a float format's normal values are subsampled for a given
/// target sample count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingPlan {
    /// Number of mantissa values we aim to visit per exponent.
    pub mantissa_samples_per_exponent: u64,
    /// Distance between successive visited mantissa values.
    pub mantissa_step: u64,
    /// Approximate number of bit patterns each sample stands for.
    pub sampling_factor: u64,
}

impl SamplingPlan {
    pub fn new(
        format: &FloatFormat,
        target_sample_count: u64,
    ) -> Result<SamplingPlan, HistogramError> {
        if target_sample_count == 0 {
            return Err(HistogramError::InvalidSampleCount);
        }
        let exponent_count: u64 = 1 << format.e_width();
        let mantissa_count: u64 = 1 << format.m_width();
        // When there are fewer samples than exponents we still take
        // one sample per exponent.
        let mantissa_samples_per_exponent = (target_sample_count / exponent_count).max(1);
        let mantissa_step = (mantissa_count / mantissa_samples_per_exponent).max(1);
        let population: u64 = 1 << (format.e_width() + format.m_width());
        let sampling_factor = (population / target_sample_count).max(1);
        let plan = SamplingPlan {
            mantissa_samples_per_exponent,
            mantissa_step,
            sampling_factor,
        };
        event!(
            Level::DEBUG,
            "sampling plan for E{}M{} with target {}: {:?}",
            format.e_width(),
            format.m_width(),
            target_sample_count,
            plan
        );
        Ok(plan)
    }
}

fn positive_float_value(format: FloatFormat, e: u64, m: u64) -> Option<f64> {
    match FloatInstance::new(format, 0, e, m) {
        Ok(instance) => Some(instance.value()).filter(|v| v.is_finite()),
        Err(err) => {
            event!(
                Level::ERROR,
                "bug: enumerated an invalid bit pattern (e={}, m={}): {}",
                e,
                m,
                err
            );
            None
        }
    }
}

/// The log2 of every positive subnormal value of `format` followed by
/// the log2 of the normal values chosen by `plan`.  NaN and infinity
/// are left out.  The iterator is single-pass; call this again to
/// sample again.
pub fn float_log2_values(format: FloatFormat, plan: SamplingPlan) -> impl Iterator<Item = f64> {
    let mantissa_limit = format.mantissa_limit();
    let step = usize::value_from(plan.mantissa_step).unwrap_or(usize::MAX);
    let subnormals = (1..=mantissa_limit).map(|m| (0, m));
    let normals = (1..=format.exponent_limit())
        .flat_map(move |e| (0..=mantissa_limit).step_by(step).map(move |m| (e, m)));
    subnormals
        .chain(normals)
        .filter_map(move |(e, m)| positive_float_value(format, e, m))
        .map(f64::log2)
}

/// The log2 of every positive value of `format`, scaled.
pub fn integer_log2_values(
    format: ScaledTwosComplementFormat,
) -> Result<impl Iterator<Item = f64>, HistogramError> {
    if format.width() > MAX_ENUMERATED_INTEGER_WIDTH {
        return Err(HistogramError::TooManyValues {
            width: format.width(),
        });
    }
    let base = *format.base();
    // Exact for any scale below 2^53.
    let scale = format.scale() as f64;
    Ok((1..=base.uint_limit() >> 1)
        .filter_map(move |uint| match TwosComplementInstance::new(base, uint) {
            Ok(instance) => f64::value_from(instance.value()).ok(),
            Err(err) => {
                event!(
                    Level::ERROR,
                    "bug: enumerated an invalid bit pattern ({}): {}",
                    uint,
                    err
                );
                None
            }
        })
        .map(move |v| (v * scale).log2()))
}
