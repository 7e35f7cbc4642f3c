//! Generalised IEEE 754 binary floating-point formats.
//!
//! A [`FloatFormat`] is described by the width of its exponent and
//! mantissa fields plus a [`FloatVariant`], which selects the exponent
//! bias and the special-value encodings.  All derived quantities
//! (exponent range, smallest and largest magnitudes) are computed
//! exactly; the supported widths are limited so that every value the
//! format can hold is also exactly representable as an `f64`.
use serde::Serialize;

use super::encoding::{InfEncoding, NanEncoding, ZeroEncoding};
use super::error::FormatError;

pub(crate) mod instance;
#[cfg(test)]
mod tests;

/// Widest exponent field we accept (the width of an `f64`'s).
pub const MAX_EXPONENT_WIDTH: u32 = 11;
/// Widest mantissa field we accept (the width of an `f64`'s).
pub const MAX_MANTISSA_WIDTH: u32 = 52;

/// Returns 2^k exactly, or 0.0 / infinity if 2^k is outside the
/// range of `f64`.
pub(crate) fn exp2i(k: i64) -> f64 {
    const MIN_NORMAL_EXP: i64 = -1022;
    const MIN_SUBNORMAL_EXP: i64 = -1074;
    const MAX_EXP: i64 = 1023;
    if k > MAX_EXP {
        f64::INFINITY
    } else if k >= MIN_NORMAL_EXP {
        f64::from_bits(((k + MAX_EXP) as u64) << 52)
    } else if k >= MIN_SUBNORMAL_EXP {
        f64::from_bits(1u64 << (k - MIN_SUBNORMAL_EXP))
    } else {
        0.0
    }
}

/// The members of the float family.  The variants share the IEEE 754
/// arithmetic and differ only in the handful of quantities they
/// override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FloatVariant {
    /// Exactly as IEEE 754 defines binary formats: the all-ones
    /// exponent is reserved for infinity and NaN.
    Ieee754,

    /// The FP8 formats proposed by Graphcore, AMD and Qualcomm.  The
    /// bias is chosen freely, there is no infinity, the all-ones
    /// exponent holds ordinary values and the negative-zero pattern
    /// is the only NaN.
    CustomBias { bias: i32 },

    /// The E4M3 format proposed by Nvidia, ARM and Intel.  There is no
    /// infinity and the all-ones exponent holds ordinary values,
    /// except for the single all-ones pattern which is NaN.
    ReservedNanPattern,
}

impl FloatVariant {
    pub const fn nan_encoding(&self) -> NanEncoding {
        match self {
            FloatVariant::Ieee754 => NanEncoding::ExponentOnesMantissaNonZero,
            FloatVariant::CustomBias { .. } => NanEncoding::NegativeZero,
            FloatVariant::ReservedNanPattern => NanEncoding::ExponentOnesMantissaOnes,
        }
    }

    pub const fn inf_encoding(&self) -> InfEncoding {
        match self {
            FloatVariant::Ieee754 => InfEncoding::ExponentOnesMantissaZero,
            FloatVariant::CustomBias { .. } | FloatVariant::ReservedNanPattern => {
                InfEncoding::NotApplicable
            }
        }
    }

    /// Every variant decodes the all-zero exponent and mantissa as
    /// zero of either sign, unless the NaN encoding claims the
    /// negative pattern first, so the canonical tag is the same for
    /// all of them.
    pub const fn zero_encoding(&self) -> ZeroEncoding {
        ZeroEncoding::Signed
    }

    /// Chooses the variant which uses the given pair of encodings.
    /// `custom_bias` is only meaningful for [`FloatVariant::CustomBias`];
    /// when it is absent that variant falls back to the IEEE 754 bias
    /// for `e_width`.
    pub fn from_encodings(
        e_width: u32,
        nan: NanEncoding,
        inf: InfEncoding,
        custom_bias: Option<i32>,
    ) -> Result<FloatVariant, FormatError> {
        match (nan, inf) {
            (NanEncoding::ExponentOnesMantissaNonZero, InfEncoding::ExponentOnesMantissaZero)
                if custom_bias.is_none() =>
            {
                Ok(FloatVariant::Ieee754)
            }
            (NanEncoding::ExponentOnesMantissaOnes, InfEncoding::NotApplicable)
                if custom_bias.is_none() =>
            {
                Ok(FloatVariant::ReservedNanPattern)
            }
            (NanEncoding::NegativeZero, InfEncoding::NotApplicable) => {
                Ok(FloatVariant::CustomBias {
                    bias: custom_bias.unwrap_or_else(|| standard_bias(e_width)),
                })
            }
            _ => Err(FormatError::IncompatibleEncodings { nan, inf }),
        }
    }

    /// True when the all-ones exponent is entirely given over to
    /// infinity and NaN.
    const fn reserves_top_exponent(&self) -> bool {
        matches!(self, FloatVariant::Ieee754)
    }
}

/// The IEEE 754 bias for an exponent field of the given width,
/// `2^(e_width-1) - 1`.  Widths outside [1, 31] saturate, since
/// [`FloatFormat::new`] rejects them anyway.
pub const fn standard_bias(e_width: u32) -> i32 {
    match i32::MAX.checked_shr(32u32.saturating_sub(e_width)) {
        Some(bias) => bias,
        None => 0,
    }
}

/// A binary floating-point format.
///
/// Construct one with [`FloatFormat::ieee754`],
/// [`FloatFormat::custom_bias`], [`FloatFormat::reserved_nan_pattern`]
/// or [`FloatFormat::new`]; all of them reject formats whose derived
/// bounds are not `0 < abs_min <= abs_min_normal <= abs_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FloatFormat {
    e_width: u32,
    m_width: u32,
    variant: FloatVariant,
}

impl FloatFormat {
    pub fn new(e_width: u32, m_width: u32, variant: FloatVariant) -> Result<Self, FormatError> {
        if !(1..=MAX_EXPONENT_WIDTH).contains(&e_width) {
            return Err(FormatError::DegenerateFormat(format!(
                "exponent width {e_width} is outside the supported range [1, {MAX_EXPONENT_WIDTH}]"
            )));
        }
        if !(1..=MAX_MANTISSA_WIDTH).contains(&m_width) {
            return Err(FormatError::DegenerateFormat(format!(
                "mantissa width {m_width} is outside the supported range [1, {MAX_MANTISSA_WIDTH}]"
            )));
        }
        let result = FloatFormat {
            e_width,
            m_width,
            variant,
        };
        result.check_bounds()?;
        Ok(result)
    }

    pub fn ieee754(e_width: u32, m_width: u32) -> Result<Self, FormatError> {
        FloatFormat::new(e_width, m_width, FloatVariant::Ieee754)
    }

    pub fn custom_bias(e_width: u32, m_width: u32, bias: i32) -> Result<Self, FormatError> {
        FloatFormat::new(e_width, m_width, FloatVariant::CustomBias { bias })
    }

    pub fn reserved_nan_pattern(e_width: u32, m_width: u32) -> Result<Self, FormatError> {
        FloatFormat::new(e_width, m_width, FloatVariant::ReservedNanPattern)
    }

    fn check_bounds(&self) -> Result<(), FormatError> {
        let (abs_min, abs_min_normal, abs_max) =
            (self.abs_min(), self.abs_min_normal(), self.abs_max());
        if abs_min > 0.0 && abs_max.is_finite() && abs_min <= abs_min_normal && abs_min_normal <= abs_max
        {
            Ok(())
        } else {
            Err(FormatError::DegenerateFormat(format!(
                "E{}M{} {:?} has abs_min={abs_min:e}, abs_min_normal={abs_min_normal:e}, abs_max={abs_max:e}",
                self.e_width, self.m_width, self.variant
            )))
        }
    }

    pub const fn e_width(&self) -> u32 {
        self.e_width
    }

    pub const fn m_width(&self) -> u32 {
        self.m_width
    }

    pub const fn variant(&self) -> FloatVariant {
        self.variant
    }

    /// True for formats which follow IEEE 754 to the letter.
    pub const fn is_ieee754(&self) -> bool {
        matches!(self.variant, FloatVariant::Ieee754)
    }

    pub const fn nan_encoding(&self) -> NanEncoding {
        self.variant.nan_encoding()
    }

    pub const fn inf_encoding(&self) -> InfEncoding {
        self.variant.inf_encoding()
    }

    pub const fn zero_encoding(&self) -> ZeroEncoding {
        self.variant.zero_encoding()
    }

    /// Largest value of the exponent field (all ones).
    pub const fn exponent_limit(&self) -> u64 {
        (1 << self.e_width) - 1
    }

    /// Largest value of the mantissa field (all ones).
    pub const fn mantissa_limit(&self) -> u64 {
        (1 << self.m_width) - 1
    }

    /// Exponent bias.
    pub const fn bias(&self) -> i32 {
        match self.variant {
            FloatVariant::CustomBias { bias } => bias,
            FloatVariant::Ieee754 | FloatVariant::ReservedNanPattern => standard_bias(self.e_width),
        }
    }

    /// Minimum exponent.  This is not `0 - bias` as the zero exponent
    /// field is reserved for subnormals.
    pub const fn min_e(&self) -> i64 {
        1 - self.bias() as i64
    }

    /// Maximum exponent of a finite value.
    pub const fn max_e(&self) -> i64 {
        let reserved: i64 = if self.variant.reserves_top_exponent() {
            1
        } else {
            0
        };
        (1i64 << self.e_width) - 1 - reserved - self.bias() as i64
    }

    /// Smallest positive normal value.
    pub fn abs_min_normal(&self) -> f64 {
        exp2i(self.min_e())
    }

    /// Smallest positive value (a subnormal).
    pub fn abs_min(&self) -> f64 {
        exp2i(self.min_e() - i64::from(self.m_width))
    }

    /// Largest finite value.
    pub fn abs_max(&self) -> f64 {
        // 2^max_e * (2 - 2^-m) is (2^(m+1) - 1) mantissa steps of 2^(max_e - m).
        let step = exp2i(self.max_e() - i64::from(self.m_width));
        let mut steps: u64 = (1 << (self.m_width + 1)) - 1;
        if let FloatVariant::ReservedNanPattern = self.variant {
            // The all-ones pattern is NaN, not the largest value.
            steps -= 1;
        }
        // Exact: steps < 2^53.
        steps as f64 * step
    }
}
