//! Two's-complement signed integer formats, optionally scaled.
use serde::Serialize;

use super::error::FormatError;

pub(crate) mod instance;

/// Widest integer format we accept.
pub const MAX_INTEGER_WIDTH: u32 = 64;

/// Any two's-complement signed integer of `width` bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TwosComplementFormat {
    width: u32,
}

impl TwosComplementFormat {
    /// A one-bit format can only hold 0 and -1, which leaves it with
    /// no positive values at all, so the width must be at least 2.
    pub fn new(width: u32) -> Result<TwosComplementFormat, FormatError> {
        if (2..=MAX_INTEGER_WIDTH).contains(&width) {
            Ok(TwosComplementFormat { width })
        } else {
            Err(FormatError::DegenerateFormat(format!(
                "integer width {width} is outside the supported range [2, {MAX_INTEGER_WIDTH}]"
            )))
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Largest value of the unsigned bit pattern (all ones).
    pub const fn uint_limit(&self) -> u64 {
        u64::MAX >> (64 - self.width)
    }

    /// Largest positive value, `2^(width-1) - 1`.
    pub const fn max_value(&self) -> i64 {
        (self.uint_limit() >> 1) as i64
    }

    /// Reinterprets an unsigned bit pattern as a two's-complement
    /// value.  The caller guarantees `uint <= uint_limit()`.
    pub(crate) const fn reinterpret(&self, uint: u64) -> i64 {
        if uint <= self.max_value() as u64 {
            uint as i64
        } else {
            // uint - 2^width, computed without overflowing at width 64.
            (uint as i128 - (1i128 << self.width)) as i64
        }
    }

    /// Absolute minimum representable (non-zero) value.
    pub fn abs_min(&self) -> f64 {
        1.0
    }

    /// Absolute maximum representable value.  This is exact up to a
    /// width of 54 bits; wider formats round to the nearest `f64`, so
    /// at 64 bits the result is 2^63 rather than 2^63 - 1.
    pub fn abs_max(&self) -> f64 {
        self.max_value() as f64
    }
}

/// A version of [`TwosComplementFormat`] in which every value is
/// multiplied by `scale`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ScaledTwosComplementFormat {
    base: TwosComplementFormat,
    scale: u64,
}

impl ScaledTwosComplementFormat {
    pub fn new(width: u32, scale: u64) -> Result<ScaledTwosComplementFormat, FormatError> {
        if scale == 0 {
            return Err(FormatError::DegenerateFormat(
                "integer scale must be at least 1".to_string(),
            ));
        }
        Ok(ScaledTwosComplementFormat {
            base: TwosComplementFormat::new(width)?,
            scale,
        })
    }

    pub const fn base(&self) -> &TwosComplementFormat {
        &self.base
    }

    pub const fn width(&self) -> u32 {
        self.base.width
    }

    pub const fn scale(&self) -> u64 {
        self.scale
    }

    /// The scaled value of an unsigned bit pattern.  This is for range
    /// queries; instances themselves hold unscaled values.
    pub fn decode(&self, uint: u64) -> Result<f64, FormatError> {
        let unscaled = instance::TwosComplementInstance::new(self.base, uint)?.value();
        Ok(unscaled as f64 * self.scale as f64)
    }

    pub fn abs_min(&self) -> f64 {
        self.base.abs_min() * self.scale as f64
    }

    pub fn abs_max(&self) -> f64 {
        self.base.abs_max() * self.scale as f64
    }
}

impl From<TwosComplementFormat> for ScaledTwosComplementFormat {
    fn from(base: TwosComplementFormat) -> ScaledTwosComplementFormat {
        ScaledTwosComplementFormat { base, scale: 1 }
    }
}
