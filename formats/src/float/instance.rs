use std::cmp::Ordering;

use super::super::error::{Field, FormatError};
use super::super::encoding::{InfEncoding, NanEncoding};
use super::{exp2i, FloatFormat};

/// The kinds of value a float bit pattern can decode to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FloatClass {
    Zero,
    Subnormal,
    Normal,
    Infinite,
    Nan,
}

/// A single bit pattern of a [`FloatFormat`], split into its sign,
/// exponent and mantissa fields.
///
/// Instances are immutable.  Equality and ordering are those of the
/// decoded value, so they are provided by [`FloatInstance::equals`]
/// and [`FloatInstance::compare`] rather than by `PartialEq` and
/// `PartialOrd`; the distinct patterns of +0 and -0 are equal, and
/// NaN is unordered with respect to everything including itself.
#[derive(Clone, Copy, Debug)]
pub struct FloatInstance {
    format: FloatFormat,
    s: u64,
    e: u64,
    m: u64,
}

fn check_field(field: Field, value: u64, max: u64) -> Result<(), FormatError> {
    if value > max {
        Err(FormatError::FieldOutOfRange { field, value, max })
    } else {
        Ok(())
    }
}

impl FloatInstance {
    pub fn new(format: FloatFormat, s: u64, e: u64, m: u64) -> Result<FloatInstance, FormatError> {
        check_field(Field::Sign, s, 1)?;
        check_field(Field::Exponent, e, format.exponent_limit())?;
        check_field(Field::Mantissa, m, format.mantissa_limit())?;
        Ok(FloatInstance { format, s, e, m })
    }

    pub const fn format(&self) -> &FloatFormat {
        &self.format
    }

    pub const fn sign_field(&self) -> u64 {
        self.s
    }

    pub const fn exponent_field(&self) -> u64 {
        self.e
    }

    pub const fn mantissa_field(&self) -> u64 {
        self.m
    }

    fn is_inf(&self) -> bool {
        match self.format.inf_encoding() {
            InfEncoding::ExponentOnesMantissaZero => {
                self.e == self.format.exponent_limit() && self.m == 0
            }
            InfEncoding::NotApplicable => false,
        }
    }

    fn is_nan(&self) -> bool {
        match self.format.nan_encoding() {
            NanEncoding::ExponentOnesMantissaNonZero => {
                self.e == self.format.exponent_limit() && self.m != 0
            }
            NanEncoding::ExponentOnesMantissaOnes => {
                self.e == self.format.exponent_limit() && self.m == self.format.mantissa_limit()
            }
            NanEncoding::NegativeZero => self.s == 1 && self.e == 0 && self.m == 0,
        }
    }

    /// Classifies the bit pattern.  Infinity is checked before NaN,
    /// and both before zero and subnormals, so a pattern claimed by a
    /// special-value encoding is never read as a number.
    pub fn classify(&self) -> FloatClass {
        if self.is_inf() {
            FloatClass::Infinite
        } else if self.is_nan() {
            FloatClass::Nan
        } else if self.e == 0 {
            if self.m == 0 {
                FloatClass::Zero
            } else {
                FloatClass::Subnormal
            }
        } else {
            FloatClass::Normal
        }
    }

    /// The numerical value of the bit pattern, as defined by the
    /// format.
    pub fn value(&self) -> f64 {
        let sign: f64 = if self.s == 0 { 1.0 } else { -1.0 };
        let m_width = i64::from(self.format.m_width());
        // The significand is below 2^53 and every power of two we
        // scale by lies within [abs_min, abs_max], so these products
        // are exact.
        match self.classify() {
            FloatClass::Infinite => sign * f64::INFINITY,
            FloatClass::Nan => f64::NAN,
            FloatClass::Zero | FloatClass::Subnormal => {
                sign * (self.m as f64) * exp2i(self.format.min_e() - m_width)
            }
            FloatClass::Normal => {
                let significand = (1u64 << m_width) | self.m;
                let e = self.e as i64 - i64::from(self.format.bias());
                sign * (significand as f64) * exp2i(e - m_width)
            }
        }
    }

    /// Compares decoded values.  Returns `None` when either side is
    /// NaN.
    pub fn compare(&self, other: &FloatInstance) -> Option<Ordering> {
        self.value().partial_cmp(&other.value())
    }

    /// True when the decoded values are equal (so never when either
    /// is NaN).
    pub fn equals(&self, other: &FloatInstance) -> bool {
        self.value() == other.value()
    }
}
