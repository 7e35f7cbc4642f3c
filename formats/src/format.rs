//! The capability shared by every number format, and a sum type
//! over the two families.
use serde::Serialize;

use super::float::FloatFormat;
use super::integer::{ScaledTwosComplementFormat, TwosComplementFormat};

/// Trait common to the float formats (defined in the [`crate::float`]
/// module) and the integer formats (defined in the
/// [`crate::integer`] module).  Both bounds are positive magnitudes.
pub trait NumericFormat {
    /// Smallest positive representable value.
    fn abs_min(&self) -> f64;
    /// Largest finite representable value.
    fn abs_max(&self) -> f64;
}

impl NumericFormat for FloatFormat {
    fn abs_min(&self) -> f64 {
        FloatFormat::abs_min(self)
    }

    fn abs_max(&self) -> f64 {
        FloatFormat::abs_max(self)
    }
}

impl NumericFormat for TwosComplementFormat {
    fn abs_min(&self) -> f64 {
        TwosComplementFormat::abs_min(self)
    }

    fn abs_max(&self) -> f64 {
        TwosComplementFormat::abs_max(self)
    }
}

impl NumericFormat for ScaledTwosComplementFormat {
    fn abs_min(&self) -> f64 {
        ScaledTwosComplementFormat::abs_min(self)
    }

    fn abs_max(&self) -> f64 {
        ScaledTwosComplementFormat::abs_max(self)
    }
}

/// Either kind of format.  Unscaled integer formats are held as
/// scaled ones with a scale of 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    Float(FloatFormat),
    Integer(ScaledTwosComplementFormat),
}

impl NumericFormat for Format {
    fn abs_min(&self) -> f64 {
        match self {
            Format::Float(f) => f.abs_min(),
            Format::Integer(f) => f.abs_min(),
        }
    }

    fn abs_max(&self) -> f64 {
        match self {
            Format::Float(f) => f.abs_max(),
            Format::Integer(f) => f.abs_max(),
        }
    }
}

impl From<FloatFormat> for Format {
    fn from(f: FloatFormat) -> Format {
        Format::Float(f)
    }
}

impl From<ScaledTwosComplementFormat> for Format {
    fn from(f: ScaledTwosComplementFormat) -> Format {
        Format::Integer(f)
    }
}

impl From<TwosComplementFormat> for Format {
    fn from(f: TwosComplementFormat) -> Format {
        Format::Integer(f.into())
    }
}
