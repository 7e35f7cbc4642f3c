//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::encoding::{EncodingCategory, InfEncoding, NanEncoding};

/// Identifies one of the raw bit fields of an instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Sign,
    Exponent,
    Mantissa,
    /// The whole bit pattern of a two's-complement integer, read as
    /// an unsigned number.
    Unsigned,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Field::Sign => "sign",
            Field::Exponent => "exponent",
            Field::Mantissa => "mantissa",
            Field::Unsigned => "unsigned",
        })
    }
}

/// Represents a failure to construct a format or an instance of one.
#[derive(Clone, Debug, PartialEq)]
pub enum FormatError {
    /// A field of an instance does not fit in the number of bits
    /// its format allows.  We never clamp such values.
    FieldOutOfRange { field: Field, value: u64, max: u64 },

    /// An encoding tag was not one of the conventions we know how to
    /// decode.
    UnsupportedEncoding {
        category: EncodingCategory,
        tag: String,
    },

    /// Both tags are recognised, but no float variant uses this
    /// combination of them.
    IncompatibleEncodings {
        nan: NanEncoding,
        inf: InfEncoding,
    },

    /// The format's widths are outside the supported range, or its
    /// derived bounds do not satisfy `0 < abs_min <= abs_min_normal
    /// <= abs_max`.
    DegenerateFormat(String),

    UnknownFormatName(String),
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            FormatError::FieldOutOfRange { field, value, max } => {
                write!(f, "{field} field value {value} is outside range [0, {max}]")
            }
            FormatError::UnsupportedEncoding { category, tag } => {
                write!(f, "{category} encoding '{tag}' is not recognised")
            }
            FormatError::IncompatibleEncodings { nan, inf } => write!(
                f,
                "no float format variant has NaN encoding '{nan}' together with infinity encoding '{inf}'"
            ),
            FormatError::DegenerateFormat(reason) => write!(f, "degenerate format: {reason}"),
            FormatError::UnknownFormatName(name) => write!(f, "unknown format name '{name}'"),
        }
    }
}

impl Error for FormatError {}
