//! Special-value encoding conventions.
//!
//! Different hardware vendors disagree about which bit patterns of a
//! small float denote NaN, infinity and zero.  Each convention is
//! named by a short tag, for example `E=all-1s, M≠0` means "the
//! exponent field is all ones and the mantissa field is non-zero".
//! The tags are a closed set; anything else is rejected when it is
//! parsed.
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::error::FormatError;

/// The kinds of special value a float format has to pick an encoding
/// for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodingCategory {
    Nan,
    Inf,
    Zero,
}

impl Display for EncodingCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            EncodingCategory::Nan => "NaN",
            EncodingCategory::Inf => "infinity",
            EncodingCategory::Zero => "zero",
        })
    }
}

fn unsupported(category: EncodingCategory, tag: &str) -> FormatError {
    FormatError::UnsupportedEncoding {
        category,
        tag: tag.to_owned(),
    }
}

/// How NaN is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NanEncoding {
    /// All-ones exponent, any non-zero mantissa (IEEE 754).
    ExponentOnesMantissaNonZero,
    /// Only the single pattern with all-ones exponent and all-ones
    /// mantissa.
    ExponentOnesMantissaOnes,
    /// The negative-zero pattern.  Used by formats which reuse the
    /// all-ones exponent for ordinary values.
    NegativeZero,
}

impl NanEncoding {
    pub const fn tag(&self) -> &'static str {
        match self {
            NanEncoding::ExponentOnesMantissaNonZero => "E=all-1s, M≠0",
            NanEncoding::ExponentOnesMantissaOnes => "E=all-1s, M=all-1s",
            NanEncoding::NegativeZero => "S=1,E=0,M=0",
        }
    }

    pub const fn all() -> [NanEncoding; 3] {
        [
            NanEncoding::ExponentOnesMantissaNonZero,
            NanEncoding::ExponentOnesMantissaOnes,
            NanEncoding::NegativeZero,
        ]
    }
}

/// How infinity is encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InfEncoding {
    /// All-ones exponent, zero mantissa (IEEE 754).
    ExponentOnesMantissaZero,
    /// The format has no infinity.
    NotApplicable,
}

impl InfEncoding {
    pub const fn tag(&self) -> &'static str {
        match self {
            InfEncoding::ExponentOnesMantissaZero => "E=all-1s, M=0",
            InfEncoding::NotApplicable => "N/A",
        }
    }

    pub const fn all() -> [InfEncoding; 2] {
        [
            InfEncoding::ExponentOnesMantissaZero,
            InfEncoding::NotApplicable,
        ]
    }
}

/// How zero is encoded.  This is descriptive only: in both
/// conventions the all-zero exponent and mantissa decode to zero
/// unless the NaN encoding claims the pattern first.  Formats report
/// [`ZeroEncoding::Signed`]; `Unsigned` is accepted as the spelling
/// the custom-bias FP8 proposals use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ZeroEncoding {
    /// Both +0 and -0 exist.
    Signed,
    /// Only +0 exists.
    Unsigned,
}

impl ZeroEncoding {
    pub const fn tag(&self) -> &'static str {
        match self {
            ZeroEncoding::Signed => "S=0/1, E=0, M=0",
            ZeroEncoding::Unsigned => "S=0, E=0, M=0",
        }
    }

    pub const fn all() -> [ZeroEncoding; 2] {
        [ZeroEncoding::Signed, ZeroEncoding::Unsigned]
    }
}

macro_rules! encoding_tag_conversions {
    ($T:ty, $category:expr) => {
        impl Display for $T {
            fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
                f.write_str(self.tag())
            }
        }

        impl TryFrom<&str> for $T {
            type Error = FormatError;
            fn try_from(s: &str) -> Result<$T, FormatError> {
                <$T>::all()
                    .into_iter()
                    .find(|candidate| candidate.tag() == s)
                    .ok_or_else(|| unsupported($category, s))
            }
        }

        impl TryFrom<String> for $T {
            type Error = FormatError;
            fn try_from(s: String) -> Result<$T, FormatError> {
                <$T>::try_from(s.as_str())
            }
        }

        impl From<$T> for String {
            fn from(encoding: $T) -> String {
                encoding.tag().to_owned()
            }
        }
    };
}

encoding_tag_conversions!(NanEncoding, EncodingCategory::Nan);
encoding_tag_conversions!(InfEncoding, EncodingCategory::Inf);
encoding_tag_conversions!(ZeroEncoding, EncodingCategory::Zero);
