//! Declarative format descriptions.
//!
//! A [`FormatConfig`] can be deserialized from any self-describing
//! serde format.  It names only the options a format needs:
//!
//! ```json
//! {"float": {"e_width": 4, "m_width": 3, "custom_bias": 8,
//!            "nan_encoding": "S=1,E=0,M=0", "inf_encoding": "N/A"}}
//! {"integer": {"width": 8, "scale": 512}}
//! ```
//!
//! Unknown keys are rejected, and so are unknown encoding tags.
//! When the encodings are left out, a float configuration describes
//! an IEEE 754 format (or the custom-bias variant, if `custom_bias`
//! is given).
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use super::encoding::{InfEncoding, NanEncoding, ZeroEncoding};
use super::error::FormatError;
use super::float::{FloatFormat, FloatVariant};
use super::format::Format;
use super::integer::ScaledTwosComplementFormat;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FloatConfig {
    pub e_width: u32,
    pub m_width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_bias: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nan_encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inf_encoding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero_encoding: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntegerConfig {
    pub width: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatConfig {
    Float(FloatConfig),
    Integer(IntegerConfig),
}

impl FloatConfig {
    fn default_encodings(&self) -> (NanEncoding, InfEncoding) {
        let default_variant = match self.custom_bias {
            Some(bias) => FloatVariant::CustomBias { bias },
            None => FloatVariant::Ieee754,
        };
        (
            default_variant.nan_encoding(),
            default_variant.inf_encoding(),
        )
    }

    pub fn build(&self) -> Result<FloatFormat, FormatError> {
        let (default_nan, default_inf) = self.default_encodings();
        let nan = match &self.nan_encoding {
            Some(tag) => NanEncoding::try_from(tag.as_str())?,
            None => default_nan,
        };
        let inf = match &self.inf_encoding {
            Some(tag) => InfEncoding::try_from(tag.as_str())?,
            None => default_inf,
        };
        let variant = FloatVariant::from_encodings(self.e_width, nan, inf, self.custom_bias)?;
        if let Some(tag) = &self.zero_encoding {
            // Either recognised spelling describes the same decoding,
            // so only the spelling itself is checked.
            ZeroEncoding::try_from(tag.as_str())?;
        }
        event!(
            Level::TRACE,
            "float configuration E{}M{} resolved to {:?}",
            self.e_width,
            self.m_width,
            variant
        );
        FloatFormat::new(self.e_width, self.m_width, variant)
    }
}

impl IntegerConfig {
    pub fn build(&self) -> Result<ScaledTwosComplementFormat, FormatError> {
        ScaledTwosComplementFormat::new(self.width, self.scale.unwrap_or(1))
    }
}

impl FormatConfig {
    pub fn build(&self) -> Result<Format, FormatError> {
        match self {
            FormatConfig::Float(config) => config.build().map(Format::Float),
            FormatConfig::Integer(config) => config.build().map(Format::Integer),
        }
    }
}

impl From<&FloatFormat> for FloatConfig {
    fn from(f: &FloatFormat) -> FloatConfig {
        FloatConfig {
            e_width: f.e_width(),
            m_width: f.m_width(),
            custom_bias: match f.variant() {
                FloatVariant::CustomBias { bias } => Some(bias),
                FloatVariant::Ieee754 | FloatVariant::ReservedNanPattern => None,
            },
            nan_encoding: Some(f.nan_encoding().to_string()),
            inf_encoding: Some(f.inf_encoding().to_string()),
            zero_encoding: Some(f.zero_encoding().to_string()),
        }
    }
}

impl From<&Format> for FormatConfig {
    fn from(f: &Format) -> FormatConfig {
        match f {
            Format::Float(float) => FormatConfig::Float(float.into()),
            Format::Integer(int) => FormatConfig::Integer(IntegerConfig {
                width: int.width(),
                scale: Some(int.scale()),
            }),
        }
    }
}
