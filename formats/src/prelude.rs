//! The prelude exports the structs which are useful in describing
//! and decoding number formats.  Most users of the crate need only
//! `use formats::prelude::*`.
pub use super::catalog::{lookup, well_known, NamedFormat};
pub use super::config::{FloatConfig, FormatConfig, IntegerConfig};
pub use super::encoding::{EncodingCategory, InfEncoding, NanEncoding, ZeroEncoding};
pub use super::error::*;
pub use super::float::instance::{FloatClass, FloatInstance};
pub use super::float::{FloatFormat, FloatVariant};
pub use super::format::{Format, NumericFormat};
pub use super::integer::instance::TwosComplementInstance;
pub use super::integer::{ScaledTwosComplementFormat, TwosComplementFormat};
