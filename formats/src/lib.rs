//! The `formats` crate defines fixed-width binary number formats and
//! decodes their bit patterns.  It knows about two families: a
//! generalised IEEE 754 binary floating-point family (with the
//! special-value conventions of the various FP8 proposals) and
//! two's-complement integers.  Anything which analyses the values a
//! format can represent (see the `distribution` crate) depends on
//! this crate; this crate depends on nothing which does analysis.

mod error;
mod format;

pub mod catalog;
pub mod config;
pub mod encoding;
pub mod float;
pub mod integer;
pub mod prelude;

pub use crate::error::*;
pub use crate::float::instance::{FloatClass, FloatInstance};
pub use crate::format::{Format, NumericFormat};
pub use crate::integer::instance::TwosComplementInstance;

#[test]
fn test_prelude_names_both_families() {
    use prelude::*;
    let fp16: Format = FloatFormat::ieee754(5, 10)
        .expect("test data should be valid")
        .into();
    let int8: Format = TwosComplementFormat::new(8)
        .expect("test data should be valid")
        .into();
    assert_eq!(fp16.abs_max(), 65504.0);
    assert_eq!(int8.abs_max(), 127.0);
}
