//! Well-known formats, by name.
//!
//! These are the formats commonly compared when choosing a number
//! representation for machine learning: the IEEE 754 float widths,
//! the reduced-precision formats used by accelerators, the competing
//! FP8 proposals and scaled INT8.
use super::error::FormatError;
use super::float::FloatFormat;
use super::format::Format;
use super::integer::ScaledTwosComplementFormat;

/// A format together with the name it is usually known by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NamedFormat {
    pub name: &'static str,
    pub format: Format,
}

#[derive(Clone, Copy)]
enum Recipe {
    Ieee754(u32, u32),
    CustomBias(u32, u32, i32),
    ReservedNanPattern(u32, u32),
    Integer(u32, u64),
}

const RECIPES: [(&str, Recipe); 11] = [
    ("FP32", Recipe::Ieee754(8, 23)),
    ("TF32", Recipe::Ieee754(8, 10)),
    ("BF16", Recipe::Ieee754(8, 7)),
    ("FP16", Recipe::Ieee754(5, 10)),
    ("FP8_E5", Recipe::Ieee754(5, 2)),
    ("FP8_E4", Recipe::ReservedNanPattern(4, 3)),
    ("FP8_1.5.2_GAQ", Recipe::CustomBias(5, 2, 16)),
    ("FP8_1.4.3_GAQ", Recipe::CustomBias(4, 3, 8)),
    ("INT8", Recipe::Integer(8, 1)),
    ("INT8x2", Recipe::Integer(8, 2)),
    ("INT8x512", Recipe::Integer(8, 1 << 9)),
];

impl Recipe {
    fn build(self) -> Result<Format, FormatError> {
        match self {
            Recipe::Ieee754(e, m) => FloatFormat::ieee754(e, m).map(Format::from),
            Recipe::CustomBias(e, m, bias) => FloatFormat::custom_bias(e, m, bias).map(Format::from),
            Recipe::ReservedNanPattern(e, m) => {
                FloatFormat::reserved_nan_pattern(e, m).map(Format::from)
            }
            Recipe::Integer(width, scale) => {
                ScaledTwosComplementFormat::new(width, scale).map(Format::from)
            }
        }
    }
}

/// Every well-known format, in a stable order (widest floats first,
/// then the FP8 family, then the integers).
pub fn well_known() -> Result<Vec<NamedFormat>, FormatError> {
    RECIPES
        .iter()
        .map(|&(name, recipe)| recipe.build().map(|format| NamedFormat { name, format }))
        .collect()
}

/// Looks up a well-known format by its name.  Names are case
/// sensitive.
pub fn lookup(name: &str) -> Result<Format, FormatError> {
    match RECIPES.iter().find(|(candidate, _)| *candidate == name) {
        Some((_, recipe)) => recipe.build(),
        None => Err(FormatError::UnknownFormatName(name.to_owned())),
    }
}
