use std::cmp::Ordering;

use test_strategy::{proptest, Arbitrary};

use super::instance::{FloatClass, FloatInstance};
use super::*;
use crate::error::{Field, FormatError};

fn fp16(s: u64, e: u64, m: u64) -> FloatInstance {
    let format = FloatFormat::ieee754(5, 10).expect("FP16 is a valid format");
    FloatInstance::new(format, s, e, m).expect("test data should be in range")
}

fn assert_value(instance: FloatInstance, expected: f64) {
    let got = instance.value();
    assert!(
        got == expected,
        "{instance:?} decoded to {got:e}, expected {expected:e}"
    );
}

#[test]
fn test_fp16_definition() {
    // Reference values from
    // https://en.wikipedia.org/wiki/Half-precision_floating-point_format
    assert_value(fp16(0, 0b00000, 0b0000000000), 0.0);
    assert_value(fp16(0, 0b00000, 0b0000000001), 0.000_000_059_604_644_775_390_63);
    assert_value(fp16(0, 0b00000, 0b1111111111), 0.000_060_975_551_605_224_61);
    assert_value(fp16(0, 0b00001, 0b0000000000), 0.000_061_035_156_25);
    assert_value(fp16(0, 0b01101, 0b0101010101), 0.333_251_953_125);
    assert_value(fp16(0, 0b01110, 0b1111111111), 0.999_511_718_75);
    assert_value(fp16(0, 0b01111, 0b0000000000), 1.0);
    assert_value(fp16(0, 0b01111, 0b0000000001), 1.000_976_562_5);
    assert_value(fp16(0, 0b11110, 0b1111111111), 65504.0);
    assert_value(fp16(0, 0b11111, 0b0000000000), f64::INFINITY);
    assert_value(fp16(1, 0b00000, 0b0000000000), -0.0);
    assert_value(fp16(1, 0b10000, 0b0000000000), -2.0);
    assert_value(fp16(1, 0b11111, 0b0000000000), f64::NEG_INFINITY);
    assert!(fp16(0, 0b11111, 0b0000000001).value().is_nan());
}

#[test]
fn test_signed_zeros_are_equal() {
    let plus = fp16(0, 0, 0);
    let minus = fp16(1, 0, 0);
    assert!(plus.equals(&minus));
    assert_eq!(plus.compare(&minus), Some(Ordering::Equal));
    assert_eq!(plus.classify(), FloatClass::Zero);
    assert_eq!(minus.classify(), FloatClass::Zero);
}

#[test]
fn test_nan_is_unordered() {
    let nan = fp16(0, 0b11111, 1);
    let one = fp16(0, 0b01111, 0);
    assert_eq!(nan.compare(&one), None);
    assert_eq!(one.compare(&nan), None);
    assert_eq!(nan.compare(&nan), None);
    assert!(!nan.equals(&nan));
}

#[test]
fn test_fp16_derived_quantities() {
    let f = FloatFormat::ieee754(5, 10).unwrap();
    assert_eq!(f.bias(), 15);
    assert_eq!(f.min_e(), -14);
    assert_eq!(f.max_e(), 15);
    assert_eq!(f.abs_min_normal(), 0.000_061_035_156_25);
    assert_eq!(f.abs_min(), 0.000_000_059_604_644_775_390_63);
    assert_eq!(f.abs_max(), 65504.0);
    assert!(f.is_ieee754());
    assert_eq!(f.nan_encoding(), NanEncoding::ExponentOnesMantissaNonZero);
    assert_eq!(f.inf_encoding(), InfEncoding::ExponentOnesMantissaZero);
    assert_eq!(f.zero_encoding(), ZeroEncoding::Signed);
}

#[test]
fn test_wide_ieee_formats_match_native_types() {
    let fp32 = FloatFormat::ieee754(8, 23).unwrap();
    assert_eq!(fp32.abs_max(), f64::from(f32::MAX));
    assert_eq!(fp32.abs_min_normal(), f64::from(f32::MIN_POSITIVE));
    assert_eq!(fp32.abs_min(), f64::from(f32::from_bits(1)));

    let fp64 = FloatFormat::ieee754(11, 52).unwrap();
    assert_eq!(fp64.abs_max(), f64::MAX);
    assert_eq!(fp64.abs_min_normal(), f64::MIN_POSITIVE);
    assert_eq!(fp64.abs_min(), f64::from_bits(1));
    let one_third = FloatInstance::new(fp64, 0, 1021, 0x5_5555_5555_5555).unwrap();
    assert_eq!(one_third.value(), f64::from_bits(0x3FD5_5555_5555_5555));
}

#[test]
fn test_reserved_nan_pattern_e4m3() {
    let f = FloatFormat::reserved_nan_pattern(4, 3).unwrap();
    assert_eq!(f.bias(), 7);
    assert_eq!(f.max_e(), 8);
    assert_eq!(f.abs_max(), 448.0);
    assert_eq!(f.abs_min(), 2f64.powi(-9));
    assert!(!f.is_ieee754());

    let largest = FloatInstance::new(f, 0, 0b1111, 0b110).unwrap();
    assert_eq!(largest.value(), 448.0);
    let top_exponent = FloatInstance::new(f, 1, 0b1111, 0b000).unwrap();
    assert_eq!(top_exponent.value(), -256.0);
    let nan = FloatInstance::new(f, 0, 0b1111, 0b111).unwrap();
    assert_eq!(nan.classify(), FloatClass::Nan);
    assert_eq!(f.inf_encoding(), InfEncoding::NotApplicable);
}

#[test]
fn test_custom_bias_fp8_proposals() {
    let e5 = FloatFormat::custom_bias(5, 2, 16).unwrap();
    assert_eq!(e5.bias(), 16);
    assert_eq!(e5.min_e(), -15);
    assert_eq!(e5.max_e(), 15);
    assert_eq!(e5.abs_max(), 57344.0);
    // -0 is NaN here, but the zero tag is the same as for IEEE 754.
    assert_eq!(e5.zero_encoding(), ZeroEncoding::Signed);

    let e4 = FloatFormat::custom_bias(4, 3, 8).unwrap();
    assert_eq!(e4.max_e(), 7);
    assert_eq!(e4.abs_max(), 240.0);
    assert_eq!(e4.abs_min(), 2f64.powi(-10));

    // The negative zero pattern is NaN; positive zero is still zero.
    let nan = FloatInstance::new(e4, 1, 0, 0).unwrap();
    assert_eq!(nan.classify(), FloatClass::Nan);
    let zero = FloatInstance::new(e4, 0, 0, 0).unwrap();
    assert_eq!(zero.value(), 0.0);
    // The all-ones pattern is an ordinary value.
    let most_negative = FloatInstance::new(e4, 1, 0b1111, 0b111).unwrap();
    assert_eq!(most_negative.value(), -240.0);
}

#[test]
fn test_field_out_of_range() {
    let f = FloatFormat::ieee754(5, 10).unwrap();
    assert_eq!(
        FloatInstance::new(f, 2, 0, 0).unwrap_err(),
        FormatError::FieldOutOfRange {
            field: Field::Sign,
            value: 2,
            max: 1
        }
    );
    assert_eq!(
        FloatInstance::new(f, 0, 32, 0).unwrap_err(),
        FormatError::FieldOutOfRange {
            field: Field::Exponent,
            value: 32,
            max: 31
        }
    );
    assert_eq!(
        FloatInstance::new(f, 0, 0, 1024).unwrap_err(),
        FormatError::FieldOutOfRange {
            field: Field::Mantissa,
            value: 1024,
            max: 1023
        }
    );
}

#[test]
fn test_degenerate_formats_are_rejected() {
    assert!(matches!(
        FloatFormat::ieee754(0, 3),
        Err(FormatError::DegenerateFormat(_))
    ));
    assert!(matches!(
        FloatFormat::ieee754(4, 0),
        Err(FormatError::DegenerateFormat(_))
    ));
    assert!(matches!(
        FloatFormat::ieee754(12, 3),
        Err(FormatError::DegenerateFormat(_))
    ));
    assert!(matches!(
        FloatFormat::ieee754(4, 53),
        Err(FormatError::DegenerateFormat(_))
    ));
    // With a single exponent bit IEEE 754 has no room for normals:
    // abs_max < abs_min_normal.
    assert!(matches!(
        FloatFormat::ieee754(1, 4),
        Err(FormatError::DegenerateFormat(_))
    ));
    // The bias pushes the range outside f64.
    assert!(matches!(
        FloatFormat::custom_bias(11, 52, -2000),
        Err(FormatError::DegenerateFormat(_))
    ));
}

#[test]
fn test_variant_from_encodings() {
    assert_eq!(
        FloatVariant::from_encodings(
            5,
            NanEncoding::ExponentOnesMantissaNonZero,
            InfEncoding::ExponentOnesMantissaZero,
            None
        ),
        Ok(FloatVariant::Ieee754)
    );
    assert_eq!(
        FloatVariant::from_encodings(
            4,
            NanEncoding::ExponentOnesMantissaOnes,
            InfEncoding::NotApplicable,
            None
        ),
        Ok(FloatVariant::ReservedNanPattern)
    );
    assert_eq!(
        FloatVariant::from_encodings(4, NanEncoding::NegativeZero, InfEncoding::NotApplicable, Some(8)),
        Ok(FloatVariant::CustomBias { bias: 8 })
    );
    assert_eq!(
        FloatVariant::from_encodings(4, NanEncoding::NegativeZero, InfEncoding::NotApplicable, None),
        Ok(FloatVariant::CustomBias { bias: 7 })
    );
    assert_eq!(
        FloatVariant::from_encodings(
            4,
            NanEncoding::NegativeZero,
            InfEncoding::ExponentOnesMantissaZero,
            None
        ),
        Err(FormatError::IncompatibleEncodings {
            nan: NanEncoding::NegativeZero,
            inf: InfEncoding::ExponentOnesMantissaZero,
        })
    );
    assert!(FloatVariant::from_encodings(
        4,
        NanEncoding::ExponentOnesMantissaNonZero,
        InfEncoding::ExponentOnesMantissaZero,
        Some(3)
    )
    .is_err());
}

#[test]
fn test_exp2i() {
    assert_eq!(exp2i(0), 1.0);
    assert_eq!(exp2i(10), 1024.0);
    assert_eq!(exp2i(-1), 0.5);
    assert_eq!(exp2i(1023), 2f64.powi(1023));
    assert_eq!(exp2i(1024), f64::INFINITY);
    assert_eq!(exp2i(-1022), f64::MIN_POSITIVE);
    assert_eq!(exp2i(-1074), f64::from_bits(1));
    assert_eq!(exp2i(-1075), 0.0);
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum VariantChoice {
    Ieee754,
    CustomBias(#[strategy(-8i32..24)] i32),
    ReservedNanPattern,
}

impl From<VariantChoice> for FloatVariant {
    fn from(choice: VariantChoice) -> FloatVariant {
        match choice {
            VariantChoice::Ieee754 => FloatVariant::Ieee754,
            VariantChoice::CustomBias(bias) => FloatVariant::CustomBias { bias },
            VariantChoice::ReservedNanPattern => FloatVariant::ReservedNanPattern,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct SmallFormat {
    #[strategy(1u32..=8)]
    e_width: u32,
    #[strategy(1u32..=10)]
    m_width: u32,
    variant: VariantChoice,
}

impl SmallFormat {
    fn build(&self) -> Result<FloatFormat, FormatError> {
        FloatFormat::new(self.e_width, self.m_width, self.variant.into())
    }
}

#[derive(Debug, Arbitrary)]
struct FieldValues {
    #[strategy(0u64..=1)]
    s: u64,
    e: u64,
    m: u64,
}

impl FieldValues {
    fn instance(&self, format: FloatFormat) -> FloatInstance {
        FloatInstance::new(
            format,
            self.s,
            self.e % (format.exponent_limit() + 1),
            self.m % (format.mantissa_limit() + 1),
        )
        .expect("fields were reduced into range")
    }
}

#[proptest]
fn constructible_formats_satisfy_range_invariant(input: SmallFormat) {
    if let Ok(f) = input.build() {
        assert!(0.0 < f.abs_min());
        assert!(f.abs_min() <= f.abs_min_normal());
        assert!(f.abs_min_normal() <= f.abs_max());
        assert!(f.abs_max().is_finite());
    }
}

#[proptest]
fn infinity_follows_the_inf_encoding(input: SmallFormat, fields: FieldValues) {
    if let Ok(f) = input.build() {
        let x = fields.instance(f);
        let v = x.value();
        match f.inf_encoding() {
            InfEncoding::NotApplicable => assert!(!v.is_infinite()),
            InfEncoding::ExponentOnesMantissaZero => {
                if x.exponent_field() == f.exponent_limit() && x.mantissa_field() == 0 {
                    let expected = if x.sign_field() == 0 {
                        f64::INFINITY
                    } else {
                        f64::NEG_INFINITY
                    };
                    assert_eq!(v, expected);
                } else {
                    assert!(!v.is_infinite());
                }
            }
        }
    }
}

#[proptest]
fn nan_follows_the_nan_encoding(input: SmallFormat, fields: FieldValues) {
    if let Ok(f) = input.build() {
        let x = fields.instance(f);
        let top = x.exponent_field() == f.exponent_limit();
        let expect_nan = match f.nan_encoding() {
            NanEncoding::ExponentOnesMantissaNonZero => top && x.mantissa_field() != 0,
            NanEncoding::ExponentOnesMantissaOnes => {
                top && x.mantissa_field() == f.mantissa_limit()
            }
            NanEncoding::NegativeZero => {
                x.sign_field() == 1 && x.exponent_field() == 0 && x.mantissa_field() == 0
            }
        };
        assert_eq!(x.value().is_nan(), expect_nan);
        assert_eq!(x.classify() == FloatClass::Nan, expect_nan);
    }
}

#[proptest]
fn finite_values_lie_within_the_format_bounds(input: SmallFormat, fields: FieldValues) {
    if let Ok(f) = input.build() {
        let v = fields.instance(f).value().abs();
        if v.is_finite() && v != 0.0 {
            assert!(f.abs_min() <= v && v <= f.abs_max(), "{v:e} outside bounds of {f:?}");
        }
    }
}

#[proptest]
fn ordering_agrees_with_decoded_values(input: SmallFormat, a: FieldValues, b: FieldValues) {
    if let Ok(f) = input.build() {
        let (x, y) = (a.instance(f), b.instance(f));
        assert_eq!(x.compare(&y), x.value().partial_cmp(&y.value()));
        assert_eq!(x.compare(&y) == Some(Ordering::Less), x.value() < y.value());
        assert_eq!(x.equals(&y), x.value() == y.value());
    }
}

#[proptest]
fn decoding_is_idempotent(input: SmallFormat, fields: FieldValues) {
    if let Ok(f) = input.build() {
        let first = fields.instance(f).value();
        let second = fields.instance(f).value();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
