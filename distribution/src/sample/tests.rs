use super::*;

fn count_positive_finite(format: FloatFormat) -> usize {
    let mut n = 0;
    for e in 0..=format.exponent_limit() {
        for m in 0..=format.mantissa_limit() {
            let v = FloatInstance::new(format, 0, e, m)
                .expect("test data should be in range")
                .value();
            if v.is_finite() && v > 0.0 {
                n += 1;
            }
        }
    }
    n
}

#[test]
fn test_fp32_default_plan() {
    let fp32 = FloatFormat::ieee754(8, 23).unwrap();
    let plan = SamplingPlan::new(&fp32, 1 << 15).unwrap();
    assert_eq!(plan.mantissa_samples_per_exponent, 128);
    assert_eq!(plan.mantissa_step, 1 << 16);
    assert_eq!(plan.sampling_factor, 1 << 16);
}

#[test]
fn test_plan_for_small_format_is_exhaustive() {
    let e4m3 = FloatFormat::ieee754(4, 3).unwrap();
    let plan = SamplingPlan::new(&e4m3, 1 << 15).unwrap();
    assert_eq!(plan.mantissa_step, 1);
    assert_eq!(plan.sampling_factor, 1);
}

#[test]
fn test_plan_with_fewer_samples_than_exponents() {
    let e5m2 = FloatFormat::ieee754(5, 2).unwrap();
    let plan = SamplingPlan::new(&e5m2, 8).unwrap();
    assert_eq!(plan.mantissa_samples_per_exponent, 1);
    assert_eq!(plan.mantissa_step, 4);
    assert_eq!(plan.sampling_factor, 16);
}

#[test]
fn test_zero_samples_is_an_error() {
    let e5m2 = FloatFormat::ieee754(5, 2).unwrap();
    assert_eq!(
        SamplingPlan::new(&e5m2, 0),
        Err(HistogramError::InvalidSampleCount)
    );
}

#[test]
fn test_exhaustive_enumeration_visits_every_positive_value() {
    for format in [
        FloatFormat::ieee754(4, 3).unwrap(),
        FloatFormat::reserved_nan_pattern(4, 3).unwrap(),
        FloatFormat::custom_bias(4, 3, 8).unwrap(),
        FloatFormat::ieee754(5, 2).unwrap(),
    ] {
        let plan = SamplingPlan::new(&format, 1 << 15).unwrap();
        let values: Vec<f64> = float_log2_values(format, plan).collect();
        assert_eq!(values.len(), count_positive_finite(format), "{format:?}");
        assert!(values.iter().all(|v| v.is_finite()));
        let lowest = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let highest = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(lowest, format.abs_min().log2());
        assert_eq!(highest, format.abs_max().log2());
    }
}

#[test]
fn test_ieee_e4m3_has_119_positive_values() {
    let e4m3 = FloatFormat::ieee754(4, 3).unwrap();
    // 7 subnormals and 14 binades of 8 normals.
    assert_eq!(count_positive_finite(e4m3), 119);
}

#[test]
fn test_subnormals_are_never_subsampled() {
    let fp16 = FloatFormat::ieee754(5, 10).unwrap();
    let plan = SamplingPlan::new(&fp16, 64).unwrap();
    assert_eq!(plan.mantissa_step, 512);
    let below_normal = fp16.abs_min_normal().log2();
    let subnormals = float_log2_values(fp16, plan)
        .filter(|v| *v < below_normal)
        .count();
    assert_eq!(subnormals, 1023);
}

#[test]
fn test_sampling_is_repeatable() {
    let bf16 = FloatFormat::ieee754(8, 7).unwrap();
    let plan = SamplingPlan::new(&bf16, 1 << 10).unwrap();
    let first: Vec<f64> = float_log2_values(bf16, plan).collect();
    let second: Vec<f64> = float_log2_values(bf16, plan).collect();
    assert_eq!(first, second);
}

#[test]
fn test_integer_values() {
    let int8x2 = ScaledTwosComplementFormat::new(8, 2).unwrap();
    let values: Vec<f64> = integer_log2_values(int8x2).unwrap().collect();
    assert_eq!(values.len(), 127);
    assert_eq!(values[0], 1.0);
    assert_eq!(values[1], 2.0);
    assert_eq!(values[126], 254f64.log2());
}

#[test]
fn test_wide_integers_are_not_enumerated() {
    let int64 = ScaledTwosComplementFormat::new(64, 1).unwrap();
    assert!(matches!(
        integer_log2_values(int64),
        Err(HistogramError::TooManyValues { width: 64 })
    ));
}
