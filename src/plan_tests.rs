use super::*;
use crate::config::{BackendPreference, CapabilityHint, PlanConfig};
use crate::direction::Direction;
use alloc::vec;
use alloc::vec::Vec;

fn round_trip(n: usize) {
    let input: Vec<Complex32> = (0..n)
        .map(|i| Complex32::new((i as f32) * 0.1 - 1.0, (i as f32) * 0.05))
        .collect();

    let fwd = plan(PlanConfig::new(n, Direction::Forward)).unwrap();
    let inv = plan(PlanConfig::new(n, Direction::Inverse)).unwrap();

    let mut freq = vec![Complex32::new(0.0, 0.0); n];
    fwd.execute(&input, &mut freq);

    let mut back = vec![Complex32::new(0.0, 0.0); n];
    inv.execute(&freq, &mut back);

    let scale = n as f32;
    for (orig, got) in input.iter().zip(back.iter()) {
        let got_scaled = *got / scale;
        assert!(
            (*orig - got_scaled).norm() < 1e-3,
            "n={n}: {orig} vs {got_scaled}"
        );
    }
}

#[test]
fn round_trip_several_sizes() {
    for &n in &[2usize, 4, 8, 16, 32, 64, 256, 1024] {
        round_trip(n);
    }
}

#[test]
fn rejects_non_power_of_two() {
    let err = plan(PlanConfig::new(6, Direction::Forward)).unwrap_err();
    assert_eq!(err, FftError::InvalidLength(6));
}

#[test]
fn rejects_length_below_two() {
    let err = plan(PlanConfig::new(1, Direction::Forward)).unwrap_err();
    assert_eq!(err, FftError::InvalidLength(1));
}

#[test]
fn scalar_only_hint_resolves_to_scalar_capability() {
    let p = plan(
        PlanConfig::new(64, Direction::Forward).capability_hint(CapabilityHint::ScalarOnly),
    )
    .unwrap();
    assert_eq!(p.capability(), Capability::Scalar);
}

#[test]
fn small_sizes_report_small_backend() {
    for &n in &[2usize, 4, 8] {
        let p = plan(PlanConfig::new(n, Direction::Forward)).unwrap();
        assert_eq!(p.backend(), Backend::Small);
    }
}

#[test]
fn larger_sizes_report_static_backend_without_codegen_preference() {
    let p = plan(PlanConfig::new(64, Direction::Forward)).unwrap();
    assert_eq!(p.backend(), Backend::Static);
}

#[test]
fn generated_preference_without_codegen_feature_falls_back_to_static() {
    let p = plan(
        PlanConfig::new(64, Direction::Forward).backend(BackendPreference::Generated),
    )
    .unwrap();
    #[cfg(not(feature = "codegen"))]
    assert_eq!(p.backend(), Backend::Static);
}

#[test]
fn plan_len_and_direction_round_trip_the_config() {
    let p = plan(PlanConfig::new(128, Direction::Inverse)).unwrap();
    assert_eq!(p.len(), 128);
    assert_eq!(p.log2_len(), 7);
    assert_eq!(p.direction(), Direction::Inverse);
    assert_eq!(p.pattern_len(), 32);
}

#[test]
#[should_panic]
fn execute_panics_on_input_length_mismatch() {
    let p = plan(PlanConfig::new(16, Direction::Forward)).unwrap();
    let input = vec![Complex32::new(0.0, 0.0); 8];
    let mut output = vec![Complex32::new(0.0, 0.0); 16];
    p.execute(&input, &mut output);
}
