use super::*;

const EPSILON: f32 = 1e-5;

fn assert_cplx_eq(a: Complex32, b: Complex32) {
    assert!((a - b).norm() < EPSILON, "mismatch: {a} vs {b}");
}

#[test]
fn level_8_forward_matches_closed_form() {
    let table = TrigTable::build(3, Direction::Forward).unwrap(); // n = 8
    let (wk, w3k) = table.level(3);
    assert_eq!(wk.len(), 2);
    assert_cplx_eq(wk[0], Complex32::new(1.0, 0.0));
    let sqrt2_2 = core::f32::consts::FRAC_1_SQRT_2;
    assert_cplx_eq(wk[1], Complex32::new(sqrt2_2, -sqrt2_2));
    assert_cplx_eq(w3k[0], Complex32::new(1.0, 0.0));
    assert_cplx_eq(w3k[1], Complex32::new(-sqrt2_2, -sqrt2_2));
}

#[test]
fn inverse_is_conjugate_of_forward() {
    let fwd = TrigTable::build(4, Direction::Forward).unwrap();
    let inv = TrigTable::build(4, Direction::Inverse).unwrap();
    for log2_m in 2..=4 {
        let (fk, f3k) = fwd.level(log2_m);
        let (ik, i3k) = inv.level(log2_m);
        for (a, b) in fk.iter().zip(ik.iter()) {
            assert_cplx_eq(*a, b.conj());
        }
        for (a, b) in f3k.iter().zip(i3k.iter()) {
            assert_cplx_eq(*a, b.conj());
        }
    }
}

#[test]
fn table_length_matches_data_model_invariant() {
    for log2_n in 2..=10u32 {
        let n = 1usize << log2_n;
        let table = TrigTable::build(log2_n, Direction::Forward).unwrap();
        let expected: usize = (2..=log2_n).map(|k| 1usize << (k - 1)).sum();
        assert_eq!(table.total_len(), expected, "n = {n}");
    }
}
