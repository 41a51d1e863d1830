// src/kernels/scalar.rs
//! The portable reference kernel set. Pure safe Rust over `Complex32`; no
//! target-feature requirements. Always compiled, and the only backend used
//! when SSE2 isn't available or the `simd` feature is off.

use num_complex::Complex32;

use super::{mul_i, mul_neg_i, Kernels};

pub(crate) struct Scalar;

impl Kernels for Scalar {
    #[inline]
    fn x4(input: [Complex32; 4], sign: f32) -> [Complex32; 4] {
        x4_with_sign(input, sign)
    }

    #[inline]
    fn x8(input: [Complex32; 8], sign: f32) -> [Complex32; 8] {
        let [x0, x1, x2, x3, x4, x5, x6, x7] = input;
        let e = x4_with_sign([x0, x2, x4, x6], sign);
        let o = x4_with_sign([x1, x3, x5, x7], sign);

        let sqrt2_2 = core::f32::consts::FRAC_1_SQRT_2;
        let w1 = Complex32::new(sqrt2_2, sign * sqrt2_2);
        let w2 = if sign < 0.0 {
            Complex32::new(0.0, -1.0)
        } else {
            Complex32::new(0.0, 1.0)
        };
        let w3 = Complex32::new(-sqrt2_2, sign * sqrt2_2);
        let tw = [Complex32::new(1.0, 0.0), w1, w2, w3];

        let mut out = [Complex32::new(0.0, 0.0); 8];
        for k in 0..4 {
            let t = tw[k] * o[k];
            out[k] = e[k] + t;
            out[k + 4] = e[k] - t;
        }
        out
    }

    #[inline]
    fn combine(out: &mut [Complex32], wk: &[Complex32], w3k: &[Complex32], quarter: usize, sign: f32) {
        let half = quarter * 2;
        for k in 0..quarter {
            let g0 = out[k];
            let g1 = out[k + quarter];
            let h1 = out[half + k];
            let h3 = out[half + quarter + k];
            let a = wk[k] * h1 + w3k[k] * h3;
            let b = wk[k] * h1 - w3k[k] * h3;
            let jb = if sign < 0.0 { mul_neg_i(b) } else { mul_i(b) };
            out[k] = g0 + a;
            out[k + half] = g0 - a;
            out[k + quarter] = g1 + jb;
            out[k + 3 * quarter] = g1 - jb;
        }
    }
}

/// `x4` is the `n == 4` leaf of the split-radix recursion, so it's always
/// called with the plan's direction already known; this direction-aware
/// variant is what `x8` (and the driver's own `n == 4` case) actually call.
#[inline]
pub(crate) fn x4_with_sign(input: [Complex32; 4], sign: f32) -> [Complex32; 4] {
    let [x0, x1, x2, x3] = input;
    let a = x0 + x2;
    let b = x0 - x2;
    let c = x1 + x3;
    let d = x1 - x3;
    let wd = if sign < 0.0 { mul_neg_i(d) } else { mul_i(d) };
    [a + c, b + wd, a - c, b - wd]
}

#[cfg(test)]
#[path = "scalar_tests.rs"]
mod tests;
