// src/driver.rs
//! The static driver: sequences kernel calls so their composition is the
//! split-radix FFT of length `n`. Recurses by stride on the (untouched)
//! input buffer and writes directly into the final, natural-order slot of
//! the output buffer — the output buffer itself is the only scratch space
//! used, so there is no allocation once a [`Plan`](crate::plan::Plan) exists.
//!
//! Base cases bottom the recursion out at `n in {1, 2, 4, 8}`; everything
//! above `n == 8` is one split-radix combine (`G` at half size, `H1`/`H3` at
//! quarter size) via the `combine` kernel from spec §4.1.

use num_complex::Complex32;

use crate::kernels::scalar::x4_with_sign;
use crate::kernels::Kernels;
use crate::trig::TrigTable;

/// Runs the split-radix recursion for a length-`n` transform reading
/// `input` at `in_offset` with stride `in_stride`, writing the natural-order
/// result into `out[out_offset..out_offset + n]`.
///
/// # Safety
/// Callers must ensure `input` has at least `in_offset + in_stride*(n-1) + 1`
/// elements and `out` has at least `out_offset + n` elements. `execute`
/// upholds this by construction: `n`, the strides and the offsets are all
/// derived from the same plan that sized the buffers.
pub(crate) fn transform<K: Kernels>(
    input: &[Complex32],
    in_offset: usize,
    in_stride: usize,
    n: usize,
    sign: f32,
    trig: &TrigTable,
    out: &mut [Complex32],
    out_offset: usize,
) {
    match n {
        1 => out[out_offset] = input[in_offset],
        2 => {
            let a = input[in_offset];
            let b = input[in_offset + in_stride];
            out[out_offset] = a + b;
            out[out_offset + 1] = a - b;
        }
        4 => {
            let samples = [
                input[in_offset],
                input[in_offset + in_stride],
                input[in_offset + 2 * in_stride],
                input[in_offset + 3 * in_stride],
            ];
            let result = x4_with_sign(samples, sign);
            out[out_offset..out_offset + 4].copy_from_slice(&result);
        }
        8 => {
            let samples = core::array::from_fn(|i| input[in_offset + i * in_stride]);
            let result = K::x8(samples, sign);
            out[out_offset..out_offset + 8].copy_from_slice(&result);
        }
        _ => {
            let half = n / 2;
            let quarter = n / 4;
            let log2_n = n.trailing_zeros();

            // G: even-indexed subsequence, size n/2.
            transform::<K>(
                input,
                in_offset,
                in_stride * 2,
                half,
                sign,
                trig,
                out,
                out_offset,
            );
            // H1: subsequence at offset+stride, decimated by 4, size n/4.
            transform::<K>(
                input,
                in_offset + in_stride,
                in_stride * 4,
                quarter,
                sign,
                trig,
                out,
                out_offset + half,
            );
            // H3: subsequence at offset+3*stride, decimated by 4, size n/4.
            transform::<K>(
                input,
                in_offset + 3 * in_stride,
                in_stride * 4,
                quarter,
                sign,
                trig,
                out,
                out_offset + half + quarter,
            );

            let (wk, w3k) = trig.level(log2_n);
            let window = &mut out[out_offset..out_offset + n];
            K::combine(window, wk, w3k, quarter, sign);
        }
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
