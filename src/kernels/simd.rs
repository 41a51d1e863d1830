// src/kernels/simd.rs
//! SSE2 butterfly kernels: the `combine` loop carries 4 values of `k` per
//! iteration, de-interleaved into separate `re`/`im` registers so the
//! complex multiply `(a+bi)(c+di) = (ac-bd) + (ad+bc)i` becomes two
//! multiplies and one add/sub per component, with no intra-register
//! shuffles in the loop body (the shuffle cost is paid once, on load/store).
//!
//! `x4`/`x8`/`x8_t` are left to the scalar reference: at these fixed tiny
//! sizes the compiler's own auto-vectorizer already does as well as hand
//! intrinsics would, and keeping them scalar means the recursion's base
//! cases share one, already-verified implementation with the portable
//! backend.

use core::arch::x86_64::*;

use num_complex::Complex32;

use super::scalar::Scalar;
use super::{mul_i, mul_neg_i, Kernels};

pub(crate) struct Simd;

#[inline(always)]
unsafe fn load4(ptr: *const Complex32) -> (__m128, __m128) {
    let lo = _mm_loadu_ps(ptr as *const f32);
    let hi = _mm_loadu_ps((ptr as *const f32).add(4));
    let re = _mm_shuffle_ps(lo, hi, 0b10_00_10_00);
    let im = _mm_shuffle_ps(lo, hi, 0b11_01_11_01);
    (re, im)
}

#[inline(always)]
unsafe fn store4(ptr: *mut Complex32, re: __m128, im: __m128) {
    let lo = _mm_unpacklo_ps(re, im);
    let hi = _mm_unpackhi_ps(re, im);
    _mm_storeu_ps(ptr as *mut f32, lo);
    _mm_storeu_ps((ptr as *mut f32).add(4), hi);
}

#[inline(always)]
unsafe fn cmul(a_re: __m128, a_im: __m128, b_re: __m128, b_im: __m128) -> (__m128, __m128) {
    let re = _mm_sub_ps(_mm_mul_ps(a_re, b_re), _mm_mul_ps(a_im, b_im));
    let im = _mm_add_ps(_mm_mul_ps(a_re, b_im), _mm_mul_ps(a_im, b_re));
    (re, im)
}

impl Kernels for Simd {
    #[inline]
    fn x4(input: [Complex32; 4], sign: f32) -> [Complex32; 4] {
        Scalar::x4(input, sign)
    }

    #[inline]
    fn x8(input: [Complex32; 8], sign: f32) -> [Complex32; 8] {
        Scalar::x8(input, sign)
    }

    #[inline]
    fn x8_t(input: [Complex32; 8], sign: f32) -> [Complex32; 8] {
        Scalar::x8(input, sign)
    }

    fn combine(out: &mut [Complex32], wk: &[Complex32], w3k: &[Complex32], quarter: usize, sign: f32) {
        let half = quarter * 2;
        let mut k = 0;
        unsafe {
            while k + 4 <= quarter {
                // All four source registers for this chunk are loaded before
                // any of the four output stores below, so a chunk's stores
                // (which alias H1's and H3's storage) never clobber a load
                // this same chunk still needs.
                let (g0_re, g0_im) = load4(out.as_ptr().add(k));
                let (g1_re, g1_im) = load4(out.as_ptr().add(quarter + k));
                let (h1_re, h1_im) = load4(out.as_ptr().add(half + k));
                let (h3_re, h3_im) = load4(out.as_ptr().add(half + quarter + k));
                let (wk_re, wk_im) = load4(wk.as_ptr().add(k));
                let (w3k_re, w3k_im) = load4(w3k.as_ptr().add(k));

                let (t1_re, t1_im) = cmul(wk_re, wk_im, h1_re, h1_im);
                let (t2_re, t2_im) = cmul(w3k_re, w3k_im, h3_re, h3_im);
                let a_re = _mm_add_ps(t1_re, t2_re);
                let a_im = _mm_add_ps(t1_im, t2_im);
                let b_re = _mm_sub_ps(t1_re, t2_re);
                let b_im = _mm_sub_ps(t1_im, t2_im);

                // Multiply by +/-i: swap re/im and flip the sign of one half.
                let (jb_re, jb_im) = if sign < 0.0 {
                    (b_im, _mm_sub_ps(_mm_setzero_ps(), b_re))
                } else {
                    (_mm_sub_ps(_mm_setzero_ps(), b_im), b_re)
                };

                store4(
                    out.as_mut_ptr().add(k),
                    _mm_add_ps(g0_re, a_re),
                    _mm_add_ps(g0_im, a_im),
                );
                store4(
                    out.as_mut_ptr().add(half + k),
                    _mm_sub_ps(g0_re, a_re),
                    _mm_sub_ps(g0_im, a_im),
                );
                store4(
                    out.as_mut_ptr().add(quarter + k),
                    _mm_add_ps(g1_re, jb_re),
                    _mm_add_ps(g1_im, jb_im),
                );
                store4(
                    out.as_mut_ptr().add(3 * quarter + k),
                    _mm_sub_ps(g1_re, jb_re),
                    _mm_sub_ps(g1_im, jb_im),
                );
                k += 4;
            }
        }
        for k in k..quarter {
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

#[cfg(test)]
#[path = "simd_tests.rs"]
mod tests;
