// src/kernels/mod.rs
//! Vector kernels: the SIMD-width butterfly families the driver sequences
//! into a full transform. Two implementations share the
//! [`Kernels`] contract — `scalar` (portable, the correctness reference) and
//! `simd` (x86_64 SSE2, 4 complex lanes per call) — selected once at plan
//! time and never branched on again inside `execute`.
//!
//! The `combine` kernel operates on one contiguous window `out[0..n]` that,
//! by the time it's called, already holds the even subtree's result `G` in
//! `out[0..n/2]` and the two odd subtrees `H1`, `H3` in `out[n/2..3n/4]` and
//! `out[3n/4..n]` respectively (the driver recurses there before combining).
//! No separate scratch buffer is needed: the output buffer doubles as the
//! recursion's working memory, and for every `k` the four values it reads
//! (`G[k]`, `G[k+n/4]`, `H1[k]`, `H3[k]`) occupy exactly the four slots it
//! writes — so `combine` reads all four before writing any of them. An
//! earlier version of this module split the combine into two independent
//! passes (`e` then `o`), each looping over the full `0..n/4` range before
//! the other started; `e`'s writes at `out[k+n/2]` alias `H1`'s storage and
//! `o`'s writes at `out[k+3n/4]` alias `H3`'s storage, so whichever pass ran
//! second was reading data the first pass had already overwritten. Fusing
//! the two into one per-`k` pass removes the hazard without adding
//! allocation: every read for a given `k` happens before any write for that
//! `k`, and different `k`s never alias.

pub(crate) mod scalar;
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
pub(crate) mod simd;

use num_complex::Complex32;

/// Multiply by `+i`: `(re, im) -> (-im, re)`.
#[inline(always)]
pub(crate) fn mul_i(z: Complex32) -> Complex32 {
    Complex32::new(-z.im, z.re)
}

/// Multiply by `-i`: `(re, im) -> (im, -re)`.
#[inline(always)]
pub(crate) fn mul_neg_i(z: Complex32) -> Complex32 {
    Complex32::new(z.im, -z.re)
}

/// The shared contract every kernel backend implements. `n` in the method
/// names below always refers to the size of the combine stage being
/// performed, not the overall transform length.
pub(crate) trait Kernels {
    /// Fully-unrolled radix-4 butterfly, no twiddles beyond the built-in
    /// `W_4^1 = -i` (forward) / `+i` (inverse) rotation: the `n == 4` base
    /// case of the split-radix recursion.
    fn x4(input: [Complex32; 4], sign: f32) -> [Complex32; 4];

    /// Fully-unrolled radix-8 butterfly, no twiddles beyond the built-in
    /// `W_8^1 = (sqrt2/2)(1 - i)` constant: the `n == 8` base case.
    fn x8(input: [Complex32; 8], sign: f32) -> [Complex32; 8];

    /// `x8` with a transposed output layout, used when the result feeds
    /// straight into a `combine` stage rather than being the final output
    /// of the recursion. Scalar and SIMD backends may share one
    /// implementation; only a SIMD backend's register shuffle actually
    /// differs.
    fn x8_t(input: [Complex32; 8], sign: f32) -> [Complex32; 8] {
        Self::x8(input, sign)
    }

    /// Split-radix combine: for every `k` in `0..quarter`, reads `G[k]`
    /// (`out[k]`), `G[k+quarter]` (`out[k+quarter]`), `H1[k]`
    /// (`out[half+k]`) and `H3[k]` (`out[half+quarter+k]`), then writes
    /// `out[k] = G[k] + A`, `out[k+half] = G[k] - A`,
    /// `out[k+quarter] = G[k+quarter] + j*B`,
    /// `out[k+3*quarter] = G[k+quarter] - j*B`, where
    /// `A = wk[k]*H1[k] + w3k[k]*H3[k]`, `B = wk[k]*H1[k] - w3k[k]*H3[k]`
    /// and `j` is `+i` for inverse plans, `-i` for forward plans. All four
    /// reads happen before any of the four writes.
    fn combine(out: &mut [Complex32], wk: &[Complex32], w3k: &[Complex32], quarter: usize, sign: f32);
}
