// src/trig.rs
//! Twiddle-factor tables: the only place `sin`/`cos` get evaluated. Built
//! once at plan-construction time; the driver only ever indexes into the
//! result.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;
use core::f32::consts::PI;
use num_complex::Complex32;

use crate::direction::Direction;
use crate::error::FftError;

#[cfg(feature = "std")]
fn sin_cos(angle: f32) -> (f32, f32) {
    (angle.sin(), angle.cos())
}

#[cfg(not(feature = "std"))]
fn sin_cos(angle: f32) -> (f32, f32) {
    (libm::sinf(angle), libm::cosf(angle))
}

#[inline]
fn root_of_unity(k: usize, m: usize, sign: f32) -> Complex32 {
    let angle = sign * 2.0 * PI * (k as f32) / (m as f32);
    let (s, c) = sin_cos(angle);
    Complex32::new(c, s)
}

/// Per-level twiddles for one split-radix combine stage of size `m = 2^log2_m`.
/// `wk[k]  == W_m^k`   for k in 0..m/4
/// `w3k[k] == W_m^(3k)` for k in 0..m/4
/// stored back to back inside [`TrigTable`]'s flat buffer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Level {
    pub offset: usize,
    pub quarter: usize,
}

/// The primary twiddle table (spec: `ws`). Flat storage indexed by
/// precomputed per-level offsets; length is `sum_{L=2..=log2(n)} 2 * 2^(L-2)`
/// complex values, i.e. `sum_{L=2..=log2(n)} 2^(L-1)` — matching the size
/// invariant in the data model.
pub(crate) struct TrigTable {
    data: Vec<Complex32>,
    levels: Vec<Level>, // indexed by log2_m - 2
}

impl TrigTable {
    /// Builds every level's twiddles for `m` in `{4, 8, ..., 2^log2_n}`.
    /// `log2_n < 2` (i.e. `n < 4`) yields an empty table: transforms that
    /// small never reach a split-radix combine stage.
    pub(crate) fn build(log2_n: u32, sign: Direction) -> Result<Self, FftError> {
        let s = sign.exponent_sign();
        let total_len: usize = (2..=log2_n).map(|k| 1usize << (k - 1)).sum();

        let mut data = Vec::new();
        data.try_reserve_exact(total_len)
            .map_err(|_: TryReserveError| FftError::AllocationFailed)?;
        let mut levels = Vec::new();
        let level_count = log2_n.saturating_sub(1) as usize;
        levels
            .try_reserve_exact(level_count)
            .map_err(|_: TryReserveError| FftError::AllocationFailed)?;

        for log2_m in 2..=log2_n {
            let m = 1usize << log2_m;
            let quarter = m / 4;
            let offset = data.len();
            for k in 0..quarter {
                data.push(root_of_unity(k, m, s));
            }
            for k in 0..quarter {
                data.push(root_of_unity(3 * k, m, s));
            }
            levels.push(Level { offset, quarter });
        }

        Ok(Self { data, levels })
    }

    /// `(W_m^k for k in 0..m/4, W_m^3k for k in 0..m/4)` for `m = 2^log2_m`.
    #[inline]
    pub(crate) fn level(&self, log2_m: u32) -> (&[Complex32], &[Complex32]) {
        let lvl = self.levels[(log2_m - 2) as usize];
        let wk = &self.data[lvl.offset..lvl.offset + lvl.quarter];
        let w3k = &self.data[lvl.offset + lvl.quarter..lvl.offset + 2 * lvl.quarter];
        (wk, w3k)
    }

    #[cfg(test)]
    pub(crate) fn total_len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "trig_tests.rs"]
mod tests;
