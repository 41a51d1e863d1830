// src/pattern.rs
//! The permutation ("offsets") table: a pure function of `n` that records
//! where the outermost split-radix combine stage scatters its four outputs,
//! so the driver never runs a separate bit-reversal pass over the output
//! buffer.
//!
//! For the size-`n` combine stage, the four results for index `k` in
//! `0..n/4` land at `k`, `k + n/4`, `k + n/2`, `k + 3*n/4`. `(k, k + n/4)` is
//! the `(o_even, o_odd)` pair recorded here; the other two offsets are
//! `o_even + n/2` and `o_odd + n/2`. Nested combine stages at smaller
//! recursive sizes follow the identical `(k, k + m/4)` pattern for their own
//! `m`, computed in the hot loop rather than looked up — that table would
//! duplicate work already paid for by this one and cost an allocation per
//! recursion level, which execution may not do.
use alloc::collections::TryReserveError;
use alloc::vec::Vec;

use crate::error::FftError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OffsetPair {
    pub o_even: u32,
    pub o_odd: u32,
}

pub(crate) struct PatternTable {
    offsets: Vec<OffsetPair>,
}

impl PatternTable {
    /// Builds the top-level (size `n`) scatter pattern. `offsets.len() ==
    /// n/4`, matching the data-model invariant.
    pub(crate) fn build(n: usize) -> Result<Self, FftError> {
        let quarter = n / 4;
        let mut offsets = Vec::new();
        offsets
            .try_reserve_exact(quarter)
            .map_err(|_: TryReserveError| FftError::AllocationFailed)?;
        for k in 0..quarter {
            offsets.push(OffsetPair {
                o_even: k as u32,
                o_odd: (k + quarter) as u32,
            });
        }
        Ok(Self { offsets })
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[OffsetPair] {
        &self.offsets
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.offsets.len()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
