// src/error.rs

use core::fmt;

/// Everything that can go wrong while building a [`Plan`](crate::plan::Plan).
///
/// `execute` never returns an error: by the time a plan exists its tables,
/// dispatcher and alignment preconditions are already validated, so running
/// it is infallible (see the crate-level docs for the alignment contract
/// callers must uphold).
#[derive(Debug, PartialEq, Clone, Copy)]
#[non_exhaustive]
pub enum FftError {
    /// `n` was zero, not a power of two, or above the largest length the
    /// planner supports.
    InvalidLength(usize),
    /// A table or executable-memory allocation failed during planning.
    AllocationFailed,
    /// The planner needed a SIMD width the target CPU doesn't provide and
    /// no scalar fallback was compiled in.
    UnsupportedCapability,
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidLength(n) => {
                write!(f, "length {n} is not a supported power of two")
            }
            FftError::AllocationFailed => write!(f, "table allocation failed"),
            FftError::UnsupportedCapability => {
                write!(f, "required SIMD capability is not available on this target")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
