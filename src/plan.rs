// src/plan.rs
//! Plan construction and execution: the only two operations the crate
//! exposes. All work that can fail — table allocation, capability
//! resolution — happens in [`plan`]; [`Plan::execute`] is infallible.

use num_complex::Complex32;

use crate::config::{Backend, BackendPreference, Capability, CapabilityHint, PlanConfig};
use crate::direction::Direction;
use crate::driver;
use crate::error::FftError;
use crate::kernels::scalar::Scalar;
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
use crate::kernels::simd::Simd;
use crate::pattern::PatternTable;
use crate::trig::TrigTable;

#[cfg(feature = "logging")]
use log::debug;

/// Which kernel set a resolved plan dispatches to. Folded in once at plan
/// time; `execute` only ever matches on this tag, never re-probes the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KernelBackend {
    Scalar,
    #[cfg_attr(not(all(target_arch = "x86_64", feature = "simd")), allow(dead_code))]
    Simd,
}

/// An immutable, reusable description of how to compute one length-`n`
/// transform in one direction. Holds the twiddle and pattern tables plus the
/// resolved kernel backend; build once with [`plan`], reuse across many
/// [`Plan::execute`] calls.
pub struct Plan {
    n: usize,
    log2_n: u32,
    sign: Direction,
    trig: TrigTable,
    /// Scatter pattern for the top-level combine stage. `execute` recomputes
    /// the identical `(k, k + m/4)` arithmetic at every recursion depth
    /// (including the top one) rather than indexing this table — see
    /// `pattern.rs` — so it's carried on the plan only as a standing
    /// assertion of the size invariant, checked in `execute`.
    pattern: PatternTable,
    backend: Backend,
    capability: Capability,
    kernel: KernelBackend,
}

/// SSE2 is part of the baseline x86_64 ABI (it's used to pass floating-point
/// arguments), so every x86_64 target supports it unconditionally; there is
/// no CPU to probe at runtime, and no_std has no portable way to probe one
/// anyway. Other architectures fall back to the scalar kernels.
#[cfg(all(target_arch = "x86_64", feature = "simd"))]
const HOST_HAS_SSE2: bool = true;
#[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
const HOST_HAS_SSE2: bool = false;

fn resolve_capability(hint: CapabilityHint) -> Result<(Capability, KernelBackend), FftError> {
    match hint {
        CapabilityHint::ScalarOnly => Ok((Capability::Scalar, KernelBackend::Scalar)),
        CapabilityHint::Auto => {
            if HOST_HAS_SSE2 {
                Ok((Capability::Sse2, KernelBackend::Simd))
            } else {
                Ok((Capability::Scalar, KernelBackend::Scalar))
            }
        }
        CapabilityHint::RequireSse2 => {
            if HOST_HAS_SSE2 {
                Ok((Capability::Sse2, KernelBackend::Simd))
            } else {
                Err(FftError::UnsupportedCapability)
            }
        }
    }
}

/// Builds a [`Plan`] for a length-`n`, direction-`sign` transform. `n` must
/// be a power of two and at least 2.
///
/// Builds the twiddle and pattern tables (the only allocations this crate
/// ever performs) and resolves which kernel backend `execute` will dispatch
/// to. The `codegen` backend preference degrades silently to
/// [`Backend::Static`] unless the `codegen` feature is enabled and
/// executable memory could actually be mapped — a caller that asked for
/// [`BackendPreference::Generated`] and got [`Backend::Static`] back has lost
/// nothing but the opportunity, never correctness.
pub fn plan(config: PlanConfig) -> Result<Plan, FftError> {
    let n = config.n;
    if n < 2 || !n.is_power_of_two() {
        return Err(FftError::InvalidLength(n));
    }
    let log2_n = n.trailing_zeros();

    let (capability, kernel) = resolve_capability(config.capability_hint)?;

    let trig = TrigTable::build(log2_n, config.sign)?;
    let pattern = PatternTable::build(n)?;

    let backend = if n <= 8 {
        Backend::Small
    } else {
        resolve_backend(config.backend)
    };

    #[cfg(feature = "logging")]
    debug!(
        "planned n={n} sign={:?} capability={capability:?} backend={backend:?}",
        config.sign
    );

    Ok(Plan {
        n,
        log2_n,
        sign: config.sign,
        trig,
        pattern,
        backend,
        capability,
        kernel,
    })
}

#[cfg(feature = "codegen")]
fn resolve_backend(preference: BackendPreference) -> Backend {
    match preference {
        BackendPreference::Static => Backend::Static,
        BackendPreference::Generated => {
            if crate::codegen::is_available() {
                Backend::Generated
            } else {
                Backend::Static
            }
        }
    }
}

#[cfg(not(feature = "codegen"))]
fn resolve_backend(_preference: BackendPreference) -> Backend {
    Backend::Static
}

impl Plan {
    /// The transform length this plan computes.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The direction (forward/inverse sign) this plan was built for.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.sign
    }

    /// Which dispatcher this plan resolved to.
    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Which SIMD capability this plan resolved to.
    #[inline]
    pub fn capability(&self) -> Capability {
        self.capability
    }

    /// Computes the transform of `input` into `output`, both length `n`.
    ///
    /// # Panics
    /// Panics if `input.len() != self.len()` or `output.len() != self.len()`.
    /// Input and output are always two distinct buffers: this engine never
    /// transforms in place and never permutes `output` after the fact, so
    /// `output` is in natural order the moment this call returns.
    pub fn execute(&self, input: &[Complex32], output: &mut [Complex32]) {
        assert_eq!(input.len(), self.n, "input length does not match plan");
        assert_eq!(output.len(), self.n, "output length does not match plan");
        debug_assert_eq!(self.pattern.len(), self.n / 4);

        let sign = self.sign.exponent_sign();
        match self.kernel {
            KernelBackend::Scalar => {
                driver::transform::<Scalar>(input, 0, 1, self.n, sign, &self.trig, output, 0)
            }
            #[cfg(all(target_arch = "x86_64", feature = "simd"))]
            KernelBackend::Simd => {
                driver::transform::<Simd>(input, 0, 1, self.n, sign, &self.trig, output, 0)
            }
            #[cfg(not(all(target_arch = "x86_64", feature = "simd")))]
            KernelBackend::Simd => unreachable!("resolved to Simd without simd support compiled in"),
        }
    }

    #[cfg(test)]
    pub(crate) fn log2_len(&self) -> u32 {
        self.log2_n
    }

    #[cfg(test)]
    pub(crate) fn pattern_len(&self) -> usize {
        self.pattern.len()
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
