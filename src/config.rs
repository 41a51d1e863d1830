// src/config.rs

use crate::direction::Direction;

/// A hint for how wide a SIMD register the caller expects the planner to
/// use. The engine is free to ignore it (spec: "engine may ignore"); it
/// exists so callers who already know their deployment target can skip a
/// runtime CPU-feature probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityHint {
    /// Let the planner probe the running CPU.
    Auto,
    /// Force the portable scalar kernels even if SSE2 is available.
    ScalarOnly,
    /// Require 128-bit (4-lane) SIMD; fail planning with
    /// [`FftError::UnsupportedCapability`](crate::error::FftError) if unavailable.
    RequireSse2,
}

/// Which dispatcher a plan should prefer. The planner still falls back to
/// [`BackendPreference::Static`] if [`BackendPreference::Generated`] can't be
/// realized (no writable+executable memory, `codegen` feature disabled).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendPreference {
    #[default]
    Static,
    Generated,
}

/// Builder for the parameters accepted at plan-construction time (spec §6:
/// "Configuration recognized at plan time"). No environment variables, no
/// files — every knob is passed explicitly by the caller.
#[derive(Debug, Clone, Copy)]
pub struct PlanConfig {
    pub(crate) n: usize,
    pub(crate) sign: Direction,
    pub(crate) capability_hint: CapabilityHint,
    pub(crate) backend: BackendPreference,
}

impl PlanConfig {
    pub fn new(n: usize, sign: Direction) -> Self {
        Self {
            n,
            sign,
            capability_hint: CapabilityHint::Auto,
            backend: BackendPreference::Static,
        }
    }

    pub fn capability_hint(mut self, hint: CapabilityHint) -> Self {
        self.capability_hint = hint;
        self
    }

    pub fn backend(mut self, backend: BackendPreference) -> Self {
        self.backend = backend;
        self
    }
}

/// Which dispatcher a built plan actually resolved to. Read-only metadata:
/// `execute` never branches on it, since the sign and backend choice are
/// already folded into the dispatched function pointer and its tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// `n <= 8`: a fully-unrolled base-case routine, no twiddle table walk.
    Small,
    /// `n >= 16`: the recursive split-radix static driver.
    Static,
    /// A specialized routine emitted at plan time (`codegen` feature).
    Generated,
}

/// What the planner detected (or was told) about the host CPU. Informational
/// only; kept on the plan so tests and callers can introspect the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Scalar,
    Sse2,
}
