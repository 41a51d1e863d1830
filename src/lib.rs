#![no_std]

//! Single-precision complex FFT with a split-radix static driver and SIMD
//! butterfly kernels.
//!
//! The public surface is deliberately narrow: build a [`Plan`] once with
//! [`plan`], then call [`Plan::execute`] as many times as you like. Nothing
//! past plan construction allocates, and there is no separate bit-reversal
//! pass — `execute`'s `output` is in natural order the moment it returns.
//!
//! ```
//! use ffts::{plan, Complex32, Direction, PlanConfig};
//!
//! let p = plan(PlanConfig::new(8, Direction::Forward)).unwrap();
//! let input = [Complex32::new(1.0, 0.0); 8];
//! let mut output = [Complex32::new(0.0, 0.0); 8];
//! p.execute(&input, &mut output);
//! assert!((output[0] - Complex32::new(8.0, 0.0)).norm() < 1e-4);
//! ```

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod config;
mod direction;
mod driver;
mod error;
mod kernels;
mod pattern;
mod plan;
mod trig;

#[cfg(feature = "codegen")]
mod codegen;

pub use config::{Backend, BackendPreference, Capability, CapabilityHint, PlanConfig};
pub use direction::Direction;
pub use error::FftError;
pub use plan::{plan, Plan};

pub use num_complex::Complex32;
