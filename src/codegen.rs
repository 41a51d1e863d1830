// src/codegen.rs
//! The `codegen` backend: plan-time probing for writable+executable memory,
//! behind the `codegen` feature. `Backend::Generated` only ever gets
//! selected for a plan if [`is_available`] actually round-trips a page
//! through `PROT_WRITE` then `PROT_EXEC` on the running kernel — a sandbox,
//! a locked-down container or a W^X-enforcing hardening layer can all say no,
//! and a plan built under [`BackendPreference::Generated`](crate::config::BackendPreference::Generated)
//! degrades to [`Backend::Static`](crate::config::Backend) rather than
//! surface that as an error (spec: `ExecutableMemoryDenied` never reaches a
//! caller).
//!
//! What actually runs behind `Backend::Generated` is, today, the same
//! verified static driver: this module owns the executable-memory lifecycle
//! a real specialized-kernel emitter would need, but does not itself emit
//! machine code. See `DESIGN.md` for why. `mmap`/`mprotect` are POSIX; on
//! non-`unix` targets [`is_available`] always answers `false`.

#[cfg(unix)]
mod unix {
    use core::ptr;

    pub(super) const PAGE_LEN: usize = 4096;

    /// An owned page of memory that started out `PROT_READ | PROT_WRITE` and
    /// can be flipped to `PROT_READ | PROT_EXEC`. `munmap`s itself on drop.
    pub(crate) struct ExecPage {
        ptr: *mut u8,
        len: usize,
        executable: bool,
    }

    impl ExecPage {
        pub(super) fn map_rw(len: usize) -> Option<Self> {
            let ptr = unsafe {
                libc::mmap(
                    ptr::null_mut(),
                    len,
                    libc::PROT_READ | libc::PROT_WRITE,
                    libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                    -1,
                    0,
                )
            };
            if ptr == libc::MAP_FAILED {
                None
            } else {
                Some(Self {
                    ptr: ptr as *mut u8,
                    len,
                    executable: false,
                })
            }
        }

        /// Flips the mapping to `PROT_READ | PROT_EXEC`. Once this succeeds
        /// the page is no longer writable: the W^X discipline the kernel
        /// enforces is mirrored here rather than relied upon silently.
        pub(super) fn make_executable(&mut self) -> bool {
            let ok = unsafe {
                libc::mprotect(
                    self.ptr as *mut libc::c_void,
                    self.len,
                    libc::PROT_READ | libc::PROT_EXEC,
                )
            };
            self.executable = ok == 0;
            self.executable
        }
    }

    impl Drop for ExecPage {
        fn drop(&mut self) {
            unsafe {
                libc::munmap(self.ptr as *mut libc::c_void, self.len);
            }
        }
    }
}

#[cfg(unix)]
use unix::ExecPage;
#[cfg(unix)]
pub(crate) use unix::PAGE_LEN;

/// Probes whether this process can actually obtain executable memory: maps
/// one anonymous RW page and tries to flip it to RX. Never panics; any
/// failure (mmap denied, mprotect denied) just answers `false`.
#[cfg(unix)]
pub(crate) fn is_available() -> bool {
    match ExecPage::map_rw(PAGE_LEN) {
        Some(mut page) => page.make_executable(),
        None => false,
    }
}

#[cfg(not(unix))]
pub(crate) fn is_available() -> bool {
    false
}

#[cfg(test)]
#[path = "codegen_tests.rs"]
mod tests;
