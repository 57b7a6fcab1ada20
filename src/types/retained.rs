//! Reference counted owners.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::cmp::Ordering;
use std::ops::Deref;
use crate::error::Result;
use crate::types::abs::{ComputeDevice, ComputeContext, CommandQueue, ComputeMemory,
    ComputeProgram, ComputeKernel, ComputeEvent, ComputeSampler};
use crate::types::status::{Status, StatusCode};

/// A handle type whose native object carries a reference count.
///
/// # Safety
///
/// `retain_ref` and `release_ref` must forward to the matching
/// `clRetain*` / `clRelease*` entry points for the wrapped object.
pub unsafe trait RefCounted: Copy + Default + Eq + Ord + Hash + fmt::Debug + Send + Sync {
    /// Native object kind, used in log output.
    const KIND: &'static str;

    /// Increments the reference count.
    unsafe fn retain_ref(self) -> Result<StatusCode>;

    /// Decrements the reference count.
    unsafe fn release_ref(self) -> Result<StatusCode>;

    /// Returns `true` if a failed release reporting `code` should be
    /// dropped silently.
    fn ignore_release_status(_code: StatusCode) -> bool {
        false
    }
}

macro_rules! ref_counted {
    ($(#[$attr:meta])* $handle:ident, $kind:expr) => {
        $(#[$attr])*
        unsafe impl RefCounted for $handle {
            const KIND: &'static str = $kind;

            #[inline]
            unsafe fn retain_ref(self) -> Result<StatusCode> {
                self.retain()
            }

            #[inline]
            unsafe fn release_ref(self) -> Result<StatusCode> {
                self.release()
            }
        }
    };
}

ref_counted!(#[cfg(feature = "opencl_version_1_2")] ComputeDevice, "device");
ref_counted!(CommandQueue, "command queue");
ref_counted!(ComputeMemory, "mem object");
ref_counted!(ComputeProgram, "program");
ref_counted!(ComputeKernel, "kernel");
ref_counted!(ComputeEvent, "event");
ref_counted!(ComputeSampler, "sampler");

// Certain platforms report `CL_INVALID_CONTEXT` when releasing a context
// which is otherwise valid.
unsafe impl RefCounted for ComputeContext {
    const KIND: &'static str = "context";

    #[inline]
    unsafe fn retain_ref(self) -> Result<StatusCode> {
        self.retain()
    }

    #[inline]
    unsafe fn release_ref(self) -> Result<StatusCode> {
        self.release()
    }

    fn ignore_release_status(code: StatusCode) -> bool {
        code == Status::CL_INVALID_CONTEXT
    }
}


/// Owns exactly one native reference to `H`.
///
/// Cloning retains, dropping releases. Comparison, ordering and hashing
/// delegate to the wrapped handle, so two owners of the same object compare
/// equal.
pub struct Retained<H: RefCounted>(H);

impl<H: RefCounted> Retained<H> {
    /// Takes over the reference returned by a `clCreate*` call.
    ///
    /// # Safety
    ///
    /// `handle` must be valid and the caller must own the reference being
    /// handed over.
    pub unsafe fn from_created(handle: H) -> Retained<H> {
        Retained(handle)
    }

    /// Retains `handle` (for instance one obtained from an info query) and
    /// owns the new reference.
    ///
    /// # Safety
    ///
    /// `handle` must be valid.
    pub unsafe fn from_copied(handle: H) -> Result<Retained<H>> {
        handle.retain_ref()?.check(H::KIND)?;
        log::trace!("Retained {} {:?}.", H::KIND, handle);
        Ok(Retained(handle))
    }

    /// Returns the wrapped handle without giving up ownership.
    #[inline]
    pub fn handle(&self) -> H {
        self.0
    }

    /// Gives the reference back to the caller without releasing it.
    pub fn into_raw(self) -> H {
        let handle = self.0;
        std::mem::forget(self);
        handle
    }
}

impl<H: RefCounted> Clone for Retained<H> {
    fn clone(&self) -> Retained<H> {
        match unsafe { self.0.retain_ref() } {
            Ok(code) if code.is_success() => {
                log::trace!("Retained {} {:?}.", H::KIND, self.0);
            },
            Ok(code) => log::warn!("Error retaining OpenCL {}: {:?}: {}", H::KIND, self.0, code),
            Err(err) => log::warn!("Error retaining OpenCL {}: {:?}: {}", H::KIND, self.0, err),
        }
        Retained(self.0)
    }
}

impl<H: RefCounted> Drop for Retained<H> {
    fn drop(&mut self) {
        if self.0 == H::default() {
            return;
        }
        match unsafe { self.0.release_ref() } {
            Ok(code) if code.is_success() => {
                log::trace!("Released {} {:?}.", H::KIND, self.0);
            },
            Ok(code) if H::ignore_release_status(code) => (),
            Ok(code) => log::warn!("Error releasing OpenCL {}: {:?}: {}", H::KIND, self.0, code),
            Err(err) => log::warn!("Error releasing OpenCL {}: {:?}: {}", H::KIND, self.0, err),
        }
    }
}

impl<H: RefCounted> Deref for Retained<H> {
    type Target = H;

    fn deref(&self) -> &H {
        &self.0
    }
}

impl<H: RefCounted> AsRef<H> for Retained<H> {
    fn as_ref(&self) -> &H {
        &self.0
    }
}

impl<H: RefCounted> fmt::Debug for Retained<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Retained({:?})", self.0)
    }
}

impl<H: RefCounted> PartialEq for Retained<H> {
    fn eq(&self, other: &Retained<H>) -> bool {
        self.0 == other.0
    }
}

impl<H: RefCounted> Eq for Retained<H> {}

impl<H: RefCounted> PartialEq<H> for Retained<H> {
    fn eq(&self, other: &H) -> bool {
        self.0 == *other
    }
}

impl<H: RefCounted> PartialOrd for Retained<H> {
    fn partial_cmp(&self, other: &Retained<H>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<H: RefCounted> Ord for Retained<H> {
    fn cmp(&self, other: &Retained<H>) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<H: RefCounted> Hash for Retained<H> {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.0.hash(state)
    }
}
