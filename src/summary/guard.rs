//! Single-flight flag with an RAII release.
//!
//! [`InFlight::try_acquire`] either sets the flag and hands back an
//! [`InFlightGuard`], or returns `None` when the flag is already set.  The
//! flag is cleared when the guard drops, so success, error and a dropped
//! future all leave it unset.

use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Default)]
pub struct InFlight {
    active: AtomicBool,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag if it is clear.  A failed attempt leaves it untouched.
    pub fn try_acquire(&self) -> Option<InFlightGuard<'_>> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { flag: self })
    }

    /// Current state.  Advisory only: the next `try_acquire` may still fail.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Holds the flag set until dropped.
#[derive(Debug)]
pub struct InFlightGuard<'a> {
    flag: &'a InFlight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.active.store(false, Ordering::Release);
    }
}
