// src/export/guard.rs

//! Export in-flight marker.
//!
//! Document generation takes non-trivial wall time and must not run
//! concurrently against the same output stream. `ExportLock` rejects
//! re-entrant requests; the marker is released by `Drop`, so it cannot
//! stay stuck after success, failure, or panic.

use std::sync::atomic::{AtomicBool, Ordering};

/// Single in-flight marker for export operations.
#[derive(Debug, Default)]
pub struct ExportLock {
    busy: AtomicBool,
}

impl ExportLock {
    pub const fn new() -> Self {
        Self {
            busy: AtomicBool::new(false),
        }
    }

    /// Acquire the marker, or None if an export is already outstanding.
    pub fn try_begin(&self) -> Option<ExportGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
            .then_some(ExportGuard { lock: self })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// RAII handle for one export; releases the marker when dropped.
#[derive(Debug)]
pub struct ExportGuard<'a> {
    lock: &'a ExportLock,
}

impl Drop for ExportGuard<'_> {
    fn drop(&mut self) {
        self.lock.busy.store(false, Ordering::Release);
    }
}
