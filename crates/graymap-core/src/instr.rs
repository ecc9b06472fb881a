//! Operation counters
//!
//! Two process-wide, monotonically increasing counters:
//!
//! - **pixel accesses**: one per sample read or written through the pixel
//!   accessors, plus one per sample moved by a bulk I/O transfer;
//! - **comparisons**: one per sample-level equality test performed while
//!   matching or locating a subimage.
//!
//! The counters are observability-only and never influence results. They
//! are useful for checking the asymptotic cost of an operation against a
//! scripted access pattern: call [`reset`], run the operation, then read
//! [`pixel_accesses`] and [`comparisons`].
//!
//! Counting uses relaxed atomics; totals are exact only while a single
//! thread drives the images being measured.

use std::sync::atomic::{AtomicU64, Ordering};

static PIXEL_ACCESSES: AtomicU64 = AtomicU64::new(0);
static COMPARISONS: AtomicU64 = AtomicU64::new(0);

/// Reset both counters to zero.
pub fn reset() {
    PIXEL_ACCESSES.store(0, Ordering::Relaxed);
    COMPARISONS.store(0, Ordering::Relaxed);
}

/// Total pixel-buffer elements read or written so far.
pub fn pixel_accesses() -> u64 {
    PIXEL_ACCESSES.load(Ordering::Relaxed)
}

/// Total sample comparisons performed so far.
pub fn comparisons() -> u64 {
    COMPARISONS.load(Ordering::Relaxed)
}

/// Record `n` pixel-buffer element accesses.
#[inline]
pub fn count_pixel_accesses(n: u64) {
    PIXEL_ACCESSES.fetch_add(n, Ordering::Relaxed);
}

/// Record `n` sample comparisons.
#[inline]
pub fn count_comparisons(n: u64) {
    COMPARISONS.fetch_add(n, Ordering::Relaxed);
}
