//! Operation metering for instrumented algorithm units.
//!
//! Wall-clock time alone is too noisy at small input sizes to recover an
//! asymptotic class, so units also report abstract operation counts
//! through an [`OpMeter`] handed to them by the harness. Counters are
//! relaxed atomics: units may count from worker threads, and the harness
//! only reads snapshots between runs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Live operation counters for a single measured run.
#[derive(Debug, Default)]
pub struct OpMeter {
    comparisons: AtomicU64,
    moves: AtomicU64,
    aux_bytes: AtomicU64,
}

impl OpMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one element comparison.
    #[inline]
    pub fn record_comparison(&self) {
        self.comparisons.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `n` element comparisons at once.
    #[inline]
    pub fn record_comparisons(&self, n: u64) {
        self.comparisons.fetch_add(n, Ordering::Relaxed);
    }

    /// Record one element move (a swap half, a shift, a write to output).
    #[inline]
    pub fn record_move(&self) {
        self.moves.fetch_add(1, Ordering::Relaxed);
    }

    /// Record `n` element moves at once.
    #[inline]
    pub fn record_moves(&self, n: u64) {
        self.moves.fetch_add(n, Ordering::Relaxed);
    }

    /// Record an auxiliary allocation of `bytes`. The meter keeps the
    /// high-water mark, not the sum: two sequential buffers of 1 KiB
    /// report 1 KiB, not 2.
    pub fn record_aux_bytes(&self, bytes: u64) {
        self.aux_bytes.fetch_max(bytes, Ordering::Relaxed);
    }

    /// Snapshot the current counters.
    pub fn snapshot(&self) -> OpSnapshot {
        OpSnapshot {
            comparisons: self.comparisons.load(Ordering::Relaxed),
            moves: self.moves.load(Ordering::Relaxed),
            aux_bytes: self.aux_bytes.load(Ordering::Relaxed),
        }
    }

    /// Zero all counters. Called by the harness between samples so each
    /// sample reports only its own work.
    pub fn reset(&self) {
        self.comparisons.store(0, Ordering::Relaxed);
        self.moves.store(0, Ordering::Relaxed);
        self.aux_bytes.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time copy of an [`OpMeter`]'s counters. `aux_bytes` is the
/// peak auxiliary allocation, not a running sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OpSnapshot {
    pub comparisons: u64,
    pub moves: u64,
    pub aux_bytes: u64,
}

impl OpSnapshot {
    /// Combined comparison + move count, the primary basis for
    /// complexity fitting.
    pub fn total_ops(&self) -> u64 {
        self.comparisons.saturating_add(self.moves)
    }

    /// Field-wise maximum of two snapshots.
    pub fn merge_max(&self, other: &OpSnapshot) -> OpSnapshot {
        OpSnapshot {
            comparisons: self.comparisons.max(other.comparisons),
            moves: self.moves.max(other.moves),
            aux_bytes: self.aux_bytes.max(other.aux_bytes),
        }
    }
}
