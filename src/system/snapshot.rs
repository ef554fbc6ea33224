use super::error::{MemError, Result};
use super::meminfo::RawMemInfo;

/// One reading of the four memory categories in a single unit.
///
/// Fields are named rather than positional; callers pick the display order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MemorySnapshot<T> {
    pub used: T,
    pub free: T,
    pub buffered: T,
    pub cached: T,
}

// Both integer units share one representation; the alias only names intent.
pub type KilobyteSnapshot = MemorySnapshot<u64>;
pub type MegabyteSnapshot = MemorySnapshot<u64>;
pub type PercentSnapshot = MemorySnapshot<f64>;

impl<T> MemorySnapshot<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> MemorySnapshot<U> {
        MemorySnapshot {
            used: f(self.used),
            free: f(self.free),
            buffered: f(self.buffered),
            cached: f(self.cached),
        }
    }
}

impl MemorySnapshot<u64> {
    /// Sum of all four categories, or `None` on overflow. For a snapshot
    /// returned by [`derive`] this equals the reading's total.
    pub fn total(&self) -> Option<u64> {
        self.used
            .checked_add(self.free)?
            .checked_add(self.buffered)?
            .checked_add(self.cached)
    }
}

/// `used = total - (free + buffers + cached)`.
pub fn derive(raw: &RawMemInfo) -> Result<KilobyteSnapshot> {
    let inconsistent = |accounted| MemError::InconsistentData {
        total: raw.total_kb,
        accounted,
    };

    let accounted = raw
        .free_kb
        .checked_add(raw.buffers_kb)
        .and_then(|sum| sum.checked_add(raw.cached_kb))
        .ok_or_else(|| inconsistent(u64::MAX))?;
    let used = raw
        .total_kb
        .checked_sub(accounted)
        .ok_or_else(|| inconsistent(accounted))?;

    Ok(MemorySnapshot {
        used,
        free: raw.free_kb,
        buffered: raw.buffers_kb,
        cached: raw.cached_kb,
    })
}
