use super::error::{MemError, Result};
use super::snapshot::{KilobyteSnapshot, MegabyteSnapshot, PercentSnapshot};

pub const KB_PER_MB: u64 = 1024;

/// Floor-divides each field independently. The result need not sum to the
/// total in megabytes.
pub fn to_megabytes(kb: &KilobyteSnapshot) -> MegabyteSnapshot {
    kb.map(|v| v / KB_PER_MB)
}

/// Free, buffered and cached as shares of `total_kb`; used is the remainder
/// of 100 so the four always sum to 100.
pub fn to_percentage(kb: &KilobyteSnapshot, total_kb: u64) -> Result<PercentSnapshot> {
    if total_kb == 0 {
        return Err(MemError::DivisionByZero);
    }
    let total = total_kb as f64;
    let share = |v: u64| v as f64 / total * 100.0;

    let free = share(kb.free);
    let buffered = share(kb.buffered);
    let cached = share(kb.cached);

    Ok(PercentSnapshot {
        used: 100.0 - (free + buffered + cached),
        free,
        buffered,
        cached,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::snapshot::MemorySnapshot;

    fn scenario() -> KilobyteSnapshot {
        MemorySnapshot {
            used: 3_884_000,
            free: 8_000_000,
            buffered: 500_000,
            cached: 4_000_000,
        }
    }

    #[test]
    fn megabytes_floor_each_field() {
        let mb = to_megabytes(&scenario());
        assert_eq!(mb.used, 3792);
        assert_eq!(mb.free, 7812);
        assert_eq!(mb.buffered, 488);
        assert_eq!(mb.cached, 3906);
        // 15998, not 16000: truncation is per field.
        assert_eq!(mb.total(), Some(15_998));
    }

    #[test]
    fn percentages_match_scenario() {
        let pct = to_percentage(&scenario(), 16_384_000).unwrap();
        assert_eq!(format!("{:.2}", pct.free), "48.83");
        assert_eq!(format!("{:.2}", pct.buffered), "3.05");
        assert_eq!(format!("{:.2}", pct.cached), "24.41");
        assert_eq!(format!("{:.2}", pct.used), "23.71");
        let sum = pct.used + pct.free + pct.buffered + pct.cached;
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_is_division_by_zero() {
        let err = to_percentage(&MemorySnapshot::default(), 0).unwrap_err();
        assert!(matches!(err, MemError::DivisionByZero));
    }

    #[test]
    fn all_free_means_zero_used() {
        let kb = MemorySnapshot {
            used: 0,
            free: 4096,
            buffered: 0,
            cached: 0,
        };
        let pct = to_percentage(&kb, 4096).unwrap();
        assert_eq!(pct.free, 100.0);
        assert_eq!(pct.used, 0.0);
    }
}
