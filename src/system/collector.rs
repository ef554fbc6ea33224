use super::convert::{to_megabytes, to_percentage};
use super::error::Result;
use super::platform::{MemorySource, NativeSource, native_source};
use super::snapshot::{KilobyteSnapshot, MegabyteSnapshot, PercentSnapshot, derive};
use super::total::TotalMemory;

/// The three parallel snapshots of one reporting cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub total_kb: u64,
    pub kb: KilobyteSnapshot,
    pub mb: MegabyteSnapshot,
    pub pct: PercentSnapshot,
}

pub struct Collector<S = NativeSource> {
    source: S,
}

impl Collector {
    pub fn native() -> Self {
        Collector::new(native_source())
    }
}

impl<S: MemorySource> Collector<S> {
    pub fn new(source: S) -> Self {
        Collector { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn total(&self) -> Result<TotalMemory> {
        let kb = self.source.total_kb()?;
        tracing::debug!(total_kb = kb, "read total memory");
        Ok(TotalMemory { kb })
    }

    /// Runs one read, derive and convert pass. Percentages use the total
    /// from the same reading as the kilobyte snapshot.
    pub fn sample(&self) -> Result<Sample> {
        let _span = tracing::debug_span!("collector.sample").entered();

        let raw = self.source.raw_kb()?;
        let kb = derive(&raw)?;
        let mb = to_megabytes(&kb);
        let pct = to_percentage(&kb, raw.total_kb)?;

        tracing::trace!(used_kb = kb.used, free_kb = kb.free, "sampled memory");
        Ok(Sample {
            total_kb: raw.total_kb,
            kb,
            mb,
            pct,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::system::error::MemError;
    use crate::system::meminfo::RawMemInfo;

    struct FixedSource {
        raw: RawMemInfo,
        reads: Cell<u32>,
    }

    impl MemorySource for FixedSource {
        fn raw_kb(&self) -> Result<RawMemInfo> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.raw)
        }

        fn total_kb(&self) -> Result<u64> {
            Ok(self.raw.total_kb)
        }
    }

    fn fixed(total_kb: u64, free_kb: u64, buffers_kb: u64, cached_kb: u64) -> FixedSource {
        FixedSource {
            raw: RawMemInfo {
                total_kb,
                free_kb,
                buffers_kb,
                cached_kb,
            },
            reads: Cell::new(0),
        }
    }

    #[test]
    fn sample_fills_all_units() {
        let collector = Collector::new(fixed(16_384_000, 8_000_000, 500_000, 4_000_000));
        let sample = collector.sample().unwrap();
        assert_eq!(sample.total_kb, 16_384_000);
        assert_eq!(sample.kb.used, 3_884_000);
        assert_eq!(sample.mb.used, 3792);
        assert_eq!(format!("{:.2}", sample.pct.used), "23.71");
    }

    #[test]
    fn every_sample_rereads_the_source() {
        let collector = Collector::new(fixed(1024, 512, 0, 0));
        collector.sample().unwrap();
        collector.sample().unwrap();
        assert_eq!(collector.source().reads.get(), 2);
    }

    #[test]
    fn inconsistent_reading_fails_the_sample() {
        let collector = Collector::new(fixed(10, 8, 8, 8));
        assert!(matches!(
            collector.sample().unwrap_err(),
            MemError::InconsistentData { .. }
        ));
    }

    #[test]
    fn zero_total_fails_the_sample() {
        let collector = Collector::new(fixed(0, 0, 0, 0));
        assert!(matches!(
            collector.sample().unwrap_err(),
            MemError::DivisionByZero
        ));
    }

    #[test]
    fn total_reports_kb_and_mb() {
        let collector = Collector::new(fixed(16_384_000, 0, 0, 0));
        let total = collector.total().unwrap();
        assert_eq!(total.kb, 16_384_000);
        assert_eq!(total.mb(), 16_000);
    }
}
