use sysinfo::{MemoryRefreshKind, RefreshKind, System};

use super::MemorySource;
use crate::system::error::Result;
use crate::system::meminfo::RawMemInfo;

/// Hosts without `/proc/meminfo`. Buffer and page-cache counters are not
/// exposed here, so both read as zero and their memory counts as used.
pub struct Native;

pub fn native() -> Native {
    Native
}

fn refreshed() -> System {
    System::new_with_specifics(
        RefreshKind::nothing().with_memory(MemoryRefreshKind::nothing().with_ram()),
    )
}

impl MemorySource for Native {
    fn raw_kb(&self) -> Result<RawMemInfo> {
        let sys = refreshed();
        Ok(RawMemInfo {
            total_kb: sys.total_memory() / 1024,
            free_kb: sys.free_memory() / 1024,
            buffers_kb: 0,
            cached_kb: 0,
        })
    }

    fn total_kb(&self) -> Result<u64> {
        Ok(refreshed().total_memory() / 1024)
    }
}
