pub mod collector;
pub mod convert;
pub mod error;
pub mod meminfo;
pub mod platform;
pub mod snapshot;
pub mod total;

pub use error::{MemError, Result};

use meminfo::RawMemInfo;
use platform::{MemorySource, native_source};

/// Reads the raw kilobyte figures from the host's native source.
pub fn read_raw_kb() -> Result<RawMemInfo> {
    native_source().raw_kb()
}

pub fn total_kb() -> Result<u64> {
    native_source().total_kb()
}

pub fn total_mb() -> Result<u64> {
    Ok(total_kb()? / convert::KB_PER_MB)
}
