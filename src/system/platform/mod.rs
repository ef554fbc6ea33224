use super::error::Result;
use super::meminfo::RawMemInfo;

/// Where raw memory figures come from.
///
/// Implementations reopen their source on every call and hold no state
/// between calls.
pub trait MemorySource {
    fn raw_kb(&self) -> Result<RawMemInfo>;
    fn total_kb(&self) -> Result<u64>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(not(target_os = "linux"))]
mod sysinfo_source;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(not(target_os = "linux"))]
use sysinfo_source as platform_impl;

pub type NativeSource = platform_impl::Native;

pub fn native_source() -> NativeSource {
    platform_impl::native()
}
