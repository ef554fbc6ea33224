use std::fs;
use std::path::{Path, PathBuf};

use super::error::{MemError, Result};
use super::platform::MemorySource;
use super::total::read_total_kb_from;

pub const PROC_MEMINFO: &str = "/proc/meminfo";

pub(crate) const MEM_TOTAL: &str = "MemTotal";
const MEM_FREE: &str = "MemFree";
const BUFFERS: &str = "Buffers";
const CACHED: &str = "Cached";

/// The four kernel-reported figures, in kilobytes, exactly as read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawMemInfo {
    pub total_kb: u64,
    pub free_kb: u64,
    pub buffers_kb: u64,
    pub cached_kb: u64,
}

/// A `/proc/meminfo`-format file. Reopened on every call.
#[derive(Clone, Debug)]
pub struct ProcMeminfo {
    path: PathBuf,
}

impl Default for ProcMeminfo {
    fn default() -> Self {
        Self::at(PROC_MEMINFO)
    }
}

impl ProcMeminfo {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        ProcMeminfo { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MemorySource for ProcMeminfo {
    fn raw_kb(&self) -> Result<RawMemInfo> {
        read_raw_kb_from(&self.path)
    }

    fn total_kb(&self) -> Result<u64> {
        read_total_kb_from(&self.path)
    }
}

pub fn read_raw_kb_from(path: &Path) -> Result<RawMemInfo> {
    let contents = fs::read(path).map_err(|e| MemError::unavailable(path, e))?;
    parse_meminfo(&contents)
}

/// Parses meminfo text by label rather than by line position, so extra or
/// reordered lines are tolerated but a missing label is an error.
///
/// Lines are decoded one at a time; an undecodable line is skipped unless it
/// carries one of the required labels.
pub fn parse_meminfo(contents: impl AsRef<[u8]>) -> Result<RawMemInfo> {
    let mut total = None;
    let mut free = None;
    let mut buffers = None;
    let mut cached = None;

    for line in contents.as_ref().split(|&b| b == b'\n') {
        let Some((label, rest)) = split_label(line) else {
            continue;
        };
        let (slot, label) = match label {
            MEM_TOTAL => (&mut total, MEM_TOTAL),
            MEM_FREE => (&mut free, MEM_FREE),
            BUFFERS => (&mut buffers, BUFFERS),
            CACHED => (&mut cached, CACHED),
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(parse_kb_value(label, rest)?);
        }
    }

    Ok(RawMemInfo {
        total_kb: total.ok_or(MemError::Parse { label: MEM_TOTAL })?,
        free_kb: free.ok_or(MemError::Parse { label: MEM_FREE })?,
        buffers_kb: buffers.ok_or(MemError::Parse { label: BUFFERS })?,
        cached_kb: cached.ok_or(MemError::Parse { label: CACHED })?,
    })
}

/// Splits a raw line at its first colon. Lines whose label is not UTF-8
/// cannot name a known field and yield `None`.
pub(crate) fn split_label(line: &[u8]) -> Option<(&str, &[u8])> {
    let colon = line.iter().position(|&b| b == b':')?;
    let label = std::str::from_utf8(&line[..colon]).ok()?;
    Some((label.trim(), &line[colon + 1..]))
}

/// Parses the `<integer>[whitespace]kB` tail of a meminfo line.
pub(crate) fn parse_kb_value(label: &'static str, rest: &[u8]) -> Result<u64> {
    let malformed = || MemError::Parse { label };
    let rest = std::str::from_utf8(rest).map_err(|_| malformed())?;
    let digits = rest.trim().strip_suffix("kB").ok_or_else(malformed)?.trim_end();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    digits.parse::<u64>().map_err(|_| malformed())
}
