use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::convert::KB_PER_MB;
use super::error::{MemError, Result};
use super::meminfo::{MEM_TOTAL, parse_kb_value, split_label};

/// Host memory size, read on its own for the startup report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TotalMemory {
    pub kb: u64,
}

impl TotalMemory {
    pub fn mb(&self) -> u64 {
        self.kb / KB_PER_MB
    }
}

/// Reads lines only until `MemTotal` is found; the rest of the source is
/// never consumed.
pub fn read_total_kb_from(path: &Path) -> Result<u64> {
    let file = File::open(path).map_err(|e| MemError::unavailable(path, e))?;
    let mut reader = BufReader::new(file);
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|e| MemError::unavailable(path, e))?;
        if read == 0 {
            break;
        }
        if let Some((MEM_TOTAL, rest)) = split_label(&line) {
            return parse_kb_value(MEM_TOTAL, rest);
        }
    }

    Err(MemError::Parse { label: MEM_TOTAL })
}
