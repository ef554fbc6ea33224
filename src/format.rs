use std::fmt::Display;

use crate::system::collector::Sample;
use crate::system::snapshot::MemorySnapshot;
use crate::system::total::TotalMemory;

const GROUP_SEPARATOR: &str = "\t\t";

/// Column order for every unit group: used, free, cached, buffered.
fn columns<T: Copy>(s: &MemorySnapshot<T>) -> [T; 4] {
    [s.used, s.free, s.cached, s.buffered]
}

fn join_group<T: Display>(values: [T; 4]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\t")
}

fn labels(unit: &str) -> [String; 4] {
    ["Used", "Free", "Cache", "Buffer"].map(|name| format!("{name}{unit}"))
}

pub fn format_totals(total: &TotalMemory) -> String {
    format!(
        "Total memory in kB:\t{}\nTotal memory in MB:\t{}",
        total.kb,
        total.mb()
    )
}

pub fn format_header() -> String {
    ["K", "M", "P"]
        .map(|unit| join_group(labels(unit)))
        .join(GROUP_SEPARATOR)
}

pub fn format_row(sample: &Sample) -> String {
    let kb = join_group(columns(&sample.kb));
    let mb = join_group(columns(&sample.mb));
    let pct = join_group(columns(&sample.pct).map(|p| format!("{p:.2}")));
    [kb, mb, pct].join(GROUP_SEPARATOR)
}
