use crate::system::meminfo::ProcMeminfo;

pub type Native = ProcMeminfo;

pub fn native() -> Native {
    ProcMeminfo::default()
}
