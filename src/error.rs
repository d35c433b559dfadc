use std::io;
use std::path::Path;

use miette::{miette, Report, Severity};

// Loader errors

pub fn load_failure(path: &Path, err: io::Error) -> Report {
    miette!(
        severity = Severity::Error,
        code = "image::open",
        help = format!("caused by: {err}"),
        "failed to load image: {}",
        path.display(),
    )
}

pub fn load_truncated(path: &Path) -> Report {
    miette!(
        severity = Severity::Error,
        code = "image::truncated",
        help = "an image starts with a 16-bit big-endian origin word",
        "failed to load image: {}",
        path.display(),
    )
}

// Runtime errors

pub fn illegal_opcode(pc: u16, instr: u16) -> Report {
    miette!(
        severity = Severity::Error,
        code = "run::illegal_opcode",
        help = "opcodes x8 (RTI) and xD are reserved and cannot be executed",
        "Illegal instruction x{:04X} at x{:04X}",
        instr,
        pc,
    )
}
