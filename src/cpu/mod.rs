// Execution engine

pub mod cpu;
pub mod registers;
pub mod stats;
pub mod trace;

pub use cpu::{Cpu, CpuState};
pub use registers::RegisterFile;
pub use stats::{ExecStats, RunReport};
pub use trace::{NoTrace, TraceLog, Tracer};
