pub mod cpu;
pub mod encoder;
pub mod error;
pub mod isa;
pub mod simulator;

pub use cpu::{Cpu, RunReport};
pub use encoder::{encode, EncodedWord};
pub use error::{ExecError, ParseError, SimError};
pub use isa::{parse_instruction, Instruction};
pub use simulator::sim::mode::{OutputFormat, SimConfig, StepMode};
pub use simulator::Simulator;
