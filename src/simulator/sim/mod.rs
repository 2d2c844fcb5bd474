pub mod mode;
pub mod shell;

pub use mode::{OutputFormat, SimConfig, StepMode};
pub use shell::{Command, CommandSource, Shell};
