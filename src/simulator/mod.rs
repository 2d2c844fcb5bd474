pub mod config;
pub mod program;
pub mod sim;
pub mod simulator;
pub mod utils;

pub use program::ProgramSource;
pub use simulator::Simulator;
