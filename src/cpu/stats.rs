// Execution statistics and the end-of-run report

use serde::Serialize;

use super::registers::RegisterFile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecStats {
  pub cycles: u64,
  pub instructions: u64,
}

impl ExecStats {
  pub fn retire(&mut self, cycles: u64) {
    self.instructions += 1;
    self.cycles += cycles;
  }

  /// Cycles per instruction, `None` before anything has retired.
  pub fn cpi(&self) -> Option<f64> {
    if self.instructions == 0 {
      None
    } else {
      Some(self.cycles as f64 / self.instructions as f64)
    }
  }
}

/// Snapshot of a finished (or stopped) run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
  pub registers: RegisterFile,
  pub cycles: u64,
  pub instructions: u64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cpi: Option<f64>,
  pub halted: bool,
}
