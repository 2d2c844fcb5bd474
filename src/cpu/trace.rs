// Per-instruction observer hook

use crate::encoder::EncodedWord;
use crate::isa::Instruction;

/// Called once for each instruction, after it parsed and before it executes.
pub trait Tracer {
  fn on_instruction(&mut self, text: &str, inst: &Instruction, word: EncodedWord);
}

/// Tracer that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl Tracer for NoTrace {
  fn on_instruction(&mut self, _text: &str, _inst: &Instruction, _word: EncodedWord) {}
}

/// Collects every traced line in memory.
#[derive(Debug, Default, Clone)]
pub struct TraceLog {
  pub entries: Vec<(String, Instruction, EncodedWord)>,
}

impl Tracer for TraceLog {
  fn on_instruction(&mut self, text: &str, inst: &Instruction, word: EncodedWord) {
    self.entries.push((text.to_string(), *inst, word));
  }
}
