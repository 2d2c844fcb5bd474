use std::io::{self, Write};

use crate::cpu::{RegisterFile, RunReport, Tracer};
use crate::encoder::{to_binary32, EncodedWord};
use crate::error::Result;
use crate::isa::Instruction;

/// Writes the per-instruction trace:
///
/// ```text
/// Executing: mov r0, 10
///     Decoded: mov r0, 10
///     Encoded: [00010001000000000000101000000000]
/// ```
pub struct ConsoleTrace<'a, W: Write> {
  out: &'a mut W,
  enabled: bool,
  error: Option<io::Error>,
}

impl<'a, W: Write> ConsoleTrace<'a, W> {
  pub fn new(out: &'a mut W, enabled: bool) -> Self {
    Self {
      out,
      enabled,
      error: None,
    }
  }

  pub fn out(&mut self) -> &mut W {
    &mut *self.out
  }

  /// First write error seen while tracing, if any.
  pub fn finish(self) -> io::Result<()> {
    match self.error {
      Some(e) => Err(e),
      None => Ok(()),
    }
  }
}

impl<W: Write> Tracer for ConsoleTrace<'_, W> {
  fn on_instruction(&mut self, text: &str, inst: &Instruction, word: EncodedWord) {
    if !self.enabled || self.error.is_some() {
      return;
    }
    let res = writeln!(self.out, "\nExecuting: {}", text)
      .and_then(|_| writeln!(self.out, "    Decoded: {}", inst))
      .and_then(|_| writeln!(self.out, "    Encoded: [{}]", word));
    if let Err(e) = res {
      self.error = Some(e);
    }
  }
}

pub fn print_registers<W: Write>(out: &mut W, registers: &RegisterFile) -> io::Result<()> {
  for (reg, value) in registers.iter() {
    writeln!(out, "{} = {} ({})", reg, value, to_binary32(value))?;
  }
  Ok(())
}

pub fn print_final_state<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
  writeln!(out, "\n=== Final CPU State ===")?;
  writeln!(out, "\nFinal Register Values:")?;
  print_registers(out, &report.registers)?;
  writeln!(out, "Total cycles: {}", report.cycles)?;
  writeln!(out, "Instructions executed: {}", report.instructions)?;
  if let Some(cpi) = report.cpi {
    writeln!(out, "CPI (cycles per instruction): {:?}", cpi)?;
  }
  Ok(())
}

pub fn print_json<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
  serde_json::to_writer_pretty(&mut *out, report)?;
  writeln!(out)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cpu::{Cpu, NoTrace};

  fn report_for(program: &[&str]) -> RunReport {
    let mut cpu = Cpu::new();
    cpu.run(program.iter(), &mut NoTrace).unwrap();
    cpu.report()
  }

  #[test]
  fn trace_lines() {
    let mut buf = Vec::new();
    let mut trace = ConsoleTrace::new(&mut buf, true);
    let mut cpu = Cpu::new();
    cpu.run(["mov r0,10", "end"], &mut trace).unwrap();
    trace.finish().unwrap();

    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Executing: mov r0,10\n    Decoded: mov r0, 10\n"));
    assert!(text.contains("    Encoded: [00010001000000000000101000000000]"));
    assert!(text.contains(&format!("Executing: end\n    Decoded: end\n    Encoded: [{}]", "0".repeat(32))));
  }

  #[test]
  fn disabled_trace_writes_nothing() {
    let mut buf = Vec::new();
    let mut trace = ConsoleTrace::new(&mut buf, false);
    Cpu::new().run(["mov r0, 1", "end"], &mut trace).unwrap();
    trace.finish().unwrap();
    assert!(buf.is_empty());
  }

  #[test]
  fn final_state_text() {
    let report = report_for(&["mov r0, 10", "mov r1, 5", "mul r0, r1", "end"]);
    let mut buf = Vec::new();
    print_final_state(&mut buf, &report).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("r0 = 50 (00000000000000000000000000110010)"));
    assert!(text.contains("r7 = 0 (00000000000000000000000000000000)"));
    assert!(text.contains("Total cycles: 6"));
    assert!(text.contains("Instructions executed: 4"));
    assert!(text.contains("CPI (cycles per instruction): 1.5"));
  }

  #[test]
  fn cpi_line_omitted_without_instructions() {
    let report = Cpu::new().report();
    let mut buf = Vec::new();
    print_final_state(&mut buf, &report).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("Instructions executed: 0"));
    assert!(!text.contains("CPI"));
  }

  #[test]
  fn negative_register_prints_twos_complement() {
    let report = report_for(&["mov r3, -1", "end"]);
    let mut buf = Vec::new();
    print_registers(&mut buf, &report.registers).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains(&format!("r3 = -1 ({})", "1".repeat(32))));
  }

  #[test]
  fn json_report() {
    let report = report_for(&["mov r0, 17", "mov r1, 5", "div r0, r1", "end"]);
    let mut buf = Vec::new();
    print_json(&mut buf, &report).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["registers"], serde_json::json!([3, 5, 0, 0, 0, 0, 0, 2]));
    assert_eq!(value["cycles"], 7);
    assert_eq!(value["instructions"], 4);
    assert_eq!(value["cpi"], 1.75);
    assert_eq!(value["halted"], true);
  }
}
