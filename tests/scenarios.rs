use cpusim::cpu::{Cpu, NoTrace, RunReport};
use cpusim::simulator::program::load_program;
use cpusim::simulator::sim::mode::SimConfig;
use cpusim::simulator::Simulator;
use cpusim::{ExecError, ParseError, SimError};
use std::path::PathBuf;

fn program_path(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("programs").join(name)
}

fn run_file(name: &str) -> RunReport {
  let program = load_program(&program_path(name)).unwrap();
  let mut cpu = Cpu::new();
  cpu.run(&program, &mut NoTrace).unwrap();
  cpu.report()
}

fn run_lines(lines: &[&str]) -> Result<RunReport, ExecError> {
  let mut cpu = Cpu::new();
  cpu.run(lines.iter(), &mut NoTrace)?;
  Ok(cpu.report())
}

#[test]
fn basic_register_operations() {
  let report = run_file("basic.asm");
  assert_eq!(report.registers.values(), &[30, 20, 0, 0, 0, 0, 0, 0]);
  assert_eq!(report.cycles, 4);
  assert_eq!(report.instructions, 4);
  assert_eq!(report.cpi, Some(1.0));
}

#[test]
fn immediate_values() {
  let report = run_file("immediates.asm");
  assert_eq!(report.registers.values()[0], 10);
  assert_eq!(report.cycles, 4);
  assert_eq!(report.cpi, Some(1.0));
}

#[test]
fn multiplication() {
  let report = run_file("multiply.asm");
  assert_eq!(report.registers.values(), &[50, 5, 0, 0, 0, 0, 0, 0]);
  assert_eq!(report.cycles, 6);
  assert_eq!(report.instructions, 4);
  assert_eq!(report.cpi, Some(1.5));
}

#[test]
fn division_with_remainder() {
  let report = run_file("divide.asm");
  assert_eq!(report.registers.values(), &[3, 5, 0, 0, 0, 0, 0, 2]);
  assert_eq!(report.cycles, 7);
  assert_eq!(report.instructions, 4);
  assert_eq!(report.cpi, Some(1.75));
}

#[test]
fn multiple_operations() {
  let report = run_file("mixed.asm");
  assert_eq!(report.registers.values(), &[125, 5, 100, 0, 0, 0, 0, 0]);
  assert_eq!(report.cycles, 13);
  assert_eq!(report.instructions, 8);
  assert_eq!(report.cpi, Some(1.625));
  assert!(report.halted);
}

#[test]
fn compact_operand_syntax() {
  let report = run_lines(&["mov r0,10", "mov r1,20", "add r0,r1", "end"]).unwrap();
  assert_eq!(report.registers.values()[0], 30);
}

#[test]
fn lines_after_end_are_not_counted() {
  let report = run_lines(&["mov r0, 1", "END", "mov r0, 99", "div r0, 0"]).unwrap();
  assert_eq!(report.registers.values()[0], 1);
  assert_eq!(report.instructions, 2);
  assert_eq!(report.cycles, 2);
}

#[test]
fn division_by_zero_is_fatal() {
  let err = run_lines(&["mov r0, 5", "div r0, r3", "end"]).unwrap_err();
  assert_eq!(err, ExecError::DivisionByZero { instruction: "div r0, r3".to_string() });
}

#[test]
fn malformed_instruction_is_fatal() {
  let err = run_lines(&["mov r0, ten", "end"]).unwrap_err();
  assert_eq!(
    err,
    ExecError::Parse {
      instruction: "mov r0, ten".to_string(),
      source: ParseError::InvalidImmediate("ten".to_string()),
    }
  );
}

#[test]
fn simulator_text_output() {
  let program = load_program(&program_path("basic.asm")).unwrap();
  let sim = Simulator::new(SimConfig::default());
  let mut out = Vec::new();
  let report = sim.execute(&program, &mut out, None).unwrap();
  assert_eq!(report.cycles, 4);

  let text = String::from_utf8(out).unwrap();
  assert!(text.contains("\nExecuting: add r0, r1\n    Decoded: add r0, r1\n    Encoded: [00100000001000000000000000000000]\n"));
  assert!(text.contains("r0 = 30 (00000000000000000000000000011110)"));
  assert!(text.contains("Total cycles: 4"));
  assert!(text.contains("Instructions executed: 4"));
  assert!(text.contains("CPI (cycles per instruction): 1.0"));
}

#[test]
fn missing_program_file() {
  let err = load_program(&program_path("does_not_exist.asm")).unwrap_err();
  assert!(matches!(err, SimError::Io(_)));
}
