// CPU core: register file, counters and the Running -> Halted state machine

use super::registers::RegisterFile;
use super::stats::{ExecStats, RunReport};
use super::trace::Tracer;
use crate::encoder::encode;
use crate::error::ExecError;
use crate::isa::{parse_instruction, AluOp, Instruction, Operand, SIDE_REGISTER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CpuState {
  #[default]
  Running,
  Halted,
}

#[derive(Debug, Clone, Default)]
pub struct Cpu {
  registers: RegisterFile,
  stats: ExecStats,
  state: CpuState,
}

impl Cpu {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn registers(&self) -> &RegisterFile {
    &self.registers
  }

  pub fn stats(&self) -> ExecStats {
    self.stats
  }

  pub fn state(&self) -> CpuState {
    self.state
  }

  pub fn is_running(&self) -> bool {
    self.state == CpuState::Running
  }

  pub fn report(&self) -> RunReport {
    RunReport {
      registers: self.registers.clone(),
      cycles: self.stats.cycles,
      instructions: self.stats.instructions,
      cpi: self.stats.cpi(),
      halted: self.state == CpuState::Halted,
    }
  }

  /// Run `program` in order until `end` or until the lines run out.
  /// Lines after `end` are never looked at.
  pub fn run<I, S>(&mut self, program: I, tracer: &mut dyn Tracer) -> Result<(), ExecError>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    for line in program {
      if !self.is_running() {
        break;
      }
      self.execute_line(line.as_ref(), tracer)?;
    }
    Ok(())
  }

  /// Parse, trace and execute a single line of text.
  pub fn execute_line(&mut self, line: &str, tracer: &mut dyn Tracer) -> Result<(), ExecError> {
    if !self.is_running() {
      return Err(ExecError::Halted);
    }
    let inst = parse_instruction(line).map_err(|source| ExecError::Parse {
      instruction: line.to_string(),
      source,
    })?;
    tracer.on_instruction(line, &inst, encode(&inst));

    self.step(&inst).map_err(|e| match e {
      ExecError::DivisionByZero { .. } => ExecError::DivisionByZero {
        instruction: line.to_string(),
      },
      other => other,
    })
  }

  /// Execute one parsed instruction. A failing instruction leaves registers
  /// and counters untouched.
  pub fn step(&mut self, inst: &Instruction) -> Result<(), ExecError> {
    if !self.is_running() {
      return Err(ExecError::Halted);
    }

    match *inst {
      Instruction::End => {
        self.state = CpuState::Halted;
        log::info!("halted after {} instructions", self.stats.instructions + 1);
      }
      Instruction::Alu { op, dst, operand } => {
        let value = match operand {
          Some(Operand::Register(src)) => self.registers.read(src),
          Some(Operand::Immediate(imm)) => imm,
          None => 0,
        };
        let current = self.registers.read(dst);

        match op {
          AluOp::Mov => self.registers.write(dst, value),
          AluOp::Add => self.registers.write(dst, current.wrapping_add(value)),
          AluOp::Sub => self.registers.write(dst, current.wrapping_sub(value)),
          AluOp::Mul => {
            let product = i64::from(current) * i64::from(value);
            self.registers.write(dst, product as i32);
            // r7 is written last so it wins when dst is r7
            self.registers.write(SIDE_REGISTER, (product >> 32) as i32);
          }
          AluOp::Div => {
            if value == 0 {
              return Err(ExecError::DivisionByZero {
                instruction: inst.to_string(),
              });
            }
            // i32::MIN / -1 wraps to i32::MIN, remainder 0
            self.registers.write(dst, current.wrapping_div(value));
            self.registers.write(SIDE_REGISTER, current.wrapping_rem(value));
          }
        }
      }
    }

    self.stats.retire(inst.cycles());
    log::debug!(
      "{:<16} cycles={} instructions={}",
      inst.to_string(),
      self.stats.cycles,
      self.stats.instructions
    );
    Ok(())
  }
}
