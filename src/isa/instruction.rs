// Instructions understood by the register machine

use std::fmt;

use crate::error::ParseError;

/// Number of architectural registers.
pub const NUM_REGISTERS: usize = 8;

/// Register that receives the high product word of `mul` and the remainder of `div`.
pub const SIDE_REGISTER: Register = Register(7);

/// A validated register index in `0..NUM_REGISTERS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Register(u8);

impl Register {
  pub fn new(index: usize) -> Option<Self> {
    if index < NUM_REGISTERS {
      Some(Self(index as u8))
    } else {
      None
    }
  }

  pub fn index(self) -> usize {
    self.0 as usize
  }
}

impl TryFrom<usize> for Register {
  type Error = ParseError;

  fn try_from(index: usize) -> Result<Self, Self::Error> {
    Self::new(index).ok_or_else(|| ParseError::InvalidRegister(format!("r{}", index)))
  }
}

impl fmt::Display for Register {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "r{}", self.0)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
  Register(Register),
  Immediate(i32),
}

impl fmt::Display for Operand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Operand::Register(reg) => write!(f, "{}", reg),
      Operand::Immediate(value) => write!(f, "{}", value),
    }
  }
}

/// Operations that read and write a destination register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
  Mov,
  Add,
  Sub,
  Mul,
  Div,
}

/// Opcode field values, as packed into bits 31-28 of an encoded word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
  End = 0,
  Mov = 1,
  Add = 2,
  Sub = 3,
  Mul = 4,
  Div = 5,
}

impl Opcode {
  pub fn from_mnemonic(token: &str) -> Option<Self> {
    match token.to_ascii_lowercase().as_str() {
      "mov" => Some(Opcode::Mov),
      "add" => Some(Opcode::Add),
      "sub" => Some(Opcode::Sub),
      "mul" => Some(Opcode::Mul),
      "div" => Some(Opcode::Div),
      "end" => Some(Opcode::End),
      _ => None,
    }
  }

  pub fn mnemonic(self) -> &'static str {
    match self {
      Opcode::End => "end",
      Opcode::Mov => "mov",
      Opcode::Add => "add",
      Opcode::Sub => "sub",
      Opcode::Mul => "mul",
      Opcode::Div => "div",
    }
  }

  pub fn code(self) -> u32 {
    self as u32
  }

  /// Cycles charged when an instruction with this opcode retires.
  pub fn cycles(self) -> u64 {
    match self {
      Opcode::Mov | Opcode::Add | Opcode::Sub | Opcode::End => 1,
      Opcode::Mul => 3,
      Opcode::Div => 4,
    }
  }
}

impl From<AluOp> for Opcode {
  fn from(op: AluOp) -> Self {
    match op {
      AluOp::Mov => Opcode::Mov,
      AluOp::Add => Opcode::Add,
      AluOp::Sub => Opcode::Sub,
      AluOp::Mul => Opcode::Mul,
      AluOp::Div => Opcode::Div,
    }
  }
}

/// A parsed instruction. Lives for a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
  Alu {
    op: AluOp,
    dst: Register,
    operand: Option<Operand>,
  },
  End,
}

impl Instruction {
  pub fn opcode(&self) -> Opcode {
    match self {
      Instruction::Alu { op, .. } => Opcode::from(*op),
      Instruction::End => Opcode::End,
    }
  }

  pub fn cycles(&self) -> u64 {
    self.opcode().cycles()
  }
}

impl fmt::Display for Instruction {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Instruction::Alu { dst, operand: Some(operand), .. } => {
        write!(f, "{} {}, {}", self.opcode().mnemonic(), dst, operand)
      }
      Instruction::Alu { dst, operand: None, .. } => write!(f, "{} {}", self.opcode().mnemonic(), dst),
      Instruction::End => write!(f, "end"),
    }
  }
}
