// Instruction parser: text line -> Instruction

use super::instruction::{AluOp, Instruction, Opcode, Operand, Register};
use crate::error::ParseError;

/// Split a line into tokens. Whitespace and commas both separate tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
  line
    .split(|c: char| c.is_whitespace() || c == ',')
    .filter(|t| !t.is_empty())
    .collect()
}

/// True when the first token of `line` is `end`, ignoring case.
pub fn is_terminator(line: &str) -> bool {
  tokenize(line)
    .first()
    .is_some_and(|t| t.eq_ignore_ascii_case("end"))
}

pub fn parse_instruction(line: &str) -> Result<Instruction, ParseError> {
  let parts = tokenize(line);
  let Some(mnemonic) = parts.first() else {
    return Err(ParseError::Empty);
  };

  let opcode = Opcode::from_mnemonic(mnemonic).ok_or_else(|| ParseError::UnknownOpcode(mnemonic.to_string()))?;
  let op = match opcode {
    Opcode::End => return Ok(Instruction::End),
    Opcode::Mov => AluOp::Mov,
    Opcode::Add => AluOp::Add,
    Opcode::Sub => AluOp::Sub,
    Opcode::Mul => AluOp::Mul,
    Opcode::Div => AluOp::Div,
  };

  let dst = parse_register(parts.get(1).ok_or(ParseError::MissingDestination)?)?;
  let operand = parts.get(2).map(|t| parse_operand(t)).transpose()?;

  Ok(Instruction::Alu { op, dst, operand })
}

/// Parse `r<index>`, dropping a trailing `,` or `:`.
pub fn parse_register(token: &str) -> Result<Register, ParseError> {
  let invalid = || ParseError::InvalidRegister(token.to_string());
  let name = token.trim_end_matches([',', ':']);
  let digits = name
    .strip_prefix('r')
    .or_else(|| name.strip_prefix('R'))
    .ok_or_else(invalid)?;
  let index = digits.parse::<usize>().map_err(|_| invalid())?;
  Register::new(index).ok_or_else(invalid)
}

pub fn parse_immediate(token: &str) -> Result<i32, ParseError> {
  token
    .parse::<i32>()
    .map_err(|_| ParseError::InvalidImmediate(token.to_string()))
}

fn parse_operand(token: &str) -> Result<Operand, ParseError> {
  if token.starts_with(['r', 'R']) {
    parse_register(token).map(Operand::Register)
  } else {
    parse_immediate(token).map(Operand::Immediate)
  }
}
