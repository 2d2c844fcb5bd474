// Encoder: Instruction -> 32-bit word
//
// The word is descriptive only. Execution always works from the parsed
// Instruction and never decodes an EncodedWord.
//
//   31..28  opcode
//   27..25  destination register
//   24      mode (0 = register operand, 1 = immediate operand)
//   23..8   immediate, low 16 bits     (mode = 1)
//   23..21  source register            (mode = 0)

use std::fmt;

use crate::isa::{Instruction, Operand};

const OPCODE_SHIFT: u32 = 28;
const DST_SHIFT: u32 = 25;
const MODE_SHIFT: u32 = 24;
const IMM_SHIFT: u32 = 8;
const SRC_SHIFT: u32 = 21;

#[inline]
fn bits(v: u32, hi: u32, lo: u32) -> u32 {
  (v >> lo) & ((1u32 << (hi - lo + 1)) - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedWord(u32);

impl EncodedWord {
  pub fn raw(self) -> u32 {
    self.0
  }

  pub fn opcode_bits(self) -> u32 {
    bits(self.0, 31, 28)
  }

  pub fn destination_bits(self) -> u32 {
    bits(self.0, 27, 25)
  }

  pub fn mode_bit(self) -> u32 {
    bits(self.0, 24, 24)
  }

  pub fn immediate_bits(self) -> u32 {
    bits(self.0, 23, 8)
  }

  pub fn source_bits(self) -> u32 {
    bits(self.0, 23, 21)
  }
}

/// 32-character, zero-padded binary form.
impl fmt::Display for EncodedWord {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:032b}", self.0)
  }
}

pub fn encode(inst: &Instruction) -> EncodedWord {
  let opcode = (inst.opcode().code() & 0xF) << OPCODE_SHIFT;
  let word = match inst {
    Instruction::End => opcode,
    Instruction::Alu { dst, operand, .. } => {
      let dst = (dst.index() as u32 & 0x7) << DST_SHIFT;
      let operand = match operand {
        Some(Operand::Immediate(imm)) => (1 << MODE_SHIFT) | ((*imm as u32 & 0xFFFF) << IMM_SHIFT),
        Some(Operand::Register(src)) => (src.index() as u32 & 0x7) << SRC_SHIFT,
        None => 0,
      };
      opcode | dst | operand
    }
  };
  EncodedWord(word)
}

/// Two's-complement bits of a register value, zero-padded to 32 characters.
pub fn to_binary32(value: i32) -> String {
  format!("{:032b}", value as u32)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::isa::parse_instruction;

  fn enc(line: &str) -> EncodedWord {
    encode(&parse_instruction(line).unwrap())
  }

  #[test]
  fn end_is_all_zero() {
    let word = enc("end");
    assert_eq!(word.raw(), 0);
    assert_eq!(word.to_string(), "0".repeat(32));
  }

  #[test]
  fn immediate_layout() {
    // mov r0, 10
    let word = enc("mov r0, 10");
    assert_eq!(word.raw(), 0x1100_0A00);
    assert_eq!(word.to_string(), "00010001000000000000101000000000");
    assert_eq!(word.opcode_bits(), 1);
    assert_eq!(word.destination_bits(), 0);
    assert_eq!(word.mode_bit(), 1);
    assert_eq!(word.immediate_bits(), 10);
  }

  #[test]
  fn register_layout() {
    let word = enc("add r0, r1");
    assert_eq!(word.raw(), 0x2020_0000);
    assert_eq!(word.mode_bit(), 0);
    assert_eq!(word.source_bits(), 1);

    let word = enc("div r7, r6");
    assert_eq!(word.opcode_bits(), 5);
    assert_eq!(word.destination_bits(), 7);
    assert_eq!(word.source_bits(), 6);
  }

  #[test]
  fn negative_immediate_keeps_low_16_bits() {
    let word = enc("sub r2, -1");
    assert_eq!(word.immediate_bits(), 0xFFFF);
    assert_eq!(word.raw(), 0x3000_0000 | (2 << 25) | (1 << 24) | (0xFFFF << 8));

    let word = enc("mov r1, 65537");
    assert_eq!(word.immediate_bits(), 1);
  }

  #[test]
  fn operand_free_instruction_sets_no_mode() {
    let word = enc("mul r3");
    assert_eq!(word.raw(), (4 << 28) | (3 << 25));
  }

  #[test]
  fn encoding_is_deterministic() {
    for line in ["mov r0, 10", "add r0, r1", "mul r2, 4", "div r1, r3", "end"] {
      assert_eq!(enc(line), enc(line));
    }
  }

  #[test]
  fn binary32_formatting() {
    assert_eq!(to_binary32(5), format!("{}101", "0".repeat(29)));
    assert_eq!(to_binary32(-1), "1".repeat(32));
    assert_eq!(to_binary32(i32::MIN), format!("1{}", "0".repeat(31)));
  }
}
