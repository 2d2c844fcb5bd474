// Register file: r0..r7, signed 32-bit

use serde::Serialize;

use crate::isa::{Register, NUM_REGISTERS};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegisterFile {
  values: [i32; NUM_REGISTERS],
}

impl RegisterFile {
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn read(&self, reg: Register) -> i32 {
    self.values[reg.index()]
  }

  #[inline]
  pub fn write(&mut self, reg: Register, value: i32) {
    self.values[reg.index()] = value;
  }

  pub fn values(&self) -> &[i32; NUM_REGISTERS] {
    &self.values
  }

  pub fn iter(&self) -> impl Iterator<Item = (Register, i32)> + '_ {
    self
      .values
      .iter()
      .enumerate()
      .filter_map(|(i, v)| Register::new(i).map(|reg| (reg, *v)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_zeroed() {
    let regs = RegisterFile::new();
    assert!(regs.values().iter().all(|v| *v == 0));
    assert_eq!(regs.iter().count(), NUM_REGISTERS);
  }

  #[test]
  fn read_after_write() {
    let mut regs = RegisterFile::new();
    let r3 = Register::new(3).unwrap();
    regs.write(r3, -17);
    assert_eq!(regs.read(r3), -17);
    assert_eq!(regs.values()[3], -17);
  }
}
