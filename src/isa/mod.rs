// ISA: register machine instructions and their textual syntax

pub mod instruction;
pub mod parser;

pub use instruction::{AluOp, Instruction, Opcode, Operand, Register, NUM_REGISTERS, SIDE_REGISTER};
pub use parser::{is_terminator, parse_instruction};
