//! Instruction decoding module
//!
//! This module handles decoding of the implemented opcode subset:
//! - ModR/M byte parsing
//! - Operand decoding
//! - The fully decoded instruction handed to the dispatcher

pub mod instruction;
pub mod modrm;
pub mod operands;

pub use instruction::DecodedInstruction;
pub use modrm::{AddressingMode, ModRM};
pub use operands::{Operand, OperandType};
