//! Decoded instruction representation

use super::operands::Operand;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Instruction handler function signature: takes CPU state, memory bus,
/// and the decoded instruction, and performs the instruction's effect.
pub type InstructionHandler = fn(&mut Cpu, &mut MemoryBus, &DecodedInstruction);

/// A fully decoded instruction, ready for dispatch to its handler.
#[derive(Clone)]
pub struct DecodedInstruction {
    /// The opcode byte
    pub opcode: u8,
    /// First operand (destination for most instructions)
    pub dst: Operand,
    /// Second operand (source for most instructions)
    pub src: Operand,
    /// Total length of the instruction in bytes, including opcode,
    /// ModR/M, displacement, and immediate
    pub length: u8,
    /// Function pointer to the instruction handler
    pub handler: InstructionHandler,
}

impl DecodedInstruction {
    /// Create a new decoded instruction with no operands and length 1.
    pub fn new(opcode: u8, handler: InstructionHandler) -> Self {
        Self {
            opcode,
            dst: Operand::none(),
            src: Operand::none(),
            length: 1,
            handler,
        }
    }

    /// Set the destination operand
    pub fn with_dst(mut self, dst: Operand) -> Self {
        self.dst = dst;
        self
    }

    /// Set the source operand
    pub fn with_src(mut self, src: Operand) -> Self {
        self.src = src;
        self
    }

    /// Set the instruction length
    pub fn with_length(mut self, length: u8) -> Self {
        self.length = length;
        self
    }

    /// Execute the instruction
    #[inline(always)]
    pub fn execute(&self, cpu: &mut Cpu, mem: &mut MemoryBus) {
        (self.handler)(cpu, mem, self);
    }
}

// Manual Debug implementation since function pointers don't implement Debug
impl std::fmt::Debug for DecodedInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedInstruction")
            .field("opcode", &format_args!("{:#04x}", self.opcode))
            .field("dst", &self.dst)
            .field("src", &self.src)
            .field("length", &self.length)
            .field("handler", &"<fn>")
            .finish()
    }
}
