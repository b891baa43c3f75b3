//! Fallback handler for opcodes outside the implemented subset

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Handler for unimplemented or unknown opcodes. Records the failure on
/// the error counter instead of panicking, so a bad program halts the
/// run loop cleanly rather than crashing the host process.
pub fn invalid_opcode(cpu: &mut Cpu, _mem: &mut MemoryBus, _instr: &DecodedInstruction) {
    cpu.errors += 1;
}
