//! INT imm8 dispatch (opcode 0xCD)

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::interrupts;
use crate::memory::MemoryBus;

/// INT imm8 - opcode 0xCD. Hands off to the DOS service dispatcher; the
/// vector itself carries no CPU-level semantics beyond that (no IVT, no
/// real-mode interrupt frame, per the non-goals of this core).
pub fn int_call(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let vector = instr.src.value as u8;
    interrupts::dispatch(cpu, mem, vector);
}
