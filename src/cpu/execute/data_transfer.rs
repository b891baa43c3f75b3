//! Data transfer instruction handlers (MOV)

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// MOV - dst <- src. Covers the register/memory form (0x88-0x8B) and the
/// register/immediate form (0xB0-0xBF); decode already produces the right
/// dst/src pair for each.
pub fn mov(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let value = cpu.read_operand(mem, &instr.src);
    cpu.write_operand(mem, &instr.dst, value);
}
