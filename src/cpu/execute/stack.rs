//! Stack instruction handlers (PUSH, POP)

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// PUSH r16 - opcodes 0x50-0x57.
///
/// Register 4 (SP) is special: the value pushed is SP-2, the value SP
/// will hold *after* the push, not the value it held before.
pub fn push_r16(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let reg = instr.src.value as u8;
    let value = if reg == 4 {
        cpu.read_reg16(4).wrapping_sub(2)
    } else {
        cpu.read_operand(mem, &instr.src)
    };
    cpu.push_word(mem, value);
}

/// POP r16 - opcodes 0x58-0x5F.
pub fn pop_r16(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let value = cpu.pop_word(mem);
    cpu.write_operand(mem, &instr.dst, value);
}

/// PUSH segment register - opcodes 0x06/0x0E/0x16/0x1E.
pub fn push_seg(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let value = cpu.read_operand(mem, &instr.src);
    cpu.push_word(mem, value);
}

/// POP segment register - opcodes 0x07/0x17/0x1F (no POP CS on this core).
pub fn pop_seg(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let value = cpu.pop_word(mem);
    cpu.write_operand(mem, &instr.dst, value);
}

/// PUSH imm - opcodes 0x68 (imm16) and 0x6A (imm8, sign-extended to 16 bits
/// at decode time).
pub fn push_imm(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let value = cpu.read_operand(mem, &instr.src);
    cpu.push_word(mem, value);
}

/// PUSH r/m16 - group 0xFF, reg field 6.
pub fn push_rm16(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let value = cpu.read_operand(mem, &instr.dst);
    cpu.push_word(mem, value);
}
