//! ModR/M opcode-extension groups (0xFE, 0xFF)
//!
//! The ModR/M reg field selects the actual operation; `decode_instruction`
//! stashes it in the high byte of the dst operand's value for these two
//! opcodes, and the handlers below read it back out.

use super::{arithmetic, handlers::invalid_opcode, stack};
use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Group 0xFE: INC/DEC r/m8. Only reg fields 0 and 1 are valid.
pub fn group_fe(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let reg = (instr.dst.value >> 8) as u8;
    match reg {
        0 => arithmetic::inc_rm(cpu, mem, instr),
        1 => arithmetic::dec_rm(cpu, mem, instr),
        _ => invalid_opcode(cpu, mem, instr),
    }
}

/// Group 0xFF, restricted to the forms this core implements: INC/DEC/PUSH
/// r/m16 (reg 0/1/6). CALL/JMP r/m16 (reg 2-5) and the reserved reg 7 are
/// out of scope and fall through to `invalid_opcode`.
pub fn group_ff(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let reg = (instr.dst.value >> 8) as u8;
    match reg {
        0 => arithmetic::inc_rm(cpu, mem, instr),
        1 => arithmetic::dec_rm(cpu, mem, instr),
        6 => stack::push_rm16(cpu, mem, instr),
        _ => invalid_opcode(cpu, mem, instr),
    }
}
