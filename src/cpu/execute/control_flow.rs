//! Control-flow instruction handlers (Jcc, LOOP)

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Generic conditional short jump, covering all 16 forms at opcodes
/// 0x70-0x7F. The condition is selected from the low nibble of the
/// opcode rather than one handler per mnemonic.
///
/// JNO tests OF=0 (not PF), and JA tests CF=0 *and* ZF=0 (not a bitwise
/// AND of the two flag words).
pub fn jcc(cpu: &mut Cpu, _mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let cf = cpu.get_flag(Cpu::CF);
    let zf = cpu.get_flag(Cpu::ZF);
    let sf = cpu.get_flag(Cpu::SF);
    let of = cpu.get_flag(Cpu::OF);
    let pf = cpu.get_flag(Cpu::PF);

    let taken = match instr.opcode & 0x0F {
        0x0 => of,                  // JO
        0x1 => !of,                 // JNO
        0x2 => cf,                  // JB/JC/JNAE
        0x3 => !cf,                 // JNB/JNC/JAE
        0x4 => zf,                  // JE/JZ
        0x5 => !zf,                 // JNE/JNZ
        0x6 => cf || zf,            // JBE/JNA
        0x7 => !cf && !zf,          // JA/JNBE
        0x8 => sf,                  // JS
        0x9 => !sf,                 // JNS
        0xA => pf,                  // JP/JPE
        0xB => !pf,                 // JNP/JPO
        0xC => sf != of,            // JL/JNGE
        0xD => sf == of,            // JGE/JNL
        0xE => zf || (sf != of),    // JLE/JNG
        0xF => !zf && (sf == of),   // JG/JNLE
        _ => unreachable!("4-bit condition field"),
    };

    if taken {
        let rel = instr.src.value as i16;
        cpu.ip = cpu.ip.wrapping_add(rel as u16);
    }
}

/// LOOP - opcode 0xE2. CX <- CX - 1; jump if CX != 0.
pub fn loop_cx(cpu: &mut Cpu, _mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let cx = cpu.read_reg16(1).wrapping_sub(1);
    cpu.write_reg16(1, cx);
    if cx != 0 {
        let rel = instr.src.value as i16;
        cpu.ip = cpu.ip.wrapping_add(rel as u16);
    }
}
