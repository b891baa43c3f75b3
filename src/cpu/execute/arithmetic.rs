//! Arithmetic instruction handlers (ADD, ADC, SUB, SBB, DAA, DAS, INC, DEC)

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// ADD - dst <- dst + src. Covers 0x00-0x05.
pub fn add(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let is_byte = instr.dst.is_byte();
    let op1 = cpu.read_operand(mem, &instr.dst);
    let op2 = cpu.read_operand(mem, &instr.src);
    let result = cpu.apply_add(op1, op2, is_byte);
    cpu.write_operand(mem, &instr.dst, result);
}

/// ADC - dst <- dst + src + CF. Covers 0x10-0x15.
pub fn adc(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let is_byte = instr.dst.is_byte();
    let op1 = cpu.read_operand(mem, &instr.dst);
    let op2 = cpu.read_operand(mem, &instr.src);
    let result = cpu.apply_adc(op1, op2, is_byte);
    cpu.write_operand(mem, &instr.dst, result);
}

/// SUB - dst <- dst - src. Covers 0x28-0x2D.
pub fn sub(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let is_byte = instr.dst.is_byte();
    let op1 = cpu.read_operand(mem, &instr.dst);
    let op2 = cpu.read_operand(mem, &instr.src);
    let result = cpu.apply_sub(op1, op2, is_byte);
    cpu.write_operand(mem, &instr.dst, result);
}

/// SBB - dst <- dst - src - CF. Covers 0x18-0x1D.
pub fn sbb(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let is_byte = instr.dst.is_byte();
    let op1 = cpu.read_operand(mem, &instr.dst);
    let op2 = cpu.read_operand(mem, &instr.src);
    let result = cpu.apply_sbb(op1, op2, is_byte);
    cpu.write_operand(mem, &instr.dst, result);
}

/// DAA - decimal-adjust AL after addition. Opcode 0x27.
pub fn daa(cpu: &mut Cpu, _mem: &mut MemoryBus, _instr: &DecodedInstruction) {
    let old_al = cpu.read_reg8(0);
    let old_cf = cpu.get_flag(Cpu::CF);
    let mut al = old_al;
    let mut cf = false;
    let mut af = false;

    if (old_al & 0x0F) > 9 || cpu.get_flag(Cpu::AF) {
        cf = old_cf || al > 0xF9;
        al = al.wrapping_add(6);
        af = true;
    }
    if old_al > 0x99 || old_cf {
        al = al.wrapping_add(0x60);
        cf = true;
    }

    cpu.write_reg8(0, al);
    cpu.set_flag(Cpu::CF, cf);
    cpu.set_flag(Cpu::AF, af);
    cpu.record_result(al as u16, true);
}

/// DAS - decimal-adjust AL after subtraction. Opcode 0x2F.
pub fn das(cpu: &mut Cpu, _mem: &mut MemoryBus, _instr: &DecodedInstruction) {
    let old_al = cpu.read_reg8(0);
    let old_cf = cpu.get_flag(Cpu::CF);
    let mut al = old_al;
    let mut cf = false;
    let mut af = false;

    if (old_al & 0x0F) > 9 || cpu.get_flag(Cpu::AF) {
        cf = old_cf || al < 6;
        al = al.wrapping_sub(6);
        af = true;
    }
    if old_al > 0x99 || old_cf {
        al = al.wrapping_sub(0x60);
        cf = true;
    }

    cpu.write_reg8(0, al);
    cpu.set_flag(Cpu::CF, cf);
    cpu.set_flag(Cpu::AF, af);
    cpu.record_result(al as u16, true);
}

/// INC r/m - used by group 0xFE (reg=0) and group 0xFF (reg=0). Does not
/// touch CF.
pub fn inc_rm(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let is_byte = instr.dst.is_byte();
    let value = cpu.read_operand(mem, &instr.dst);
    let result = cpu.apply_inc(value, is_byte);
    cpu.write_operand(mem, &instr.dst, result);
}

/// DEC r/m - used by group 0xFE (reg=1) and group 0xFF (reg=1). Does not
/// touch CF.
pub fn dec_rm(cpu: &mut Cpu, mem: &mut MemoryBus, instr: &DecodedInstruction) {
    let is_byte = instr.dst.is_byte();
    let value = cpu.read_operand(mem, &instr.dst);
    let result = cpu.apply_dec(value, is_byte);
    cpu.write_operand(mem, &instr.dst, result);
}
