//! Instruction decoding and dispatch
//!
//! `decode_instruction` turns an opcode byte (plus whatever ModR/M,
//! displacement, and immediate bytes follow it) into a `DecodedInstruction`;
//! `DISPATCH_TABLE` maps every opcode to the handler that executes it.
//! Opcodes outside the implemented subset map to `invalid_opcode`.

use crate::cpu::decode::{DecodedInstruction, Operand};
use crate::cpu::execute::*;
use crate::cpu::state::Cpu;
use crate::memory::MemoryBus;

/// Decode the 6-form ADD/OR/ADC/SBB/AND/SUB/XOR pattern shared by opcode
/// bases 0x00/0x08/0x10/0x18/0x20/0x28/0x30. `low3` is `opcode & 0x07`.
fn decode_alu_form(cpu: &mut Cpu, mem: &MemoryBus, low3: u8) -> (Operand, Operand) {
    match low3 {
        0 => {
            let modrm = cpu.decode_modrm(mem);
            (Cpu::modrm_to_operand(&modrm, true), Operand::reg8(modrm.reg))
        }
        1 => {
            let modrm = cpu.decode_modrm(mem);
            (Cpu::modrm_to_operand(&modrm, false), Operand::reg16(modrm.reg))
        }
        2 => {
            let modrm = cpu.decode_modrm(mem);
            (Operand::reg8(modrm.reg), Cpu::modrm_to_operand(&modrm, true))
        }
        3 => {
            let modrm = cpu.decode_modrm(mem);
            (Operand::reg16(modrm.reg), Cpu::modrm_to_operand(&modrm, false))
        }
        4 => {
            let imm = cpu.fetch_u8(mem);
            (Operand::reg8(0), Operand::imm8(imm))
        }
        5 => {
            let imm = cpu.fetch_u16(mem);
            (Operand::reg16(0), Operand::imm16(imm))
        }
        _ => unreachable!("low3 is opcode & 0x07, form 6/7 never routes here"),
    }
}

/// Decode one instruction starting at the opcode already consumed from
/// CS:IP (the caller has advanced IP past it). Returns a `DecodedInstruction`
/// carrying `handler`, ready to execute.
pub fn decode_instruction(
    cpu: &mut Cpu,
    mem: &MemoryBus,
    opcode: u8,
    handler: crate::cpu::decode::instruction::InstructionHandler,
) -> DecodedInstruction {
    let start_ip = cpu.ip;

    let (dst, src) = match opcode {
        0x00..=0x05 | 0x08..=0x0D | 0x10..=0x15 | 0x18..=0x1D | 0x20..=0x25 | 0x28..=0x2D
        | 0x30..=0x35 => decode_alu_form(cpu, mem, opcode & 0x07),

        0x06 => (Operand::none(), Operand::seg(0)), // PUSH ES
        0x07 => (Operand::seg(0), Operand::none()), // POP ES
        0x0E => (Operand::none(), Operand::seg(1)), // PUSH CS

        0x16 => (Operand::none(), Operand::seg(2)), // PUSH SS
        0x17 => (Operand::seg(2), Operand::none()), // POP SS

        0x1E => (Operand::none(), Operand::seg(3)), // PUSH DS
        0x1F => (Operand::seg(3), Operand::none()), // POP DS

        0x26 | 0x2E | 0x36 | 0x3E => (Operand::none(), Operand::none()), // segment override

        0x27 | 0x2F => (Operand::none(), Operand::none()), // DAA / DAS

        0x50..=0x57 => (Operand::none(), Operand::reg16(opcode & 0x07)), // PUSH r16
        0x58..=0x5F => (Operand::reg16(opcode & 0x07), Operand::none()), // POP r16

        0x68 => {
            let imm = cpu.fetch_u16(mem);
            (Operand::none(), Operand::imm16(imm))
        }
        0x6A => {
            let imm = cpu.fetch_i8(mem);
            (Operand::none(), Operand::imm16(imm as i16 as u16))
        }

        0x70..=0x7F => {
            let rel = cpu.fetch_i8(mem);
            (Operand::none(), Operand::rel8(rel))
        }

        0x88 => {
            let modrm = cpu.decode_modrm(mem);
            (Cpu::modrm_to_operand(&modrm, true), Operand::reg8(modrm.reg))
        }
        0x89 => {
            let modrm = cpu.decode_modrm(mem);
            (Cpu::modrm_to_operand(&modrm, false), Operand::reg16(modrm.reg))
        }
        0x8A => {
            let modrm = cpu.decode_modrm(mem);
            (Operand::reg8(modrm.reg), Cpu::modrm_to_operand(&modrm, true))
        }
        0x8B => {
            let modrm = cpu.decode_modrm(mem);
            (Operand::reg16(modrm.reg), Cpu::modrm_to_operand(&modrm, false))
        }

        0xB0..=0xB7 => {
            let reg = opcode & 0x07;
            let imm = cpu.fetch_u8(mem);
            (Operand::reg8(reg), Operand::imm8(imm))
        }
        0xB8..=0xBF => {
            let reg = opcode & 0x07;
            let imm = cpu.fetch_u16(mem);
            (Operand::reg16(reg), Operand::imm16(imm))
        }

        0xCD => {
            let vector = cpu.fetch_u8(mem);
            (Operand::none(), Operand::imm8(vector))
        }

        0xE2 => {
            let rel = cpu.fetch_i8(mem);
            (Operand::none(), Operand::rel8(rel))
        }

        0xFE => {
            let modrm = cpu.decode_modrm(mem);
            (Cpu::modrm_to_operand(&modrm, true).with_reg_field(modrm.reg), Operand::none())
        }
        0xFF => {
            let modrm = cpu.decode_modrm(mem);
            (Cpu::modrm_to_operand(&modrm, false).with_reg_field(modrm.reg), Operand::none())
        }

        _ => (Operand::none(), Operand::none()),
    };

    let length = 1u8.wrapping_add(cpu.ip.wrapping_sub(start_ip) as u8);
    DecodedInstruction::new(opcode, handler)
        .with_dst(dst)
        .with_src(src)
        .with_length(length)
}

/// Dispatch table with 256 entries, one per opcode. Each entry is a
/// function pointer to the handler that implements it; opcodes outside
/// the subset this core implements point at `invalid_opcode`.
pub static DISPATCH_TABLE: [crate::cpu::decode::instruction::InstructionHandler; 256] = [
    // 0x00-0x0F: ADD, segment ES push/pop, OR, segment CS push
    arithmetic::add,  // 0x00: ADD r/m8, r8
    arithmetic::add,  // 0x01: ADD r/m16, r16
    arithmetic::add,  // 0x02: ADD r8, r/m8
    arithmetic::add,  // 0x03: ADD r16, r/m16
    arithmetic::add,  // 0x04: ADD AL, imm8
    arithmetic::add,  // 0x05: ADD AX, imm16
    stack::push_seg,  // 0x06: PUSH ES
    stack::pop_seg,   // 0x07: POP ES
    logic::or,        // 0x08: OR r/m8, r8
    logic::or,        // 0x09: OR r/m16, r16
    logic::or,        // 0x0A: OR r8, r/m8
    logic::or,        // 0x0B: OR r16, r/m16
    logic::or,        // 0x0C: OR AL, imm8
    logic::or,        // 0x0D: OR AX, imm16
    stack::push_seg,  // 0x0E: PUSH CS
    invalid_opcode,   // 0x0F: POP CS does not exist on this core
    // 0x10-0x1F: ADC, segment SS push/pop, SBB, segment DS push/pop
    arithmetic::adc,  // 0x10: ADC r/m8, r8
    arithmetic::adc,  // 0x11: ADC r/m16, r16
    arithmetic::adc,  // 0x12: ADC r8, r/m8
    arithmetic::adc,  // 0x13: ADC r16, r/m16
    arithmetic::adc,  // 0x14: ADC AL, imm8
    arithmetic::adc,  // 0x15: ADC AX, imm16
    stack::push_seg,  // 0x16: PUSH SS
    stack::pop_seg,   // 0x17: POP SS
    arithmetic::sbb,  // 0x18: SBB r/m8, r8
    arithmetic::sbb,  // 0x19: SBB r/m16, r16
    arithmetic::sbb,  // 0x1A: SBB r8, r/m8
    arithmetic::sbb,  // 0x1B: SBB r16, r/m16
    arithmetic::sbb,  // 0x1C: SBB AL, imm8
    arithmetic::sbb,  // 0x1D: SBB AX, imm16
    stack::push_seg,  // 0x1E: PUSH DS
    stack::pop_seg,   // 0x1F: POP DS
    // 0x20-0x2F: AND, ES override, DAA, SUB, CS override, DAS
    logic::and,           // 0x20: AND r/m8, r8
    logic::and,           // 0x21: AND r/m16, r16
    logic::and,           // 0x22: AND r8, r/m8
    logic::and,           // 0x23: AND r16, r/m16
    logic::and,           // 0x24: AND AL, imm8
    logic::and,           // 0x25: AND AX, imm16
    prefix::seg_override, // 0x26: ES segment override prefix
    arithmetic::daa,      // 0x27: DAA
    arithmetic::sub,      // 0x28: SUB r/m8, r8
    arithmetic::sub,      // 0x29: SUB r/m16, r16
    arithmetic::sub,      // 0x2A: SUB r8, r/m8
    arithmetic::sub,      // 0x2B: SUB r16, r/m16
    arithmetic::sub,      // 0x2C: SUB AL, imm8
    arithmetic::sub,      // 0x2D: SUB AX, imm16
    prefix::seg_override, // 0x2E: CS segment override prefix
    arithmetic::das,      // 0x2F: DAS
    // 0x30-0x3F: XOR, SS override, CMP (excluded), DS override
    logic::xor,           // 0x30: XOR r/m8, r8
    logic::xor,           // 0x31: XOR r/m16, r16
    logic::xor,           // 0x32: XOR r8, r/m8
    logic::xor,           // 0x33: XOR r16, r/m16
    logic::xor,           // 0x34: XOR AL, imm8
    logic::xor,           // 0x35: XOR AX, imm16
    prefix::seg_override, // 0x36: SS segment override prefix
    invalid_opcode,       // 0x37: AAA not implemented
    invalid_opcode,       // 0x38: CMP r/m8, r8 not implemented
    invalid_opcode,       // 0x39: CMP r/m16, r16 not implemented
    invalid_opcode,       // 0x3A: CMP r8, r/m8 not implemented
    invalid_opcode,       // 0x3B: CMP r16, r/m16 not implemented
    invalid_opcode,       // 0x3C: CMP AL, imm8 not implemented
    invalid_opcode,       // 0x3D: CMP AX, imm16 not implemented
    prefix::seg_override, // 0x3E: DS segment override prefix
    invalid_opcode,       // 0x3F: AAS not implemented
    // 0x40-0x4F: INC/DEC r16 direct forms, not implemented
    invalid_opcode, // 0x40
    invalid_opcode, // 0x41
    invalid_opcode, // 0x42
    invalid_opcode, // 0x43
    invalid_opcode, // 0x44
    invalid_opcode, // 0x45
    invalid_opcode, // 0x46
    invalid_opcode, // 0x47
    invalid_opcode, // 0x48
    invalid_opcode, // 0x49
    invalid_opcode, // 0x4A
    invalid_opcode, // 0x4B
    invalid_opcode, // 0x4C
    invalid_opcode, // 0x4D
    invalid_opcode, // 0x4E
    invalid_opcode, // 0x4F
    // 0x50-0x5F: PUSH/POP r16
    stack::push_r16, // 0x50: PUSH AX
    stack::push_r16, // 0x51: PUSH CX
    stack::push_r16, // 0x52: PUSH DX
    stack::push_r16, // 0x53: PUSH BX
    stack::push_r16, // 0x54: PUSH SP
    stack::push_r16, // 0x55: PUSH BP
    stack::push_r16, // 0x56: PUSH SI
    stack::push_r16, // 0x57: PUSH DI
    stack::pop_r16,  // 0x58: POP AX
    stack::pop_r16,  // 0x59: POP CX
    stack::pop_r16,  // 0x5A: POP DX
    stack::pop_r16,  // 0x5B: POP BX
    stack::pop_r16,  // 0x5C: POP SP
    stack::pop_r16,  // 0x5D: POP BP
    stack::pop_r16,  // 0x5E: POP SI
    stack::pop_r16,  // 0x5F: POP DI
    // 0x60-0x6F: PUSHA/POPA/BOUND/ARPL (not on this core), PUSH imm, IMUL imm (excluded), INS/OUTS (excluded)
    invalid_opcode, // 0x60
    invalid_opcode, // 0x61
    invalid_opcode, // 0x62
    invalid_opcode, // 0x63
    invalid_opcode, // 0x64
    invalid_opcode, // 0x65
    invalid_opcode, // 0x66
    invalid_opcode, // 0x67
    stack::push_imm, // 0x68: PUSH imm16
    invalid_opcode,  // 0x69: IMUL r16, r/m16, imm16 not implemented
    stack::push_imm, // 0x6A: PUSH imm8 (sign-extended)
    invalid_opcode,  // 0x6B: IMUL r16, r/m16, imm8 not implemented
    invalid_opcode,  // 0x6C: INSB not implemented
    invalid_opcode,  // 0x6D: INSW not implemented
    invalid_opcode,  // 0x6E: OUTSB not implemented
    invalid_opcode,  // 0x6F: OUTSW not implemented
    // 0x70-0x7F: conditional short jumps
    control_flow::jcc, // 0x70: JO
    control_flow::jcc, // 0x71: JNO
    control_flow::jcc, // 0x72: JC/JB/JNAE
    control_flow::jcc, // 0x73: JNC/JAE/JNB
    control_flow::jcc, // 0x74: JZ/JE
    control_flow::jcc, // 0x75: JNZ/JNE
    control_flow::jcc, // 0x76: JBE/JNA
    control_flow::jcc, // 0x77: JA/JNBE
    control_flow::jcc, // 0x78: JS
    control_flow::jcc, // 0x79: JNS
    control_flow::jcc, // 0x7A: JP/JPE
    control_flow::jcc, // 0x7B: JNP/JPO
    control_flow::jcc, // 0x7C: JL/JNGE
    control_flow::jcc, // 0x7D: JGE/JNL
    control_flow::jcc, // 0x7E: JLE/JNG
    control_flow::jcc, // 0x7F: JG/JNLE
    // 0x80-0x8F: immediate arithmetic groups, TEST, XCHG (excluded), MOV r/m<->reg, LEA/segreg MOV (excluded)
    invalid_opcode,  // 0x80: group 1 r/m8, imm8 not implemented
    invalid_opcode,  // 0x81: group 1 r/m16, imm16 not implemented
    invalid_opcode,  // 0x82: group 1 r/m8, imm8 (alias) not implemented
    invalid_opcode,  // 0x83: group 1 r/m16, imm8 not implemented
    invalid_opcode,  // 0x84: TEST r/m8, r8 not implemented
    invalid_opcode,  // 0x85: TEST r/m16, r16 not implemented
    invalid_opcode,  // 0x86: XCHG r/m8, r8 not implemented
    invalid_opcode,  // 0x87: XCHG r/m16, r16 not implemented
    data_transfer::mov, // 0x88: MOV r/m8, r8
    data_transfer::mov, // 0x89: MOV r/m16, r16
    data_transfer::mov, // 0x8A: MOV r8, r/m8
    data_transfer::mov, // 0x8B: MOV r16, r/m16
    invalid_opcode,  // 0x8C: MOV r/m16, Sreg not implemented
    invalid_opcode,  // 0x8D: LEA not implemented
    invalid_opcode,  // 0x8E: MOV Sreg, r/m16 not implemented
    invalid_opcode,  // 0x8F: POP r/m16 group not implemented
    // 0x90-0x9F: NOP/XCHG AX,r16 (excluded), CBW/CWD/CALL far/WAIT/PUSHF/POPF/SAHF/LAHF (excluded)
    invalid_opcode, // 0x90: NOP not in the implemented subset
    invalid_opcode, // 0x91
    invalid_opcode, // 0x92
    invalid_opcode, // 0x93
    invalid_opcode, // 0x94
    invalid_opcode, // 0x95
    invalid_opcode, // 0x96
    invalid_opcode, // 0x97
    invalid_opcode, // 0x98: CBW not implemented
    invalid_opcode, // 0x99: CWD not implemented
    invalid_opcode, // 0x9A: CALL far not implemented
    invalid_opcode, // 0x9B: WAIT not implemented
    invalid_opcode, // 0x9C: PUSHF not implemented
    invalid_opcode, // 0x9D: POPF not implemented
    invalid_opcode, // 0x9E: SAHF not implemented
    invalid_opcode, // 0x9F: LAHF not implemented
    // 0xA0-0xAF: MOV moffs, string ops, TEST acc,imm (all excluded)
    invalid_opcode, // 0xA0
    invalid_opcode, // 0xA1
    invalid_opcode, // 0xA2
    invalid_opcode, // 0xA3
    invalid_opcode, // 0xA4
    invalid_opcode, // 0xA5
    invalid_opcode, // 0xA6
    invalid_opcode, // 0xA7
    invalid_opcode, // 0xA8
    invalid_opcode, // 0xA9
    invalid_opcode, // 0xAA
    invalid_opcode, // 0xAB
    invalid_opcode, // 0xAC
    invalid_opcode, // 0xAD
    invalid_opcode, // 0xAE
    invalid_opcode, // 0xAF
    // 0xB0-0xBF: MOV reg, imm
    data_transfer::mov, // 0xB0: MOV AL, imm8
    data_transfer::mov, // 0xB1: MOV CL, imm8
    data_transfer::mov, // 0xB2: MOV DL, imm8
    data_transfer::mov, // 0xB3: MOV BL, imm8
    data_transfer::mov, // 0xB4: MOV AH, imm8
    data_transfer::mov, // 0xB5: MOV CH, imm8
    data_transfer::mov, // 0xB6: MOV DH, imm8
    data_transfer::mov, // 0xB7: MOV BH, imm8
    data_transfer::mov, // 0xB8: MOV AX, imm16
    data_transfer::mov, // 0xB9: MOV CX, imm16
    data_transfer::mov, // 0xBA: MOV DX, imm16
    data_transfer::mov, // 0xBB: MOV BX, imm16
    data_transfer::mov, // 0xBC: MOV SP, imm16
    data_transfer::mov, // 0xBD: MOV BP, imm16
    data_transfer::mov, // 0xBE: MOV SI, imm16
    data_transfer::mov, // 0xBF: MOV DI, imm16
    // 0xC0-0xCF: shift groups, RET/LES/LDS/MOV r/m,imm/ENTER/LEAVE (excluded), RETF (excluded), INT3 (excluded), INT imm8, INTO/IRET (excluded)
    invalid_opcode,       // 0xC0: shift group r/m8, imm8 not implemented
    invalid_opcode,       // 0xC1: shift group r/m16, imm8 not implemented
    invalid_opcode,       // 0xC2: RET imm16 not implemented
    invalid_opcode,       // 0xC3: RET not implemented
    invalid_opcode,       // 0xC4: LES not implemented
    invalid_opcode,       // 0xC5: LDS not implemented
    invalid_opcode,       // 0xC6: MOV r/m8, imm8 not implemented
    invalid_opcode,       // 0xC7: MOV r/m16, imm16 not implemented
    invalid_opcode,       // 0xC8: ENTER not implemented
    invalid_opcode,       // 0xC9: LEAVE not implemented
    invalid_opcode,       // 0xCA: RETF imm16 not implemented
    invalid_opcode,       // 0xCB: RETF not implemented
    invalid_opcode,       // 0xCC: INT3 not implemented
    interrupt::int_call,  // 0xCD: INT imm8
    invalid_opcode,       // 0xCE: INTO not implemented
    invalid_opcode,       // 0xCF: IRET not implemented
    // 0xD0-0xDF: shift/rotate groups, AAM/AAD, SALC, XLAT, FPU ESC (all excluded)
    invalid_opcode, // 0xD0
    invalid_opcode, // 0xD1
    invalid_opcode, // 0xD2
    invalid_opcode, // 0xD3
    invalid_opcode, // 0xD4
    invalid_opcode, // 0xD5
    invalid_opcode, // 0xD6
    invalid_opcode, // 0xD7
    invalid_opcode, // 0xD8
    invalid_opcode, // 0xD9
    invalid_opcode, // 0xDA
    invalid_opcode, // 0xDB
    invalid_opcode, // 0xDC
    invalid_opcode, // 0xDD
    invalid_opcode, // 0xDE
    invalid_opcode, // 0xDF
    // 0xE0-0xEF: LOOPNE/LOOPE (excluded), LOOP, JCXZ/IN/OUT/CALL/JMP (excluded)
    invalid_opcode,       // 0xE0: LOOPNE not implemented
    invalid_opcode,       // 0xE1: LOOPE not implemented
    control_flow::loop_cx, // 0xE2: LOOP
    invalid_opcode,       // 0xE3: JCXZ not implemented
    invalid_opcode,       // 0xE4: IN AL, imm8 not implemented
    invalid_opcode,       // 0xE5: IN AX, imm8 not implemented
    invalid_opcode,       // 0xE6: OUT imm8, AL not implemented
    invalid_opcode,       // 0xE7: OUT imm8, AX not implemented
    invalid_opcode,       // 0xE8: CALL near not implemented
    invalid_opcode,       // 0xE9: JMP near not implemented
    invalid_opcode,       // 0xEA: JMP far not implemented
    invalid_opcode,       // 0xEB: JMP short not implemented
    invalid_opcode,       // 0xEC: IN AL, DX not implemented
    invalid_opcode,       // 0xED: IN AX, DX not implemented
    invalid_opcode,       // 0xEE: OUT DX, AL not implemented
    invalid_opcode,       // 0xEF: OUT DX, AX not implemented
    // 0xF0-0xFF: LOCK/INT1/REP prefixes/HLT/CMC/unary groups (excluded), CLC..STD (excluded), INC/DEC/PUSH groups
    invalid_opcode, // 0xF0: LOCK prefix not implemented
    invalid_opcode, // 0xF1: undocumented INT1
    invalid_opcode, // 0xF2: REPNE prefix not implemented
    invalid_opcode, // 0xF3: REP prefix not implemented
    invalid_opcode, // 0xF4: HLT not implemented
    invalid_opcode, // 0xF5: CMC not implemented
    invalid_opcode, // 0xF6: unary group r/m8 not implemented
    invalid_opcode, // 0xF7: unary group r/m16 not implemented
    invalid_opcode, // 0xF8: CLC not implemented
    invalid_opcode, // 0xF9: STC not implemented
    invalid_opcode, // 0xFA: CLI not implemented
    invalid_opcode, // 0xFB: STI not implemented
    invalid_opcode, // 0xFC: CLD not implemented
    invalid_opcode, // 0xFD: STD not implemented
    groups::group_fe, // 0xFE: INC/DEC r/m8
    groups::group_ff, // 0xFF: INC/DEC/PUSH r/m16
];
