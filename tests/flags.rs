//! Flags-word tests: eager bits, lazily-derived ZF/SF/PF, and the
//! decimal-adjust instructions that rely on both.

use com86::cpu::Cpu;
use com86::cpu::CpuHarness;

#[test]
fn test_reserved_bit_always_set() {
    let harness = CpuHarness::new();
    // Bit 1 of the flags word is architecturally hardwired to 1.
    assert_eq!(harness.cpu.get_flags() & 0b10, 0b10);
}

#[test]
fn test_eager_flags_persist_across_unrelated_instructions() {
    let mut harness = CpuHarness::new();
    harness.cpu.set_flag(Cpu::DF, true);
    harness.cpu.set_flag(Cpu::IF, true);

    // A MOV does not touch any flag.
    harness.load_program(&[0xB0, 0x2A], 0); // MOV AL, 0x2A
    harness.step();

    assert!(harness.cpu.get_flag(Cpu::DF));
    assert!(harness.cpu.get_flag(Cpu::IF));
}

#[test]
fn test_zf_sf_pf_derive_from_last_result() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x00; OR AL, 0x00 -> result 0: ZF set, SF clear, PF set (0 bits, even).
    harness.load_program(&[0xB0, 0x00, 0x0C, 0x00], 0);
    harness.step();
    harness.step();

    assert!(harness.cpu.get_flag(Cpu::ZF));
    assert!(!harness.cpu.get_flag(Cpu::SF));
    assert!(harness.cpu.get_flag(Cpu::PF));
}

#[test]
fn test_sf_follows_high_bit_of_result_width() {
    let mut harness = CpuHarness::new();
    // MOV AX, 0x8000; OR AX, 0 -> word result with bit 15 set.
    harness.load_program(&[0xB8, 0x00, 0x80, 0x0D, 0x00, 0x00], 0);
    harness.step();
    harness.step();

    assert!(harness.cpu.get_flag(Cpu::SF));
    assert!(!harness.cpu.get_flag(Cpu::ZF));
}

#[test]
fn test_segment_override_resets_after_each_instruction() {
    let mut harness = CpuHarness::new();
    // ES: prefix (0x26) then MOV AL, 0x01; MOV AL, 0x02 with no prefix.
    harness.load_program(&[0x26, 0xB0, 0x01, 0xB0, 0x02], 0);
    harness.step(); // consumes the prefix and MOV AL,1 in one `step`
    assert_eq!(harness.cpu.segment_override, com86::cpu::state::SegmentOverride::None);

    harness.step(); // MOV AL, 2
    assert_eq!(harness.cpu.regs[0] & 0xFF, 0x02);
    assert_eq!(harness.cpu.segment_override, com86::cpu::state::SegmentOverride::None);
}

#[test]
fn test_repeated_segment_override_prefix_still_applies_to_the_instruction() {
    let mut harness = CpuHarness::new();
    // ES: ES: MOV AL, [BX] - two identical back-to-back prefixes must not
    // cause the second one to be mistaken for "no new prefix" and drop the
    // override before the instruction it's supposed to apply to.
    harness.load_program(&[0x26, 0x26, 0x8A, 0x07], 0);
    harness.cpu.write_seg(0, 0x2000); // ES
    harness.mem.try_write_u8(com86::cpu::Cpu::compute_address(0x2000, 0), 0x99);

    harness.step();

    assert_eq!(harness.cpu.read_reg8(0), 0x99); // AL read through ES, not DS
    assert_eq!(harness.cpu.ip, 4);
    assert_eq!(harness.cpu.segment_override, com86::cpu::state::SegmentOverride::None);
}

#[test]
fn test_daa_clears_af_when_no_adjustment_needed() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x11; ADD AL, 0x11 -> 0x22, valid BCD already; DAA is a no-op.
    harness.load_program(&[0xB0, 0x11, 0x04, 0x11, 0x27], 0);
    harness.step();
    harness.step();
    harness.step(); // DAA

    assert_eq!(harness.cpu.read_reg8(0), 0x22);
    assert!(!harness.cpu.get_flag(Cpu::CF));
}

#[test]
fn test_das_sets_carry_on_high_nibble_adjustment() {
    let mut harness = CpuHarness::new();
    // MOV AL, 0x00; SUB AL, 0x01 -> 0xFF, needs both nibble adjustments and sets CF.
    harness.load_program(&[0xB0, 0x00, 0x2C, 0x01, 0x2F], 0);
    harness.step();
    harness.step();
    harness.step(); // DAS

    assert!(harness.cpu.get_flag(Cpu::CF));
}
