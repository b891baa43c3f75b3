//! Segment-override prefix handlers (0x26, 0x2E, 0x36, 0x3E)

use crate::cpu::decode::DecodedInstruction;
use crate::cpu::state::SegmentOverride;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Sets the active segment override for the instruction that follows.
/// `Cpu::step` re-enters the fetch/decode/dispatch loop after a prefix
/// without spending tick budget on it.
pub fn seg_override(cpu: &mut Cpu, _mem: &mut MemoryBus, instr: &DecodedInstruction) {
    cpu.segment_override = match instr.opcode {
        0x26 => SegmentOverride::Es,
        0x2E => SegmentOverride::Cs,
        0x36 => SegmentOverride::Ss,
        0x3E => SegmentOverride::Ds,
        _ => unreachable!("only reachable from the four segment-prefix opcodes"),
    };
}
