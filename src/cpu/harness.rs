//! CPU test harness
//!
//! A minimal CPU + memory pairing for unit tests: load a byte sequence
//! at a chosen segment and single-step it, without going through the
//! `.COM` loader. Adapted from the teacher's harness of the same name.

use crate::console::RecordingSink;
use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Test harness for CPU instruction testing: CPU state plus a memory
/// image backed by a recording console sink.
pub struct CpuHarness {
    /// CPU state
    pub cpu: Cpu,
    /// Memory bus
    pub mem: MemoryBus,
}

impl CpuHarness {
    /// Create a new harness with a fresh CPU and memory image. Console
    /// output is captured by a `RecordingSink` (see `console_bytes`).
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            mem: MemoryBus::new(Box::new(RecordingSink::default())),
        }
    }

    /// Load `code` at `segment:0` and point CS:IP at it.
    pub fn load_program(&mut self, code: &[u8], segment: u16) {
        let base = (segment as u32) * 16;
        for (i, &byte) in code.iter().enumerate() {
            self.mem.try_write_u8(base + i as u32, byte);
        }
        self.cpu.segments[1] = segment; // CS
        self.cpu.ip = 0;
    }

    /// Execute one instruction.
    pub fn step(&mut self) {
        self.cpu.step(&mut self.mem);
    }

    /// Execute `n` instructions.
    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Reset CPU to its power-on state. The memory image is untouched.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Bytes captured by the harness's `RecordingSink` so far.
    pub fn console_bytes(&self) -> &[u8] {
        self.mem
            .console_as_any()
            .downcast_ref::<RecordingSink>()
            .map(|s| s.bytes.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for CpuHarness {
    fn default() -> Self {
        Self::new()
    }
}
