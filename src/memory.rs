//! Flat memory image for a single real-mode address space
//!
//! The bus is a byte array of `CAP` bytes addressed by 20-bit-ish linear
//! addresses. Only the first `TOP` bytes are valid; the remainder of the
//! array (`BASE_OFFSET` bytes) exists purely so that `CAP - BASE_OFFSET`
//! lands on the paragraph the `.COM` loader starts at (see `Cpu::reset`
//! and `crate::loader`). Out-of-range accesses are reported to the
//! caller rather than silently clamped, since the CPU core is the one
//! that owns the `errors` counter (see `cpu::state::Cpu`).

use crate::console::ConsoleSink;

/// Paragraph at which the synthesized PSP begins (see `crate::loader`).
pub const PSP_PARAGRAPH: u16 = 0x50;

/// Byte offset within the memory image of paragraph `PSP_PARAGRAPH`.
pub const BASE_OFFSET: usize = (PSP_PARAGRAPH as usize) << 4;

/// Default memory image size: the full real-mode 1 MiB address space.
pub const DEFAULT_CAP: usize = 0x10_0000;

/// Memory bus backing a single emulated machine.
pub struct MemoryBus {
    data: Vec<u8>,
    top: u32,
    console: Box<dyn ConsoleSink>,
}

impl MemoryBus {
    /// Create a memory image of `cap` bytes (must be at least `BASE_OFFSET`).
    pub fn with_capacity(cap: usize, console: Box<dyn ConsoleSink>) -> Self {
        assert!(cap >= BASE_OFFSET, "memory capacity too small for PSP area");
        Self {
            data: vec![0; cap],
            top: (cap - BASE_OFFSET) as u32,
            console,
        }
    }

    /// Create a memory image of the default (1 MiB) capacity.
    pub fn new(console: Box<dyn ConsoleSink>) -> Self {
        Self::with_capacity(DEFAULT_CAP, console)
    }

    /// Highest linear address (exclusive) accepted by this bus.
    #[inline(always)]
    pub fn top(&self) -> u32 {
        self.top
    }

    #[inline(always)]
    fn in_range(&self, addr: u32) -> bool {
        addr < self.top
    }

    /// Try to read a byte at `addr`. `None` means out of range.
    #[inline(always)]
    pub fn try_read_u8(&self, addr: u32) -> Option<u8> {
        if self.in_range(addr) {
            Some(self.data[addr as usize])
        } else {
            None
        }
    }

    /// Try to write a byte at `addr`. `false` means out of range (no-op).
    #[inline(always)]
    pub fn try_write_u8(&mut self, addr: u32, value: u8) -> bool {
        if self.in_range(addr) {
            self.data[addr as usize] = value;
            true
        } else {
            false
        }
    }

    /// Try to read a little-endian word at `addr`. Both bytes must be
    /// in range for this to succeed.
    #[inline(always)]
    pub fn try_read_u16(&self, addr: u32) -> Option<u16> {
        let lo = self.try_read_u8(addr)?;
        let hi = self.try_read_u8(addr.wrapping_add(1))?;
        Some((lo as u16) | ((hi as u16) << 8))
    }

    /// Try to write a little-endian word at `addr`. Both bytes must be
    /// in range for the write to take effect; a partial write never
    /// happens.
    #[inline(always)]
    pub fn try_write_u16(&mut self, addr: u32, value: u16) -> bool {
        if self.in_range(addr) && self.in_range(addr.wrapping_add(1)) {
            self.data[addr as usize] = value as u8;
            self.data[addr.wrapping_add(1) as usize] = (value >> 8) as u8;
            true
        } else {
            false
        }
    }

    /// Copy `data` into the image starting at byte offset `offset`,
    /// truncating at the end of the image. Returns the number of bytes
    /// actually copied.
    pub fn load(&mut self, bytes: &[u8], offset: usize) -> usize {
        if offset >= self.data.len() {
            return 0;
        }
        let room = self.data.len() - offset;
        let n = bytes.len().min(room);
        self.data[offset..offset + n].copy_from_slice(&bytes[..n]);
        n
    }

    /// Emit a byte to the attached console sink.
    #[inline(always)]
    pub fn console_put(&mut self, byte: u8) {
        self.console.put(byte);
    }

    /// Downcast handle onto the attached console sink, for tests that
    /// need to inspect a `RecordingSink`'s captured bytes.
    pub fn console_as_any(&self) -> &dyn std::any::Any {
        self.console.as_any()
    }
}
