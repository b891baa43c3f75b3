//! `.COM` image loader: synthesizes the PSP and sets up initial CPU state
//!
//! Grounded on `load_com` in rust-dos's `cpu.rs` (segment/IP/SP setup,
//! loading the image at `CS:0x100`), with the PSP command-line area
//! filled in per spec (rust-dos leaves that as a `TODO`).

use std::io;
use std::path::Path;

use crate::cpu::Cpu;
use crate::memory::{MemoryBus, BASE_OFFSET, PSP_PARAGRAPH};

/// Highest number of bytes the PSP command-line area can hold, not
/// counting the trailing `\r`.
const MAX_COMMAND_LINE: usize = 126;

/// Load a `.COM` image from `path` into `mem` and set up `cpu` per the
/// `.COM` contract: DS=ES=SS=CS = the PSP paragraph, IP=0x100, SP=0xFFFE.
/// `args` (if any) populate the PSP command-line area at offset 0x80.
pub fn load_com(cpu: &mut Cpu, mem: &mut MemoryBus, path: &Path, args: &[String]) -> io::Result<()> {
    let bytes = std::fs::read(path)?;

    cpu.reset();

    // Oversized images are truncated without error; the emulator is
    // faithful to the 64 KiB segment model. The image lands 0x100 bytes
    // past the start of the PSP paragraph (PSP:0x0100), not at the PSP's
    // own base — the first 256 bytes of the paragraph are the PSP itself.
    mem.load(&bytes, BASE_OFFSET + 0x100);

    cpu.write_seg(0, PSP_PARAGRAPH); // ES
    cpu.write_seg(1, PSP_PARAGRAPH); // CS
    cpu.write_seg(2, PSP_PARAGRAPH); // SS
    cpu.write_seg(3, PSP_PARAGRAPH); // DS
    cpu.ip = 0x0100;
    cpu.write_reg16(4, 0xFFFE); // SP

    write_command_line(mem, args);

    Ok(())
}

/// Populate the PSP command-line area at offset 0x80: a length byte
/// followed by the joined, space-separated argument text, terminated by
/// `\r`. Total text is clamped to `MAX_COMMAND_LINE` bytes; any excess
/// is silently dropped.
fn write_command_line(mem: &mut MemoryBus, args: &[String]) {
    let joined = args.join(" ");
    let mut bytes = joined.into_bytes();
    bytes.truncate(MAX_COMMAND_LINE);

    let len = bytes.len() as u8;
    mem.load(&[len], BASE_OFFSET + 0x80);
    mem.load(&bytes, BASE_OFFSET + 0x81);
    mem.load(&[b'\r'], BASE_OFFSET + 0x81 + bytes.len());
}
