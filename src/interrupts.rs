//! Software interrupt dispatch (`INT imm8`, opcode 0xCD)
//!
//! Only the DOS services trivial `.COM` programs actually call are
//! implemented: `INT 20h` (terminate) and a three-service subset of
//! `INT 21h` (write char, write `$`-string, write file handle). Grounded
//! on the `AH`-dispatch shape of `int21::handle` in dustbox-rs and the
//! PSP/termination handling in rust-dos's `cpu.rs`. Everything else is a
//! counted error, not a host diagnostic: this core models unknown DOS
//! calls as a state of the emulated machine (`errors`), not a failure of
//! the emulator process.

use crate::cpu::Cpu;
use crate::memory::MemoryBus;

/// Access-denied error code DOS returns in AX when a file handle isn't
/// recognized by `AH=0x40`.
const ERROR_ACCESS_DENIED: u16 = 5;

/// Dispatch `INT imm8`. `vector` is the byte fetched after opcode 0xCD.
pub fn dispatch(cpu: &mut Cpu, mem: &mut MemoryBus, vector: u8) {
    match vector {
        0x20 => terminate(cpu),
        0x21 => dos_service(cpu, mem),
        _ => cpu.errors += 1,
    }
}

/// `INT 20h` - Terminate. Sets `done`, which is sticky for the rest of
/// the run.
fn terminate(cpu: &mut Cpu) {
    cpu.done = true;
}

/// `INT 21h` - DOS service, selected by AH.
fn dos_service(cpu: &mut Cpu, mem: &mut MemoryBus) {
    match cpu.read_reg8(4) {
        0x02 => write_char(cpu, mem),
        0x09 => write_dollar_string(cpu, mem),
        0x40 => write_handle(cpu, mem),
        _ => cpu.errors += 1,
    }
}

/// `AH=0x02` - Write character: emit DL, tabs become spaces on the way
/// out (the console sink itself only filters `\r`). AL <- the emitted
/// byte.
fn write_char(cpu: &mut Cpu, mem: &mut MemoryBus) {
    let dl = cpu.read_reg8(2);
    let out = if dl == b'\t' { b' ' } else { dl };
    mem.console_put(out);
    cpu.write_reg8(0, out);
}

/// `AH=0x09` - Write `$`-terminated string starting at DS:DX. The `$`
/// itself is never emitted. AL <- `'$'`.
fn write_dollar_string(cpu: &mut Cpu, mem: &mut MemoryBus) {
    let ds = cpu.read_seg(3);
    let mut offset = cpu.read_reg16(2);
    loop {
        let byte = cpu.read_mem8(mem, ds, offset);
        if cpu.errors > 0 || byte == b'$' {
            break;
        }
        mem.console_put(byte);
        offset = offset.wrapping_add(1);
    }
    cpu.write_reg8(0, b'$');
}

/// `AH=0x40` - Write file handle. Only BX=1 (stdout) is backed by the
/// console sink; any other handle reports access-denied through the
/// emulated ABI (CF set, AX = error code) rather than through `errors` -
/// the only DOS service specified to signal failure that way.
fn write_handle(cpu: &mut Cpu, mem: &mut MemoryBus) {
    let handle = cpu.read_reg16(3);
    if handle != 1 {
        cpu.set_flag(Cpu::CF, true);
        cpu.write_reg16(0, ERROR_ACCESS_DENIED);
        return;
    }

    let ds = cpu.read_seg(3);
    let start = cpu.read_reg16(2);
    let count = cpu.read_reg16(1);
    for i in 0..count {
        let byte = cpu.read_mem8(mem, ds, start.wrapping_add(i));
        mem.console_put(byte);
    }
    cpu.set_flag(Cpu::CF, false);
    cpu.write_reg16(0, count);
}
