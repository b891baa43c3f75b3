//! com86 - a minimal 8086/8088-class `.COM` program emulator
//!
//! The core is an interpreter over a flat, byte-addressable memory
//! image: a fetch-decode-execute dispatcher (`cpu`) covering the opcode
//! subset trivial DOS `.COM` programs use, a small software-interrupt
//! dispatcher (`interrupts`) for `INT 20h`/`INT 21h`, and a loader
//! (`loader`) that sets up the Program Segment Prefix and initial
//! register state per the `.COM` contract.

pub mod console;
pub mod cpu;
pub mod interrupts;
pub mod loader;
pub mod memory;
