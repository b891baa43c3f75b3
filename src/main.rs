//! com86 - command-line front end for the `.COM` emulator core
//!
//! Usage: `com86 [image.com [args...]]`. With no image argument, loads
//! `hello.com` from the current directory. Extra arguments are passed
//! to the emulated program via the PSP command-line area.

use std::path::Path;

use com86::console::StdoutSink;
use com86::cpu::Cpu;
use com86::loader;
use com86::memory::MemoryBus;

const DEFAULT_IMAGE: &str = "hello.com";

/// Instructions executed per `tick` call before re-checking termination.
/// This binary just keeps calling `tick` until it reports done or error.
const QUANTUM: u32 = 1_000_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut image_path = DEFAULT_IMAGE.to_string();
    let mut program_args: Vec<String> = Vec::new();

    if args.len() > 1 {
        if args[1].starts_with('-') {
            eprintln!("Usage: {} [image.com [args...]]", args[0]);
            std::process::exit(-1);
        }
        image_path = args[1].clone();
        program_args = args[2..].to_vec();
    }

    let mut cpu = Cpu::new();
    let mut mem = MemoryBus::new(Box::new(StdoutSink));

    if let Err(e) = loader::load_com(&mut cpu, &mut mem, Path::new(&image_path), &program_args) {
        eprintln!("Failed to load '{}': {}", image_path, e);
        std::process::exit(-1);
    }

    loop {
        match cpu.tick(&mut mem, QUANTUM) {
            1 => std::process::exit(0),
            -1 => {
                eprintln!(
                    "Emulator halted after {} recorded error(s) at CS:IP={:04X}:{:04X}",
                    cpu.errors, cpu.segments[1], cpu.ip
                );
                std::process::exit(-1);
            }
            _ => continue, // quantum exhausted, tick again
        }
    }
}
