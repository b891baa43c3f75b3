//! 8086/8088-class CPU core
//!
//! A single fetch-decode-execute dispatcher over the opcode subset
//! trivial DOS `.COM` programs exercise: register/flag state (`state`),
//! the ModR/M and operand decoder plus the decoded-instruction shape
//! (`decode`), the per-opcode handlers (`execute`) and the dispatch
//! table that wires them together (`dispatch`).

pub mod decode;
pub mod dispatch;
pub mod execute;
pub mod harness;
pub mod state;

pub use harness::CpuHarness;
pub use state::Cpu;
