//! Console sink: the host-side byte output the core writes to
//!
//! This mirrors the teacher's `IoDevice` trait (`src/io.rs`): a small
//! trait implemented once for the real backend and once, in tests, for
//! a recording fake. The host terminal itself is explicitly out of
//! scope for the core (see spec §1); this is the narrow seam the core
//! talks to it through.

use std::any::Any;

/// A single-method byte sink. `put` suppresses carriage returns (`\r`)
/// so that CR/LF text from DOS programs appears as plain LF.
pub trait ConsoleSink: Any {
    /// Write one raw byte, as emitted by `write_char`/`write_string`.
    fn write_byte(&mut self, byte: u8);

    /// Filter and forward a byte. `\r` is dropped; everything else is
    /// passed to `write_byte`. Callers should use `put`, not
    /// `write_byte` directly.
    fn put(&mut self, byte: u8) {
        if byte != b'\r' {
            self.write_byte(byte);
        }
    }

    /// Downcast handle so tests can recover a concrete sink from the
    /// `MemoryBus`'s `Box<dyn ConsoleSink>`.
    fn as_any(&self) -> &dyn Any;
}

/// Writes to the process's standard output.
pub struct StdoutSink;

impl ConsoleSink for StdoutSink {
    fn write_byte(&mut self, byte: u8) {
        use std::io::Write;
        let _ = std::io::stdout().write_all(&[byte]);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Records every byte written, for tests.
#[derive(Default)]
pub struct RecordingSink {
    pub bytes: Vec<u8>,
}

impl ConsoleSink for RecordingSink {
    fn write_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
