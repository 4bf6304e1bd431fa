//! Serial input
//!
//! The command loop takes at most one byte per poll and never blocks: it
//! asks the port whether data is ready, then consumes a single byte.

use embedded_io::{Read, ReadReady};

/// Anything the command loop can poll for the next received byte.
pub trait ByteSource {
    /// Take the next byte if one has arrived
    fn poll_byte(&mut self) -> Option<u8>;
}

/// Reads from a serial port only when it reports data ready.
///
/// Read errors look the same as an idle line.
pub struct PolledReader<R> {
    reader: R,
}

impl<R> PolledReader<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    pub const fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + ReadReady> ByteSource for PolledReader<R> {
    fn poll_byte(&mut self) -> Option<u8> {
        if !self.reader.read_ready().ok()? {
            return None;
        }
        let mut buf = [0u8; 1];
        match self.reader.read(&mut buf) {
            Ok(1) => Some(buf[0]),
            _ => None,
        }
    }
}
