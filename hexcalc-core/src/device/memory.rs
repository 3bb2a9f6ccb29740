//! In-memory device
//!
//! Input is a byte queue, output is an append-only transcript. Suitable for
//! tests and scripted sessions where no hardware is attached.

use super::CharDevice;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDevice {
    input: VecDeque<u8>,
    output: Vec<u8>,
}

impl MemoryDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a device with `input` already queued
    pub fn with_input(input: impl AsRef<[u8]>) -> Self {
        let mut device = Self::new();
        device.push_input(input);
        device
    }

    /// Queue more bytes for the reader
    pub fn push_input(&mut self, input: impl AsRef<[u8]>) {
        self.input.extend(input.as_ref().iter().copied());
    }

    /// Whether unread input remains
    pub fn has_input(&self) -> bool {
        !self.input.is_empty()
    }

    pub fn pending_input(&self) -> usize {
        self.input.len()
    }

    /// Everything written so far
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Output decoded as UTF-8, with invalid sequences replaced
    pub fn output_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Drain the transcript, leaving the device empty for the next exchange
    pub fn take_output(&mut self) -> Vec<u8> {
        core::mem::take(&mut self.output)
    }
}

impl CharDevice for MemoryDevice {
    /// # Panics
    /// If the input queue is empty. A real device would block forever here;
    /// callers check [`MemoryDevice::has_input`] before stepping the REPL.
    fn read_byte(&mut self) -> u8 {
        match self.input.pop_front() {
            Some(byte) => byte,
            None => panic!("MemoryDevice input exhausted"),
        }
    }

    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.output.extend_from_slice(bytes);
    }
}
