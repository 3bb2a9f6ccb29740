//! Character device capability
//!
//! The calculator only ever moves one byte at a time. Both operations block:
//! a read waits until a byte is available, a write waits until the transmit
//! side is ready. Bytes are written in the order requested.

mod memory;
mod usb_fifo;

pub use memory::MemoryDevice;
pub use usb_fifo::UsbFifo;

/// Blocking byte-in / byte-out device
pub trait CharDevice {
    /// Block until a byte is available and return it
    fn read_byte(&mut self) -> u8;

    /// Block until the transmitter is ready, then send `byte`
    fn write_byte(&mut self, byte: u8);

    fn write_bytes(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.write_byte(byte);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

impl<D: CharDevice + ?Sized> CharDevice for &mut D {
    fn read_byte(&mut self) -> u8 {
        (**self).read_byte()
    }

    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte)
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes)
    }
}
