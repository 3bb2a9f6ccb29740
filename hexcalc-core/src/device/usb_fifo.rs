//! Memory-mapped USB FIFO
//!
//! Register block, one byte each:
//!
//! | Offset | Read               | Write        |
//! |--------|--------------------|--------------|
//! | 0      | padding            | padding      |
//! | 1      | transmitter ready  | byte to host |
//! | 2      | receive ready      |              |
//! | 3      | byte from host     |              |

use super::CharDevice;
use core::ptr::{addr_of, addr_of_mut};

#[repr(C)]
struct Registers {
    #[allow(dead_code)]
    pad0: u8,
    to_usb: u8,
    from_usb_ready: u8,
    from_usb_byte: u8,
}

/// Polling driver for the FIFO; both directions busy-wait on a ready flag
pub struct UsbFifo {
    regs: *mut Registers,
}

impl UsbFifo {
    /// Base address of the FIFO on the reference board
    pub const DEFAULT_BASE: usize = 0x30000;

    /// # Safety
    /// `base` must be the address of a live FIFO register block (or memory
    /// laid out like one), valid for volatile reads and writes for as long as
    /// the driver exists, and not accessed through any other handle.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            regs: base as *mut Registers,
        }
    }
}

impl CharDevice for UsbFifo {
    fn read_byte(&mut self) -> u8 {
        unsafe {
            while addr_of!((*self.regs).from_usb_ready).read_volatile() == 0 {
                core::hint::spin_loop();
            }
            addr_of!((*self.regs).from_usb_byte).read_volatile()
        }
    }

    fn write_byte(&mut self, byte: u8) {
        unsafe {
            while addr_of!((*self.regs).to_usb).read_volatile() == 0 {
                core::hint::spin_loop();
            }
            addr_of_mut!((*self.regs).to_usb).write_volatile(byte);
        }
    }
}
