//! hexcalc Core - Line calculator (pure logic, device access behind a trait)
//!
//! Contains the line reader, lexer, evaluator, hex formatter and REPL driver.
//! All per-line state lives in fixed-size buffers; the only I/O happens
//! through [`CharDevice`], so the same code drives a memory-mapped FIFO on
//! bare metal and an in-memory queue in tests.
//!
//! Configuration is passed explicitly via parameters, not via global state.
//!
//! ```
//! use hexcalc_core::{MemoryDevice, Outcome, Repl};
//!
//! let mut repl = Repl::new(MemoryDevice::with_input(b"f-3\r"));
//! assert_eq!(repl.process_one(), Outcome::Value(0xc));
//! assert_eq!(repl.device().output(), b"hex> f-3\r\n0000000c\r\n");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod device;
pub mod error;
pub mod eval;
pub mod hex;
pub mod lexer;
pub mod line;
pub mod repl;

pub use device::{CharDevice, MemoryDevice, UsbFifo};
pub use error::{CalcError, InvalidReason};
pub use eval::{calculate, Evaluator};
pub use hex::{format_hex32, write_hex32, Hex32};
pub use lexer::{Lexer, Token};
pub use line::{LineBuffer, LineReader};
pub use repl::{Outcome, Repl};

// Re-export config types from hexcalc-config
pub use hexcalc_config::{ReplConfig, Stage, DEFAULT_LINE_CAPACITY, DEFAULT_PROMPT};
