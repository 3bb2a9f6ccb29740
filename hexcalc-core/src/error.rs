//! Calculator errors
//!
//! Both kinds are recovered locally: the line is dropped, a one-line
//! diagnostic goes to the device, and the REPL prompts again.

use hexcalc_config::Stage;
use thiserror::Error;

/// Why a line was rejected by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// A byte outside `[0-9a-fA-F+\- ]`
    UnexpectedByte(u8),
    /// Two numbers in a row with strict operators enabled
    MissingOperator,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// The line did not fit in the buffer
    #[error("Input too long.")]
    LineOverflow { capacity: usize },

    /// The line could not be evaluated
    #[error("Invalid input.")]
    InvalidInput { offset: usize, reason: InvalidReason },
}

impl CalcError {
    /// Exact text written to the device, CRLF included
    pub fn diagnostic(&self) -> &'static str {
        match self {
            CalcError::LineOverflow { .. } => "Input too long.\r\n",
            CalcError::InvalidInput { .. } => "Invalid input.\r\n",
        }
    }

    /// Stage that raised the error
    pub fn stage(&self) -> Stage {
        match self {
            CalcError::LineOverflow { .. } => Stage::Reader,
            CalcError::InvalidInput {
                reason: InvalidReason::UnexpectedByte(_),
                ..
            } => Stage::Lexer,
            CalcError::InvalidInput { .. } => Stage::Evaluator,
        }
    }
}
