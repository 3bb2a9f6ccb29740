//! Sign/sum evaluator
//!
//! Folds the token stream into a wrapping 32-bit accumulator. Each minus
//! toggles the sign applied to the next number; plus is a no-op and does not
//! reset a pending minus, so `"--a"` is `+a` and `"-+-a"` is `+a` as well.

use alloc::sync::Arc;
use hexcalc_config::Stage;
use hexcalc_log::{debug, trace, Logger};

use crate::device::CharDevice;
use crate::error::{CalcError, InvalidReason};
use crate::lexer::{Lexer, Token};

/// Result of feeding one token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done(i32),
}

pub struct Evaluator {
    accumulator: i32,
    pending_negate: bool,
    expect_operator: bool,
    strict_operators: bool,
    logger: Arc<Logger>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    pub fn with_logger(logger: Arc<Logger>) -> Self {
        Self {
            accumulator: 0,
            pending_negate: false,
            expect_operator: false,
            strict_operators: false,
            logger,
        }
    }

    /// Reject a number that directly follows another number
    ///
    /// Off by default: `"7 8"` then evaluates to `f`.
    pub fn strict_operators(mut self, strict: bool) -> Self {
        self.strict_operators = strict;
        self
    }

    pub fn accumulator(&self) -> i32 {
        self.accumulator
    }

    pub fn pending_negate(&self) -> bool {
        self.pending_negate
    }

    /// Feed one token; `offset` is where it started in the line
    pub fn apply(&mut self, token: Token, offset: usize) -> Result<Step, CalcError> {
        match token {
            Token::Number(n) => {
                if self.strict_operators && self.expect_operator {
                    return Err(CalcError::InvalidInput {
                        offset,
                        reason: InvalidReason::MissingOperator,
                    });
                }
                self.accumulator = if self.pending_negate {
                    self.accumulator.wrapping_sub(n)
                } else {
                    self.accumulator.wrapping_add(n)
                };
                self.pending_negate = false;
                self.expect_operator = true;
            }
            Token::Plus => self.expect_operator = false,
            Token::Minus => {
                self.pending_negate = !self.pending_negate;
                self.expect_operator = false;
            }
            Token::EndOfInput => return Ok(Step::Done(self.accumulator)),
            Token::LexError { byte, offset } => {
                return Err(CalcError::InvalidInput {
                    offset,
                    reason: InvalidReason::UnexpectedByte(byte),
                });
            }
        }
        trace!(
            self.logger,
            target: Stage::Evaluator.target(),
            "{:?} -> accumulator={} negate={}",
            token,
            self.accumulator,
            self.pending_negate
        );
        Ok(Step::Continue)
    }

    /// Drive `lexer` to the end of the line
    pub fn evaluate(mut self, lexer: &mut Lexer<'_>) -> Result<i32, CalcError> {
        loop {
            let token = lexer.next_token();
            if let Step::Done(value) = self.apply(token, lexer.token_start())? {
                return Ok(value);
            }
        }
    }
}

/// Evaluate one line, writing the diagnostic to `device` on failure
pub fn calculate<D: CharDevice>(
    device: &mut D,
    lexer: &mut Lexer<'_>,
    evaluator: Evaluator,
) -> Result<i32, CalcError> {
    let logger = Arc::clone(&evaluator.logger);
    evaluator.evaluate(lexer).inspect_err(|err| {
        debug!(logger, target: Stage::Evaluator.target(), "rejected line: {:?}", err);
        device.write_str(err.diagnostic());
    })
}
