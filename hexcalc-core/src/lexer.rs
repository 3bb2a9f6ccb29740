//! Hexadecimal expression lexer
//!
//! Scans a buffered line left to right without backtracking. Only `' '` is
//! skipped as whitespace. Numbers accumulate with wrapping 32-bit arithmetic;
//! a literal longer than eight digits silently keeps its low 32 bits.

use alloc::sync::Arc;
use hexcalc_config::Stage;
use hexcalc_log::{trace, Logger};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Number(i32),
    Plus,
    Minus,
    EndOfInput,
    /// Unrecognized byte at `offset`
    LexError { byte: u8, offset: usize },
}

pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    token_start: usize,
    fused: bool,
    logger: Arc<Logger>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_logger(input, Logger::noop())
    }

    pub fn with_logger(input: &'a [u8], logger: Arc<Logger>) -> Self {
        Self {
            input,
            pos: 0,
            token_start: 0,
            fused: false,
            logger,
        }
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Byte offset where the most recent token began, after skipped spaces
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Scan the next token
    ///
    /// `EndOfInput` does not advance, so it repeats on every later call. A
    /// `LexError` leaves the cursor on the offending byte and repeats too.
    pub fn next_token(&mut self) -> Token {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
        self.token_start = self.pos;

        let token = match self.peek() {
            None => Token::EndOfInput,
            Some(byte) => match hex_digit(byte) {
                Some(digit) => self.number(digit),
                None => match byte {
                    b'+' => {
                        self.pos += 1;
                        Token::Plus
                    }
                    b'-' => {
                        self.pos += 1;
                        Token::Minus
                    }
                    _ => Token::LexError {
                        byte,
                        offset: self.pos,
                    },
                },
            },
        };

        trace!(self.logger, target: Stage::Lexer.target(), "{:?} at {}", token, self.token_start);
        token
    }

    fn number(&mut self, first: u8) -> Token {
        let mut value = i32::from(first);
        self.pos += 1;
        while let Some(digit) = self.peek().and_then(hex_digit) {
            // no overflow check: wraps like the device's native int
            value = value.wrapping_mul(16).wrapping_add(i32::from(digit));
            self.pos += 1;
        }
        Token::Number(value)
    }
}

/// Tokens up to, not including, `EndOfInput`; fused after a `LexError`
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.fused {
            return None;
        }
        match self.next_token() {
            Token::EndOfInput => None,
            token @ Token::LexError { .. } => {
                self.fused = true;
                Some(token)
            }
            token => Some(token),
        }
    }
}

/// Value of an ASCII hex digit, either case
pub fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
