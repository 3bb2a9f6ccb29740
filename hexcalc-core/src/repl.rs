//! Read-evaluate-print loop
//!
//! One iteration: prompt, read a line, evaluate it, print the result or a
//! diagnostic. Errors never leave the loop; a rejected line only costs the
//! user a retype.

use alloc::sync::Arc;
use hexcalc_config::{ReplConfig, Stage, DEFAULT_LINE_CAPACITY};
use hexcalc_log::{debug, trace, Logger};

use crate::device::CharDevice;
use crate::error::CalcError;
use crate::eval::{calculate, Evaluator};
use crate::hex::{write_hex32, Hex32};
use crate::lexer::Lexer;
use crate::line::{LineBuffer, LineReader};

/// What happened to one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Evaluated and printed
    Value(i32),
    /// Rejected with "Input too long."
    Overflow,
    /// Rejected with "Invalid input."
    Invalid,
}

impl From<Result<i32, CalcError>> for Outcome {
    fn from(result: Result<i32, CalcError>) -> Self {
        match result {
            Ok(value) => Outcome::Value(value),
            Err(CalcError::LineOverflow { .. }) => Outcome::Overflow,
            Err(CalcError::InvalidInput { .. }) => Outcome::Invalid,
        }
    }
}

pub struct Repl<D, const N: usize = DEFAULT_LINE_CAPACITY> {
    device: D,
    config: ReplConfig,
    buffer: LineBuffer<N>,
    logger: Arc<Logger>,
    lines: u64,
}

impl<D: CharDevice> Repl<D> {
    /// REPL with the default prompt, echo on and a 128-byte line buffer
    pub fn new(device: D) -> Self {
        Self::with_config(device, ReplConfig::default())
    }

    pub fn with_config(device: D, config: ReplConfig) -> Self {
        Self::with_capacity(device, config)
    }
}

impl<D: CharDevice, const N: usize> Repl<D, N> {
    /// REPL with an `N`-byte line buffer, e.g. `Repl::<_, 16>::with_capacity(..)`
    pub fn with_capacity(device: D, config: ReplConfig) -> Self {
        Self {
            device,
            config,
            buffer: LineBuffer::new(),
            logger: Logger::noop(),
            lines: 0,
        }
    }

    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Lines processed so far, rejected ones included
    pub fn lines_processed(&self) -> u64 {
        self.lines
    }

    /// Run one prompt/read/evaluate/print cycle
    pub fn process_one(&mut self) -> Outcome {
        self.device.write_str(&self.config.prompt);
        self.lines += 1;

        let reader = LineReader::with_logger(Arc::clone(&self.logger)).echo(self.config.echo);
        let result = reader
            .read_line(&mut self.device, &mut self.buffer)
            .and_then(|_| {
                let mut lexer = Lexer::with_logger(self.buffer.as_bytes(), Arc::clone(&self.logger));
                let evaluator = Evaluator::with_logger(Arc::clone(&self.logger))
                    .strict_operators(self.config.strict_operators);
                calculate(&mut self.device, &mut lexer, evaluator)
            });

        if let Ok(value) = result {
            write_hex32(&mut self.device, value);
            trace!(self.logger, target: Stage::Formatter.target(), "printed {}", Hex32(value));
        }

        let outcome = Outcome::from(result);
        debug!(
            self.logger,
            target: Stage::Repl.target(),
            "line {}: {:?}",
            self.lines,
            outcome
        );
        outcome
    }

    /// Serve lines forever
    pub fn run(&mut self) -> ! {
        debug!(
            self.logger,
            target: Stage::Repl.target(),
            "starting, line capacity {}",
            N
        );
        loop {
            self.process_one();
        }
    }
}
