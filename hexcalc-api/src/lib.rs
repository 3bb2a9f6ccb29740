//! hexcalc API - Session orchestration layer
//!
//! Provides the hosted entry points, including:
//! - One-shot evaluation of a single expression
//! - Scripted sessions over an in-memory device
//! - Interactive sessions over any [`CharDevice`]
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (HexcalcError)
//!
//! For CLI convenience, this crate provides a global singleton API
//! (`evaluate`, `quick_eval`). For library use, prefer the entry points that
//! take a `&RunConfig`: [`evaluate_line`], [`run_script`] and [`run_session`].

use hexcalc_log::{debug, info};
use std::sync::Arc;

use hexcalc_core::{
    CharDevice, Evaluator, InvalidReason, Lexer, LineBuffer, LineReader, MemoryDevice, Repl,
};

// Re-export config
pub mod config;
pub use config::{
    config as get_config, init as init_config, is_initialized, log_level, try_init, RunConfig,
};

// Re-export config types from hexcalc_config
pub use hexcalc_config::{HexcalcConfig, LogLevel, ReplConfig, Stage};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ErrorDetails, ErrorReport, HexcalcError};
pub use types::{EvalOutput, SessionOutput};

// Re-export core types
pub use hexcalc_config;
pub use hexcalc_core::{CalcError, Hex32, Outcome};

/// Evaluate one expression with explicit configuration
///
/// The expression goes through the same line reader as an interactive
/// session, so the capacity limit applies. Nothing is echoed.
pub fn evaluate_line(line: &str, config: &RunConfig) -> Result<EvalOutput, HexcalcError> {
    if let Some(offset) = line.bytes().position(|b| b == b'\r') {
        return Err(CalcError::InvalidInput {
            offset,
            reason: InvalidReason::UnexpectedByte(b'\r'),
        }
        .into());
    }

    // diagnostics written by the reader and evaluator land here and are dropped
    let mut device = MemoryDevice::with_input(line.as_bytes());
    device.push_input(b"\r");

    let mut buffer: LineBuffer = LineBuffer::new();
    LineReader::with_logger(Arc::clone(&config.logger))
        .echo(false)
        .read_line(&mut device, &mut buffer)?;

    let mut lexer = Lexer::with_logger(buffer.as_bytes(), Arc::clone(&config.logger));
    let value = Evaluator::with_logger(Arc::clone(&config.logger))
        .strict_operators(config.repl.strict_operators)
        .evaluate(&mut lexer)?;

    debug!(config.logger, target: Stage::Repl.target(), "evaluated {:?} = {}", line, Hex32(value));
    Ok(EvalOutput {
        expr: line.to_string(),
        value,
    })
}

/// Run a scripted session over `input`, stopping when it is exhausted
///
/// A trailing line without `\r` is completed as if the user had pressed
/// enter.
pub fn run_script(input: &[u8], config: &RunConfig) -> SessionOutput {
    let mut device = MemoryDevice::with_input(input);
    if !input.is_empty() && !input.ends_with(b"\r") {
        device.push_input(b"\r");
    }

    info!(config.logger, target: Stage::Repl.target(), "Starting scripted session");
    let mut repl = Repl::with_config(device, config.repl.clone()).with_logger(Arc::clone(&config.logger));
    let mut outcomes = Vec::new();
    while repl.device().has_input() {
        outcomes.push(repl.process_one());
    }
    info!(
        config.logger,
        target: Stage::Repl.target(),
        "Scripted session completed: {} lines",
        outcomes.len()
    );

    SessionOutput {
        outcomes,
        transcript: repl.into_device().take_output(),
    }
}

/// Serve an interactive session on `device` forever
pub fn run_session<D: CharDevice>(device: D, config: &RunConfig) -> ! {
    info!(config.logger, target: Stage::Repl.target(), "Starting interactive session");
    Repl::with_config(device, config.repl.clone())
        .with_logger(Arc::clone(&config.logger))
        .run()
}

// ==================== Legacy API (using global config) ====================

/// Evaluate one expression (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn evaluate(line: &str) -> Result<EvalOutput, HexcalcError> {
    evaluate_line(line, get_config())
}

/// Quick evaluation with default config (auto-initializes if needed)
pub fn quick_eval(line: &str) -> Result<EvalOutput, HexcalcError> {
    let _ = try_init(RunConfig::default());
    evaluate(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_with_explicit_config() {
        let config = RunConfig::default();
        let output = evaluate_line("f-3", &config).unwrap();
        assert_eq!(output.value, 0xc);
        assert_eq!(output.to_string(), "f-3 = 0000000c");
    }

    #[test]
    fn test_evaluate_reports_offset() {
        let err = evaluate_line("1 + q", &RunConfig::default()).unwrap_err();
        assert_eq!(err.phase(), "lexer");
        assert_eq!(err.offset(), Some(4));
    }

    #[test]
    fn test_evaluate_rejects_carriage_return() {
        let err = evaluate_line("1\r2", &RunConfig::default()).unwrap_err();
        assert_eq!(err.offset(), Some(1));
    }

    #[test]
    fn test_evaluate_overflow() {
        let line = "a".repeat(200);
        let err = evaluate_line(&line, &RunConfig::default()).unwrap_err();
        assert_eq!(
            err,
            HexcalcError::Calc(CalcError::LineOverflow { capacity: 128 })
        );
    }

    #[test]
    fn test_quick_eval() {
        let output = quick_eval("a+b").unwrap();
        assert_eq!(output.value, 0x15);
    }

    #[test]
    fn test_run_script_completes_last_line() {
        let output = run_script(b"1\r2", &RunConfig::default());
        assert_eq!(output.outcomes, [Outcome::Value(1), Outcome::Value(2)]);
        assert_eq!(
            output.transcript_lossy(),
            "hex> 1\r\n00000001\r\nhex> 2\r\n00000002\r\n"
        );
    }

    #[test]
    fn test_run_script_empty_input() {
        let output = run_script(b"", &RunConfig::default());
        assert!(output.outcomes.is_empty());
        assert!(output.transcript.is_empty());
    }
}
