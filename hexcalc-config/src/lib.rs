//! hexcalc Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all hexcalc crates,
//! and builds without `std` so the bare-metal core can use it.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Line buffer capacity used by the REPL, terminator slot included
pub const DEFAULT_LINE_CAPACITY: usize = 128;

/// Prompt emitted before every line
pub const DEFAULT_PROMPT: &str = "hex> ";

/// Configuration for the read-evaluate-print loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Prompt written before each line is read
    pub prompt: String,
    /// Whether received bytes are echoed back to the device
    pub echo: bool,
    /// Reject two numbers in a row without an operator between them
    pub strict_operators: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: String::from(DEFAULT_PROMPT),
            echo: true,
            strict_operators: false,
        }
    }
}

/// Log verbosity, as written in config files
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Processing stage, used to scope log targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Reader,
    Lexer,
    Evaluator,
    Formatter,
    Repl,
}

impl Stage {
    /// All stages, in pipeline order
    pub const ALL: [Stage; 5] = [
        Stage::Reader,
        Stage::Lexer,
        Stage::Evaluator,
        Stage::Formatter,
        Stage::Repl,
    ];

    /// Get the string name of the stage
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Reader => "reader",
            Stage::Lexer => "lexer",
            Stage::Evaluator => "evaluator",
            Stage::Formatter => "formatter",
            Stage::Repl => "repl",
        }
    }

    /// Get the log target name for this stage
    pub fn target(&self) -> &'static str {
        match self {
            Stage::Reader => "hexcalc::reader",
            Stage::Lexer => "hexcalc::lexer",
            Stage::Evaluator => "hexcalc::evaluator",
            Stage::Formatter => "hexcalc::formatter",
            Stage::Repl => "hexcalc::repl",
        }
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexcalcConfig {
    /// REPL behavior
    pub repl: ReplConfig,
    /// Log level; `None` leaves the caller's default in place
    pub log_level: Option<LogLevel>,
}
