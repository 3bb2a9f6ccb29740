//! hexcalc - A line-oriented 32-bit hexadecimal calculator
//!
//! The calculator reads `\r`-terminated lines from a byte device, sums signed
//! hexadecimal terms with wrapping arithmetic and prints the result as eight
//! lowercase hex digits.
//!
//! # Architecture
//!
//! ```text
//! hexcalc-config/  - Pure configuration data (no_std)
//! hexcalc-log/     - Structured logging with pluggable sinks (no_std + std)
//! hexcalc-core/    - Device trait, line reader, lexer, evaluator, REPL (no_std)
//! hexcalc-api/     - Hosted orchestration, global config, unified errors
//! hexcalc-cli/     - `hexcalc` binary on stdin/stdout
//! ```
//!
//! # Quick Start
//!
//! ```
//! use hexcalc_workspace::{evaluate_line, run_script, RunConfig};
//!
//! let config = RunConfig::default();
//! assert_eq!(evaluate_line("a+b", &config).unwrap().to_string(), "a+b = 00000015");
//!
//! let session = run_script(b"f-3\r", &config);
//! assert_eq!(session.transcript_lossy(), "hex> f-3\r\n0000000c\r\n");
//! ```

// 重导出各层
pub use hexcalc_api as api;
pub use hexcalc_config as config;
pub use hexcalc_core as core;
pub use hexcalc_log as log;

// 重导出常用类型
pub use hexcalc_api::{
    evaluate, evaluate_line, init_config, quick_eval, run_script, run_session, ErrorReport,
    EvalOutput, HexcalcError, RunConfig, SessionOutput,
};
pub use hexcalc_config::{HexcalcConfig, LogLevel, ReplConfig, Stage, DEFAULT_LINE_CAPACITY};
pub use hexcalc_core::{CalcError, CharDevice, MemoryDevice, Outcome, Repl, UsbFifo};
