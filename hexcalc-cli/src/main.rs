//! hexcalc CLI - Command line interface
//!
//! `hexcalc` (or `hexcalc repl`) serves the calculator on stdin/stdout.
//! `hexcalc eval <EXPR>...` evaluates each expression once.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

mod config;
mod logging;
mod platform;

use crate::config::{parse_log_level, parse_stage_level, read_config_file, LogConfig, ReplOverrides};
use crate::logging::LogFormat;
use crate::platform::{print_error_with_line, StdioDevice};
use hexcalc_api::{
    evaluate_line, init_config, run_session, HexcalcConfig, HexcalcError, LogLevel, RunConfig,
    Stage,
};
use hexcalc_log::info;

#[derive(Parser)]
#[command(
    name = "hexcalc",
    about = "Line-oriented 32-bit hexadecimal calculator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Prompt written before each line
    #[arg(long, global = true, value_name = "TEXT")]
    prompt: Option<String>,

    /// Do not echo input back
    #[arg(long, global = true)]
    no_echo: bool,

    /// Reject two numbers without an operator between them
    #[arg(long, global = true)]
    strict: bool,

    /// Log level: silent, error, warn, info, debug, trace
    #[arg(long, global = true, value_name = "LEVEL", value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    /// Per-stage log level, e.g. `lexer=trace` (repeatable)
    #[arg(long, global = true, value_name = "STAGE=LEVEL", value_parser = parse_stage_level)]
    stage_level: Vec<(Stage, LogLevel)>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session on stdin/stdout (default)
    Repl,
    /// Evaluate each expression and print `<expr> = <result>`
    ///
    /// Options go before `eval`: every later argument is an expression.
    Eval {
        #[arg(required = true, value_name = "EXPR", allow_hyphen_values = true)]
        exprs: Vec<String>,
    },
}

fn main() {
    let result = run(Cli::parse());
    if let Err(e) = &result {
        eprintln!("Error: {}", e.to_report());
    }
    process::exit(exit_code(&result));
}

/// 0 on success, 1 if an expression failed, 2 on setup failure
fn exit_code(result: &Result<i32, HexcalcError>) -> i32 {
    match result {
        Ok(code) => *code,
        Err(_) => 2,
    }
}

fn run(cli: Cli) -> Result<i32, HexcalcError> {
    let file_config = match &cli.config {
        Some(path) => read_config_file(path)?,
        None => HexcalcConfig::default(),
    };

    let overrides = ReplOverrides {
        prompt: cli.prompt.clone(),
        no_echo: cli.no_echo,
        strict: cli.strict,
    };
    let log_config = LogConfig {
        global: cli
            .log_level
            .or(file_config.log_level)
            .unwrap_or(LogLevel::Warn),
        stages: cli.stage_level.clone(),
    };

    let (logger, ring) = logging::init(&log_config, cli.log_format, cli.log_file.as_deref())?;
    logging::install_crash_dump(ring);

    let run_config = RunConfig {
        repl: overrides.apply(file_config.repl),
        logger,
    };
    info!(run_config.logger, target: "hexcalc::cli", "Starting with {:?}", run_config);

    // Initialize API config (global singleton for convenience)
    init_config(run_config.clone());

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => run_session(
            StdioDevice::stdio().with_logger(run_config.logger.clone()),
            &run_config,
        ),
        Command::Eval { exprs } => handle_eval(&exprs, &run_config, &mut io::stdout().lock()),
    }
}

/// Print each result; exit status 1 if any expression failed
fn handle_eval(
    exprs: &[String],
    config: &RunConfig,
    out: &mut impl Write,
) -> Result<i32, HexcalcError> {
    let mut failed = false;
    for expr in exprs {
        match evaluate_line(expr, config) {
            Ok(output) => writeln!(out, "{}", output)?,
            Err(e) => {
                print_error_with_line(&e, expr);
                failed = true;
            }
        }
    }
    out.flush()?;
    Ok(i32::from(failed))
}
