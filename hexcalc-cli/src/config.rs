//! CLI 配置
//!
//! 配置文件读取、命令行覆盖，以及分阶段的日志级别

use hexcalc_api::HexcalcError;
use hexcalc_config::{HexcalcConfig, LogLevel, ReplConfig, Stage};
use std::path::Path;

/// 命令行对 REPL 配置的覆盖
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplOverrides {
    pub prompt: Option<String>,
    pub no_echo: bool,
    pub strict: bool,
}

impl ReplOverrides {
    /// Flags win over file values; boolean flags can only switch behavior on
    pub fn apply(&self, mut config: ReplConfig) -> ReplConfig {
        if let Some(prompt) = &self.prompt {
            config.prompt = prompt.clone();
        }
        if self.no_echo {
            config.echo = false;
        }
        if self.strict {
            config.strict_operators = true;
        }
        config
    }
}

/// Read and parse a JSON config file
pub fn read_config_file(path: &Path) -> Result<HexcalcConfig, HexcalcError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| HexcalcError::Io(format!("cannot read '{}': {}", path.display(), e)))?;
    parse_config(&content)
        .map_err(|e| HexcalcError::Config(format!("'{}': {}", path.display(), e)))
}

pub fn parse_config(content: &str) -> Result<HexcalcConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse log level string
pub fn parse_log_level(s: &str) -> Result<LogLevel, String> {
    match s.to_lowercase().as_str() {
        "silent" => Ok(LogLevel::Error), // silent = only errors
        "error" => Ok(LogLevel::Error),
        "warn" | "warning" => Ok(LogLevel::Warn),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "trace" => Ok(LogLevel::Trace),
        _ => Err(format!("unknown log level '{}'", s)),
    }
}

/// Parse `stage=level`, e.g. `lexer=trace`
pub fn parse_stage_level(s: &str) -> Result<(Stage, LogLevel), String> {
    let (stage, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected STAGE=LEVEL, got '{}'", s))?;
    let stage = Stage::ALL
        .into_iter()
        .find(|candidate| candidate.as_str() == stage.trim())
        .ok_or_else(|| format!("unknown stage '{}'", stage))?;
    Ok((stage, parse_log_level(level.trim())?))
}

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: LogLevel,
    pub stages: Vec<(Stage, LogLevel)>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LogLevel::Warn,
            stages: Vec::new(),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific stage; the last override wins
    pub fn level_for(&self, stage: Stage) -> LogLevel {
        self.stages
            .iter()
            .rev()
            .find(|(s, _)| *s == stage)
            .map(|(_, level)| *level)
            .unwrap_or(self.global)
    }

    /// Lowest threshold across all targets, used to gate record creation
    pub fn most_verbose(&self) -> LogLevel {
        self.stages
            .iter()
            .map(|(_, level)| *level)
            .fold(self.global, Ord::min)
    }
}
