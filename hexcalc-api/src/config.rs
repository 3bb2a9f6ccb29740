//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use hexcalc_config::{HexcalcConfig, LogLevel, ReplConfig};
use hexcalc_log::{Level, Logger};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Execution configuration
#[derive(Clone)]
pub struct RunConfig {
    /// REPL behavior (prompt, echo, strict operators)
    pub repl: ReplConfig,
    /// Logger shared by every stage
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("repl", &self.repl)
            .field("log_level", &self.logger.level())
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            repl: ReplConfig::default(),
            logger: Logger::noop(),
        }
    }
}

impl RunConfig {
    /// Build from a parsed config file; the logger is supplied by the host
    pub fn from_file_config(config: &HexcalcConfig, logger: Arc<Logger>) -> Self {
        Self {
            repl: config.repl.clone(),
            logger,
        }
    }

    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }
}

/// 配置文件中的日志级别 -> 日志系统级别
pub fn log_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::Trace,
        LogLevel::Debug => Level::Debug,
        LogLevel::Info => Level::Info,
        LogLevel::Warn => Level::Warn,
        LogLevel::Error => Level::Error,
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    if GLOBAL_CONFIG.set(config).is_err() {
        panic!("Config already initialized");
    }
}

/// Initialize global configuration unless it already is
///
/// Returns the rejected config when another caller got there first.
pub fn try_init(config: RunConfig) -> Result<(), RunConfig> {
    GLOBAL_CONFIG.set(config)
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    match GLOBAL_CONFIG.get() {
        Some(config) => config,
        None => panic!("Config not initialized"),
    }
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
