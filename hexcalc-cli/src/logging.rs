//! CLI 日志系统初始化
//!
//! 组件通过 `hexcalc-log` 记录日志；CLI 决定记录的去向：
//! - `plain`：`hexcalc-log` 自带的 stderr / 文件 sink
//! - `pretty` / `compact` / `json`：转发到 `tracing`，由 `tracing-subscriber`
//!   按阶段过滤并渲染
//!
//! stdout 承载计算器协议，日志只写 stderr 或文件。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use clap::ValueEnum;
use hexcalc_api::{log_level, HexcalcError};
use hexcalc_config::{LogLevel, Stage};
use hexcalc_log::{LogConfig as SinkConfig, LogRingBuffer, LogSink, Logger, Record};
use tracing_subscriber::{
    filter::Targets, fmt, fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
    Registry,
};

use crate::config::LogConfig;

/// Records kept for the crash dump
pub const CRASH_DUMP_CAPACITY: usize = 256;

/// 日志输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// hexcalc-log 原生单行格式
    #[default]
    Plain,
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 把 hexcalc-log 记录转发为 tracing 事件
///
/// tracing 的 target 必须是编译期常量，因此逐个展开已知阶段；
/// 其他 target 归入 `hexcalc`。
pub struct TracingSink;

macro_rules! emit {
    ($target:expr, $record:expr) => {
        match $record.level {
            hexcalc_log::Level::Trace => {
                tracing::trace!(target: $target, "{}", $record.message)
            }
            hexcalc_log::Level::Debug => {
                tracing::debug!(target: $target, "{}", $record.message)
            }
            hexcalc_log::Level::Info => tracing::info!(target: $target, "{}", $record.message),
            hexcalc_log::Level::Warn => tracing::warn!(target: $target, "{}", $record.message),
            hexcalc_log::Level::Error => {
                tracing::error!(target: $target, "{}", $record.message)
            }
        }
    };
}

impl LogSink for TracingSink {
    fn write(&self, record: &Record) {
        match record.target {
            "hexcalc::reader" => emit!("hexcalc::reader", record),
            "hexcalc::lexer" => emit!("hexcalc::lexer", record),
            "hexcalc::evaluator" => emit!("hexcalc::evaluator", record),
            "hexcalc::formatter" => emit!("hexcalc::formatter", record),
            "hexcalc::repl" => emit!("hexcalc::repl", record),
            _ => emit!("hexcalc", record),
        }
    }
}

/// 按记录所属阶段过滤的 sink
///
/// hexcalc-log 的 logger 只有一个阈值；`plain` 格式用它实现与 `Targets`
/// 相同的分阶段过滤。未知 target 使用全局级别。
pub struct StageFilter<S> {
    config: LogConfig,
    inner: S,
}

impl<S: LogSink> StageFilter<S> {
    pub fn new(config: &LogConfig, inner: S) -> Self {
        Self {
            config: config.clone(),
            inner,
        }
    }

    fn threshold(&self, target: &str) -> hexcalc_log::Level {
        let level = Stage::ALL
            .into_iter()
            .find(|stage| stage.target() == target)
            .map(|stage| self.config.level_for(stage))
            .unwrap_or(self.config.global);
        log_level(level)
    }
}

impl<S: LogSink> LogSink for StageFilter<S> {
    fn write(&self, record: &Record) {
        if record.level >= self.threshold(record.target) {
            self.inner.write(record);
        }
    }
}

/// hexcalc 日志级别 -> tracing 日志级别
pub fn tracing_level(level: LogLevel) -> tracing::Level {
    match level {
        LogLevel::Trace => tracing::Level::TRACE,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Error => tracing::Level::ERROR,
    }
}

/// 按阶段构建过滤器
pub fn targets(log_config: &LogConfig) -> Targets {
    Stage::ALL.into_iter().fold(
        Targets::new().with_default(tracing_level(log_config.global)),
        |targets, stage| {
            targets.with_target(stage.target(), tracing_level(log_config.level_for(stage)))
        },
    )
}

/// 使用指定格式和日志配置初始化日志系统
///
/// Returns the logger handed to every component and the crash-dump ring.
pub fn init(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(Arc<Logger>, Arc<LogRingBuffer>), HexcalcError> {
    let ring = LogRingBuffer::new(CRASH_DUMP_CAPACITY);

    let logger = match format {
        LogFormat::Plain => {
            let sinks = SinkConfig::new(log_level(log_config.most_verbose()));
            let sinks = match file {
                Some(path) => sinks.with_file(path.to_string_lossy()),
                None => sinks.with_stderr(),
            };
            let (output, _) = sinks.init()?;
            Logger::new(log_level(log_config.most_verbose()))
                .with_sink(StageFilter::new(log_config, output))
        }
        structured => {
            init_subscriber(log_config, structured, file)?;
            Logger::new(log_level(log_config.most_verbose())).with_sink(TracingSink)
        }
    };
    logger.add_sink(Arc::clone(&ring));

    Ok((logger, ring))
}

fn init_subscriber(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<&Path>,
) -> Result<(), HexcalcError> {
    let layer = match file {
        Some(path) => {
            let file_handle = OpenOptions::new().create(true).append(true).open(path)?;
            create_format_layer(format, Mutex::new(file_handle), false)
        }
        None => create_format_layer(format, io::stderr, true),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(targets(log_config)))
        .try_init()
        .map_err(|e| HexcalcError::Config(format!("cannot install log subscriber: {}", e)))
}

/// Create formatter layer based on format
fn create_format_layer<M>(
    format: LogFormat,
    make_writer: M,
    ansi: bool,
) -> Box<dyn Layer<Registry> + Send + Sync>
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(ansi)
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact | LogFormat::Plain => fmt::layer()
            .compact()
            .with_ansi(ansi)
            .with_target(true)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

/// 崩溃时把最后的日志写到 stderr
pub fn install_crash_dump(ring: Arc<LogRingBuffer>) {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        default_hook(info);
        if let Some(header) = crash_dump_header(&ring) {
            eprintln!("{}", header);
            eprintln!("{}", ring.dump());
        }
    }));
}

fn crash_dump_header(ring: &LogRingBuffer) -> Option<String> {
    let stats = ring.stats();
    match (stats.record_count, stats.dropped_count) {
        (0, _) => None,
        (kept, 0) => Some(format!("--- last {} log records ---", kept)),
        (kept, dropped) => Some(format!(
            "--- last {} log records ({} older dropped) ---",
            kept, dropped
        )),
    }
}
