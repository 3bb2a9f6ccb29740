//! 日志记录定义（no_std 兼容）

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::Error;

/// 日志级别
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// 逐字节 / 逐 token 跟踪
    Trace = 0,
    /// 每行的求值结果与被恢复的输入错误
    Debug = 1,
    /// 会话级事件
    Info = 2,
    /// 宿主层可恢复的问题
    Warn = 3,
    /// 宿主层故障
    Error = 4,
}

impl Level {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Trace),
            1 => Some(Level::Debug),
            2 => Some(Level::Info),
            3 => Some(Level::Warn),
            4 => Some(Level::Error),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// 大小写不敏感；`silent` 视为只保留错误
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s {
            _ if s.eq_ignore_ascii_case("trace") => Level::Trace,
            _ if s.eq_ignore_ascii_case("debug") => Level::Debug,
            _ if s.eq_ignore_ascii_case("info") => Level::Info,
            _ if s.eq_ignore_ascii_case("warn") || s.eq_ignore_ascii_case("warning") => {
                Level::Warn
            }
            _ if s.eq_ignore_ascii_case("error") || s.eq_ignore_ascii_case("silent") => {
                Level::Error
            }
            _ => return Err(Error::InvalidLevel(String::from(s))),
        };
        Ok(level)
    }
}

/// 单条日志记录
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// 时间戳（毫秒）；裸机平台为单调计数
    pub timestamp_ms: u64,
    pub level: Level,
    /// 日志目标，例如 `hexcalc::lexer`
    pub target: &'static str,
    pub message: String,
}

impl Record {
    pub fn new(level: Level, target: &'static str, message: impl Into<String>) -> Self {
        Self {
            timestamp_ms: current_timestamp_ms(),
            level,
            target,
            message: message.into(),
        }
    }

    /// 格式化为 `[hh:mm:ss.mmm] LEVEL target: message`
    pub fn format(&self) -> String {
        alloc::format!(
            "[{}] {} {}: {}",
            format_timestamp(self.timestamp_ms),
            self.level,
            self.target,
            self.message
        )
    }
}

#[cfg(feature = "std")]
fn current_timestamp_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(not(feature = "std"))]
static MONOTONIC_COUNTER: core::sync::atomic::AtomicU64 = core::sync::atomic::AtomicU64::new(0);

// 裸机没有时钟，用单调计数器保持记录顺序
#[cfg(not(feature = "std"))]
fn current_timestamp_ms() -> u64 {
    MONOTONIC_COUNTER.fetch_add(1, core::sync::atomic::Ordering::Relaxed)
}

fn format_timestamp(timestamp_ms: u64) -> String {
    let secs = timestamp_ms / 1000;
    let millis = timestamp_ms % 1000;

    let hours = (secs / 3600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    alloc::format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}
