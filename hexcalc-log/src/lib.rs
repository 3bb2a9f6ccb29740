//! hexcalc-log - 结构化日志系统
//!
//! 为 hexcalc 计算器设计的日志系统，特点：
//! - **无平台耦合**：核心只依赖 `alloc`，裸机目标同样可用
//! - **显式传递**：无全局 logger，各组件通过 `with_logger` 接收 `Arc<Logger>`
//! - **不污染协议**：日志只写入 sink，绝不写入字符设备
//! - **崩溃恢复**：环形缓冲区保留最后 N 条日志
//!
//! # 平台支持
//!
//! | Feature | 说明 | 适用场景 |
//! |---------|------|----------|
//! | 无      | `no_std` + `alloc` | 裸机 |
//! | `std` (默认) | stderr / 文件输出、`LogConfig` | 宿主 CLI |
//!
//! # 快速开始
//!
//! ```
//! use hexcalc_log::{debug, Level, LogRingBuffer, Logger};
//!
//! let ring = LogRingBuffer::new(64);
//! let logger = Logger::new(Level::Debug).with_sink(ring.clone());
//! debug!(logger, target: "hexcalc::repl", "line evaluated: {}", 7);
//! assert_eq!(ring.len(), 1);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod lock;
mod logger;
mod macros;
mod record;
mod ring_buffer;

#[cfg(feature = "std")]
mod config;

pub use logger::{LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

#[cfg(feature = "std")]
pub use logger::{FileSink, StderrSink};

#[cfg(feature = "std")]
pub use config::{LogConfig, OutputConfig};

// 宏内部使用，保证调用方无需 `extern crate alloc`
#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

/// 日志结果类型
pub type Result<T> = core::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug)]
pub enum Error {
    /// 无法识别的日志级别名称
    InvalidLevel(alloc::string::String),
    /// IO错误（仅std平台）
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidLevel(name) => write!(f, "Unknown log level '{name}'"),
            #[cfg(feature = "std")]
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
