//! 日志配置（std 平台专用）
//!
//! 一次性构建 logger 及其输出目标。

use crate::logger::{FileSink, StderrSink};
use crate::{Level, LogRingBuffer, Logger};
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputConfig {
    Stderr,
    /// 追加写入的文件路径
    File(String),
    /// 环形缓冲区容量
    RingBuffer(usize),
}

/// 日志配置
///
/// ```
/// use hexcalc_log::{LogConfig, Level};
///
/// let (logger, ring) = LogConfig::new(Level::Debug)
///     .with_ring_buffer(256)
///     .init()
///     .unwrap();
/// assert!(ring.is_some());
/// assert_eq!(logger.level(), Level::Debug);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 指定级别，无输出
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 构建 logger
    ///
    /// 返回 (logger, 最后一个环形缓冲区)；文件无法打开时返回错误。
    pub fn init(self) -> crate::Result<(Arc<Logger>, Option<Arc<LogRingBuffer>>)> {
        let logger = Logger::new(self.level);
        let mut ring_buffer = None;

        for output in self.outputs {
            match output {
                OutputConfig::Stderr => logger.add_sink(StderrSink),
                OutputConfig::File(path) => logger.add_sink(FileSink::new(&path)?),
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        Ok((logger, ring_buffer))
    }
}
